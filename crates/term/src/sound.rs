//! Sound effects through the terminal bell.
//!
//! There is no audio device here: a cue is one or more BEL characters written
//! to the terminal. Output failures disable the board instead of interrupting
//! the game.

use std::io::{self, Write};

use crate::types::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// One or more rows removed
    LineClear,
    /// The next piece could not spawn
    GameOver,
}

impl SoundEffect {
    /// Cue for a game event, if it has one.
    pub fn for_event(event: GameEvent) -> Option<Self> {
        match event {
            GameEvent::LineClear => Some(SoundEffect::LineClear),
            GameEvent::GameOver => Some(SoundEffect::GameOver),
            GameEvent::Move | GameEvent::Rotate | GameEvent::Lock => None,
        }
    }

    fn bells(self) -> &'static [u8] {
        match self {
            SoundEffect::LineClear => b"\x07",
            SoundEffect::GameOver => b"\x07\x07",
        }
    }
}

/// Plays game event cues on a terminal.
pub struct SoundBoard<W: Write = io::Stdout> {
    out: W,
    muted: bool,
}

impl Default for SoundBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl SoundBoard {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl<W: Write> SoundBoard<W> {
    pub fn with_writer(out: W) -> Self {
        Self { out, muted: false }
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Play the cues for a batch of events. Returns how many were played.
    pub fn play_events(&mut self, events: &[GameEvent]) -> usize {
        events
            .iter()
            .filter_map(|&event| SoundEffect::for_event(event))
            .filter(|&effect| self.play(effect))
            .count()
    }

    /// Play one cue. A write error mutes the board for the rest of the session.
    pub fn play(&mut self, effect: SoundEffect) -> bool {
        if self.muted {
            return false;
        }
        let result = self
            .out
            .write_all(effect.bells())
            .and_then(|()| self.out.flush());
        if let Err(err) = result {
            log::warn!("terminal bell failed, sound disabled: {err}");
            self.muted = true;
            return false;
        }
        true
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn only_clears_and_game_over_ring() {
        let mut board = SoundBoard::with_writer(Vec::new());
        let played = board.play_events(&[
            GameEvent::Move,
            GameEvent::Rotate,
            GameEvent::Lock,
            GameEvent::LineClear,
            GameEvent::GameOver,
        ]);
        assert_eq!(played, 2);
        assert_eq!(board.into_inner(), b"\x07\x07\x07".to_vec());
    }

    #[test]
    fn muted_board_is_silent() {
        let mut board = SoundBoard::with_writer(Vec::new());
        board.set_muted(true);
        assert!(!board.play(SoundEffect::LineClear));
        assert!(board.into_inner().is_empty());
    }

    #[test]
    fn write_failure_mutes_instead_of_erroring() {
        let mut board = SoundBoard::with_writer(Broken);
        assert!(!board.play(SoundEffect::GameOver));
        assert!(board.is_muted());
        assert_eq!(board.play_events(&[GameEvent::LineClear]), 0);
    }
}
