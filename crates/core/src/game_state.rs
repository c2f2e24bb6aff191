//! Game state module - manages the complete game state
//!
//! This module ties together the board, the falling piece, the piece source and
//! scoring. It owns the phase machine:
//!
//! ```text
//! StartMenu --Confirm--> Active <--Pause--> Paused
//!                          |
//!                  spawn blocked
//!                          v
//! StartMenu <--Confirm-- GameOver
//! ```
//!
//! Time only advances through [`GameState::tick`], which takes the elapsed
//! milliseconds explicitly, so gravity and the line-clear delay are fully
//! deterministic.

use arrayvec::ArrayVec;

use crate::board::{Board, FullRows};
use crate::piece::Piece;
use crate::rng::PieceRng;
use crate::scoring::{fall_interval_ms, level_for_lines, line_clear_points};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::*;

/// Maximum number of undrained events kept between frames.
pub const EVENT_CAPACITY: usize = 16;

/// Events produced since the last [`GameState::take_events`].
pub type GameEvents = ArrayVec<GameEvent, EVENT_CAPACITY>;

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    phase: Phase,
    board: Board,
    active: Option<Piece>,
    next: PieceKind,
    pieces: PieceRng,
    score: u32,
    level: u32,
    lines: u32,
    fall_interval_ms: u32,
    drop_timer_ms: u32,
    /// Full rows found at the last lock, removed once the clear delay runs out.
    pending_clear: FullRows,
    clear_timer_ms: u32,
    clear_delay_ms: u32,
    events: GameEvents,
}

impl GameState {
    /// Create a new game with the given RNG seed, sitting in the start menu.
    pub fn new(seed: u32) -> Self {
        let mut pieces = PieceRng::new(seed);
        let next = pieces.next_kind();

        Self {
            phase: Phase::StartMenu,
            board: Board::new(),
            active: None,
            next,
            pieces,
            score: 0,
            level: 1,
            lines: 0,
            fall_interval_ms: fall_interval_ms(1),
            drop_timer_ms: 0,
            pending_clear: FullRows::new(),
            clear_timer_ms: 0,
            clear_delay_ms: LINE_CLEAR_DELAY_MS,
            events: GameEvents::new(),
        }
    }

    /// Override how long full rows flash before they are removed.
    ///
    /// With 0 the rows go as soon as the piece locks.
    pub fn with_line_clear_delay_ms(mut self, delay_ms: u32) -> Self {
        self.clear_delay_ms = delay_ms;
        self
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn fall_interval_ms(&self) -> u32 {
        self.fall_interval_ms
    }

    pub fn next_piece(&self) -> PieceKind {
        self.next
    }

    pub fn active(&self) -> Option<Piece> {
        self.active
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable access to the locked cells, for scripted setups.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Rows flashing before removal (empty when no clear is pending).
    pub fn pending_clear(&self) -> &[usize] {
        &self.pending_clear
    }

    /// Take every event recorded since the last call.
    pub fn take_events(&mut self) -> GameEvents {
        std::mem::take(&mut self.events)
    }

    fn emit(&mut self, event: GameEvent) {
        // Events beyond capacity are dropped; they never feed back into the game.
        let _ = self.events.try_push(event);
    }

    /// Leave the start menu and begin a fresh game.
    ///
    /// Returns false outside the start menu.
    pub fn start(&mut self) -> bool {
        if self.phase != Phase::StartMenu {
            return false;
        }
        self.reset();
        self.phase = Phase::Active;
        log::debug!("game started (seed {})", self.pieces.seed());
        true
    }

    fn reset(&mut self) {
        self.board.reset();
        self.score = 0;
        self.level = 1;
        self.lines = 0;
        self.fall_interval_ms = fall_interval_ms(1);
        self.drop_timer_ms = 0;
        self.pending_clear.clear();
        self.clear_timer_ms = 0;
        self.events.clear();

        self.active = Some(Piece::spawn(self.pieces.next_kind()));
        self.next = self.pieces.next_kind();
    }

    /// Apply a game action
    ///
    /// Returns whether the action changed anything. Actions that make no
    /// sense in the current phase are ignored.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match (self.phase, action) {
            (Phase::StartMenu, GameAction::Confirm) => self.start(),
            (Phase::GameOver, GameAction::Confirm) => {
                self.phase = Phase::StartMenu;
                true
            }
            (Phase::Active, GameAction::Pause) => {
                self.phase = Phase::Paused;
                true
            }
            (Phase::Paused, GameAction::Pause) => {
                self.phase = Phase::Active;
                true
            }
            (Phase::Active, GameAction::MoveLeft) => self.try_move(-1, 0),
            (Phase::Active, GameAction::MoveRight) => self.try_move(1, 0),
            (Phase::Active, GameAction::SoftDrop) => self.try_move(0, 1),
            (Phase::Active, GameAction::Rotate) => self.try_rotate(),
            (Phase::Active, GameAction::HardDrop) => self.hard_drop(),
            _ => false,
        }
    }

    /// Try to move the active piece
    pub(crate) fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        let Some(active) = self.active.as_mut() else {
            return false;
        };
        if !active.try_move(dx, dy, &self.board) {
            return false;
        }
        if dx != 0 {
            self.emit(GameEvent::Move);
        }
        true
    }

    /// Try to rotate the active piece clockwise
    pub(crate) fn try_rotate(&mut self) -> bool {
        let Some(active) = self.active.as_mut() else {
            return false;
        };
        if !active.try_rotate(&self.board) {
            return false;
        }
        self.emit(GameEvent::Rotate);
        true
    }

    /// Drop the active piece as far as it goes and lock it immediately,
    /// without waiting for gravity.
    pub(crate) fn hard_drop(&mut self) -> bool {
        let Some(active) = self.active.as_mut() else {
            return false;
        };
        while active.try_move(0, 1, &self.board) {}
        self.lock_piece();
        true
    }

    /// Lock the active piece onto the board and handle line clears
    ///
    /// With full rows, spawning waits for the clear delay (if any); otherwise
    /// the next piece spawns right away.
    pub fn lock_piece(&mut self) {
        let Some(active) = self.active.take() else {
            return;
        };

        active.lock(&mut self.board);
        self.emit(GameEvent::Lock);

        let full = self.board.find_full_rows();
        if full.is_empty() {
            self.spawn_next();
        } else {
            self.pending_clear = full;
            self.clear_timer_ms = 0;
            if self.clear_delay_ms == 0 {
                self.finish_line_clear();
            }
        }
    }

    /// Remove the pending rows, score them and bring in the next piece.
    fn finish_line_clear(&mut self) {
        let rows = std::mem::take(&mut self.pending_clear);
        let cleared = self.board.clear_rows(&rows);
        self.clear_timer_ms = 0;

        self.score = self
            .score
            .saturating_add(line_clear_points(cleared, self.level));
        self.lines += cleared as u32;

        let level = level_for_lines(self.lines);
        if level != self.level {
            log::debug!("level {} -> {}", self.level, level);
            self.level = level;
            self.fall_interval_ms = fall_interval_ms(level);
        }

        self.emit(GameEvent::LineClear);
        self.spawn_next();
    }

    /// Promote the next piece to active and draw a new preview.
    ///
    /// If the spawn position is blocked the game ends and no piece is placed.
    fn spawn_next(&mut self) -> bool {
        let piece = Piece::spawn(self.next);
        self.next = self.pieces.next_kind();
        self.drop_timer_ms = 0;

        if !piece.is_valid_position(&self.board) {
            self.active = None;
            self.phase = Phase::GameOver;
            self.emit(GameEvent::GameOver);
            log::debug!(
                "game over: score {} level {} lines {}",
                self.score,
                self.level,
                self.lines
            );
            return false;
        }

        self.active = Some(piece);
        true
    }

    /// Main game tick - advance gravity and the line-clear delay
    ///
    /// At most one gravity step happens per call. Returns true if the board
    /// or the active piece changed.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if self.phase != Phase::Active {
            return false;
        }

        if !self.pending_clear.is_empty() {
            self.clear_timer_ms = self.clear_timer_ms.saturating_add(elapsed_ms);
            if self.clear_timer_ms >= self.clear_delay_ms {
                self.finish_line_clear();
                return true;
            }
            return false;
        }

        if self.active.is_none() {
            return false;
        }

        self.drop_timer_ms = self.drop_timer_ms.saturating_add(elapsed_ms);
        if self.drop_timer_ms < self.fall_interval_ms {
            return false;
        }
        self.drop_timer_ms = 0;

        if !self.try_move(0, 1) {
            self.lock_piece();
        }
        true
    }

    /// Calculate the ghost piece Y position (where piece would land)
    pub fn ghost_y(&self) -> Option<i8> {
        let active = self.active?;
        Some(active.y + active.drop_distance(&self.board))
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_u8_grid(&mut out.board);

        out.active = self.active.map(ActiveSnapshot::from);
        out.ghost_y = self.ghost_y();
        out.next = self.next;
        out.phase = self.phase;
        out.score = self.score;
        out.level = self.level;
        out.lines = self.lines;
        out.clearing = [false; GRID_HEIGHT as usize];
        for &y in &self.pending_clear {
            out.clearing[y] = true;
        }
        out.clear_elapsed_ms = self.clear_timer_ms;
        out.clear_delay_ms = self.clear_delay_ms;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
