//! Integration tests for the game controller, driven the way the binary drives it

mod common;

use common::fill_row;

use arcade_tetris::core::{line_clear_points, GameState};
use arcade_tetris::types::{
    GameAction, GameEvent, Phase, PieceKind, GRID_HEIGHT, LINE_CLEAR_DELAY_MS, SPAWN_X, SPAWN_Y,
};

fn started(seed: u32) -> GameState {
    let mut state = GameState::new(seed);
    assert!(state.apply_action(GameAction::Confirm));
    state
}

/// Fill the row the active piece will land its bottom on, leaving exactly the
/// cells the piece will occupy. A hard drop then completes that row.
fn complete_landing_row(state: &mut GameState) -> i8 {
    let piece = state.active().expect("active piece");
    let distance = piece.drop_distance(state.board());
    let landed: Vec<(i8, i8)> = piece.cells().map(|(x, y)| (x, y + distance)).collect();
    let bottom = landed.iter().map(|&(_, y)| y).max().expect("four cells");
    let holes: Vec<i8> = landed
        .iter()
        .filter(|&&(_, y)| y == bottom)
        .map(|&(x, _)| x)
        .collect();
    fill_row(state.board_mut(), bottom, PieceKind::Z, &holes);
    bottom
}

#[test]
fn test_game_lifecycle() {
    let mut state = GameState::new(12345);
    assert_eq!(state.phase(), Phase::StartMenu);
    assert!(state.active().is_none());

    assert!(state.apply_action(GameAction::Confirm));
    assert_eq!(state.phase(), Phase::Active);

    let active = state.active().expect("spawned");
    assert_eq!((active.x, active.y, active.rotation), (SPAWN_X, SPAWN_Y, 0));
    assert_eq!((state.score(), state.level(), state.lines()), (0, 1, 0));
    assert_eq!(state.board().occupied_count(), 0);
}

#[test]
fn test_start_menu_ignores_gameplay() {
    let mut state = GameState::new(7);
    for action in [
        GameAction::MoveLeft,
        GameAction::MoveRight,
        GameAction::SoftDrop,
        GameAction::Rotate,
        GameAction::HardDrop,
        GameAction::Pause,
    ] {
        assert!(!state.apply_action(action), "{action:?}");
    }
    assert!(!state.tick(5_000));
    assert_eq!(state.phase(), Phase::StartMenu);
}

#[test]
fn test_gravity_follows_fall_interval() {
    let mut state = started(99);
    let y0 = state.active().map(|p| p.y);

    assert!(!state.tick(999));
    assert_eq!(state.active().map(|p| p.y), y0);

    assert!(state.tick(1));
    assert_eq!(state.active().map(|p| p.y), y0.map(|y| y + 1));
}

#[test]
fn test_hard_drop_locks_and_spawns() {
    let mut state = started(3);
    let next = state.next_piece();

    assert!(state.apply_action(GameAction::HardDrop));
    assert_eq!(state.board().occupied_count(), 4);
    assert_eq!(state.active().map(|p| p.kind), Some(next));
    assert_eq!(state.score(), 0);

    let events = state.take_events();
    assert_eq!(events.as_slice(), &[GameEvent::Lock]);
}

#[test]
fn test_line_clear_waits_for_delay() {
    let mut state = started(42);
    let row = complete_landing_row(&mut state);

    state.apply_action(GameAction::HardDrop);
    assert_eq!(state.pending_clear(), &[row as usize]);
    assert!(state.active().is_none());
    assert!(!state.apply_action(GameAction::MoveLeft));

    let snap = state.snapshot();
    assert!(snap.clearing[row as usize]);
    assert!(snap.is_clearing());

    assert!(!state.tick(499));
    assert_eq!(state.lines(), 0);

    assert!(state.tick(1));
    assert!(state.pending_clear().is_empty());
    assert_eq!(state.lines(), 1);
    assert_eq!(state.score(), 40);
    assert!(state.active().is_some());
    assert!(state.board().find_full_rows().is_empty());

    let events = state.take_events();
    assert!(events.contains(&GameEvent::LineClear));
}

#[test]
fn test_pause_during_line_clear_holds_the_flash() {
    let mut state = started(5);
    complete_landing_row(&mut state);
    state.apply_action(GameAction::HardDrop);

    assert!(state.apply_action(GameAction::Pause));
    assert!(!state.tick(10_000));
    assert_eq!(state.lines(), 0);

    assert!(state.apply_action(GameAction::Pause));
    assert!(state.tick(500));
    assert_eq!(state.lines(), 1);
}

#[test]
fn test_level_progression() {
    let mut state = GameState::new(2024).with_line_clear_delay_ms(0);
    state.apply_action(GameAction::Confirm);

    let mut expected_score = 0;
    for cleared in 1..=11u32 {
        let level = state.level();
        complete_landing_row(&mut state);
        state.apply_action(GameAction::HardDrop);
        assert!(state.pending_clear().is_empty());

        expected_score += line_clear_points(1, level);
        assert_eq!(state.lines(), cleared);
        assert_eq!(state.score(), expected_score);
        assert_eq!(state.phase(), Phase::Active);
    }

    assert_eq!(state.level(), 2);
    assert_eq!(state.fall_interval_ms(), 950);
    assert_eq!(state.score(), 10 * 40 + 80);
}

#[test]
fn test_game_over_and_restart() {
    let mut state = started(8);
    // Fill everything below the spawn rows, one hole per row so nothing clears.
    for y in 1..GRID_HEIGHT as i8 {
        fill_row(state.board_mut(), y, PieceKind::L, &[0]);
    }

    state.apply_action(GameAction::HardDrop);
    assert_eq!(state.phase(), Phase::GameOver);
    assert!(state.active().is_none());
    assert!(state.take_events().contains(&GameEvent::GameOver));

    // Nothing moves any more.
    assert!(!state.tick(10_000));
    assert!(!state.apply_action(GameAction::HardDrop));

    assert!(state.apply_action(GameAction::Confirm));
    assert_eq!(state.phase(), Phase::StartMenu);
    assert!(state.apply_action(GameAction::Confirm));
    assert_eq!(state.phase(), Phase::Active);
    assert_eq!(state.board().occupied_count(), 0);
    assert_eq!((state.score(), state.level(), state.lines()), (0, 1, 0));
}

#[test]
fn test_blocked_spawn_after_line_clear_ends_game() {
    let mut state = started(8);
    state.take_events();

    // A stack over the spawn area that the clear will push down one row.
    for y in 0..4 {
        for x in 3..8 {
            state.board_mut().set(x, y, Some(PieceKind::T));
        }
    }
    let bottom = GRID_HEIGHT as i8 - 1;
    fill_row(state.board_mut(), bottom, PieceKind::I, &[]);

    state.lock_piece();
    assert_eq!(state.phase(), Phase::Active);
    assert_eq!(state.pending_clear(), &[bottom as usize]);
    assert!(state.active().is_none());

    assert!(state.tick(LINE_CLEAR_DELAY_MS));
    assert_eq!(state.phase(), Phase::GameOver);
    assert!(state.active().is_none());
    assert!(state.pending_clear().is_empty());
    assert_eq!(state.lines(), 1);
    assert_eq!(state.score(), line_clear_points(1, 1));
    assert_eq!(
        state.take_events().as_slice(),
        &[GameEvent::Lock, GameEvent::LineClear, GameEvent::GameOver]
    );
}

#[test]
fn test_game_pause() {
    let mut state = started(12345);
    let before = state.active();

    assert!(state.apply_action(GameAction::Pause));
    assert_eq!(state.phase(), Phase::Paused);
    assert!(!state.apply_action(GameAction::MoveLeft));
    assert!(!state.tick(5_000));
    assert_eq!(state.active(), before);

    assert!(state.apply_action(GameAction::Pause));
    assert_eq!(state.phase(), Phase::Active);
}

#[test]
fn test_same_seed_same_game() {
    let script = [
        GameAction::MoveLeft,
        GameAction::Rotate,
        GameAction::HardDrop,
        GameAction::MoveRight,
        GameAction::MoveRight,
        GameAction::HardDrop,
        GameAction::SoftDrop,
    ];

    let mut a = started(777);
    let mut b = started(777);
    for action in script {
        assert_eq!(a.apply_action(action), b.apply_action(action));
        a.tick(333);
        b.tick(333);
    }
    assert_eq!(a.snapshot(), b.snapshot());
}
