//! Tetris engine tests through the public API
//!
//! With `StepRng::new(0, 0)` every roll is an I piece in its spawn
//! orientation: a vertical bar in column 2 of its 4x4 matrix.

use std::time::{Duration, Instant};

use grid_arcade::core::{Grid, SimpleRng, TetrisConfig, TetrisEngine, TurnError};
use grid_arcade::types::{GameStatus, PieceKind};
use rand::rngs::mock::StepRng;

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

fn bars(width: u16, height: u16) -> (TetrisEngine<StepRng>, Instant) {
    let t0 = Instant::now();
    let grid = Grid::new(width, height);
    (
        TetrisEngine::new(&grid, TetrisConfig::default(), StepRng::new(0, 0), t0),
        t0,
    )
}

/// Move the falling bar so it occupies column `col`.
fn shift_to_column(engine: &mut TetrisEngine<StepRng>, col: i16) {
    let dx = col - (engine.anchor().0 + 2);
    for _ in 0..dx.abs() {
        assert!(engine.try_move(dx.signum(), 0));
    }
}

/// Let the piece fall as far as it goes, then settle it.
fn hard_drop<R: rand::Rng>(engine: &mut TetrisEngine<R>) -> Result<(), TurnError> {
    while engine.try_move(0, 1) {}
    engine.advance_turn()
}

#[test]
fn test_spawn_is_centered() {
    let (engine, _) = bars(4, 8);
    assert_eq!(engine.current().kind, PieceKind::I);
    assert_eq!(engine.anchor(), (0, 0));
    assert_eq!(
        engine.current_cells().as_slice(),
        &[(2, 0), (2, 1), (2, 2), (2, 3)]
    );
}

#[test]
fn test_tetris_clear_scores_1000() {
    let (mut engine, _) = bars(4, 8);

    for col in [0, 1, 3] {
        shift_to_column(&mut engine, col);
        hard_drop(&mut engine).unwrap();
        assert_eq!(engine.score(), 0);
    }
    assert_eq!(engine.placed().occupied().count(), 12);

    // Last bar fills column 2 and completes rows 4..=7.
    hard_drop(&mut engine).unwrap();
    assert_eq!(engine.lines(), 4);
    assert_eq!(engine.score(), 4 * 5 * 50);
    assert_eq!(engine.placed().occupied().count(), 0);
}

#[test]
fn test_settled_piece_keeps_its_color() {
    let (mut engine, _) = bars(4, 8);
    hard_drop(&mut engine).unwrap();
    for (_, color) in engine.placed().occupied() {
        assert_eq!(color, PieceKind::I.color());
    }
}

#[test]
fn test_walls_block_moves() {
    let (mut engine, _) = bars(4, 8);
    shift_to_column(&mut engine, 0);
    assert!(!engine.try_move(-1, 0));
    shift_to_column(&mut engine, 3);
    assert!(!engine.try_move(1, 0));
}

#[test]
fn test_collides_is_translation_consistent() {
    let (mut engine, _) = bars(6, 10);
    hard_drop(&mut engine).unwrap();

    let shape = engine.current().shape;
    for ay in -3..12 {
        for ax in -4..8 {
            let expected = shape.cells().iter().any(|&(dx, dy)| {
                let pos = (ax + dx, ay + dy);
                !engine.placed().contains(pos) || engine.placed().get(pos).is_some()
            });
            assert_eq!(engine.collides(&shape, (ax, ay)), expected, "anchor ({}, {})", ax, ay);
        }
    }
}

#[test]
fn test_stacking_ends_round_then_restarts() {
    let t0 = Instant::now();
    let grid = Grid::new(10, 20);
    let mut engine = TetrisEngine::new(&grid, TetrisConfig::default(), SimpleRng::new(3), t0);

    let mut ended = false;
    for _ in 0..200 {
        if let Err(err) = hard_drop(&mut engine) {
            assert!(matches!(err, TurnError::GameOver { .. }));
            ended = true;
            break;
        }
    }
    assert!(ended, "pieces stacked in the middle should top out");

    // Drive it through propagate: the failing turn, then an immediate restart.
    let mut engine = TetrisEngine::new(&grid, TetrisConfig::default(), SimpleRng::new(3), t0);
    let mut now = t0;
    while engine.status() == GameStatus::Active {
        while engine.try_move(0, 1) {}
        now += ms(250);
        engine.propagate(now);
    }
    assert_eq!(engine.status(), GameStatus::GameOver);
    assert!(!engine.try_move(1, 0));
    assert!(!engine.try_rotate());

    engine.propagate(now + ms(16));
    assert_eq!(engine.status(), GameStatus::Active);
    assert_eq!(engine.placed().occupied().count(), 0);
    assert_eq!(engine.score(), 0);
}

#[test]
fn test_gravity_follows_move_delay() {
    let (mut engine, t0) = bars(4, 8);
    engine.propagate(t0 + ms(249));
    assert_eq!(engine.anchor(), (0, 0));
    engine.propagate(t0 + ms(250));
    assert_eq!(engine.anchor(), (0, 1));
}

#[test]
fn test_pause_freezes_gravity_and_moves() {
    let (mut engine, t0) = bars(4, 8);
    engine.pause_toggle(t0);
    engine.propagate(t0 + ms(1000));
    assert_eq!(engine.anchor(), (0, 0));
    assert!(!engine.try_move(0, 1));

    engine.pause_toggle(t0 + ms(1000));
    assert!(engine.try_move(0, 1));
}

#[test]
fn test_next_piece_is_promoted() {
    let t0 = Instant::now();
    let grid = Grid::new(10, 20);
    let mut engine = TetrisEngine::new(&grid, TetrisConfig::default(), SimpleRng::new(11), t0);
    let next = engine.next_piece();
    hard_drop(&mut engine).unwrap();
    assert_eq!(engine.current(), next);
    assert_eq!(engine.anchor(), engine.spawn_anchor(&next.shape));
}

#[test]
fn test_bar_taller_than_board_never_locks() {
    let (mut engine, t0) = bars(10, 3);
    assert_eq!(engine.status(), GameStatus::GameOver);
    assert!(!engine.try_move(1, 0));

    engine.propagate(t0 + ms(250));
    engine.propagate(t0 + ms(500));
    assert_eq!(engine.status(), GameStatus::GameOver);
    assert_eq!(engine.placed().occupied().count(), 0);
}

#[test]
fn test_widest_board_spawns_in_the_middle() {
    let (engine, _) = bars(u16::MAX, 4);
    assert_eq!(engine.size(), (i16::MAX as u16, 4));
    assert_eq!(engine.status(), GameStatus::Active);
    assert_eq!(engine.anchor(), ((i16::MAX - 4) / 2, 0));
}
