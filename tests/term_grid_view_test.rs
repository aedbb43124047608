//! GridView rendering tests

use std::time::Instant;

use grid_arcade::core::{Game, Grid, PieceSet, SimpleRng, TetrisConfig, TetrisEngine};
use grid_arcade::term::{FrameBuffer, GridView, PanelInfo, Viewport};
use grid_arcade::types::{GameStatus, PieceKind, Rgb, EMPTY_COLOR};

fn find_text(fb: &FrameBuffer, text: &str) -> Option<(u16, u16)> {
    (0..fb.height()).find_map(|y| {
        fb.row_text(y)
            .chars()
            .collect::<Vec<_>>()
            .windows(text.chars().count())
            .position(|w| w.iter().copied().eq(text.chars()))
            .map(|x| (x as u16, y))
    })
}

/// Cell offsets painted in `color` below the NEXT label.
fn preview_cells(fb: &FrameBuffer, color: Rgb) -> Vec<(i16, i16)> {
    let (x, y) = find_text(fb, "NEXT").expect("next label");
    let mut cells = Vec::new();
    for dy in 0..4u16 {
        for dx in 0..4u16 {
            let glyph = fb.get(x + dx * 2, y + 1 + dy).unwrap();
            if glyph.style.bg == color {
                cells.push((dx as i16, dy as i16));
            }
        }
    }
    cells
}

fn panel(score: u32) -> PanelInfo {
    PanelInfo {
        title: "SNAKE",
        score,
        paused: false,
        status: GameStatus::Active,
        preview: None,
    }
}

#[test]
fn test_score_is_zero_padded() {
    let view = GridView::default();
    let grid = Grid::new(10, 10);
    let fb = view.render(&grid, &panel(1200), Viewport::new(60, 20));

    let (x, y) = find_text(&fb, "SCORE").expect("score label");
    let value: String = fb.row_text(y + 1).chars().skip(x as usize).take(8).collect();
    assert_eq!(value, "00001200");
    assert!(find_text(&fb, "SNAKE").is_some());
}

#[test]
fn test_overlays() {
    let view = GridView::default();
    let grid = Grid::new(10, 10);
    let viewport = Viewport::new(60, 20);

    let paused = PanelInfo {
        paused: true,
        ..panel(0)
    };
    assert!(find_text(&view.render(&grid, &paused, viewport), "PAUSED").is_some());

    let over = PanelInfo {
        status: GameStatus::GameOver,
        ..panel(0)
    };
    let fb = view.render(&grid, &over, viewport);
    assert!(find_text(&fb, "GAME OVER").is_some());
    assert!(find_text(&fb, "PAUSED").is_none());
}

#[test]
fn test_next_preview_uses_piece_color() {
    let view = GridView::default();
    let grid = Grid::new(10, 20);
    let info = PanelInfo {
        preview: Some(PieceSet::standard().piece(PieceKind::O, 0)),
        ..panel(0)
    };
    let fb = view.render(&grid, &info, Viewport::new(60, 24));

    let (x, y) = find_text(&fb, "NEXT").expect("next label");
    let glyph = fb.get(x, y + 1).unwrap();
    assert_eq!(glyph.style.bg, PieceKind::O.color());
}

#[test]
fn test_next_preview_draws_the_spawn_orientation() {
    let view = GridView::default();
    let grid = Grid::new(10, 20);
    let info = PanelInfo {
        preview: Some(PieceSet::standard().piece(PieceKind::I, 1)),
        ..panel(0)
    };
    let fb = view.render(&grid, &info, Viewport::new(60, 24));
    assert_eq!(
        preview_cells(&fb, PieceKind::I.color()),
        vec![(0, 2), (1, 2), (2, 2), (3, 2)]
    );
}

#[test]
fn test_next_preview_matches_next_piece() {
    let t0 = Instant::now();
    let grid = Grid::new(10, 20);
    for seed in 0..8 {
        let game = TetrisEngine::new(&grid, TetrisConfig::default(), SimpleRng::new(seed), t0);
        let next = game.next_piece();
        let info = PanelInfo {
            preview: game.preview(),
            ..panel(0)
        };
        let fb = GridView::default().render(&grid, &info, Viewport::new(60, 24));
        assert_eq!(
            preview_cells(&fb, next.kind.color()),
            next.shape.cells().to_vec(),
            "seed {}",
            seed
        );
    }
}

#[test]
fn test_game_cells_and_empty_cells() {
    let t0 = Instant::now();
    let mut grid = Grid::new(10, 20);
    let game = TetrisEngine::new(&grid, TetrisConfig::default(), SimpleRng::new(2), t0);
    Game::draw(&game, &mut grid);

    let view = GridView::default();
    let viewport = Viewport::new(60, 24);
    let fb = view.render(&grid, &panel(0), viewport);
    grid.set_layout(view.layout_for(grid.size(), viewport));

    let color = game.current().kind.color();
    for pos in game.current_cells() {
        let (px, py, _, _) = grid.cell_rect(pos);
        assert_eq!(fb.get(px as u16, py as u16).unwrap().style.bg, color);
    }

    let (px, py, _, _) = grid.cell_rect((0, 19));
    let empty: Rgb = fb.get(px as u16, py as u16).unwrap().style.bg;
    assert_eq!(empty, EMPTY_COLOR);
}
