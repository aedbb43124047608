//! Grid Arcade runner (default binary).
//!
//! `grid-arcade [snake|tetris|grid]`
//!
//! Uses crossterm for input and the framebuffer renderer from
//! `grid_arcade::term`. Logs go to a file (see `grid_arcade::config`).

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind, MouseButton, MouseEventKind};
use log::{error, info};

use grid_arcade::config::{ArcadeConfig, GameChoice};
use grid_arcade::core::{Game, Grid, SimpleRng, SnakeEngine, TetrisEngine};
use grid_arcade::input::{handle_key_event, should_quit, KeyRepeat};
use grid_arcade::logging;
use grid_arcade::term::{FrameBuffer, GridView, PanelInfo, TerminalRenderer, Viewport};
use grid_arcade::types::{
    GameStatus, ACTIVE_COLOR, FRAME_MS, SNAKE_GRID_HEIGHT, SNAKE_GRID_WIDTH, TETRIS_GRID_HEIGHT,
    TETRIS_GRID_WIDTH,
};

const DEMO_GRID_SIZE: (u16, u16) = (20, 20);

fn main() -> Result<()> {
    let config = ArcadeConfig::from_env().with_args(std::env::args().skip(1))?;
    logging::setup(&config.log_path, config.debug)?;
    info!(
        "starting {} (seed {}, {:?} stepping)",
        config.game.as_str(),
        config.seed,
        config.step_policy
    );

    let mut term = TerminalRenderer::new().with_mouse_capture(config.game == GameChoice::Grid);
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(err) = &result {
        error!("{:#}", err);
    }
    result
}

fn run(term: &mut TerminalRenderer, config: &ArcadeConfig) -> Result<()> {
    let rng = SimpleRng::new(config.seed);
    let now = Instant::now();
    match config.game {
        GameChoice::Snake => {
            let grid = Grid::new(SNAKE_GRID_WIDTH, SNAKE_GRID_HEIGHT);
            let mut game = SnakeEngine::new(&grid, config.snake_config(), rng, now);
            // Terminal auto-repeat would queue turns faster than the snake moves.
            run_game(term, &mut game, false)
        }
        GameChoice::Tetris => {
            let grid = Grid::new(TETRIS_GRID_WIDTH, TETRIS_GRID_HEIGHT);
            let mut game = TetrisEngine::new(&grid, config.tetris_config(), rng, now);
            run_game(term, &mut game, true)
        }
        GameChoice::Grid => run_grid_demo(term),
    }
}

fn frame_timeout(last_frame: Instant, frame: Duration) -> Duration {
    frame
        .checked_sub(last_frame.elapsed())
        .unwrap_or(Duration::ZERO)
}

fn viewport() -> Viewport {
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    Viewport::new(w, h)
}

fn run_game<G: Game>(term: &mut TerminalRenderer, game: &mut G, key_repeat: bool) -> Result<()> {
    let view = GridView::default();
    let (width, height) = game.grid_size();
    let mut grid = Grid::new(width, height);
    let mut fb = FrameBuffer::new(0, 0);
    let mut repeat = KeyRepeat::new(Instant::now());

    let frame = Duration::from_millis(FRAME_MS as u64);
    let mut last_frame = Instant::now();

    loop {
        if event::poll(frame_timeout(last_frame, frame))? {
            let now = Instant::now();
            match event::read()? {
                Event::Key(key) => match key.kind {
                    KeyEventKind::Press => {
                        if should_quit(key) {
                            return Ok(());
                        }
                        let action = handle_key_event(key).and_then(|action| {
                            if key_repeat {
                                repeat.press(action, now)
                            } else {
                                Some(action)
                            }
                        });
                        if let Some(action) = action {
                            game.apply_action(action, now);
                        }
                    }
                    KeyEventKind::Repeat => {
                        // Held keys repeat through `KeyRepeat`, not the terminal.
                    }
                    KeyEventKind::Release => {
                        if let Some(action) = handle_key_event(key) {
                            repeat.release(action);
                        }
                    }
                },
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        let now = Instant::now();
        let elapsed = now.saturating_duration_since(last_frame);
        if elapsed < frame {
            continue;
        }
        last_frame = now;

        if key_repeat {
            for action in repeat.update(elapsed.as_millis() as u32, now) {
                game.apply_action(action, now);
            }
        }
        game.propagate(now);

        grid.clear();
        game.draw(&mut grid);
        let panel = PanelInfo {
            title: game.title(),
            score: game.score(),
            paused: game.paused(),
            status: game.status(),
            preview: game.preview(),
        };
        view.render_into(&grid, &panel, viewport(), &mut fb);
        term.draw_swap(&mut fb)?;
    }
}

/// Click a cell to toggle it.
fn run_grid_demo(term: &mut TerminalRenderer) -> Result<()> {
    let view = GridView::default();
    let (width, height) = DEMO_GRID_SIZE;
    let mut grid = Grid::new(width, height);
    grid.set((0, 0), Some(ACTIVE_COLOR));
    grid.set_layout(view.layout_for(grid.size(), viewport()));
    let mut fb = FrameBuffer::new(0, 0);

    let frame = Duration::from_millis(FRAME_MS as u64);
    let mut last_frame = Instant::now();

    loop {
        if event::poll(frame_timeout(last_frame, frame))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press && should_quit(key) => {
                    return Ok(());
                }
                Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                    let point = (mouse.column as i32, mouse.row as i32);
                    if let Some(pos) = grid.map_point_to_cell(point) {
                        grid.flip(pos, ACTIVE_COLOR);
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        if last_frame.elapsed() < frame {
            continue;
        }
        last_frame = Instant::now();

        let viewport = viewport();
        grid.set_layout(view.layout_for(grid.size(), viewport));
        let panel = PanelInfo {
            title: "GRID",
            score: grid.occupied().count() as u32,
            paused: false,
            status: GameStatus::Active,
            preview: None,
        };
        view.render_into(&grid, &panel, viewport, &mut fb);
        term.draw_swap(&mut fb)?;
    }
}
