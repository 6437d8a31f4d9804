use std::io;
use std::time::Instant;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{backend::Backend, layout::Rect, Terminal};
use tracing::{debug, info};

use super::board_widget::{CELL_HEIGHT, CELL_WIDTH};
use crate::config::MAX_DIMENSION;
use crate::engine::Engine;
use crate::game::{Commit, GameOutcome};

/// Pointer coordinates at or past the far border are pulled just inside the
/// last cell so the right and bottom border edges stay reachable.
const BORDER_INSET: f64 = 1e-3;

pub struct App {
    engine: Engine,
    /// Keyboard pointer in board units
    pointer: (f64, f64),
    /// Where the board was last drawn
    board_area: Rect,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(engine: Engine) -> Self {
        App {
            engine,
            pointer: (0.5, 0.0),
            board_area: Rect::default(),
            should_quit: false,
            message: None,
        }
    }

    /// Main application loop: draw, handle input until the next tick is due,
    /// then advance the engine.
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: Into<io::Error>,
    {
        let interval = self.engine.config().tick_interval();
        let mut next_tick = Instant::now() + interval;

        loop {
            terminal
                .draw(|f| self.render(f))
                .map_err(Into::<io::Error>::into)?;

            if self.should_quit {
                break;
            }

            let timeout = next_tick.saturating_duration_since(Instant::now());
            if event::poll(timeout)? {
                self.handle_event(event::read()?);
            }

            let now = Instant::now();
            if now >= next_tick {
                self.engine.tick();
                next_tick += interval;
                // Missed ticks are dropped, not replayed
                if next_tick < now {
                    next_tick = now + interval;
                }
            }
        }
        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            _ => {}
        }
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        let dimension = self.engine.state().board().dimension();

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => self.move_pointer(-0.5, 0.0),
            KeyCode::Right => self.move_pointer(0.5, 0.0),
            KeyCode::Up => self.move_pointer(0.0, -0.5),
            KeyCode::Down => self.move_pointer(0.0, 0.5),
            KeyCode::Enter | KeyCode::Char(' ') => self.confirm(),
            KeyCode::Char('+') | KeyCode::Char('=') => {
                if dimension < MAX_DIMENSION {
                    self.resize(dimension + 1);
                } else {
                    self.message =
                        Some(format!("Largest board is {MAX_DIMENSION}x{MAX_DIMENSION}"));
                }
            }
            KeyCode::Char('-') => {
                if dimension > 1 {
                    self.resize(dimension - 1);
                } else {
                    self.message = Some("Smallest board is 1x1".to_string());
                }
            }
            KeyCode::Char('n') => {
                self.engine.new_game();
                self.message = Some(self.starting_message());
            }
            _ => {}
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        let dimension = self.engine.state().board().dimension();
        let Some((x, y)) = to_board(self.board_area, mouse.column, mouse.row, dimension) else {
            return;
        };

        match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(MouseButton::Left) => {
                self.engine.on_pointer_move(x, y);
            }
            MouseEventKind::Down(MouseButton::Left) => {
                self.engine.on_pointer_move(x, y);
                self.confirm();
            }
            _ => {}
        }
    }

    fn move_pointer(&mut self, dx: f64, dy: f64) {
        let n = self.engine.state().board().dimension() as f64;
        let (x, y) = self.pointer;
        self.pointer = ((x + dx).clamp(0.0, n), (y + dy).clamp(0.0, n));

        let (x, y) = self.pointer;
        self.engine.on_pointer_move(pull_inside(x, n), pull_inside(y, n));
    }

    fn confirm(&mut self) {
        match self.engine.on_confirm() {
            Commit::Applied { game_over: true, .. } => {
                self.message = self.engine.state().outcome().map(|outcome| match outcome {
                    GameOutcome::Winner(player) => format!("{} wins!", player.name()),
                    GameOutcome::Draw => "It's a draw!".to_string(),
                });
            }
            Commit::Applied { completed, .. } if completed > 0 => {
                self.message = Some(format!("Closed {completed}, go again"));
            }
            Commit::Applied { .. } => self.message = None,
            Commit::Ignored => debug!("confirm ignored"),
        }
    }

    fn resize(&mut self, dimension: usize) {
        match self.engine.set_dimension(dimension) {
            Ok(()) => {
                info!(dimension, "board resized from the terminal");
                self.pointer = (0.5, 0.0);
                self.message = Some(format!(
                    "{dimension}x{dimension} board. {}",
                    self.starting_message()
                ));
            }
            Err(e) => self.message = Some(e.to_string()),
        }
    }

    fn starting_message(&self) -> String {
        format!("{} moves first", self.engine.state().current_turn().name())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut ratatui::Frame) {
        let snapshot = self.engine.snapshot();
        self.board_area = super::game_view::render(frame, &snapshot, &self.message);
    }
}

/// Translate a terminal position to board units, sampling the middle of the
/// terminal cell. `None` until the board has been drawn.
fn to_board(area: Rect, column: u16, row: u16, dimension: usize) -> Option<(f64, f64)> {
    if area.is_empty() {
        return None;
    }
    let n = dimension as f64;
    let x = (f64::from(column) - f64::from(area.x) + 0.5) / f64::from(CELL_WIDTH);
    let y = (f64::from(row) - f64::from(area.y) + 0.5) / f64::from(CELL_HEIGHT);
    Some((pull_inside(x, n), pull_inside(y, n)))
}

/// Map the far border line `[n, n + 0.5)` onto the last cell.
fn pull_inside(v: f64, n: f64) -> f64 {
    if v >= n && v < n + 0.5 {
        n - BORDER_INSET
    } else {
        v
    }
}
