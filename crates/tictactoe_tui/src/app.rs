//! Application state and event loop.

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use derive_getters::Getters;
use ratatui::{Terminal, backend::Backend};
use tictactoe_engine::{GameEngine, Position};
use tracing::{debug, info, instrument};

use crate::input::{digit_index, move_cursor};
use crate::theme::Theme;
use crate::ui;

/// The result of handling a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Keep running.
    Stay,
    /// Exit the application cleanly.
    Quit,
}

/// Main application state: one engine, a cursor and the theme.
#[derive(Debug, Getters)]
pub struct App {
    engine: GameEngine,
    cursor: Position,
    theme: Theme,
}

impl App {
    /// Creates a new application with a fresh game and the cursor centered.
    #[instrument(skip(theme))]
    pub fn new(theme: Theme) -> Self {
        Self {
            engine: GameEngine::new(),
            cursor: Position::Center,
            theme,
        }
    }

    /// Handles a key event.
    ///
    /// Plays go straight to the engine, which ignores illegal ones.
    #[instrument(skip(self), fields(cursor = %self.cursor))]
    pub fn handle_key(&mut self, key: KeyEvent) -> Transition {
        if key.kind != KeyEventKind::Press {
            return Transition::Stay;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return Transition::Quit,
            KeyCode::Char('r') | KeyCode::Char('R') => {
                info!("Resetting game");
                self.engine.reset();
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.cursor.to_index()),
            KeyCode::Char(c) => {
                if let Some(index) = digit_index(c) {
                    self.play(index);
                }
            }
            code @ (KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right) => {
                self.cursor = move_cursor(self.cursor, code);
            }
            _ => {}
        }
        Transition::Stay
    }

    fn play(&mut self, index: usize) {
        debug!(index, "Playing cell");
        self.engine.apply_move(index);
        if let Some(pos) = Position::from_index(index) {
            self.cursor = pos;
        }
    }

    /// Runs the event loop until the user quits.
    ///
    /// Redraws after every event; there is no other source of change.
    #[instrument(skip(self, terminal))]
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> anyhow::Result<()>
    where
        <B as Backend>::Error: Send + Sync + 'static,
    {
        info!("Starting game loop");

        loop {
            let app = &*self;
            terminal.draw(|frame| ui::draw(frame, app))?;

            if let Event::Key(key) = event::read()?
                && self.handle_key(key) == Transition::Quit
            {
                info!("User quit");
                return Ok(());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use tictactoe_engine::{Mark, Outcome};

    fn press(app: &mut App, code: KeyCode) -> Transition {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_digits_play_cells() {
        let mut app = App::new(Theme::default());
        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Char('5'));

        assert_eq!(app.engine().last_move(), Some(Position::Center));
        assert_eq!(app.engine().turn(), Mark::X);
        assert_eq!(*app.cursor(), Position::Center);
    }

    #[test]
    fn test_enter_plays_cursor() {
        let mut app = App::new(Theme::default());
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.engine().last_move(), Some(Position::TopLeft));
    }

    #[test]
    fn test_occupied_play_ignored() {
        let mut app = App::new(Theme::default());
        press(&mut app, KeyCode::Char(' '));
        let before = app.engine().clone();
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.engine(), &before);
    }

    #[test]
    fn test_reset_key() {
        let mut app = App::new(Theme::default());
        for c in ['1', '4', '2', '5', '3'] {
            press(&mut app, KeyCode::Char(c));
        }
        assert_eq!(app.engine().outcome().winner(), Some(Mark::X));

        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.engine().outcome(), &Outcome::InProgress);
        assert!(app.engine().board().is_blank());
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::new(Theme::default());
        assert_eq!(press(&mut app, KeyCode::Char('q')), Transition::Quit);
        assert_eq!(press(&mut app, KeyCode::Esc), Transition::Quit);
        assert_eq!(press(&mut app, KeyCode::Char('x')), Transition::Stay);
    }

    #[test]
    fn test_release_events_ignored() {
        let mut app = App::new(Theme::default());
        let mut key = KeyEvent::new(KeyCode::Char('5'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;

        assert_eq!(app.handle_key(key), Transition::Stay);
        assert!(app.engine().board().is_blank());
    }
}
