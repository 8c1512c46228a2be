use std::io;
use std::sync::mpsc::{self, Receiver, Sender};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use tracing::debug;

use super::board_view::BoardView;
use crate::game::{GameEvent, GameSettings, MoveResult, TurnController};

pub struct App {
    controller: TurnController<Sender<GameEvent>>,
    events: Receiver<GameEvent>,
    view: BoardView,
    /// Settings for the next game, edited by the color pickers
    next_settings: GameSettings,
    selected_column: usize,
    should_quit: bool,
    hint: Option<String>,
}

impl App {
    pub fn new(settings: GameSettings) -> Self {
        let (tx, rx) = mpsc::channel();
        let selected_column = settings.width / 2;
        let mut app = App {
            controller: TurnController::new(settings.clone(), tx),
            events: rx,
            view: BoardView::new(),
            next_settings: settings,
            selected_column,
            should_quit: false,
            hint: None,
        };
        app.drain_events();
        app
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
            self.drain_events();
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Move everything the controller emitted into the render model
    fn drain_events(&mut self) {
        for event in self.events.try_iter() {
            self.view.apply(&event);
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        self.hint = None;
        let width = self.view.width.max(1);

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.selected_column = (self.selected_column + width - 1) % width;
            }
            KeyCode::Right => {
                self.selected_column = (self.selected_column + 1) % width;
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                let result = self.controller.select_column(self.selected_column);
                if result == MoveResult::Ignored && !self.view.is_game_over() {
                    self.hint = Some("Column is full".to_string());
                }
            }
            KeyCode::Char('1') => self.cycle_color(0),
            KeyCode::Char('2') => self.cycle_color(1),
            KeyCode::Char('r') => {
                debug!("new game requested");
                self.controller.restart(self.next_settings.clone());
                self.selected_column = self.next_settings.width / 2;
            }
            _ => {}
        }
    }

    fn cycle_color(&mut self, idx: usize) {
        let spec = &mut self.next_settings.players[idx];
        spec.color = spec.color.next();
        self.hint = Some(format!(
            "Player {} color: {} (press R to start a new game)",
            spec.label,
            spec.color.name()
        ));
    }

    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(
            frame,
            &self.view,
            self.selected_column,
            &self.next_settings,
            self.hint.as_deref(),
        );
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(GameSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{PieceColor, PlayerId};
    use crossterm::event::KeyModifiers;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
        app.drain_events();
    }

    #[test]
    fn test_starts_in_middle_column() {
        let app = App::default();
        assert_eq!(app.selected_column, 3);
        assert_eq!(app.view.width, 7);
    }

    #[test]
    fn test_selection_wraps() {
        let mut app = App::default();
        for _ in 0..4 {
            press(&mut app, KeyCode::Right);
        }
        assert_eq!(app.selected_column, 0);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.selected_column, 6);
    }

    #[test]
    fn test_drop_updates_view() {
        let mut app = App::default();
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.view.get(5, 3), Some(PlayerId::FIRST));
        assert_eq!(app.view.active, PlayerId::SECOND);
    }

    #[test]
    fn test_full_column_hint() {
        let mut app = App::default();
        for _ in 0..6 {
            press(&mut app, KeyCode::Char(' '));
        }
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.hint.as_deref(), Some("Column is full"));
    }

    #[test]
    fn test_color_applies_on_new_game() {
        let mut app = App::default();
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.view.players.second().color(), PieceColor::Yellow);

        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.view.players.second().color(), PieceColor::Blue);
    }

    #[test]
    fn test_quit() {
        let mut app = App::default();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }
}
