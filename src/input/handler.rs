use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::{Direction, Input};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    Game(Input),
    Quit,
}

pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key_event(&self, key: KeyEvent) -> KeyAction {
        // Handle Ctrl+C
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        match key.code {
            // Movement - Arrow keys
            KeyCode::Up => KeyAction::Game(Input::Steer(Direction::Up)),
            KeyCode::Down => KeyAction::Game(Input::Steer(Direction::Down)),
            KeyCode::Left => KeyAction::Game(Input::Steer(Direction::Left)),
            KeyCode::Right => KeyAction::Game(Input::Steer(Direction::Right)),

            // Movement - WASD
            KeyCode::Char('w') | KeyCode::Char('W') => KeyAction::Game(Input::Steer(Direction::Up)),
            KeyCode::Char('s') | KeyCode::Char('S') => {
                KeyAction::Game(Input::Steer(Direction::Down))
            }
            KeyCode::Char('a') | KeyCode::Char('A') => {
                KeyAction::Game(Input::Steer(Direction::Left))
            }
            KeyCode::Char('d') | KeyCode::Char('D') => {
                KeyAction::Game(Input::Steer(Direction::Right))
            }

            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => KeyAction::Quit,

            // Starts or restarts the game, ignored mid-game
            _ => KeyAction::Game(Input::AnyKey),
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
