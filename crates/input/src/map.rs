//! Key mapping from terminal events to menu commands.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What the player asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    Action(GameAction),
    Quit,
}

/// Map a key press to a menu command.
///
/// Digits follow the menu (`1`-`5` actions, `0` exit). `None` means the key is
/// not a menu option.
pub fn map_key(key: KeyEvent) -> Option<MenuCommand> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(MenuCommand::Quit);
    }

    match key.code {
        KeyCode::Char('0') | KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
            Some(MenuCommand::Quit)
        }
        KeyCode::Char(c) => GameAction::ALL
            .iter()
            .find(|a| a.menu_key() == c)
            .map(|a| MenuCommand::Action(*a)),
        _ => None,
    }
}
