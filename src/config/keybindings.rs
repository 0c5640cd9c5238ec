//! Keyboard bindings configuration.

use crate::model::key_action::KeyAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Maps keyboard events to domain actions.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    ///
    /// Only code and modifiers take part in the lookup. Shift is ignored for character
    /// keys since terminals disagree on whether `?` arrives with it.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        let modifiers = match key.code {
            KeyCode::Char(_) => key.modifiers.difference(KeyModifiers::SHIFT),
            _ => key.modifiers,
        };
        self.bindings
            .get(&KeyEvent::new(key.code, modifiers))
            .copied()
    }

    /// Every binding, sorted by action then key, for the help overlay.
    pub fn entries(&self) -> Vec<(KeyEvent, KeyAction)> {
        let mut entries: Vec<(KeyEvent, KeyAction)> =
            self.bindings.iter().map(|(k, a)| (*k, *a)).collect();
        entries.sort_by_key(|(key, action)| (format!("{:?}", action), format!("{:?}", key.code)));
        entries
    }

    fn bind(&mut self, code: KeyCode, modifiers: KeyModifiers, action: KeyAction) {
        self.bindings.insert(KeyEvent::new(code, modifiers), action);
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut kb = Self {
            bindings: HashMap::new(),
        };
        let none = KeyModifiers::NONE;

        // Screens
        for (digit, action) in ('1'..='7').zip(KeyAction::SCREENS) {
            kb.bind(KeyCode::Char(digit), none, action);
        }
        kb.bind(KeyCode::Esc, none, KeyAction::Back);

        // Vim-style and arrow selection
        kb.bind(KeyCode::Char('j'), none, KeyAction::MoveDown);
        kb.bind(KeyCode::Char('k'), none, KeyAction::MoveUp);
        kb.bind(KeyCode::Down, none, KeyAction::MoveDown);
        kb.bind(KeyCode::Up, none, KeyAction::MoveUp);
        kb.bind(KeyCode::Enter, none, KeyAction::OpenSelected);

        // Catalog query
        kb.bind(KeyCode::Char('/'), none, KeyAction::StartSearch);
        kb.bind(KeyCode::Char('d'), none, KeyAction::CycleDegree);
        kb.bind(KeyCode::Char('c'), none, KeyAction::CycleCountry);
        kb.bind(KeyCode::Char('b'), none, KeyAction::CycleBenefit);
        kb.bind(KeyCode::Char('x'), none, KeyAction::ClearFilters);
        kb.bind(KeyCode::Char('m'), none, KeyAction::LoadMore);
        kb.bind(KeyCode::Char('r'), none, KeyAction::Refresh);

        // Application controls
        kb.bind(KeyCode::Char('t'), none, KeyAction::ToggleTheme);
        kb.bind(KeyCode::Char('?'), none, KeyAction::Help);
        kb.bind(KeyCode::Char('q'), none, KeyAction::Quit);
        kb.bind(KeyCode::Char('c'), KeyModifiers::CONTROL, KeyAction::Quit);

        kb
    }
}
