//! Search box editing (pure state transitions).
//!
//! Handles text input for the SearchInput::Editing variant. The cursor is a character
//! index, so multi-byte input edits cleanly.

/// State of the catalog search box.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SearchInput {
    /// Not focused; keys go to the catalog.
    #[default]
    Idle,
    /// User is typing. `cursor` counts characters, not bytes.
    Editing {
        /// Text typed so far.
        text: String,
        /// Cursor position in characters.
        cursor: usize,
    },
}

impl SearchInput {
    /// True while typing.
    pub fn is_editing(&self) -> bool {
        matches!(self, SearchInput::Editing { .. })
    }
}

fn byte_index(text: &str, cursor: usize) -> usize {
    text.char_indices()
        .nth(cursor)
        .map(|(idx, _)| idx)
        .unwrap_or(text.len())
}

/// Start editing, pre-filled with the current query text and the cursor at its end.
///
/// No-op if already editing.
pub fn activate_search_input(state: SearchInput, current_text: &str) -> SearchInput {
    match state {
        SearchInput::Idle => SearchInput::Editing {
            text: current_text.to_string(),
            cursor: current_text.chars().count(),
        },
        other => other,
    }
}

/// Insert a character at the cursor and advance it. No-op when idle.
pub fn handle_char_input(state: SearchInput, ch: char) -> SearchInput {
    match state {
        SearchInput::Editing { mut text, cursor } => {
            let idx = byte_index(&text, cursor);
            text.insert(idx, ch);
            SearchInput::Editing {
                text,
                cursor: cursor + 1,
            }
        }
        other => other,
    }
}

/// Delete the character before the cursor. No-op at position 0 or when idle.
pub fn handle_backspace(state: SearchInput) -> SearchInput {
    match state {
        SearchInput::Editing { mut text, cursor } if cursor > 0 => {
            let idx = byte_index(&text, cursor - 1);
            text.remove(idx);
            SearchInput::Editing {
                text,
                cursor: cursor - 1,
            }
        }
        other => other,
    }
}

/// Move the cursor left, saturating at 0.
pub fn handle_cursor_left(state: SearchInput) -> SearchInput {
    match state {
        SearchInput::Editing { text, cursor } => SearchInput::Editing {
            text,
            cursor: cursor.saturating_sub(1),
        },
        other => other,
    }
}

/// Move the cursor right, saturating at the text length.
pub fn handle_cursor_right(state: SearchInput) -> SearchInput {
    match state {
        SearchInput::Editing { text, cursor } => {
            let max_cursor = text.chars().count();
            SearchInput::Editing {
                text,
                cursor: (cursor + 1).min(max_cursor),
            }
        }
        other => other,
    }
}

/// Abandon editing; the submitted query is left as it was.
pub fn cancel_search_input(_state: SearchInput) -> SearchInput {
    SearchInput::Idle
}

/// Finish editing. Returns the idle state and the text to submit, or `None` when
/// nothing was being edited. Empty text is a valid submission (clears the search).
pub fn submit_search_input(state: SearchInput) -> (SearchInput, Option<String>) {
    match state {
        SearchInput::Editing { text, .. } => (SearchInput::Idle, Some(text.trim().to_string())),
        SearchInput::Idle => (SearchInput::Idle, None),
    }
}

#[cfg(test)]
#[path = "search_input_handler_tests.rs"]
mod tests;
