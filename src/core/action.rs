//! # Actions
//!
//! Everything that can happen in basket becomes an `Action`.
//! User presses Tab? That's `Action::ToggleFocus`.
//! The input field submits its text? That's `Action::AddItem(text)`.
//!
//! The `update()` function takes the current state and an action,
//! then mutates the state in place. No side effects here. I/O happens
//! elsewhere; the one thing the reducer can ask of the outside world is
//! `Effect::Quit`.
//!
//! ```text
//! State + Action  →  update()  →  New State
//! ```
//!
//! This makes everything testable: apply an action, assert on the fields.

use log::warn;

use crate::core::state::{App, Focus};

/// Everything the event loop can feed into the reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// End the run. Bound to `q` and Ctrl+C in either focus.
    Quit,
    /// Flip focus between the list and the input field.
    ToggleFocus,
    CursorUp,
    CursorDown,
    /// Toggle the checked mark on the item under the cursor.
    ToggleChecked,
    /// Append a submitted item. The text is taken verbatim: empty and
    /// duplicate labels are accepted, nothing is trimmed.
    AddItem(String),
    /// Failure reported by the input stream. Recorded, not rendered.
    Error(String),
}

/// Instruction back to the event loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Quit => return Effect::Quit,
        Action::ToggleFocus => {
            app.focus = match app.focus {
                Focus::List => Focus::Input,
                Focus::Input => Focus::List,
            };
        }
        Action::CursorUp => {
            if app.focus == Focus::List && app.cursor > 0 {
                app.cursor -= 1;
            }
        }
        Action::CursorDown => {
            if app.focus == Focus::List && app.cursor + 1 < app.items.len() {
                app.cursor += 1;
            }
        }
        Action::ToggleChecked => {
            // Only meaningful with a list focus and at least one item;
            // the guard keeps `checked` free of indices that point past
            // the end of `items`.
            if app.focus == Focus::List
                && !app.items.is_empty()
                && !app.checked.remove(&app.cursor)
            {
                app.checked.insert(app.cursor);
            }
        }
        Action::AddItem(text) => {
            app.items.push(text);
        }
        Action::Error(msg) => {
            warn!("input stream error recorded: {msg}");
            app.last_error = Some(msg);
        }
    }
    Effect::None
}
