//! # Checklist Component
//!
//! Renders the item list, one line per item in insertion order:
//!
//! ```text
//! > [x] Eggs
//!   [ ] Milk
//! ```
//!
//! The `>` marker follows the cursor and is only drawn while the list has
//! focus; the `x` marker follows the checked set. Purely presentational:
//! all four props come straight from core state, and the component draws
//! whatever it is given.

use std::collections::HashSet;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;

/// Checklist view over the core item list.
///
/// # Props
///
/// - `items`: entries in insertion order
/// - `checked`: indices currently marked done
/// - `cursor`: highlighted index
/// - `focused`: whether the list has focus (controls the `>` marker)
pub struct Checklist<'a> {
    pub items: &'a [String],
    pub checked: &'a HashSet<usize>,
    pub cursor: usize,
    pub focused: bool,
}

impl<'a> Checklist<'a> {
    pub fn new(
        items: &'a [String],
        checked: &'a HashSet<usize>,
        cursor: usize,
        focused: bool,
    ) -> Self {
        Self {
            items,
            checked,
            cursor,
            focused,
        }
    }

    fn line_for(&self, index: usize, label: &str) -> String {
        let cursor = if self.focused && self.cursor == index {
            '>'
        } else {
            ' '
        };
        let check = if self.checked.contains(&index) { 'x' } else { ' ' };
        format!("{cursor} [{check}] {label}")
    }
}

impl Component for Checklist<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let lines: Vec<Line> = self
            .items
            .iter()
            .enumerate()
            .map(|(index, label)| Line::from(self.line_for(index, label)))
            .collect();

        frame.render_widget(Paragraph::new(lines), area);
    }
}
