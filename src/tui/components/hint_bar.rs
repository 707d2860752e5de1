//! # HintBar Component
//!
//! Footer line with the key bindings for the current focus. Stateless;
//! the focus is the only prop.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Paragraph, Wrap};

use crate::core::state::Focus;
use crate::tui::component::Component;

const LIST_HINTS: &str =
    "Use ↑/↓ to navigate, Space to select, Tab to focus the input, Enter to add items, and q to quit.";
const INPUT_HINTS: &str = "Type your item, Tab to focus the list, and q to quit.";

pub struct HintBar {
    pub focus: Focus,
}

impl HintBar {
    pub fn new(focus: Focus) -> Self {
        Self { focus }
    }
}

impl Component for HintBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let hints = match self.focus {
            Focus::List => LIST_HINTS,
            Focus::Input => INPUT_HINTS,
        };
        let paragraph = Paragraph::new(hints)
            .style(Style::default().add_modifier(Modifier::DIM))
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
    }
}
