//! # InputField Component
//!
//! Single-line text entry for new checklist items.
//!
//! ## Responsibilities
//!
//! - Capture text input
//! - Handle editing (backspace, delete, caret movement)
//! - Enforce the character cap: keystrokes past the limit are dropped
//! - Handle submission (Enter); the buffer is emitted verbatim, empty
//!   text included
//! - Show a placeholder while empty and a blinking caret while focused
//!
//! ## State Management
//!
//! The buffer, caret and horizontal scroll window are internal state.
//! `focused` mirrors the core focus and `blink_on` is flipped by the event
//! loop's timer; neither of those ever touches the buffer.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthChar;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Maximum number of characters the buffer accepts.
pub const CHAR_LIMIT: usize = 150;

const PROMPT: &str = "> ";

/// High-level events emitted by the InputField
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// User submitted the text (Enter pressed). Empty submissions are
    /// passed through unchanged.
    Submit(String),
    /// Text content or caret position changed.
    ContentChanged,
}

/// Text input component with a blinking caret.
///
/// # Props
///
/// - `focused`: whether keystrokes are currently routed here (from core focus)
/// - `blink_on`: caret visibility phase (from the loop's blink timer)
///
/// # State
///
/// - `buffer`: current text being typed, capped at [`CHAR_LIMIT`] chars
/// - `caret`: byte offset into `buffer`
/// - `scroll`: leftmost visible char index when the text outgrows the field
pub struct InputField {
    pub buffer: String,
    pub focused: bool,
    pub blink_on: bool,
    /// Dim hint text shown while the buffer is empty.
    pub placeholder: String,
    caret: usize,
    scroll: usize,
}

impl InputField {
    pub fn new(placeholder: String) -> Self {
        Self {
            buffer: String::new(),
            focused: true,
            blink_on: true,
            placeholder,
            caret: 0,
            scroll: 0,
        }
    }

    fn caret_char_idx(&self) -> usize {
        self.buffer[..self.caret].chars().count()
    }

    fn show_caret(&self) -> bool {
        self.focused && self.blink_on
    }

    /// Keep the caret cell inside the visible window. Measured in display
    /// columns so double-width input scrolls correctly.
    fn update_scroll(&mut self, inner_width: usize) {
        let caret_idx = self.caret_char_idx();
        if caret_idx < self.scroll {
            self.scroll = caret_idx;
            return;
        }
        let chars: Vec<char> = self.buffer.chars().collect();
        while self.scroll < caret_idx {
            let window: usize = chars[self.scroll..caret_idx]
                .iter()
                .map(|c| c.width().unwrap_or(1))
                .sum::<usize>()
                + 1; // the caret occupies one cell
            if window <= inner_width {
                break;
            }
            self.scroll += 1;
        }
    }
}

impl Component for InputField {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let inner_width = (area.width as usize).saturating_sub(PROMPT.len()).max(1);
        self.update_scroll(inner_width);

        let placeholder_style = Style::default().add_modifier(Modifier::DIM);
        let caret_style = Style::default().add_modifier(Modifier::REVERSED);

        let mut spans = vec![Span::raw(PROMPT)];
        if self.buffer.is_empty() {
            // Caret parks on the placeholder's first cell
            let mut chars = self.placeholder.chars();
            let first = chars.next().map(String::from).unwrap_or_else(|| " ".into());
            let rest: String = chars.collect();
            let first_style = if self.show_caret() { caret_style } else { placeholder_style };
            spans.push(Span::styled(first, first_style));
            spans.push(Span::styled(rest, placeholder_style));
        } else {
            let chars: Vec<char> = self.buffer.chars().collect();
            let caret_idx = self.caret_char_idx();
            let before: String = chars[self.scroll..caret_idx].iter().collect();
            let at = chars.get(caret_idx).copied();
            let after: String = chars.get(caret_idx + 1..).unwrap_or(&[]).iter().collect();

            spans.push(Span::raw(before));
            if self.show_caret() {
                spans.push(Span::styled(
                    at.map(String::from).unwrap_or_else(|| " ".into()),
                    caret_style,
                ));
                spans.push(Span::raw(after));
            } else {
                let mut tail = String::new();
                tail.extend(at);
                tail.push_str(&after);
                spans.push(Span::raw(tail));
            }
        }

        // Paragraph clips at the area edge; the scroll window handles the left side
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}

impl EventHandler for InputField {
    type Event = InputEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::Char(c) => {
                if self.buffer.chars().count() >= CHAR_LIMIT {
                    return None; // dropped, not wrapped
                }
                self.buffer.insert(self.caret, *c);
                self.caret += c.len_utf8();
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Backspace => {
                if self.caret > 0 {
                    let prev = prev_char_boundary(&self.buffer, self.caret);
                    self.buffer.drain(prev..self.caret);
                    self.caret = prev;
                    Some(InputEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::Delete => {
                if self.caret < self.buffer.len() {
                    let next = next_char_boundary(&self.buffer, self.caret);
                    self.buffer.drain(self.caret..next);
                    Some(InputEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::Left => {
                if self.caret > 0 {
                    self.caret = prev_char_boundary(&self.buffer, self.caret);
                    Some(InputEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::Right => {
                if self.caret < self.buffer.len() {
                    self.caret = next_char_boundary(&self.buffer, self.caret);
                    Some(InputEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::Home => (self.caret != 0).then(|| {
                self.caret = 0;
                InputEvent::ContentChanged
            }),
            TuiEvent::End => (self.caret != self.buffer.len()).then(|| {
                self.caret = self.buffer.len();
                InputEvent::ContentChanged
            }),
            TuiEvent::Enter => {
                let text = std::mem::take(&mut self.buffer);
                self.caret = 0;
                self.scroll = 0;
                Some(InputEvent::Submit(text))
            }
            _ => None,
        }
    }
}

fn prev_char_boundary(s: &str, pos: usize) -> usize {
    s[..pos].char_indices().next_back().map_or(0, |(i, _)| i)
}

fn next_char_boundary(s: &str, pos: usize) -> usize {
    s[pos..].chars().next().map_or(s.len(), |c| pos + c.len_utf8())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn field() -> InputField {
        InputField::new("Grocery..".to_string())
    }

    #[test]
    fn test_input_field_new() {
        let input = field();
        assert!(input.buffer.is_empty());
        assert!(input.focused);
        assert_eq!(input.placeholder, "Grocery..");
    }

    #[test]
    fn test_handle_input() {
        let mut input = field();

        let res = input.handle_event(&TuiEvent::Char('a'));
        assert_eq!(res, Some(InputEvent::ContentChanged));
        assert_eq!(input.buffer, "a");

        let res = input.handle_event(&TuiEvent::Char('b'));
        assert_eq!(res, Some(InputEvent::ContentChanged));
        assert_eq!(input.buffer, "ab");

        let res = input.handle_event(&TuiEvent::Backspace);
        assert_eq!(res, Some(InputEvent::ContentChanged));
        assert_eq!(input.buffer, "a");
    }

    #[test]
    fn test_char_limit_drops_excess() {
        let mut input = field();
        for _ in 0..CHAR_LIMIT {
            assert_eq!(
                input.handle_event(&TuiEvent::Char('x')),
                Some(InputEvent::ContentChanged)
            );
        }
        assert_eq!(input.buffer.chars().count(), CHAR_LIMIT);

        // One past the cap is dropped
        assert_eq!(input.handle_event(&TuiEvent::Char('x')), None);
        assert_eq!(input.buffer.chars().count(), CHAR_LIMIT);
    }

    #[test]
    fn test_submit_clears_buffer() {
        let mut input = field();
        for c in "Milk".chars() {
            input.handle_event(&TuiEvent::Char(c));
        }

        let res = input.handle_event(&TuiEvent::Enter);
        assert_eq!(res, Some(InputEvent::Submit("Milk".to_string())));
        assert!(input.buffer.is_empty());
    }

    #[test]
    fn test_submit_allows_empty_text() {
        let mut input = field();
        let res = input.handle_event(&TuiEvent::Enter);
        assert_eq!(res, Some(InputEvent::Submit(String::new())));
    }

    #[test]
    fn test_multibyte_editing() {
        let mut input = field();
        for c in "café".chars() {
            input.handle_event(&TuiEvent::Char(c));
        }
        assert_eq!(input.buffer, "café");

        input.handle_event(&TuiEvent::Backspace);
        assert_eq!(input.buffer, "caf");

        input.handle_event(&TuiEvent::Char('é'));
        input.handle_event(&TuiEvent::Left);
        input.handle_event(&TuiEvent::Left);
        input.handle_event(&TuiEvent::Char('n'));
        assert_eq!(input.buffer, "canfé");
    }

    #[test]
    fn test_home_end_movement() {
        let mut input = field();
        for c in "abc".chars() {
            input.handle_event(&TuiEvent::Char(c));
        }

        assert_eq!(input.handle_event(&TuiEvent::Home), Some(InputEvent::ContentChanged));
        assert_eq!(input.handle_event(&TuiEvent::Home), None);
        input.handle_event(&TuiEvent::Char('z'));
        assert_eq!(input.buffer, "zabc");

        assert_eq!(input.handle_event(&TuiEvent::End), Some(InputEvent::ContentChanged));
        input.handle_event(&TuiEvent::Char('!'));
        assert_eq!(input.buffer, "zabc!");
    }

    #[test]
    fn test_navigation_keys_ignored() {
        let mut input = field();
        input.handle_event(&TuiEvent::Char('a'));

        assert_eq!(input.handle_event(&TuiEvent::Up), None);
        assert_eq!(input.handle_event(&TuiEvent::Down), None);
        assert_eq!(input.buffer, "a");
    }

    #[test]
    fn test_render_shows_placeholder_when_empty() {
        let backend = TestBackend::new(30, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut input = field();

        terminal.draw(|f| input.render(f, f.area())).unwrap();

        let buffer = terminal.backend().buffer();
        let text = buffer.content().iter().map(|c| c.symbol()).collect::<String>();
        assert!(text.contains("> Grocery.."));
    }

    #[test]
    fn test_render_shows_typed_text() {
        let backend = TestBackend::new(30, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut input = field();
        for c in "Milk".chars() {
            input.handle_event(&TuiEvent::Char(c));
        }

        terminal.draw(|f| input.render(f, f.area())).unwrap();

        let buffer = terminal.backend().buffer();
        let text = buffer.content().iter().map(|c| c.symbol()).collect::<String>();
        assert!(text.contains("> Milk"));
    }

    #[test]
    fn test_render_caret_is_reversed_cell() {
        let backend = TestBackend::new(30, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut input = field();
        for c in "ab".chars() {
            input.handle_event(&TuiEvent::Char(c));
        }

        terminal.draw(|f| input.render(f, f.area())).unwrap();

        // Prompt takes cols 0-1, "ab" cols 2-3, caret cell at col 4
        let buffer = terminal.backend().buffer();
        assert!(buffer[(4, 0)].modifier.contains(Modifier::REVERSED));
    }

    #[test]
    fn test_blink_off_hides_caret() {
        let backend = TestBackend::new(30, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut input = field();
        input.blink_on = false;
        for c in "ab".chars() {
            input.handle_event(&TuiEvent::Char(c));
        }

        terminal.draw(|f| input.render(f, f.area())).unwrap();

        let buffer = terminal.backend().buffer();
        assert!(!buffer[(4, 0)].modifier.contains(Modifier::REVERSED));
    }

    #[test]
    fn test_long_text_scrolls_to_keep_caret_visible() {
        let backend = TestBackend::new(12, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut input = field();
        for c in "abcdefghijklmnop".chars() {
            input.handle_event(&TuiEvent::Char(c));
        }

        terminal.draw(|f| input.render(f, f.area())).unwrap();

        // Field shows the tail of the buffer, not the head
        let buffer = terminal.backend().buffer();
        let text = buffer.content().iter().map(|c| c.symbol()).collect::<String>();
        assert!(!text.contains('a'));
        assert!(text.contains('p'));
    }
}
