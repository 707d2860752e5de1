use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::widgets::Paragraph;

use crate::core::state::{App, Focus};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{Checklist, HintBar};

const HEADER: &str = "What should we buy at the market?";
const PROMPT: &str = "What more should we get?";

/// Draw the whole frame: header, prompt + input field, item list, hints.
/// A pure function of the current state, called after every processed
/// event and every blink toggle.
pub fn draw(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(2), Length(1), Length(2), Min(0), Length(2)]);
    let [header_area, prompt_area, field_area, list_area, hint_area] =
        layout.areas(frame.area());

    frame.render_widget(Paragraph::new(HEADER), header_area);
    frame.render_widget(Paragraph::new(PROMPT), prompt_area);
    tui.input.render(frame, field_area);

    if !app.items.is_empty() {
        Checklist::new(&app.items, &app.checked, app.cursor, app.focus == Focus::List)
            .render(frame, list_area);
    }

    HintBar::new(app.focus).render(frame, hint_area);
}
