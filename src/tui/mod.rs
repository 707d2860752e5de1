//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm; the
//! core reducer could be driven by any other frontend.
//!
//! ## Redraw Strategy
//!
//! The loop redraws only when something changed: an event was reduced or
//! the caret blink phase flipped. The poll timeout is short enough to keep
//! the blink cadence without busy-waiting, and all queued events are
//! drained before the next draw so a burst of keystrokes costs one frame.

pub mod component;
pub mod components;
pub mod event;
mod ui;

use std::io;
use std::time::{Duration, Instant};

use log::{debug, info};
use ratatui::DefaultTerminal;

use crate::core::action::{Action, Effect, update};
use crate::core::state::{App, Focus};
use crate::tui::component::EventHandler;
use crate::tui::components::{InputEvent, InputField};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// How often the caret phase flips while the input field has focus.
const BLINK_INTERVAL: Duration = Duration::from_millis(500);
/// Poll timeout; keeps blink toggles on schedule between keystrokes.
const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub input: InputField,
}

impl TuiState {
    pub fn new(placeholder: String) -> Self {
        Self {
            input: InputField::new(placeholder),
        }
    }
}

pub fn run(placeholder: String) -> io::Result<()> {
    let mut app = App::new();
    let mut tui = TuiState::new(placeholder);

    let mut terminal = ratatui::init();
    info!("terminal initialized, entering event loop");
    let result = event_loop(&mut terminal, &mut app, &mut tui);
    ratatui::restore();
    info!("terminal restored");
    result
}

fn event_loop(
    terminal: &mut DefaultTerminal,
    app: &mut App,
    tui: &mut TuiState,
) -> io::Result<()> {
    let mut last_blink = Instant::now();
    let mut needs_redraw = true; // force first frame

    loop {
        // Sync InputField focus with core state. (Re)arming restarts the
        // blink phase so the caret is visible the moment focus arrives.
        let input_focused = app.focus == Focus::Input;
        if tui.input.focused != input_focused {
            tui.input.focused = input_focused;
            tui.input.blink_on = input_focused;
            last_blink = Instant::now();
            needs_redraw = true;
        }

        // Caret blink: flips a visual flag, never touches the buffer
        if tui.input.focused && last_blink.elapsed() >= BLINK_INTERVAL {
            tui.input.blink_on = !tui.input.blink_on;
            last_blink = Instant::now();
            needs_redraw = true;
        }

        if needs_redraw {
            terminal.draw(|f| ui::draw(f, app, tui))?;
            needs_redraw = false;
        }

        // Process first event + drain ALL pending events before next draw.
        // Read failures land in App.last_error instead of ending the run.
        let mut pending = match poll_event_timeout(POLL_TIMEOUT) {
            Ok(event) => event,
            Err(e) => {
                update(app, Action::Error(e.to_string()));
                needs_redraw = true;
                continue;
            }
        };
        while let Some(event) = pending {
            needs_redraw = true;
            if dispatch(app, tui, event) == Effect::Quit {
                debug!("quit requested");
                return Ok(());
            }
            pending = match poll_event_immediate() {
                Ok(event) => event,
                Err(e) => {
                    update(app, Action::Error(e.to_string()));
                    None
                }
            };
        }
    }
}

/// Route one key event according to the current focus.
///
/// Quit and focus-toggle keys work in either focus; everything else goes
/// to whichever widget holds focus. Space doubles as the list-mode check
/// key and a literal character in input mode, disambiguated entirely by
/// focus, never both.
pub fn dispatch(app: &mut App, tui: &mut TuiState, event: TuiEvent) -> Effect {
    match event {
        // 'q' quits from either focus, so it can never be typed into an item
        TuiEvent::ForceQuit | TuiEvent::Char('q') => update(app, Action::Quit),
        TuiEvent::Tab => update(app, Action::ToggleFocus),
        // Resize only needs the redraw the loop already flagged
        TuiEvent::Resize => Effect::None,
        _ => match app.focus {
            Focus::List => match event {
                TuiEvent::Up | TuiEvent::Char('k') => update(app, Action::CursorUp),
                TuiEvent::Down | TuiEvent::Char('j') => update(app, Action::CursorDown),
                TuiEvent::Enter | TuiEvent::Char(' ') => update(app, Action::ToggleChecked),
                _ => Effect::None,
            },
            Focus::Input => match tui.input.handle_event(&event) {
                Some(InputEvent::Submit(text)) => {
                    debug!("adding item ({} chars)", text.chars().count());
                    update(app, Action::AddItem(text))
                }
                _ => Effect::None,
            },
        },
    }
}
