//! # TUI Components
//!
//! All UI widgets for the terminal interface.
//!
//! Two patterns, following the crate's component architecture:
//!
//! - **Stateless (props-based)**: `Checklist` and `HintBar` receive all
//!   data as props and just draw it. Dependencies stay explicit: the
//!   caller hands over exactly the core fields each widget needs.
//! - **Stateful (event-driven)**: `InputField` owns its buffer and caret,
//!   consumes `TuiEvent`s and emits `InputEvent`s for the loop to act on.
//!
//! Each component file is self-contained: state, event handling, rendering
//! and tests live together.

mod checklist;
mod hint_bar;
pub mod input_field;

pub use checklist::Checklist;
pub use hint_bar::HintBar;
pub use input_field::{InputEvent, InputField};
