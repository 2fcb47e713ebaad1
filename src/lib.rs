#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::new_without_default,
    clippy::return_self_not_must_use
)]

//! Stateful inline-keyboard widgets for chat-bot dialogs.
//!
//! The dialog framework owns windows, routing, and transport; this crate
//! owns the widgets themselves — how a control encodes its state into the
//! button payload it renders, and how an incoming tap turns back into a
//! state transition plus callback dispatch.

pub mod error;
pub mod event;
pub mod session;
pub mod widgets;

pub use error::{Result, WidgetError};
pub use event::ChatEvent;
pub use session::{DialogSession, MemorySession};
pub use widgets::callbacks::{StateCallback, StateHandler};
pub use widgets::kbd::{Checkbox, InlineButton, Keyboard, ManagedCheckbox, Toggle};
pub use widgets::text::{Branch, Plain, Template, Text};
