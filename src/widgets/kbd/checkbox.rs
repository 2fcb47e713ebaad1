use super::base::{InlineButton, Keyboard, KeyboardMarkup, PAYLOAD_SEPARATOR, WhenPredicate};
use crate::error::{Result, WidgetError};
use crate::event::ChatEvent;
use crate::session::{self, DialogSession};
use crate::widgets::callbacks::StateCallback;
use crate::widgets::managed::Managed;
use crate::widgets::text::{Branch, Text};
use async_trait::async_trait;
use serde_json::Value;

/// Wire discriminator for the unchecked state.
pub const UNCHECKED_PAYLOAD: &str = "0";
/// Wire discriminator for the checked state.
pub const CHECKED_PAYLOAD: &str = "1";

/// Encode a boolean into its single-character wire discriminator.
pub fn encode_checked(checked: bool) -> &'static str {
    if checked {
        CHECKED_PAYLOAD
    } else {
        UNCHECKED_PAYLOAD
    }
}

/// Decode a wire discriminator: `"0"` is unchecked, any other token counts
/// as checked. Unrecognized tokens are never an error.
pub fn decode_checked(payload: &str) -> bool {
    payload != UNCHECKED_PAYLOAD
}

/// Read/write access to a toggle's boolean state.
///
/// [`Checkbox`] backs this with the session's widget-data slot; an
/// alternative backing only needs these two operations to drive the same
/// button.
#[async_trait]
pub trait Toggle: Send + Sync {
    /// Current state for this session. Never fails: an unset or malformed
    /// slot reads as the widget's default.
    fn is_checked(&self, session: &dyn DialogSession) -> bool;

    /// Persist `checked`, then run the state-changed callback. The callback
    /// observes the already-updated state and its error propagates to the
    /// caller.
    async fn set_checked(
        &self,
        event: &ChatEvent,
        checked: bool,
        session: &dyn DialogSession,
    ) -> Result<()>;
}

/// Stateful toggle button.
///
/// Renders as one row of one button whose label tracks the stored state and
/// whose payload carries the state the user last saw. A tap flips relative
/// to that rendered payload, not to a fresh store read, so the result
/// always matches what the user believed they were toggling.
pub struct Checkbox {
    id: String,
    label: Branch,
    on_click: StateCallback,
    on_state_changed: StateCallback,
    when: Option<Box<WhenPredicate>>,
    default: bool,
}

impl std::fmt::Debug for Checkbox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Checkbox")
            .field("id", &self.id)
            .field("default", &self.default)
            .finish_non_exhaustive()
    }
}

impl Checkbox {
    /// Build a checkbox from its two label texts and default state.
    ///
    /// Fails when `id` is empty or contains the payload separator — such an
    /// id cannot round-trip through callback routing.
    pub fn new(
        id: impl Into<String>,
        checked_text: impl Text + 'static,
        unchecked_text: impl Text + 'static,
        default: bool,
    ) -> Result<Self> {
        let id = id.into();
        if id.is_empty() {
            return Err(WidgetError::Config("checkbox id must not be empty".into()));
        }
        if id.contains(PAYLOAD_SEPARATOR) {
            return Err(WidgetError::Config(format!(
                "checkbox id {id:?} must not contain {PAYLOAD_SEPARATOR:?}"
            )));
        }

        let label = Branch::new(
            {
                let id = id.clone();
                move |_data: &Value, session: &dyn DialogSession| {
                    stored_checked(session, &id, default)
                }
            },
            checked_text,
            unchecked_text,
        );

        Ok(Self {
            id,
            label,
            on_click: StateCallback::Noop,
            on_state_changed: StateCallback::Noop,
            when: None,
            default,
        })
    }

    /// Interception callback, run before the state flips.
    pub fn on_click(mut self, callback: StateCallback) -> Self {
        self.on_click = callback;
        self
    }

    /// Notification callback, run after the new state is stored.
    pub fn on_state_changed(mut self, callback: StateCallback) -> Self {
        self.on_state_changed = callback;
        self
    }

    /// Visibility predicate, consulted by the framework before rendering.
    pub fn when(
        mut self,
        predicate: impl Fn(&Value, &dyn DialogSession) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.when = Some(Box::new(predicate));
        self
    }

    /// Session-bound view exposing the state operations without the session
    /// threaded through every call.
    pub fn managed<'a>(&'a self, session: &'a dyn DialogSession) -> ManagedCheckbox<'a> {
        Managed::new(self, session)
    }
}

fn stored_checked(session: &dyn DialogSession, widget_id: &str, default: bool) -> bool {
    session::typed_widget_data(session, widget_id, default)
}

#[async_trait]
impl Toggle for Checkbox {
    fn is_checked(&self, session: &dyn DialogSession) -> bool {
        stored_checked(session, &self.id, self.default)
    }

    async fn set_checked(
        &self,
        event: &ChatEvent,
        checked: bool,
        session: &dyn DialogSession,
    ) -> Result<()> {
        session::store_widget_data(session, &self.id, &checked);
        self.on_state_changed
            .process(event, self.managed(session), session)
            .await
    }
}

#[async_trait]
impl Keyboard for Checkbox {
    fn widget_id(&self) -> &str {
        &self.id
    }

    fn is_visible(&self, data: &Value, session: &dyn DialogSession) -> bool {
        self.when
            .as_ref()
            .is_none_or(|predicate| predicate(data, session))
    }

    async fn render_keyboard(
        &self,
        data: &Value,
        session: &dyn DialogSession,
    ) -> Result<KeyboardMarkup> {
        let checked = self.is_checked(session);
        let text = self.label.render_text(data, session).await?;
        Ok(vec![vec![InlineButton {
            text,
            payload: self.item_payload(encode_checked(checked)),
        }]])
    }

    async fn handle_item(
        &self,
        event: &ChatEvent,
        item: &str,
        session: &dyn DialogSession,
    ) -> Result<bool> {
        // `item` is the state as last rendered, which may lag behind the
        // store if something mutated it since. The flip is relative to the
        // rendered state.
        let rendered = decode_checked(item);
        self.on_click
            .process(event, self.managed(session), session)
            .await?;
        self.set_checked(event, !rendered, session).await?;
        tracing::debug!("checkbox {}: toggled {} -> {}", self.id, rendered, !rendered);
        Ok(true)
    }
}

/// Session-bound checkbox projection handed to callbacks and embedders.
pub type ManagedCheckbox<'a> = Managed<'a, Checkbox>;

impl Managed<'_, Checkbox> {
    pub fn is_checked(&self) -> bool {
        self.widget().is_checked(self.session())
    }

    pub async fn set_checked(&self, event: &ChatEvent, checked: bool) -> Result<()> {
        self.widget()
            .set_checked(event, checked, self.session())
            .await
    }
}
