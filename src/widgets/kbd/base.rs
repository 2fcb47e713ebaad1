use crate::error::Result;
use crate::event::ChatEvent;
use crate::session::DialogSession;
use async_trait::async_trait;
use serde_json::Value;

/// Separator between a widget id and the item payload in button callback
/// data.
pub const PAYLOAD_SEPARATOR: char = ':';

/// Visibility predicate over (data, session), consulted by the framework
/// before a widget is rendered.
pub type WhenPredicate = dyn Fn(&Value, &dyn DialogSession) -> bool + Send + Sync;

/// One tappable inline button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineButton {
    pub text: String,
    pub payload: String,
}

/// Button rows, outermost vector is rows top to bottom.
pub type KeyboardMarkup = Vec<Vec<InlineButton>>;

/// An inline-keyboard widget.
///
/// `process_callback` owns payload routing: a rendered button carries
/// `<widget id>:<item>`, and only payloads with this widget's id prefix
/// reach `handle_item`, already stripped down to the bare item. Widgets
/// without per-item handling keep the default and never claim a callback.
#[async_trait]
pub trait Keyboard: Send + Sync {
    /// Stable widget identifier, unique among siblings.
    fn widget_id(&self) -> &str;

    /// Whether the framework should render this widget at all.
    fn is_visible(&self, _data: &Value, _session: &dyn DialogSession) -> bool {
        true
    }

    /// Produce the button rows for the current session.
    async fn render_keyboard(
        &self,
        data: &Value,
        session: &dyn DialogSession,
    ) -> Result<KeyboardMarkup>;

    /// Route an incoming callback payload. `Ok(false)` means the payload
    /// belongs to another widget and routing should continue.
    async fn process_callback(
        &self,
        event: &ChatEvent,
        payload: &str,
        session: &dyn DialogSession,
    ) -> Result<bool> {
        let Some(item) = own_item(self.widget_id(), payload) else {
            tracing::debug!(
                "keyboard {}: ignoring foreign payload {payload:?}",
                self.widget_id()
            );
            return Ok(false);
        };
        self.handle_item(event, item, session).await
    }

    /// Handle a payload already stripped of this widget's id prefix.
    async fn handle_item(
        &self,
        _event: &ChatEvent,
        _item: &str,
        _session: &dyn DialogSession,
    ) -> Result<bool> {
        Ok(false)
    }

    /// Full wire payload for one of this widget's items.
    fn item_payload(&self, item: &str) -> String {
        format!("{}{}{}", self.widget_id(), PAYLOAD_SEPARATOR, item)
    }
}

fn own_item<'p>(widget_id: &str, payload: &'p str) -> Option<&'p str> {
    payload
        .strip_prefix(widget_id)?
        .strip_prefix(PAYLOAD_SEPARATOR)
}
