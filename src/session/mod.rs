use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

mod memory;

pub use memory::MemorySession;

/// Per-dialog session capability consumed by widgets.
///
/// Each widget owns one data slot keyed by its identifier; identifier
/// uniqueness across sibling widgets is the framework's responsibility.
/// Implementations use interior mutability so a shared session can be
/// threaded through rendering and interaction handling by reference.
pub trait DialogSession: Send + Sync {
    /// Raw widget-data slot for `widget_id`, if one was ever written.
    fn widget_data(&self, widget_id: &str) -> Option<Value>;

    /// Overwrite the widget-data slot for `widget_id`.
    fn set_widget_data(&self, widget_id: &str, value: Value);
}

/// Read a typed widget-data slot, falling back to `default` when the slot
/// is absent or does not deserialize to `T`.
pub fn typed_widget_data<T: DeserializeOwned>(
    session: &dyn DialogSession,
    widget_id: &str,
    default: T,
) -> T {
    session
        .widget_data(widget_id)
        .and_then(|value| serde_json::from_value(value).ok())
        .unwrap_or(default)
}

/// Serialize `value` into the widget-data slot for `widget_id`.
pub fn store_widget_data<T: Serialize>(session: &dyn DialogSession, widget_id: &str, value: &T) {
    match serde_json::to_value(value) {
        Ok(json) => session.set_widget_data(widget_id, json),
        Err(error) => {
            tracing::warn!("widget data for {widget_id} is not serializable: {error}");
        }
    }
}
