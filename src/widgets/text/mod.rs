use crate::error::Result;
use crate::session::DialogSession;
use async_trait::async_trait;
use serde_json::Value;

mod branch;
mod plain;
mod template;

pub use branch::Branch;
pub use plain::Plain;
pub use template::Template;

/// A renderable piece of dialog text.
///
/// `data` is the dialog's getter output for the current render pass;
/// implementations may suspend (nested renders, lookups) and callers await
/// the result before building the outgoing message.
#[async_trait]
pub trait Text: Send + Sync {
    async fn render_text(&self, data: &Value, session: &dyn DialogSession) -> Result<String>;
}
