use super::Text;
use crate::error::Result;
use crate::session::DialogSession;
use async_trait::async_trait;
use serde_json::Value;

/// Fixed text — renders the same string for every (data, session) pair.
pub struct Plain {
    text: String,
}

impl Plain {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[async_trait]
impl Text for Plain {
    async fn render_text(&self, _data: &Value, _session: &dyn DialogSession) -> Result<String> {
        Ok(self.text.clone())
    }
}
