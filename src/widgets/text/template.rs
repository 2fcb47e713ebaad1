use super::Text;
use crate::error::{Result, WidgetError};
use crate::session::DialogSession;
use async_trait::async_trait;
use serde_json::Value;
use tera::{Context, Tera};

/// Template text — renders a one-off `tera` template against the dialog
/// data. Non-object data renders with an empty context, so templates
/// without placeholders still work when the dialog has no getter.
pub struct Template {
    source: String,
}

impl Template {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }
}

#[async_trait]
impl Text for Template {
    async fn render_text(&self, data: &Value, _session: &dyn DialogSession) -> Result<String> {
        let context = match data {
            Value::Object(_) => Context::from_value(data.clone())
                .map_err(|error| WidgetError::Render(format!("template context: {error}")))?,
            _ => Context::new(),
        };
        Tera::one_off(&self.source, &context, false)
            .map_err(|error| WidgetError::Render(format!("template: {error}")))
    }
}
