use super::Text;
use crate::error::Result;
use crate::session::DialogSession;
use async_trait::async_trait;
use serde_json::Value;

/// Selector deciding which side of a [`Branch`] renders.
pub type BranchSelector = dyn Fn(&Value, &dyn DialogSession) -> bool + Send + Sync;

/// Two-branch text selector.
///
/// A predicate over (data, session) picks between two inner texts at render
/// time. The toggle widgets use this for their checked/unchecked labels with
/// a selector that reads the widget's own state slot.
pub struct Branch {
    selector: Box<BranchSelector>,
    when_true: Box<dyn Text>,
    when_false: Box<dyn Text>,
}

impl Branch {
    pub fn new(
        selector: impl Fn(&Value, &dyn DialogSession) -> bool + Send + Sync + 'static,
        when_true: impl Text + 'static,
        when_false: impl Text + 'static,
    ) -> Self {
        Self {
            selector: Box::new(selector),
            when_true: Box::new(when_true),
            when_false: Box::new(when_false),
        }
    }
}

#[async_trait]
impl Text for Branch {
    async fn render_text(&self, data: &Value, session: &dyn DialogSession) -> Result<String> {
        if (self.selector)(data, session) {
            self.when_true.render_text(data, session).await
        } else {
            self.when_false.render_text(data, session).await
        }
    }
}
