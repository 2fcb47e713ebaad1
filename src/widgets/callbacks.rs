use crate::error::{Result, WidgetError};
use crate::event::ChatEvent;
use crate::session::DialogSession;
use crate::widgets::kbd::ManagedCheckbox;
use async_trait::async_trait;
use futures_util::future::BoxFuture;
use std::sync::Arc;

/// Boxed async state-change callback.
pub type StateCallbackFn = Box<
    dyn for<'a> Fn(
            &'a ChatEvent,
            ManagedCheckbox<'a>,
            &'a dyn DialogSession,
        ) -> BoxFuture<'a, anyhow::Result<()>>
        + Send
        + Sync,
>;

/// Reusable state-change handler — implement this for callbacks that carry
/// their own state or are shared across several widgets.
#[async_trait]
pub trait StateHandler: Send + Sync {
    async fn handle(
        &self,
        event: &ChatEvent,
        checkbox: ManagedCheckbox<'_>,
        session: &dyn DialogSession,
    ) -> anyhow::Result<()>;
}

/// A widget callback slot, normalized once at construction time.
///
/// `Noop` costs nothing to invoke. The other variants are awaited to
/// completion and their errors propagate to the caller unmodified — the
/// widget core never retries, suppresses, or logs a callback failure.
pub enum StateCallback {
    Noop,
    Func(StateCallbackFn),
    Handler(Arc<dyn StateHandler>),
}

impl StateCallback {
    /// Wrap a plain async closure.
    pub fn from_fn<F>(callback: F) -> Self
    where
        F: for<'a> Fn(
                &'a ChatEvent,
                ManagedCheckbox<'a>,
                &'a dyn DialogSession,
            ) -> BoxFuture<'a, anyhow::Result<()>>
            + Send
            + Sync
            + 'static,
    {
        Self::Func(Box::new(callback))
    }

    /// Delegate to a shared handler object.
    pub fn from_handler(handler: Arc<dyn StateHandler>) -> Self {
        Self::Handler(handler)
    }

    pub async fn process(
        &self,
        event: &ChatEvent,
        checkbox: ManagedCheckbox<'_>,
        session: &dyn DialogSession,
    ) -> Result<()> {
        match self {
            Self::Noop => Ok(()),
            Self::Func(callback) => callback(event, checkbox, session)
                .await
                .map_err(WidgetError::Callback),
            Self::Handler(handler) => handler
                .handle(event, checkbox, session)
                .await
                .map_err(WidgetError::Callback),
        }
    }
}

impl Default for StateCallback {
    fn default() -> Self {
        Self::Noop
    }
}

impl From<Arc<dyn StateHandler>> for StateCallback {
    fn from(handler: Arc<dyn StateHandler>) -> Self {
        Self::Handler(handler)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::MemorySession;
    use crate::widgets::kbd::Checkbox;
    use crate::widgets::text::Plain;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn event() -> ChatEvent {
        ChatEvent::new("evt-1", "telegram", "chat-1", "user-1")
    }

    fn checkbox() -> Checkbox {
        Checkbox::new("probe", Plain::new("on"), Plain::new("off"), false).unwrap()
    }

    struct CountingHandler {
        hits: AtomicUsize,
    }

    #[async_trait]
    impl StateHandler for CountingHandler {
        async fn handle(
            &self,
            _event: &ChatEvent,
            _checkbox: ManagedCheckbox<'_>,
            _session: &dyn DialogSession,
        ) -> anyhow::Result<()> {
            self.hits.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    struct FailingHandler;

    #[async_trait]
    impl StateHandler for FailingHandler {
        async fn handle(
            &self,
            _event: &ChatEvent,
            _checkbox: ManagedCheckbox<'_>,
            _session: &dyn DialogSession,
        ) -> anyhow::Result<()> {
            anyhow::bail!("handler exploded")
        }
    }

    #[tokio::test]
    async fn noop_processes_without_side_effects() {
        let session = MemorySession::new();
        let widget = checkbox();
        let callback = StateCallback::default();

        let result = callback
            .process(&event(), widget.managed(&session), &session)
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn handler_variant_is_invoked() {
        let session = MemorySession::new();
        let widget = checkbox();
        let handler = Arc::new(CountingHandler {
            hits: AtomicUsize::new(0),
        });
        let callback = StateCallback::from_handler(handler.clone());

        callback
            .process(&event(), widget.managed(&session), &session)
            .await
            .unwrap();

        assert_eq!(handler.hits.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn func_variant_is_invoked() {
        let session = MemorySession::new();
        let widget = checkbox();
        let hits = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&hits);
        let callback = StateCallback::from_fn(move |_event, _checkbox, _session| {
            let seen = Arc::clone(&seen);
            Box::pin(async move {
                seen.fetch_add(1, Ordering::SeqCst);
                Ok(())
            })
        });

        callback
            .process(&event(), widget.managed(&session), &session)
            .await
            .unwrap();

        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn handler_error_propagates_unmodified() {
        let session = MemorySession::new();
        let widget = checkbox();
        let callback = StateCallback::from_handler(Arc::new(FailingHandler));

        let error = callback
            .process(&event(), widget.managed(&session), &session)
            .await
            .unwrap_err();

        assert!(matches!(error, WidgetError::Callback(_)));
        assert_eq!(error.to_string(), "handler exploded");
    }
}
