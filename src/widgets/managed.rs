use crate::session::DialogSession;
use std::ops::Deref;

/// Session-bound projection of a widget.
///
/// Holds two borrows and nothing else — constructed on demand, never
/// cached, so every read through it hits the live session store. Derefs to
/// the widget for read-only access to its configuration.
pub struct Managed<'a, W> {
    widget: &'a W,
    session: &'a dyn DialogSession,
}

impl<'a, W> Managed<'a, W> {
    pub(crate) fn new(widget: &'a W, session: &'a dyn DialogSession) -> Self {
        Self { widget, session }
    }

    pub fn widget(&self) -> &'a W {
        self.widget
    }

    pub fn session(&self) -> &'a dyn DialogSession {
        self.session
    }
}

impl<W> Clone for Managed<'_, W> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<W> Copy for Managed<'_, W> {}

impl<W> Deref for Managed<'_, W> {
    type Target = W;

    fn deref(&self) -> &W {
        self.widget
    }
}
