use super::DialogSession;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

/// In-memory dialog session — one widget-data map behind a mutex.
///
/// The reference backing for tests and single-process embedders. Sessions
/// that outlive the process belong to the surrounding framework, not here.
pub struct MemorySession {
    slots: Mutex<HashMap<String, Value>>,
}

impl MemorySession {
    pub fn new() -> Self {
        Self {
            slots: Mutex::new(HashMap::new()),
        }
    }
}

impl DialogSession for MemorySession {
    fn widget_data(&self, widget_id: &str) -> Option<Value> {
        self.slots
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(widget_id)
            .cloned()
    }

    fn set_widget_data(&self, widget_id: &str, value: Value) {
        self.slots
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(widget_id.to_string(), value);
    }
}
