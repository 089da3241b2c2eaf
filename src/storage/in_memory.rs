//! In-memory implementation of SessionStorage for testing and development

use crate::core::{SessionError, SessionStorage};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// In-memory session storage implementation
///
/// Stands in for the browser `localStorage`. Uses RwLock for thread-safe access.
#[derive(Clone, Default)]
pub struct InMemorySessionStorage {
    items: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemorySessionStorage {
    /// Create an empty session storage
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStorage for InMemorySessionStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, SessionError> {
        let items = self
            .items
            .read()
            .map_err(|e| SessionError::Unavailable(format!("Failed to acquire read lock: {e}")))?;

        Ok(items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), SessionError> {
        let mut items = self
            .items
            .write()
            .map_err(|e| SessionError::Unavailable(format!("Failed to acquire write lock: {e}")))?;

        items.insert(key.to_string(), value.to_string());

        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), SessionError> {
        let mut items = self
            .items
            .write()
            .map_err(|e| SessionError::Unavailable(format!("Failed to acquire write lock: {e}")))?;

        items.remove(key);

        Ok(())
    }

    fn clear(&self) -> Result<(), SessionError> {
        let mut items = self
            .items
            .write()
            .map_err(|e| SessionError::Unavailable(format!("Failed to acquire write lock: {e}")))?;

        items.clear();

        Ok(())
    }
}
