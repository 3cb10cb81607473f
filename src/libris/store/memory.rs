use super::KeyValueStore;
use crate::error::{LibrisError, Result};
use std::collections::HashMap;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryKvStore {
    entries: HashMap<String, String>,
    simulate_write_error: bool,
    failing_key: Option<String>,
    writes: usize,
}

impl InMemoryKvStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_string(), value.to_string());
        self
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&mut self, simulate: bool) {
        self.simulate_write_error = simulate;
    }

    /// Make writes to one key fail while other keys keep working.
    pub fn fail_writes_to(&mut self, key: &str) {
        self.failing_key = Some(key.to_string());
    }

    /// Number of successful `set` calls so far.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl KeyValueStore for InMemoryKvStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        if self.simulate_write_error {
            return Err(LibrisError::Store("Simulated write error".to_string()));
        }
        if self.failing_key.as_deref() == Some(key) {
            return Err(LibrisError::Store(format!("Simulated write error on {}", key)));
        }
        self.entries.insert(key.to_string(), value.to_string());
        self.writes += 1;
        Ok(())
    }
}
