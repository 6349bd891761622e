//! Session store seam
//!
//! The engine does not own session storage. It reads and writes a handful of
//! keys through this trait; a web framework's session object, a cache client or
//! the in-memory map below can sit behind it.

use rustc_hash::FxHashMap;
use serde_json::Value;

/// Key-value storage for one session
pub trait SessionStore {
    /// Current value for `key`, if any
    fn get(&self, key: &str) -> Option<Value>;

    /// Replace the value for `key`
    fn set(&mut self, key: &str, value: Value);
}

/// In-memory session store
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryStore {
    values: FxHashMap<String, Value>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<Value> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: Value) {
        self.values.insert(key.to_string(), value);
    }
}
