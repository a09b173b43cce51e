use indexmap::IndexMap;

use crate::error::{Error, Result};

/// Write side of a session-scoped key/value store.
pub trait SessionStorage {
    fn set_item(&mut self, key: &str, value: &str) -> Result<()>;
}

/// In-process session storage with an optional quota on the total bytes of
/// keys plus values.
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStorage {
    items: IndexMap<String, String>,
    quota: Option<usize>,
}

impl MemorySessionStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quota(quota: usize) -> Self {
        Self {
            items: IndexMap::new(),
            quota: Some(quota),
        }
    }

    pub fn get_item(&self, key: &str) -> Option<&str> {
        self.items.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn used_without(&self, key: &str) -> usize {
        self.items
            .iter()
            .filter(|(k, _)| k.as_str() != key)
            .map(|(k, v)| k.len() + v.len())
            .sum()
    }
}

impl SessionStorage for MemorySessionStorage {
    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        if let Some(quota) = self.quota {
            let needed = self.used_without(key) + key.len() + value.len();
            if needed > quota {
                return Err(Error::Storage(format!(
                    "quota of {} bytes exceeded ({} needed)",
                    quota, needed
                )));
            }
        }
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Storage that is disabled: every write is rejected.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledSessionStorage;

impl SessionStorage for DisabledSessionStorage {
    fn set_item(&mut self, _key: &str, _value: &str) -> Result<()> {
        Err(Error::Storage("session storage is disabled".into()))
    }
}
