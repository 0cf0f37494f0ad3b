// ============================================================================
// KEY-VALUE STORE - localStorage behind a trait so session logic stays
// testable off-browser
// ============================================================================

use web_sys::{window, Storage};

/// Plain string key-value persistence. Entries are JSON strings; there is no
/// schema versioning.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), String>;
    fn remove(&self, key: &str) -> Result<(), String>;
}

/// Browser localStorage implementation.
#[derive(Clone, Default)]
pub struct LocalStore;

impl LocalStore {
    fn storage(&self) -> Option<Storage> {
        window()?.local_storage().ok()?
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        let storage = self.storage().ok_or("localStorage unavailable")?;
        storage
            .set_item(key, value)
            .map_err(|_| format!("failed to write key '{key}'"))
    }

    fn remove(&self, key: &str) -> Result<(), String> {
        let storage = self.storage().ok_or("localStorage unavailable")?;
        storage
            .remove_item(key)
            .map_err(|_| format!("failed to remove key '{key}'"))
    }
}

#[cfg(test)]
pub use memory::MemoryStore;

#[cfg(test)]
mod memory {
    use super::KeyValueStore;
    use std::cell::RefCell;
    use std::collections::HashMap;

    /// In-memory stand-in for localStorage used by unit tests.
    #[derive(Default)]
    pub struct MemoryStore {
        entries: RefCell<HashMap<String, String>>,
    }

    impl MemoryStore {
        pub fn new() -> Self {
            Self::default()
        }
    }

    impl KeyValueStore for MemoryStore {
        fn get(&self, key: &str) -> Option<String> {
            self.entries.borrow().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) -> Result<(), String> {
            self.entries
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }

        fn remove(&self, key: &str) -> Result<(), String> {
            self.entries.borrow_mut().remove(key);
            Ok(())
        }
    }
}
