pub mod context;
pub mod countdown;
pub mod store;

pub use context::SessionContext;
pub use countdown::{CountdownKind, StoredCountdown};
pub use store::{KeyValueStore, LocalStore};

#[cfg(test)]
pub use store::MemoryStore;
