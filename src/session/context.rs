// ============================================================================
// SESSION CONTEXT - role-scoped token lifecycle over an injected store
// ============================================================================

use crate::models::Role;
use crate::session::store::{KeyValueStore, LocalStore};
use chrono::Utc;
use std::rc::Rc;

/// Explicit session object passed to hooks and components instead of reading
/// ambient globals. Cheap to clone; all clones share the same store.
#[derive(Clone)]
pub struct SessionContext {
    role: Role,
    store: Rc<dyn KeyValueStore>,
}

impl PartialEq for SessionContext {
    fn eq(&self, other: &Self) -> bool {
        self.role == other.role && Rc::ptr_eq(&self.store, &other.store)
    }
}

impl SessionContext {
    pub fn new(role: Role) -> Self {
        Self::with_store(role, Rc::new(LocalStore))
    }

    pub fn with_store(role: Role, store: Rc<dyn KeyValueStore>) -> Self {
        Self { role, store }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn store(&self) -> &Rc<dyn KeyValueStore> {
        &self.store
    }

    fn token_key(&self) -> String {
        format!("{}_token", self.role.key_prefix())
    }

    fn expiry_key(&self) -> String {
        format!("{}_token_expiry", self.role.key_prefix())
    }

    /// Persist the token issued on login/verification, with its expiry when
    /// the server provided one.
    pub fn store_token(&self, token: &str, expires_at: Option<i64>) {
        if let Err(e) = self.store.set(&self.token_key(), token) {
            log::error!("failed to persist session token: {}", e);
        }
        match expires_at {
            Some(ts) => {
                let _ = self.store.set(&self.expiry_key(), &ts.to_string());
            }
            None => {
                let _ = self.store.remove(&self.expiry_key());
            }
        }
    }

    /// Current token, if present and not past its stored expiry. An expired
    /// token is cleared on read.
    pub fn token(&self) -> Option<String> {
        let token = self.store.get(&self.token_key())?;
        if let Some(expiry) = self
            .store
            .get(&self.expiry_key())
            .and_then(|raw| raw.parse::<i64>().ok())
        {
            if Utc::now().timestamp() >= expiry {
                log::info!("{} session token expired, clearing", self.role);
                self.clear();
                return None;
            }
        }
        Some(token)
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// Remove the token and every derived role-scoped key.
    pub fn clear(&self) {
        let _ = self.store.remove(&self.token_key());
        let _ = self.store.remove(&self.expiry_key());
    }

    /// Server said 401: drop the session and bounce to this role's login
    /// entry point. Outside a browser only the clearing happens.
    pub fn handle_unauthorized(&self) {
        log::warn!("unauthorized response, ending {} session", self.role);
        self.clear();
        #[cfg(target_arch = "wasm32")]
        if let Some(win) = web_sys::window() {
            let _ = win.location().set_href(self.role.login_path());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::store::MemoryStore;

    fn context(role: Role) -> SessionContext {
        SessionContext::with_store(role, Rc::new(MemoryStore::new()))
    }

    #[test]
    fn token_round_trip() {
        let session = context(Role::Renter);
        assert_eq!(session.token(), None);

        session.store_token("tok-123", None);
        assert_eq!(session.token(), Some("tok-123".to_string()));
        assert!(session.is_authenticated());
    }

    #[test]
    fn logout_clears_token() {
        let session = context(Role::Landlord);
        session.store_token("tok-456", Some(Utc::now().timestamp() + 3600));

        session.clear();
        assert_eq!(session.token(), None);
        assert!(!session.is_authenticated());
    }

    #[test]
    fn expired_token_is_cleared_on_read() {
        let session = context(Role::Admin);
        session.store_token("stale", Some(Utc::now().timestamp() - 10));

        assert_eq!(session.token(), None);
        // the key itself is gone as well
        assert_eq!(session.store().get("admin_token"), None);
    }

    #[test]
    fn unauthorized_clears_token_without_browser() {
        let session = context(Role::Renter);
        session.store_token("tok-789", None);

        session.handle_unauthorized();
        assert_eq!(session.token(), None);
    }

    #[test]
    fn roles_use_distinct_keys() {
        let store: Rc<dyn KeyValueStore> = Rc::new(MemoryStore::new());
        let admin = SessionContext::with_store(Role::Admin, store.clone());
        let renter = SessionContext::with_store(Role::Renter, store);

        admin.store_token("admin-tok", None);
        assert_eq!(renter.token(), None);
        assert_eq!(admin.token(), Some("admin-tok".to_string()));
    }
}
