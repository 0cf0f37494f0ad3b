use serde::{Deserialize, Serialize};

/// Account role. Determines which endpoints are called and which
/// local-storage keys hold the session token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Landlord,
    Renter,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Landlord => "landlord",
            Role::Renter => "renter",
        }
    }

    /// Prefix for all storage keys belonging to this role's session.
    pub fn key_prefix(&self) -> &'static str {
        self.as_str()
    }

    /// Login entry point the client redirects to when the session expires.
    pub fn login_path(&self) -> &'static str {
        match self {
            Role::Admin => "/admin/login",
            Role::Landlord => "/landlord/login",
            Role::Renter => "/login",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
