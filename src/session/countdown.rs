// ============================================================================
// COUNTDOWN PERSISTENCE - OTP expiry / resend cooldown survive page reloads
// ============================================================================
// Stored remaining values are never trusted as-is: restore always recomputes
// against elapsed wall-clock time.

use crate::config::{OTP_EXPIRY_SECS, RESEND_COOLDOWN_SECS};
use crate::session::store::KeyValueStore;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownKind {
    OtpExpiry,
    ResendCooldown,
}

impl CountdownKind {
    /// Value a screen starts from when no entry is stored.
    pub fn default_secs(self) -> u32 {
        match self {
            CountdownKind::OtpExpiry => OTP_EXPIRY_SECS,
            CountdownKind::ResendCooldown => 0,
        }
    }

    /// Duration started when a fresh OTP is issued.
    pub fn issue_secs(self) -> u32 {
        match self {
            CountdownKind::OtpExpiry => OTP_EXPIRY_SECS,
            CountdownKind::ResendCooldown => RESEND_COOLDOWN_SECS,
        }
    }

    fn key_part(self) -> &'static str {
        match self {
            CountdownKind::OtpExpiry => "otp_expiry",
            CountdownKind::ResendCooldown => "resend_cooldown",
        }
    }

    /// Storage key, namespaced by the user the OTP was issued for.
    pub fn storage_key(self, user_id: &str) -> String {
        format!("quickrent_{}_{}", self.key_part(), user_id)
    }
}

/// What a tick writes to storage: the remaining seconds and when they were
/// observed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StoredCountdown {
    pub remaining: u32,
    /// Unix timestamp, seconds.
    pub saved_at: i64,
}

/// Remaining seconds on mount: stored remaining minus elapsed wall-clock
/// time, floored at zero. Missing or unreadable entries fall back to the
/// kind's default.
pub fn restore(store: &dyn KeyValueStore, kind: CountdownKind, user_id: &str, now: i64) -> u32 {
    let key = kind.storage_key(user_id);
    let Some(raw) = store.get(&key) else {
        return kind.default_secs();
    };

    let Ok(stored) = serde_json::from_str::<StoredCountdown>(&raw) else {
        log::warn!("discarding unreadable countdown entry '{}'", key);
        let _ = store.remove(&key);
        return kind.default_secs();
    };

    let elapsed = now.saturating_sub(stored.saved_at).max(0);
    let elapsed = u32::try_from(elapsed).unwrap_or(u32::MAX);
    stored.remaining.saturating_sub(elapsed)
}

/// Persist one tick: save `(remaining, now)` while counting, drop the entry
/// once the countdown reaches zero.
pub fn persist_tick(
    store: &dyn KeyValueStore,
    kind: CountdownKind,
    user_id: &str,
    remaining: u32,
    now: i64,
) {
    let key = kind.storage_key(user_id);
    if remaining > 0 {
        let entry = StoredCountdown {
            remaining,
            saved_at: now,
        };
        match serde_json::to_string(&entry) {
            Ok(json) => {
                if let Err(e) = store.set(&key, &json) {
                    log::error!("failed to persist countdown: {}", e);
                }
            }
            Err(e) => log::error!("failed to serialize countdown: {}", e),
        }
    } else if let Err(e) = store.remove(&key) {
        log::error!("failed to clear countdown: {}", e);
    }
}

/// Drop the stored entry so the next restore falls back to the default.
pub fn reset(store: &dyn KeyValueStore, kind: CountdownKind, user_id: &str) {
    let _ = store.remove(&kind.storage_key(user_id));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::store::MemoryStore;

    const USER: &str = "user-42";

    #[test]
    fn restore_subtracts_elapsed_time() {
        let store = MemoryStore::new();
        persist_tick(&store, CountdownKind::OtpExpiry, USER, 500, 1_000);

        let remaining = restore(&store, CountdownKind::OtpExpiry, USER, 1_200);
        assert_eq!(remaining, 300);
    }

    #[test]
    fn restore_floors_at_zero() {
        let store = MemoryStore::new();
        persist_tick(&store, CountdownKind::OtpExpiry, USER, 30, 1_000);

        assert_eq!(restore(&store, CountdownKind::OtpExpiry, USER, 5_000), 0);
    }

    #[test]
    fn missing_entry_uses_defaults() {
        let store = MemoryStore::new();
        assert_eq!(restore(&store, CountdownKind::OtpExpiry, USER, 1_000), 600);
        assert_eq!(
            restore(&store, CountdownKind::ResendCooldown, USER, 1_000),
            0
        );
    }

    #[test]
    fn reaching_zero_removes_the_entry() {
        let store = MemoryStore::new();
        persist_tick(&store, CountdownKind::OtpExpiry, USER, 2, 1_000);
        assert!(store
            .get(&CountdownKind::OtpExpiry.storage_key(USER))
            .is_some());

        persist_tick(&store, CountdownKind::OtpExpiry, USER, 0, 1_002);
        assert!(store
            .get(&CountdownKind::OtpExpiry.storage_key(USER))
            .is_none());

        // and further restores are back at the default
        assert_eq!(restore(&store, CountdownKind::OtpExpiry, USER, 1_003), 600);
    }

    #[test]
    fn reset_clears_stored_entry() {
        let store = MemoryStore::new();
        persist_tick(&store, CountdownKind::ResendCooldown, USER, 25, 1_000);

        reset(&store, CountdownKind::ResendCooldown, USER);
        assert_eq!(
            restore(&store, CountdownKind::ResendCooldown, USER, 1_001),
            0
        );
    }

    #[test]
    fn corrupt_entry_falls_back_to_default() {
        let store = MemoryStore::new();
        let key = CountdownKind::OtpExpiry.storage_key(USER);
        store.set(&key, "not-json").unwrap();

        assert_eq!(restore(&store, CountdownKind::OtpExpiry, USER, 1_000), 600);
        assert!(store.get(&key).is_none());
    }

    #[test]
    fn timers_are_namespaced_per_user() {
        let store = MemoryStore::new();
        persist_tick(&store, CountdownKind::OtpExpiry, "alice", 100, 1_000);

        assert_eq!(restore(&store, CountdownKind::OtpExpiry, "bob", 1_000), 600);
        assert_eq!(
            restore(&store, CountdownKind::OtpExpiry, "alice", 1_000),
            100
        );
    }

    #[test]
    fn clock_skew_backwards_does_not_inflate_remaining() {
        let store = MemoryStore::new();
        persist_tick(&store, CountdownKind::OtpExpiry, USER, 500, 2_000);

        // wall clock went backwards; treat as zero elapsed
        assert_eq!(restore(&store, CountdownKind::OtpExpiry, USER, 1_500), 500);
    }
}
