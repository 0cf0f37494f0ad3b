pub mod use_auth;
pub mod use_countdown;

pub use use_auth::{use_auth, AuthPhase, Banner, UseAuthHandle};
pub use use_countdown::{use_countdown, UseCountdownHandle};
