// ============================================================================
// USE AUTH - account flow state machine (login → OTP → session)
// ============================================================================

use crate::models::ApiOutcome;
use crate::services::auth_service;
use crate::session::{countdown, CountdownKind, SessionContext};
use yew::prelude::*;

/// Where the user is in the account flow.
#[derive(Clone, PartialEq, Debug)]
pub enum AuthPhase {
    LoggedOut,
    /// Login accepted, waiting for the mailed OTP.
    AwaitingOtp { user_id: String, email: String },
    /// Password reset requested, waiting for OTP + new password.
    ResetRequested { user_id: String, email: String },
    LoggedIn,
}

/// Single dismissible request-level message shown above the active screen.
#[derive(Clone, PartialEq, Debug)]
pub struct Banner {
    pub message: String,
    pub error: bool,
}

impl Banner {
    fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            error: true,
        }
    }

    fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            error: false,
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct AuthFlowState {
    pub phase: AuthPhase,
    pub busy: bool,
    pub banner: Option<Banner>,
}

#[derive(Clone)]
pub struct UseAuthHandle {
    pub state: UseStateHandle<AuthFlowState>,
    pub login: Callback<(String, String)>,
    pub verify: Callback<String>,
    pub forgot: Callback<String>,
    pub reset: Callback<(String, String)>,
    pub logout: Callback<()>,
    pub dismiss_banner: Callback<()>,
}

#[hook]
pub fn use_auth(session: SessionContext) -> UseAuthHandle {
    let state = use_state(|| AuthFlowState {
        phase: if session.is_authenticated() {
            AuthPhase::LoggedIn
        } else {
            AuthPhase::LoggedOut
        },
        busy: false,
        banner: None,
    });

    let login = {
        let state = state.clone();
        let session = session.clone();
        Callback::from(move |(email, password): (String, String)| {
            let state = state.clone();
            let session = session.clone();
            set_busy(&state);
            wasm_bindgen_futures::spawn_local(async move {
                match auth_service::login(&session, &email, &password).await {
                    ApiOutcome::Success { data, .. } => {
                        let phase = if data.token.is_some() {
                            AuthPhase::LoggedIn
                        } else {
                            AuthPhase::AwaitingOtp {
                                user_id: data.user_id,
                                email: data.email,
                            }
                        };
                        state.set(AuthFlowState {
                            phase,
                            busy: false,
                            banner: None,
                        });
                    }
                    ApiOutcome::Failure { error, code } => {
                        log::warn!("login failed ({}): {}", code, error);
                        fail(&state, error);
                    }
                }
            });
        })
    };

    let verify = {
        let state = state.clone();
        let session = session.clone();
        Callback::from(move |otp: String| {
            let AuthPhase::AwaitingOtp { user_id, .. } = (*state).phase.clone() else {
                return;
            };
            let state = state.clone();
            let session = session.clone();
            set_busy(&state);
            wasm_bindgen_futures::spawn_local(async move {
                match auth_service::verify_otp(&session, &user_id, &otp).await {
                    ApiOutcome::Success { .. } => {
                        // spent OTP, drop its countdowns
                        countdown::reset(session.store().as_ref(), CountdownKind::OtpExpiry, &user_id);
                        countdown::reset(
                            session.store().as_ref(),
                            CountdownKind::ResendCooldown,
                            &user_id,
                        );
                        state.set(AuthFlowState {
                            phase: AuthPhase::LoggedIn,
                            busy: false,
                            banner: None,
                        });
                    }
                    ApiOutcome::Failure { error, code } => {
                        log::warn!("verification failed ({}): {}", code, error);
                        fail(&state, error);
                    }
                }
            });
        })
    };

    let forgot = {
        let state = state.clone();
        let session = session.clone();
        Callback::from(move |email: String| {
            let state = state.clone();
            let session = session.clone();
            set_busy(&state);
            wasm_bindgen_futures::spawn_local(async move {
                match auth_service::forgot_password(&session, &email).await {
                    ApiOutcome::Success { data, message } => {
                        state.set(AuthFlowState {
                            phase: AuthPhase::ResetRequested {
                                user_id: data.user_id,
                                email: data.email,
                            },
                            busy: false,
                            banner: Some(Banner::info(message.unwrap_or_else(|| {
                                "check your inbox for the reset code".to_string()
                            }))),
                        });
                    }
                    ApiOutcome::Failure { error, code } => {
                        log::warn!("reset request failed ({}): {}", code, error);
                        fail(&state, error);
                    }
                }
            });
        })
    };

    let reset = {
        let state = state.clone();
        let session = session.clone();
        Callback::from(move |(otp, new_password): (String, String)| {
            let AuthPhase::ResetRequested { user_id, .. } = (*state).phase.clone() else {
                return;
            };
            let state = state.clone();
            let session = session.clone();
            set_busy(&state);
            wasm_bindgen_futures::spawn_local(async move {
                match auth_service::reset_password(&session, &user_id, &otp, &new_password).await {
                    ApiOutcome::Success { message, .. } => {
                        state.set(AuthFlowState {
                            phase: AuthPhase::LoggedOut,
                            busy: false,
                            banner: Some(Banner::info(message.unwrap_or_else(|| {
                                "password updated, log in with the new one".to_string()
                            }))),
                        });
                    }
                    ApiOutcome::Failure { error, code } => {
                        log::warn!("password reset failed ({}): {}", code, error);
                        fail(&state, error);
                    }
                }
            });
        })
    };

    let logout = {
        let state = state.clone();
        let session = session.clone();
        Callback::from(move |_| {
            auth_service::logout(&session);
            state.set(AuthFlowState {
                phase: AuthPhase::LoggedOut,
                busy: false,
                banner: None,
            });
        })
    };

    let dismiss_banner = {
        let state = state.clone();
        Callback::from(move |_| {
            let mut next = (*state).clone();
            next.banner = None;
            state.set(next);
        })
    };

    UseAuthHandle {
        state,
        login,
        verify,
        forgot,
        reset,
        logout,
        dismiss_banner,
    }
}

fn set_busy(state: &UseStateHandle<AuthFlowState>) {
    let mut next = (**state).clone();
    next.busy = true;
    next.banner = None;
    state.set(next);
}

fn fail(state: &UseStateHandle<AuthFlowState>, error: String) {
    let mut next = (**state).clone();
    next.busy = false;
    next.banner = Some(Banner::error(error));
    state.set(next);
}
