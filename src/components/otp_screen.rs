// ============================================================================
// OTP SCREEN - 4-digit verification with persistent expiry/resend countdowns
// ============================================================================

use crate::config::{OTP_EXPIRY_SECS, RESEND_COOLDOWN_SECS};
use crate::hooks::use_countdown;
use crate::models::ApiOutcome;
use crate::services::auth_service;
use crate::session::{CountdownKind, SessionContext};
use crate::utils::validators::{validate_otp, ValidationReport};
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct OtpScreenProps {
    pub session: SessionContext,
    pub user_id: String,
    pub email: String,
    pub busy: bool,
    pub on_verify: Callback<String>,
}

#[function_component(OtpScreen)]
pub fn otp_screen(props: &OtpScreenProps) -> Html {
    let otp_ref = use_node_ref();
    let report = use_state(ValidationReport::default);
    let resend_error = use_state(|| None::<String>);

    let expiry = use_countdown(
        props.session.clone(),
        CountdownKind::OtpExpiry,
        props.user_id.clone(),
    );
    let cooldown = use_countdown(
        props.session.clone(),
        CountdownKind::ResendCooldown,
        props.user_id.clone(),
    );

    let expired = expiry.finished();

    let on_submit = {
        let otp_ref = otp_ref.clone();
        let report = report.clone();
        let on_verify = props.on_verify.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if let Some(otp_input) = otp_ref.cast::<HtmlInputElement>() {
                let otp = otp_input.value();
                let checked = validate_otp(&otp);
                if checked.is_valid() {
                    report.set(ValidationReport::default());
                    on_verify.emit(otp);
                } else {
                    report.set(checked);
                }
            }
        })
    };

    // fresh OTP: reset both countdowns and clear any stored entries
    let on_resend = {
        let session = props.session.clone();
        let user_id = props.user_id.clone();
        let resend_error = resend_error.clone();
        let restart_expiry = expiry.restart.clone();
        let restart_cooldown = cooldown.restart.clone();

        Callback::from(move |_| {
            let session = session.clone();
            let user_id = user_id.clone();
            let resend_error = resend_error.clone();
            let restart_expiry = restart_expiry.clone();
            let restart_cooldown = restart_cooldown.clone();

            wasm_bindgen_futures::spawn_local(async move {
                match auth_service::resend_otp(&session, &user_id).await {
                    ApiOutcome::Success { .. } => {
                        log::info!("fresh OTP issued for {}", user_id);
                        resend_error.set(None);
                        restart_expiry.emit(OTP_EXPIRY_SECS);
                        restart_cooldown.emit(RESEND_COOLDOWN_SECS);
                    }
                    ApiOutcome::Failure { error, code } => {
                        log::warn!("resend failed ({}): {}", code, error);
                        resend_error.set(Some(error));
                    }
                }
            });
        })
    };

    let resend_label = if cooldown.finished() {
        "Resend code".to_string()
    } else {
        format!("Resend in {}", cooldown.display())
    };

    html! {
        <div class="otp-screen">
            <div class="otp-container">
                <h2>{"Check your inbox"}</h2>
                <p>{ format!("We sent a verification code to {}", props.email) }</p>

                <form class="otp-form" onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="otp">{"Verification code"}</label>
                        <input
                            type="text"
                            id="otp"
                            inputmode="numeric"
                            maxlength="4"
                            placeholder="0000"
                            ref={otp_ref}
                        />
                        {
                            for report.field("otp").map(|message| html! {
                                <span class="field-error">{ message }</span>
                            })
                        }
                    </div>

                    <p class={ if expired { "otp-expiry expired" } else { "otp-expiry" } }>
                        {
                            if expired {
                                "Code expired, request a new one".to_string()
                            } else {
                                format!("Code expires in {}", expiry.display())
                            }
                        }
                    </p>

                    <button type="submit" class="btn-verify" disabled={props.busy || expired}>
                        { if props.busy { "Verifying..." } else { "Verify" } }
                    </button>

                    <button
                        type="button"
                        class="btn-resend"
                        disabled={!cooldown.finished()}
                        onclick={on_resend}
                    >
                        { resend_label }
                    </button>

                    {
                        for (*resend_error).clone().map(|message| html! {
                            <span class="field-error">{ message }</span>
                        })
                    }
                </form>
            </div>
        </div>
    }
}
