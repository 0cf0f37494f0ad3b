use crate::utils::validators::{validate_otp, validate_reset_password, ValidationReport};
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ResetPasswordScreenProps {
    pub email: String,
    pub busy: bool,
    /// (otp, new password)
    pub on_reset: Callback<(String, String)>,
}

#[function_component(ResetPasswordScreen)]
pub fn reset_password_screen(props: &ResetPasswordScreenProps) -> Html {
    let otp_ref = use_node_ref();
    let password_ref = use_node_ref();
    let confirm_ref = use_node_ref();
    let report = use_state(ValidationReport::default);

    let on_submit = {
        let otp_ref = otp_ref.clone();
        let password_ref = password_ref.clone();
        let confirm_ref = confirm_ref.clone();
        let report = report.clone();
        let on_reset = props.on_reset.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let (Some(otp_input), Some(password_input), Some(confirm_input)) = (
                otp_ref.cast::<HtmlInputElement>(),
                password_ref.cast::<HtmlInputElement>(),
                confirm_ref.cast::<HtmlInputElement>(),
            ) else {
                return;
            };

            let otp = otp_input.value();
            let password = password_input.value();
            let confirm = confirm_input.value();

            let mut checked = validate_reset_password(&password, &confirm);
            checked.errors.extend(validate_otp(&otp).errors);

            if checked.is_valid() {
                report.set(ValidationReport::default());
                on_reset.emit((otp, password));
            } else {
                report.set(checked);
            }
        })
    };

    let field_error = |name: &str| {
        report
            .field(name)
            .map(|message| html! { <span class="field-error">{ message }</span> })
    };

    html! {
        <div class="reset-screen">
            <div class="reset-container">
                <h2>{"Reset your password"}</h2>
                <p>{ format!("Enter the code we sent to {}", props.email) }</p>

                <form class="reset-form" onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="otp">{"Reset code"}</label>
                        <input
                            type="text"
                            id="otp"
                            inputmode="numeric"
                            maxlength="4"
                            placeholder="0000"
                            ref={otp_ref}
                        />
                        { for field_error("otp") }
                    </div>

                    <div class="form-group">
                        <label for="password">{"New password"}</label>
                        <input type="password" id="password" ref={password_ref} />
                        { for field_error("password") }
                    </div>

                    <div class="form-group">
                        <label for="confirm">{"Confirm new password"}</label>
                        <input type="password" id="confirm" ref={confirm_ref} />
                        { for field_error("confirm") }
                    </div>

                    <button type="submit" class="btn-reset" disabled={props.busy}>
                        { if props.busy { "Saving..." } else { "Set new password" } }
                    </button>
                </form>
            </div>
        </div>
    }
}
