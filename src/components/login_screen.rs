use crate::models::Role;
use crate::utils::validators::{validate_email, validate_login, ValidationReport};
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoginScreenProps {
    pub role: Role,
    pub busy: bool,
    pub on_role_change: Callback<Role>,
    pub on_login: Callback<(String, String)>,
    /// Start a password reset with the entered email.
    pub on_forgot: Callback<String>,
}

#[function_component(LoginScreen)]
pub fn login_screen(props: &LoginScreenProps) -> Html {
    let email_ref = use_node_ref();
    let password_ref = use_node_ref();
    let report = use_state(ValidationReport::default);

    let on_submit = {
        let email_ref = email_ref.clone();
        let password_ref = password_ref.clone();
        let report = report.clone();
        let on_login = props.on_login.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if let (Some(email_input), Some(password_input)) = (
                email_ref.cast::<HtmlInputElement>(),
                password_ref.cast::<HtmlInputElement>(),
            ) {
                let email = email_input.value();
                let password = password_input.value();

                let checked = validate_login(&email, &password);
                if checked.is_valid() {
                    report.set(ValidationReport::default());
                    on_login.emit((email, password));
                } else {
                    report.set(checked);
                }
            }
        })
    };

    let on_forgot_click = {
        let email_ref = email_ref.clone();
        let report = report.clone();
        let on_forgot = props.on_forgot.clone();

        Callback::from(move |_| {
            let Some(email_input) = email_ref.cast::<HtmlInputElement>() else {
                return;
            };
            let email = email_input.value();

            // a reset only needs a valid email
            let checked = validate_email(&email);
            if checked.is_valid() {
                report.set(ValidationReport::default());
                on_forgot.emit(email);
            } else {
                report.set(checked);
            }
        })
    };

    let on_role_select = {
        let on_role_change = props.on_role_change.clone();
        Callback::from(move |e: Event| {
            let value = e
                .target_dyn_into::<web_sys::HtmlSelectElement>()
                .map(|select| select.value());
            let role = match value.as_deref() {
                Some("admin") => Role::Admin,
                Some("landlord") => Role::Landlord,
                _ => Role::Renter,
            };
            on_role_change.emit(role);
        })
    };

    let field_error = |name: &str| {
        report
            .field(name)
            .map(|message| html! { <span class="field-error">{ message }</span> })
    };

    html! {
        <div class="login-screen">
            <div class="login-container">
                <div class="login-header">
                    <h2>{"Sign in"}</h2>
                    <p>{"Find your next place, or rent yours out"}</p>
                </div>

                <form class="login-form" onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="role">{"I am a"}</label>
                        <select id="role" onchange={on_role_select}>
                            <option value="renter" selected={props.role == Role::Renter}>{"Renter"}</option>
                            <option value="landlord" selected={props.role == Role::Landlord}>{"Landlord"}</option>
                            <option value="admin" selected={props.role == Role::Admin}>{"Admin"}</option>
                        </select>
                    </div>

                    <div class="form-group">
                        <label for="email">{"Email"}</label>
                        <input
                            type="email"
                            id="email"
                            placeholder="you@example.com"
                            ref={email_ref}
                        />
                        { for field_error("email") }
                    </div>

                    <div class="form-group">
                        <label for="password">{"Password"}</label>
                        <input
                            type="password"
                            id="password"
                            placeholder="Your password"
                            ref={password_ref}
                        />
                        { for field_error("password") }
                    </div>

                    <button type="submit" class="btn-login" disabled={props.busy}>
                        { if props.busy { "Signing in..." } else { "Sign in" } }
                    </button>

                    <button type="button" class="btn-forgot" onclick={on_forgot_click}>
                        {"Forgot password?"}
                    </button>
                </form>
            </div>
        </div>
    }
}
