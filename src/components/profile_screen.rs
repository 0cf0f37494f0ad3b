use crate::models::{ApiOutcome, UpdateProfileRequest, UserProfile};
use crate::services::profile_service;
use crate::session::SessionContext;
use crate::utils::validators::{validate_profile, ValidationReport};
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ProfileScreenProps {
    pub session: SessionContext,
}

#[function_component(ProfileScreen)]
pub fn profile_screen(props: &ProfileScreenProps) -> Html {
    let profile = use_state(|| None::<UserProfile>);
    let loading = use_state(|| true);
    let status = use_state(|| None::<String>);
    let report = use_state(ValidationReport::default);

    let name_ref = use_node_ref();
    let email_ref = use_node_ref();
    let phone_ref = use_node_ref();

    // load on mount; a 401 here clears the session and redirects via the client
    {
        let session = props.session.clone();
        let profile = profile.clone();
        let loading = loading.clone();
        let status = status.clone();

        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match profile_service::fetch_profile(&session).await {
                    ApiOutcome::Success { data, .. } => {
                        profile.set(Some(data));
                        loading.set(false);
                    }
                    ApiOutcome::Failure { error, code } => {
                        log::error!("profile load failed ({}): {}", code, error);
                        status.set(Some(error));
                        loading.set(false);
                    }
                }
            });
            || ()
        });
    }

    let on_submit = {
        let session = props.session.clone();
        let profile = profile.clone();
        let status = status.clone();
        let report = report.clone();
        let name_ref = name_ref.clone();
        let email_ref = email_ref.clone();
        let phone_ref = phone_ref.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let (Some(name_input), Some(email_input), Some(phone_input)) = (
                name_ref.cast::<HtmlInputElement>(),
                email_ref.cast::<HtmlInputElement>(),
                phone_ref.cast::<HtmlInputElement>(),
            ) else {
                return;
            };

            let full_name = name_input.value();
            let email = email_input.value();
            let phone = phone_input.value();

            let checked = validate_profile(&full_name, &email, &phone);
            if !checked.is_valid() {
                report.set(checked);
                return;
            }
            report.set(ValidationReport::default());

            let request = UpdateProfileRequest {
                full_name,
                email,
                phone: if phone.trim().is_empty() {
                    None
                } else {
                    Some(phone.trim().to_string())
                },
            };

            let session = session.clone();
            let profile = profile.clone();
            let status = status.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match profile_service::update_profile(&session, &request).await {
                    ApiOutcome::Success { data, message } => {
                        profile.set(Some(data));
                        status.set(Some(
                            message.unwrap_or_else(|| "profile updated".to_string()),
                        ));
                    }
                    ApiOutcome::Failure { error, code } => {
                        log::error!("profile update failed ({}): {}", code, error);
                        status.set(Some(error));
                    }
                }
            });
        })
    };

    let field_error = |name: &str| {
        report
            .field(name)
            .map(|message| html! { <span class="field-error">{ message }</span> })
    };

    if *loading {
        return html! { <div class="profile-screen">{"Loading profile..."}</div> };
    }

    let Some(current) = (*profile).clone() else {
        return html! {
            <div class="profile-screen">
                { status.as_deref().unwrap_or("could not load profile") }
            </div>
        };
    };

    html! {
        <div class="profile-screen">
            <h2>{"Your profile"}</h2>

            <form class="profile-form" onsubmit={on_submit}>
                <div class="form-group">
                    <label for="full_name">{"Full name"}</label>
                    <input type="text" id="full_name" value={current.full_name.clone()} ref={name_ref} />
                    { for field_error("full_name") }
                </div>

                <div class="form-group">
                    <label for="email">{"Email"}</label>
                    <input type="email" id="email" value={current.email.clone()} ref={email_ref} />
                    { for field_error("email") }
                </div>

                <div class="form-group">
                    <label for="phone">{"Phone (optional)"}</label>
                    <input type="tel" id="phone" value={current.phone.clone().unwrap_or_default()} ref={phone_ref} />
                    { for field_error("phone") }
                </div>

                <button type="submit" class="btn-save">{"Save changes"}</button>
            </form>

            {
                for (*status).clone().map(|message| html! {
                    <p class="profile-status">{ message }</p>
                })
            }
        </div>
    }
}
