// ============================================================================
// APP - role selection + screen routing driven by the auth flow phase
// ============================================================================

use crate::components::{
    ErrorBanner, LoginScreen, OtpScreen, ProfileScreen, ReportsScreen, ResetPasswordScreen,
    ReviewsScreen,
};
use crate::hooks::{use_auth, AuthPhase};
use crate::models::Role;
use crate::session::SessionContext;
use yew::prelude::*;

#[derive(Clone, Copy, PartialEq)]
enum AdminTab {
    Reports,
    Reviews,
    Profile,
}

#[function_component(App)]
pub fn app() -> Html {
    let role = use_state(|| Role::Renter);
    let session = use_memo(*role, |role| SessionContext::new(*role));
    let auth = use_auth((*session).clone());
    let admin_tab = use_state(|| AdminTab::Reports);

    let state = (*auth.state).clone();

    let on_role_change = {
        let role = role.clone();
        Callback::from(move |next: Role| role.set(next))
    };

    let banner = state.banner.clone().map(|banner| {
        html! {
            <ErrorBanner {banner} on_dismiss={auth.dismiss_banner.clone()} />
        }
    });

    let screen = match &state.phase {
        AuthPhase::LoggedOut => html! {
            <LoginScreen
                role={*role}
                busy={state.busy}
                on_role_change={on_role_change}
                on_login={auth.login.clone()}
                on_forgot={auth.forgot.clone()}
            />
        },
        AuthPhase::AwaitingOtp { user_id, email } => html! {
            <OtpScreen
                session={(*session).clone()}
                user_id={user_id.clone()}
                email={email.clone()}
                busy={state.busy}
                on_verify={auth.verify.clone()}
            />
        },
        AuthPhase::ResetRequested { email, .. } => html! {
            <ResetPasswordScreen
                email={email.clone()}
                busy={state.busy}
                on_reset={auth.reset.clone()}
            />
        },
        AuthPhase::LoggedIn => {
            let logout_button = html! {
                <button class="btn-logout" onclick={auth.logout.reform(|_| ())}>
                    {"Log out"}
                </button>
            };
            if *role == Role::Admin {
                let tab = *admin_tab;
                let tab_button = |target: AdminTab, label: &str| {
                    let admin_tab = admin_tab.clone();
                    let class = if tab == target { "tab tab-active" } else { "tab" };
                    html! {
                        <button {class} onclick={Callback::from(move |_| admin_tab.set(target))}>
                            { label }
                        </button>
                    }
                };
                html! {
                    <div class="admin-shell">
                        <nav class="admin-tabs">
                            { tab_button(AdminTab::Reports, "Reports") }
                            { tab_button(AdminTab::Reviews, "Reviews") }
                            { tab_button(AdminTab::Profile, "Profile") }
                            { logout_button }
                        </nav>
                        {
                            match tab {
                                AdminTab::Reports => html! { <ReportsScreen session={(*session).clone()} /> },
                                AdminTab::Reviews => html! { <ReviewsScreen session={(*session).clone()} /> },
                                AdminTab::Profile => html! { <ProfileScreen session={(*session).clone()} /> },
                            }
                        }
                    </div>
                }
            } else {
                html! {
                    <div class="account-shell">
                        <nav class="account-bar">
                            <span class="account-role">{ role.as_str() }</span>
                            { logout_button }
                        </nav>
                        <ProfileScreen session={(*session).clone()} />
                    </div>
                }
            }
        }
    };

    html! {
        <div class="quickrent-app">
            <header class="app-header">
                <h1>{"QuickRent"}</h1>
            </header>
            { for banner }
            { screen }
        </div>
    }
}
