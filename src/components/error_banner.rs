use crate::hooks::Banner;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ErrorBannerProps {
    pub banner: Banner,
    pub on_dismiss: Callback<()>,
}

/// Single dismissible message for request-level outcomes. Field-level
/// validation errors render inline next to their inputs instead.
#[function_component(ErrorBanner)]
pub fn error_banner(props: &ErrorBannerProps) -> Html {
    let class = if props.banner.error {
        "banner banner-error"
    } else {
        "banner banner-info"
    };

    html! {
        <div {class} role="alert">
            <span class="banner-message">{ &props.banner.message }</span>
            <button
                type="button"
                class="banner-dismiss"
                onclick={props.on_dismiss.reform(|_| ())}
            >
                {"✕"}
            </button>
        </div>
    }
}
