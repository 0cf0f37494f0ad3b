// ============================================================================
// REVIEWS SCREEN - admin moderation of listing reviews
// ============================================================================

use crate::models::{ApiOutcome, ModerateReviewRequest, Review, ReviewAction, ReviewStatus};
use crate::services::moderation_service;
use crate::session::SessionContext;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ReviewsScreenProps {
    pub session: SessionContext,
}

fn status_label(status: ReviewStatus) -> &'static str {
    match status {
        ReviewStatus::Pending => "Pending",
        ReviewStatus::Published => "Published",
        ReviewStatus::Removed => "Removed",
    }
}

#[function_component(ReviewsScreen)]
pub fn reviews_screen(props: &ReviewsScreenProps) -> Html {
    let reviews = use_state(Vec::<Review>::new);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);

    {
        let session = props.session.clone();
        let reviews = reviews.clone();
        let loading = loading.clone();
        let error = error.clone();

        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match moderation_service::list_reviews(&session).await {
                    ApiOutcome::Success { data, .. } => {
                        log::info!("loaded {} reviews", data.len());
                        reviews.set(data);
                        loading.set(false);
                    }
                    ApiOutcome::Failure { error: message, code } => {
                        log::error!("review list failed ({}): {}", code, message);
                        error.set(Some(message));
                        loading.set(false);
                    }
                }
            });
            || ()
        });
    }

    let moderate = {
        let session = props.session.clone();
        let reviews = reviews.clone();
        let error = error.clone();

        Callback::from(move |(review_id, action): (String, ReviewAction)| {
            let session = session.clone();
            let reviews = reviews.clone();
            let error = error.clone();

            wasm_bindgen_futures::spawn_local(async move {
                let request = ModerateReviewRequest {
                    action,
                    reason: None,
                };
                match moderation_service::moderate_review(&session, &review_id, &request).await {
                    ApiOutcome::Success { data, .. } => {
                        let updated: Vec<Review> = (*reviews)
                            .iter()
                            .map(|r| if r.id == data.id { data.clone() } else { r.clone() })
                            .collect();
                        reviews.set(updated);
                        error.set(None);
                    }
                    ApiOutcome::Failure { error: message, code } => {
                        log::error!("review moderation failed ({}): {}", code, message);
                        error.set(Some(message));
                    }
                }
            });
        })
    };

    if *loading {
        return html! { <div class="reviews-screen">{"Loading reviews..."}</div> };
    }

    html! {
        <div class="reviews-screen">
            <h2>{"Reviews"}</h2>
            {
                for (*error).clone().map(|message| html! {
                    <p class="screen-error">{ message }</p>
                })
            }
            {
                if reviews.is_empty() {
                    html! { <p class="empty">{"No reviews awaiting moderation."}</p> }
                } else {
                    html! {
                        <ul class="review-list">
                            {
                                for reviews.iter().map(|review| {
                                    let approve = {
                                        let moderate = moderate.clone();
                                        let id = review.id.clone();
                                        Callback::from(move |_| moderate.emit((id.clone(), ReviewAction::Approve)))
                                    };
                                    let remove = {
                                        let moderate = moderate.clone();
                                        let id = review.id.clone();
                                        Callback::from(move |_| moderate.emit((id.clone(), ReviewAction::Remove)))
                                    };
                                    html! {
                                        <li class="review-card" key={review.id.clone()}>
                                            <div class="review-meta">
                                                <span class="review-property">{ &review.property_id }</span>
                                                <span class="review-rating">{ format!("{}/5", review.rating) }</span>
                                                <span class="review-status">{ status_label(review.status) }</span>
                                            </div>
                                            <p class="review-comment">{ &review.comment }</p>
                                            <div class="review-actions">
                                                <button
                                                    class="btn-approve"
                                                    disabled={review.status == ReviewStatus::Published}
                                                    onclick={approve}
                                                >
                                                    {"Approve"}
                                                </button>
                                                <button
                                                    class="btn-remove"
                                                    disabled={review.status == ReviewStatus::Removed}
                                                    onclick={remove}
                                                >
                                                    {"Remove"}
                                                </button>
                                            </div>
                                        </li>
                                    }
                                })
                            }
                        </ul>
                    }
                }
            }
        </div>
    }
}
