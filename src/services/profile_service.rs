use crate::models::{ApiOutcome, UpdateProfileRequest, UserProfile};
use crate::services::api_client::{self, Operation};
use crate::session::SessionContext;

pub async fn fetch_profile(session: &SessionContext) -> ApiOutcome<UserProfile> {
    let op = Operation::get(format!("/api/{}/profile", session.role())).authenticated();
    api_client::call(&op, session).await
}

pub async fn update_profile(
    session: &SessionContext,
    request: &UpdateProfileRequest,
) -> ApiOutcome<UserProfile> {
    let op = Operation::put(format!("/api/{}/profile", session.role())).authenticated();
    api_client::call_with_body(&op, request, session).await
}
