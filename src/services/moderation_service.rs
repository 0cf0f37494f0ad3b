// ============================================================================
// MODERATION SERVICE - admin-only report and review endpoints
// ============================================================================

use crate::models::{
    ApiOutcome, ModerateReviewRequest, Report, Review, UpdateReportRequest,
};
use crate::services::api_client::{self, Operation};
use crate::session::SessionContext;

pub async fn list_reports(session: &SessionContext) -> ApiOutcome<Vec<Report>> {
    let op = Operation::get("/api/admin/reports").authenticated();
    api_client::call(&op, session).await
}

/// Move a report through its lifecycle (open → in_review → resolved/dismissed).
pub async fn update_report(
    session: &SessionContext,
    report_id: &str,
    request: &UpdateReportRequest,
) -> ApiOutcome<Report> {
    let op = Operation::put(format!("/api/admin/reports/{report_id}")).authenticated();
    api_client::call_with_body(&op, request, session).await
}

pub async fn list_reviews(session: &SessionContext) -> ApiOutcome<Vec<Review>> {
    let op = Operation::get("/api/admin/reviews").authenticated();
    api_client::call(&op, session).await
}

/// Approve or remove a pending/flagged review.
pub async fn moderate_review(
    session: &SessionContext,
    review_id: &str,
    request: &ModerateReviewRequest,
) -> ApiOutcome<Review> {
    let op = Operation::put(format!("/api/admin/reviews/{review_id}/moderate")).authenticated();
    api_client::call_with_body(&op, request, session).await
}
