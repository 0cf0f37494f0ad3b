// ============================================================================
// REPORTS SCREEN - admin moderation of user reports against listings
// ============================================================================

use crate::models::{ApiOutcome, Report, ReportStatus, UpdateReportRequest};
use crate::services::moderation_service;
use crate::session::SessionContext;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ReportsScreenProps {
    pub session: SessionContext,
}

fn status_label(status: ReportStatus) -> &'static str {
    match status {
        ReportStatus::Open => "Open",
        ReportStatus::InReview => "In review",
        ReportStatus::Resolved => "Resolved",
        ReportStatus::Dismissed => "Dismissed",
    }
}

#[function_component(ReportsScreen)]
pub fn reports_screen(props: &ReportsScreenProps) -> Html {
    let reports = use_state(Vec::<Report>::new);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);

    {
        let session = props.session.clone();
        let reports = reports.clone();
        let loading = loading.clone();
        let error = error.clone();

        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match moderation_service::list_reports(&session).await {
                    ApiOutcome::Success { data, .. } => {
                        log::info!("loaded {} reports", data.len());
                        reports.set(data);
                        loading.set(false);
                    }
                    ApiOutcome::Failure { error: message, code } => {
                        log::error!("report list failed ({}): {}", code, message);
                        error.set(Some(message));
                        loading.set(false);
                    }
                }
            });
            || ()
        });
    }

    let set_status = {
        let session = props.session.clone();
        let reports = reports.clone();
        let error = error.clone();

        Callback::from(move |(report_id, status): (String, ReportStatus)| {
            let session = session.clone();
            let reports = reports.clone();
            let error = error.clone();

            wasm_bindgen_futures::spawn_local(async move {
                let request = UpdateReportRequest { status, note: None };
                match moderation_service::update_report(&session, &report_id, &request).await {
                    ApiOutcome::Success { data, .. } => {
                        let updated: Vec<Report> = (*reports)
                            .iter()
                            .map(|r| if r.id == data.id { data.clone() } else { r.clone() })
                            .collect();
                        reports.set(updated);
                        error.set(None);
                    }
                    ApiOutcome::Failure { error: message, code } => {
                        log::error!("report update failed ({}): {}", code, message);
                        error.set(Some(message));
                    }
                }
            });
        })
    };

    if *loading {
        return html! { <div class="reports-screen">{"Loading reports..."}</div> };
    }

    html! {
        <div class="reports-screen">
            <h2>{"Reports"}</h2>
            {
                for (*error).clone().map(|message| html! {
                    <p class="screen-error">{ message }</p>
                })
            }
            {
                if reports.is_empty() {
                    html! { <p class="empty">{"No reports to review."}</p> }
                } else {
                    html! {
                        <table class="reports-table">
                            <thead>
                                <tr>
                                    <th>{"Property"}</th>
                                    <th>{"Reported by"}</th>
                                    <th>{"Reason"}</th>
                                    <th>{"Status"}</th>
                                    <th>{"Actions"}</th>
                                </tr>
                            </thead>
                            <tbody>
                                {
                                    for reports.iter().map(|report| {
                                        let row_actions = [ReportStatus::InReview, ReportStatus::Resolved, ReportStatus::Dismissed]
                                            .into_iter()
                                            .filter(|next| *next != report.status)
                                            .map(|next| {
                                                let set_status = set_status.clone();
                                                let id = report.id.clone();
                                                html! {
                                                    <button
                                                        class="btn-status"
                                                        onclick={Callback::from(move |_| set_status.emit((id.clone(), next)))}
                                                    >
                                                        { status_label(next) }
                                                    </button>
                                                }
                                            });
                                        html! {
                                            <tr key={report.id.clone()}>
                                                <td>{ &report.property_id }</td>
                                                <td>{ &report.reporter_id }</td>
                                                <td>{ &report.reason }</td>
                                                <td>{ status_label(report.status) }</td>
                                                <td>{ for row_actions }</td>
                                            </tr>
                                        }
                                    })
                                }
                            </tbody>
                        </table>
                    }
                }
            }
        </div>
    }
}
