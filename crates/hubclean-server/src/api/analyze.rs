use axum::{extract::State, http::StatusCode, Extension};
use hubclean_pipeline::run_analysis;

use super::AppState;
use crate::middleware::RequestId;

pub(super) const SUCCESS_MESSAGE: &str = "Analysis complete";
pub(super) const FAILURE_MESSAGE: &str = "An error occurred during analysis.";

/// Runs the audit once and reports only success or failure to the caller.
///
/// The failing stage and its message go to the log, never into the response.
pub(super) async fn analyze(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> (StatusCode, &'static str) {
    let now = state.clock.now();
    tracing::info!(request_id = %req_id.0, %now, "starting contact audit");

    let result = run_analysis(
        state.hubspot.as_ref(),
        state.slack.as_ref(),
        &state.channel,
        now,
    )
    .await;

    match result {
        Ok(report) => {
            tracing::info!(
                request_id = %req_id.0,
                missing_values = report.missing_values.len(),
                outdated_data = report.outdated_data.len(),
                unlikely_data = report.unlikely_data.len(),
                "contact audit complete"
            );
            (StatusCode::OK, SUCCESS_MESSAGE)
        }
        Err(e) => {
            tracing::error!(request_id = %req_id.0, error = %e, "contact audit failed");
            (StatusCode::INTERNAL_SERVER_ERROR, FAILURE_MESSAGE)
        }
    }
}
