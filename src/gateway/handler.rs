use axum::{Json, extract::State};
use tracing::{debug, error, info, instrument};

use crate::constants::DEFAULT_THRESHOLD_PERCENT;
use crate::gateway::error::GatewayError;
use crate::gateway::payload::{CheckRequest, CheckResponse};
use crate::gateway::state::HandlerState;
use crate::matching::Threshold;

/// `POST /v1/check`: run one similarity check and return the record list.
#[instrument(skip(state, request))]
pub async fn check_handler(
    State(state): State<HandlerState>,
    Json(request): Json<serde_json::Value>,
) -> Result<Json<CheckResponse>, GatewayError> {
    let request: CheckRequest = serde_json::from_value(request)
        .map_err(|e| GatewayError::InvalidRequest(format!("invalid request schema: {}", e)))?;

    let threshold_percent = request
        .threshold_percent
        .unwrap_or(DEFAULT_THRESHOLD_PERCENT);
    let threshold = Threshold::from_percent(threshold_percent)
        .map_err(|e| GatewayError::InvalidRequest(e.to_string()))?;

    debug!(
        mode = ?request.mode,
        threshold_percent = threshold_percent,
        candidate_len = request.candidate_text.len(),
        reference_len = request.reference_text.len(),
        "Processing similarity check"
    );

    let result = state
        .engine
        .check(
            request.mode,
            &request.candidate_text,
            &request.reference_text,
            threshold,
        )
        .await
        .map_err(|e| {
            error!(error = %e, "Similarity check failed");
            GatewayError::from(e)
        })?;

    info!(
        records = result.records.len(),
        overall = ?result.overall_percent,
        "Similarity check complete"
    );

    Ok(Json(CheckResponse {
        records: result.records,
    }))
}
