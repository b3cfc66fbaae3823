//! Request handlers for the classifier service

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::error::{Result, ServerError};
use super::state::SharedState;

/// Response body for `POST /predict`
#[derive(Debug, Serialize, Deserialize)]
pub struct PredictResponse {
    pub filename: String,
    pub predicted_class: String,
}

/// Response body for `GET /health`
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub uptime_seconds: u64,
    pub version: String,
}

/// POST /predict - classify an uploaded image
///
/// Expects a multipart form with a `file` field. The upload is read fully
/// into memory, preprocessed, and run through the shared classifier.
pub async fn predict(
    State(state): State<SharedState>,
    mut multipart: Multipart,
) -> Result<Json<PredictResponse>> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ServerError::BadRequest(e.to_string()))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let filename = field.file_name().unwrap_or("upload").to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| ServerError::BadRequest(e.to_string()))?;

        info!("received upload: {} ({} bytes)", filename, data.len());

        let prediction = state.predictor.predict_bytes(&data)?;

        return Ok(Json(PredictResponse {
            filename,
            predicted_class: prediction.label,
        }));
    }

    Err(ServerError::BadRequest(
        "missing multipart field 'file'".to_string(),
    ))
}

/// GET /health - Health check endpoint
pub async fn health_check(State(state): State<SharedState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
