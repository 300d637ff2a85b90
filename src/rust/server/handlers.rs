use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use log::{debug, error};

use super::{AppState, ErrorResponse, PredictRequest, PredictResponse};
use crate::categories;
use crate::classifier::ClassifierError;

/// Prediction failure mapped to a 500 with a `detail` body
pub struct PredictError(ClassifierError);

impl IntoResponse for PredictError {
    fn into_response(self) -> Response {
        error!("Prediction failed: {}", self.0);
        let body = ErrorResponse {
            detail: self.0.to_string(),
        };
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

/// Classifies a product name.
///
/// The name is lowercased for classification; the response echoes the
/// name exactly as received. A predicted type missing from the category
/// table gives a null uuid.
pub async fn predict(
    State(state): State<AppState>,
    Json(payload): Json<PredictRequest>,
) -> Result<Json<PredictResponse>, PredictError> {
    let lowered = payload.product.to_lowercase();
    let label = state.pipeline.predict(&lowered).map_err(PredictError)?;
    let uuid = categories::uuid_for(&label).map(String::from);

    debug!("{:?} -> {} ({:?})", payload.product, label, uuid);

    Ok(Json(PredictResponse {
        product: payload.product,
        label,
        uuid,
    }))
}
