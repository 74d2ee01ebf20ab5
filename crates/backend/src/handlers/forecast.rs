use axum::body::Body;
use axum::extract::Path;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use once_cell::sync::Lazy;
use serde_json::json;

use crate::shared::config;
use crate::usecases::forecast::ml_client::MlClient;

static ML_CLIENT: Lazy<MlClient> = Lazy::new(|| MlClient::new(config::get().ml.base_url.clone()));

/// GET /api/adminDashboard/predict/:id
///
/// Pass-through to the forecast service: status and body are relayed
/// verbatim, including its error answers. Only a transport failure is
/// translated, into a 500 with a fixed message.
pub async fn predict(Path(product_id): Path<String>) -> Response {
    tracing::info!("Forecast requested for: {}", product_id);

    match ML_CLIENT.fetch_dashboard(&product_id).await {
        Ok((status, body)) => Response::builder()
            .status(status)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap_or_else(|_| StatusCode::INTERNAL_SERVER_ERROR.into_response()),
        Err(err) => {
            tracing::error!("Error connecting to ML service: {}", err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "message": "Forecasting service unavailable.",
                    "error": err.to_string(),
                })),
            )
                .into_response()
        }
    }
}
