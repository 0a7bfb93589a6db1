use axum::{
    extract::State,
    http::{header, Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};

use crate::models::{RecommendationRequest, RecommendationResponse};
use crate::services::recommend;

use super::AppState;

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Handler for the recommendation endpoint.
///
/// Once the request body is accepted this always responds 200 with a
/// product list; model and validation failures resolve to the fallback
/// list inside the pipeline.
pub async fn recommend(
    State(state): State<AppState>,
    Json(request): Json<RecommendationRequest>,
) -> Json<RecommendationResponse> {
    let products = recommend::recommend(
        state.model.as_ref(),
        state.diagnostics.as_ref(),
        &request.product_type,
        &request.user_preferences,
    )
    .await;
    Json(RecommendationResponse { products })
}

/// Fallback for non-POST methods on the recommendation route
pub async fn method_not_allowed(method: Method) -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        [(header::ALLOW, "POST")],
        format!("Method {method} Not Allowed"),
    )
        .into_response()
}
