use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    Extension, Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{
    error::{AppError, AppResult},
    middleware::RequestId,
    models::{features, CourseRecord, FeatureDefinition, PredictRequest, PredictResponse, RatingVector},
    services,
};

use super::{state::CatalogState, AppState};

// Response types

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub timestamp: DateTime<Utc>,
    pub catalog_loaded: bool,
    pub course_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_error: Option<String>,
}

// Handlers

/// Health check endpoint
///
/// Always 200; catalog problems are reported in the body.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let (catalog_loaded, course_count, catalog_error) = match &state.catalog {
        CatalogState::Ready(catalog) => (true, catalog.len(), None),
        CatalogState::Unavailable(reason) => (false, 0, Some(reason.to_string())),
    };

    Json(HealthResponse {
        status: "OK",
        message: "Server is running",
        timestamp: Utc::now(),
        catalog_loaded,
        course_count,
        catalog_error,
    })
}

/// Scores quiz answers and recommends courses
pub async fn predict(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    body: Result<Json<PredictRequest>, JsonRejection>,
) -> AppResult<Json<PredictResponse>> {
    let Json(request) = body.map_err(|rejection| {
        tracing::warn!(request_id = %request_id, error = %rejection, "Rejected prediction body");
        AppError::invalid_input("body", rejection.body_text())
    })?;

    let ratings = RatingVector::from_json(&request.answers).map_err(|issues| {
        tracing::info!(
            request_id = %request_id,
            issue_count = issues.len(),
            "Prediction answers failed validation"
        );
        AppError::Validation(issues)
    })?;

    let catalog = state.catalog()?;

    tracing::info!(
        request_id = %request_id,
        answer_count = ratings.len(),
        "Processing career prediction"
    );

    let prediction = services::predict(&ratings, &catalog, &state.policy);

    tracing::info!(
        request_id = %request_id,
        top_feature = prediction.top_features.first().map(|(name, _)| *name).unwrap_or(""),
        recommendation_count = prediction.recommended_courses.len(),
        "Career prediction completed"
    );

    Ok(Json(PredictResponse {
        success: true,
        prediction,
        message: "Career prediction completed successfully".to_string(),
    }))
}

/// Ordered quiz questions
pub async fn list_features() -> Json<&'static [FeatureDefinition]> {
    Json(features())
}

/// The full course catalog in file order
pub async fn list_courses(State(state): State<AppState>) -> AppResult<Json<Vec<Arc<CourseRecord>>>> {
    let catalog = state.catalog()?;
    Ok(Json(catalog.courses().to_vec()))
}

/// Fallback for unmatched routes
pub async fn not_found() -> AppError {
    AppError::NotFound("Route not found".to_string())
}
