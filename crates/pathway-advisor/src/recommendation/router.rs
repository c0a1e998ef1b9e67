use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use serde_json::json;

use super::catalog::TrackKind;
use super::domain::StudentProfile;
use super::repository::{ProfileStore, StudentId};
use super::service::{RecommendationError, RecommendationService};

/// Router builder exposing recommendation and catalog endpoints.
pub fn recommendation_router<S>(service: Arc<RecommendationService<S>>) -> Router
where
    S: ProfileStore + 'static,
{
    Router::new()
        .route(
            "/api/v1/recommendations/courses",
            post(course_handler::<S>),
        )
        .route(
            "/api/v1/recommendations/streams",
            post(stream_handler::<S>),
        )
        .route(
            "/api/v1/students/:student_id/recommendations/courses",
            get(student_course_handler::<S>),
        )
        .route(
            "/api/v1/students/:student_id/recommendations/streams",
            get(student_stream_handler::<S>),
        )
        .route("/api/v1/catalog/:kind", get(catalog_handler::<S>))
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct CourseRequest {
    pub profile: StudentProfile,
    #[serde(default)]
    pub category: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct StreamRequest {
    pub profile: StudentProfile,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct CategoryQuery {
    #[serde(default)]
    pub category: Option<String>,
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}

pub(crate) async fn course_handler<S>(
    State(service): State<Arc<RecommendationService<S>>>,
    axum::Json(request): axum::Json<CourseRequest>,
) -> Response
where
    S: ProfileStore + 'static,
{
    match service.recommend_courses(&request.profile, request.category.as_deref(), today()) {
        Ok(report) => (StatusCode::OK, axum::Json(report)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn stream_handler<S>(
    State(service): State<Arc<RecommendationService<S>>>,
    axum::Json(request): axum::Json<StreamRequest>,
) -> Response
where
    S: ProfileStore + 'static,
{
    match service.recommend_streams(&request.profile, today()) {
        Ok(report) => (StatusCode::OK, axum::Json(report)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn student_course_handler<S>(
    State(service): State<Arc<RecommendationService<S>>>,
    Path(student_id): Path<String>,
    Query(query): Query<CategoryQuery>,
) -> Response
where
    S: ProfileStore + 'static,
{
    let id = StudentId(student_id);
    match service.recommend_courses_for(&id, query.category.as_deref(), today()) {
        Ok(report) => (StatusCode::OK, axum::Json(report)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn student_stream_handler<S>(
    State(service): State<Arc<RecommendationService<S>>>,
    Path(student_id): Path<String>,
) -> Response
where
    S: ProfileStore + 'static,
{
    let id = StudentId(student_id);
    match service.recommend_streams_for(&id, today()) {
        Ok(report) => (StatusCode::OK, axum::Json(report)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn catalog_handler<S>(
    State(service): State<Arc<RecommendationService<S>>>,
    Path(kind): Path<String>,
) -> Response
where
    S: ProfileStore + 'static,
{
    let Some(kind) = TrackKind::from_segment(&kind) else {
        let payload = json!({
            "error": format!("unknown catalog '{kind}'"),
        });
        return (StatusCode::NOT_FOUND, axum::Json(payload)).into_response();
    };

    let catalog = service.catalog(kind);
    let payload = json!({
        "kind": kind.label(),
        "tracks": catalog.tracks(),
    });
    (StatusCode::OK, axum::Json(payload)).into_response()
}

fn error_response(error: RecommendationError) -> Response {
    match error {
        RecommendationError::InvalidProfile(error) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        RecommendationError::StudentNotFound(id) => {
            let payload = json!({
                "error": "no assessment profile",
                "student_id": id.0,
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        other => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
