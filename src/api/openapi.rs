//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{dates, health, logs};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Timer Diary API",
        version = "1.0.0",
        description = "REST API for a personal timer diary: dated logs of completed countdown sessions"
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Dates
        dates::list_dates,
        // Logs
        logs::list_logs,
        logs::create_log,
    ),
    components(
        schemas(
            crate::models::date_record::DateRecord,
            crate::models::log_entry::LogEntry,
            crate::models::log_entry::CreateLogRequest,
            crate::models::log_entry::LogsQuery,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "dates", description = "Date registry"),
        (name = "logs", description = "Timer session logs")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
