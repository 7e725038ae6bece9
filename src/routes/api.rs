use actix_web::http::Method;
use actix_web::{HttpRequest, HttpResponse, Responder};

use crate::dto::{ApiError, AuthOutcome, HealthStatus, PageContent};
use crate::models::app::AppState;

/// Liveness probe for the deployment platform.
pub async fn healthz(_app: AppState) -> impl Responder {
    HttpResponse::Ok().json(HealthStatus::now())
}

/// Placeholder for per-page content delivery.
pub async fn page_content(_app: AppState) -> impl Responder {
    HttpResponse::Ok().json(PageContent::placeholder())
}

/// Credential check endpoint. POST only; verification itself is not wired
/// up, so every attempt reports failure and the body is never read.
pub async fn authenticate(_app: AppState, req: HttpRequest) -> impl Responder {
    if req.method() != Method::POST {
        return HttpResponse::MethodNotAllowed().json(ApiError::method_not_allowed());
    }

    HttpResponse::Ok().json(AuthOutcome::unimplemented())
}

/// JSON 404 for unknown API paths.
pub async fn not_found(_app: AppState) -> impl Responder {
    HttpResponse::NotFound().json(ApiError::not_found())
}
