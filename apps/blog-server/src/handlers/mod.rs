//! HTTP handlers and route configuration.

mod blogpost;
mod health;

use actix_web::{HttpRequest, HttpResponse, error::JsonPayloadError, web};
use blog_shared::ErrorResponse;

use crate::middleware::error::AppError;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .route("/health", web::get().to(health::health_check))
        .service(
            web::resource("/blogpost")
                .route(web::get().to(blogpost::list))
                .route(web::post().to(blogpost::create))
                .default_service(web::to(not_found)),
        )
        .service(
            web::resource("/blogpost/{id}")
                .route(web::get().to(blogpost::get))
                .route(web::put().to(blogpost::update))
                .route(web::delete().to(blogpost::delete))
                .default_service(web::to(not_found)),
        )
        .default_service(web::to(not_found));
}

/// Fallback for every unmatched route or method.
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::not_found())
}

/// Malformed JSON bodies become 400 `{ "message": ... }`.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err: JsonPayloadError, _req: &HttpRequest| {
        tracing::warn!("Rejected request body: {}", err);
        AppError::BadRequest(err.to_string()).into()
    })
}
