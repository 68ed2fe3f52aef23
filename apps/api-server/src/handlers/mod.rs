//! HTTP handlers and route configuration.

mod health;
mod posts;

use actix_web::{HttpRequest, error::JsonPayloadError, web};
use quill_shared::{ValidationError, routes};

use crate::middleware::error::AppError;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error))
        .route(routes::HEALTH, web::get().to(health::health_check))
        .service(
            web::resource(routes::LIST_POSTS)
                .route(web::get().to(posts::list_posts))
                .route(web::post().to(posts::create_post)),
        )
        .route(routes::GET_POST, web::get().to(posts::get_post));
}

/// Unreadable bodies are a validation failure without a field.
fn json_error(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::from(ValidationError::body(format!("Invalid JSON body: {}", err))).into()
}
