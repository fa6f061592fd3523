//! HTTP handlers and route configuration.

mod content;
mod health;
mod search;


use actix_web::web;

use crate::middleware::error::{json_error_handler, query_error_handler};

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .service(
            web::scope("/api")
                .route("/health", web::get().to(health::health_check))
                .service(
                    web::resource("/content")
                        .route(web::get().to(content::list_posts))
                        .route(web::post().to(content::create_post)),
                )
                .route("/search", web::get().to(search::search_posts)),
        );
}
