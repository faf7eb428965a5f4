pub mod config;
pub mod dtos;
pub mod errors;
pub mod handlers;
pub mod mapper;
pub mod repositories;

use actix_web::web;
use deadpool_postgres::Pool;

use crate::handlers::post_handlers;

#[derive(Clone)]
pub struct AppState {
    pub pg_pool: Pool,
}

/// Exact-path route table. Every route is registered with `web::route()` so it
/// accepts any HTTP method; dispatch is on the path alone. Unknown paths fall
/// through to the 404 default service without touching the pool.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/posts.get", web::route().to(post_handlers::list))
        .route("/posts.getById", web::route().to(post_handlers::get_by_id))
        .route("/posts.post", web::route().to(post_handlers::create))
        .route("/posts.edit", web::route().to(post_handlers::edit))
        .route("/posts.delete", web::route().to(post_handlers::delete))
        .route("/posts.restore", web::route().to(post_handlers::restore))
        .route("/posts.like", web::route().to(post_handlers::like))
        .route("/posts.dislike", web::route().to(post_handlers::dislike))
        .default_service(web::route().to(post_handlers::not_found));
}
