use actix_web::{HttpResponse, web};
use serde_json::Value;

use crate::AppState;
use crate::dtos::post_dtos::PostQuery;
use crate::errors::ApiError;
use crate::mapper::{self, Record};
use crate::repositories::post_repository::PostRepository;

/// GET-style handlers for the `/posts.*` routes. Each one validates its query
/// parameters, borrows a session from the pool, runs its statements, and maps
/// the result rows to JSON records. Faults propagate with `?` and collapse to
/// an empty-body status in `ApiError::error_response`; the session returns to
/// the pool on drop no matter which branch runs.

pub async fn list(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let client = state.pg_pool.get().await?;
    let rows = PostRepository::list(&client).await?;
    let posts: Vec<Record> = mapper::map_rows(&rows).collect();
    Ok(HttpResponse::Ok().json(posts))
}

pub async fn get_by_id(
    state: web::Data<AppState>,
    query: web::Query<PostQuery>,
) -> Result<HttpResponse, ApiError> {
    let id = query.id()?;
    let client = state.pg_pool.get().await?;
    let rows = PostRepository::find_visible(&client, id).await?;
    let post = mapper::map_rows(&rows).next().ok_or(ApiError::NotFound)?;
    Ok(HttpResponse::Ok().json(post))
}

pub async fn create(
    state: web::Data<AppState>,
    query: web::Query<PostQuery>,
) -> Result<HttpResponse, ApiError> {
    let content = query.content()?.to_owned();
    let client = state.pg_pool.get().await?;
    let id = PostRepository::insert(&client, &content).await?;
    let rows = PostRepository::find_any(&client, id).await?;
    let post = mapper::map_rows(&rows).next().ok_or(ApiError::NotFound)?;
    Ok(HttpResponse::Ok().json(post))
}

pub async fn edit(
    state: web::Data<AppState>,
    query: web::Query<PostQuery>,
) -> Result<HttpResponse, ApiError> {
    let id = query.id()?;
    let content = query.content()?.to_owned();
    let client = state.pg_pool.get().await?;
    let updated = PostRepository::update_content(&client, id, &content).await?;
    if updated == 0 {
        return Err(ApiError::NotFound);
    }
    let rows = PostRepository::find_any(&client, id).await?;
    let post = mapper::map_rows(&rows).next().ok_or(ApiError::NotFound)?;
    Ok(HttpResponse::Ok().json(post))
}

pub async fn delete(
    state: web::Data<AppState>,
    query: web::Query<PostQuery>,
) -> Result<HttpResponse, ApiError> {
    toggle_removed(state, query, true).await
}

pub async fn restore(
    state: web::Data<AppState>,
    query: web::Query<PostQuery>,
) -> Result<HttpResponse, ApiError> {
    toggle_removed(state, query, false).await
}

pub async fn like(
    state: web::Data<AppState>,
    query: web::Query<PostQuery>,
) -> Result<HttpResponse, ApiError> {
    adjust_likes(state, query, 1).await
}

pub async fn dislike(
    state: web::Data<AppState>,
    query: web::Query<PostQuery>,
) -> Result<HttpResponse, ApiError> {
    adjust_likes(state, query, -1).await
}

/// Default service for paths outside the route table.
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().finish()
}

/// Shared body of delete/restore: flip the flag, 404 on zero affected rows,
/// then re-fetch without the removed filter so the mutated row is returned.
async fn toggle_removed(
    state: web::Data<AppState>,
    query: web::Query<PostQuery>,
    removed: bool,
) -> Result<HttpResponse, ApiError> {
    let id = query.id()?;
    let client = state.pg_pool.get().await?;
    let affected = PostRepository::set_removed(&client, id, removed).await?;
    if affected == 0 {
        return Err(ApiError::NotFound);
    }
    let rows = PostRepository::find_any(&client, id).await?;
    let post = mapper::map_rows(&rows).next().ok_or(ApiError::NotFound)?;
    Ok(HttpResponse::Ok().json(post))
}

/// Shared body of like/dislike: read the visible row, apply the delta, persist
/// the new counter, and return the already-fetched record with the counter
/// patched in rather than a second round trip. The read-then-write pair is not
/// atomic; see tests/api.rs. No lower bound on the counter.
async fn adjust_likes(
    state: web::Data<AppState>,
    query: web::Query<PostQuery>,
    delta: i64,
) -> Result<HttpResponse, ApiError> {
    let id = query.id()?;
    let client = state.pg_pool.get().await?;
    let rows = PostRepository::find_visible(&client, id).await?;
    let mut post = mapper::map_rows(&rows).next().ok_or(ApiError::NotFound)?;
    let likes = post.get("likes").and_then(Value::as_i64).unwrap_or(0) + delta;
    PostRepository::set_likes(&client, id, likes as i32).await?;
    post.insert("likes".to_owned(), Value::from(likes));
    Ok(HttpResponse::Ok().json(post))
}
