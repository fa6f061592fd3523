//! Substring search over titles and bodies.

use actix_web::{HttpResponse, web};

use murmur_core::domain::{PageWindow, search_term};
use murmur_shared::ApiResponse;
use murmur_shared::dto::{PostsResponse, SearchQuery};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/search?q=&limit=&offset=
///
/// A blank `q` is rejected before storage is touched.
pub async fn search_posts(
    state: web::Data<AppState>,
    query: web::Query<SearchQuery>,
) -> AppResult<HttpResponse> {
    let query = query.into_inner();
    let term = search_term(query.q)?;
    let window = PageWindow::parse(query.limit.as_deref(), query.offset.as_deref())?
        .capped(state.max_page_limit);

    let page = state
        .posts
        .search(&term, window)
        .await
        .map_err(AppError::storage("Failed to search posts"))?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(PostsResponse::from(page))))
}
