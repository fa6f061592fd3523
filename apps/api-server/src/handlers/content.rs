//! Post creation and listing.

use actix_web::{HttpResponse, web};

use murmur_core::domain::{NewPost, PageWindow};
use murmur_shared::ApiResponse;
use murmur_shared::dto::{CreatePostRequest, ListQuery, PostsResponse};

use crate::middleware::error::{AppError, AppResult};
use crate::observability::RequestId;
use crate::state::AppState;

const FETCH_FAILED: &str = "Failed to fetch posts";
const CREATE_FAILED: &str = "Failed to create post";

/// GET /api/content?limit=&offset=
pub async fn list_posts(
    state: web::Data<AppState>,
    query: web::Query<ListQuery>,
) -> AppResult<HttpResponse> {
    let query = query.into_inner();
    let window = PageWindow::parse(query.limit.as_deref(), query.offset.as_deref())?
        .capped(state.max_page_limit);

    let page = state
        .posts
        .list(window)
        .await
        .map_err(AppError::storage(FETCH_FAILED))?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(PostsResponse::from(page))))
}

/// POST /api/content
pub async fn create_post(
    state: web::Data<AppState>,
    request_id: RequestId,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let new_post = NewPost::validate(req.title, req.body)?;

    let post = state
        .posts
        .create(new_post)
        .await
        .map_err(AppError::storage(CREATE_FAILED))?;

    tracing::info!(post_id = post.id, request_id = %request_id.as_str(), "Post created");

    Ok(HttpResponse::Created().json(ApiResponse::ok(post)))
}
