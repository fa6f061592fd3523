//! Data Transfer Objects - request/response types for the API.

use serde::{Deserialize, Serialize};

use murmur_core::domain::{Post, PostPage};

/// Body of `POST /api/content`.
///
/// Missing fields deserialize as empty strings so they reach validation
/// instead of failing extraction.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatePostRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
}

/// Query string of `GET /api/content`.
///
/// Values stay raw strings; `PageWindow::parse` decides defaults and rejections.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListQuery {
    pub limit: Option<String>,
    pub offset: Option<String>,
}

/// Query string of `GET /api/search`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
    pub limit: Option<String>,
    pub offset: Option<String>,
}

/// A page of posts with the total number of matching posts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostsResponse {
    pub posts: Vec<Post>,
    pub count: u64,
}

impl From<PostPage> for PostsResponse {
    fn from(page: PostPage) -> Self {
        Self {
            posts: page.posts,
            count: page.total,
        }
    }
}
