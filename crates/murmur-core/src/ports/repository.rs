use async_trait::async_trait;

use crate::domain::{NewPost, PageWindow, Post, PostPage};
use crate::error::StorageError;

/// Post repository - the only path to persisted posts.
///
/// Implementations perform no business validation. Pages are ordered newest
/// first by `created_at`, with `id` descending as the tie-break.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Insert a post; storage assigns `id` and both timestamps.
    async fn create(&self, post: NewPost) -> Result<Post, StorageError>;

    /// Fetch one page of all posts, with the total count of the collection.
    async fn list(&self, window: PageWindow) -> Result<PostPage, StorageError>;

    /// Fetch one page of posts whose title or body contains `term`,
    /// ignoring case, with the total count of matching posts.
    async fn search(&self, term: &str, window: PageWindow) -> Result<PostPage, StorageError>;

    /// Short name of the backing store, reported by health checks.
    fn backend(&self) -> &'static str;
}
