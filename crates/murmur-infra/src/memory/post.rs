//! In-memory post repository.

use std::cmp::Reverse;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use murmur_core::domain::{NewPost, PageWindow, Post, PostPage, contains_ignore_case};
use murmur_core::error::StorageError;
use murmur_core::ports::PostRepository;

struct Store {
    posts: Vec<Post>,
    next_id: i64,
}

/// In-memory post repository using a Vec behind an async RwLock.
///
/// Mirrors the PostgreSQL repository's ordering and matching rules.
/// Note: Data is lost on process restart.
pub struct InMemoryPostRepository {
    store: RwLock<Store>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(Store {
                posts: Vec::new(),
                next_id: 1,
            }),
        }
    }

    async fn page<F>(&self, window: PageWindow, keep: F) -> PostPage
    where
        F: Fn(&Post) -> bool,
    {
        let store = self.store.read().await;

        let mut matching: Vec<&Post> = store.posts.iter().filter(|p| keep(*p)).collect();
        matching.sort_by_key(|p| Reverse((p.created_at, p.id)));

        let total = matching.len() as u64;
        let posts = matching
            .into_iter()
            .skip(usize::try_from(window.offset).unwrap_or(usize::MAX))
            .take(usize::try_from(window.limit).unwrap_or(usize::MAX))
            .cloned()
            .collect();

        PostPage { posts, total }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn create(&self, new_post: NewPost) -> Result<Post, StorageError> {
        let mut store = self.store.write().await;

        let now = Utc::now();
        let post = Post {
            id: store.next_id,
            title: new_post.title,
            body: new_post.body,
            created_at: now,
            updated_at: now,
        };
        store.next_id += 1;
        store.posts.push(post.clone());

        tracing::debug!(post_id = post.id, "Post created");
        Ok(post)
    }

    async fn list(&self, window: PageWindow) -> Result<PostPage, StorageError> {
        Ok(self.page(window, |_| true).await)
    }

    async fn search(&self, term: &str, window: PageWindow) -> Result<PostPage, StorageError> {
        Ok(self
            .page(window, |p| {
                contains_ignore_case(&p.title, term) || contains_ignore_case(&p.body, term)
            })
            .await)
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn seed(repo: &InMemoryPostRepository, posts: &[(&str, &str)]) -> Vec<Post> {
        let mut created = Vec::new();
        for (title, body) in posts {
            let post = repo
                .create(NewPost {
                    title: title.to_string(),
                    body: body.to_string(),
                })
                .await
                .unwrap();
            created.push(post);
        }
        created
    }

    #[tokio::test]
    async fn test_create_assigns_ids_and_timestamps() {
        let repo = InMemoryPostRepository::new();
        let created = seed(&repo, &[("a", "1"), ("b", "2")]).await;

        assert_eq!(created[0].id, 1);
        assert_eq!(created[1].id, 2);
        assert_eq!(created[0].created_at, created[0].updated_at);
    }

    #[tokio::test]
    async fn test_list_is_newest_first_with_total() {
        let repo = InMemoryPostRepository::new();
        seed(&repo, &[("a", "1"), ("b", "2"), ("c", "3")]).await;

        let page = repo.list(PageWindow::default()).await.unwrap();
        let titles: Vec<&str> = page.posts.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["c", "b", "a"]);
        assert_eq!(page.total, 3);
    }

    #[tokio::test]
    async fn test_list_window_selects_second_newest() {
        let repo = InMemoryPostRepository::new();
        seed(&repo, &[("a", "1"), ("b", "2"), ("c", "3")]).await;

        let page = repo.list(PageWindow::new(1, 1)).await.unwrap();
        assert_eq!(page.posts.len(), 1);
        assert_eq!(page.posts[0].title, "b");
        assert_eq!(page.total, 3);
    }

    #[tokio::test]
    async fn test_list_offset_past_end_is_empty() {
        let repo = InMemoryPostRepository::new();
        seed(&repo, &[("a", "1")]).await;

        let page = repo.list(PageWindow::new(u64::MAX, 5)).await.unwrap();
        assert!(page.posts.is_empty());
        assert_eq!(page.total, 1);
    }

    #[tokio::test]
    async fn test_search_matches_title_or_body_ignoring_case() {
        let repo = InMemoryPostRepository::new();
        seed(
            &repo,
            &[("hello world", "x"), ("other", "say hello"), ("nothing", "here")],
        )
        .await;

        let lower = repo.search("hello", PageWindow::default()).await.unwrap();
        let upper = repo.search("HELLO", PageWindow::default()).await.unwrap();

        assert_eq!(lower.total, 2);
        assert_eq!(lower, upper);
        let titles: Vec<&str> = lower.posts.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["other", "hello world"]);
    }

    #[tokio::test]
    async fn test_search_treats_wildcards_literally() {
        let repo = InMemoryPostRepository::new();
        seed(&repo, &[("100% sure", "x"), ("100 percent", "y")]).await;

        let page = repo.search("0%", PageWindow::default()).await.unwrap();
        assert_eq!(page.total, 1);
        assert_eq!(page.posts[0].title, "100% sure");
    }

    #[tokio::test]
    async fn test_reads_are_idempotent() {
        let repo = InMemoryPostRepository::new();
        seed(&repo, &[("a", "1"), ("b", "2")]).await;

        let window = PageWindow::new(1, 0);
        assert_eq!(
            repo.list(window).await.unwrap(),
            repo.list(window).await.unwrap()
        );
        assert_eq!(
            repo.search("a", window).await.unwrap(),
            repo.search("a", window).await.unwrap()
        );
    }
}
