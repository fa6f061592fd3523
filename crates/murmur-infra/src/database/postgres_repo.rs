//! PostgreSQL post repository.

use async_trait::async_trait;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::sea_query::{Expr, LikeExpr};
use sea_orm::{ActiveModelTrait, Condition, EntityTrait, QueryFilter, QueryOrder, Select};

use murmur_core::domain::{NewPost, PageWindow, Post, PostPage, like_pattern};
use murmur_core::error::StorageError;
use murmur_core::ports::PostRepository;

use super::entity::post::{self, Entity as PostEntity};
use super::postgres_base::{PostgresBaseRepository, storage_error};

/// PostgreSQL post repository.
pub type PostgresPostRepository = PostgresBaseRepository<PostEntity>;

/// All posts, newest first.
fn newest_first() -> Select<PostEntity> {
    PostEntity::find()
        .order_by_desc(post::Column::CreatedAt)
        .order_by_desc(post::Column::Id)
}

/// `title ILIKE p OR body ILIKE p`, with `p` escaped for literal matching.
fn matches_term(term: &str) -> Condition {
    let pattern = LikeExpr::new(like_pattern(term)).escape('\\');
    Condition::any()
        .add(Expr::col(post::Column::Title).ilike(pattern.clone()))
        .add(Expr::col(post::Column::Body).ilike(pattern))
}

fn into_page((rows, total): (Vec<post::Model>, u64)) -> PostPage {
    PostPage {
        posts: rows.into_iter().map(Into::into).collect(),
        total,
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn create(&self, new_post: NewPost) -> Result<Post, StorageError> {
        let active_model: post::ActiveModel = new_post.into();
        let model = active_model.insert(&self.db).await.map_err(storage_error)?;

        tracing::debug!(post_id = model.id, "Post created");
        Ok(model.into())
    }

    async fn list(&self, window: PageWindow) -> Result<PostPage, StorageError> {
        tracing::debug!(limit = window.limit, offset = window.offset, "Listing posts");

        self.fetch_page(newest_first(), window).await.map(into_page)
    }

    async fn search(&self, term: &str, window: PageWindow) -> Result<PostPage, StorageError> {
        tracing::debug!(
            term_len = term.len(),
            limit = window.limit,
            offset = window.offset,
            "Searching posts"
        );

        let select = newest_first().filter(matches_term(term));
        self.fetch_page(select, window).await.map(into_page)
    }

    fn backend(&self) -> &'static str {
        "postgres"
    }
}
