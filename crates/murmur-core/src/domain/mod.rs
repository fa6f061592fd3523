//! Domain entities - the core business objects.

mod page;
mod post;

pub use page::{MAX_WINDOW_VALUE, PageWindow, PostPage};
pub use post::{
    NewPost, Post, SEARCH_QUERY_REQUIRED, TITLE_AND_BODY_REQUIRED, contains_ignore_case,
    like_pattern, search_term,
};
