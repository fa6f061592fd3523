//! In-memory storage - used as fallback when no database is configured.

mod post;

pub use post::InMemoryPostRepository;
