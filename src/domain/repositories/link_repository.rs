//! Repository trait for short link data access.

use async_trait::async_trait;

use crate::domain::entities::Link;
use crate::error::AppError;

/// Storage abstraction for shortened links.
///
/// Inserting a link with an existing token overwrites it; a token collision
/// silently replaces the earlier entry.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Stores a link under its token.
    async fn insert(&self, link: Link) -> Result<(), AppError>;

    /// Looks up a link by token.
    async fn find_by_token(&self, token: &str) -> Result<Option<Link>, AppError>;

    /// Returns every stored link, in no particular order.
    async fn all(&self) -> Result<Vec<Link>, AppError>;
}
