//! Link shortening and resolution service.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::domain::entities::Link;
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::token::url_token;

/// Service for shortening URLs and resolving the resulting tokens.
///
/// Tokens are derived from the URL itself, so shortening is idempotent:
/// the same URL always maps to the same token.
pub struct LinkService<R: LinkRepository> {
    repository: Arc<R>,
}

impl<R: LinkRepository> LinkService<R> {
    /// Creates a new link service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Derives the token for `long_url` and stores the pair.
    ///
    /// Shortening the same URL again re-stores the same pair and returns
    /// the same token.
    pub async fn shorten(&self, long_url: &str) -> Result<String, AppError> {
        let token = url_token(long_url);
        self.repository
            .insert(Link::new(token.clone(), long_url))
            .await?;
        Ok(token)
    }

    /// Resolves a token to the stored long URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches the token.
    pub async fn resolve(&self, token: &str) -> Result<String, AppError> {
        self.repository
            .find_by_token(token)
            .await?
            .map(|link| link.long_url)
            .ok_or_else(|| AppError::not_found(format!("No URL found for token '{token}'")))
    }

    /// Returns the whole stored mapping, keyed by token.
    ///
    /// The map is sorted, so repeated dumps of the same state produce
    /// identical output.
    pub async fn list_all(&self) -> Result<BTreeMap<String, String>, AppError> {
        let links = self.repository.all().await?;
        Ok(links
            .into_iter()
            .map(|link| (link.token, link.long_url))
            .collect())
    }
}
