use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;

use crate::domain::entities::Link;
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

type LinkMap = HashMap<String, String>;

/// Process-local link store backed by a `HashMap` under an `RwLock`.
///
/// Entries live for as long as the process does; a restart starts empty.
#[derive(Debug, Default)]
pub struct MemoryLinkRepository {
    links: RwLock<LinkMap>,
}

impl MemoryLinkRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn read_guard(&self) -> Result<RwLockReadGuard<'_, LinkMap>, AppError> {
        self.links
            .read()
            .map_err(|_| AppError::internal("link store lock poisoned"))
    }

    fn write_guard(&self) -> Result<RwLockWriteGuard<'_, LinkMap>, AppError> {
        self.links
            .write()
            .map_err(|_| AppError::internal("link store lock poisoned"))
    }
}

#[async_trait]
impl LinkRepository for MemoryLinkRepository {
    async fn insert(&self, link: Link) -> Result<(), AppError> {
        let mut links = self.write_guard()?;
        links.insert(link.token, link.long_url);
        Ok(())
    }

    async fn find_by_token(&self, token: &str) -> Result<Option<Link>, AppError> {
        let links = self.read_guard()?;
        Ok(links
            .get(token)
            .map(|long_url| Link::new(token, long_url.clone())))
    }

    async fn all(&self) -> Result<Vec<Link>, AppError> {
        let links = self.read_guard()?;
        Ok(links
            .iter()
            .map(|(token, long_url)| Link::new(token.clone(), long_url.clone()))
            .collect())
    }
}
