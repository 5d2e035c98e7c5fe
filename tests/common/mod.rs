#![allow(dead_code)]

use std::sync::Arc;

use shorturl::application::services::LinkService;
use shorturl::domain::entities::Link;
use shorturl::domain::repositories::LinkRepository;
use shorturl::infrastructure::memory::MemoryLinkRepository;
use shorturl::state::AppState;

/// Builds an `AppState` over a fresh in-memory store, returning the store
/// as well so tests can seed and inspect it directly.
pub fn create_test_state() -> (AppState, Arc<MemoryLinkRepository>) {
    let repository = Arc::new(MemoryLinkRepository::new());
    let link_service = Arc::new(LinkService::new(repository.clone()));

    (AppState::new(link_service), repository)
}

pub async fn create_test_link(repository: &MemoryLinkRepository, token: &str, url: &str) {
    repository.insert(Link::new(token, url)).await.unwrap();
}
