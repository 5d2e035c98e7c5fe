use std::sync::Arc;

use crate::application::services::LinkService;
use crate::infrastructure::memory::MemoryLinkRepository;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<MemoryLinkRepository>>,
}

impl AppState {
    pub fn new(link_service: Arc<LinkService<MemoryLinkRepository>>) -> Self {
        Self { link_service }
    }
}
