//! In-memory repository implementations.

pub mod memory_link_repository;

pub use memory_link_repository::MemoryLinkRepository;
