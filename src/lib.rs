//! In-memory URL shortener service.
//!
//! Layers:
//! - `domain`: entities and repository traits
//! - `infrastructure`: repository implementations
//! - `application`: business services
//! - `api`: HTTP layer (DTOs, handlers, middleware)

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod routes;
pub mod server;
pub mod state;
pub mod utils;

pub use config::Config;
pub use error::AppError;
pub use state::AppState;
