//! Request and response types for the HTTP API.

pub mod shorten;

pub use shorten::{ShortenForm, ShortenResponse};
