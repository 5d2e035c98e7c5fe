//! Core domain entities.

pub mod link;

pub use link::Link;
