//! Request-processing middleware.

pub mod tracing;
