//! Application layer services implementing business logic.

pub mod services;
