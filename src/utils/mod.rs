//! Utility functions for token derivation and encoding.

pub mod token;
