//! Infrastructure layer providing storage implementations.

pub mod memory;
