//! Domain layer containing business entities and repository contracts.

pub mod entities;
pub mod repositories;
