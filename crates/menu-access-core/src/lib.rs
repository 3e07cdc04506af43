//! # Menu Access Core
//! 
//! Domain entities, repository traits, and the services that resolve, edit,
//! and reorder the per-level menu permission matrix.

pub mod domain;
pub mod services;
pub mod repositories;
pub mod error;

// Re-export domain entities
pub use domain::*;
pub use error::DomainError;
