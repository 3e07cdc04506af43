//! # Menu Access Shared
//! 
//! Shared configuration, telemetry, and helpers for the menu access workspace.

pub mod constants;
pub mod types;
pub mod utils;
pub mod telemetry;
pub mod config;
pub mod error;

pub use types::*;
pub use error::AppError;
