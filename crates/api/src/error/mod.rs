//! Error handling for elliptic-curve arithmetic and protocols

pub mod types;
pub mod validate;

// Re-export the primary error type and result
pub use types::{Error, Result};
