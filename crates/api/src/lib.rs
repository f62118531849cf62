//! Error taxonomy and shared result types for the ecrypt library
//!
//! Every layer of the ecrypt workspace reports failures through the single
//! [`Error`] enum defined here. Construction-time invariant violations fail
//! immediately and loudly; no operation silently coerces invalid inputs.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod error;

pub use error::{Error, Result};
pub use error::validate;
