//! Digital signatures for the ecrypt library
//!
//! Currently a single scheme: ECDSA over any parameter bundle from the
//! `ecrypt-algorithms` registry (or a caller-supplied one), with SHA-256
//! message digests and randomized nonces.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod ecdsa;

pub use ecdsa::{sign, verify, Signature};
