//! Key agreement for the ecrypt library
//!
//! Currently a single mechanism: Elliptic Curve Diffie-Hellman over any
//! parameter bundle from the `ecrypt-algorithms` registry (or a
//! caller-supplied one), with a SHA-256 hash-chain KDF turning the shared
//! point into symmetric key material.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod ecdh;

pub use ecdh::{
    compute_shared_point, derive_shared_key, generate_keypair, key_agreement, SharedSecret,
};
