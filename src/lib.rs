//! # ecrypt
//!
//! A pure Rust elliptic-curve cryptography toolkit built on
//! arbitrary-precision arithmetic: finite fields (prime and binary), three
//! curve forms (short Weierstrass, Montgomery, twisted Edwards), a
//! standard-curve registry (NIST P-256, secp256k1, Curve25519), key
//! management with SEC1-style encoding, ECDH key agreement and ECDSA
//! signatures.
//!
//! ## Crate structure
//!
//! This is a facade crate that re-exports functionality from the
//! workspace's sub-crates:
//!
//! - [`ecrypt_api`]: error taxonomy and result types
//! - [`ecrypt_params`]: standard curve constants and tunables
//! - [`ecrypt_algorithms`]: field, curve, registry and key management
//! - [`ecrypt_kem`]: ECDH key agreement
//! - [`ecrypt_sign`]: ECDSA
//!
//! ## Example
//!
//! ```
//! use ecrypt::prelude::*;
//! use rand::rngs::OsRng;
//!
//! let params = registry().get(CurveId::NistP256);
//! let keypair = generate_keypair(params, &mut OsRng)?;
//!
//! let message = b"attack at dawn";
//! let signature = ecrypt::sign::ecdsa::sign(message, &keypair.private_key, params, &mut OsRng)?;
//! assert!(ecrypt::sign::ecdsa::verify(message, &signature, &keypair.public_key, params));
//! # Ok::<(), ecrypt::api::Error>(())
//! ```

#![forbid(unsafe_code)]

pub use ecrypt_api as api;
pub use ecrypt_params as params;
pub use ecrypt_algorithms as algorithms;
pub use ecrypt_kem as kem;
pub use ecrypt_sign as sign;

/// Common imports for ecrypt users
pub mod prelude {
    pub use crate::api::{Error, Result};

    pub use crate::algorithms::curve::{CurveForm, EllipticCurve, Point};
    pub use crate::algorithms::field::{BinaryField, Field, FieldElement, PrimeField};
    pub use crate::algorithms::keys::{
        derive_public_key, deserialize_public_key, generate_keypair, generate_private_key,
        serialize_public_key, KeyPair,
    };
    pub use crate::algorithms::registry::{registry, CurveId, CurveParameters};

    pub use crate::kem::ecdh::{key_agreement, SharedSecret};
    pub use crate::sign::ecdsa::Signature;
}
