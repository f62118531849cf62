//! Elliptic-curve arithmetic core
//!
//! This crate implements the arithmetic the ecrypt protocol crates are built
//! on: arbitrary-precision finite-field algebra over prime and binary
//! (GF(2^m)) fields, affine point arithmetic over three curve forms (short
//! Weierstrass, Montgomery, twisted Edwards), scalar multiplication via
//! double-and-add and the Montgomery ladder, the standard-curve registry,
//! and key generation with SEC1-style point encoding.
//!
//! Fields, curves and points are runtime values: a curve over the 23-element
//! toy field and NIST P-256 go through exactly the same code paths. All
//! values are immutable once constructed; fields and curves are shared
//! through [`std::sync::Arc`] handles.
//!
//! Except for the Montgomery ladder's fixed operation sequence, nothing in
//! this crate is constant-time. Callers needing timing-attack resistance on
//! the Weierstrass/Edwards paths must treat that as an unmet requirement.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error re-exports
pub use ecrypt_api::{validate, Error, Result};

// Finite-field engine
pub mod field;
pub use field::{BinaryField, Field, FieldElement, PrimeField};

// Curve forms and point arithmetic
pub mod curve;
pub use curve::{CurveForm, EllipticCurve, Point};

// Standard-curve registry
pub mod registry;
pub use registry::{registry, CurveId, CurveParameters, CurveRegistry};

// Key management and point encoding
pub mod keys;
pub use keys::{
    derive_public_key, deserialize_public_key, generate_keypair, generate_private_key,
    serialize_public_key, KeyPair,
};
