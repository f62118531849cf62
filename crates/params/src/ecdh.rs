//! Constants for Elliptic Curve Diffie-Hellman

/// Default size of a derived ECDH shared secret in bytes
pub const ECDH_SHARED_SECRET_SIZE: usize = 32;
