//! Elliptic Curve Diffie-Hellman key agreement
//!
//! State-free two-step protocol: each party generates a key pair, then
//! multiplies the peer's public point by its own private scalar. Both
//! parties land on the same shared point (`a(bG) = b(aG) = (ab)G`), and a
//! SHA-256 hash chain over the shared point's x-coordinate derives the
//! symmetric key material.
//!
//! The scalar multiplication inherits the curve form's policy from
//! `ecrypt-algorithms`: constant-structure ladder on Montgomery curves,
//! plain double-and-add elsewhere.

use ecrypt_algorithms::curve::Point;
use ecrypt_algorithms::keys::{self, coordinate_bytes, KeyPair};
use ecrypt_algorithms::registry::CurveParameters;
use ecrypt_api::{Error, Result};
use ecrypt_params::ecdh::ECDH_SHARED_SECRET_SIZE;
use num_bigint::BigUint;
use rand::{CryptoRng, RngCore};
use sha2::{Digest, Sha256};
use zeroize::Zeroizing;

/// Symmetric key material derived from an ECDH exchange
///
/// The backing buffer is zeroized on drop.
#[derive(Clone)]
pub struct SharedSecret(Zeroizing<Vec<u8>>);

impl SharedSecret {
    /// The derived key bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Length of the derived key in bytes
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the derived key is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl PartialEq for SharedSecret {
    fn eq(&self, other: &Self) -> bool {
        *self.0 == *other.0
    }
}

impl Eq for SharedSecret {}

impl core::fmt::Debug for SharedSecret {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        // Key material never appears in debug output
        write!(f, "SharedSecret({} bytes)", self.0.len())
    }
}

/// Generate an ECDH key pair on the given curve
pub fn generate_keypair<R: CryptoRng + RngCore>(
    params: &CurveParameters,
    rng: &mut R,
) -> Result<KeyPair> {
    keys::generate_keypair(params, rng)
}

/// Compute the shared point `private_key * peer_public_key`
///
/// The peer's point must belong to the bundle's curve and must not be the
/// identity (which would fix the shared secret regardless of the private
/// key).
pub fn compute_shared_point(
    private_key: &BigUint,
    peer_public_key: &Point,
    params: &CurveParameters,
) -> Result<Point> {
    if peer_public_key.curve() != params.curve() {
        return Err(Error::CurveMismatch {
            context: "ecdh::compute_shared_point",
        });
    }
    if peer_public_key.is_identity() {
        return Err(Error::param(
            "ecdh::compute_shared_point",
            "peer public key is the identity point",
        ));
    }
    peer_public_key.scalar_mul(private_key)
}

/// Derive `length` bytes of key material from a shared point
///
/// SHA-256 digests the shared point's fixed-width big-endian x-coordinate;
/// requests longer than one digest extend the output by hash-chaining the
/// running material with the x-coordinate until enough bytes accumulate.
pub fn derive_shared_key(shared_point: &Point, length: usize) -> Result<SharedSecret> {
    let Some(x) = shared_point.x() else {
        return Err(Error::param(
            "ecdh::derive_shared_key",
            "shared point is the identity point",
        ));
    };
    let x_bytes = coordinate_bytes(x);

    let mut material = Zeroizing::new(Sha256::digest(&x_bytes).as_slice().to_vec());
    while material.len() < length {
        let mut hasher = Sha256::new();
        hasher.update(&*material);
        hasher.update(&x_bytes);
        let block = hasher.finalize();
        material.extend_from_slice(block.as_slice());
    }
    material.truncate(length);
    Ok(SharedSecret(material))
}

/// One party's half of a complete key agreement
///
/// Computes the shared point from the peer's public key and derives
/// `length` bytes of key material; [`ECDH_SHARED_SECRET_SIZE`] is the
/// conventional length.
pub fn key_agreement(
    private_key: &BigUint,
    peer_public_key: &Point,
    params: &CurveParameters,
    length: usize,
) -> Result<SharedSecret> {
    let shared_point = compute_shared_point(private_key, peer_public_key, params)?;
    derive_shared_key(&shared_point, length)
}

/// Re-export of the conventional derived-key length
pub const DEFAULT_KEY_LENGTH: usize = ECDH_SHARED_SECRET_SIZE;

#[cfg(test)]
mod tests;
