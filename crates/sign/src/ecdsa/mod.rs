//! ECDSA signing and verification
//!
//! Algorithm per FIPS 186-4, section 6, over the field/curve/order triple
//! of a parameter bundle:
//!
//! Signing:
//! 1. Draw a nonce `k` in `[1, n-1]` and compute `R = k*G`
//! 2. `r = R.x mod n`; retry on `r = 0`
//! 3. `e = SHA-256(message) mod n`
//! 4. `s = k^-1 (e + d*r) mod n`; retry on `s = 0` or non-invertible `k`
//!
//! Verification never raises: malformed or out-of-range signatures simply
//! verify as `false`.
//!
//! The nonce loop is bounded by `ECDSA_MAX_SIGNING_ATTEMPTS`; running into
//! the ceiling means the randomness source is broken and is surfaced as an
//! error rather than looping forever.

use ecrypt_algorithms::curve::Point;
use ecrypt_algorithms::registry::CurveParameters;
use ecrypt_api::{Error, Result};
use ecrypt_params::ecdsa::ECDSA_MAX_SIGNING_ATTEMPTS;
use num_bigint::{BigUint, RandBigInt};
use num_traits::{One, Zero};
use rand::{CryptoRng, RngCore};
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

/// An ECDSA signature: the pair `(r, s)`, both in `[1, n-1]`
///
/// No wire format is mandated beyond the pair itself; DER or compact
/// encodings are a caller concern.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Signature {
    /// x-coordinate of the nonce point, reduced mod the curve order
    pub r: BigUint,
    /// Proof scalar binding the message digest and private key
    pub s: BigUint,
}

/// SHA-256 digest of the message, reduced modulo the curve order
fn hash_to_scalar(message: &[u8], order: &BigUint) -> BigUint {
    BigUint::from_bytes_be(Sha256::digest(message).as_slice()) % order
}

/// Big-endian bytes of `value`, left-padded to the order's width
fn padded_bytes(value: &BigUint, width: usize) -> Vec<u8> {
    let raw = value.to_bytes_be();
    let mut out = vec![0u8; width.saturating_sub(raw.len())];
    out.extend_from_slice(&raw);
    out
}

/// Sign a message with the given private key
///
/// Transient nonce failures (`r = 0`, `s = 0`, non-invertible `k`) retry
/// internally with a fresh nonce; each retry draws independently and no
/// state persists across attempts.
pub fn sign<R: CryptoRng + RngCore>(
    message: &[u8],
    private_key: &BigUint,
    params: &CurveParameters,
    rng: &mut R,
) -> Result<Signature> {
    let n = params.order();
    let Some(generator) = params.generator() else {
        return Err(Error::param(
            "ecdsa::sign",
            "curve parameters carry no generator point",
        ));
    };
    let e = hash_to_scalar(message, n);

    for _ in 0..ECDSA_MAX_SIGNING_ATTEMPTS {
        let k = rng.gen_biguint_range(&BigUint::one(), n);
        let nonce_point = generator.scalar_mul(&k)?;
        let Some(x) = nonce_point.x() else {
            // k annihilated the generator; only possible when the claimed
            // order is not the generator's true order
            continue;
        };
        let r = x.value() % n;
        if r.is_zero() {
            continue;
        }

        let Some(k_inv) = k.modinv(n) else {
            continue;
        };
        let s = (&k_inv * (&e + private_key * &r)) % n;
        if s.is_zero() {
            continue;
        }

        return Ok(Signature { r, s });
    }

    Err(Error::RandomGeneration {
        context: "ecdsa::sign",
        message: format!(
            "no usable nonce after {} attempts",
            ECDSA_MAX_SIGNING_ATTEMPTS
        ),
    })
}

/// Verify a signature against a message and public key
///
/// Returns a definite accept/reject; malformed inputs (components out of
/// `[1, n-1]`, a public key from another curve, a non-invertible `s`)
/// reject rather than error.
pub fn verify(
    message: &[u8],
    signature: &Signature,
    public_key: &Point,
    params: &CurveParameters,
) -> bool {
    verify_inner(message, signature, public_key, params).unwrap_or(false)
}

fn verify_inner(
    message: &[u8],
    signature: &Signature,
    public_key: &Point,
    params: &CurveParameters,
) -> Result<bool> {
    let n = params.order();
    let one = BigUint::one();
    if signature.r < one || &signature.r >= n || signature.s < one || &signature.s >= n {
        return Ok(false);
    }
    let Some(generator) = params.generator() else {
        return Ok(false);
    };
    if public_key.curve() != params.curve() || public_key.is_identity() {
        return Ok(false);
    }

    let e = hash_to_scalar(message, n);
    let Some(w) = signature.s.modinv(n) else {
        return Ok(false);
    };
    let u1 = (&e * &w) % n;
    let u2 = (&signature.r * &w) % n;

    let candidate = generator
        .scalar_mul(&u1)?
        .add(&public_key.scalar_mul(&u2)?)?;
    if candidate.is_identity() {
        return Ok(false);
    }
    let Some(x) = candidate.x() else {
        return Ok(false);
    };
    let v = x.value() % n;

    let width = (n.bits() as usize + 7) / 8;
    let v_bytes = padded_bytes(&v, width);
    let r_bytes = padded_bytes(&signature.r, width);
    Ok(v_bytes.ct_eq(&r_bytes).into())
}
