//! Key generation and SEC1-style public-key encoding
//!
//! Private keys are uniform scalars in `[1, order-1]`; public keys are
//! points derived by scalar multiplication of the generator. Wire encoding
//! follows SEC1: a single zero byte for the identity, `0x04 || X || Y`
//! uncompressed, `0x02/0x03 || X` compressed with the prefix carrying the
//! parity of `y`. Coordinates are fixed-width big-endian, 32 bytes for the
//! standard curves and proportionally wider for larger fields.

use ecrypt_api::{validate, Error, Result};
use num_bigint::{BigUint, RandBigInt};
use num_traits::One;
use rand::{CryptoRng, RngCore};
use sha2::{Digest, Sha512};

use crate::curve::{CurveForm, Point};
use crate::field::{Field, FieldElement};
use crate::registry::CurveParameters;

/// A private scalar and the public point derived from it
#[derive(Debug, Clone)]
pub struct KeyPair {
    /// Private scalar in `[1, order-1]`
    pub private_key: BigUint,
    /// Public point `private_key * G`
    pub public_key: Point,
}

/// Draw a uniform private scalar in `[1, order-1]`
pub fn generate_private_key<R: CryptoRng + RngCore>(
    params: &CurveParameters,
    rng: &mut R,
) -> Result<BigUint> {
    // CurveParameters guarantees order >= 2, so the range is never empty
    Ok(rng.gen_biguint_range(&BigUint::one(), params.order()))
}

/// Derive the public key `private_key * G`
///
/// Parameter bundles that pin down only a Montgomery base u-coordinate
/// (Curve25519) would need the X25519 u-only ladder, which this library
/// deliberately does not implement.
pub fn derive_public_key(private_key: &BigUint, params: &CurveParameters) -> Result<Point> {
    match params.generator() {
        Some(generator) => generator.scalar_mul(private_key),
        None if params.base_u().is_some() => Err(Error::Unsupported {
            feature: "X25519 u-coordinate public-key derivation",
        }),
        None => Err(Error::param(
            "derive_public_key",
            "curve parameters carry no generator point",
        )),
    }
}

/// Generate a key pair on the given curve
pub fn generate_keypair<R: CryptoRng + RngCore>(
    params: &CurveParameters,
    rng: &mut R,
) -> Result<KeyPair> {
    let private_key = generate_private_key(params, rng)?;
    let public_key = derive_public_key(&private_key, params)?;
    Ok(KeyPair {
        private_key,
        public_key,
    })
}

/// Derive a reproducible scalar in `[1, order-1]` from a seed
///
/// SHA-512 digests the seed and the result is folded into the scalar
/// range. Intended for tests and deterministic sub-key derivation, not as
/// a substitute for [`generate_private_key`].
pub fn generate_deterministic_scalar(seed: &[u8], order: &BigUint) -> Result<BigUint> {
    if *order < BigUint::from(2u32) {
        return Err(Error::param(
            "generate_deterministic_scalar",
            "order must be at least 2",
        ));
    }
    let digest = Sha512::digest(seed);
    let value = BigUint::from_bytes_be(digest.as_slice());
    Ok(value % (order - BigUint::one()) + BigUint::one())
}

/// Serialized width in bytes of one coordinate of `field`
pub fn coordinate_width(field: &Field) -> usize {
    let field_bytes = (field.bit_len() as usize + 7) / 8;
    field_bytes.max(ecrypt_params::curves::COORDINATE_SIZE)
}

/// A field element as fixed-width big-endian bytes
pub fn coordinate_bytes(element: &FieldElement) -> Vec<u8> {
    let width = coordinate_width(element.field());
    let raw = element.value().to_bytes_be();
    let mut out = vec![0u8; width - raw.len()];
    out.extend_from_slice(&raw);
    out
}

/// Serialize a public key point
///
/// The identity encodes as a single zero byte regardless of the
/// `compressed` flag.
pub fn serialize_public_key(point: &Point, compressed: bool) -> Vec<u8> {
    let Some((x, y)) = point.x().zip(point.y()) else {
        return vec![0x00];
    };
    let x_bytes = coordinate_bytes(x);
    if compressed {
        let mut out = Vec::with_capacity(1 + x_bytes.len());
        out.push(if y.is_odd() { 0x03 } else { 0x02 });
        out.extend_from_slice(&x_bytes);
        out
    } else {
        let y_bytes = coordinate_bytes(y);
        let mut out = Vec::with_capacity(1 + x_bytes.len() + y_bytes.len());
        out.push(0x04);
        out.extend_from_slice(&x_bytes);
        out.extend_from_slice(&y_bytes);
        out
    }
}

/// Deserialize a public key point
///
/// Compressed decoding recovers `y` as a square root of `x^3 + ax + b` and
/// is therefore defined only for Weierstrass curves.
pub fn deserialize_public_key(bytes: &[u8], params: &CurveParameters) -> Result<Point> {
    const CONTEXT: &str = "deserialize_public_key";
    validate::min_length(CONTEXT, bytes.len(), 1)?;
    let width = coordinate_width(params.field());

    match bytes[0] {
        0x00 => {
            validate::length(CONTEXT, bytes.len(), 1)?;
            Ok(Point::identity(params.curve()))
        }
        0x04 => {
            validate::length(CONTEXT, bytes.len(), 1 + 2 * width)?;
            let x = FieldElement::new(params.field(), BigUint::from_bytes_be(&bytes[1..1 + width]));
            let y = FieldElement::new(params.field(), BigUint::from_bytes_be(&bytes[1 + width..]));
            Point::new(params.curve(), x, y)
        }
        prefix @ (0x02 | 0x03) => {
            validate::length(CONTEXT, bytes.len(), 1 + width)?;
            let CurveForm::Weierstrass { a, b } = params.curve().form() else {
                return Err(Error::Unsupported {
                    feature: "compressed point decoding for non-Weierstrass curves",
                });
            };
            let x = FieldElement::new(params.field(), BigUint::from_bytes_be(&bytes[1..]));
            let rhs = x.square().mul(&x)?.add(&a.mul(&x)?)?.add(b)?;
            let y = rhs.sqrt()?.ok_or_else(|| {
                Error::encoding(CONTEXT, "x-coordinate does not lift to a curve point")
            })?;
            let wants_odd = prefix == 0x03;
            let y = if y.is_odd() == wants_odd { y } else { y.negate() };
            Point::new(params.curve(), x, y)
        }
        prefix => Err(Error::encoding(
            CONTEXT,
            format!("unrecognized prefix byte 0x{:02x}", prefix),
        )),
    }
}

#[cfg(test)]
mod tests;
