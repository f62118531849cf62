//! Finite-field engine
//!
//! A [`Field`] is a runtime value describing either a prime field (integers
//! mod a Miller-Rabin-verified prime) or a binary field GF(2^m) (polynomials
//! over GF(2) mod an irreducible polynomial, bit-packed into integers).
//! [`FieldElement`]s carry an [`Arc`] handle to their owning field and stay
//! in canonical reduced form at all times; every operation returns a fresh
//! element. Mixing elements of different fields is reported as
//! [`Error::FieldMismatch`] rather than silently computed.

mod binary;
mod prime;

pub use binary::BinaryField;
pub use prime::PrimeField;

use std::sync::Arc;

use ecrypt_api::{Error, Result};
use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{One, Zero};

/// A finite field: either integers mod a prime, or GF(2^m)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Field {
    /// Prime field of integers mod `p`
    Prime(PrimeField),
    /// Binary field GF(2^m) in polynomial basis
    Binary(BinaryField),
}

impl Field {
    /// Construct a shared prime field, verifying primality of `p`
    pub fn prime(p: BigUint) -> Result<Arc<Self>> {
        Ok(Arc::new(Self::Prime(PrimeField::new(p)?)))
    }

    /// Construct a shared binary field GF(2^degree)
    ///
    /// `coefficients` lists the irreducible polynomial's GF(2) coefficients
    /// in ascending degree order; see [`BinaryField::new`].
    pub fn binary(degree: u64, coefficients: &[u8]) -> Result<Arc<Self>> {
        Ok(Arc::new(Self::Binary(BinaryField::new(degree, coefficients)?)))
    }

    /// Whether `value` is already in canonical reduced form
    pub fn is_valid(&self, value: &BigUint) -> bool {
        match self {
            Self::Prime(f) => f.is_valid(value),
            Self::Binary(f) => f.is_valid(value),
        }
    }

    /// Bit width of canonical values: `bits(p)` or the extension degree `m`
    pub fn bit_len(&self) -> u64 {
        match self {
            Self::Prime(f) => f.prime().bits(),
            Self::Binary(f) => f.degree(),
        }
    }

    /// Whether this field has characteristic 2
    pub fn is_binary(&self) -> bool {
        matches!(self, Self::Binary(_))
    }

    fn normalize(&self, value: BigUint) -> BigUint {
        match self {
            Self::Prime(f) => f.normalize(value),
            Self::Binary(f) => f.normalize(value),
        }
    }

    fn add_values(&self, a: &BigUint, b: &BigUint) -> BigUint {
        match self {
            Self::Prime(f) => f.add(a, b),
            Self::Binary(f) => f.add(a, b),
        }
    }

    fn sub_values(&self, a: &BigUint, b: &BigUint) -> BigUint {
        match self {
            Self::Prime(f) => f.sub(a, b),
            // Subtraction is addition in characteristic 2
            Self::Binary(f) => f.add(a, b),
        }
    }

    fn mul_values(&self, a: &BigUint, b: &BigUint) -> BigUint {
        match self {
            Self::Prime(f) => f.mul(a, b),
            Self::Binary(f) => f.mul(a, b),
        }
    }

    fn inv_value(&self, a: &BigUint) -> Result<BigUint> {
        match self {
            Self::Prime(f) => f.inverse(a),
            Self::Binary(f) => f.inverse(a),
        }
    }

    fn pow_value(&self, a: &BigUint, exponent: &BigInt) -> Result<BigUint> {
        match self {
            Self::Prime(f) => f.pow(a, exponent),
            Self::Binary(f) => f.pow(a, exponent),
        }
    }

    fn sqrt_value(&self, a: &BigUint) -> Result<Option<BigUint>> {
        match self {
            Self::Prime(f) => f.sqrt(a),
            Self::Binary(f) => Ok(Some(f.sqrt(a))),
        }
    }

    fn negate_value(&self, a: &BigUint) -> BigUint {
        match self {
            Self::Prime(f) => f.negate(a),
            // -a = a in characteristic 2
            Self::Binary(_) => a.clone(),
        }
    }
}

/// An immutable element of a [`Field`]
///
/// Equality compares the canonical value and the owning field; elements of
/// distinct fields are never equal.
#[derive(Debug, Clone)]
pub struct FieldElement {
    value: BigUint,
    field: Arc<Field>,
}

impl PartialEq for FieldElement {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value && self.same_field(other)
    }
}

impl Eq for FieldElement {}

impl core::fmt::Display for FieldElement {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl FieldElement {
    /// Create an element of `field`, canonicalizing the value
    ///
    /// Prime fields reduce mod `p`; binary fields reduce modulo the field
    /// polynomial. Values already in canonical form pass through unchanged.
    pub fn new(field: &Arc<Field>, value: BigUint) -> Self {
        Self {
            value: field.normalize(value),
            field: Arc::clone(field),
        }
    }

    /// The additive identity of `field`
    pub fn zero(field: &Arc<Field>) -> Self {
        Self::new(field, BigUint::zero())
    }

    /// The multiplicative identity of `field`
    pub fn one(field: &Arc<Field>) -> Self {
        Self::new(field, BigUint::one())
    }

    /// The canonical value of this element
    pub fn value(&self) -> &BigUint {
        &self.value
    }

    /// Handle to the owning field
    pub fn field(&self) -> &Arc<Field> {
        &self.field
    }

    /// Whether this is the additive identity
    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    /// Whether this is the multiplicative identity
    pub fn is_one(&self) -> bool {
        self.value.is_one()
    }

    /// Parity of the canonical value, used for compressed point encoding
    pub fn is_odd(&self) -> bool {
        self.value.bit(0)
    }

    fn same_field(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.field, &other.field) || self.field == other.field
    }

    fn check_same_field(&self, other: &Self, context: &'static str) -> Result<()> {
        if self.same_field(other) {
            Ok(())
        } else {
            Err(Error::FieldMismatch { context })
        }
    }

    fn wrap(&self, value: BigUint) -> Self {
        Self {
            value,
            field: Arc::clone(&self.field),
        }
    }

    /// Field addition
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.check_same_field(other, "FieldElement::add")?;
        Ok(self.wrap(self.field.add_values(&self.value, &other.value)))
    }

    /// Field subtraction
    pub fn sub(&self, other: &Self) -> Result<Self> {
        self.check_same_field(other, "FieldElement::sub")?;
        Ok(self.wrap(self.field.sub_values(&self.value, &other.value)))
    }

    /// Field multiplication
    pub fn mul(&self, other: &Self) -> Result<Self> {
        self.check_same_field(other, "FieldElement::mul")?;
        Ok(self.wrap(self.field.mul_values(&self.value, &other.value)))
    }

    /// Field division, computed as `self * other^-1`
    pub fn div(&self, other: &Self) -> Result<Self> {
        self.check_same_field(other, "FieldElement::div")?;
        let inv = self.field.inv_value(&other.value)?;
        Ok(self.wrap(self.field.mul_values(&self.value, &inv)))
    }

    /// Multiplicative inverse; the zero element has none
    pub fn inverse(&self) -> Result<Self> {
        Ok(self.wrap(self.field.inv_value(&self.value)?))
    }

    /// Exponentiation by an arbitrary (possibly negative) integer
    ///
    /// A zero exponent yields the multiplicative identity; negative
    /// exponents route through [`FieldElement::inverse`].
    pub fn pow(&self, exponent: &BigInt) -> Result<Self> {
        Ok(self.wrap(self.field.pow_value(&self.value, exponent)?))
    }

    /// Squaring; never fails since both operands share this field
    pub fn square(&self) -> Self {
        self.wrap(self.field.mul_values(&self.value, &self.value))
    }

    /// Additive inverse
    ///
    /// In characteristic 2 every element is its own additive inverse, so
    /// binary-field negation returns the element unchanged.
    pub fn negate(&self) -> Self {
        self.wrap(self.field.negate_value(&self.value))
    }

    /// Square root
    ///
    /// Prime fields return `Ok(None)` for quadratic non-residues (Euler's
    /// criterion) and support `p = 3 (mod 4)` and `p = 5 (mod 8)` moduli;
    /// other prime shapes fail with [`Error::Unsupported`]. In binary
    /// fields squaring is the Frobenius automorphism, so every element has
    /// exactly one square root and the result is always `Ok(Some(..))`.
    pub fn sqrt(&self) -> Result<Option<Self>> {
        Ok(self.field.sqrt_value(&self.value)?.map(|v| self.wrap(v)))
    }
}

/// Exponent sign handling shared by both field kinds
pub(crate) fn split_exponent(exponent: &BigInt) -> (bool, &BigUint) {
    (exponent.sign() == Sign::Minus, exponent.magnitude())
}
