//! Binary-field GF(2^m) arithmetic in polynomial basis
//!
//! Polynomials over GF(2) are bit-packed into `BigUint`s: bit `i` carries
//! the coefficient of `x^i`. Addition is XOR, multiplication is shift-XOR
//! followed by reduction modulo the field polynomial, and inversion runs
//! the extended Euclidean algorithm in GF(2)[x].

use ecrypt_api::{Error, Result};
use num_bigint::{BigInt, BigUint};
use num_traits::{One, Zero};

use super::split_exponent;

/// Binary extension field GF(2^m)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryField {
    degree: u64,
    modulus: BigUint,
}

impl BinaryField {
    /// Construct GF(2^degree) from the irreducible polynomial's coefficients
    ///
    /// `coefficients[i]` is the GF(2) coefficient of `x^i` and must have
    /// length `degree + 1` with a set leading coefficient (monic). The
    /// polynomial must also pass a basic reducibility screen: a non-zero
    /// constant term (otherwise `x` divides it) and, for `m > 1`, an odd
    /// coefficient sum (otherwise `x + 1` divides it). The screen is
    /// necessary but not sufficient for irreducibility; polynomials that
    /// pass it can still be reducible, which surfaces later as
    /// non-invertible elements.
    pub fn new(degree: u64, coefficients: &[u8]) -> Result<Self> {
        if degree == 0 {
            return Err(Error::param(
                "BinaryField::new",
                "extension degree must be at least 1",
            ));
        }
        if coefficients.len() as u64 != degree + 1 {
            return Err(Error::param(
                "BinaryField::new",
                format!(
                    "irreducible polynomial must have degree {} ({} coefficients, got {})",
                    degree,
                    degree + 1,
                    coefficients.len()
                ),
            ));
        }
        if coefficients.iter().any(|&c| c > 1) {
            return Err(Error::param(
                "BinaryField::new",
                "polynomial coefficients must be 0 or 1",
            ));
        }
        if coefficients[degree as usize] != 1 {
            return Err(Error::param(
                "BinaryField::new",
                "irreducible polynomial must be monic",
            ));
        }
        if coefficients[0] == 0 {
            return Err(Error::param(
                "BinaryField::new",
                "polynomial is divisible by x (zero constant term)",
            ));
        }
        let coefficient_sum: u32 = coefficients.iter().map(|&c| u32::from(c)).sum();
        if degree > 1 && coefficient_sum % 2 == 0 {
            return Err(Error::param(
                "BinaryField::new",
                "polynomial is divisible by x + 1 (even coefficient sum)",
            ));
        }

        let mut modulus = BigUint::zero();
        for (i, &c) in coefficients.iter().enumerate() {
            if c == 1 {
                modulus.set_bit(i as u64, true);
            }
        }
        Ok(Self { degree, modulus })
    }

    /// The extension degree `m`
    pub fn degree(&self) -> u64 {
        self.degree
    }

    /// The field polynomial, bit-packed
    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    pub(crate) fn is_valid(&self, value: &BigUint) -> bool {
        value.bits() <= self.degree
    }

    pub(crate) fn normalize(&self, value: BigUint) -> BigUint {
        poly_rem(value, &self.modulus)
    }

    pub(crate) fn add(&self, a: &BigUint, b: &BigUint) -> BigUint {
        a ^ b
    }

    pub(crate) fn mul(&self, a: &BigUint, b: &BigUint) -> BigUint {
        poly_rem(poly_mul(a, b), &self.modulus)
    }

    /// Inverse via the extended Euclidean algorithm in GF(2)[x]
    pub(crate) fn inverse(&self, a: &BigUint) -> Result<BigUint> {
        if a.is_zero() {
            return Err(Error::DivisionByZero {
                context: "BinaryField::inverse",
            });
        }
        poly_inverse(a, &self.modulus).ok_or_else(|| {
            Error::param(
                "BinaryField::inverse",
                "element shares a factor with the field polynomial; the polynomial is reducible",
            )
        })
    }

    /// Square-and-multiply exponentiation in GF(2^m)
    pub(crate) fn pow(&self, a: &BigUint, exponent: &BigInt) -> Result<BigUint> {
        let (negative, magnitude) = split_exponent(exponent);
        let base = if negative { self.inverse(a)? } else { a.clone() };

        let mut result = BigUint::one();
        let mut square = base;
        for i in 0..magnitude.bits() {
            if magnitude.bit(i) {
                result = self.mul(&result, &square);
            }
            square = self.mul(&square, &square);
        }
        Ok(result)
    }

    /// Square root via the Frobenius automorphism: `a^(2^(m-1))`
    ///
    /// Squaring is a bijection in GF(2^m), so every element has exactly one
    /// square root; this never fails.
    pub(crate) fn sqrt(&self, a: &BigUint) -> BigUint {
        let mut root = a.clone();
        for _ in 1..self.degree {
            root = self.mul(&root, &root);
        }
        root
    }
}

fn poly_degree(p: &BigUint) -> u64 {
    // Callers guarantee p is non-zero
    p.bits() - 1
}

/// Carry-less polynomial multiplication over GF(2)
pub(crate) fn poly_mul(a: &BigUint, b: &BigUint) -> BigUint {
    let mut product = BigUint::zero();
    for i in 0..a.bits() {
        if a.bit(i) {
            product ^= b << i;
        }
    }
    product
}

/// Remainder of polynomial division over GF(2)
pub(crate) fn poly_rem(mut value: BigUint, modulus: &BigUint) -> BigUint {
    let modulus_degree = poly_degree(modulus);
    while value.bits() > modulus_degree {
        let shift = poly_degree(&value) - modulus_degree;
        value ^= modulus << shift;
    }
    value
}

/// Quotient and remainder of polynomial division over GF(2)
fn poly_divmod(numerator: &BigUint, denominator: &BigUint) -> (BigUint, BigUint) {
    let denominator_degree = poly_degree(denominator);
    let mut quotient = BigUint::zero();
    let mut remainder = numerator.clone();
    while remainder.bits() > denominator_degree {
        let shift = poly_degree(&remainder) - denominator_degree;
        quotient.set_bit(shift, true);
        remainder ^= denominator << shift;
    }
    (quotient, remainder)
}

/// Extended Euclid in GF(2)[x]: the inverse of `a` mod `modulus`
///
/// Returns `None` when gcd(a, modulus) != 1, which can only happen when the
/// modulus is reducible.
fn poly_inverse(a: &BigUint, modulus: &BigUint) -> Option<BigUint> {
    let mut r0 = modulus.clone();
    let mut r1 = poly_rem(a.clone(), modulus);
    let mut t0 = BigUint::zero();
    let mut t1 = BigUint::one();

    while !r1.is_zero() {
        let (q, rem) = poly_divmod(&r0, &r1);
        r0 = std::mem::replace(&mut r1, rem);
        let t2 = &t0 ^ &poly_mul(&q, &t1);
        t0 = std::mem::replace(&mut t1, t2);
    }

    if r0.is_one() {
        Some(poly_rem(t0, modulus))
    } else {
        None
    }
}
