//! Curve forms and the group law
//!
//! [`EllipticCurve`] pairs a field handle with a [`CurveForm`]: a closed
//! tagged union over the three supported curve shapes. The form-specific
//! group laws live in the sibling modules; everything dispatches through a
//! single `match` per operation, so adding a form means adding one arm to
//! each dispatch site and nothing else.
//!
//! Scalar multiplication policy: Weierstrass and Edwards points use
//! low-bit-first double-and-add; Montgomery points default to the
//! most-significant-bit-first ladder, whose fixed add/double sequence is
//! the form's defining advantage against timing leakage.

mod edwards;
mod montgomery;
mod point;
mod weierstrass;

pub use point::Point;

use std::sync::Arc;

use ecrypt_api::{Error, Result};
use num_bigint::BigUint;

use crate::field::{Field, FieldElement};

/// Form-specific curve coefficients
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CurveForm {
    /// Short Weierstrass form `y^2 = x^3 + ax + b`, over a prime or binary
    /// field
    Weierstrass {
        /// Coefficient `a`
        a: FieldElement,
        /// Coefficient `b`
        b: FieldElement,
    },
    /// Montgomery form `B y^2 = x^3 + A x^2 + x`, over a prime field
    Montgomery {
        /// Coefficient `A`
        a: FieldElement,
        /// Coefficient `B`
        b: FieldElement,
    },
    /// Twisted Edwards form `x^2 + y^2 = 1 + d x^2 y^2`, over a prime field
    Edwards {
        /// Coefficient `d`
        d: FieldElement,
    },
}

/// An immutable elliptic curve over a finite field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EllipticCurve {
    field: Arc<Field>,
    form: CurveForm,
}

impl EllipticCurve {
    /// Construct a short Weierstrass curve `y^2 = x^3 + ax + b`
    ///
    /// Over prime fields the discriminant condition `4a^3 + 27b^2 != 0`
    /// must hold; over binary fields the curve needs `a != 0`.
    pub fn weierstrass(a: FieldElement, b: FieldElement) -> Result<Arc<Self>> {
        if a.field() != b.field() {
            return Err(Error::FieldMismatch {
                context: "EllipticCurve::weierstrass",
            });
        }
        let field = Arc::clone(a.field());
        match field.as_ref() {
            Field::Prime(_) => {
                let four = FieldElement::new(&field, BigUint::from(4u32));
                let twenty_seven = FieldElement::new(&field, BigUint::from(27u32));
                let a_cubed = a.square().mul(&a)?;
                let discriminant = four.mul(&a_cubed)?.add(&twenty_seven.mul(&b.square())?)?;
                if discriminant.is_zero() {
                    return Err(Error::curve_params(
                        "EllipticCurve::weierstrass",
                        "singular curve: 4a^3 + 27b^2 = 0",
                    ));
                }
            }
            Field::Binary(_) => {
                if a.is_zero() {
                    return Err(Error::curve_params(
                        "EllipticCurve::weierstrass",
                        "binary-field curve requires a != 0",
                    ));
                }
            }
        }
        Ok(Arc::new(Self {
            field,
            form: CurveForm::Weierstrass { a, b },
        }))
    }

    /// Construct a Montgomery curve `B y^2 = x^3 + A x^2 + x`
    ///
    /// Requires a prime field and `B(A^2 - 4) != 0`.
    pub fn montgomery(a: FieldElement, b: FieldElement) -> Result<Arc<Self>> {
        if a.field() != b.field() {
            return Err(Error::FieldMismatch {
                context: "EllipticCurve::montgomery",
            });
        }
        let field = Arc::clone(a.field());
        if field.is_binary() {
            return Err(Error::param(
                "EllipticCurve::montgomery",
                "Montgomery curves are defined over prime fields",
            ));
        }
        let four = FieldElement::new(&field, BigUint::from(4u32));
        if b.mul(&a.square().sub(&four)?)?.is_zero() {
            return Err(Error::curve_params(
                "EllipticCurve::montgomery",
                "degenerate curve: B(A^2 - 4) = 0",
            ));
        }
        Ok(Arc::new(Self {
            field,
            form: CurveForm::Montgomery { a, b },
        }))
    }

    /// Construct a twisted Edwards curve `x^2 + y^2 = 1 + d x^2 y^2`
    ///
    /// Requires a prime field and `d != 0`.
    pub fn edwards(d: FieldElement) -> Result<Arc<Self>> {
        let field = Arc::clone(d.field());
        if field.is_binary() {
            return Err(Error::param(
                "EllipticCurve::edwards",
                "Edwards curves are defined over prime fields",
            ));
        }
        if d.is_zero() {
            return Err(Error::curve_params(
                "EllipticCurve::edwards",
                "degenerate curve: d = 0",
            ));
        }
        Ok(Arc::new(Self {
            field,
            form: CurveForm::Edwards { d },
        }))
    }

    /// Handle to the underlying field
    pub fn field(&self) -> &Arc<Field> {
        &self.field
    }

    /// The form-specific coefficients
    pub fn form(&self) -> &CurveForm {
        &self.form
    }

    /// Whether affine coordinates satisfy this curve's membership equation
    pub(crate) fn contains(&self, x: &FieldElement, y: &FieldElement) -> Result<bool> {
        match &self.form {
            CurveForm::Weierstrass { a, b } => {
                let lhs = y.square();
                let rhs = x.square().mul(x)?.add(&a.mul(x)?)?.add(b)?;
                Ok(lhs == rhs)
            }
            CurveForm::Montgomery { a, b } => {
                let lhs = b.mul(&y.square())?;
                let x_sq = x.square();
                let rhs = x_sq.mul(x)?.add(&a.mul(&x_sq)?)?.add(x)?;
                Ok(lhs == rhs)
            }
            CurveForm::Edwards { d } => {
                let x_sq = x.square();
                let y_sq = y.square();
                let lhs = x_sq.add(&y_sq)?;
                let one = FieldElement::one(x.field());
                let rhs = one.add(&d.mul(&x_sq)?.mul(&y_sq)?)?;
                Ok(lhs == rhs)
            }
        }
    }
}

/// Low-bit-first double-and-add scalar multiplication
///
/// Branches on every scalar bit, so the operation sequence leaks the
/// scalar's Hamming weight; acceptable for the Weierstrass/Edwards paths,
/// which make no constant-time claim.
pub(crate) fn double_and_add(point: &Point, scalar: &BigUint) -> Result<Point> {
    if scalar.bits() == 0 || point.is_identity() {
        return Ok(Point::identity(point.curve()));
    }
    let mut result = Point::identity(point.curve());
    let mut addend = point.clone();
    for i in 0..scalar.bits() {
        if scalar.bit(i) {
            result = result.add(&addend)?;
        }
        addend = addend.double()?;
    }
    Ok(result)
}

/// Montgomery-ladder scalar multiplication
///
/// Processes scalar bits from the most significant downward, maintaining
/// the invariant `r1 = r0 + P` and performing one add and one double per
/// bit regardless of its value.
pub(crate) fn montgomery_ladder(point: &Point, scalar: &BigUint) -> Result<Point> {
    if scalar.bits() == 0 || point.is_identity() {
        return Ok(Point::identity(point.curve()));
    }
    let mut r0 = Point::identity(point.curve());
    let mut r1 = point.clone();
    for i in (0..scalar.bits()).rev() {
        if scalar.bit(i) {
            r0 = r0.add(&r1)?;
            r1 = r1.double()?;
        } else {
            r1 = r0.add(&r1)?;
            r0 = r0.double()?;
        }
    }
    Ok(r0)
}
