//! Affine points and the point-level operation surface

use std::sync::Arc;

use ecrypt_api::{Error, Result};
use num_bigint::BigUint;

use super::{double_and_add, edwards, montgomery, montgomery_ladder, weierstrass, CurveForm};
use crate::curve::EllipticCurve;
use crate::field::FieldElement;

/// Either the point at infinity or an affine coordinate pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Coordinates {
    /// The point at infinity (no coordinates)
    Infinity,
    /// An affine `(x, y)` pair
    Affine {
        /// x-coordinate
        x: FieldElement,
        /// y-coordinate
        y: FieldElement,
    },
}

/// An immutable point on an [`EllipticCurve`]
///
/// Every point carries a handle to its owning curve; operations on points
/// of different curves fail fast with [`Error::CurveMismatch`] instead of
/// silently computing. Non-identity points satisfy their curve's membership
/// equation at construction time.
#[derive(Debug, Clone)]
pub struct Point {
    curve: Arc<EllipticCurve>,
    coords: Coordinates,
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        if !self.same_curve(other) {
            return false;
        }
        // Both identity representations compare equal (relevant on Edwards
        // curves, whose identity is the affine (0, 1))
        if self.is_identity() || other.is_identity() {
            return self.is_identity() == other.is_identity();
        }
        self.coords == other.coords
    }
}

impl Eq for Point {}

impl Point {
    /// Construct a validated affine point on `curve`
    ///
    /// Fails with [`Error::FieldMismatch`] when a coordinate belongs to a
    /// different field than the curve, and [`Error::PointNotOnCurve`] when
    /// the pair does not satisfy the curve's membership equation.
    pub fn new(curve: &Arc<EllipticCurve>, x: FieldElement, y: FieldElement) -> Result<Self> {
        if x.field() != curve.field() || y.field() != curve.field() {
            return Err(Error::FieldMismatch {
                context: "Point::new",
            });
        }
        if !curve.contains(&x, &y)? {
            return Err(Error::PointNotOnCurve {
                context: "Point::new",
            });
        }
        Ok(Self::from_affine(curve, x, y))
    }

    /// The group identity of `curve`
    ///
    /// The point at infinity for Weierstrass and Montgomery curves; the
    /// affine point `(0, 1)` for Edwards curves, whose addition formula is
    /// complete and has no separate infinity element.
    pub fn identity(curve: &Arc<EllipticCurve>) -> Self {
        match curve.form() {
            CurveForm::Edwards { .. } => Self::from_affine(
                curve,
                FieldElement::zero(curve.field()),
                FieldElement::one(curve.field()),
            ),
            _ => Self::infinity_marker(curve),
        }
    }

    pub(crate) fn infinity_marker(curve: &Arc<EllipticCurve>) -> Self {
        Self {
            curve: Arc::clone(curve),
            coords: Coordinates::Infinity,
        }
    }

    pub(crate) fn from_affine(curve: &Arc<EllipticCurve>, x: FieldElement, y: FieldElement) -> Self {
        Self {
            curve: Arc::clone(curve),
            coords: Coordinates::Affine { x, y },
        }
    }

    /// Handle to the owning curve
    pub fn curve(&self) -> &Arc<EllipticCurve> {
        &self.curve
    }

    /// The x-coordinate, or `None` for the point at infinity
    pub fn x(&self) -> Option<&FieldElement> {
        match &self.coords {
            Coordinates::Infinity => None,
            Coordinates::Affine { x, .. } => Some(x),
        }
    }

    /// The y-coordinate, or `None` for the point at infinity
    pub fn y(&self) -> Option<&FieldElement> {
        match &self.coords {
            Coordinates::Infinity => None,
            Coordinates::Affine { y, .. } => Some(y),
        }
    }

    pub(crate) fn affine(&self) -> Option<(&FieldElement, &FieldElement)> {
        match &self.coords {
            Coordinates::Infinity => None,
            Coordinates::Affine { x, y } => Some((x, y)),
        }
    }

    /// Whether this point is the group identity
    pub fn is_identity(&self) -> bool {
        match &self.coords {
            Coordinates::Infinity => true,
            Coordinates::Affine { x, y } => {
                matches!(self.curve.form(), CurveForm::Edwards { .. })
                    && x.is_zero()
                    && y.is_one()
            }
        }
    }

    /// Whether this point still satisfies its curve's membership equation
    ///
    /// Construction enforces membership, so this only returns `false` for
    /// values produced by group-law edge cases on curves whose chord
    /// formulas are not closed (degenerate binary-field configurations).
    pub fn is_on_curve(&self) -> bool {
        match self.affine() {
            None => true,
            Some((x, y)) => self.curve.contains(x, y).unwrap_or(false),
        }
    }

    fn same_curve(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.curve, &other.curve) || self.curve == other.curve
    }

    fn check_same_curve(&self, other: &Self, context: &'static str) -> Result<()> {
        if self.same_curve(other) {
            Ok(())
        } else {
            Err(Error::CurveMismatch { context })
        }
    }

    /// Group addition
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.check_same_curve(other, "Point::add")?;
        match self.curve.form() {
            CurveForm::Weierstrass { a, .. } => weierstrass::add(self, other, a),
            CurveForm::Montgomery { a, b } => montgomery::add(self, other, a, b),
            CurveForm::Edwards { d } => edwards::add(self, other, d),
        }
    }

    /// Point doubling
    pub fn double(&self) -> Result<Self> {
        match self.curve.form() {
            CurveForm::Weierstrass { a, .. } => weierstrass::double(self, a),
            CurveForm::Montgomery { a, b } => montgomery::double(self, a, b),
            // The Edwards formula is complete: doubling is plain addition
            CurveForm::Edwards { d } => edwards::add(self, self, d),
        }
    }

    /// Additive inverse
    ///
    /// Weierstrass and Montgomery points negate `y` (a no-op over binary
    /// fields, where `-y = y`); Edwards points negate `x`.
    pub fn negate(&self) -> Self {
        match self.affine() {
            None => self.clone(),
            Some((x, y)) => match self.curve.form() {
                CurveForm::Edwards { .. } => {
                    Self::from_affine(&self.curve, x.negate(), y.clone())
                }
                _ => Self::from_affine(&self.curve, x.clone(), y.negate()),
            },
        }
    }

    /// Scalar multiplication `scalar * self`
    ///
    /// Montgomery points use the ladder; Weierstrass and Edwards points use
    /// double-and-add. A zero scalar or identity input returns the identity
    /// immediately.
    pub fn scalar_mul(&self, scalar: &BigUint) -> Result<Self> {
        match self.curve.form() {
            CurveForm::Montgomery { .. } => montgomery_ladder(self, scalar),
            _ => double_and_add(self, scalar),
        }
    }

    /// Scalar multiplication via the Montgomery ladder on any curve form
    ///
    /// The ladder only needs `add` and `double`, so it runs on every form;
    /// it is the default policy only for Montgomery curves.
    pub fn scalar_mul_ladder(&self, scalar: &BigUint) -> Result<Self> {
        montgomery_ladder(self, scalar)
    }
}
