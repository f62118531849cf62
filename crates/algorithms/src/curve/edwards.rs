//! Complete addition formula for twisted Edwards curves

use ecrypt_api::Result;

use crate::curve::Point;
use crate::field::FieldElement;

/// Unified Edwards addition; doubling is the same formula with `p = q`
///
/// The neutral element is the affine `(0, 1)` and the formula needs no
/// case split for it. A vanishing denominator (impossible when `d` is a
/// non-square, possible on degenerate parameter choices) collapses to the
/// identity.
pub(crate) fn add(p: &Point, q: &Point, d: &FieldElement) -> Result<Point> {
    let Some((x1, y1)) = p.affine() else {
        return Ok(q.clone());
    };
    let Some((x2, y2)) = q.affine() else {
        return Ok(p.clone());
    };

    // x3 = (x1 y2 + y1 x2) / (1 + d x1 x2 y1 y2)
    // y3 = (y1 y2 - x1 x2) / (1 - d x1 x2 y1 y2)
    let x_numerator = x1.mul(y2)?.add(&y1.mul(x2)?)?;
    let y_numerator = y1.mul(y2)?.sub(&x1.mul(x2)?)?;
    let t = d.mul(x1)?.mul(x2)?.mul(y1)?.mul(y2)?;
    let one = FieldElement::one(p.curve().field());
    let x_denominator = one.add(&t)?;
    let y_denominator = one.sub(&t)?;

    if x_denominator.is_zero() || y_denominator.is_zero() {
        return Ok(Point::identity(p.curve()));
    }

    let x3 = x_numerator.div(&x_denominator)?;
    let y3 = y_numerator.div(&y_denominator)?;
    Ok(Point::from_affine(p.curve(), x3, y3))
}
