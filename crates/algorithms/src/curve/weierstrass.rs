//! Chord-and-tangent group law for short Weierstrass curves
//!
//! The formulas are written purely in field operations (no lifted integer
//! constants), so terms like `2x` become `x + x` and vanish on their own in
//! characteristic 2.

use ecrypt_api::Result;

use crate::curve::Point;
use crate::field::FieldElement;

/// Chord addition with the standard special cases
///
/// Identity operands pass through; equal x-coordinates mean a vertical
/// chord (identity) or a doubling.
pub(crate) fn add(p: &Point, q: &Point, a: &FieldElement) -> Result<Point> {
    let Some((x1, y1)) = p.affine() else {
        return Ok(q.clone());
    };
    let Some((x2, y2)) = q.affine() else {
        return Ok(p.clone());
    };

    if x1 == x2 {
        if y1 != y2 {
            return Ok(Point::identity(p.curve()));
        }
        return double(p, a);
    }

    let slope = y2.sub(y1)?.div(&x2.sub(x1)?)?;
    let x3 = slope.square().sub(x1)?.sub(x2)?;
    let y3 = slope.mul(&x1.sub(&x3)?)?.sub(y1)?;
    Ok(Point::from_affine(p.curve(), x3, y3))
}

/// Tangent doubling
///
/// Prime fields use `slope = (3x^2 + a) / 2y`; binary fields use the
/// characteristic-2 form `slope = (x^2 + a) / y`. In both cases `y = 0`
/// marks a vertical tangent and doubles to the identity.
pub(crate) fn double(p: &Point, a: &FieldElement) -> Result<Point> {
    let Some((x, y)) = p.affine() else {
        return Ok(p.clone());
    };
    if y.is_zero() {
        return Ok(Point::identity(p.curve()));
    }

    let slope = if p.curve().field().is_binary() {
        x.square().add(a)?.div(y)?
    } else {
        let x_sq = x.square();
        let three_x_sq = x_sq.add(&x_sq)?.add(&x_sq)?;
        let two_y = y.add(y)?;
        three_x_sq.add(a)?.div(&two_y)?
    };

    // x3 = slope^2 - 2x, with 2x computed as x + x so it cancels in char 2
    let x3 = slope.square().sub(&x.add(x)?)?;
    let y3 = slope.mul(&x.sub(&x3)?)?.sub(y)?;
    Ok(Point::from_affine(p.curve(), x3, y3))
}
