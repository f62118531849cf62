//! Affine group law for Montgomery curves `B y^2 = x^3 + A x^2 + x`

use ecrypt_api::Result;

use crate::curve::Point;
use crate::field::FieldElement;

/// Chord addition
pub(crate) fn add(p: &Point, q: &Point, a: &FieldElement, b: &FieldElement) -> Result<Point> {
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
        return double(p, a, b);
    }

    // slope = (y2 - y1) / (x2 - x1)
    // x3 = B*slope^2 - A - x1 - x2
    let slope = y2.sub(y1)?.div(&x2.sub(x1)?)?;
    let x3 = b.mul(&slope.square())?.sub(a)?.sub(x1)?.sub(x2)?;
    let y3 = slope.mul(&x1.sub(&x3)?)?.sub(y1)?;
    Ok(Point::from_affine(p.curve(), x3, y3))
}

/// Tangent doubling; `y = 0` doubles to the identity
pub(crate) fn double(p: &Point, a: &FieldElement, b: &FieldElement) -> Result<Point> {
    let Some((x, y)) = p.affine() else {
        return Ok(p.clone());
    };
    if y.is_zero() {
        return Ok(Point::identity(p.curve()));
    }

    // slope = (3x^2 + 2Ax + 1) / (2By)
    let x_sq = x.square();
    let three_x_sq = x_sq.add(&x_sq)?.add(&x_sq)?;
    let ax = a.mul(x)?;
    let one = FieldElement::one(p.curve().field());
    let numerator = three_x_sq.add(&ax.add(&ax)?)?.add(&one)?;
    let by = b.mul(y)?;
    let slope = numerator.div(&by.add(&by)?)?;

    let x3 = b.mul(&slope.square())?.sub(a)?.sub(&x.add(x)?)?;
    let y3 = slope.mul(&x.sub(&x3)?)?.sub(y)?;
    Ok(Point::from_affine(p.curve(), x3, y3))
}
