//! Standard-curve parameter registry
//!
//! Turns the hex constants in `ecrypt-params` into live field/curve/point
//! bundles. The registry is built once behind a [`OnceLock`] on first use
//! and is read-only afterwards; entries are shared `Arc`s, so every key and
//! protocol operation referencing a standard curve sees the same objects.

use std::sync::{Arc, OnceLock};

use ecrypt_api::{Error, Result};
use ecrypt_params::curves::{self, MontgomeryParams, WeierstrassParams};
use num_bigint::BigUint;

use crate::curve::{EllipticCurve, Point};
use crate::field::{Field, FieldElement};

/// Identifier of a registry curve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CurveId {
    /// NIST P-256 (secp256r1)
    NistP256,
    /// secp256k1
    Secp256k1,
    /// Curve25519 (Montgomery form)
    Curve25519,
}

impl CurveId {
    /// Canonical curve name
    pub fn name(&self) -> &'static str {
        match self {
            Self::NistP256 => curves::NIST_P256.name,
            Self::Secp256k1 => curves::SECP256K1.name,
            Self::Curve25519 => curves::CURVE25519.name,
        }
    }
}

/// An immutable bundle of curve parameters
///
/// Bundles a field, a curve, a generator (or, for u-coordinate-only
/// Montgomery parameter sets, a base u-coordinate), the generator's
/// subgroup order and the cofactor. Standard bundles come from
/// [`registry`]; toy or test bundles can be built with
/// [`CurveParameters::new`].
#[derive(Debug, Clone)]
pub struct CurveParameters {
    name: String,
    field: Arc<Field>,
    curve: Arc<EllipticCurve>,
    generator: Option<Point>,
    base_u: Option<FieldElement>,
    order: BigUint,
    cofactor: u32,
}

impl CurveParameters {
    /// Build a parameter bundle around an affine generator point
    ///
    /// The generator must belong to `curve` (checked at [`Point::new`]
    /// time by the caller) and the order must leave room for the private
    /// key range `[1, order-1]`.
    pub fn new(
        name: impl Into<String>,
        curve: Arc<EllipticCurve>,
        generator: Point,
        order: BigUint,
        cofactor: u32,
    ) -> Result<Self> {
        if generator.curve() != &curve {
            return Err(Error::CurveMismatch {
                context: "CurveParameters::new",
            });
        }
        if order < BigUint::from(2u32) {
            return Err(Error::param(
                "CurveParameters::new",
                "subgroup order must be at least 2",
            ));
        }
        let field = Arc::clone(curve.field());
        Ok(Self {
            name: name.into(),
            field,
            curve,
            generator: Some(generator),
            base_u: None,
            order,
            cofactor,
        })
    }

    /// Build a u-coordinate-only Montgomery parameter bundle
    ///
    /// Used for Curve25519, where the standard pins down only the base
    /// point's u-coordinate. Key derivation on such bundles is the X25519
    /// path and is unimplemented by design.
    pub fn new_u_only(
        name: impl Into<String>,
        curve: Arc<EllipticCurve>,
        base_u: FieldElement,
        order: BigUint,
        cofactor: u32,
    ) -> Result<Self> {
        if base_u.field() != curve.field() {
            return Err(Error::FieldMismatch {
                context: "CurveParameters::new_u_only",
            });
        }
        if order < BigUint::from(2u32) {
            return Err(Error::param(
                "CurveParameters::new_u_only",
                "subgroup order must be at least 2",
            ));
        }
        let field = Arc::clone(curve.field());
        Ok(Self {
            name: name.into(),
            field,
            curve,
            generator: None,
            base_u: Some(base_u),
            order,
            cofactor,
        })
    }

    /// Curve name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Handle to the underlying field
    pub fn field(&self) -> &Arc<Field> {
        &self.field
    }

    /// Handle to the curve
    pub fn curve(&self) -> &Arc<EllipticCurve> {
        &self.curve
    }

    /// The generator point, absent on u-coordinate-only bundles
    pub fn generator(&self) -> Option<&Point> {
        self.generator.as_ref()
    }

    /// The base u-coordinate of a u-only Montgomery bundle
    pub fn base_u(&self) -> Option<&FieldElement> {
        self.base_u.as_ref()
    }

    /// Order of the generator's subgroup
    pub fn order(&self) -> &BigUint {
        &self.order
    }

    /// Cofactor of the subgroup
    pub fn cofactor(&self) -> u32 {
        self.cofactor
    }
}

/// Read-only table of the standard curves
#[derive(Debug)]
pub struct CurveRegistry {
    entries: Vec<(CurveId, Arc<CurveParameters>)>,
}

impl CurveRegistry {
    /// Parameters for a registry curve
    pub fn get(&self, id: CurveId) -> &Arc<CurveParameters> {
        self.entries
            .iter()
            .find(|(entry_id, _)| *entry_id == id)
            .map(|(_, params)| params)
            .expect("every CurveId variant is registered at build time")
    }

    /// Look a curve up by its canonical name
    pub fn by_name(&self, name: &str) -> Option<&Arc<CurveParameters>> {
        self.entries
            .iter()
            .find(|(_, params)| params.name() == name)
            .map(|(_, params)| params)
    }

    /// Iterate over all registered curves
    pub fn iter(&self) -> impl Iterator<Item = (CurveId, &Arc<CurveParameters>)> {
        self.entries.iter().map(|(id, params)| (*id, params))
    }
}

/// The process-wide standard-curve registry, built on first access
pub fn registry() -> &'static CurveRegistry {
    static REGISTRY: OnceLock<CurveRegistry> = OnceLock::new();
    REGISTRY.get_or_init(|| CurveRegistry {
        entries: vec![
            (
                CurveId::NistP256,
                Arc::new(build_weierstrass(&curves::NIST_P256)),
            ),
            (
                CurveId::Secp256k1,
                Arc::new(build_weierstrass(&curves::SECP256K1)),
            ),
            (
                CurveId::Curve25519,
                Arc::new(build_montgomery_u_only(&curves::CURVE25519)),
            ),
        ],
    })
}

fn parse_hex(digits: &str) -> BigUint {
    BigUint::parse_bytes(digits.as_bytes(), 16).expect("curve constants are valid hex")
}

fn build_weierstrass(params: &WeierstrassParams) -> CurveParameters {
    let field = Field::prime(parse_hex(params.p)).expect("standard modulus must be prime");
    let a = FieldElement::new(&field, parse_hex(params.a));
    let b = FieldElement::new(&field, parse_hex(params.b));
    let curve = EllipticCurve::weierstrass(a, b).expect("standard curve must be non-singular");

    let g_x = FieldElement::new(&field, parse_hex(params.g_x));
    let g_y = FieldElement::new(&field, parse_hex(params.g_y));
    let generator = Point::new(&curve, g_x, g_y).expect("standard generator must lie on its curve");

    CurveParameters::new(params.name, curve, generator, parse_hex(params.n), params.h)
        .expect("standard parameters must validate")
}

fn build_montgomery_u_only(params: &MontgomeryParams) -> CurveParameters {
    let field = Field::prime(parse_hex(params.p)).expect("standard modulus must be prime");
    let a = FieldElement::new(&field, parse_hex(params.a));
    let b = FieldElement::new(&field, parse_hex(params.b));
    let curve = EllipticCurve::montgomery(a, b).expect("standard curve must be non-degenerate");

    let base_u = FieldElement::new(&field, parse_hex(params.base_u));
    CurveParameters::new_u_only(params.name, curve, base_u, parse_hex(params.n), params.h)
        .expect("standard parameters must validate")
}

#[cfg(test)]
mod tests;
