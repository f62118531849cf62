use super::*;

use num_traits::Zero;

use crate::curve::CurveForm;

#[test]
fn registry_contains_the_three_standard_curves() {
    let reg = registry();
    assert_eq!(reg.iter().count(), 3);

    assert_eq!(reg.get(CurveId::NistP256).name(), "NIST_P256");
    assert_eq!(reg.get(CurveId::Secp256k1).name(), "secp256k1");
    assert_eq!(reg.get(CurveId::Curve25519).name(), "Curve25519");

    assert!(reg.by_name("secp256k1").is_some());
    assert!(reg.by_name("no-such-curve").is_none());
}

#[test]
fn registry_entries_are_shared() {
    let first = Arc::clone(registry().get(CurveId::NistP256));
    let second = Arc::clone(registry().get(CurveId::NistP256));
    assert!(Arc::ptr_eq(&first, &second));
}

#[test]
fn weierstrass_generators_lie_on_their_curves() {
    for id in [CurveId::NistP256, CurveId::Secp256k1] {
        let params = registry().get(id);
        let generator = params.generator().expect("Weierstrass curves carry a generator");
        assert!(generator.is_on_curve(), "{} generator off-curve", params.name());
        assert_eq!(params.cofactor(), 1);
        assert!(!params.order().is_zero());
    }
}

#[test]
fn p256_generator_matches_the_published_constants() {
    let params = registry().get(CurveId::NistP256);
    let generator = params.generator().unwrap();
    assert_eq!(
        hex::encode_upper(crate::keys::coordinate_bytes(generator.x().unwrap())),
        ecrypt_params::curves::NIST_P256.g_x
    );
    assert_eq!(
        hex::encode_upper(crate::keys::coordinate_bytes(generator.y().unwrap())),
        ecrypt_params::curves::NIST_P256.g_y
    );
}

#[test]
fn generator_order_annihilates_the_generator() {
    for id in [CurveId::NistP256, CurveId::Secp256k1] {
        let params = registry().get(id);
        let generator = params.generator().unwrap();
        let result = generator.scalar_mul(params.order()).unwrap();
        assert!(result.is_identity(), "n * G != O on {}", params.name());
    }
}

#[test]
fn curve25519_is_u_coordinate_only() {
    let params = registry().get(CurveId::Curve25519);
    assert!(params.generator().is_none());
    assert_eq!(params.cofactor(), 8);
    assert_eq!(params.field().bit_len(), 255);

    let base_u = params.base_u().expect("Curve25519 carries a base u-coordinate");
    assert_eq!(base_u.value(), &BigUint::from(9u32));
}

#[test]
fn curve25519_base_u_lifts_to_a_curve_point() {
    let params = registry().get(CurveId::Curve25519);
    let u = params.base_u().unwrap();

    // v^2 = u^3 + A u^2 + u; p = 5 (mod 8), exercising the Atkin branch
    let CurveForm::Montgomery { a, .. } = params.curve().form() else {
        panic!("Curve25519 must be a Montgomery curve");
    };
    let u_sq = u.square();
    let rhs = u_sq.mul(u).unwrap().add(&a.mul(&u_sq).unwrap()).unwrap().add(u).unwrap();
    let v = rhs.sqrt().unwrap().expect("base u must lift to a point");
    assert_eq!(v.square(), rhs);

    let base = Point::new(params.curve(), u.clone(), v).unwrap();
    assert!(base.is_on_curve());
}

#[test]
fn custom_parameters_validate_their_inputs() {
    let field = Field::prime(BigUint::from(23u32)).unwrap();
    let curve = EllipticCurve::weierstrass(
        FieldElement::new(&field, BigUint::from(1u32)),
        FieldElement::new(&field, BigUint::from(1u32)),
    )
    .unwrap();
    let generator = Point::new(
        &curve,
        FieldElement::new(&field, BigUint::from(3u32)),
        FieldElement::new(&field, BigUint::from(10u32)),
    )
    .unwrap();

    // Zero order leaves no room for private keys
    assert!(matches!(
        CurveParameters::new("toy", Arc::clone(&curve), generator.clone(), BigUint::zero(), 1),
        Err(Error::InvalidParameter { .. })
    ));

    let params =
        CurveParameters::new("toy", Arc::clone(&curve), generator, BigUint::from(28u32), 1)
            .unwrap();
    assert_eq!(params.name(), "toy");
    assert!(params.base_u().is_none());

    // A generator from a different curve is rejected
    let other = EllipticCurve::weierstrass(
        FieldElement::new(&field, BigUint::from(2u32)),
        FieldElement::new(&field, BigUint::from(2u32)),
    )
    .unwrap();
    let foreign = Point::new(
        &other,
        FieldElement::new(&field, BigUint::from(3u32)),
        FieldElement::new(&field, BigUint::from(9u32)),
    )
    .unwrap();
    assert!(matches!(
        CurveParameters::new("toy", curve, foreign, BigUint::from(28u32), 1),
        Err(Error::CurveMismatch { .. })
    ));
}
