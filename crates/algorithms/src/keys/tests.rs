use super::*;

use num_traits::Zero;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::curve::EllipticCurve;
use crate::registry::{registry, CurveId};

/// y^2 = x^3 + 2x + 2 over F_17 with generator (5, 1) of prime order 19
fn toy_params() -> CurveParameters {
    let field = Field::prime(BigUint::from(17u32)).unwrap();
    let curve = EllipticCurve::weierstrass(
        FieldElement::new(&field, BigUint::from(2u32)),
        FieldElement::new(&field, BigUint::from(2u32)),
    )
    .unwrap();
    let generator = Point::new(
        &curve,
        FieldElement::new(&field, BigUint::from(5u32)),
        FieldElement::new(&field, BigUint::from(1u32)),
    )
    .unwrap();
    CurveParameters::new("toy17", curve, generator, BigUint::from(19u32), 1).unwrap()
}

/// y^2 = x^3 + x + 1 over F_23; p = 3 (mod 4), so compressed decoding works
fn toy_params_23() -> CurveParameters {
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
    CurveParameters::new("toy23", curve, generator, BigUint::from(28u32), 1).unwrap()
}

fn rng() -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(0x5eed)
}

#[test]
fn private_keys_stay_in_range() {
    let params = toy_params();
    let mut rng = rng();
    for _ in 0..50 {
        let key = generate_private_key(&params, &mut rng).unwrap();
        assert!(!key.is_zero());
        assert!(&key < params.order());
    }
}

#[test]
fn public_key_derivation_matches_known_multiples() {
    let params = toy_params();
    // 2 * (5, 1) = (6, 3) on this curve
    let public = derive_public_key(&BigUint::from(2u32), &params).unwrap();
    assert_eq!(public.x().unwrap().value(), &BigUint::from(6u32));
    assert_eq!(public.y().unwrap().value(), &BigUint::from(3u32));
}

#[test]
fn generated_keypairs_are_consistent() {
    let params = toy_params();
    let mut rng = rng();
    for _ in 0..10 {
        let keypair = generate_keypair(&params, &mut rng).unwrap();
        assert!(keypair.public_key.is_on_curve());
        assert_eq!(
            keypair.public_key,
            derive_public_key(&keypair.private_key, &params).unwrap()
        );
    }
}

#[test]
fn u_only_parameters_cannot_derive_public_keys() {
    let params = registry().get(CurveId::Curve25519);
    let result = derive_public_key(&BigUint::from(7u32), params);
    assert!(matches!(result, Err(Error::Unsupported { .. })));
}

#[test]
fn deterministic_scalars_are_reproducible() {
    let order = BigUint::from(19u32);
    let first = generate_deterministic_scalar(b"seed material", &order).unwrap();
    let second = generate_deterministic_scalar(b"seed material", &order).unwrap();
    assert_eq!(first, second);
    assert!(!first.is_zero());
    assert!(first < order);

    let other = generate_deterministic_scalar(b"different seed", &order).unwrap();
    assert_ne!(first, other);
}

#[test]
fn serialization_round_trips() {
    let params = toy_params_23();
    let generator = params.generator().unwrap();
    let points = [
        generator.clone(),
        generator.scalar_mul(&BigUint::from(2u32)).unwrap(),
        generator.scalar_mul(&BigUint::from(5u32)).unwrap(),
    ];

    for point in &points {
        let uncompressed = serialize_public_key(point, false);
        assert_eq!(uncompressed.len(), 65);
        assert_eq!(uncompressed[0], 0x04);
        assert_eq!(&deserialize_public_key(&uncompressed, &params).unwrap(), point);

        let compressed = serialize_public_key(point, true);
        assert_eq!(compressed.len(), 33);
        assert!(compressed[0] == 0x02 || compressed[0] == 0x03);
        assert_eq!(&deserialize_public_key(&compressed, &params).unwrap(), point);
    }
}

#[test]
fn compression_prefix_tracks_y_parity() {
    let params = toy_params_23();
    let generator = params.generator().unwrap();
    // (3, 10): even y
    assert_eq!(serialize_public_key(generator, true)[0], 0x02);
    // -(3, 10) = (3, 13): odd y
    assert_eq!(serialize_public_key(&generator.negate(), true)[0], 0x03);
}

#[test]
fn identity_serializes_to_a_single_zero_byte() {
    let params = toy_params_23();
    let identity = Point::identity(params.curve());
    let encoded = serialize_public_key(&identity, true);
    assert_eq!(encoded, vec![0x00]);
    assert!(deserialize_public_key(&encoded, &params).unwrap().is_identity());
}

#[test]
fn malformed_encodings_are_rejected() {
    let params = toy_params_23();
    let generator = params.generator().unwrap();

    assert!(matches!(
        deserialize_public_key(&[], &params),
        Err(Error::InvalidLength { .. })
    ));

    let mut bad_prefix = serialize_public_key(generator, false);
    bad_prefix[0] = 0x05;
    assert!(matches!(
        deserialize_public_key(&bad_prefix, &params),
        Err(Error::InvalidEncoding { .. })
    ));

    let truncated = &serialize_public_key(generator, false)[..40];
    assert!(matches!(
        deserialize_public_key(truncated, &params),
        Err(Error::InvalidLength { .. })
    ));

    // Identity encoding must be exactly one byte
    assert!(matches!(
        deserialize_public_key(&[0x00, 0x00], &params),
        Err(Error::InvalidLength { .. })
    ));

    // x = 2 gives x^3 + x + 1 = 11, a non-residue mod 23
    let mut no_lift = vec![0u8; 33];
    no_lift[0] = 0x02;
    no_lift[32] = 2;
    assert!(matches!(
        deserialize_public_key(&no_lift, &params),
        Err(Error::InvalidEncoding { .. })
    ));
}

#[test]
fn compressed_decoding_requires_weierstrass() {
    let params = registry().get(CurveId::Curve25519);
    let mut compressed = vec![0u8; 33];
    compressed[0] = 0x02;
    compressed[32] = 9;
    assert!(matches!(
        deserialize_public_key(&compressed, params),
        Err(Error::Unsupported { .. })
    ));
}

#[test]
fn standard_curve_round_trip() {
    let params = registry().get(CurveId::NistP256);
    let mut rng = rng();
    let keypair = generate_keypair(params, &mut rng).unwrap();

    let uncompressed = serialize_public_key(&keypair.public_key, false);
    assert_eq!(uncompressed.len(), 65);
    assert_eq!(
        deserialize_public_key(&uncompressed, params).unwrap(),
        keypair.public_key
    );

    let compressed = serialize_public_key(&keypair.public_key, true);
    assert_eq!(compressed.len(), 33);
    assert_eq!(
        deserialize_public_key(&compressed, params).unwrap(),
        keypair.public_key
    );
}
