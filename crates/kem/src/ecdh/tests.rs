use super::*;

use ecrypt_algorithms::curve::EllipticCurve;
use ecrypt_algorithms::field::{Field, FieldElement};
use ecrypt_algorithms::registry::{registry, CurveId};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

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

#[test]
fn exchange_is_symmetric_on_the_toy_curve() {
    let params = toy_params();
    let mut rng = ChaCha20Rng::seed_from_u64(1);

    let alice = generate_keypair(&params, &mut rng).unwrap();
    let bob = generate_keypair(&params, &mut rng).unwrap();

    let alice_secret =
        key_agreement(&alice.private_key, &bob.public_key, &params, DEFAULT_KEY_LENGTH).unwrap();
    let bob_secret =
        key_agreement(&bob.private_key, &alice.public_key, &params, DEFAULT_KEY_LENGTH).unwrap();

    assert_eq!(alice_secret, bob_secret);
    assert_eq!(alice_secret.len(), 32);
}

#[test]
fn exchange_is_symmetric_on_p256() {
    let params = registry().get(CurveId::NistP256);
    let mut rng = ChaCha20Rng::seed_from_u64(2);

    let alice = generate_keypair(params, &mut rng).unwrap();
    let bob = generate_keypair(params, &mut rng).unwrap();

    let shared_a = compute_shared_point(&alice.private_key, &bob.public_key, params).unwrap();
    let shared_b = compute_shared_point(&bob.private_key, &alice.public_key, params).unwrap();
    assert_eq!(shared_a, shared_b);
    assert!(shared_a.is_on_curve());

    let key_a = derive_shared_key(&shared_a, DEFAULT_KEY_LENGTH).unwrap();
    let key_b = derive_shared_key(&shared_b, DEFAULT_KEY_LENGTH).unwrap();
    assert_eq!(key_a, key_b);
}

#[test]
fn different_peers_derive_different_keys() {
    let params = toy_params();
    let mut rng = ChaCha20Rng::seed_from_u64(3);

    let alice = generate_keypair(&params, &mut rng).unwrap();
    let bob = generate_keypair(&params, &mut rng).unwrap();
    let mut carol = generate_keypair(&params, &mut rng).unwrap();
    // With only 18 possible keys on the toy curve, make carol's public key
    // share no x-coordinate with bob's (k and n-k produce mirrored points)
    while carol.private_key == bob.private_key
        || &carol.private_key + &bob.private_key == *params.order()
    {
        carol = generate_keypair(&params, &mut rng).unwrap();
    }

    let with_bob =
        key_agreement(&alice.private_key, &bob.public_key, &params, DEFAULT_KEY_LENGTH).unwrap();
    let with_carol =
        key_agreement(&alice.private_key, &carol.public_key, &params, DEFAULT_KEY_LENGTH).unwrap();
    assert_ne!(with_bob, with_carol);
}

#[test]
fn derived_key_lengths_are_honored() {
    let params = toy_params();
    let mut rng = ChaCha20Rng::seed_from_u64(4);
    let alice = generate_keypair(&params, &mut rng).unwrap();
    let bob = generate_keypair(&params, &mut rng).unwrap();
    let shared = compute_shared_point(&alice.private_key, &bob.public_key, &params).unwrap();

    for length in [0usize, 16, 32, 33, 64, 100] {
        let key = derive_shared_key(&shared, length).unwrap();
        assert_eq!(key.len(), length);
    }

    // Chained expansion extends the 32-byte digest instead of repeating it
    let long = derive_shared_key(&shared, 64).unwrap();
    let short = derive_shared_key(&shared, 32).unwrap();
    assert_eq!(&long.as_bytes()[..32], short.as_bytes());
    assert_ne!(&long.as_bytes()[..32], &long.as_bytes()[32..]);
}

#[test]
fn derivation_is_deterministic_in_the_shared_point() {
    let params = toy_params();
    let generator = params.generator().unwrap();
    let shared = generator.scalar_mul(&BigUint::from(6u32)).unwrap();

    let first = derive_shared_key(&shared, 32).unwrap();
    let second = derive_shared_key(&shared, 32).unwrap();
    assert_eq!(first, second);
}

#[test]
fn identity_peer_keys_are_rejected() {
    let params = toy_params();
    let identity = Point::identity(params.curve());
    let result = compute_shared_point(&BigUint::from(5u32), &identity, &params);
    assert!(matches!(result, Err(Error::InvalidParameter { .. })));
}

#[test]
fn peer_keys_from_another_curve_are_rejected() {
    let params = toy_params();
    let other = registry().get(CurveId::NistP256);
    let foreign = other.generator().unwrap();
    let result = compute_shared_point(&BigUint::from(5u32), foreign, &params);
    assert!(matches!(result, Err(Error::CurveMismatch { .. })));
}

#[test]
fn identity_shared_points_cannot_derive_keys() {
    let params = toy_params();
    let identity = Point::identity(params.curve());
    assert!(matches!(
        derive_shared_key(&identity, 32),
        Err(Error::InvalidParameter { .. })
    ));
}
