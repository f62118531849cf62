//! Standard curve parameter sets
//!
//! All values are hex-encoded big-endian integers, bit-exact to the
//! published standards (FIPS 186-4 / SEC 2 / RFC 7748).

/// Parameter set for a short Weierstrass curve `y^2 = x^3 + ax + b`
pub struct WeierstrassParams {
    /// Canonical curve name
    pub name: &'static str,
    /// Prime field modulus
    pub p: &'static str,
    /// Coefficient `a`, reduced mod `p`
    pub a: &'static str,
    /// Coefficient `b`
    pub b: &'static str,
    /// Generator x-coordinate
    pub g_x: &'static str,
    /// Generator y-coordinate
    pub g_y: &'static str,
    /// Order of the generator's subgroup
    pub n: &'static str,
    /// Cofactor
    pub h: u32,
}

/// Parameter set for a Montgomery curve `B y^2 = x^3 + A x^2 + x`
pub struct MontgomeryParams {
    /// Canonical curve name
    pub name: &'static str,
    /// Prime field modulus
    pub p: &'static str,
    /// Coefficient `A`
    pub a: &'static str,
    /// Coefficient `B`
    pub b: &'static str,
    /// Base point u-coordinate
    pub base_u: &'static str,
    /// Order of the base point's subgroup
    pub n: &'static str,
    /// Cofactor
    pub h: u32,
}

/// NIST P-256 (secp256r1), FIPS 186-4 D.1.2.3
///
/// `p = 2^256 - 2^224 + 2^192 + 2^96 - 1`, `a = -3 mod p`.
pub const NIST_P256: WeierstrassParams = WeierstrassParams {
    name: "NIST_P256",
    p: "FFFFFFFF00000001000000000000000000000000FFFFFFFFFFFFFFFFFFFFFFFF",
    a: "FFFFFFFF00000001000000000000000000000000FFFFFFFFFFFFFFFFFFFFFFFC",
    b: "5AC635D8AA3A93E7B3EBBD55769886BC651D06B0CC53B0F63BCE3C3E27D2604B",
    g_x: "6B17D1F2E12C4247F8BCE6E563A440F277037D812DEB33A0F4A13945D898C296",
    g_y: "4FE342E2FE1A7F9B8EE7EB4A7C0F9E162BCE33576B315ECECBB6406837BF51F5",
    n: "FFFFFFFF00000000FFFFFFFFFFFFFFFFBCE6FAADA7179E84F3B9CAC2FC632551",
    h: 1,
};

/// secp256k1, SEC 2 v2.0 section 2.4.1
///
/// `p = 2^256 - 2^32 - 977`, `a = 0`, `b = 7`.
pub const SECP256K1: WeierstrassParams = WeierstrassParams {
    name: "secp256k1",
    p: "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFC2F",
    a: "0",
    b: "7",
    g_x: "79BE667EF9DCBBAC55A06295CE870B07029BFCDB2DCE28D959F2815B16F81798",
    g_y: "483ADA7726A3C4655DA4FBFC0E1108A8FD17B448A68554199C47D08FFB10D4B8",
    n: "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141",
    h: 1,
};

/// Curve25519 (Montgomery form), RFC 7748 section 4.1
///
/// `p = 2^255 - 19`, `A = 486662`, `B = 1`, base u-coordinate 9. Only the
/// u-coordinate of the base point is specified; the X25519 u-only key
/// exchange itself is out of scope for this library.
pub const CURVE25519: MontgomeryParams = MontgomeryParams {
    name: "Curve25519",
    p: "7FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFED",
    a: "76D06",
    b: "1",
    base_u: "9",
    n: "1000000000000000000000000000000014DEF9DEA2F79CD65812631A5CF5D3ED",
    h: 8,
};

/// Minimum serialized coordinate width in bytes
///
/// The three standard curves all fit 32-byte coordinates; wider fields
/// widen the encoding consistently.
pub const COORDINATE_SIZE: usize = 32;
