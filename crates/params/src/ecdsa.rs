//! Constants for ECDSA signing

/// Ceiling on nonce-generation retries in one signing call
///
/// Each retry fails only when `r = 0`, `s = 0`, or `k` is non-invertible
/// mod the curve order, all of which have negligible probability with a
/// healthy randomness source. Exhausting the ceiling therefore signals a
/// broken RNG rather than bad luck, and signing reports it as an error.
pub const ECDSA_MAX_SIGNING_ATTEMPTS: usize = 100;
