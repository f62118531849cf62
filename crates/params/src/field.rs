//! Tunables for the finite-field engine

/// Default number of Miller-Rabin witness rounds for prime moduli
///
/// Each round has a false-positive probability of at most 1/4, so five
/// rounds bound the error below 2^-10 for adversarial inputs and far lower
/// for random ones.
pub const MILLER_RABIN_ROUNDS: usize = 5;
