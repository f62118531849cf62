//! Prime-field arithmetic over arbitrary-precision integers

use ecrypt_api::{Error, Result};
use num_bigint::{BigInt, BigUint, RandBigInt};
use num_traits::{One, Zero};

use super::split_exponent;

/// Field of integers modulo a prime `p`
///
/// The modulus is verified with Miller-Rabin at construction time;
/// arithmetic afterwards assumes primality (inversion in particular relies
/// on Fermat's little theorem).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimeField {
    prime: BigUint,
}

impl PrimeField {
    /// Construct the field, rejecting composite moduli
    ///
    /// Runs the default number of Miller-Rabin rounds from
    /// [`ecrypt_params::field::MILLER_RABIN_ROUNDS`].
    pub fn new(prime: BigUint) -> Result<Self> {
        Self::with_rounds(prime, ecrypt_params::field::MILLER_RABIN_ROUNDS)
    }

    /// Construct the field with an explicit Miller-Rabin round count
    pub fn with_rounds(prime: BigUint, rounds: usize) -> Result<Self> {
        if !miller_rabin(&prime, rounds) {
            return Err(Error::param(
                "PrimeField::new",
                format!("modulus {} is not prime", prime),
            ));
        }
        Ok(Self { prime })
    }

    /// The field modulus
    pub fn prime(&self) -> &BigUint {
        &self.prime
    }

    pub(crate) fn is_valid(&self, value: &BigUint) -> bool {
        value < &self.prime
    }

    pub(crate) fn normalize(&self, value: BigUint) -> BigUint {
        value % &self.prime
    }

    pub(crate) fn add(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a + b) % &self.prime
    }

    pub(crate) fn sub(&self, a: &BigUint, b: &BigUint) -> BigUint {
        // Operands are canonical, so a + p - b never underflows
        ((a + &self.prime) - b) % &self.prime
    }

    pub(crate) fn mul(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a * b) % &self.prime
    }

    /// Inverse via Fermat's little theorem: `a^(p-2) mod p`
    pub(crate) fn inverse(&self, a: &BigUint) -> Result<BigUint> {
        if a.is_zero() {
            return Err(Error::DivisionByZero {
                context: "PrimeField::inverse",
            });
        }
        let exponent = &self.prime - BigUint::from(2u32);
        Ok(a.modpow(&exponent, &self.prime))
    }

    pub(crate) fn pow(&self, a: &BigUint, exponent: &BigInt) -> Result<BigUint> {
        let (negative, magnitude) = split_exponent(exponent);
        if negative {
            let inv = self.inverse(a)?;
            Ok(inv.modpow(magnitude, &self.prime))
        } else {
            Ok(a.modpow(magnitude, &self.prime))
        }
    }

    /// Legendre symbol `a^((p-1)/2) mod p`
    fn legendre(&self, a: &BigUint) -> BigUint {
        let exponent = (&self.prime - BigUint::one()) >> 1;
        a.modpow(&exponent, &self.prime)
    }

    /// Modular square root for `p = 3 (mod 4)` and `p = 5 (mod 8)`
    ///
    /// Returns `None` when `a` is a quadratic non-residue. Primes of any
    /// other shape would need full Tonelli-Shanks and are unsupported.
    pub(crate) fn sqrt(&self, a: &BigUint) -> Result<Option<BigUint>> {
        if self.legendre(a) != BigUint::one() {
            return Ok(None);
        }
        let p = &self.prime;
        let residue = |m: u32| (p % BigUint::from(m)).to_u32_digits();

        if residue(4) == [3] {
            let exponent = (p + BigUint::one()) >> 2;
            return Ok(Some(a.modpow(&exponent, p)));
        }
        if residue(8) == [5] {
            // Atkin's special case: a^((p+3)/8), corrected by the eighth
            // root of unity 2^((p-1)/4) when the first candidate misses
            let exponent = (p + BigUint::from(3u32)) >> 3;
            let mut root = a.modpow(&exponent, p);
            if (&root * &root) % p != *a {
                let twiddle = BigUint::from(2u32).modpow(&((p - BigUint::one()) >> 2), p);
                root = (&root * &twiddle) % p;
            }
            return Ok(Some(root));
        }
        Err(Error::Unsupported {
            feature: "general Tonelli-Shanks modular square root",
        })
    }

    pub(crate) fn negate(&self, a: &BigUint) -> BigUint {
        if a.is_zero() {
            BigUint::zero()
        } else {
            &self.prime - a
        }
    }
}

/// Probabilistic Miller-Rabin primality test
///
/// Witnesses are drawn uniformly from `[2, n-2]`; each round has error
/// probability at most 1/4.
pub(crate) fn miller_rabin(candidate: &BigUint, rounds: usize) -> bool {
    let one = BigUint::one();
    let two = BigUint::from(2u32);
    let three = BigUint::from(3u32);

    if *candidate <= one {
        return false;
    }
    if *candidate <= three {
        return true;
    }
    if !candidate.bit(0) {
        return false;
    }

    // Write n - 1 = 2^r * s with s odd
    let n_minus_one = candidate - &one;
    let mut s = n_minus_one.clone();
    let mut r = 0u64;
    while !s.bit(0) {
        s >>= 1;
        r += 1;
    }

    let mut rng = rand::rngs::OsRng;
    'witness: for _ in 0..rounds {
        let a = rng.gen_biguint_range(&two, &n_minus_one);
        let mut x = a.modpow(&s, candidate);
        if x == one || x == n_minus_one {
            continue;
        }
        for _ in 0..r.saturating_sub(1) {
            x = (&x * &x) % candidate;
            if x == n_minus_one {
                continue 'witness;
            }
        }
        return false;
    }
    true
}
