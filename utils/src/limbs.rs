//! Positional (radix) decomposition of big unsigned integers into
//! fixed-width limbs.
//!
//! A value `v` split into `n` limbs in base `b` satisfies
//! `v = Σ limbs[i] · b^i` with every `0 <= limbs[i] < b`. Limbs are returned
//! in little-endian order (least significant limb first).

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{One, Zero};
use thiserror::Error;

use crate::biguint_helpers::BigUintHelpers;

/// Errors raised while splitting a value into limbs
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LimbError {
    #[error("a value of {bits} bits does not fit in {limb_count} limbs of base {base}")]
    Overflow {
        bits: u64,
        limb_count: usize,
        base: BigUint,
    },
    #[error("cannot split into {limb_count} limbs of base {base}")]
    InvalidRadix { limb_count: usize, base: BigUint },
}

pub type Result<T> = std::result::Result<T, LimbError>;

/// Decomposes a big integer into a fixed number of limbs.
///
/// Implementations must be deterministic and must fail, rather than
/// produce an oversized top limb, when the value needs more than
/// `limb_count` limbs.
pub trait LimbSplitter {
    fn split(&self, value: &BigUint, limb_count: usize, base: &BigUint) -> Result<Vec<BigUint>>;
}

/// Default splitter, see [`split`]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RadixSplitter;

impl LimbSplitter for RadixSplitter {
    fn split(&self, value: &BigUint, limb_count: usize, base: &BigUint) -> Result<Vec<BigUint>> {
        split(value, limb_count, base)
    }
}

/// Splits `value` into exactly `limb_count` little-endian limbs of radix
/// `base`. Power-of-two bases are handled with shifts and masks.
pub fn split(value: &BigUint, limb_count: usize, base: &BigUint) -> Result<Vec<BigUint>> {
    let invalid_radix = || LimbError::InvalidRadix {
        limb_count,
        base: base.clone(),
    };
    if limb_count == 0 || *base < BigUint::from(2u32) {
        return Err(invalid_radix());
    }
    let exponent = u32::try_from(limb_count).map_err(|_| invalid_radix())?;

    if *value >= base.pow(exponent) {
        return Err(LimbError::Overflow {
            bits: value.bitlen(),
            limb_count,
            base: base.clone(),
        });
    }

    if base.is_power_of_two() {
        let width = base.bits() - 1;
        let mask = base - BigUint::one();
        return Ok((0..limb_count as u64)
            .map(|i| (value >> (i * width)) & &mask)
            .collect());
    }

    let mut limbs = Vec::with_capacity(limb_count);
    let mut rest = value.clone();
    for _ in 0..limb_count {
        let (quotient, limb) = rest.div_rem(base);
        limbs.push(limb);
        rest = quotient;
    }
    debug_assert!(rest.is_zero());
    Ok(limbs)
}

/// Recombines little-endian limbs: `Σ limbs[i] · base^i`
pub fn combine(limbs: &[BigUint], base: &BigUint) -> BigUint {
    limbs
        .iter()
        .rev()
        .fold(BigUint::zero(), |acc, limb| acc * base + limb)
}
