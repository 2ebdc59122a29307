use ark_ff::PrimeField;
use num_bigint::BigUint;

/// Number of field elements in the sponge state `(s0, s1, s2)`
pub const SPONGE_WIDTH: usize = 3;

/// Number of limbs an absorbed value is split into. Two limbs are packed
/// into each of the first two lanes, so this is fixed.
pub const N_LIMBS: usize = 4;

/// Radix used to split absorbed values into [`N_LIMBS`] limbs.
///
/// The radix is `BASE = 2^LIMB_BITS`. Values up to
/// `N_LIMBS * LIMB_BITS` bits can be absorbed, and a packed pair
/// `l0 + BASE * l1` must stay below the permutation field's modulus, so
/// `2 * LIMB_BITS` has to be smaller than the field's bit size.
pub trait LimbConstants {
    const LIMB_BITS: u32;

    fn base_biguint() -> BigUint {
        BigUint::from(1u32) << Self::LIMB_BITS
    }

    fn base<F: PrimeField>() -> F {
        F::from(2u64).pow([u64::from(Self::LIMB_BITS)])
    }
}

/// 96-bit limbs: four of them cover 384-bit values, enough for the base
/// field of any pairing-friendly curve in use.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Base96;

impl LimbConstants for Base96 {
    const LIMB_BITS: u32 = 96;
}
