//! The sequential sponge transcript.
//!
//! Every absorbed value is split into [`N_LIMBS`] limbs of radix
//! `BASE = 2^LIMB_BITS`. The limbs are packed pairwise into the first two
//! lanes and the whole state is permuted once:
//!
//! ```text
//! s0' = s0 + l0 + BASE * l1
//! s1' = s1 + l2 + BASE * l3
//! s2' = s2
//! (s0, s1, s2) = permute(s0', s1', s2')
//! ```
//!
//! This matches how a width-constrained in-circuit hash folds values that
//! are wider than its native field, permutation for permutation.

use core::marker::PhantomData;

use ark_ff::PrimeField;
use log::{debug, trace};
use num_bigint::BigUint;
use transcript_utils::{BigUintFieldHelpers, BigUintHelpers, LimbSplitter, RadixSplitter};

use crate::{
    constants::{Base96, LimbConstants, N_LIMBS, SPONGE_WIDTH},
    error::{Result, TranscriptError},
    permutation::Permutation,
};

/// Fiat-Shamir transcript over a width-3 permutation.
///
/// The transcript is owned and mutated by a single caller. To derive
/// challenges on independent branches, clone it or start a new transcript
/// with [`Transcript::branch`].
#[derive(Clone, Debug)]
pub struct Transcript<F: PrimeField, P, S = RadixSplitter, LC = Base96> {
    permutation: P,
    splitter: S,
    init_hash: F,
    state: [F; SPONGE_WIDTH],
    /// Number of permutations performed, seeding included
    permutation_count: usize,
    /// Permutation index at which each coefficient was drawn
    challenge_log: Vec<usize>,
    constants: PhantomData<LC>,
}

impl<F: PrimeField, P: Permutation<F>> Transcript<F, P> {
    /// Seeds a transcript with `init_hash`, which must be below the
    /// permutation field's modulus.
    pub fn new(permutation: P, init_hash: impl Into<BigUint>) -> Result<Self> {
        Self::try_with_splitter(permutation, RadixSplitter, init_hash)
    }

    /// Seeds a transcript with a value already known to be a field element.
    pub fn from_field(permutation: P, init_hash: F) -> Self {
        Self::with_splitter(permutation, RadixSplitter, init_hash)
    }
}

impl<F, P, S, LC> Transcript<F, P, S, LC>
where
    F: PrimeField,
    P: Permutation<F>,
    S: LimbSplitter,
    LC: LimbConstants,
{
    /// Checked form of [`Self::with_splitter`]: rejects seeds that are not
    /// below the permutation field's modulus.
    pub fn try_with_splitter(
        permutation: P,
        splitter: S,
        init_hash: impl Into<BigUint>,
    ) -> Result<Self> {
        let init_hash: BigUint = init_hash.into();
        let init_hash = init_hash
            .to_field::<F>()
            .map_err(|_| TranscriptError::InvalidSeed {
                bits: init_hash.bitlen(),
            })?;
        Ok(Self::with_splitter(permutation, splitter, init_hash))
    }

    /// Seeds a transcript that decomposes absorbed values with `splitter`.
    /// The seed is permuted as `(init_hash, 0, 1)`.
    pub fn with_splitter(permutation: P, splitter: S, init_hash: F) -> Self {
        let state = permutation.permute([init_hash, F::zero(), F::one()]);
        debug!("seeded transcript with {init_hash}");
        Self {
            permutation,
            splitter,
            init_hash,
            state,
            permutation_count: 1,
            challenge_log: vec![],
            constants: PhantomData,
        }
    }

    /// The first lane, used to continue hashing from this point in another
    /// transcript.
    pub fn continuable_hash(&self) -> F {
        self.state[0]
    }

    /// Reads the current random linear combination coefficient (the second
    /// lane) and logs the index of the permutation that produced it.
    ///
    /// Every call logs, including repeated calls without an absorption in
    /// between: the log is used to match each coefficient with its
    /// permutation step.
    pub fn draw_rlc_coefficient(&mut self) -> F {
        let index = self.permutation_count - 1;
        trace!("drawing coefficient from permutation {index}");
        self.challenge_log.push(index);
        self.state[1]
    }

    /// Absorbs one value of up to `N_LIMBS * LIMB_BITS` bits and returns the
    /// first two lanes of the new state.
    pub fn absorb_element(&mut self, x: impl Into<BigUint>) -> Result<(F, F)> {
        let lanes = self.lane_inputs(&x.into())?;
        self.absorb_lanes(lanes);
        Ok((self.state[0], self.state[1]))
    }

    /// Absorbs `elements` in order. With a mask, element `i` is absorbed
    /// only if `mask[i] != 0`.
    ///
    /// Every retained element is split before the first permutation, so on
    /// error the transcript is left untouched.
    pub fn absorb_many<X>(&mut self, elements: &[X], mask: Option<&[u32]>) -> Result<(F, F)>
    where
        X: Clone + Into<BigUint>,
    {
        if let Some(mask) = mask {
            if mask.len() != elements.len() {
                return Err(TranscriptError::LengthMismatch {
                    elements: elements.len(),
                    mask: mask.len(),
                });
            }
        }

        let lanes = elements
            .iter()
            .enumerate()
            .filter(|(i, _)| mask.map_or(true, |mask| mask[*i] != 0))
            .map(|(_, x)| self.lane_inputs(&x.clone().into()))
            .collect::<Result<Vec<_>>>()?;

        for lane in lanes {
            self.absorb_lanes(lane);
        }
        Ok((self.state[0], self.state[1]))
    }

    /// Starts a new transcript seeded with [`Self::continuable_hash`]
    pub fn branch(&self) -> Self
    where
        P: Clone,
        S: Clone,
    {
        Self::with_splitter(
            self.permutation.clone(),
            self.splitter.clone(),
            self.continuable_hash(),
        )
    }

    pub fn init_hash(&self) -> F {
        self.init_hash
    }

    pub fn state(&self) -> [F; SPONGE_WIDTH] {
        self.state
    }

    pub fn permutation_count(&self) -> usize {
        self.permutation_count
    }

    pub fn challenge_log(&self) -> &[usize] {
        &self.challenge_log
    }

    pub fn permutation(&self) -> &P {
        &self.permutation
    }

    /// The packed limb pairs `(l0 + BASE * l1, l2 + BASE * l3)` of `value`
    fn lane_inputs(&self, value: &BigUint) -> Result<[F; 2]> {
        let limbs = self
            .splitter
            .split(value, N_LIMBS, &LC::base_biguint())?;
        let [l0, l1, l2, l3]: [BigUint; N_LIMBS] =
            limbs
                .try_into()
                .map_err(|limbs: Vec<BigUint>| TranscriptError::MalformedLimbs {
                    expected: N_LIMBS,
                    found: limbs.len(),
                })?;

        let base = LC::base::<F>();
        let pack = |lo: BigUint, hi: BigUint| {
            lo.to_field_reduced::<F>() + base * hi.to_field_reduced::<F>()
        };
        Ok([pack(l0, l1), pack(l2, l3)])
    }

    fn absorb_lanes(&mut self, [lo, hi]: [F; 2]) {
        trace!("absorbing into permutation {}", self.permutation_count);
        let [s0, s1, s2] = self.state;
        self.state = self.permutation.permute([s0 + lo, s1 + hi, s2]);
        self.permutation_count += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::Felt252;
    use ark_ff::{One, Zero};

    // Linear so expected states can be written down by hand
    fn shift(s: [Felt252; SPONGE_WIDTH]) -> [Felt252; SPONGE_WIDTH] {
        [s[0] + s[2], s[1] + s[2], s[2]]
    }

    #[test]
    fn test_seed_permutation() {
        let transcript: Transcript<Felt252, _> = Transcript::new(shift, 5u32).unwrap();
        assert_eq!(
            transcript.state(),
            [Felt252::from(6u64), Felt252::one(), Felt252::one()]
        );
        assert_eq!(transcript.init_hash(), Felt252::from(5u64));
        assert_eq!(transcript.permutation_count(), 1);
        assert!(transcript.challenge_log().is_empty());
    }

    #[test]
    fn test_lane_packing() {
        let mut transcript: Transcript<Felt252, _> = Transcript::new(shift, 0u32).unwrap();
        let base = Base96::base_biguint();
        // limbs [1, 2, 3, 4]
        let x = BigUint::from(1u32)
            + BigUint::from(2u32) * &base
            + BigUint::from(3u32) * base.pow(2)
            + BigUint::from(4u32) * base.pow(3);

        let (s0, s1) = transcript.absorb_element(x).unwrap();

        let b: Felt252 = Base96::base();
        // seeded state is (1, 1, 1) and the lanes pick up s2 = 1 once more
        assert_eq!(s0, Felt252::from(3u64) + Felt252::from(2u64) * b);
        assert_eq!(s1, Felt252::from(5u64) + Felt252::from(4u64) * b);
        assert_eq!(transcript.state()[2], Felt252::one());
    }

    #[test]
    fn test_draw_logs_every_read() {
        let mut transcript: Transcript<Felt252, _> = Transcript::new(shift, 0u32).unwrap();
        let first = transcript.draw_rlc_coefficient();
        let second = transcript.draw_rlc_coefficient();
        assert_eq!(first, second);
        assert_eq!(transcript.challenge_log(), &[0, 0]);

        transcript.absorb_element(7u32).unwrap();
        transcript.draw_rlc_coefficient();
        assert_eq!(transcript.challenge_log(), &[0, 0, 1]);
    }

    #[test]
    fn test_continuable_hash_is_first_lane() {
        let mut transcript: Transcript<Felt252, _> = Transcript::new(shift, 9u32).unwrap();
        assert_eq!(transcript.continuable_hash(), transcript.state()[0]);
        transcript.absorb_element(BigUint::zero()).unwrap();
        assert_eq!(transcript.continuable_hash(), Felt252::from(11u64));
    }

    #[test]
    fn test_misbehaving_splitter_is_rejected() {
        #[derive(Clone)]
        struct ThreeLimbs;

        impl LimbSplitter for ThreeLimbs {
            fn split(
                &self,
                value: &BigUint,
                _limb_count: usize,
                base: &BigUint,
            ) -> transcript_utils::limbs::Result<Vec<BigUint>> {
                transcript_utils::split(value, 3, base)
            }
        }

        let mut transcript =
            Transcript::<Felt252, _, _, Base96>::with_splitter(shift, ThreeLimbs, Felt252::zero());
        let before = transcript.state();
        assert_eq!(
            transcript.absorb_element(1u32),
            Err(TranscriptError::MalformedLimbs {
                expected: N_LIMBS,
                found: 3
            })
        );
        assert_eq!(transcript.state(), before);
        assert_eq!(transcript.permutation_count(), 1);
    }
}
