//! The permutation the transcript is built on.
//!
//! The round function itself lives outside this crate. Anything that maps
//! a width-3 state to a width-3 state deterministically can be plugged in,
//! including plain functions and closures.

use core::cell::{Ref, RefCell};

use ark_ff::Field;

use crate::constants::SPONGE_WIDTH;

/// A deterministic, side-effect free permutation of a width-3 state
pub trait Permutation<F: Field> {
    fn permute(&self, state: [F; SPONGE_WIDTH]) -> [F; SPONGE_WIDTH];
}

impl<F: Field, T> Permutation<F> for T
where
    T: Fn([F; SPONGE_WIDTH]) -> [F; SPONGE_WIDTH],
{
    fn permute(&self, state: [F; SPONGE_WIDTH]) -> [F; SPONGE_WIDTH] {
        self(state)
    }
}

/// The ordered `(input, output)` pairs of every permutation call.
///
/// Index `i` of the trace is the permutation a transcript counts as step
/// `i`: index 0 is the call made when the transcript is seeded, index `k`
/// the call made by the `k`-th absorption.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PermutationTrace<F> {
    calls: Vec<([F; SPONGE_WIDTH], [F; SPONGE_WIDTH])>,
}

impl<F> Default for PermutationTrace<F> {
    fn default() -> Self {
        Self { calls: vec![] }
    }
}

impl<F: Field> PermutationTrace<F> {
    pub fn len(&self) -> usize {
        self.calls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&([F; SPONGE_WIDTH], [F; SPONGE_WIDTH])> {
        self.calls.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &([F; SPONGE_WIDTH], [F; SPONGE_WIDTH])> {
        self.calls.iter()
    }

    /// Looks up the second output lane of each logged permutation index,
    /// i.e. the random linear combination coefficients a transcript handed
    /// out. Returns `None` if an index was never recorded.
    pub fn resolve(&self, indexes: &[usize]) -> Option<Vec<F>> {
        indexes
            .iter()
            .map(|&i| self.calls.get(i).map(|(_, output)| output[1]))
            .collect()
    }

    fn push(&mut self, input: [F; SPONGE_WIDTH], output: [F; SPONGE_WIDTH]) {
        self.calls.push((input, output));
    }
}

/// Wraps a permutation and records every call into a [`PermutationTrace`].
///
/// Recording goes through a [`RefCell`], so the wrapper is not `Sync`.
#[derive(Clone, Debug)]
pub struct RecordingPermutation<P, F> {
    inner: P,
    trace: RefCell<PermutationTrace<F>>,
}

impl<P, F: Field> RecordingPermutation<P, F> {
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            trace: RefCell::new(PermutationTrace::default()),
        }
    }

    pub fn inner(&self) -> &P {
        &self.inner
    }

    /// Borrows the calls recorded so far
    pub fn trace(&self) -> Ref<'_, PermutationTrace<F>> {
        self.trace.borrow()
    }

    pub fn into_parts(self) -> (P, PermutationTrace<F>) {
        (self.inner, self.trace.into_inner())
    }
}

impl<P: Permutation<F>, F: Field> Permutation<F> for RecordingPermutation<P, F> {
    fn permute(&self, state: [F; SPONGE_WIDTH]) -> [F; SPONGE_WIDTH] {
        let output = self.inner.permute(state);
        self.trace.borrow_mut().push(state, output);
        output
    }
}
