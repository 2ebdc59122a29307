//! This module implements the [`TranscriptError`] type.

use thiserror::Error;
use transcript_utils::LimbError;

/// Errors that can arise while seeding or feeding a transcript.
///
/// A failing call never modifies the transcript.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TranscriptError {
    #[error("the seed ({bits} bits) is not an element of the permutation field")]
    InvalidSeed { bits: u64 },

    #[error("the absorbed value cannot be split into limbs: {0}")]
    LimbOverflow(#[from] LimbError),

    #[error("the mask has {mask} entries but {elements} elements were given")]
    LengthMismatch { elements: usize, mask: usize },

    #[error("the limb splitter returned {found} limbs (expected: {expected})")]
    MalformedLimbs { expected: usize, found: usize },
}

pub type Result<T> = std::result::Result<T, TranscriptError>;
