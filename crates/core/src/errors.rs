use std::error;
use std::fmt;

use thiserror::Error;

use crate::locator::Locator;

/// Error returned when attempting to convert an invalid byte/character into
/// a `Base`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidBase(pub u8);

impl fmt::Display for InvalidBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unrecognized symbol: {} ('{}')", self.0, self.0 as char)
    }
}

impl error::Error for InvalidBase {}

/// Error type for failures when constructing, addressing or editing a
/// `Codon`, a `Locator` or a `Seq`.
///
/// Every variant is recoverable input validation. Broken internal state is
/// never reported through this type; it panics instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeqError {
    /// A character outside A, C, G, T was found in codon or sequence text.
    #[error(transparent)]
    InvalidBase(#[from] InvalidBase),

    /// Codon text was neither a 0-3 base run nor a sentinel token.
    #[error("unrecognized codon token '{0}'")]
    UnrecognizedToken(String),

    /// `base_at` was asked for a slot the codon does not occupy.
    #[error("position out of range 1..3: {position} (codon holds {len} bases)")]
    PositionOutOfRange { position: usize, len: usize },

    /// Subtracting `by` bases would move `locator` before the origin.
    #[error("locator underflow: cannot move {locator} back by {by} bases")]
    LocatorUnderflow { locator: Locator, by: usize },

    /// The locator does not address a single base.
    #[error("shift out of range 1..3: {0}")]
    ShiftOutOfRange(u8),

    /// The locator points outside the occupied part of the sequence.
    #[error("locator {locator} is outside the sequence")]
    LocatorOutOfRange { locator: Locator },

    /// An empty (VOID or SWITCH) codon was given where bases are required.
    #[error("empty codon where bases are required")]
    EmptyCodon,

    /// The operation needs at least one base in the sequence.
    #[error("sequence is empty")]
    EmptySeq,

    /// Length query mode was not `codons`, `bp` or `bases`.
    #[error("unknown length mode '{0}' (expected codons, bp or bases)")]
    UnknownLengthMode(String),

    /// End locator ordered before the start locator.
    #[error("end locator {end} precedes start locator {start}")]
    InvertedRange { start: Locator, end: Locator },

    /// Span length not accepted by the operation.
    #[error("invalid span of {0} bases")]
    InvalidSpan(usize),

    /// Codon index past the occupied codons.
    #[error("codon index {index} out of range (len = {len})")]
    IndexOutOfRange { index: usize, len: usize },

    /// A shift would leave a partial codon inside the sequence.
    #[error("shift would leave codon {index} partially filled inside the sequence")]
    Misaligned { index: usize },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SeqError>;
