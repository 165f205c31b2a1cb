//! Fractional addressing into a codon-packed sequence.
//!
//! A [`Locator`] names a codon by index and a base inside it by `shift`
//! (1, 2 or 3). Shift 0 is the "whole codon" form accepted by some
//! operations and is what the origin `0:0` uses.
//!
//! Arithmetic converts to a flat count of bases from the origin
//! (`index * 3 + shift`), does plain integer math on it and converts back,
//! so every operator shares one normalisation.

use std::fmt;
use std::ops::{Add, AddAssign};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::base::CODON_WIDTH;
use crate::errors::{Result, SeqError};

const WIDTH: usize = CODON_WIDTH;

/// Address of one base-pair slot: codon `index`, intra-codon `shift`.
///
/// Ordering is lexicographic on `(index, shift)`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct Locator {
    pub index: usize,
    pub shift: u8,
}

impl Locator {
    /// The origin, before the first base.
    pub const ORIGIN: Locator = Locator { index: 0, shift: 0 };

    /// Create a locator; `shift` is clamped into 0..=3.
    pub fn new(index: usize, shift: u8) -> Self {
        Self {
            index,
            shift: shift.min(WIDTH as u8),
        }
    }

    /// Locator addressing a whole codon (shift 0).
    pub fn codon(index: usize) -> Self {
        Self::new(index, 0)
    }

    /// Fail unless the locator addresses a single base (shift 1..=3).
    pub fn verify_shift(&self) -> Result<()> {
        if (1..=WIDTH as u8).contains(&self.shift) {
            Ok(())
        } else {
            Err(SeqError::ShiftOutOfRange(self.shift))
        }
    }

    /// Absolute number of bases between `self` and `other`.
    pub fn distance_to(&self, other: &Locator) -> usize {
        self.bp().abs_diff(other.bp())
    }

    /// Move forward by `bp` bases. Never fails; saturates at `usize::MAX`.
    pub fn advance(self, bp: usize) -> Self {
        if bp == 0 {
            return self;
        }
        Self::from_bp(self.bp().saturating_add(bp))
    }

    /// Move back by `bp` bases, or fail with [`SeqError::LocatorUnderflow`]
    /// if fewer than `bp` bases lie between `self` and the origin.
    pub fn checked_sub(self, bp: usize) -> Result<Self> {
        if bp == 0 {
            return Ok(self);
        }
        let here = self.bp();
        if bp > here {
            return Err(SeqError::LocatorUnderflow {
                locator: self,
                by: bp,
            });
        }
        Ok(Self::from_bp(here - bp))
    }

    /// In-place form of [`Locator::checked_sub`]; unchanged on error.
    pub fn retreat(&mut self, bp: usize) -> Result<()> {
        *self = self.checked_sub(bp)?;
        Ok(())
    }

    /// Bases from the origin up to and including this slot.
    #[inline]
    fn bp(&self) -> usize {
        self.index
            .saturating_mul(WIDTH)
            .saturating_add(self.shift as usize)
    }

    #[inline]
    fn from_bp(bp: usize) -> Self {
        if bp == 0 {
            return Self::ORIGIN;
        }
        Self {
            index: (bp - 1) / WIDTH,
            shift: ((bp - 1) % WIDTH) as u8 + 1,
        }
    }
}

impl Add<usize> for Locator {
    type Output = Locator;

    fn add(self, bp: usize) -> Locator {
        self.advance(bp)
    }
}

impl AddAssign<usize> for Locator {
    fn add_assign(&mut self, bp: usize) {
        *self = self.advance(bp);
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.index, self.shift)
    }
}

impl FromStr for Locator {
    type Err = String;

    /// Parse `index:shift` (or a bare `index` for shift 0).
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let (index, shift) = match s.split_once(':') {
            Some((index, shift)) => (index, shift),
            None => (s, "0"),
        };
        let index = index
            .trim()
            .parse::<usize>()
            .map_err(|e| format!("invalid codon index in '{s}': {e}"))?;
        let shift = shift
            .trim()
            .parse::<u8>()
            .map_err(|e| format!("invalid shift in '{s}': {e}"))?;
        Ok(Self::new(index, shift))
    }
}

impl From<(usize, u8)> for Locator {
    fn from((index, shift): (usize, u8)) -> Self {
        Self::new(index, shift)
    }
}
