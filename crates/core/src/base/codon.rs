use std::fmt;
use std::str::FromStr;

use super::packing::{self, CODON_WIDTH};
use super::Base;
use crate::errors::{Result, SeqError};

/// Sentinel token for an empty codon.
pub const VOID_TOKEN: &str = "VOID";
/// Sentinel token for the toggle marker.
pub const SWITCH_TOKEN: &str = "SWITCH";

/// A fixed-capacity container of 0 to 3 bases, packed into one byte.
///
/// Bases are always left-aligned: a codon of length `n` occupies positions
/// `1..=n`. The length is read from marker bits inside the byte (see the
/// `packing` module), never from a separate counter.
///
/// Two sentinel states exist. [`Codon::VOID`] is the empty codon.
/// [`Codon::SWITCH`] is a toggle marker that also reports length 0 but is a
/// distinct value; the two are told apart by [`Codon::is_void`] /
/// [`Codon::is_switch`] or by their text, never by length.
///
/// Primitives that need room (`insert_*`) or need a full codon
/// (`squeeze_*`) do not check on the caller's behalf beyond an assertion:
/// violating their precondition is a bug in the caller and panics.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Codon(u8);

impl Codon {
    pub const VOID: Codon = Codon(packing::VOID);
    pub const SWITCH: Codon = Codon(packing::SWITCH);

    /// Build a codon from up to three bases.
    pub fn from_bases(bases: &[Base]) -> Result<Self> {
        if bases.len() > CODON_WIDTH {
            return Err(SeqError::InvalidSpan(bases.len()));
        }
        Ok(Self(packing::pack(bases)))
    }

    /// Raw packed byte.
    #[inline(always)]
    pub const fn as_byte(&self) -> u8 {
        self.0
    }

    /// Number of bases held (0-3). Both sentinels report 0.
    #[inline(always)]
    pub const fn len(&self) -> usize {
        packing::packed_len(self.0)
    }

    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline(always)]
    pub const fn is_full(&self) -> bool {
        self.len() == CODON_WIDTH
    }

    #[inline(always)]
    pub const fn is_void(&self) -> bool {
        self.0 == packing::VOID
    }

    #[inline(always)]
    pub const fn is_switch(&self) -> bool {
        self.0 == packing::SWITCH
    }

    /// Free slots left before the codon is full.
    #[inline(always)]
    pub const fn room(&self) -> usize {
        CODON_WIDTH - self.len()
    }

    /// Iterate over the held bases, left to right.
    pub fn bases(&self) -> impl Iterator<Item = Base> + '_ {
        let byte = self.0;
        (1..=self.len()).map(move |position| packing::base_bits(byte, position))
    }

    /// Base at 1-based `position`.
    ///
    /// Position 0, anything above 3, or a slot past the occupied length is
    /// reported as [`SeqError::PositionOutOfRange`].
    pub fn base_at(&self, position: usize) -> Result<Base> {
        if position == 0 || position > self.len() {
            return Err(SeqError::PositionOutOfRange {
                position,
                len: self.len(),
            });
        }
        Ok(packing::base_bits(self.0, position))
    }

    /// Toggle between VOID and SWITCH.
    ///
    /// # Panics
    ///
    /// Panics if the codon holds bases.
    pub fn cast_to_switch(&mut self) {
        *self = match self.0 {
            packing::VOID => Self::SWITCH,
            packing::SWITCH => Self::VOID,
            _ => panic!("cast_to_switch called on a codon holding bases: {self}"),
        };
    }

    /// Append `base` after the last occupied position.
    ///
    /// # Panics
    ///
    /// Panics if the codon is full; use [`Codon::squeeze_right`] instead.
    pub fn insert_right(&mut self, base: Base) {
        let (mut bases, len) = self.unpacked();
        assert!(len < CODON_WIDTH, "insert_right on full codon {self}");
        bases[len] = base;
        self.0 = packing::pack(&bases[..=len]);
    }

    /// Place `base` at position 1, moving the held bases one slot right.
    ///
    /// # Panics
    ///
    /// Panics if the codon is full; use [`Codon::squeeze_left`] instead.
    pub fn insert_left(&mut self, base: Base) {
        self.insert_at(1, base);
    }

    /// Insert `base` at 1-based `position` (at most `len + 1`).
    pub(crate) fn insert_at(&mut self, position: usize, base: Base) {
        let (bases, len) = self.unpacked();
        assert!(len < CODON_WIDTH, "insert on full codon {self}");
        assert!(
            (1..=len + 1).contains(&position),
            "insert position {position} outside 1..={}",
            len + 1
        );
        let mut out = [Base::A; CODON_WIDTH];
        out[..position - 1].copy_from_slice(&bases[..position - 1]);
        out[position - 1] = base;
        out[position..=len].copy_from_slice(&bases[position - 1..len]);
        self.0 = packing::pack(&out[..=len]);
    }

    /// Push `new_base` in at position 3, shift the rest left by one slot and
    /// return the base evicted from position 1.
    ///
    /// # Panics
    ///
    /// Panics unless the codon is full.
    pub fn squeeze_right(&mut self, new_base: Base) -> Base {
        let (bases, len) = self.unpacked();
        assert_eq!(len, CODON_WIDTH, "squeeze_right on non-full codon {self}");
        self.0 = packing::pack(&[bases[1], bases[2], new_base]);
        bases[0]
    }

    /// Push `new_base` in at position 1, shift the rest right by one slot and
    /// return the base evicted from position 3.
    ///
    /// # Panics
    ///
    /// Panics unless the codon is full.
    pub fn squeeze_left(&mut self, new_base: Base) -> Base {
        self.squeeze_at(1, new_base)
    }

    /// Insert into a full codon at `position`, evicting the base at position 3.
    pub(crate) fn squeeze_at(&mut self, position: usize, new_base: Base) -> Base {
        let (bases, len) = self.unpacked();
        assert_eq!(len, CODON_WIDTH, "squeeze on non-full codon {self}");
        let evicted = bases[CODON_WIDTH - 1];
        let mut out = [Base::A; CODON_WIDTH];
        out[..position - 1].copy_from_slice(&bases[..position - 1]);
        out[position - 1] = new_base;
        out[position..].copy_from_slice(&bases[position - 1..CODON_WIDTH - 1]);
        self.0 = packing::pack(&out);
        evicted
    }

    /// Remove the base at 1-based `position`, close the gap and return it.
    ///
    /// Position 0, anything above 3, or a slot past the occupied length
    /// removes the last occupied base. Popping the only base leaves VOID.
    ///
    /// # Panics
    ///
    /// Panics if the codon is empty.
    pub fn pop(&mut self, position: usize) -> Base {
        let (bases, len) = self.unpacked();
        assert!(len > 0, "pop on empty codon {self}");
        let position = if position == 0 || position > len {
            len
        } else {
            position
        };
        let popped = bases[position - 1];
        let mut out = [Base::A; CODON_WIDTH];
        out[..position - 1].copy_from_slice(&bases[..position - 1]);
        out[position - 1..len - 1].copy_from_slice(&bases[position..len]);
        self.0 = packing::pack(&out[..len - 1]);
        popped
    }

    /// Remove the last occupied base.
    pub fn pop_last(&mut self) -> Base {
        self.pop(0)
    }

    /// Copy of positions `from..=to` (1-based, `to` clamped to the length).
    /// An empty range yields VOID.
    pub(crate) fn slice(&self, from: usize, to: usize) -> Codon {
        let (bases, len) = self.unpacked();
        let to = to.min(len);
        if from == 0 || from > to {
            return Self::VOID;
        }
        Self(packing::pack(&bases[from - 1..to]))
    }

    #[inline]
    fn unpacked(&self) -> ([Base; CODON_WIDTH], usize) {
        packing::unpack(self.0)
    }
}

impl Default for Codon {
    fn default() -> Self {
        Self::VOID
    }
}

impl From<Base> for Codon {
    fn from(base: Base) -> Self {
        Self(packing::pack(&[base]))
    }
}

impl FromStr for Codon {
    type Err = SeqError;

    /// Parse `"VOID"`, `"SWITCH"` or a run of 0-3 characters over A, C, G, T.
    /// The empty string is VOID.
    fn from_str(s: &str) -> Result<Self> {
        match s {
            VOID_TOKEN => return Ok(Self::VOID),
            SWITCH_TOKEN => return Ok(Self::SWITCH),
            _ => {}
        }
        if s.len() > CODON_WIDTH {
            return Err(SeqError::UnrecognizedToken(s.to_string()));
        }
        let mut bases = [Base::A; CODON_WIDTH];
        let mut len = 0;
        for c in s.chars() {
            if len == CODON_WIDTH {
                return Err(SeqError::UnrecognizedToken(s.to_string()));
            }
            bases[len] = Base::try_from(c)?;
            len += 1;
        }
        Ok(Self(packing::pack(&bases[..len])))
    }
}

impl fmt::Display for Codon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_void() {
            return f.write_str(VOID_TOKEN);
        }
        if self.is_switch() {
            return f.write_str(SWITCH_TOKEN);
        }
        for base in self.bases() {
            write!(f, "{}", base.to_char())?;
        }
        Ok(())
    }
}

impl fmt::Debug for Codon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Codon({self})")
    }
}
