//! Single-byte physical form of a codon.
//!
//! ```text
//! bit  7 6 | 5 4 | 3 2 | 1 0
//!      len | p1  | p2  | p3
//! ```
//!
//! The length marker lives in the top two bits, so the occupied count is
//! read in O(1) without a separate counter. Slots past `len` are kept at
//! zero, which makes equal contents produce equal bytes. A zero length with
//! a non-zero payload cannot come out of [`pack`] and is reserved for the
//! SWITCH sentinel.

use super::Base;

pub(crate) const VOID: u8 = 0b0000_0000;
pub(crate) const SWITCH: u8 = 0b0011_1111;

/// Number of bases a codon holds when full.
pub const CODON_WIDTH: usize = 3;

const LEN_SHIFT: u32 = 6;
const SLOT_MASK: u8 = 0b11;

#[inline(always)]
const fn slot_shift(position: usize) -> u32 {
    (2 * (CODON_WIDTH - position)) as u32
}

/// Pack up to three bases, left-aligned, with their count as the marker.
#[inline]
pub(crate) fn pack(bases: &[Base]) -> u8 {
    debug_assert!(bases.len() <= CODON_WIDTH, "codon holds at most 3 bases");
    let mut byte = (bases.len() as u8) << LEN_SHIFT;
    for (i, base) in bases.iter().enumerate() {
        byte |= base.to_index() << slot_shift(i + 1);
    }
    byte
}

/// Occupied length encoded in the marker bits.
#[inline(always)]
pub(crate) const fn packed_len(byte: u8) -> usize {
    (byte >> LEN_SHIFT) as usize
}

/// Base stored at 1-based `position`.
#[inline]
pub(crate) fn base_bits(byte: u8, position: usize) -> Base {
    debug_assert!((1..=CODON_WIDTH).contains(&position));
    let bits = (byte >> slot_shift(position)) & SLOT_MASK;
    match Base::from_index(bits) {
        Some(base) => base,
        None => unreachable!("codon bits {bits:#04b} do not decode to a base"),
    }
}

/// Unpack into a fixed array plus the occupied count. Unused slots read as A.
#[inline]
pub(crate) fn unpack(byte: u8) -> ([Base; CODON_WIDTH], usize) {
    let len = packed_len(byte);
    let mut bases = [Base::A; CODON_WIDTH];
    for (i, slot) in bases.iter_mut().enumerate().take(len) {
        *slot = base_bits(byte, i + 1);
    }
    (bases, len)
}
