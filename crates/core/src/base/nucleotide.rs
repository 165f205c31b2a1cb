use core::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::InvalidBase;

/// A single nucleotide of the four-symbol DNA alphabet.
///
/// `Base` is a Copyable value backed by a single byte. The 2-bit index of
/// each variant is stable and is what the codon packing stores
/// (A=0, C=1, G=2, T=3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Base {
    A = 0,
    C = 1,
    G = 2,
    T = 3,
}

impl Base {
    /// All four bases in index order.
    pub const ALL: [Base; 4] = [Base::A, Base::C, Base::G, Base::T];

    /// Convert from the 2-bit index (0-3).
    #[inline(always)]
    pub const fn from_index(idx: u8) -> Option<Self> {
        match idx {
            0 => Some(Self::A),
            1 => Some(Self::C),
            2 => Some(Self::G),
            3 => Some(Self::T),
            _ => None,
        }
    }

    /// Convert to the 2-bit index (0-3).
    #[inline(always)]
    pub const fn to_index(self) -> u8 {
        self as u8
    }

    /// Convert from an uppercase ASCII byte. The textual form is
    /// case-sensitive, so lowercase bytes are rejected like any other symbol.
    #[inline]
    pub const fn from_ascii(byte: u8) -> Option<Self> {
        match byte {
            b'A' => Some(Self::A),
            b'C' => Some(Self::C),
            b'G' => Some(Self::G),
            b'T' => Some(Self::T),
            _ => None,
        }
    }

    /// Convert to the uppercase ASCII byte for this base.
    #[inline(always)]
    pub const fn to_ascii(self) -> u8 {
        match self {
            Self::A => b'A',
            Self::C => b'C',
            Self::G => b'G',
            Self::T => b'T',
        }
    }

    #[inline(always)]
    pub const fn to_char(self) -> char {
        self.to_ascii() as char
    }

    /// Return the complementary base (A <-> T, C <-> G).
    #[inline(always)]
    pub const fn complement(self) -> Self {
        match self {
            Self::A => Self::T,
            Self::T => Self::A,
            Self::C => Self::G,
            Self::G => Self::C,
        }
    }
}

impl TryFrom<u8> for Base {
    type Error = InvalidBase;

    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        Self::from_ascii(byte).ok_or(InvalidBase(byte))
    }
}

impl TryFrom<char> for Base {
    type Error = InvalidBase;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        let byte = u8::try_from(c).map_err(|_| InvalidBase(b'?'))?;
        Self::try_from(byte)
    }
}

impl From<Base> for u8 {
    #[inline(always)]
    fn from(base: Base) -> u8 {
        base.to_index()
    }
}

impl From<Base> for char {
    #[inline(always)]
    fn from(base: Base) -> char {
        base.to_char()
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
