//! Codon-packed nucleotide sequence and its splice engine.
//!
//! A [`Seq`] is a run of [`Codon`]s kept in a *settled* layout between
//! public calls: no codon is empty, and every codon strictly between the
//! first and the last one is full. Only the two edge codons may hold fewer
//! than three bases.
//!
//! Because of that layout the base rank of a locator (and the locator of a
//! base rank) is a constant-time computation from the length of the first
//! codon alone, which is what the splice engine in [`splice`] and the
//! realignment primitives in [`shift`] build on.
//!
//! Every mutating operation checks all of its inputs before it touches the
//! codon buffer. The steps that follow cannot fail, so an `Err` always
//! leaves the sequence exactly as it was.

mod scratch;
mod shift;
mod splice;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::debug;

use crate::base::{Base, Codon, CODON_WIDTH};
use crate::errors::{Result, SeqError};
use crate::locator::Locator;

/// Unit for [`Seq::trulen`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LengthUnit {
    /// Occupied codons, first to last.
    Codons,
    /// Individual bases.
    Bp,
}

impl FromStr for LengthUnit {
    type Err = SeqError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "codons" => Ok(Self::Codons),
            "bp" | "bases" => Ok(Self::Bp),
            other => Err(SeqError::UnknownLengthMode(other.to_string())),
        }
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Codons => f.write_str("codons"),
            Self::Bp => f.write_str("bp"),
        }
    }
}

/// An ordered strand of codons.
///
/// Equality is structural: two sequences compare equal when they hold the
/// same codons, which for settled sequences with the same first-codon
/// length is the same as holding the same text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Seq {
    codons: Vec<Codon>,
}

impl Seq {
    /// Create an empty sequence.
    pub fn new() -> Self {
        Self { codons: Vec::new() }
    }

    /// Create an empty sequence with room reserved for `codons` codons.
    pub fn with_capacity(codons: usize) -> Self {
        Self {
            codons: Vec::with_capacity(codons),
        }
    }

    /// Physical number of codons held.
    #[inline]
    pub fn len_codons(&self) -> usize {
        self.codons.len()
    }

    /// True if the sequence holds no bases.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.codons.iter().all(Codon::is_empty)
    }

    /// Read-only view of the codon buffer.
    #[inline]
    pub fn codons(&self) -> &[Codon] {
        &self.codons
    }

    /// Iterate over every base, left to right.
    pub fn bases(&self) -> impl Iterator<Item = Base> + '_ {
        self.codons.iter().flat_map(|codon| codon.bases())
    }

    /// Index of the first codon holding bases, skipping empty codons.
    pub fn first_idx(&self) -> Option<usize> {
        self.codons.iter().position(|c| !c.is_empty())
    }

    /// Index of the last codon holding bases, skipping empty codons.
    pub fn last_idx(&self) -> Option<usize> {
        self.codons.iter().rposition(|c| !c.is_empty())
    }

    /// Locator of the first base.
    pub fn first_loc(&self) -> Option<Locator> {
        self.first_idx().map(|idx| Locator::new(idx, 1))
    }

    /// Locator of the last base.
    pub fn last_loc(&self) -> Option<Locator> {
        self.last_idx()
            .map(|idx| Locator::new(idx, self.codons[idx].len() as u8))
    }

    /// Logical length in codons (first to last occupied, inclusive) or in
    /// bases.
    pub fn trulen(&self, unit: LengthUnit) -> usize {
        match unit {
            LengthUnit::Codons => match (self.first_idx(), self.last_idx()) {
                (Some(first), Some(last)) => last - first + 1,
                _ => 0,
            },
            LengthUnit::Bp => self.codons.iter().map(Codon::len).sum(),
        }
    }

    /// [`Seq::trulen`] with the unit given as `"codons"`, `"bp"` or `"bases"`.
    pub fn trulen_in(&self, mode: &str) -> Result<usize> {
        Ok(self.trulen(mode.parse()?))
    }

    /// True iff `first_loc <= locator <= last_loc`.
    ///
    /// This is a range check only. Operations that address one base also
    /// require a shift in 1..=3 naming an occupied slot.
    pub fn is_locator_valid(&self, locator: &Locator) -> bool {
        match (self.first_loc(), self.last_loc()) {
            (Some(first), Some(last)) => first <= *locator && *locator <= last,
            _ => false,
        }
    }

    /// Codon at the locator's index (the shift is ignored).
    pub fn codon_at(&self, locator: &Locator) -> Result<Codon> {
        self.codons
            .get(locator.index)
            .copied()
            .ok_or(SeqError::IndexOutOfRange {
                index: locator.index,
                len: self.codons.len(),
            })
    }

    /// Base addressed by `locator`.
    pub fn base_at(&self, locator: &Locator) -> Result<Base> {
        self.check_addressable(locator)?;
        self.codons[locator.index].base_at(locator.shift as usize)
    }

    /// Text with `sep` between codons, e.g. `"ATG|GTA|T"`.
    pub fn to_string_sep(&self, sep: &str) -> String {
        self.codons
            .iter()
            .map(Codon::to_string)
            .collect::<Vec<_>>()
            .join(sep)
    }

    /// Check the layout invariant: no empty codon anywhere, and every
    /// codon between the first and the last is full.
    pub fn is_settled(&self) -> bool {
        if self.codons.iter().any(Codon::is_empty) {
            return false;
        }
        match self.codons.len() {
            0..=2 => true,
            n => self.codons[1..n - 1].iter().all(Codon::is_full),
        }
    }

    /// Fail unless `locator` names one occupied base.
    pub(crate) fn check_addressable(&self, locator: &Locator) -> Result<()> {
        locator.verify_shift()?;
        let occupied = self
            .codons
            .get(locator.index)
            .map_or(false, |codon| locator.shift as usize <= codon.len());
        if self.is_locator_valid(locator) && occupied {
            Ok(())
        } else {
            Err(SeqError::LocatorOutOfRange { locator: *locator })
        }
    }

    /// Number of bases held. Constant time on a settled sequence.
    pub(crate) fn bp_len(&self) -> usize {
        match self.last_loc() {
            Some(last) => self.offset_of(&last) + 1,
            None => 0,
        }
    }

    /// Zero-based rank of the base at `locator`. The locator must address an
    /// occupied base of a settled sequence.
    pub(crate) fn offset_of(&self, locator: &Locator) -> usize {
        let shift = locator.shift as usize;
        debug_assert!(shift >= 1);
        if locator.index == 0 {
            return shift - 1;
        }
        self.codons[0].len() + CODON_WIDTH * (locator.index - 1) + (shift - 1)
    }

    /// Locator of the base with zero-based rank `offset` in a settled
    /// sequence. The inverse of [`Seq::offset_of`].
    pub(crate) fn locator_at(&self, offset: usize) -> Locator {
        let lead = self.codons.first().map_or(0, Codon::len);
        if offset < lead {
            return Locator::new(0, offset as u8 + 1);
        }
        let rest = offset - lead;
        Locator::new(1 + rest / CODON_WIDTH, (rest % CODON_WIDTH) as u8 + 1)
    }
}

impl fmt::Display for Seq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for codon in &self.codons {
            if codon.is_empty() {
                continue;
            }
            write!(f, "{codon}")?;
        }
        Ok(())
    }
}

impl FromStr for Seq {
    type Err = SeqError;

    /// Chunk `s` greedily into codons of three; a trailing remainder becomes
    /// one partial codon.
    fn from_str(s: &str) -> Result<Self> {
        let mut codons = Vec::with_capacity(s.len().div_ceil(CODON_WIDTH));
        for chunk in s.as_bytes().chunks(CODON_WIDTH) {
            let mut bases = [Base::A; CODON_WIDTH];
            for (slot, &byte) in bases.iter_mut().zip(chunk) {
                *slot = Base::try_from(byte)?;
            }
            codons.push(Codon::from_bases(&bases[..chunk.len()])?);
        }
        debug!(bp = s.len(), codons = codons.len(), "parsed sequence");
        Ok(Self { codons })
    }
}

impl From<Codon> for Seq {
    /// A sentinel codon yields the empty sequence.
    fn from(codon: Codon) -> Self {
        if codon.is_empty() {
            return Self::new();
        }
        Self {
            codons: vec![codon],
        }
    }
}

impl From<Base> for Seq {
    fn from(base: Base) -> Self {
        Self::from(Codon::from(base))
    }
}

impl FromIterator<Base> for Seq {
    fn from_iter<I: IntoIterator<Item = Base>>(iter: I) -> Self {
        let mut seq = Seq::new();
        seq.extend(iter);
        seq
    }
}

impl Extend<Base> for Seq {
    fn extend<I: IntoIterator<Item = Base>>(&mut self, iter: I) {
        for base in iter {
            self.push_back_base(base);
        }
    }
}

impl Serialize for Seq {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Seq {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn seq(s: &str) -> Seq {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse_chunks_greedily() {
        let s = seq("ATGGTATACACATA");
        assert_eq!(s.to_string_sep(","), "ATG,GTA,TAC,ACA,TA");
        assert_eq!(s.len_codons(), 5);
        assert_eq!(s.first_idx(), Some(0));
        assert_eq!(s.last_idx(), Some(4));
        assert_eq!(s.first_loc(), Some(Locator::new(0, 1)));
        assert_eq!(s.last_loc(), Some(Locator::new(4, 2)));
        assert!(s.is_settled());
    }

    #[test]
    fn test_parse_rejects_bad_symbols() {
        assert!(matches!(
            "ATGNNA".parse::<Seq>(),
            Err(SeqError::InvalidBase(_))
        ));
        assert!(matches!(
            "atg".parse::<Seq>(),
            Err(SeqError::InvalidBase(_))
        ));
        assert!("ATGé".parse::<Seq>().is_err());
    }

    #[test]
    fn test_empty_seq() {
        let s = Seq::new();
        assert!(s.is_empty());
        assert_eq!(s.to_string(), "");
        assert_eq!(s.first_idx(), None);
        assert_eq!(s.last_loc(), None);
        assert_eq!(s.trulen(LengthUnit::Codons), 0);
        assert_eq!(s.trulen(LengthUnit::Bp), 0);
        assert!(!s.is_locator_valid(&Locator::ORIGIN));
        assert_eq!(seq(""), s);
        assert!(Seq::with_capacity(16).is_empty());
    }

    #[test]
    fn test_trulen_modes() {
        let s = seq("ATGGTATACACATA");
        assert_eq!(s.trulen(LengthUnit::Codons), 5);
        assert_eq!(s.trulen(LengthUnit::Bp), 14);
        assert_eq!(s.trulen_in("codons"), Ok(5));
        assert_eq!(s.trulen_in("bp"), Ok(14));
        assert_eq!(s.trulen_in("bases"), Ok(14));
        assert_eq!(
            s.trulen_in("kb"),
            Err(SeqError::UnknownLengthMode("kb".to_string()))
        );
        assert_eq!(s.bp_len(), 14);
    }

    #[test]
    fn test_locator_validity() {
        let s = seq("ATGGTATACACATA");
        assert!(s.is_locator_valid(&Locator::new(0, 1)));
        assert!(s.is_locator_valid(&Locator::new(2, 0)));
        assert!(s.is_locator_valid(&Locator::new(4, 2)));
        assert!(!s.is_locator_valid(&Locator::new(4, 3)));
        assert!(!s.is_locator_valid(&Locator::ORIGIN));

        assert_eq!(
            s.check_addressable(&Locator::new(2, 0)),
            Err(SeqError::ShiftOutOfRange(0))
        );
        assert_eq!(
            s.check_addressable(&Locator::new(4, 3)),
            Err(SeqError::LocatorOutOfRange {
                locator: Locator::new(4, 3)
            })
        );
    }

    #[test]
    fn test_base_and_codon_access() {
        let s = seq("ATGGTATACACATA");
        assert_eq!(s.base_at(&Locator::new(1, 2)), Ok(Base::T));
        assert_eq!(s.base_at(&Locator::new(4, 2)), Ok(Base::A));
        assert!(s.base_at(&Locator::new(5, 1)).is_err());
        assert_eq!(s.codon_at(&Locator::codon(2)).map(|c| c.to_string()), Ok("TAC".into()));
        assert_eq!(
            s.codon_at(&Locator::codon(5)),
            Err(SeqError::IndexOutOfRange { index: 5, len: 5 })
        );
    }

    #[test]
    fn test_offset_mapping_with_partial_lead() {
        let mut s = seq("GATTACA");
        s.right_shift();
        assert_eq!(s.to_string_sep("|"), "GA|TTA|CA");
        assert_eq!(s.offset_of(&Locator::new(0, 2)), 1);
        assert_eq!(s.offset_of(&Locator::new(1, 1)), 2);
        assert_eq!(s.offset_of(&Locator::new(2, 2)), 6);
        for offset in 0..s.bp_len() {
            let loc = s.locator_at(offset);
            assert!(s.check_addressable(&loc).is_ok());
            assert_eq!(s.offset_of(&loc), offset);
        }
    }

    #[test]
    fn test_from_codon_and_base() {
        assert!(Seq::from(Codon::VOID).is_empty());
        assert!(Seq::from(Codon::SWITCH).is_empty());
        assert_eq!(Seq::from(Base::G).to_string(), "G");
        let c: Codon = "TCA".parse().unwrap();
        assert_eq!(Seq::from(c).to_string(), "TCA");
    }

    #[test]
    fn test_collect_bases() {
        let s: Seq = [Base::A, Base::C, Base::G, Base::T].into_iter().collect();
        assert_eq!(s.to_string_sep("|"), "ACG|T");
        assert_eq!(s.bases().count(), 4);
    }

    #[test]
    fn test_serde_as_text() {
        let s = seq("GATTACA");
        let json = serde_json::to_string(&s).unwrap();
        assert_eq!(json, "\"GATTACA\"");
        let back: Seq = serde_json::from_str(&json).unwrap();
        assert_eq!(back, s);
        assert!(serde_json::from_str::<Seq>("\"GAXT\"").is_err());
    }

    #[test]
    fn test_length_unit_parse() {
        assert_eq!("codons".parse::<LengthUnit>(), Ok(LengthUnit::Codons));
        assert_eq!("bases".parse::<LengthUnit>(), Ok(LengthUnit::Bp));
        assert_eq!(LengthUnit::Bp.to_string(), "bp");
    }
}
