//! One-base realignment across codon boundaries.
//!
//! A right shift takes the last base of the first codon and carries it
//! rightward: every full codon on the way squeezes it in at position 1 and
//! passes its own third base on. A left shift is the mirror image, starting
//! from the first base of the last codon. The travelling base comes to rest
//! in the receiving codon; if that codon is full it spills one base into a
//! new codon at the outer side.

use tracing::trace;

use super::Seq;
use crate::base::Codon;
use crate::errors::{Result, SeqError};

impl Seq {
    /// Move one base rightward across every codon boundary.
    ///
    /// The first codon gives up its last base; a new trailing codon is made
    /// when the last codon is already full. A no-op on sequences of at most
    /// one base.
    pub fn right_shift(&mut self) {
        if let Some(last) = self.last_idx() {
            self.push_right_into(last);
        }
        debug_assert!(self.is_settled());
    }

    /// Move one base leftward across every codon boundary.
    ///
    /// The last codon gives up its first base and is dropped if that empties
    /// it; a new leading codon is made when the first codon is already full.
    pub fn left_shift(&mut self) {
        if let Some(first) = self.first_idx() {
            self.pull_left_into(first);
        }
        debug_assert!(self.is_settled());
    }

    /// Right shift that stops at codon `upto`, which receives the base.
    ///
    /// Fails with [`SeqError::Misaligned`] when `upto` is a full codon inside
    /// the sequence and with [`SeqError::IndexOutOfRange`] past the last
    /// codon. Receiving at the first codon of a multi-codon sequence moves
    /// nothing.
    pub fn right_shift_upto(&mut self, upto: usize) -> Result<()> {
        let (first, last) = self.bounds()?;
        if upto > last {
            return Err(SeqError::IndexOutOfRange {
                index: upto,
                len: self.codons.len(),
            });
        }
        let receiver = upto.max(first);
        if receiver == first && first < last {
            return Ok(());
        }
        if receiver != last && self.codons[receiver].is_full() {
            return Err(SeqError::Misaligned { index: receiver });
        }
        self.push_right_into(receiver);
        Ok(())
    }

    /// Left shift that stops at codon `upto`, which receives the base.
    ///
    /// Mirror of [`Seq::right_shift_upto`].
    pub fn left_shift_upto(&mut self, upto: usize) -> Result<()> {
        let (first, last) = self.bounds()?;
        if upto > last {
            return Err(SeqError::IndexOutOfRange {
                index: upto,
                len: self.codons.len(),
            });
        }
        let receiver = upto.max(first);
        if receiver == last && first < last {
            return Ok(());
        }
        if receiver != first && self.codons[receiver].is_full() {
            return Err(SeqError::Misaligned { index: receiver });
        }
        self.pull_left_into(receiver);
        Ok(())
    }

    fn bounds(&self) -> Result<(usize, usize)> {
        match (self.first_idx(), self.last_idx()) {
            (Some(first), Some(last)) => Ok((first, last)),
            _ => Err(SeqError::EmptySeq),
        }
    }

    /// Carry the last base of the first codon right until it rests in
    /// `receiver`. Every codon strictly between the two must be full.
    pub(super) fn push_right_into(&mut self, receiver: usize) {
        let Some(first) = self.first_idx() else {
            return;
        };
        if receiver == first {
            // donor and receiver coincide: split the base off to its right
            if self.codons[first].len() > 1 {
                let hop = self.codons[first].pop_last();
                self.codons.insert(first + 1, Codon::from(hop));
            }
            return;
        }

        let mut hop = self.codons[first].pop_last();
        let donor_emptied = self.codons[first].is_empty();
        for j in first + 1..receiver {
            hop = self.codons[j].squeeze_left(hop);
            trace!(codon = j, carried = %hop, "squeezed right");
        }
        let target = &mut self.codons[receiver];
        if target.is_full() {
            let spilled = target.squeeze_left(hop);
            self.codons.insert(receiver + 1, Codon::from(spilled));
        } else {
            target.insert_left(hop);
        }
        if donor_emptied {
            self.codons.remove(first);
        }
    }

    /// Carry the first base of the last codon left until it rests in
    /// `receiver`. Every codon strictly between the two must be full.
    pub(super) fn pull_left_into(&mut self, receiver: usize) {
        let Some(last) = self.last_idx() else {
            return;
        };
        if receiver == last {
            if self.codons[last].len() > 1 {
                let hop = self.codons[last].pop(1);
                self.codons.insert(last, Codon::from(hop));
            }
            return;
        }

        let mut hop = self.codons[last].pop(1);
        if self.codons[last].is_empty() {
            self.codons.remove(last);
        }
        for j in (receiver + 1..last).rev() {
            hop = self.codons[j].squeeze_right(hop);
            trace!(codon = j, carried = %hop, "squeezed left");
        }
        let target = &mut self.codons[receiver];
        if target.is_full() {
            let spilled = target.squeeze_right(hop);
            self.codons.insert(receiver, Codon::from(spilled));
        } else {
            target.insert_right(hop);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::seq;
    use super::*;

    fn layout(s: &Seq) -> String {
        s.to_string_sep("|")
    }

    #[test]
    fn test_right_shift_steps() {
        let mut s = seq("ATGGTA");
        s.right_shift();
        assert_eq!(layout(&s), "AT|GGT|A");
        s.right_shift();
        assert_eq!(layout(&s), "A|TGG|TA");
        s.right_shift();
        assert_eq!(layout(&s), "ATG|GTA");
    }

    #[test]
    fn test_left_shift_steps() {
        let mut s = seq("ATGGTA");
        s.left_shift();
        assert_eq!(layout(&s), "A|TGG|TA");
        s.left_shift();
        assert_eq!(layout(&s), "AT|GGT|A");
        s.left_shift();
        assert_eq!(layout(&s), "ATG|GTA");
    }

    #[test]
    fn test_shift_symmetry() {
        for text in ["ATGGTATACACATA", "ATGG", "AT", "GATTACA", "CCCGGG"] {
            for n in 1..=3 {
                let original = seq(text);
                let mut s = original.clone();
                for _ in 0..n {
                    s.right_shift();
                    assert!(s.is_settled(), "{text} after right shift");
                }
                for _ in 0..n {
                    s.left_shift();
                    assert!(s.is_settled(), "{text} after left shift");
                }
                assert_eq!(s.to_string(), text);
                assert_eq!(s.len_codons(), original.len_codons(), "{text} x{n}");
            }
        }
    }

    #[test]
    fn test_single_codon_shifts() {
        let mut s = seq("ATG");
        s.right_shift();
        assert_eq!(layout(&s), "AT|G");
        s.left_shift();
        assert_eq!(layout(&s), "ATG");

        let mut lone = seq("A");
        lone.right_shift();
        lone.left_shift();
        assert_eq!(layout(&lone), "A");

        let mut empty = Seq::new();
        empty.right_shift();
        empty.left_shift();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_shift_upto_edges() {
        let mut s = seq("ATGGTA");
        s.right_shift_upto(1).unwrap();
        assert_eq!(layout(&s), "AT|GGT|A");
        s.left_shift_upto(0).unwrap();
        assert_eq!(layout(&s), "ATG|GTA");

        // receiving at the donor's own side moves nothing
        s.right_shift_upto(0).unwrap();
        s.left_shift_upto(1).unwrap();
        assert_eq!(layout(&s), "ATG|GTA");
    }

    #[test]
    fn test_shift_upto_rejects_bad_receivers() {
        let mut s = seq("ATGGTATACACATA");
        assert_eq!(
            s.right_shift_upto(2),
            Err(SeqError::Misaligned { index: 2 })
        );
        assert_eq!(
            s.left_shift_upto(3),
            Err(SeqError::Misaligned { index: 3 })
        );
        assert_eq!(
            s.right_shift_upto(9),
            Err(SeqError::IndexOutOfRange { index: 9, len: 5 })
        );
        assert_eq!(s.to_string_sep("|"), "ATG|GTA|TAC|ACA|TA");

        assert_eq!(Seq::new().left_shift_upto(0), Err(SeqError::EmptySeq));
    }
}
