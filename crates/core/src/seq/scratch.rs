use crate::base::{Base, Codon, CODON_WIDTH};

const CAPACITY: usize = 2 * CODON_WIDTH;

/// Staging buffer for the bases of at most two codons while a splice
/// regroups them. Never leaves the splice engine.
#[derive(Debug)]
pub(super) struct Scratch {
    bases: [Base; CAPACITY],
    len: usize,
}

impl Scratch {
    pub(super) fn new() -> Self {
        Self {
            bases: [Base::A; CAPACITY],
            len: 0,
        }
    }

    #[inline]
    pub(super) fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub(super) fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub(super) fn push(&mut self, base: Base) {
        assert!(self.len < CAPACITY, "scratch accumulator overflow");
        self.bases[self.len] = base;
        self.len += 1;
    }

    pub(super) fn extend<I: IntoIterator<Item = Base>>(&mut self, bases: I) {
        for base in bases {
            self.push(base);
        }
    }

    /// Drain up to one codon's worth of bases from the front.
    pub(super) fn take_codon(&mut self) -> Codon {
        let n = self.len.min(CODON_WIDTH);
        let mut codon = Codon::VOID;
        for &base in &self.bases[..n] {
            codon.insert_right(base);
        }
        self.bases.copy_within(n..self.len, 0);
        self.len -= n;
        codon
    }
}
