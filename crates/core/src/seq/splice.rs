//! Insert, remove and extract bases, codons and whole runs.
//!
//! Single bases travel through the squeeze chain of full codons. Up to three
//! bases at once go through a [`Scratch`] accumulator that regroups the
//! target codon and carries the overflow forward. Longer runs are spliced
//! by cutting the codon buffer at the insertion point (the anneal), moving
//! whole codons in bulk and repairing the one partial codon each junction
//! can leave behind.
//!
//! Bases before the edit point never move, so a locator taken before an
//! edit still names the same base afterwards as long as it precedes the
//! edit point.

use tracing::debug;

use super::scratch::Scratch;
use super::Seq;
use crate::base::{Base, Codon, CODON_WIDTH};
use crate::errors::{Result, SeqError};
use crate::locator::Locator;

impl Seq {
    /// Insert `base` so that it ends up at `at`, moving later bases right.
    pub fn insert_base(&mut self, base: Base, at: Locator) -> Result<()> {
        self.check_addressable(&at)?;
        let (index, position) = (at.index, at.shift as usize);

        let target = &mut self.codons[index];
        if !target.is_full() {
            target.insert_at(position, base);
            return Ok(());
        }

        let mut hop = target.squeeze_at(position, base);
        let mut landed = false;
        for codon in &mut self.codons[index + 1..] {
            if !codon.is_full() {
                codon.insert_left(hop);
                landed = true;
                break;
            }
            hop = codon.squeeze_left(hop);
        }
        if !landed {
            self.codons.push(Codon::from(hop));
        }
        debug_assert!(self.is_settled());
        Ok(())
    }

    /// Remove and return the base at `at`, closing the gap from the right.
    pub fn pop_base(&mut self, at: Locator) -> Result<Base> {
        self.check_addressable(&at)?;
        let index = at.index;
        let popped = self.codons[index].pop(at.shift as usize);
        if self.codons[index].is_empty() {
            self.codons.remove(index);
        } else if self.last_idx().map_or(false, |last| index < last) {
            self.pull_left_into(index);
        }
        debug_assert!(self.is_settled());
        Ok(popped)
    }

    /// Insert the bases of `codon` so that the first of them ends up at `at`.
    pub fn insert_codon(&mut self, codon: Codon, at: Locator) -> Result<()> {
        if codon.is_empty() {
            return Err(SeqError::EmptyCodon);
        }
        self.check_addressable(&at)?;
        let (index, position) = (at.index, at.shift as usize);
        let target = self.codons[index];

        if target.room() >= codon.len() {
            debug!(%at, %codon, "codon fits in place");
            for (k, base) in codon.bases().enumerate() {
                self.codons[index].insert_at(position + k, base);
            }
            return Ok(());
        }

        debug!(%at, %codon, "codon overflows target, carrying forward");
        let mut run = Scratch::new();
        run.extend(target.bases().take(position - 1));
        run.extend(codon.bases());
        run.extend(target.bases().skip(position - 1));
        self.codons[index] = run.take_codon();
        self.carry_forward(index + 1, run);
        debug_assert!(self.is_settled());
        Ok(())
    }

    /// Remove `size` (1..=3) bases starting at `at` and return them as one
    /// codon. The span may cross into the next codon.
    pub fn pop_codon(&mut self, at: Locator, size: usize) -> Result<Codon> {
        if !(1..=CODON_WIDTH).contains(&size) {
            return Err(SeqError::InvalidSpan(size));
        }
        self.check_addressable(&at)?;
        let offset = self.offset_of(&at);
        if offset + size > self.bp_len() {
            return Err(SeqError::InvalidSpan(size));
        }
        Ok(self.take_short(offset, size))
    }

    /// Insert every base of `other` so that its first base ends up at `at`.
    pub fn insert_seq(&mut self, other: Seq, at: Locator) -> Result<()> {
        self.check_addressable(&at)?;
        if other.is_empty() {
            return Ok(());
        }
        debug!(
            %at,
            bp = other.bp_len(),
            codons = other.len_codons(),
            "splicing sequence"
        );
        self.codons.reserve(other.len_codons() + 1);
        let tail = self.cut(at);
        self.join(other, at.index == 0);
        self.join(tail, true);
        debug_assert!(self.is_settled());
        Ok(())
    }

    /// Remove `len` bases starting at `start` and return them.
    ///
    /// Spans of up to three bases are served by [`Seq::pop_codon`].
    pub fn pop_seq(&mut self, start: Locator, len: usize) -> Result<Seq> {
        self.check_addressable(&start)?;
        let offset = self.offset_of(&start);
        if len == 0 || offset + len > self.bp_len() {
            return Err(SeqError::InvalidSpan(len));
        }
        if len <= CODON_WIDTH {
            return Ok(Seq::from(self.take_short(offset, len)));
        }
        debug!(%start, bp = len, "removing span");
        let removed = self.remove_span(offset, len);
        debug_assert!(self.is_settled());
        Ok(removed)
    }

    /// Remove the bases from `start` to `end`, both inclusive.
    pub fn pop_seq_until(&mut self, start: Locator, end: Locator) -> Result<Seq> {
        let len = self.span_len(&start, &end)?;
        self.pop_seq(start, len)
    }

    /// Copy of the bases from `start` to `end`, both inclusive.
    pub fn subseq(&self, start: Locator, end: Locator) -> Result<Seq> {
        self.span_len(&start, &end)?;
        let (first, first_pos) = (start.index, start.shift as usize);
        let (last, last_pos) = (end.index, end.shift as usize);

        if first == last {
            return Ok(Seq::from(self.codons[first].slice(first_pos, last_pos)));
        }
        let mut codons = Vec::with_capacity(last - first + 1);
        codons.push(self.codons[first].slice(first_pos, CODON_WIDTH));
        codons.extend_from_slice(&self.codons[first + 1..last]);
        codons.push(self.codons[last].slice(1, last_pos));
        Ok(Seq { codons })
    }

    /// Split at `at`: bases before it stay, the rest are returned.
    pub fn split_off(&mut self, at: Locator) -> Result<Seq> {
        self.check_addressable(&at)?;
        Ok(self.cut(at))
    }

    /// Append `other`, repairing the junction so the result is settled.
    pub fn append(&mut self, other: Seq) {
        self.join(other, true);
    }

    /// Append `other`. A partial tail codon is topped up from the head of
    /// `other`; a partial leading codon only when `fill_lead` is set, so a
    /// splice behind it can keep the bases of `other` at the locators they
    /// are inserted at.
    fn join(&mut self, mut other: Seq, fill_lead: bool) {
        if other.codons.is_empty() {
            return;
        }
        if self.codons.is_empty() {
            *self = other;
            return;
        }

        let last = self.codons.len() - 1;
        let fill = last > 0 || fill_lead;
        if fill {
            let head = &mut other.codons[0];
            while !self.codons[last].is_full() && !head.is_empty() {
                self.codons[last].insert_right(head.pop(1));
            }
        }
        let junction = if fill && !self.codons[last].is_full() {
            last
        } else {
            last + 1
        };
        let skip = usize::from(other.codons[0].is_empty());
        self.codons.extend(other.codons.drain(skip..));

        while junction + 1 < self.codons.len() && !self.codons[junction].is_full() {
            self.pull_left_into(junction);
        }
    }

    /// Append one base, filling the tail codon first.
    pub fn push_back_base(&mut self, base: Base) {
        match self.codons.last_mut() {
            Some(tail) if !tail.is_full() => tail.insert_right(base),
            _ => self.codons.push(Codon::from(base)),
        }
    }

    /// Append the bases of `codon`, filling the tail codon first.
    pub fn push_back_codon(&mut self, codon: Codon) -> Result<()> {
        if codon.is_empty() {
            return Err(SeqError::EmptyCodon);
        }
        for base in codon.bases() {
            self.push_back_base(base);
        }
        Ok(())
    }

    /// Append every base of `other`.
    pub fn push_back_seq(&mut self, other: Seq) {
        self.append(other);
    }

    /// Unchecked [`Seq::split_off`]. The codon at `at` is split into a kept
    /// part, which stays as the new last codon, and an expelled part, which
    /// heads the returned sequence.
    fn cut(&mut self, at: Locator) -> Seq {
        let (index, position) = (at.index, at.shift as usize);
        let target = self.codons[index];

        let mut codons = Vec::with_capacity(self.codons.len() - index);
        codons.push(target.slice(position, CODON_WIDTH));
        codons.extend(self.codons.drain(index + 1..));

        let kept = target.slice(1, position - 1);
        if kept.is_empty() {
            self.codons.truncate(index);
        } else {
            self.codons[index] = kept;
        }
        Seq { codons }
    }

    fn remove_span(&mut self, offset: usize, len: usize) -> Seq {
        let start = self.locator_at(offset);
        let mut removed = self.cut(start);
        if len < removed.bp_len() {
            let end = removed.locator_at(len);
            let tail = removed.cut(end);
            self.append(tail);
        }
        removed
    }

    /// Remove up to three bases starting at base rank `offset`.
    fn take_short(&mut self, offset: usize, size: usize) -> Codon {
        let at = self.locator_at(offset);
        let (index, position) = (at.index, at.shift as usize);

        if position - 1 + size > self.codons[index].len() {
            debug!(%at, size, "short span crosses a codon boundary");
            let mut out = Codon::VOID;
            for base in self.remove_span(offset, size).bases() {
                out.insert_right(base);
            }
            return out;
        }

        let mut out = Codon::VOID;
        for _ in 0..size {
            out.insert_right(self.codons[index].pop(position));
        }
        if self.codons[index].is_empty() {
            self.codons.remove(index);
        } else {
            for _ in 0..size {
                match self.last_idx() {
                    Some(last) if index < last => self.pull_left_into(index),
                    _ => break,
                }
            }
        }
        debug_assert!(self.is_settled());
        out
    }

    /// Regroup `run` with the codons from `from` on, three bases to a codon,
    /// until the run is used up.
    fn carry_forward(&mut self, from: usize, mut run: Scratch) {
        let mut index = from;
        while !run.is_empty() {
            if index == self.codons.len() {
                self.codons.push(run.take_codon());
                continue;
            }
            run.extend(self.codons[index].bases());
            self.codons[index] = run.take_codon();
            index += 1;
        }
    }

    /// Validate an inclusive span and return its length in bases.
    fn span_len(&self, start: &Locator, end: &Locator) -> Result<usize> {
        self.check_addressable(start)?;
        self.check_addressable(end)?;
        if end < start {
            return Err(SeqError::InvertedRange {
                start: *start,
                end: *end,
            });
        }
        Ok(self.offset_of(end) - self.offset_of(start) + 1)
    }
}
