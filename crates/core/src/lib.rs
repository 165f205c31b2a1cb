//! # codonseq-core
//!
//! Mutable nucleotide sequences stored three bases to a byte.
//!
//! The crate is built from three pieces:
//!
//! - [`Codon`]: a 0-3 base container packed into one byte with its length
//!   encoded alongside the bases.
//! - [`Locator`]: a `(codon index, shift)` address of one base, with
//!   carry/borrow-aware arithmetic.
//! - [`Seq`]: an ordered run of codons and the splice engine that inserts,
//!   removes and extracts bases while keeping every interior codon full.

pub mod base;
pub mod errors;
pub mod locator;
pub mod prelude;
pub mod seq;

pub use base::{Base, Codon, CODON_WIDTH};
pub use errors::{InvalidBase, Result, SeqError};
pub use locator::Locator;
pub use seq::{LengthUnit, Seq};
