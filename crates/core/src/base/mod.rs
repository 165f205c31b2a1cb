//! Base types for sequence representation.
//!
//! This module provides the nucleotide alphabet and the packed triplet
//! container that sequences are built from.

mod codon;
mod nucleotide;
pub(crate) mod packing;

pub use codon::{Codon, SWITCH_TOKEN, VOID_TOKEN};
pub use nucleotide::Base;
pub use packing::CODON_WIDTH;
