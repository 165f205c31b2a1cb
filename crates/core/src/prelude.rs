//! Commonly used imports for convenience.
//!
//! ```
//! use codonseq_core::prelude::*;
//!
//! let mut seq: Seq = "ATGGTATACACATA".parse().unwrap();
//! seq.insert_base(Base::C, Locator::new(1, 2)).unwrap();
//! assert_eq!(seq.to_string(), "ATGGCTATACACATA");
//! ```

pub use crate::base::{Base, Codon};
pub use crate::errors::{self, SeqError};
pub use crate::locator::Locator;
pub use crate::seq::{LengthUnit, Seq};
