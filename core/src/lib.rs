#![deny(unsafe_code)]
#![warn(missing_docs)]

//! Tools for converting coalescent simulations and sites VCFs.
//!
//! This serves as the core library implementation for the `scrm2vcf` CLI, but can also be used
//! as a free-standing library.
//!
//! # Overview
//!
//! There are two independent parts:
//!
//! - [`scrm`] converts the transposed segregating sites output of the `scrm` coalescent
//!   simulator into VCF records. Replicates are placed either end-to-end along a single
//!   chromosome ([`scrm::FixedRegion`]) or on a chromosome each ([`scrm::PerChromosome`]).
//! - [`ancestral`] reduces a sites VCF annotated with ancestral alleles to a table of derived
//!   and ancestral alleles.
//!
//! # Example
//!
//! ```
//! use scrm2vcf_core::scrm::{Converted, Converter, Line, PerChromosome, RunParameters};
//!
//! let parameters = RunParameters::new(4)?;
//! let mut converter = Converter::new(PerChromosome::default(), &parameters);
//!
//! assert!(matches!(
//!     converter.convert(Line::parse("position time 1 2 3 4", 4)?)?,
//!     Converted::Replicate(1)
//! ));
//!
//! match converter.convert(Line::parse("0.5 0.1 0 1 1 0", 4)?)? {
//!     Converted::Record(record) => {
//!         assert_eq!(record.to_string(), "1\t0\t.\tA\tC\t.\tPASS\t.\tGT\t0|1\t1|0")
//!     }
//!     _ => unreachable!(),
//! }
//! # Ok::<(), scrm2vcf_core::scrm::ParseError>(())
//! ```

pub mod ancestral;

pub mod input;
pub use input::Input;

pub mod scrm;

pub mod vcf;
