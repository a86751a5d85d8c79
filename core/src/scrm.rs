//! Conversion of `scrm` output to VCF.
//!
//! The simulator is expected to be run with transposed segregating sites output, so that each
//! replicate consists of a line starting with `position`, followed by one line per mutation:
//!
//! ```text
//! scrm 4 2 -t 5 -r 3 1000 -transpose-segsites
//! ...
//! position time 1 2 3 4
//! 12.0 0.25 0 1 1 0
//! ```
//!
//! The first line of the output is the echoed command line, from which [`RunParameters`] may be
//! taken. Each mutation line holds a position within the replicate, a branch time, and one
//! haploid allele per sample. Consecutive pairs of haploid samples form one diploid individual.

use std::{fmt, io, num::ParseIntError};

pub mod converter;
pub use converter::{Converted, Converter, Summary};

pub mod layout;
pub use layout::{Contig, FixedRegion, Layout, PerChromosome};

pub mod line;
pub use line::{DiploidGenotype, Line, Mutation};

pub mod params;
pub use params::{CommandLine, RunParameters};

pub mod reader;
pub use reader::Reader;

/// An error associated with parsing simulator output.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// The input did not contain a command line.
    MissingHeader,
    /// The command line did not contain a sample count.
    MissingSampleCount,
    /// The sample count could not be parsed.
    InvalidSampleCount {
        /// Raw sample count.
        raw: String,
        /// Source error.
        source: ParseIntError,
    },
    /// The sample count does not divide into diploid individuals.
    OddSampleCount(usize),
    /// The command line did not contain a window size.
    MissingWindowSize,
    /// The window size could not be parsed.
    InvalidWindowSize {
        /// Raw window size.
        raw: String,
        /// Source error.
        source: ParseIntError,
    },
    /// The position of a mutation was not a finite, non-negative number in range.
    InvalidPosition(String),
    /// The position of a mutation overflowed when placed on its chromosome.
    PositionOverflow {
        /// Start of the region the mutation was placed in.
        region_start: u64,
        /// Offset from the start of the region.
        offset: u64,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::MissingHeader => f.write_str("missing scrm command line header"),
            ParseError::MissingSampleCount => {
                f.write_str("missing sample count in scrm command line header")
            }
            ParseError::InvalidSampleCount { raw, source } => {
                write!(f, "failed to parse sample count '{raw}': {source}")
            }
            ParseError::OddSampleCount(count) => write!(
                f,
                "sample count must be even to form diploid individuals (found {count})"
            ),
            ParseError::MissingWindowSize => f.write_str(
                "missing window size in scrm command line header \
                (expected '-r <rho> <length>', or provide the window size explicitly)",
            ),
            ParseError::InvalidWindowSize { raw, source } => {
                write!(f, "failed to parse window size '{raw}': {source}")
            }
            ParseError::InvalidPosition(raw) => {
                write!(f, "failed to parse mutation position '{raw}'")
            }
            ParseError::PositionOverflow {
                region_start,
                offset,
            } => write!(
                f,
                "position overflow placing offset {offset} after region start {region_start}"
            ),
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseError::InvalidSampleCount { source, .. }
            | ParseError::InvalidWindowSize { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<ParseError> for io::Error {
    fn from(error: ParseError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, error)
    }
}
