//! Placement of replicates on chromosomes.

use std::fmt;

use super::{ParseError, RunParameters};

/// The placement of simulated replicates along chromosomes.
///
/// A layout holds the state carried between replicates. It is advanced once on each replicate
/// marker, before any of the mutations in that replicate are located.
pub trait Layout {
    /// Advances the layout to the next replicate.
    ///
    /// Returns an error if the layout cannot be advanced without positions overflowing.
    fn start_replicate(&mut self) -> Result<(), ParseError>;

    /// Returns the contig of the current replicate.
    fn contig(&self) -> Contig<'_>;

    /// Returns the position of a mutation given its offset within the current replicate.
    ///
    /// Returns an error if the position overflows.
    fn position(&self, offset: u64) -> Result<u64, ParseError>;
}

/// The contig of a record.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Contig<'a> {
    /// A named contig.
    Named(&'a str),
    /// A numbered contig.
    Numbered(usize),
}

impl fmt::Display for Contig<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Contig::Named(name) => f.write_str(name),
            Contig::Numbered(number) => write!(f, "{number}"),
        }
    }
}

/// Replicates laid out end-to-end along a single chromosome, each spanning a fixed window.
///
/// The start of the region is moved one window ahead on each new replicate, so that the
/// first replicate starts at one window size.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FixedRegion {
    name: String,
    window_size: u64,
    region_start: u64,
}

impl FixedRegion {
    /// The default chromosome name.
    pub const DEFAULT_NAME: &'static str = "1";

    /// Creates a new layout on the chromosome with the provided name.
    pub fn new<S>(name: S, window_size: u64) -> Self
    where
        S: Into<String>,
    {
        Self {
            name: name.into(),
            window_size,
            region_start: 0,
        }
    }

    /// Creates a new layout on the chromosome with the provided name, using the window size of
    /// the run parameters.
    ///
    /// Returns an error if the parameters have no window size.
    pub fn from_parameters<S>(name: S, parameters: &RunParameters) -> Result<Self, ParseError>
    where
        S: Into<String>,
    {
        parameters
            .window_size()
            .map(|window_size| Self::new(name, window_size))
            .ok_or(ParseError::MissingWindowSize)
    }

    /// Returns the name of the chromosome.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the start of the current region.
    pub fn region_start(&self) -> u64 {
        self.region_start
    }

    /// Returns the window size.
    pub fn window_size(&self) -> u64 {
        self.window_size
    }
}

impl Layout for FixedRegion {
    fn start_replicate(&mut self) -> Result<(), ParseError> {
        self.region_start = self.position(self.window_size)?;

        Ok(())
    }

    fn contig(&self) -> Contig<'_> {
        Contig::Named(&self.name)
    }

    fn position(&self, offset: u64) -> Result<u64, ParseError> {
        self.region_start
            .checked_add(offset)
            .ok_or(ParseError::PositionOverflow {
                region_start: self.region_start,
                offset,
            })
    }
}

/// Replicates placed on a chromosome each, numbered from one.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PerChromosome {
    chrom: usize,
}

impl PerChromosome {
    /// Returns the number of the current chromosome.
    pub fn chrom(&self) -> usize {
        self.chrom
    }
}

impl Layout for PerChromosome {
    fn start_replicate(&mut self) -> Result<(), ParseError> {
        self.chrom += 1;

        Ok(())
    }

    fn contig(&self) -> Contig<'_> {
        Contig::Numbered(self.chrom)
    }

    fn position(&self, offset: u64) -> Result<u64, ParseError> {
        Ok(offset)
    }
}
