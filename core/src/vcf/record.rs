//! VCF record.

use std::fmt;

use crate::scrm::{Contig, DiploidGenotype};

const ID: &str = ".";
const REFERENCE_BASE: &str = "A";
const ALTERNATE_BASE: &str = "C";
const QUALITY: &str = ".";
const FILTER: &str = "PASS";
const INFO: &str = ".";
const FORMAT: &str = "GT";

/// A VCF record for a simulated biallelic site.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Record<'a> {
    contig: Contig<'a>,
    position: u64,
    genotypes: Vec<DiploidGenotype<'a>>,
}

impl<'a> Record<'a> {
    /// Creates a new record.
    pub fn new<I>(contig: Contig<'a>, position: u64, genotypes: I) -> Self
    where
        I: IntoIterator<Item = DiploidGenotype<'a>>,
    {
        Self {
            contig,
            position,
            genotypes: genotypes.into_iter().collect(),
        }
    }

    /// Returns the contig.
    pub fn contig(&self) -> Contig<'a> {
        self.contig
    }

    /// Returns the position.
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Returns the genotypes.
    pub fn genotypes(&self) -> &[DiploidGenotype<'a>] {
        &self.genotypes
    }
}

impl fmt::Display for Record<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{ID}\t{REFERENCE_BASE}\t{ALTERNATE_BASE}\t{QUALITY}\t{FILTER}\t{INFO}\t{FORMAT}",
            self.contig, self.position,
        )?;

        for genotype in &self.genotypes {
            write!(f, "\t{genotype}")?;
        }

        Ok(())
    }
}
