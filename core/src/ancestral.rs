//! Ancestral allele tables from sites VCFs.
//!
//! A sites VCF annotated with ancestral alleles in the `AA` INFO field, as distributed by the
//! 1000 Genomes Project, can be reduced to a table with one row per usable site:
//!
//! ```text
//! 1:10505	T	A
//! ```
//!
//! giving the `chrom:pos` key, the derived allele, and the ancestral allele. Sites are only
//! usable when the ancestral allele is a single canonical base matching either the reference or
//! the first alternative allele.

use std::fmt;

use noodles_vcf::variant::{
    record::info::field::key,
    record_buf::info::field::{value::Array, Value},
    RecordBuf,
};

pub mod reader;
pub use reader::Reader;

/// A canonical nucleotide base.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Base {
    /// Adenine.
    A,
    /// Cytosine.
    C,
    /// Guanine.
    G,
    /// Thymine.
    T,
}

impl Base {
    /// Returns a base from a character, ignoring case, if possible, otherwise `None`.
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'A' => Some(Self::A),
            'C' => Some(Self::C),
            'G' => Some(Self::G),
            'T' => Some(Self::T),
            _ => None,
        }
    }

    /// Returns a base from a string consisting of a single character, ignoring case, if
    /// possible, otherwise `None`.
    pub fn from_single(s: &str) -> Option<Self> {
        let mut chars = s.chars();

        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_char(c),
            _ => None,
        }
    }

    /// Returns the upper-case string representation of the base.
    pub fn as_str(&self) -> &'static str {
        match self {
            Base::A => "A",
            Base::C => "C",
            Base::G => "G",
            Base::T => "T",
        }
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A row of the ancestral allele table.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Row {
    chrom: String,
    position: usize,
    derived: String,
    ancestral: Base,
}

impl Row {
    /// Returns the `chrom:pos` key of the site.
    pub fn key(&self) -> String {
        format!("{}:{}", self.chrom, self.position)
    }

    /// Returns the derived allele.
    pub fn derived(&self) -> &str {
        &self.derived
    }

    /// Returns the ancestral allele.
    pub fn ancestral(&self) -> Base {
        self.ancestral
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}\t{}\t{}",
            self.chrom, self.position, self.derived, self.ancestral
        )
    }
}

/// The result of classifying a site.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Outcome {
    /// A site that can be written to the table.
    Row(Row),
    /// A site that was skipped.
    Skipped(Skipped),
    /// An error.
    Error(Error),
}

/// A reason for skipping a site.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[repr(u8)]
pub enum Skipped {
    /// The site has no ancestral allele annotation.
    MissingAnnotation = 0,
    /// The ancestral allele is not a single canonical base.
    NonCanonical = 1,
    /// The ancestral allele matches neither the reference nor the alternative allele.
    Mismatched = 2,
}

impl Skipped {
    /// Number of reasons.
    pub const N: usize = 3;

    /// All reasons.
    pub const VARIANTS: [Skipped; Self::N] =
        [Self::MissingAnnotation, Self::NonCanonical, Self::Mismatched];

    /// Returns a string representation for having skipped the site.
    pub fn reason(&self) -> &'static str {
        match self {
            Self::MissingAnnotation => "missing ancestral allele",
            Self::NonCanonical => "non-canonical ancestral allele",
            Self::Mismatched => "ancestral allele matching neither reference nor alternative",
        }
    }
}

/// An error associated with classifying a site.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// An annotated site has no alternative allele.
    MissingAlternateAllele {
        /// Chromosome of the site.
        chrom: String,
        /// Position of the site.
        position: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MissingAlternateAllele { chrom, position } => write!(
                f,
                "missing alternative allele at annotated site '{chrom}:{position}'"
            ),
        }
    }
}

impl std::error::Error for Error {}

/// Classifies a VCF record as a row of the ancestral allele table.
pub fn classify(record: &RecordBuf) -> Outcome {
    let ancestral = match ancestral_allele(record) {
        Ok(base) => base,
        Err(skipped) => return Outcome::Skipped(skipped),
    };

    let chrom = record.reference_sequence_name().to_string();
    let position = record.variant_start().map(usize::from).unwrap_or(0);

    let reference = record.reference_bases();
    let Some(alternate) = record.alternate_bases().as_ref().first() else {
        return Outcome::Error(Error::MissingAlternateAllele { chrom, position });
    };

    let derived = if reference == ancestral.as_str() {
        alternate.as_str()
    } else if alternate == ancestral.as_str() {
        reference
    } else {
        return Outcome::Skipped(Skipped::Mismatched);
    };

    Outcome::Row(Row {
        chrom,
        position,
        derived: derived.to_string(),
        ancestral,
    })
}

/// Returns the first value of the ancestral allele annotation as a canonical base.
///
/// For a single string value, this is its first character.
fn ancestral_allele(record: &RecordBuf) -> Result<Base, Skipped> {
    let value = match record.info().get(key::ANCESTRAL_ALLELE) {
        Some(Some(value)) => value,
        Some(None) | None => return Err(Skipped::MissingAnnotation),
    };

    let base = match value {
        Value::Character(c) => Base::from_char(*c),
        Value::String(s) => match s.chars().next() {
            Some(c) => Base::from_char(c),
            None => return Err(Skipped::MissingAnnotation),
        },
        Value::Array(Array::Character(values)) => match values.first() {
            Some(Some(c)) => Base::from_char(*c),
            Some(None) | None => return Err(Skipped::MissingAnnotation),
        },
        Value::Array(Array::String(values)) => match values.first() {
            Some(Some(s)) => Base::from_single(s),
            Some(None) | None => return Err(Skipped::MissingAnnotation),
        },
        _ => None,
    };

    base.ok_or(Skipped::NonCanonical)
}
