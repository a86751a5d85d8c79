//! VCF header.

use std::fmt;

const FILE_FORMAT: &str = "VCFv4.2";
const SOURCE: &str = "scrm2vcf";
const SAMPLE_PREFIX: &str = "scrm_";
const COLUMNS: [&str; 9] = [
    "#CHROM", "POS", "ID", "REF", "ALT", "QUAL", "FILTER", "INFO", "FORMAT",
];

/// A VCF header for simulated individuals.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Header {
    individuals: usize,
}

impl Header {
    /// Creates a new header with the provided number of diploid individuals.
    pub fn new(individuals: usize) -> Self {
        Self { individuals }
    }

    /// Returns the number of individuals.
    pub fn individuals(&self) -> usize {
        self.individuals
    }

    /// Returns an iterator over sample names, numbered from one.
    pub fn sample_names(&self) -> impl Iterator<Item = String> {
        (1..=self.individuals).map(|i| format!("{SAMPLE_PREFIX}{i}"))
    }
}

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "##fileformat={FILE_FORMAT}")?;
        writeln!(f, "##source={SOURCE}")?;
        writeln!(f, r#"##FILTER=<ID=PASS,Description="All filters passed">"#)?;
        writeln!(
            f,
            r#"##FORMAT=<ID=GT,Number=1,Type=String,Description="Genotype">"#
        )?;

        // Every column, including the last sample, is followed by a tab.
        for column in COLUMNS {
            write!(f, "{column}\t")?;
        }
        for name in self.sample_names() {
            write!(f, "{name}\t")?;
        }

        Ok(())
    }
}
