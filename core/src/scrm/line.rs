//! Lines of simulator output.

use std::{fmt, str::FromStr};

use super::ParseError;

/// The first token of the line starting a new replicate.
pub const MARKER: &str = "position";

/// A classified line of simulator output.
#[derive(Clone, Debug, PartialEq)]
pub enum Line<'a> {
    /// The start of a new replicate.
    Marker,
    /// A mutation within the current replicate.
    Mutation(Mutation<'a>),
    /// Any other line, such as trees, seeds, or blank lines.
    Other,
}

impl<'a> Line<'a> {
    /// Classifies a line given the number of haploid samples in the run.
    ///
    /// Only lines with exactly two tokens more than the number of samples are considered
    /// mutations. Returns an error if such a line does not start with a valid position.
    pub fn parse(s: &'a str, sample_count: usize) -> Result<Self, ParseError> {
        let tokens = s.split_whitespace().collect::<Vec<_>>();

        match tokens[..] {
            [MARKER, ..] => Ok(Self::Marker),
            [position, time, ref genotypes @ ..] if genotypes.len() == sample_count => {
                Mutation::new(position, time, genotypes.to_vec()).map(Self::Mutation)
            }
            _ => Ok(Self::Other),
        }
    }
}

/// A mutation line.
#[derive(Clone, Debug, PartialEq)]
pub struct Mutation<'a> {
    offset: u64,
    time: &'a str,
    genotypes: Vec<&'a str>,
}

impl<'a> Mutation<'a> {
    fn new(position: &str, time: &'a str, genotypes: Vec<&'a str>) -> Result<Self, ParseError> {
        let offset = parse_offset(position)?;

        Ok(Self {
            offset,
            time,
            genotypes,
        })
    }

    /// Returns the position within the replicate, truncated towards zero.
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Returns the raw branch time.
    pub fn time(&self) -> &'a str {
        self.time
    }

    /// Returns the haploid alleles.
    pub fn haploid_genotypes(&self) -> &[&'a str] {
        &self.genotypes
    }

    /// Returns an iterator over diploid genotypes, formed by consecutive pairs of haploid alleles.
    pub fn diploid_genotypes(&self) -> impl Iterator<Item = DiploidGenotype<'a>> + '_ {
        self.genotypes
            .chunks_exact(2)
            .map(|pair| DiploidGenotype(pair[0], pair[1]))
    }
}

fn parse_offset(s: &str) -> Result<u64, ParseError> {
    // `u64::MAX as f64` rounds up to 2^64, which is itself out of range
    match f64::from_str(s) {
        Ok(position) if position >= 0.0 && position < u64::MAX as f64 => {
            Ok(position.trunc() as u64)
        }
        _ => Err(ParseError::InvalidPosition(s.to_string())),
    }
}

/// A diploid genotype formed from two haploid alleles.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DiploidGenotype<'a>(pub &'a str, pub &'a str);

impl fmt::Display for DiploidGenotype<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}", self.0, self.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_marker() -> Result<(), ParseError> {
        assert_eq!(Line::parse("position time 1 2 3 4", 4)?, Line::Marker);
        assert_eq!(Line::parse("position time", 4)?, Line::Marker);

        Ok(())
    }

    #[test]
    fn test_parse_mutation() -> Result<(), ParseError> {
        let Line::Mutation(mutation) = Line::parse("12.75 0.031 0 1 1 0", 4)? else {
            panic!("expected mutation");
        };

        assert_eq!(mutation.offset(), 12);
        assert_eq!(mutation.time(), "0.031");
        assert_eq!(mutation.haploid_genotypes(), &["0", "1", "1", "0"]);

        Ok(())
    }

    #[test]
    fn test_parse_other() -> Result<(), ParseError> {
        assert_eq!(Line::parse("", 4)?, Line::Other);
        assert_eq!(Line::parse("//", 4)?, Line::Other);
        assert_eq!(Line::parse("segsites: 2", 4)?, Line::Other);
        assert_eq!(Line::parse("0.5 0.1 0 1 1", 4)?, Line::Other);
        assert_eq!(Line::parse("0.5 0.1 0 1 1 0 1", 4)?, Line::Other);

        Ok(())
    }

    #[test]
    fn test_parse_tab_delimited() -> Result<(), ParseError> {
        assert!(matches!(
            Line::parse("0.5\t0.1\t0\t1\t1\t0\n", 4)?,
            Line::Mutation(mutation) if mutation.offset() == 0
        ));

        Ok(())
    }

    #[test]
    fn test_offset_truncates() {
        assert_eq!(parse_offset("0.25"), Ok(0));
        assert_eq!(parse_offset("0.999"), Ok(0));
        assert_eq!(parse_offset("999.9"), Ok(999));
        assert_eq!(parse_offset("42"), Ok(42));
    }

    #[test]
    fn test_invalid_offset() {
        assert_eq!(
            Line::parse("abc 0.1 0 1 1 0", 4),
            Err(ParseError::InvalidPosition(String::from("abc")))
        );
        assert_eq!(
            parse_offset("-1.5"),
            Err(ParseError::InvalidPosition(String::from("-1.5")))
        );
        assert!(parse_offset("inf").is_err());
        assert!(parse_offset("NaN").is_err());
    }

    #[test]
    fn test_offset_out_of_range() {
        assert_eq!(
            Line::parse("1e20 0.1 0 1", 2),
            Err(ParseError::InvalidPosition(String::from("1e20")))
        );
        assert!(parse_offset("18446744073709551616").is_err());
        assert_eq!(parse_offset("1e15"), Ok(1_000_000_000_000_000));
    }

    #[test]
    fn test_diploid_genotypes() -> Result<(), ParseError> {
        let Line::Mutation(mutation) = Line::parse("0.5 0.1 0 1 1 0", 4)? else {
            panic!("expected mutation");
        };

        let genotypes = mutation.diploid_genotypes().collect::<Vec<_>>();
        assert_eq!(
            genotypes,
            [DiploidGenotype("0", "1"), DiploidGenotype("1", "0")]
        );
        assert_eq!(genotypes[0].to_string(), "0|1");
        assert_eq!(genotypes[1].to_string(), "1|0");

        Ok(())
    }
}
