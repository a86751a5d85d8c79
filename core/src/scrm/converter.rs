//! Conversion of classified lines into VCF records.

use crate::vcf::{Header, Record};

use super::{Layout, Line, ParseError, RunParameters};

/// A converter from simulator output lines to VCF records.
///
/// The converter owns the layout, which is advanced on each replicate marker and consulted for
/// each mutation, so that lines must be provided in the order they were output.
#[derive(Clone, Debug)]
pub struct Converter<L> {
    layout: L,
    parameters: RunParameters,
    summary: Summary,
}

impl<L> Converter<L>
where
    L: Layout,
{
    /// Creates a new converter.
    pub fn new(layout: L, parameters: &RunParameters) -> Self {
        Self {
            layout,
            parameters: *parameters,
            summary: Summary::default(),
        }
    }

    /// Returns the VCF header for the converted records.
    pub fn header(&self) -> Header {
        Header::new(self.parameters.individuals())
    }

    /// Returns the number of haploid samples expected on each mutation line.
    pub fn sample_count(&self) -> usize {
        self.parameters.sample_count()
    }

    /// Returns the current layout.
    pub fn layout(&self) -> &L {
        &self.layout
    }

    /// Returns a summary of the lines converted so far.
    pub fn summary(&self) -> Summary {
        self.summary
    }

    /// Converts a single line.
    ///
    /// Returns an error if the line cannot be placed by the layout.
    pub fn convert<'a>(&'a mut self, line: Line<'a>) -> Result<Converted<'a>, ParseError> {
        match line {
            Line::Marker => {
                self.layout.start_replicate()?;
                self.summary.replicates += 1;

                Ok(Converted::Replicate(self.summary.replicates))
            }
            Line::Mutation(mutation) => {
                let position = self.layout.position(mutation.offset())?;
                self.summary.mutations += 1;

                let record = Record::new(
                    self.layout.contig(),
                    position,
                    mutation.diploid_genotypes(),
                );

                Ok(Converted::Record(record))
            }
            Line::Other => {
                self.summary.ignored += 1;

                Ok(Converted::Ignored)
            }
        }
    }
}

/// The result of converting a line.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Converted<'a> {
    /// A new replicate was started, with its number counting from one.
    Replicate(usize),
    /// A mutation was converted to a record.
    Record(Record<'a>),
    /// The line was ignored.
    Ignored,
}

/// Counts of converted lines.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Summary {
    /// Number of replicates started.
    pub replicates: usize,
    /// Number of mutations converted.
    pub mutations: usize,
    /// Number of lines ignored.
    pub ignored: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io;

    use crate::{
        input::ReadStatus,
        scrm::{FixedRegion, PerChromosome, Reader},
        vcf,
    };

    const SCRM_OUTPUT: &str = "\
scrm 4 2 -t 5 -r 4 1000 -transpose-segsites
48211 3810 37612

//
time:\t1.54\t1.22
position\ttime\t1\t2\t3\t4
0.25\t0.31\t0\t1\t1\t0
10.9\t0.05\t1\t1\t0\t0

//
time:\t0.92\t0.87
position\ttime\t1\t2\t3\t4
0.25\t0.11\t1\t0\t0\t1
";

    fn convert_all<L>(src: &str, layout: L) -> io::Result<String>
    where
        L: Layout,
    {
        let mut reader = Reader::new(src.as_bytes());
        let command = reader.read_command_line()?;
        let parameters = RunParameters::new(command.sample_count()?)?;
        let mut converter = Converter::new(layout, &parameters);

        let mut dest = Vec::new();
        vcf::write_header(&mut dest, &converter.header())?;

        loop {
            match reader.read_line(converter.sample_count()) {
                ReadStatus::Read(line) => {
                    let result = match converter.convert(line) {
                        Ok(Converted::Record(record)) => {
                            vcf::write_record(&mut dest, &record)?;
                            Ok(())
                        }
                        Ok(_) => Ok(()),
                        Err(e) => Err(e),
                    };
                    result.map_err(|e| reader.line_error(e))?;
                }
                ReadStatus::Error(e) => return Err(e),
                ReadStatus::Done => break,
            }
        }

        Ok(String::from_utf8(dest).expect("valid utf8"))
    }

    fn records(output: &str) -> Vec<&str> {
        output.lines().filter(|line| !line.starts_with('#')).collect()
    }

    #[test]
    fn test_header_lists_individuals() -> io::Result<()> {
        let output = convert_all(SCRM_OUTPUT, PerChromosome::default())?;

        let columns = output
            .lines()
            .find(|line| line.starts_with("#CHROM"))
            .expect("column header");
        assert!(columns.ends_with("FORMAT\tscrm_1\tscrm_2\t"));

        Ok(())
    }

    #[test]
    fn test_fixed_region() -> io::Result<()> {
        let output = convert_all(SCRM_OUTPUT, FixedRegion::new("1", 1000))?;

        assert_eq!(
            records(&output),
            [
                "1\t1000\t.\tA\tC\t.\tPASS\t.\tGT\t0|1\t1|0",
                "1\t1010\t.\tA\tC\t.\tPASS\t.\tGT\t1|1\t0|0",
                "1\t2000\t.\tA\tC\t.\tPASS\t.\tGT\t1|0\t0|1",
            ]
        );

        Ok(())
    }

    #[test]
    fn test_fixed_region_named() -> io::Result<()> {
        let output = convert_all(SCRM_OUTPUT, FixedRegion::new("chr22", 1000))?;

        assert!(records(&output)
            .iter()
            .all(|record| record.starts_with("chr22\t")));

        Ok(())
    }

    #[test]
    fn test_per_chromosome() -> io::Result<()> {
        let output = convert_all(SCRM_OUTPUT, PerChromosome::default())?;

        assert_eq!(
            records(&output),
            [
                "1\t0\t.\tA\tC\t.\tPASS\t.\tGT\t0|1\t1|0",
                "1\t10\t.\tA\tC\t.\tPASS\t.\tGT\t1|1\t0|0",
                "2\t0\t.\tA\tC\t.\tPASS\t.\tGT\t1|0\t0|1",
            ]
        );

        Ok(())
    }

    #[test]
    fn test_identical_output_on_rerun() -> io::Result<()> {
        assert_eq!(
            convert_all(SCRM_OUTPUT, FixedRegion::new("1", 1000))?,
            convert_all(SCRM_OUTPUT, FixedRegion::new("1", 1000))?,
        );

        Ok(())
    }

    #[test]
    fn test_summary() -> Result<(), Box<dyn std::error::Error>> {
        let parameters = RunParameters::new(4)?;
        let mut converter = Converter::new(PerChromosome::default(), &parameters);

        for line in SCRM_OUTPUT.lines().skip(1) {
            converter.convert(Line::parse(line, 4)?)?;
        }

        assert_eq!(
            converter.summary(),
            Summary {
                replicates: 2,
                mutations: 3,
                ignored: 7,
            }
        );
        assert_eq!(converter.layout().chrom(), 2);

        Ok(())
    }

    #[test]
    fn test_mutation_before_marker() -> Result<(), Box<dyn std::error::Error>> {
        let parameters = RunParameters::new(2)?;
        let mut converter = Converter::new(FixedRegion::new("1", 500), &parameters);

        let Converted::Record(record) = converter.convert(Line::parse("3.7 0.2 1 0", 2)?)? else {
            panic!("expected record");
        };
        assert_eq!(record.position(), 3);

        Ok(())
    }

    #[test]
    fn test_odd_sample_count_rejected() {
        let src = "scrm 3 1 -t 5 -r 4 1000\n";

        let error = convert_all(src, PerChromosome::default()).unwrap_err();
        assert_eq!(error.kind(), io::ErrorKind::InvalidData);
        assert_eq!(
            error.to_string(),
            "sample count must be even to form diploid individuals (found 3)"
        );
    }

    #[test]
    fn test_sample_count() -> Result<(), ParseError> {
        let parameters = RunParameters::new(6)?;
        let converter = Converter::new(PerChromosome::default(), &parameters);

        assert_eq!(converter.sample_count(), 6);
        assert_eq!(converter.header().individuals(), 3);

        Ok(())
    }

    #[test]
    fn test_position_overflow() {
        // Largest float below 2^64, so within range as an offset
        let src = "scrm 2 1 -t 5 -r 4 10000\nposition\ttime\t1\t2\n18446744073709549568\t0.1\t0\t1\n";

        let error = convert_all(src, FixedRegion::new("1", 10_000)).unwrap_err();
        assert_eq!(error.kind(), io::ErrorKind::InvalidData);
        assert!(error.to_string().starts_with("line 3: position overflow"));
    }

    #[test]
    fn test_position_overflow_leaves_summary() -> Result<(), ParseError> {
        let parameters = RunParameters::new(2)?;
        let mut converter = Converter::new(FixedRegion::new("1", u64::MAX), &parameters);
        converter.convert(Line::Marker)?;

        assert!(converter.convert(Line::parse("5 0.1 0 1", 2)?).is_err());
        assert!(converter.convert(Line::Marker).is_err());
        assert_eq!(converter.summary().mutations, 0);
        assert_eq!(converter.summary().replicates, 1);

        Ok(())
    }
}
