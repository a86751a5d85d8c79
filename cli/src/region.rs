use std::{io, path::PathBuf};

use anyhow::Error;

use clap::Parser;

use scrm2vcf_core::scrm::{Converter, FixedRegion, RunParameters};

use crate::runner::{self, Runner};

/// Convert scrm output to VCF, placing replicates end-to-end on a single chromosome.
#[derive(Debug, Parser)]
pub struct Region {
    /// Input scrm output.
    ///
    /// If no file is provided, stdin will be used. The simulator must be run with transposed
    /// segregating sites output.
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Number of haploid samples.
    ///
    /// By default, this is read from the scrm command line on the first line of the input.
    #[arg(short = 'n', long, value_name = "INT")]
    samples: Option<usize>,

    /// Size of the window simulated in each replicate.
    ///
    /// By default, this is read from the sequence length given to the recombination flag
    /// ('-r <rho> <length>') in the scrm command line on the first line of the input.
    #[arg(short = 'w', long, value_name = "INT")]
    window_size: Option<u64>,

    /// Name of the chromosome.
    #[arg(short = 'c', long, default_value = FixedRegion::DEFAULT_NAME, value_name = "NAME")]
    chrom: String,
}

impl Region {
    pub fn run(self) -> Result<(), Error> {
        let (reader, command_line) = runner::open(self.input)?;

        let sample_count = match self.samples {
            Some(samples) => samples,
            None => command_line.sample_count()?,
        };
        let window_size = match self.window_size {
            Some(window_size) => window_size,
            None => command_line.window_size()?,
        };
        let parameters = RunParameters::new(sample_count)?.with_window_size(window_size);
        let layout = FixedRegion::from_parameters(self.chrom, &parameters)?;

        log::info!(
            "Converting {} individuals in windows of {} bp on chromosome '{}'.",
            parameters.individuals(),
            layout.window_size(),
            layout.name(),
        );

        let converter = Converter::new(layout, &parameters);

        Runner::new(reader, converter)
            .run(&mut io::BufWriter::new(io::stdout().lock()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::tests::parse_subcmd;

    #[test]
    fn test_defaults() {
        let args = parse_subcmd::<Region>("scrm2vcf region scrm.txt");

        assert_eq!(args.input, Some(PathBuf::from("scrm.txt")));
        assert_eq!(args.samples, None);
        assert_eq!(args.window_size, None);
        assert_eq!(args.chrom, "1");
    }

    #[test]
    fn test_explicit_parameters() {
        let args = parse_subcmd::<Region>("scrm2vcf region -n 20 --window-size 100000 -c chr2");

        assert_eq!(args.input, None);
        assert_eq!(args.samples, Some(20));
        assert_eq!(args.window_size, Some(100000));
        assert_eq!(args.chrom, "chr2");
    }
}
