use std::{io, path::PathBuf};

use anyhow::Error;

use clap::Parser;

use scrm2vcf_core::scrm::{Converter, PerChromosome, RunParameters};

use crate::runner::{self, Runner};

/// Convert scrm output to VCF, placing each replicate on its own chromosome.
#[derive(Debug, Parser)]
pub struct Chrom {
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
}

impl Chrom {
    pub fn run(self) -> Result<(), Error> {
        let (reader, command_line) = runner::open(self.input)?;

        let sample_count = match self.samples {
            Some(samples) => samples,
            None => command_line.sample_count()?,
        };
        let parameters = RunParameters::new(sample_count)?;

        log::info!(
            "Converting {} individuals with one chromosome per replicate.",
            parameters.individuals()
        );

        let converter = Converter::new(PerChromosome::default(), &parameters);

        Runner::new(reader, converter)
            .run(&mut io::BufWriter::new(io::stdout().lock()))
    }
}
