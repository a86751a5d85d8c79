use std::{io, path::PathBuf};

use anyhow::{Context, Error};

use clap::Parser;

use scrm2vcf_core::{ancestral::reader::Builder, Input};

mod runner;
use runner::Runner;

/// Create ancestral allele table from sites VCF.
///
/// For each site with an ancestral allele ('AA' INFO field) matching either the reference or the
/// first alternative allele, a line with the 'chrom:pos' key, the derived allele, and the
/// ancestral allele is written, separated by tabs. Other sites are skipped.
#[derive(Debug, Parser)]
pub struct Ancestral {
    /// Input sites VCF.
    ///
    /// If no file is provided, stdin will be used. The input may be gzip or BGZF compressed.
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,
}

impl Ancestral {
    pub fn run(self) -> Result<(), Error> {
        let input = Input::new(self.input)?;

        let context = match input.as_path() {
            Some(path) => format!("Failed to open VCF from provided path '{}'", path.display()),
            None => String::from("Failed to open VCF from stdin"),
        };
        let reader = Builder::default()
            .set_input(input)
            .build()
            .context(context)?;

        Runner::new(reader).run(&mut io::BufWriter::new(io::stdout().lock()))
    }
}
