use std::{io, path::PathBuf};

use anyhow::{Context, Error};

use scrm2vcf_core::{
    input::{self, ReadStatus},
    scrm::{CommandLine, Converted, Converter, Layout, Reader},
    vcf, Input,
};

/// Opens simulator output and reads the echoed command line.
pub fn open(path: Option<PathBuf>) -> Result<(Reader<input::Reader>, CommandLine), Error> {
    let input = Input::new(path)?;

    let inner = input.open().with_context(|| match input.as_path() {
        Some(path) => format!("Failed to open scrm output from provided path '{}'", path.display()),
        None => String::from("Failed to open scrm output from stdin"),
    })?;
    let mut reader = Reader::new(inner);

    let command_line = reader.read_command_line()?;
    log::debug!("Read scrm command line '{}'", command_line.as_str());

    Ok((reader, command_line))
}

pub struct Runner<R, L> {
    reader: Reader<R>,
    converter: Converter<L>,
}

impl<R, L> Runner<R, L>
where
    R: io::BufRead,
    L: Layout,
{
    pub fn new(reader: Reader<R>, converter: Converter<L>) -> Self {
        Self { reader, converter }
    }

    pub fn run<W>(&mut self, writer: &mut W) -> Result<(), Error>
    where
        W: io::Write,
    {
        vcf::write_header(writer, &self.converter.header())?;

        loop {
            match self.reader.read_line(self.converter.sample_count()) {
                ReadStatus::Read(line) => {
                    let result = match self.converter.convert(line) {
                        Ok(Converted::Replicate(replicate)) => {
                            log::debug!("Starting replicate {replicate}.");
                            Ok(())
                        }
                        Ok(Converted::Record(record)) => {
                            vcf::write_record(writer, &record)?;
                            Ok(())
                        }
                        Ok(Converted::Ignored) => Ok(()),
                        Err(e) => Err(e),
                    };

                    result.map_err(|e| self.reader.line_error(e))?;
                }
                ReadStatus::Error(e) => Err(e)?,
                ReadStatus::Done => break,
            }
        }

        writer.flush()?;

        let summary = self.converter.summary();
        log::info!(
            "Wrote {} records from {} replicates. Ignored {} other lines.",
            summary.mutations,
            summary.replicates,
            summary.ignored,
        );

        if summary.replicates == 0 {
            log::warn!("Found no replicates. Was scrm run with '-transpose-segsites'?");
        }

        Ok(())
    }
}
