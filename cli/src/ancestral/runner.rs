use std::io;

use anyhow::Error;

use scrm2vcf_core::{
    ancestral::{reader::DynReader, Outcome, Skipped},
    input::ReadStatus,
};

pub struct Runner {
    reader: DynReader,
    skips: Skips,
}

impl Runner {
    pub fn new(reader: DynReader) -> Self {
        Self {
            reader,
            skips: Skips::default(),
        }
    }

    pub fn run<W>(&mut self, writer: &mut W) -> Result<(), Error>
    where
        W: io::Write,
    {
        let mut written = 0;

        loop {
            match self.reader.read_site() {
                ReadStatus::Read(Outcome::Row(row)) => {
                    writeln!(writer, "{row}")?;
                    written += 1;
                }
                ReadStatus::Read(Outcome::Skipped(skipped)) => {
                    self.skips.skip_once(&self.reader, skipped)
                }
                ReadStatus::Read(Outcome::Error(e)) => Err(e)?,
                ReadStatus::Error(e) => Err(e)?,
                ReadStatus::Done => break,
            }
        }

        writer.flush()?;

        log::info!("Wrote {written} sites.");
        self.skips.summarize();

        Ok(())
    }
}

#[derive(Clone, Debug, Default)]
struct Skips {
    counts: [usize; Skipped::N],
}

impl Skips {
    pub fn count(&self, skipped: Skipped) -> usize {
        self.counts[skipped as u8 as usize]
    }

    pub fn count_mut(&mut self, skipped: Skipped) -> &mut usize {
        &mut self.counts[skipped as u8 as usize]
    }

    pub fn skip_once(&mut self, reader: &DynReader, skipped: Skipped) {
        if self.count(skipped) == 0 {
            let contig = reader.current_contig();
            let position = reader.current_position();
            let reason = skipped.reason();

            log::warn!(
                "Skipping site '{contig}:{position}' due to {reason}. \
                This will be shown only once, with a summary at the end."
            );
        }

        *self.count_mut(skipped) += 1;
    }

    pub fn summarize(&self) {
        for skipped in Skipped::VARIANTS {
            let count = self.count(skipped);

            if count > 0 {
                let reason = skipped.reason();

                log::warn!("Skipped {count} sites due to {reason}.");
            }
        }
    }
}
