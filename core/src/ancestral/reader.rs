//! Sites VCF reader.

use std::io;

use noodles_vcf::{self as vcf, variant::RecordBuf};

use crate::input::ReadStatus;

use super::{classify, Outcome};

pub mod builder;
pub use builder::{Builder, DynReader};

/// A reader of ancestral allele annotated sites.
pub struct Reader<R> {
    inner: vcf::io::Reader<R>,
    header: vcf::Header,
    buf: RecordBuf,
}

impl<R> Reader<R>
where
    R: io::BufRead,
{
    /// Creates a new reader, reading the VCF header.
    pub fn new(inner: R) -> io::Result<Self> {
        let mut inner = vcf::io::Reader::new(inner);

        let header = inner.read_header()?;

        Ok(Self {
            inner,
            header,
            buf: RecordBuf::default(),
        })
    }

    /// Returns the contig of the last read site.
    pub fn current_contig(&self) -> &str {
        self.buf.reference_sequence_name()
    }

    /// Returns the position of the last read site.
    pub fn current_position(&self) -> usize {
        self.buf.variant_start().map(usize::from).unwrap_or(0)
    }

    fn read_record(&mut self) -> ReadStatus<()> {
        match self.inner.read_record_buf(&self.header, &mut self.buf) {
            Ok(0) => ReadStatus::Done,
            Ok(_) => ReadStatus::Read(()),
            Err(e) => ReadStatus::Error(e),
        }
    }

    /// Reads and classifies the next site.
    pub fn read_site(&mut self) -> ReadStatus<Outcome> {
        self.read_record().map(|()| classify(&self.buf))
    }
}
