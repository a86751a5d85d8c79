//! Writing of simulated variants in VCF.
//!
//! The simulator only tracks whether an allele is ancestral or derived, so all records are
//! written as biallelic SNPs with fixed reference and alternative bases, and a single phased
//! genotype field per individual.

use std::io;

pub mod header;
pub use header::Header;

pub mod record;
pub use record::Record;

/// Writes a VCF header to a writer.
pub fn write_header<W>(writer: &mut W, header: &Header) -> io::Result<()>
where
    W: io::Write,
{
    writeln!(writer, "{header}")
}

/// Writes a VCF record to a writer.
pub fn write_record<W>(writer: &mut W, record: &Record<'_>) -> io::Result<()>
where
    W: io::Write,
{
    writeln!(writer, "{record}")
}
