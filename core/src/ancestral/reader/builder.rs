//! Sites reader builder.

use std::io;

use flate2::bufread::MultiGzDecoder;

use crate::Input;

use super::Reader;

/// A sites reader over any, possibly decompressed, input.
pub type DynReader = Reader<Box<dyn io::BufRead>>;

/// A builder of sites readers.
#[derive(Debug, Default)]
pub struct Builder {
    input: Option<Input>,
    compression_method: Option<Option<CompressionMethod>>,
}

impl Builder {
    /// Builds a reader from the input, or stdin if unset.
    pub fn build(self) -> io::Result<DynReader> {
        let reader = self.input.as_ref().unwrap_or(&Input::Stdin).open()?;

        self.build_from_reader(reader)
    }

    /// Builds a reader from an existing reader.
    ///
    /// Unless set, the compression method is detected from the start of the stream.
    pub fn build_from_reader<R>(self, mut reader: R) -> io::Result<DynReader>
    where
        R: 'static + io::BufRead,
    {
        let compression_method = match self.compression_method {
            Some(compression_method) => compression_method,
            None => CompressionMethod::detect(&mut reader)?,
        };

        let inner: Box<dyn io::BufRead> = match compression_method {
            Some(CompressionMethod::Gzip) => {
                Box::new(io::BufReader::new(MultiGzDecoder::new(reader)))
            }
            None => Box::new(reader),
        };

        Reader::new(inner)
    }

    /// Sets the compression method, or `None` for uncompressed input.
    pub fn set_compression_method(mut self, compression_method: Option<CompressionMethod>) -> Self {
        self.compression_method = Some(compression_method);
        self
    }

    /// Sets the input.
    pub fn set_input(mut self, input: Input) -> Self {
        self.input = Some(input);
        self
    }
}

/// A compression method for sites VCFs.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CompressionMethod {
    /// Gzip, including BGZF.
    Gzip,
}

impl CompressionMethod {
    fn detect<R>(reader: &mut R) -> io::Result<Option<Self>>
    where
        R: io::BufRead,
    {
        const GZIP_MAGIC_NUMBER: [u8; 2] = [0x1f, 0x8b];

        let src = reader.fill_buf()?;

        if let Some(buf) = src.get(..GZIP_MAGIC_NUMBER.len()) {
            if buf == GZIP_MAGIC_NUMBER {
                return Ok(Some(CompressionMethod::Gzip));
            }
        }

        Ok(None)
    }
}
