//! Raw byte sources.
//!
//! An [`EntropySource`] is an ordered, non-restartable stream of uniform
//! bytes. Nothing in the crate rewinds or replays a source: once a byte has
//! been handed out it is gone, whether it was used or rejected.

use std::fs::File;
use std::io::{ErrorKind, Read};

use crate::error::{Error, Result};
use crate::os::sys_random;

/// A stream of uniformly distributed bytes.
pub trait EntropySource {
    /// Fills `buf` completely or fails.
    ///
    /// A source that cannot supply `buf.len()` more bytes must return
    /// [`Error::EntropyExhausted`] (or [`Error::Io`] for an underlying
    /// failure); it must never hand out a partially filled buffer as success.
    fn fill_bytes(&mut self, buf: &mut [u8]) -> Result<()>;

    /// Fills a prefix of `buf` and returns its length.
    ///
    /// A short count means the stream has fewer bytes left than requested;
    /// `Ok(0)` means it has none. The bytes returned are never lost. Sources
    /// that are never short keep the default, which fills the whole buffer.
    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<usize> {
        self.fill_bytes(buf)?;
        Ok(buf.len())
    }
}

impl<S: EntropySource + ?Sized> EntropySource for &mut S {
    fn fill_bytes(&mut self, buf: &mut [u8]) -> Result<()> {
        (**self).fill_bytes(buf)
    }

    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<usize> {
        (**self).read_bytes(buf)
    }
}

impl<S: EntropySource + ?Sized> EntropySource for Box<S> {
    fn fill_bytes(&mut self, buf: &mut [u8]) -> Result<()> {
        (**self).fill_bytes(buf)
    }

    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<usize> {
        (**self).read_bytes(buf)
    }
}

/// Bytes straight from the operating system generator.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn fill_bytes(&mut self, buf: &mut [u8]) -> Result<()> {
        sys_random(buf).map_err(|err| {
            tracing::warn!(%err, "operating system entropy unavailable");
            Error::Io(err)
        })
    }
}

/// Adapts any [`Read`] implementation into an entropy source.
///
/// End of stream maps to [`Error::EntropyExhausted`] in [`fill_bytes`] and
/// to a short count in [`read_bytes`]; other read errors are passed through
/// as [`Error::Io`].
///
/// [`fill_bytes`]: EntropySource::fill_bytes
/// [`read_bytes`]: EntropySource::read_bytes
#[derive(Debug)]
pub struct ReaderSource<R> {
    reader: R,
}

impl<R: Read> ReaderSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl ReaderSource<File> {
    /// Opens the conventional random device.
    pub fn dev_urandom() -> Result<Self> {
        Ok(Self::new(File::open("/dev/urandom")?))
    }
}

impl<R: Read> EntropySource for ReaderSource<R> {
    fn fill_bytes(&mut self, buf: &mut [u8]) -> Result<()> {
        if self.read_bytes(buf)? < buf.len() {
            return Err(Error::EntropyExhausted);
        }
        Ok(())
    }

    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<usize> {
        let mut filled = 0;

        while filled < buf.len() {
            match self.reader.read(&mut buf[filled..]) {
                Ok(0) => {
                    tracing::debug!(filled, "entropy reader reached end of stream");
                    break;
                }
                Ok(read) => filled += read,
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => return Err(Error::Io(err)),
            }
        }

        Ok(filled)
    }
}
