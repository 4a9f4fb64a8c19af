//! Blocking little-endian reader over a seekable byte stream.

use std::io::{self, Read, Seek, SeekFrom};

use crate::error::BmpError;

pub(crate) struct ByteReader<R> {
    inner: R,
}

impl<R: Read + Seek> ByteReader<R> {
    pub(crate) fn new(inner: R) -> Self {
        Self { inner }
    }

    pub(crate) fn set_position(&mut self, pos: u64) -> Result<(), BmpError> {
        self.inner.seek(SeekFrom::Start(pos))?;
        Ok(())
    }

    /// Bytes left between the current position and the end of the stream.
    pub(crate) fn remaining(&mut self) -> Result<u64, BmpError> {
        let pos = self.inner.stream_position()?;
        let end = self.inner.seek(SeekFrom::End(0))?;
        self.inner.seek(SeekFrom::Start(pos))?;
        Ok(end.saturating_sub(pos))
    }

    /// Consume and discard `n` bytes. Running out of input is an error.
    pub(crate) fn skip(&mut self, n: usize) -> Result<(), BmpError> {
        if n == 0 {
            return Ok(());
        }
        let copied = io::copy(&mut (&mut self.inner).take(n as u64), &mut io::sink())?;
        if copied < n as u64 {
            return Err(BmpError::UnexpectedEof);
        }
        Ok(())
    }

    pub(crate) fn read_fixed_bytes<const N: usize>(&mut self) -> Result<[u8; N], BmpError> {
        let mut buf = [0u8; N];
        self.inner.read_exact(&mut buf)?;
        Ok(buf)
    }

    pub(crate) fn read_exact_bytes(&mut self, buf: &mut [u8]) -> Result<(), BmpError> {
        self.inner.read_exact(buf)?;
        Ok(())
    }
}
