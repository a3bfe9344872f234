//! Fixed-width byte reads over a decode buffer

use crate::{DeckError, Result};

/// Byte reader over a fixed buffer
///
/// Advances through the buffer by fixed-width fields. Reading past the end
/// fails with `TruncatedInput` carrying the offset of the failed read; the
/// cursor is not advanced on failure.
pub struct ByteCursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> ByteCursor<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        ByteCursor { buf, pos: 0 }
    }

    /// Bytes not yet consumed
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Current offset from the start of the buffer
    pub fn position(&self) -> usize {
        self.pos
    }

    fn take(&mut self, width: usize) -> Result<&'a [u8]> {
        if self.remaining() < width {
            return Err(DeckError::TruncatedInput { offset: self.pos });
        }
        let field = &self.buf[self.pos..self.pos + width];
        self.pos += width;
        Ok(field)
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.take(1)?[0])
    }

    pub fn read_u32_le(&mut self) -> Result<u32> {
        let bytes = self.take(4)?;
        Ok(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }
}
