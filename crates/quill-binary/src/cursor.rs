//! # ByteCursor
//!
//! The read-only byte cursor contract from spec.md §4.4: a non-owning,
//! bounds-checked forward reader over a borrowed byte region, with typed
//! little-endian integer reads, bounds-checked slice extraction (as a
//! sub-cursor over the same memory), and absolute seek. A failed read
//! never advances the cursor.

use crate::error::{InternalCompilerError, Result};

/// A bounds-checked forward reader over `&'a [u8]`. Owns no memory; the
/// borrowed region must outlive the cursor.
#[derive(Debug, Clone, Copy)]
pub struct ByteCursor<'a> {
    bytes: &'a [u8],
    position: usize,
}

impl<'a> ByteCursor<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        ByteCursor { bytes, position: 0 }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn remaining(&self) -> usize {
        self.bytes.len() - self.position
    }

    /// Move the cursor to an absolute position, clamped to the region's
    /// length.
    pub fn seek(&mut self, position: usize) {
        self.position = position.min(self.bytes.len());
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        let byte = *self
            .bytes
            .get(self.position)
            .ok_or(InternalCompilerError::IntegerUnderflow)?;
        self.position += 1;
        Ok(byte)
    }

    pub fn read_u32_le(&mut self) -> Result<u32> {
        let slice = self.read_slice(4)?;
        let mut buf = [0u8; 4];
        buf.copy_from_slice(slice);
        Ok(u32::from_le_bytes(buf))
    }

    /// Extract `len` bytes, advancing the cursor past them. Leaves the
    /// cursor unchanged on failure.
    pub fn read_slice(&mut self, len: usize) -> Result<&'a [u8]> {
        let end = self
            .position
            .checked_add(len)
            .ok_or(InternalCompilerError::IntegerUnderflow)?;
        if end > self.bytes.len() {
            return Err(InternalCompilerError::UnexpectedEof {
                wanted: len,
                available: self.remaining(),
            });
        }
        let slice = &self.bytes[self.position..end];
        self.position = end;
        Ok(slice)
    }

    /// Read a length-prefixed UTF-8 string: `u32` little-endian length
    /// followed by that many bytes.
    ///
    /// The bytecode this cursor reads is always produced by
    /// `quill-binary::writer` from a Rust `String`/`&str`, so the bytes
    /// are valid UTF-8 by construction; this is an internal invariant,
    /// not a new failure mode spec.md's error set omitted.
    pub fn read_str(&mut self) -> Result<&'a str> {
        let len = self.read_u32_le()? as usize;
        let bytes = self.read_slice(len)?;
        Ok(std::str::from_utf8(bytes).expect("writer emits only valid UTF-8 literal payloads"))
    }

    /// Bounds-checked slice extraction as a sub-cursor over the same
    /// borrowed memory (spec.md §4.4's cursor contract).
    pub fn read_cursor(&mut self, len: usize) -> Result<ByteCursor<'a>> {
        Ok(ByteCursor::new(self.read_slice(len)?))
    }
}
