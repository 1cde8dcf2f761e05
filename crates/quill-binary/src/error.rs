//! # InternalCompilerError
//!
//! The single error kind spec.md §7 calls for, raised by the cursor, the
//! writer, and (via `quill-render`) the renderer alike.

use thiserror::Error;

/// The one error kind produced anywhere in the compile/render pipeline.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InternalCompilerError {
    /// An opcode byte did not match `0x01`..`0x04`.
    #[error("unknown opcode byte 0x{byte:02x}")]
    UnknownOpcode { byte: u8 },

    /// A length-prefixed read declared more bytes than remained.
    #[error("unexpected end of bytecode: wanted {wanted} bytes, {available} remaining")]
    UnexpectedEof { wanted: usize, available: usize },

    /// A `u32`/`u8` integer read ran past the end of the buffer.
    #[error("integer read underflowed the bytecode buffer")]
    IntegerUnderflow,

    /// A modifier or child count exceeded the single-byte (255) cap.
    #[error("count {count} exceeds the 255-entry bytecode limit")]
    CountOverflow { count: usize },
}

pub type Result<T> = std::result::Result<T, InternalCompilerError>;
