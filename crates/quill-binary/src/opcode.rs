//! # Opcode table
//!
//! The four record kinds the bytecode can contain (spec.md §4.3).
//! `0x00` (`None`) is reserved: the optimizer eliminates `None` before
//! the writer ever runs, but [`Opcode::try_from`] still rejects it (and
//! any other unknown byte) deterministically.

use crate::error::InternalCompilerError;

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opcode {
    Tag = 0x01,
    Literal = 0x02,
    List = 0x03,
    ContextValue = 0x04,
}

impl Opcode {
    pub fn to_u8(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Opcode {
    type Error = InternalCompilerError;

    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        match byte {
            0x01 => Ok(Opcode::Tag),
            0x02 => Ok(Opcode::Literal),
            0x03 => Ok(Opcode::List),
            0x04 => Ok(Opcode::ContextValue),
            other => Err(InternalCompilerError::UnknownOpcode { byte: other }),
        }
    }
}
