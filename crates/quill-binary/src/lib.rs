//! Bytecode cursor, opcode table, and writer for the quill template
//! bytecode (spec.md §4.3/§4.4). `quill-render` depends on this crate
//! for both compiling (`writer::write`) and rendering (`cursor::ByteCursor`).

pub mod cursor;
pub mod error;
pub mod opcode;
pub mod writer;

pub use cursor::ByteCursor;
pub use error::{InternalCompilerError, Result};
pub use opcode::Opcode;
pub use writer::{write, write_node};
