//! # Compiling a template tree to bytecode
//!
//! [`compile`] and [`compile_template`] are the two `compile` entry
//! points from spec.md §6: one from an already-built [`Root`], one from
//! a zero-argument [`Template`] type. Both optimize the tree
//! ([`quill_core::optimize`]) before handing it to
//! `quill_binary::writer::write`.

use quill_binary::{writer, InternalCompilerError};
use quill_core::{optimize, Root};

/// An immutable, owned bytecode region, constructed once and rendered
/// many times. Carries no cursor of its own — see `quill-render::renderer`
/// for the transient, per-render cursor (spec.md §5's recommended
/// redesign away from a cursor field mutated on every render).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledTemplate {
    bytecode: Vec<u8>,
}

impl CompiledTemplate {
    pub fn bytecode(&self) -> &[u8] {
        &self.bytecode
    }

    /// Build a `CompiledTemplate` from raw bytecode, bypassing
    /// `compile`. Used by `quill-render`'s own tests to exercise the
    /// renderer against hand-built or malformed streams directly.
    #[cfg(test)]
    pub(crate) fn from_bytecode_for_test(bytecode: Vec<u8>) -> Self {
        CompiledTemplate { bytecode }
    }
}

/// A zero-argument template type, built fresh for each `compile_template`
/// call (spec.md §6's `compile<T: Template>()`).
pub trait Template {
    fn build() -> Root;
}

/// Optimize and serialize `root` into a [`CompiledTemplate`].
pub fn compile(root: Root) -> Result<CompiledTemplate, InternalCompilerError> {
    let (optimized, _optimizable) = optimize(root.into_node());
    let bytecode = writer::write(&optimized)?;
    tracing::debug!(bytes = bytecode.len(), "compiled template");
    Ok(CompiledTemplate { bytecode })
}

/// Build `T::build()` and compile it.
pub fn compile_template<T: Template>() -> Result<CompiledTemplate, InternalCompilerError> {
    compile(T::build())
}
