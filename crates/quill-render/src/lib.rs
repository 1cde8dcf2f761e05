//! Compile and render entry points for the quill templating engine.
//!
//! `compile`/`compile_template` turn a [`quill_core::Root`] (or a
//! zero-argument [`Template`] type) into an immutable [`CompiledTemplate`];
//! `render` walks its bytecode, appending HTML bytes to a caller-owned
//! `String` against a [`quill_core::TemplateContext`].

pub mod compiled;
pub mod renderer;

pub use compiled::{compile, compile_template, CompiledTemplate, Template};
pub use quill_binary::InternalCompilerError;
pub use quill_core::{TemplateContext, TemplateValue};
pub use renderer::render;
