//! Typed builder DSL and tree optimizer for the Vapor templating engine.
//!
//! This crate owns the in-memory representation (`TemplateNode`), the
//! parent-tag-checked builder DSL (`tags`/`content`/`elements`), the
//! render-time key/value table (`context`), and the bottom-up optimizer
//! that prepares a tree for bytecode compilation (`optimizer`).
//! Compiling to bytecode and rendering live in `quill-binary` and
//! `quill-render`, which depend on this crate.

pub mod content;
pub mod context;
pub mod elements;
pub mod naive;
pub mod node;
pub mod optimizer;
pub mod tags;

pub use content::{lazy, AnyHTML, Content, Either, Lazy};
pub use context::{TemplateContext, TemplateValue};
pub use elements::{AnyBodyTag, Body, BodyElement, Head, Modified, Root, TagContent, Title, A, P};
pub use node::{Modifier, TemplateNode};
pub use optimizer::optimize;
pub use tags::{BodyTag, HeadTag, ParentTag, RootTag};
