//! # TemplateNode: the in-memory template tree
//!
//! `TemplateNode` is the algebraic tree built by the DSL in [`crate::elements`],
//! rewritten by [`crate::optimizer`], and serialized by `quill-binary::writer`.
//! It carries no rendering logic of its own — see spec.md §3/§4.1.

/// A node in an unoptimized or optimized template tree.
///
/// `List` is boxed indirectly through `Vec<TemplateNode>`; `Tag`'s content
/// is boxed explicitly since a single recursive field can't otherwise size.
///
/// `Debug`/`PartialEq` are hand-written because `Lazy` carries a
/// `FnOnce` closure that is neither comparable nor printable; a `Lazy`
/// node never equals anything (including another `Lazy`) and prints as
/// an opaque placeholder. This never affects optimized trees, where
/// `Lazy` cannot appear.
pub enum TemplateNode {
    /// Contributes nothing to output.
    None,
    /// A UTF-8 byte run emitted verbatim.
    Literal(String),
    /// Render each child in order.
    List(Vec<TemplateNode>),
    /// `<name mods…>content</name>`.
    Tag {
        name: &'static str,
        modifiers: Vec<Modifier>,
        content: Box<TemplateNode>,
    },
    /// Runtime substitution from [`crate::context::TemplateContext`].
    ///
    /// Reserved/implementation-defined per spec.md §9 — see
    /// `quill-render::renderer` for the render-time resolution this
    /// workspace adopted.
    ContextValue(Vec<String>),
    /// A deferred producer, resolved to a concrete node during optimization.
    /// Never appears in an optimized tree.
    Lazy(Box<dyn FnOnce() -> TemplateNode>),
}

impl std::fmt::Debug for TemplateNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TemplateNode::None => write!(f, "None"),
            TemplateNode::Literal(s) => f.debug_tuple("Literal").field(s).finish(),
            TemplateNode::List(children) => f.debug_tuple("List").field(children).finish(),
            TemplateNode::Tag {
                name,
                modifiers,
                content,
            } => f
                .debug_struct("Tag")
                .field("name", name)
                .field("modifiers", modifiers)
                .field("content", content)
                .finish(),
            TemplateNode::ContextValue(path) => f.debug_tuple("ContextValue").field(path).finish(),
            TemplateNode::Lazy(_) => write!(f, "Lazy(..)"),
        }
    }
}

impl PartialEq for TemplateNode {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (TemplateNode::None, TemplateNode::None) => true,
            (TemplateNode::Literal(a), TemplateNode::Literal(b)) => a == b,
            (TemplateNode::List(a), TemplateNode::List(b)) => a == b,
            (
                TemplateNode::Tag {
                    name: n1,
                    modifiers: m1,
                    content: c1,
                },
                TemplateNode::Tag {
                    name: n2,
                    modifiers: m2,
                    content: c2,
                },
            ) => n1 == n2 && m1 == m2 && c1 == c2,
            (TemplateNode::ContextValue(a), TemplateNode::ContextValue(b)) => a == b,
            // A Lazy node is never considered equal, even to another Lazy:
            // its identity is the closure, which carries no comparable state.
            (TemplateNode::Lazy(_), _) | (_, TemplateNode::Lazy(_)) => false,
            _ => false,
        }
    }
}

impl TemplateNode {
    /// True for the variants the optimizer guarantees never reach the
    /// writer: `Lazy` is always resolved, and a `List` containing `None`
    /// is only ever produced mid-optimization.
    pub fn is_resolved_shape(&self) -> bool {
        !matches!(self, TemplateNode::Lazy(_))
    }
}

/// An attribute attached to a [`TemplateNode::Tag`].
///
/// Currently the only modifier kind (spec.md §3). Values are not escaped;
/// callers provide pre-quoted-safe content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modifier {
    Attribute { name: &'static str, value: String },
}

impl Modifier {
    pub fn attribute(name: &'static str, value: impl Into<String>) -> Self {
        Modifier::Attribute {
            name,
            value: value.into(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Modifier::Attribute { name, .. } => name,
        }
    }

    pub fn value(&self) -> &str {
        match self {
            Modifier::Attribute { value, .. } => value,
        }
    }
}
