//! # Reference renderer
//!
//! A direct, unoptimized walk of a [`TemplateNode`] tree, implementing
//! the same render rules as `quill-render::renderer` but operating on
//! the tree itself rather than on compiled bytecode. Used by conformance
//! tests to check that optimizing and compiling a tree never changes
//! what it renders to (spec.md §8).
//!
//! Not part of the production render path: real templates are compiled
//! to bytecode first (see `quill-binary`/`quill-render`).

use crate::context::TemplateContext;
use crate::node::TemplateNode;

/// Render `node` directly, resolving any remaining `Lazy` thunks and
/// `ContextValue` lookups against `context` as it goes.
pub fn render_naive(node: TemplateNode, context: &TemplateContext, out: &mut String) {
    match node {
        TemplateNode::None => {}
        TemplateNode::Literal(s) => out.push_str(&s),
        TemplateNode::List(children) => {
            for child in children {
                render_naive(child, context, out);
            }
        }
        TemplateNode::Tag {
            name,
            modifiers,
            content,
        } => {
            out.push('<');
            out.push_str(name);
            for modifier in &modifiers {
                out.push(' ');
                out.push_str(modifier.name());
                out.push_str("=\"");
                out.push_str(modifier.value());
                out.push('"');
            }
            out.push('>');
            render_naive(*content, context, out);
            out.push_str("</");
            out.push_str(name);
            out.push('>');
        }
        TemplateNode::ContextValue(path) => {
            if let Some(first) = path.first() {
                if let Some(s) = context.get(first).as_render_str() {
                    out.push_str(s);
                }
            }
        }
        TemplateNode::Lazy(producer) => render_naive(producer(), context, out),
    }
}
