//! # Bytecode writer
//!
//! Serializes an **optimized** [`TemplateNode`] into the little-endian,
//! opcode-prefixed record stream of spec.md §4.3. A `None` root writes
//! zero bytes (scenario (a)). A `None` tag content writes an explicit
//! empty-`Literal` record instead, since a `Tag` always needs exactly
//! one nested content record to stay readable.

use quill_core::{Modifier, TemplateNode};

use crate::error::{InternalCompilerError, Result};
use crate::opcode::Opcode;

/// Serialize `node` into a fresh byte vector.
pub fn write(node: &TemplateNode) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    write_node(node, &mut out)?;
    Ok(out)
}

/// Serialize `node`, appending to `out`.
pub fn write_node(node: &TemplateNode, out: &mut Vec<u8>) -> Result<()> {
    match node {
        TemplateNode::None => Ok(()),
        TemplateNode::Literal(s) => write_literal(s, out),
        TemplateNode::Tag {
            name,
            modifiers,
            content,
        } => write_tag(name, modifiers, content, out),
        TemplateNode::List(children) => write_list(children, out),
        TemplateNode::ContextValue(path) => write_context_value(path, out),
        TemplateNode::Lazy(_) => {
            unreachable!("the optimizer resolves every Lazy node before the writer runs")
        }
    }
}

fn write_literal(s: &str, out: &mut Vec<u8>) -> Result<()> {
    out.push(Opcode::Literal.to_u8());
    write_length_prefixed(s.as_bytes(), out);
    Ok(())
}

fn write_tag(
    name: &str,
    modifiers: &[Modifier],
    content: &TemplateNode,
    out: &mut Vec<u8>,
) -> Result<()> {
    out.push(Opcode::Tag.to_u8());
    write_length_prefixed(name.as_bytes(), out);
    write_count(modifiers.len(), out)?;
    for modifier in modifiers {
        write_length_prefixed(modifier.name().as_bytes(), out);
        write_length_prefixed(modifier.value().as_bytes(), out);
    }
    // A Tag's content is always a nested node record (spec.md §4.3); unlike
    // at the top level, `None` can't write zero bytes here or the renderer
    // would read the following sibling as this tag's body. The optimizer
    // never hands the writer a Tag{None} (it folds to an open/close
    // Literal), but `write`/`write_node` are public, so guard it directly.
    match content {
        TemplateNode::None => write_literal("", out),
        other => write_node(other, out),
    }
}

fn write_list(children: &[TemplateNode], out: &mut Vec<u8>) -> Result<()> {
    out.push(Opcode::List.to_u8());
    write_count(children.len(), out)?;
    for child in children {
        write_node(child, out)?;
    }
    Ok(())
}

fn write_context_value(path: &[String], out: &mut Vec<u8>) -> Result<()> {
    out.push(Opcode::ContextValue.to_u8());
    write_count(path.len(), out)?;
    for key in path {
        write_length_prefixed(key.as_bytes(), out);
    }
    Ok(())
}

fn write_length_prefixed(bytes: &[u8], out: &mut Vec<u8>) {
    out.extend_from_slice(&(bytes.len() as u32).to_le_bytes());
    out.extend_from_slice(bytes);
}

fn write_count(count: usize, out: &mut Vec<u8>) -> Result<()> {
    let byte: u8 = count
        .try_into()
        .map_err(|_| InternalCompilerError::CountOverflow { count })?;
    out.push(byte);
    Ok(())
}
