//! # Renderer
//!
//! Walks a [`CompiledTemplate`]'s bytecode once per call and appends
//! HTML bytes to the caller's output buffer (spec.md §4.4). The cursor
//! is constructed fresh here — never stored on `CompiledTemplate` — so
//! concurrent renders of the same template never interleave cursor
//! state (spec.md §5).

use quill_binary::{ByteCursor, InternalCompilerError, Opcode};
use quill_core::TemplateContext;

use crate::compiled::CompiledTemplate;

/// Render `compiled` against `context`, appending to `output`.
///
/// The top-level walk stops cleanly at end-of-buffer (an empty template
/// renders zero bytes); a short read once inside a `Tag`'s content or a
/// `List`'s children is a malformed-stream error, since a well-formed
/// stream never runs out of bytes mid-record.
pub fn render(
    compiled: &CompiledTemplate,
    context: &TemplateContext,
    output: &mut String,
) -> Result<(), InternalCompilerError> {
    let mut cursor = ByteCursor::new(compiled.bytecode());
    tracing::trace!(bytes = compiled.bytecode().len(), "render start");
    while cursor.remaining() > 0 {
        render_one(&mut cursor, context, output)?;
    }
    Ok(())
}

fn render_one(
    cursor: &mut ByteCursor<'_>,
    context: &TemplateContext,
    output: &mut String,
) -> Result<(), InternalCompilerError> {
    let opcode = Opcode::try_from(cursor.read_u8()?)?;
    match opcode {
        Opcode::Literal => {
            output.push_str(cursor.read_str()?);
        }
        Opcode::Tag => {
            let name = cursor.read_str()?;
            let modifier_count = cursor.read_u8()?;
            output.push('<');
            output.push_str(name);
            for _ in 0..modifier_count {
                let key = cursor.read_str()?;
                let value = cursor.read_str()?;
                output.push(' ');
                output.push_str(key);
                output.push_str("=\"");
                output.push_str(value);
                output.push('"');
            }
            output.push('>');
            render_one(cursor, context, output)?;
            output.push_str("</");
            output.push_str(name);
            output.push('>');
        }
        Opcode::List => {
            let child_count = cursor.read_u8()?;
            for _ in 0..child_count {
                render_one(cursor, context, output)?;
            }
        }
        Opcode::ContextValue => render_context_value(cursor, context, output)?,
    }
    Ok(())
}

/// Per spec.md §9's resolution: look up only the first path key; deeper
/// keys are consumed from the stream (to keep the cursor aligned) but
/// carry no rendering semantics.
fn render_context_value(
    cursor: &mut ByteCursor<'_>,
    context: &TemplateContext,
    output: &mut String,
) -> Result<(), InternalCompilerError> {
    let path_count = cursor.read_u8()?;
    let mut first_key: Option<&str> = None;
    for i in 0..path_count {
        let key = cursor.read_str()?;
        if i == 0 {
            first_key = Some(key);
        }
    }
    if let Some(key) = first_key {
        if let Some(s) = context.get(key).as_render_str() {
            output.push_str(s);
        }
    }
    Ok(())
}
