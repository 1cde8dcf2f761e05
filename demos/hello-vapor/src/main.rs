//! Compiles a small template once, renders it against two different
//! contexts, and prints the result — the whole `quill` pipeline
//! (build → optimize → bytecode → render) end to end.

use quill_core::{lazy, Body, BodyTag, Head, Root, TemplateContext, TemplateNode, Title, P};
use quill_render::{compile, render};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let root = Root::new((
        Head::new(Title::new("Hello, Vapor!")),
        Body::new((
            P::new("Hello, "),
            lazy::<BodyTag>(|| TemplateNode::ContextValue(vec!["name".to_string()])),
            P::new("!"),
        )),
    ));

    let compiled = compile(root).expect("template has no dynamic tag names or oversized lists");
    tracing::info!(bytes = compiled.bytecode().len(), "template compiled");

    for name in ["World", "Vapor"] {
        let mut context = TemplateContext::new();
        context.set("name", name);

        let mut output = String::new();
        render(&compiled, &context, &mut output).expect("bytecode was produced by compile()");
        println!("{output}");
    }
}
