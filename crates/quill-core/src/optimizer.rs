//! # Optimizer
//!
//! The bottom-up tree rewrite from spec.md §4.2: flattens nested `List`s,
//! concatenates adjacent static fragments into single `Literal`s,
//! resolves `Lazy` thunks, and tracks whether a subtree is entirely
//! context-independent ("optimizable").
//!
//! The standalone "fold a `Tag` into a `Literal`" rule and the "flatten
//! a `List`'s children" rule are, in this implementation, the same
//! code path: folding a bare `Tag` is exactly what folding a
//! single-element `List` containing that `Tag` produces, so
//! [`optimize`] reduces the `Tag` case to [`optimize_list`] over a
//! one-element vector rather than duplicating the accumulation logic.

use crate::node::{Modifier, TemplateNode};

/// Optimize `node`, returning the rewritten tree and whether the
/// resulting subtree is entirely free of [`TemplateNode::ContextValue`]
/// ("optimizable", per spec.md §4.2).
pub fn optimize(node: TemplateNode) -> (TemplateNode, bool) {
    match node {
        TemplateNode::None => (TemplateNode::None, true),
        TemplateNode::Literal(s) => (TemplateNode::Literal(s), true),
        TemplateNode::Lazy(f) => optimize(f()),
        TemplateNode::ContextValue(path) => (TemplateNode::ContextValue(path), false),
        tag @ TemplateNode::Tag { .. } => optimize_list(vec![tag]),
        TemplateNode::List(children) => optimize_list(children),
    }
}

/// Optimize a `List`'s children: flatten, fold, accumulate, and re-run
/// as many passes as the rewrite schedules (spec.md's "second pass"
/// re-entrancy). Termination follows the rule's own argument: each pass
/// strictly reduces the number of nested `List`/`Lazy` structures still
/// to be resolved.
fn optimize_list(mut children: Vec<TemplateNode>) -> (TemplateNode, bool) {
    loop {
        let (results, optimizable, needs_second_pass) = run_pass(children);
        if !needs_second_pass {
            return finalize(results, optimizable);
        }
        children = results;
    }
}

fn finalize(mut results: Vec<TemplateNode>, optimizable: bool) -> (TemplateNode, bool) {
    match results.len() {
        0 => (TemplateNode::None, true),
        1 => (results.pop().expect("len checked above"), optimizable),
        _ => (TemplateNode::List(results), optimizable),
    }
}

/// One left-to-right scan over `children`, threading a scratch string
/// accumulator. Returns the (possibly still-nested) result list, the
/// optimizable flag, and whether a further pass was scheduled.
fn run_pass(children: Vec<TemplateNode>) -> (Vec<TemplateNode>, bool, bool) {
    let mut results = Vec::new();
    let mut acc = String::new();
    let mut optimizable = true;
    let mut needs_second_pass = false;

    for child in children {
        match child {
            TemplateNode::None => {}

            TemplateNode::List(inner) => {
                flush(&mut acc, &mut results);
                let (inner_opt, inner_optimizable) = optimize_list(inner);
                if !inner_optimizable {
                    optimizable = false;
                }
                push_flattened(inner_opt, &mut results);
                needs_second_pass = true;
            }

            TemplateNode::Tag {
                name,
                modifiers,
                content,
            } => {
                let (content_opt, content_optimizable) = optimize(*content);
                write_open_tag(&mut acc, name, &modifiers);
                if content_optimizable {
                    match &content_opt {
                        TemplateNode::Literal(body) => {
                            acc.push_str(body);
                            write_close_tag(&mut acc, name);
                            continue;
                        }
                        TemplateNode::None => {
                            write_close_tag(&mut acc, name);
                            continue;
                        }
                        _ => {}
                    }
                }
                optimizable = false;
                flush(&mut acc, &mut results);
                if matches!(content_opt, TemplateNode::List(_)) {
                    push_flattened(content_opt, &mut results);
                    needs_second_pass = true;
                } else {
                    results.push(content_opt);
                }
                write_close_tag(&mut acc, name);
            }

            TemplateNode::Lazy(f) => {
                let (resolved, resolved_optimizable) = optimize(f());
                if !resolved_optimizable {
                    optimizable = false;
                }
                match resolved {
                    TemplateNode::Literal(s) => acc.push_str(&s),
                    TemplateNode::None => {}
                    TemplateNode::List(inner) => {
                        flush(&mut acc, &mut results);
                        results.extend(inner);
                        needs_second_pass = true;
                    }
                    other => {
                        flush(&mut acc, &mut results);
                        results.push(other);
                    }
                }
            }

            TemplateNode::Literal(s) => acc.push_str(&s),

            TemplateNode::ContextValue(path) => {
                flush(&mut acc, &mut results);
                results.push(TemplateNode::ContextValue(path));
                optimizable = false;
            }
        }
    }

    flush(&mut acc, &mut results);
    (results, optimizable, needs_second_pass)
}

fn flush(acc: &mut String, results: &mut Vec<TemplateNode>) {
    if !acc.is_empty() {
        results.push(TemplateNode::Literal(std::mem::take(acc)));
    }
}

fn push_flattened(node: TemplateNode, results: &mut Vec<TemplateNode>) {
    match node {
        TemplateNode::None => {}
        TemplateNode::List(grandchildren) => results.extend(grandchildren),
        other => results.push(other),
    }
}

fn write_open_tag(out: &mut String, name: &str, modifiers: &[Modifier]) {
    out.push('<');
    out.push_str(name);
    for modifier in modifiers {
        out.push(' ');
        out.push_str(modifier.name());
        out.push_str("=\"");
        out.push_str(modifier.value());
        out.push('"');
    }
    out.push('>');
}

fn write_close_tag(out: &mut String, name: &str) {
    out.push_str("</");
    out.push_str(name);
    out.push('>');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::naive::render_naive;
    use crate::TemplateContext;

    fn rendered(node: TemplateNode) -> String {
        let mut out = String::new();
        render_naive(node, &TemplateContext::new(), &mut out);
        out
    }

    #[test]
    fn none_is_trivially_optimizable() {
        assert_eq!(optimize(TemplateNode::None), (TemplateNode::None, true));
    }

    #[test]
    fn literal_is_unchanged() {
        let node = TemplateNode::Literal("hi".to_string());
        assert_eq!(
            optimize(node),
            (TemplateNode::Literal("hi".to_string()), true)
        );
    }

    #[test]
    fn context_value_is_not_optimizable() {
        let node = TemplateNode::ContextValue(vec!["x".to_string()]);
        let (opt, optimizable) = optimize(node);
        assert!(!optimizable);
        assert_eq!(opt, TemplateNode::ContextValue(vec!["x".to_string()]));
    }

    #[test]
    fn empty_content_tag_folds_to_open_close_literal() {
        let node = TemplateNode::Tag {
            name: "body",
            modifiers: vec![],
            content: Box::new(TemplateNode::None),
        };
        let (opt, optimizable) = optimize(node);
        assert!(optimizable);
        assert_eq!(opt, TemplateNode::Literal("<body></body>".to_string()));
    }

    #[test]
    fn fully_literal_tag_folds_to_single_literal() {
        let node = TemplateNode::Tag {
            name: "p",
            modifiers: vec![],
            content: Box::new(TemplateNode::Literal("hello".to_string())),
        };
        let (opt, optimizable) = optimize(node);
        assert!(optimizable);
        assert_eq!(opt, TemplateNode::Literal("<p>hello</p>".to_string()));
    }

    #[test]
    fn tag_with_context_value_content_does_not_fold() {
        let node = TemplateNode::Tag {
            name: "p",
            modifiers: vec![],
            content: Box::new(TemplateNode::ContextValue(vec!["name".to_string()])),
        };
        let (opt, optimizable) = optimize(node);
        assert!(!optimizable);
        assert!(matches!(opt, TemplateNode::List(_)));
    }

    #[test]
    fn mixed_static_content_collapses_to_one_literal() {
        // Root{ Body{ P{"a"}; "b"; P{"c"} } } -- scenario (e)
        let list = TemplateNode::List(vec![
            TemplateNode::Tag {
                name: "p",
                modifiers: vec![],
                content: Box::new(TemplateNode::Literal("a".to_string())),
            },
            TemplateNode::Literal("b".to_string()),
            TemplateNode::Tag {
                name: "p",
                modifiers: vec![],
                content: Box::new(TemplateNode::Literal("c".to_string())),
            },
        ]);
        let (opt, optimizable) = optimize(list);
        assert!(optimizable);
        assert_eq!(opt, TemplateNode::Literal("<p>a</p>b<p>c</p>".to_string()));
    }

    #[test]
    fn nested_list_flattens_adjacent_literals() {
        // scenario (f): a List whose child is List[Literal("x"), Literal("y")]
        let list = TemplateNode::List(vec![TemplateNode::List(vec![
            TemplateNode::Literal("x".to_string()),
            TemplateNode::Literal("y".to_string()),
        ])]);
        let (opt, optimizable) = optimize(list);
        assert!(optimizable);
        assert_eq!(opt, TemplateNode::Literal("xy".to_string()));
    }

    #[test]
    fn empty_list_becomes_none() {
        let (opt, optimizable) = optimize(TemplateNode::List(vec![]));
        assert!(optimizable);
        assert_eq!(opt, TemplateNode::None);
    }

    #[test]
    fn singleton_list_collapses_to_its_element() {
        let (opt, _) = optimize(TemplateNode::List(vec![TemplateNode::Literal(
            "solo".to_string(),
        )]));
        assert_eq!(opt, TemplateNode::Literal("solo".to_string()));
    }

    #[test]
    fn lazy_is_resolved_during_optimization() {
        let node = TemplateNode::Lazy(Box::new(|| TemplateNode::Literal("resolved".to_string())));
        let (opt, optimizable) = optimize(node);
        assert!(optimizable);
        assert_eq!(opt, TemplateNode::Literal("resolved".to_string()));
    }

    fn context_value_and_tail() -> TemplateNode {
        TemplateNode::List(vec![
            TemplateNode::Tag {
                name: "p",
                modifiers: vec![],
                content: Box::new(TemplateNode::ContextValue(vec!["n".to_string()])),
            },
            TemplateNode::Literal("tail".to_string()),
        ])
    }

    /// Deep-clones a resolved (post-optimization) tree. `TemplateNode`
    /// deliberately doesn't derive `Clone` (see its doc comment) since
    /// `Lazy` can't be cloned; an optimized tree never contains `Lazy`.
    fn clone_resolved(node: &TemplateNode) -> TemplateNode {
        match node {
            TemplateNode::None => TemplateNode::None,
            TemplateNode::Literal(s) => TemplateNode::Literal(s.clone()),
            TemplateNode::List(children) => {
                TemplateNode::List(children.iter().map(clone_resolved).collect())
            }
            TemplateNode::Tag {
                name,
                modifiers,
                content,
            } => TemplateNode::Tag {
                name,
                modifiers: modifiers.clone(),
                content: Box::new(clone_resolved(content)),
            },
            TemplateNode::ContextValue(path) => TemplateNode::ContextValue(path.clone()),
            TemplateNode::Lazy(_) => unreachable!("optimized trees never contain Lazy"),
        }
    }

    #[test]
    fn idempotent_on_already_optimized_tree() {
        // optimize(optimize(t)) must equal optimize(t) -- spec.md §8 invariant 3.
        let (once, once_optimizable) = optimize(context_value_and_tail());
        let once_copy = clone_resolved(&once);
        let (twice, twice_optimizable) = optimize(once);
        assert_eq!(twice, once_copy);
        assert_eq!(once_optimizable, twice_optimizable);
    }

    #[test]
    fn tag_with_mixed_content_is_a_fixed_point() {
        // Tag{p, content: (ContextValue("a"), "b")} must flatten and
        // coalesce across the tag boundary in a single optimize() call,
        // not just after a second, separate pass.
        let node = || TemplateNode::Tag {
            name: "p",
            modifiers: vec![],
            content: Box::new(TemplateNode::List(vec![
                TemplateNode::ContextValue(vec!["a".to_string()]),
                TemplateNode::Literal("b".to_string()),
            ])),
        };
        let (once, once_optimizable) = optimize(node());
        assert_eq!(
            once,
            TemplateNode::List(vec![
                TemplateNode::Literal("<p>".to_string()),
                TemplateNode::ContextValue(vec!["a".to_string()]),
                TemplateNode::Literal("b</p>".to_string()),
            ])
        );
        let once_copy = clone_resolved(&once);
        let (twice, twice_optimizable) = optimize(once);
        assert_eq!(twice, once_copy);
        assert_eq!(once_optimizable, twice_optimizable);
    }

    fn mixed_anchor_and_bold() -> TemplateNode {
        TemplateNode::List(vec![
            TemplateNode::Tag {
                name: "a",
                modifiers: vec![Modifier::attribute("href", "/x")],
                content: Box::new(TemplateNode::Literal("go".to_string())),
            },
            TemplateNode::List(vec![
                TemplateNode::Literal("mid".to_string()),
                TemplateNode::Tag {
                    name: "b",
                    modifiers: vec![],
                    content: Box::new(TemplateNode::Literal("bold".to_string())),
                },
            ]),
        ])
    }

    #[test]
    fn preserves_render_naive_output() {
        let before = rendered(mixed_anchor_and_bold());
        let (optimized, _) = optimize(mixed_anchor_and_bold());
        let after = rendered(optimized);
        assert_eq!(before, after);
    }
}
