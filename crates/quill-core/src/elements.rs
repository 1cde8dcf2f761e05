//! # Typed element library
//!
//! The user-facing element types from spec.md §4.1: `Root`, `Head`,
//! `Body`, `Title`, `P`, `A`, plus the `Modified<P>` attribute-chain
//! wrapper and the `.html()` body-tag eraser.

use std::marker::PhantomData;

use crate::content::Content;
use crate::node::{Modifier, TemplateNode};
use crate::tags::{BodyTag, HeadTag, ParentTag, RootTag};

/// A tag-bearing value that can accumulate [`Modifier`]s through
/// `.attr(...)`, producing a [`Modified`] wrapper each call (spec.md
/// §4.1's "modification chain"). `.class`/`.id`/`.href` are attribute
/// sugar built on `.attr`.
pub trait TagContent<P: ParentTag>: Content<P> {
    fn tag_name(&self) -> &'static str;
    fn into_parts(self) -> (Vec<Modifier>, TemplateNode);

    fn attr(self, name: &'static str, value: impl Into<String>) -> Modified<P> {
        let tag_name = self.tag_name();
        let (mut modifiers, content) = self.into_parts();
        modifiers.push(Modifier::attribute(name, value));
        Modified {
            tag_name,
            modifiers,
            content,
            _parent: PhantomData,
        }
    }

    fn class(self, value: impl Into<String>) -> Modified<P> {
        self.attr("class", value)
    }

    fn id(self, value: impl Into<String>) -> Modified<P> {
        self.attr("id", value)
    }

    fn href(self, value: impl Into<String>) -> Modified<P> {
        self.attr("href", value)
    }
}

/// The result of one or more `.attr(...)` calls on a tag-bearing element.
/// Carries the base tag name, the accumulated modifier list (order
/// preserved), and the original content — itself composable wherever the
/// base element was (spec.md §4.1).
pub struct Modified<P: ParentTag> {
    tag_name: &'static str,
    modifiers: Vec<Modifier>,
    content: TemplateNode,
    _parent: PhantomData<P>,
}

impl<P: ParentTag> Content<P> for Modified<P> {
    fn into_node(self) -> TemplateNode {
        TemplateNode::Tag {
            name: self.tag_name,
            modifiers: self.modifiers,
            content: Box::new(self.content),
        }
    }
}

impl<P: ParentTag> TagContent<P> for Modified<P> {
    fn tag_name(&self) -> &'static str {
        self.tag_name
    }

    fn into_parts(self) -> (Vec<Modifier>, TemplateNode) {
        (self.modifiers, self.content)
    }
}

/// A type-erased body-tag value, produced by `.html()`.
pub struct AnyBodyTag(TemplateNode);

impl Content<BodyTag> for AnyBodyTag {
    fn into_node(self) -> TemplateNode {
        self.0
    }
}

/// Blanket-implemented for every body-tag value: exposes `.html()`,
/// spec.md §4.1's uniform body-tag traversal view.
pub trait BodyElement: Content<BodyTag> {
    fn html(self) -> AnyBodyTag {
        AnyBodyTag(self.into_node())
    }
}

impl<T: Content<BodyTag>> BodyElement for T {}

/// The document root. Not itself a tag: its children (`Head`/`Body`)
/// each emit their own tag; `Root` contributes no wrapping element,
/// matching spec.md's end-to-end scenarios (no `<html>` wrapper).
pub struct Root(TemplateNode);

impl Root {
    pub fn new(children: impl Content<RootTag>) -> Self {
        Root(children.into_node())
    }

    pub fn empty() -> Self {
        Root(TemplateNode::None)
    }

    pub fn into_node(self) -> TemplateNode {
        self.0
    }
}

macro_rules! define_container_tag {
    ($Type:ident, $tag_name:literal, $child_parent:ty, $parent:ty) => {
        #[doc = concat!("`<", $tag_name, ">` — see spec.md §4.1.")]
        pub struct $Type {
            modifiers: Vec<Modifier>,
            content: TemplateNode,
        }

        impl $Type {
            pub fn new(children: impl Content<$child_parent>) -> Self {
                $Type {
                    modifiers: Vec::new(),
                    content: children.into_node(),
                }
            }

            pub fn empty() -> Self {
                $Type {
                    modifiers: Vec::new(),
                    content: TemplateNode::None,
                }
            }
        }

        impl Content<$parent> for $Type {
            fn into_node(self) -> TemplateNode {
                TemplateNode::Tag {
                    name: $tag_name,
                    modifiers: self.modifiers,
                    content: Box::new(self.content),
                }
            }
        }

        impl TagContent<$parent> for $Type {
            fn tag_name(&self) -> &'static str {
                $tag_name
            }

            fn into_parts(self) -> (Vec<Modifier>, TemplateNode) {
                (self.modifiers, self.content)
            }
        }
    };
}

macro_rules! define_text_tag {
    ($Type:ident, $tag_name:literal, $parent:ty) => {
        #[doc = concat!("`<", $tag_name, ">` — see spec.md §4.1.")]
        pub struct $Type {
            modifiers: Vec<Modifier>,
            content: TemplateNode,
        }

        impl $Type {
            pub fn new(text: impl Into<String>) -> Self {
                $Type {
                    modifiers: Vec::new(),
                    content: TemplateNode::Literal(text.into()),
                }
            }
        }

        impl Content<$parent> for $Type {
            fn into_node(self) -> TemplateNode {
                TemplateNode::Tag {
                    name: $tag_name,
                    modifiers: self.modifiers,
                    content: Box::new(self.content),
                }
            }
        }

        impl TagContent<$parent> for $Type {
            fn tag_name(&self) -> &'static str {
                $tag_name
            }

            fn into_parts(self) -> (Vec<Modifier>, TemplateNode) {
                (self.modifiers, self.content)
            }
        }
    };
}

define_container_tag!(Head, "head", HeadTag, RootTag);
define_container_tag!(Body, "body", BodyTag, RootTag);
define_text_tag!(Title, "title", HeadTag);
define_text_tag!(P, "p", BodyTag);
define_text_tag!(A, "a", BodyTag);
