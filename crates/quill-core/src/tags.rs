//! # Parent-element tags
//!
//! A closed set of phantom marker types standing in for the "parent
//! element" witnesses spec.md §4.1/§9 describes. Every builder-DSL type
//! implements [`crate::content::Content`] for the parent tag(s) it is
//! valid under; the Rust compiler rejects any other composition, which
//! is the "strongest static mechanism" spec.md asks for in place of the
//! source's associated-type witnesses.

mod sealed {
    pub trait Sealed {}
}

/// A parent context a piece of content can be composed under.
///
/// Sealed: the only parent tags are [`RootTag`], [`HeadTag`], and
/// [`BodyTag`] (spec.md's closed element set).
pub trait ParentTag: sealed::Sealed + 'static {}

/// The document root: parent of [`HeadTag`] and [`BodyTag`] content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RootTag;

/// Parent of `<title>` and other head-only elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadTag;

/// Parent of paragraph/anchor/etc. body elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BodyTag;

impl sealed::Sealed for RootTag {}
impl sealed::Sealed for HeadTag {}
impl sealed::Sealed for BodyTag {}

impl ParentTag for RootTag {}
impl ParentTag for HeadTag {}
impl ParentTag for BodyTag {}
