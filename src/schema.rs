//! Static schema metadata for every EAD3 node type.
//!
//! Each node type declares its tag, its attributes in emission order, its
//! children with cardinality, and the kind of content it carries. The
//! declarations are generated alongside the node types themselves, so the
//! metadata and the codec can never disagree.

use std::sync::LazyLock;

use rustc_hash::FxHashMap;

/// How often a child may occur under its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cardinality {
    /// Exactly one (`1`).
    One,
    /// Zero or one (`0..1`).
    Optional,
    /// Any number (`0..n`).
    ZeroOrMore,
    /// At least one (`1..n`).
    OneOrMore,
}

impl Cardinality {
    /// True when the child must be present at least once.
    pub fn is_required(self) -> bool {
        matches!(self, Self::One | Self::OneOrMore)
    }

    /// True when the child may occur more than once.
    pub fn is_repeatable(self) -> bool {
        matches!(self, Self::ZeroOrMore | Self::OneOrMore)
    }
}

/// What an element holds between its start and end tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentKind {
    /// Character data, entity-decoded on read and escaped on write.
    Text,
    /// An opaque markup fragment, kept byte-for-byte.
    Markup,
    /// Child elements only.
    Elements,
}

/// A child slot of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChildSchema {
    /// Tags accepted in this slot. A choice slot accepts several, in any order.
    pub tags: &'static [&'static str],
    pub cardinality: Cardinality,
}

impl ChildSchema {
    pub fn accepts(&self, tag: &str) -> bool {
        self.tags.contains(&tag)
    }

    /// True when the slot holds interleaved elements of several types.
    pub fn is_choice(&self) -> bool {
        self.tags.len() > 1
    }
}

/// Schema declaration of a single element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementSchema {
    pub tag: &'static str,
    /// Attribute names, in the order they are emitted.
    pub attributes: &'static [&'static str],
    /// Child slots, in the order they are emitted.
    pub children: &'static [ChildSchema],
    pub content: ContentKind,
}

impl ElementSchema {
    /// Look up the child slot accepting a tag.
    pub fn child(&self, tag: &str) -> Option<&'static ChildSchema> {
        self.children.iter().find(|child| child.accepts(tag))
    }

    /// Every child tag, in emission order.
    pub fn child_tags(&self) -> impl Iterator<Item = &'static str> {
        self.children.iter().flat_map(|child| child.tags.iter().copied())
    }

    /// Child slots that must be present.
    pub fn required_children(&self) -> impl Iterator<Item = &'static ChildSchema> {
        self.children
            .iter()
            .filter(|child| child.cardinality.is_required())
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.contains(&name)
    }
}

static REGISTRY: LazyLock<FxHashMap<&'static str, &'static ElementSchema>> = LazyLock::new(|| {
    crate::model::ELEMENT_SCHEMAS
        .iter()
        .map(|schema| (schema.tag, *schema))
        .collect()
});

/// Look up the schema of an element by tag.
pub fn lookup(tag: &str) -> Option<&'static ElementSchema> {
    REGISTRY.get(tag).copied()
}

/// Every registered element schema, in declaration order.
pub fn all() -> impl Iterator<Item = &'static ElementSchema> {
    crate::model::ELEMENT_SCHEMAS.iter().copied()
}
