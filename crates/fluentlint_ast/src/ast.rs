//! JSX AST node types.
//!
//! All nodes are plain owned values; a tree lives only for the duration of
//! one file's lint pass. Byte offsets in [`SourceLocation`] refer to the
//! source string the tree was parsed from.

use compact_str::CompactString;
use serde::{Deserialize, Serialize};

/// Source position in the file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Position {
    /// Byte offset from start of file
    pub offset: u32,
    /// 1-indexed line number
    pub line: u32,
    /// 1-indexed column number
    pub column: u32,
}

impl Position {
    pub const fn new(offset: u32, line: u32, column: u32) -> Self {
        Self {
            offset,
            line,
            column,
        }
    }
}

/// Source location span [start, end)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceLocation {
    pub start: Position,
    pub end: Position,
}

impl SourceLocation {
    /// Stub location for synthesized nodes
    pub const STUB: Self = Self {
        start: Position {
            offset: 0,
            line: 1,
            column: 1,
        },
        end: Position {
            offset: 0,
            line: 1,
            column: 1,
        },
    };

    pub const fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }
}

impl Default for SourceLocation {
    fn default() -> Self {
        Self::STUB
    }
}

/// Element kind discriminant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[repr(u8)]
pub enum ElementKind {
    /// Lowercase markup tag (`div`, `img`, `svg`, `label`)
    #[default]
    Html = 0,
    /// Capitalized component tag (`Checkbox`, `Tooltip.Content`)
    Component = 1,
    /// `<>…</>`
    Fragment = 2,
}

/// Root of a parsed JSX fragment
#[derive(Debug)]
pub struct JsxRoot {
    pub children: Vec<JsxChild>,
    pub loc: SourceLocation,
}

impl JsxRoot {
    pub fn new() -> Self {
        Self {
            children: Vec::new(),
            loc: SourceLocation::STUB,
        }
    }
}

impl Default for JsxRoot {
    fn default() -> Self {
        Self::new()
    }
}

/// All child node types
#[derive(Debug)]
pub enum JsxChild {
    Element(Box<ElementNode>),
    Text(TextNode),
    Expression(ExpressionContainer),
}

impl JsxChild {
    pub fn loc(&self) -> &SourceLocation {
        match self {
            Self::Element(n) => &n.loc,
            Self::Text(n) => &n.loc,
            Self::Expression(n) => &n.loc,
        }
    }
}

/// Element node
#[derive(Debug)]
pub struct ElementNode {
    pub tag: CompactString,
    pub kind: ElementKind,
    pub attributes: Vec<Attribute>,
    pub children: Vec<JsxChild>,
    pub is_self_closing: bool,
    /// Span of the whole element, opening `<` through closing `>`
    pub loc: SourceLocation,
    /// Span of the opening tag name; fixes that insert attributes go right
    /// after `tag_loc.end`
    pub tag_loc: SourceLocation,
}

impl ElementNode {
    pub fn new(tag: impl Into<CompactString>, loc: SourceLocation) -> Self {
        let tag = tag.into();
        let kind = Self::kind_of(&tag);
        Self {
            tag,
            kind,
            attributes: Vec::new(),
            children: Vec::new(),
            is_self_closing: false,
            loc,
            tag_loc: SourceLocation::STUB,
        }
    }

    /// Classify a tag name: empty = fragment, leading uppercase = component
    pub fn kind_of(tag: &str) -> ElementKind {
        match tag.chars().next() {
            None => ElementKind::Fragment,
            Some(c) if c.is_ascii_uppercase() => ElementKind::Component,
            Some(_) => ElementKind::Html,
        }
    }

    pub fn is_component(&self) -> bool {
        self.kind == ElementKind::Component
    }

    /// Find an attribute by exact name
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.name == name)
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.attribute(name).is_some()
    }
}

/// Attribute node (`name`, `name="text"`, or `name={expr}`)
#[derive(Debug)]
pub struct Attribute {
    pub name: CompactString,
    pub name_loc: SourceLocation,
    pub value: Option<AttributeValue>,
    pub loc: SourceLocation,
}

impl Attribute {
    pub fn new(name: impl Into<CompactString>, loc: SourceLocation) -> Self {
        Self {
            name: name.into(),
            name_loc: loc,
            value: None,
            loc,
        }
    }
}

/// Attribute value
#[derive(Debug)]
pub enum AttributeValue {
    /// Quoted literal: `alt="Photo"`
    Literal(TextNode),
    /// Braced expression: `alt={label}`
    Expression(ExpressionContainer),
}

/// Text node
#[derive(Debug)]
pub struct TextNode {
    pub content: CompactString,
    pub loc: SourceLocation,
}

impl TextNode {
    pub fn new(content: impl Into<CompactString>, loc: SourceLocation) -> Self {
        Self {
            content: content.into(),
            loc,
        }
    }
}

/// Braced expression in child or attribute position
#[derive(Debug)]
pub struct ExpressionContainer {
    pub expression: Expression,
    pub loc: SourceLocation,
}

/// Shallow classification of a JSX expression body.
///
/// This is not a JavaScript AST. The linter only needs to distinguish the
/// handful of value shapes its emptiness and labelling checks care about;
/// anything it cannot classify lands in [`Expression::Raw`] and is treated
/// as unresolvable by every consumer.
#[derive(Debug)]
pub enum Expression {
    /// `"text"` or `'text'` (unquoted content)
    StringLiteral(CompactString),
    /// Numeric literal, including `0`
    NumberLiteral(f64),
    /// `true` / `false`
    BooleanLiteral(bool),
    /// `null` / `undefined`
    NullLiteral,
    /// Bare identifier or member path: `label`, `props.title`
    Identifier(CompactString),
    /// Call expression: `t("save")`, `items.map(render)`
    Call(CompactString),
    /// Array literal with its top-level element count
    ArrayLiteral(usize),
    /// Object literal with its top-level property count
    ObjectLiteral(usize),
    /// A single embedded JSX element: `icon={<Send />}`
    Element(Box<ElementNode>),
    /// Code with one or more embedded JSX elements: `{open && <Panel />}`
    Mixed {
        raw: CompactString,
        elements: Vec<ElementNode>,
    },
    /// Anything else; unresolvable statically
    Raw(CompactString),
}

impl Expression {
    /// The embedded elements of this expression, if any
    pub fn elements(&self) -> &[ElementNode] {
        match self {
            Self::Element(el) => std::slice::from_ref(el),
            Self::Mixed { elements, .. } => elements,
            _ => &[],
        }
    }
}
