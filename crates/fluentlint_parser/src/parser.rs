//! Stack-based JSX parser on top of the tokenizer.
//!
//! Elements are pushed onto a stack when their open tag completes and popped
//! when a matching close tag arrives. Mismatches are recovered: an unclosed
//! element is implicitly closed (with a [`ErrorCode::MissingEndTag`] error)
//! when an ancestor's close tag or end of input is reached, and a stray close
//! tag is dropped with [`ErrorCode::InvalidEndTag`].
//!
//! Expression bodies are classified shallowly; ones that start with embedded
//! JSX are re-parsed over a window of the original source so nested element
//! locations stay absolute.

use compact_str::CompactString;
use fluentlint_ast::{
    Attribute, AttributeValue, ElementNode, Expression, ExpressionContainer, JsxChild, JsxRoot,
    Position, SourceLocation, TextNode,
};

use crate::error::{ErrorCode, ParseError};
use crate::expression;
use crate::tokenizer::{Callbacks, QuoteType, Tokenizer};

/// Markup tags that never take a close tag; tolerated without `/>`
fn is_void_tag(tag: &str) -> bool {
    matches!(
        tag,
        "area"
            | "base"
            | "br"
            | "col"
            | "embed"
            | "hr"
            | "img"
            | "input"
            | "link"
            | "meta"
            | "source"
            | "track"
            | "wbr"
    )
}

/// JSX fragment parser
pub struct Parser<'s> {
    source: &'s str,
}

impl<'s> Parser<'s> {
    pub fn new(source: &'s str) -> Self {
        Self { source }
    }

    /// Parse the source into a root node plus any recoverable errors.
    pub fn parse(self) -> (JsxRoot, Vec<ParseError>) {
        let newlines = self
            .source
            .bytes()
            .enumerate()
            .filter_map(|(i, b)| (b == b'\n').then_some(i))
            .collect();
        let mut ctx = ParseCtx {
            source: self.source,
            newlines,
            errors: Vec::new(),
        };

        let children = ctx.parse_window(0, self.source.len(), true);

        let mut root = JsxRoot::new();
        root.loc = ctx.loc(0, self.source.len());
        root.children = children;
        (root, ctx.errors)
    }
}

/// Shared parse state: the full source, its newline table, and the error
/// sink. One instance serves the top-level pass and every nested window.
struct ParseCtx<'s> {
    source: &'s str,
    newlines: Vec<usize>,
    errors: Vec<ParseError>,
}

impl<'s> ParseCtx<'s> {
    fn pos(&self, offset: usize) -> Position {
        let line_idx = self.newlines.partition_point(|&n| n < offset);
        let line_start = if line_idx == 0 {
            0
        } else {
            self.newlines[line_idx - 1] + 1
        };
        Position::new(
            offset as u32,
            (line_idx + 1) as u32,
            (offset - line_start + 1) as u32,
        )
    }

    fn loc(&self, start: usize, end: usize) -> SourceLocation {
        SourceLocation::new(self.pos(start), self.pos(end))
    }

    /// Run one tokenizer pass over `[start, end)` of the source. Offsets in
    /// the returned tree are absolute. Nested passes pass `record_errors:
    /// false` so noise inside unresolvable expressions does not surface.
    fn parse_window(&mut self, start: usize, end: usize, record_errors: bool) -> Vec<JsxChild> {
        let source = self.source;
        let mut fragment = FragmentParser::new(self, record_errors);
        let mut tokenizer = Tokenizer::with_window(source, start, end, &mut fragment);
        tokenizer.tokenize();
        fragment.finish()
    }

    /// Shallow classification of an expression body at `[start, end)`.
    /// Returns `None` for bodies with nothing in them (whitespace or a lone
    /// comment), which callers skip in child position.
    fn classify(&mut self, start: usize, end: usize) -> Option<Expression> {
        let source = self.source;
        let text = &source[start..end];
        let trimmed = text.trim();
        if trimmed.is_empty() || trimmed.starts_with("//") || trimmed.starts_with("/*") {
            return None;
        }
        let t_start = start + (text.len() - text.trim_start().len());
        let t_end = t_start + trimmed.len();

        if let Some(inner) = expression::string_literal_content(trimmed) {
            return Some(Expression::StringLiteral(inner.into()));
        }
        match trimmed {
            "true" => return Some(Expression::BooleanLiteral(true)),
            "false" => return Some(Expression::BooleanLiteral(false)),
            "null" | "undefined" => return Some(Expression::NullLiteral),
            _ => {}
        }
        if let Ok(n) = trimmed.parse::<f64>() {
            return Some(Expression::NumberLiteral(n));
        }

        if trimmed.starts_with('<') {
            let children = self.parse_window(t_start, t_end, false);
            return Some(jsx_expression(trimmed, children));
        }

        if let Some(len) = expression::collection_len(trimmed, b'[', b']') {
            return Some(Expression::ArrayLiteral(len));
        }
        if let Some(len) = expression::collection_len(trimmed, b'{', b'}') {
            return Some(Expression::ObjectLiteral(len));
        }
        if expression::is_identifier_path(trimmed) {
            return Some(Expression::Identifier(trimmed.into()));
        }
        if let Some(callee) = expression::call_callee(trimmed) {
            return Some(Expression::Call(callee.into()));
        }

        // Code with JSX somewhere inside it: `open && <Panel />`
        if let Some(jsx) = expression::find_jsx_start(trimmed) {
            let children = self.parse_window(t_start + jsx, t_end, false);
            let elements = embedded_elements(children);
            if !elements.is_empty() {
                return Some(Expression::Mixed {
                    raw: trimmed.into(),
                    elements,
                });
            }
        }

        Some(Expression::Raw(trimmed.into()))
    }
}

fn embedded_elements(children: Vec<JsxChild>) -> Vec<ElementNode> {
    children
        .into_iter()
        .filter_map(|c| match c {
            JsxChild::Element(el) => Some(*el),
            _ => None,
        })
        .collect()
}

/// Classify an expression body that starts with `<`. A single element with
/// nothing but whitespace around it stays [`Expression::Element`]; anything
/// else with elements in it is [`Expression::Mixed`].
fn jsx_expression(raw: &str, children: Vec<JsxChild>) -> Expression {
    let only_whitespace_rest = children.iter().all(|c| match c {
        JsxChild::Element(_) => true,
        JsxChild::Text(t) => t.content.trim().is_empty(),
        JsxChild::Expression(_) => false,
    });
    let mut elements = embedded_elements(children);
    if elements.len() == 1 && only_whitespace_rest {
        let el = elements.remove(0);
        Expression::Element(Box::new(el))
    } else if elements.is_empty() {
        Expression::Raw(raw.into())
    } else {
        Expression::Mixed {
            raw: raw.into(),
            elements,
        }
    }
}

/// An open tag being assembled between `on_open_tag_name` and its end
struct CurrentElement {
    tag: CompactString,
    lt_offset: usize,
    tag_loc: SourceLocation,
    attributes: Vec<Attribute>,
}

struct CurrentAttribute {
    name: CompactString,
    name_loc: SourceLocation,
    value: Option<AttributeValue>,
}

/// Tokenizer callbacks for one window of the source
struct FragmentParser<'c, 's> {
    ctx: &'c mut ParseCtx<'s>,
    source: &'s str,
    record_errors: bool,
    stack: Vec<ElementNode>,
    children: Vec<JsxChild>,
    current: Option<CurrentElement>,
    attr: Option<CurrentAttribute>,
}

impl<'c, 's> FragmentParser<'c, 's> {
    fn new(ctx: &'c mut ParseCtx<'s>, record_errors: bool) -> Self {
        let source = ctx.source;
        Self {
            ctx,
            source,
            record_errors,
            stack: Vec::new(),
            children: Vec::new(),
            current: None,
            attr: None,
        }
    }

    fn add_child(&mut self, child: JsxChild) {
        if let Some(parent) = self.stack.last_mut() {
            parent.children.push(child);
        } else {
            self.children.push(child);
        }
    }

    fn record(&mut self, code: ErrorCode, start: usize, end: usize) {
        if self.record_errors {
            let loc = self.ctx.loc(start, end);
            self.ctx.errors.push(ParseError::new(code, Some(loc)));
        }
    }

    /// Implicitly close every element still open, attaching each to its
    /// parent, then return the window's top-level children.
    fn finish(mut self) -> Vec<JsxChild> {
        self.current = None;
        self.attr = None;
        while let Some(el) = self.stack.pop() {
            self.record(
                ErrorCode::MissingEndTag,
                el.loc.start.offset as usize,
                el.loc.end.offset as usize,
            );
            self.add_child(JsxChild::Element(Box::new(el)));
        }
        self.children
    }
}

impl Callbacks for FragmentParser<'_, '_> {
    fn on_text(&mut self, start: usize, end: usize) {
        let loc = self.ctx.loc(start, end);
        let content = &self.source[start..end];
        self.add_child(JsxChild::Text(TextNode::new(content, loc)));
    }

    fn on_expression(&mut self, start: usize, end: usize) {
        // Container loc spans the braces
        let loc = self.ctx.loc(start.saturating_sub(1), end + 1);
        if let Some(expression) = self.ctx.classify(start, end) {
            self.add_child(JsxChild::Expression(ExpressionContainer { expression, loc }));
        }
    }

    fn on_open_tag_name(&mut self, start: usize, end: usize) {
        let tag_loc = self.ctx.loc(start, end);
        self.current = Some(CurrentElement {
            tag: self.source[start..end].into(),
            lt_offset: start.saturating_sub(1),
            tag_loc,
            attributes: Vec::new(),
        });
    }

    fn on_open_tag_end(&mut self, end: usize) {
        let Some(cur) = self.current.take() else {
            return;
        };
        let loc = self.ctx.loc(cur.lt_offset, end + 1);
        let mut el = ElementNode::new(cur.tag, loc);
        el.tag_loc = cur.tag_loc;
        el.attributes = cur.attributes;
        if is_void_tag(&el.tag) {
            self.add_child(JsxChild::Element(Box::new(el)));
        } else {
            self.stack.push(el);
        }
    }

    fn on_self_closing_tag(&mut self, end: usize) {
        let Some(cur) = self.current.take() else {
            return;
        };
        let loc = self.ctx.loc(cur.lt_offset, end + 1);
        let mut el = ElementNode::new(cur.tag, loc);
        el.tag_loc = cur.tag_loc;
        el.attributes = cur.attributes;
        el.is_self_closing = true;
        self.add_child(JsxChild::Element(Box::new(el)));
    }

    fn on_close_tag(&mut self, start: usize, end: usize) {
        let tag = &self.source[start..end];
        let Some(depth) = self.stack.iter().rposition(|el| el.tag == tag) else {
            self.record(ErrorCode::InvalidEndTag, start.saturating_sub(2), end + 1);
            return;
        };

        // Implicitly close anything opened above the match
        while self.stack.len() > depth + 1 {
            let Some(el) = self.stack.pop() else { break };
            self.record(
                ErrorCode::MissingEndTag,
                el.loc.start.offset as usize,
                el.loc.end.offset as usize,
            );
            self.add_child(JsxChild::Element(Box::new(el)));
        }

        if let Some(mut el) = self.stack.pop() {
            el.loc.end = self.ctx.pos(end + 1);
            self.add_child(JsxChild::Element(Box::new(el)));
        }
    }

    fn on_attrib_name(&mut self, start: usize, end: usize) {
        let name_loc = self.ctx.loc(start, end);
        self.attr = Some(CurrentAttribute {
            name: self.source[start..end].into(),
            name_loc,
            value: None,
        });
    }

    fn on_attrib_data(&mut self, start: usize, end: usize) {
        let loc = self.ctx.loc(start, end);
        let content = &self.source[start..end];
        if let Some(attr) = self.attr.as_mut() {
            attr.value = Some(AttributeValue::Literal(TextNode::new(content, loc)));
        }
    }

    fn on_attrib_expression(&mut self, start: usize, end: usize) {
        let loc = self.ctx.loc(start.saturating_sub(1), end + 1);
        let expression = self
            .ctx
            .classify(start, end)
            .unwrap_or_else(|| Expression::Raw(CompactString::new("")));
        if let Some(attr) = self.attr.as_mut() {
            attr.value = Some(AttributeValue::Expression(ExpressionContainer {
                expression,
                loc,
            }));
        }
    }

    fn on_attrib_end(&mut self, _quote: QuoteType, _end: usize) {
        let Some(attr) = self.attr.take() else {
            return;
        };
        let end_offset = match &attr.value {
            // Literal loc excludes the quotes
            Some(AttributeValue::Literal(t)) => t.loc.end.offset as usize + 1,
            Some(AttributeValue::Expression(e)) => e.loc.end.offset as usize,
            None => attr.name_loc.end.offset as usize,
        };
        let loc = SourceLocation::new(attr.name_loc.start, self.ctx.pos(end_offset));
        if let Some(cur) = self.current.as_mut() {
            cur.attributes.push(Attribute {
                name: attr.name,
                name_loc: attr.name_loc,
                value: attr.value,
                loc,
            });
        }
    }

    fn on_end(&mut self) {}

    fn on_error(&mut self, code: ErrorCode, index: usize) {
        let at = index.min(self.source.len());
        self.record(code, at, at);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fluentlint_ast::ElementKind;

    fn parse(source: &str) -> (JsxRoot, Vec<ParseError>) {
        Parser::new(source).parse()
    }

    fn first_element(root: &JsxRoot) -> &ElementNode {
        root.children
            .iter()
            .find_map(|c| match c {
                JsxChild::Element(el) => Some(el.as_ref()),
                _ => None,
            })
            .unwrap()
    }

    #[test]
    fn test_self_closing_element_with_attributes() {
        let (root, errors) = parse(r#"<Input aria-label="Name" disabled />"#);
        assert!(errors.is_empty());
        let el = first_element(&root);
        assert_eq!(el.tag, "Input");
        assert_eq!(el.kind, ElementKind::Component);
        assert!(el.is_self_closing);
        assert_eq!(el.attributes.len(), 2);

        let label = el.attribute("aria-label").unwrap();
        match &label.value {
            Some(AttributeValue::Literal(t)) => assert_eq!(t.content, "Name"),
            other => panic!("expected literal value, got {other:?}"),
        }
        assert!(el.attribute("disabled").unwrap().value.is_none());
    }

    #[test]
    fn test_nested_elements_and_text() {
        let (root, errors) = parse("<Button><span>Save</span></Button>");
        assert!(errors.is_empty());
        let button = first_element(&root);
        assert_eq!(button.tag, "Button");
        assert_eq!(button.children.len(), 1);

        let JsxChild::Element(span) = &button.children[0] else {
            panic!("expected span child");
        };
        assert_eq!(span.tag, "span");
        let JsxChild::Text(text) = &span.children[0] else {
            panic!("expected text child");
        };
        assert_eq!(text.content, "Save");
    }

    #[test]
    fn test_child_expression_classification() {
        let (root, errors) = parse("<div>{label}</div>");
        assert!(errors.is_empty());
        let div = first_element(&root);
        let JsxChild::Expression(container) = &div.children[0] else {
            panic!("expected expression child");
        };
        assert!(matches!(
            &container.expression,
            Expression::Identifier(name) if name == "label"
        ));
    }

    #[test]
    fn test_attribute_expression_shapes() {
        let (root, _) = parse(
            r#"<Badge icon={<SendIcon />} count={3} title={"New"} hidden={false} extra={items.map(render)} />"#,
        );
        let badge = first_element(&root);

        let shape = |name: &str| match &badge.attribute(name).unwrap().value {
            Some(AttributeValue::Expression(e)) => &e.expression,
            other => panic!("expected expression value for {name}, got {other:?}"),
        };

        match shape("icon") {
            Expression::Element(el) => assert_eq!(el.tag, "SendIcon"),
            other => panic!("expected element, got {other:?}"),
        }
        assert!(matches!(shape("count"), Expression::NumberLiteral(n) if *n == 3.0));
        assert!(matches!(shape("title"), Expression::StringLiteral(s) if s == "New"));
        assert!(matches!(shape("hidden"), Expression::BooleanLiteral(false)));
        assert!(matches!(shape("extra"), Expression::Call(c) if c == "items.map"));
    }

    #[test]
    fn test_embedded_element_offsets_are_absolute() {
        let source = r#"<Badge icon={<SendIcon />} />"#;
        let (root, _) = parse(source);
        let badge = first_element(&root);
        let Some(AttributeValue::Expression(e)) = &badge.attribute("icon").unwrap().value else {
            panic!("expected expression value");
        };
        let Expression::Element(icon) = &e.expression else {
            panic!("expected element");
        };
        let tag = &source[icon.tag_loc.start.offset as usize..icon.tag_loc.end.offset as usize];
        assert_eq!(tag, "SendIcon");
        assert_eq!(icon.tag_loc.start.offset, 14);
    }

    #[test]
    fn test_mixed_expression_collects_elements() {
        let (root, errors) = parse("<div>{open && <Panel title=\"Hi\" />}</div>");
        assert!(errors.is_empty());
        let div = first_element(&root);
        let JsxChild::Expression(container) = &div.children[0] else {
            panic!("expected expression child");
        };
        let Expression::Mixed { elements, .. } = &container.expression else {
            panic!("expected mixed expression, got {:?}", container.expression);
        };
        assert_eq!(elements.len(), 1);
        assert_eq!(elements[0].tag, "Panel");
    }

    #[test]
    fn test_fragment() {
        let (root, errors) = parse("<><Tab value=\"a\" /></>");
        assert!(errors.is_empty());
        let fragment = first_element(&root);
        assert_eq!(fragment.kind, ElementKind::Fragment);
        assert_eq!(fragment.children.len(), 1);
    }

    #[test]
    fn test_unclosed_element_recovers() {
        let (root, errors) = parse("<Accordion><AccordionItem></Accordion>");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].code, ErrorCode::MissingEndTag);

        let accordion = first_element(&root);
        assert_eq!(accordion.tag, "Accordion");
        assert_eq!(accordion.children.len(), 1);
        let JsxChild::Element(item) = &accordion.children[0] else {
            panic!("expected item child");
        };
        assert_eq!(item.tag, "AccordionItem");
    }

    #[test]
    fn test_stray_close_tag_is_dropped() {
        let (root, errors) = parse("<div></span></div>");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].code, ErrorCode::InvalidEndTag);
        let div = first_element(&root);
        assert_eq!(div.tag, "div");
        assert!(div.children.is_empty());
    }

    #[test]
    fn test_void_tag_without_slash() {
        let (root, errors) = parse("<label>Name<input></label>");
        assert!(errors.is_empty());
        let label = first_element(&root);
        assert_eq!(label.children.len(), 2);
        let JsxChild::Element(input) = &label.children[1] else {
            panic!("expected input child");
        };
        assert_eq!(input.tag, "input");
    }

    #[test]
    fn test_spread_props_are_skipped() {
        let (root, errors) = parse("<Input {...rest} aria-label=\"Q\" />");
        assert!(errors.is_empty());
        let input = first_element(&root);
        assert_eq!(input.attributes.len(), 1);
        assert_eq!(input.attributes[0].name, "aria-label");
    }

    #[test]
    fn test_positions_cross_lines() {
        let (root, _) = parse("<div>\n  <span />\n</div>");
        let div = first_element(&root);
        let JsxChild::Element(span) = div
            .children
            .iter()
            .find(|c| matches!(c, JsxChild::Element(_)))
            .unwrap()
        else {
            panic!("expected span child");
        };
        assert_eq!(span.loc.start.line, 2);
        assert_eq!(span.loc.start.column, 3);
    }
}
