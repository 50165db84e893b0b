//! JSX tokenizer.
//!
//! A state machine over raw bytes. Tag and attribute handling follows the
//! usual HTML tokenizer shape; the JSX-specific parts are `{…}` expression
//! containers (in child, attribute-value, and spread position) which are
//! scanned with brace balancing that skips string literals, template
//! literals, and comments.

use crate::error::ErrorCode;

/// Character codes for fast comparison
pub mod char_codes {
    pub const TAB: u8 = 0x09;
    pub const NEWLINE: u8 = 0x0A;
    pub const FORM_FEED: u8 = 0x0C;
    pub const CARRIAGE_RETURN: u8 = 0x0D;
    pub const SPACE: u8 = 0x20;
    pub const DOUBLE_QUOTE: u8 = 0x22;
    pub const SINGLE_QUOTE: u8 = 0x27;
    pub const STAR: u8 = 0x2A;
    pub const SLASH: u8 = 0x2F;
    pub const LT: u8 = 0x3C;
    pub const EQ: u8 = 0x3D;
    pub const GT: u8 = 0x3E;
    pub const UPPER_A: u8 = 0x41;
    pub const UPPER_Z: u8 = 0x5A;
    pub const BACKSLASH: u8 = 0x5C;
    pub const UNDERSCORE: u8 = 0x5F;
    pub const GRAVE_ACCENT: u8 = 0x60;
    pub const LOWER_A: u8 = 0x61;
    pub const LOWER_Z: u8 = 0x7A;
    pub const LEFT_BRACE: u8 = 0x7B;
    pub const RIGHT_BRACE: u8 = 0x7D;
}

use char_codes::*;

/// All the states the tokenizer can be in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum State {
    Text = 1,

    // Expression containers
    InChildExpression,

    // Tags
    BeforeTagName,
    InTagName,
    InSelfClosingTag,
    BeforeClosingTagName,
    InClosingTagName,
    AfterClosingTagName,

    // Attributes
    BeforeAttrName,
    InAttrName,
    AfterAttrName,
    BeforeAttrValue,
    InAttrValueDq,
    InAttrValueSq,
    InAttrValueExpression,
    InSpreadProps,
}

/// Quote type for attribute values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum QuoteType {
    NoValue = 0,
    Single = 1,
    Double = 2,
    Expression = 3,
}

/// Tokenizer callbacks
pub trait Callbacks {
    fn on_text(&mut self, start: usize, end: usize);

    /// A `{…}` child expression; the span excludes the braces
    fn on_expression(&mut self, start: usize, end: usize);

    fn on_open_tag_name(&mut self, start: usize, end: usize);
    fn on_open_tag_end(&mut self, end: usize);
    fn on_self_closing_tag(&mut self, end: usize);
    fn on_close_tag(&mut self, start: usize, end: usize);

    fn on_attrib_name(&mut self, start: usize, end: usize);
    /// Literal attribute value data (inside the quotes)
    fn on_attrib_data(&mut self, start: usize, end: usize);
    /// Expression attribute value (inside the braces)
    fn on_attrib_expression(&mut self, start: usize, end: usize);
    fn on_attrib_end(&mut self, quote: QuoteType, end: usize);

    fn on_end(&mut self);
    fn on_error(&mut self, code: ErrorCode, index: usize);
}

impl<T: Callbacks> Callbacks for &mut T {
    fn on_text(&mut self, start: usize, end: usize) {
        (**self).on_text(start, end)
    }
    fn on_expression(&mut self, start: usize, end: usize) {
        (**self).on_expression(start, end)
    }
    fn on_open_tag_name(&mut self, start: usize, end: usize) {
        (**self).on_open_tag_name(start, end)
    }
    fn on_open_tag_end(&mut self, end: usize) {
        (**self).on_open_tag_end(end)
    }
    fn on_self_closing_tag(&mut self, end: usize) {
        (**self).on_self_closing_tag(end)
    }
    fn on_close_tag(&mut self, start: usize, end: usize) {
        (**self).on_close_tag(start, end)
    }
    fn on_attrib_name(&mut self, start: usize, end: usize) {
        (**self).on_attrib_name(start, end)
    }
    fn on_attrib_data(&mut self, start: usize, end: usize) {
        (**self).on_attrib_data(start, end)
    }
    fn on_attrib_expression(&mut self, start: usize, end: usize) {
        (**self).on_attrib_expression(start, end)
    }
    fn on_attrib_end(&mut self, quote: QuoteType, end: usize) {
        (**self).on_attrib_end(quote, end)
    }
    fn on_end(&mut self) {
        (**self).on_end()
    }
    fn on_error(&mut self, code: ErrorCode, index: usize) {
        (**self).on_error(code, index)
    }
}

/// Check if character can start a tag name (a-z, A-Z, _, or `>` for fragments)
#[inline]
pub fn is_tag_start_char(c: u8) -> bool {
    (LOWER_A..=LOWER_Z).contains(&c) || (UPPER_A..=UPPER_Z).contains(&c) || c == UNDERSCORE
}

/// Check if character is whitespace
#[inline]
pub fn is_whitespace(c: u8) -> bool {
    c == SPACE || c == NEWLINE || c == TAB || c == FORM_FEED || c == CARRIAGE_RETURN
}

/// Check if character ends a tag section
#[inline]
pub fn is_end_of_tag_section(c: u8) -> bool {
    c == SLASH || c == GT || is_whitespace(c)
}

/// Position a `{…}` container appears in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ExprKind {
    Child,
    Attr,
    Spread,
}

/// Sub-state for expression scanning
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ExprContext {
    Code,
    /// Inside a string or template literal with this quote byte
    Quoted(u8),
    BlockComment,
    LineComment,
}

/// JSX tokenizer over a window of the source
pub struct Tokenizer<'a, C: Callbacks> {
    /// Full input source
    input: &'a [u8],
    /// Current state
    state: State,
    /// Buffer start position
    section_start: usize,
    /// Current index
    index: usize,
    /// Window end (exclusive)
    window_end: usize,
    /// Callbacks
    callbacks: C,
    /// Brace depth inside an expression container
    expr_depth: usize,
    /// String/comment context inside an expression container
    expr_context: ExprContext,
    /// Last byte seen inside an expression, for comment detection
    expr_prev: u8,
}

impl<'a, C: Callbacks> Tokenizer<'a, C> {
    /// Create a new tokenizer over the whole input
    pub fn new(input: &'a str, callbacks: C) -> Self {
        let len = input.len();
        Self::with_window(input, 0, len, callbacks)
    }

    /// Create a tokenizer restricted to `[start, end)` of the input.
    /// Emitted spans are absolute offsets into the full input.
    pub fn with_window(input: &'a str, start: usize, end: usize, callbacks: C) -> Self {
        Self {
            input: input.as_bytes(),
            state: State::Text,
            section_start: start,
            index: start,
            window_end: end.min(input.len()),
            callbacks,
            expr_depth: 0,
            expr_context: ExprContext::Code,
            expr_prev: 0,
        }
    }

    /// Tokenize the window
    pub fn tokenize(&mut self) {
        while self.index < self.window_end {
            let c = self.input[self.index];

            match self.state {
                State::Text => self.state_text(c),
                State::InChildExpression => self.state_in_expression(c, State::Text, ExprKind::Child),
                State::BeforeTagName => self.state_before_tag_name(c),
                State::InTagName => self.state_in_tag_name(c),
                State::InSelfClosingTag => self.state_in_self_closing_tag(c),
                State::BeforeClosingTagName => self.state_before_closing_tag_name(c),
                State::InClosingTagName => self.state_in_closing_tag_name(c),
                State::AfterClosingTagName => self.state_after_closing_tag_name(c),
                State::BeforeAttrName => self.state_before_attr_name(c),
                State::InAttrName => self.state_in_attr_name(c),
                State::AfterAttrName => self.state_after_attr_name(c),
                State::BeforeAttrValue => self.state_before_attr_value(c),
                State::InAttrValueDq => self.state_in_attr_value_dq(c),
                State::InAttrValueSq => self.state_in_attr_value_sq(c),
                State::InAttrValueExpression => {
                    self.state_in_expression(c, State::BeforeAttrName, ExprKind::Attr)
                }
                State::InSpreadProps => {
                    self.state_in_expression(c, State::BeforeAttrName, ExprKind::Spread)
                }
            }

            self.index += 1;
        }

        self.cleanup();
        self.callbacks.on_end();
    }

    fn cleanup(&mut self) {
        match self.state {
            State::Text => {
                if self.section_start < self.index {
                    self.callbacks.on_text(self.section_start, self.index);
                }
            }
            State::InChildExpression
            | State::InAttrValueExpression
            | State::InSpreadProps => {
                self.callbacks
                    .on_error(ErrorCode::EofInExpression, self.index);
            }
            State::InTagName
            | State::BeforeClosingTagName
            | State::InClosingTagName
            | State::AfterClosingTagName
            | State::BeforeAttrName
            | State::InAttrName
            | State::AfterAttrName
            | State::BeforeAttrValue
            | State::InAttrValueDq
            | State::InAttrValueSq => {
                self.callbacks.on_error(ErrorCode::EofInTag, self.index);
            }
            _ => {}
        }
    }

    // ========== State handlers ==========

    fn state_text(&mut self, c: u8) {
        if c == LT {
            if self.index > self.section_start {
                self.callbacks.on_text(self.section_start, self.index);
            }
            self.state = State::BeforeTagName;
            self.section_start = self.index;
        } else if c == LEFT_BRACE {
            if self.index > self.section_start {
                self.callbacks.on_text(self.section_start, self.index);
            }
            self.enter_expression(State::InChildExpression);
        }
    }

    fn enter_expression(&mut self, state: State) {
        self.state = state;
        self.section_start = self.index + 1;
        self.expr_depth = 1;
        self.expr_context = ExprContext::Code;
        self.expr_prev = 0;
    }

    /// Shared handler for `{…}` scanning in child, attribute, and spread
    /// position. Balances braces while skipping strings, template literals,
    /// and comments so a `}` inside them cannot close the container early.
    fn state_in_expression(&mut self, c: u8, next: State, kind: ExprKind) {
        match self.expr_context {
            ExprContext::Quoted(q) => {
                if self.expr_prev == BACKSLASH {
                    // Escaped character; also neutralize the backslash itself
                    self.expr_prev = 0;
                    return;
                }
                if c == q {
                    self.expr_context = ExprContext::Code;
                }
                self.expr_prev = c;
                return;
            }
            ExprContext::BlockComment => {
                if c == SLASH && self.expr_prev == STAR {
                    self.expr_context = ExprContext::Code;
                }
                self.expr_prev = c;
                return;
            }
            ExprContext::LineComment => {
                if c == NEWLINE {
                    self.expr_context = ExprContext::Code;
                }
                self.expr_prev = c;
                return;
            }
            ExprContext::Code => {}
        }

        match c {
            DOUBLE_QUOTE | SINGLE_QUOTE | GRAVE_ACCENT => {
                self.expr_context = ExprContext::Quoted(c);
            }
            STAR if self.expr_prev == SLASH => {
                self.expr_context = ExprContext::BlockComment;
            }
            SLASH if self.expr_prev == SLASH => {
                self.expr_context = ExprContext::LineComment;
            }
            LEFT_BRACE => self.expr_depth += 1,
            RIGHT_BRACE => {
                self.expr_depth -= 1;
                if self.expr_depth == 0 {
                    match kind {
                        ExprKind::Child => {
                            self.callbacks.on_expression(self.section_start, self.index);
                        }
                        ExprKind::Attr => {
                            self.callbacks
                                .on_attrib_expression(self.section_start, self.index);
                            self.callbacks
                                .on_attrib_end(QuoteType::Expression, self.index);
                        }
                        // Spread props are scanned for balance only
                        ExprKind::Spread => {}
                    }
                    self.section_start = self.index + 1;
                    self.state = next;
                }
            }
            _ => {}
        }
        self.expr_prev = c;
    }

    fn state_before_tag_name(&mut self, c: u8) {
        if c == GT {
            // Fragment open tag `<>`
            self.callbacks.on_open_tag_name(self.index, self.index);
            self.callbacks.on_open_tag_end(self.index);
            self.state = State::Text;
            self.section_start = self.index + 1;
        } else if is_tag_start_char(c) {
            self.section_start = self.index;
            self.state = State::InTagName;
        } else if c == SLASH {
            self.state = State::BeforeClosingTagName;
        } else {
            self.state = State::Text;
            self.state_text(c);
        }
    }

    fn state_in_tag_name(&mut self, c: u8) {
        if is_end_of_tag_section(c) {
            self.callbacks
                .on_open_tag_name(self.section_start, self.index);
            self.section_start = self.index;
            self.state = State::BeforeAttrName;
            self.state_before_attr_name(c);
        }
    }

    fn state_in_self_closing_tag(&mut self, c: u8) {
        if c == GT {
            self.callbacks.on_self_closing_tag(self.index);
            self.state = State::Text;
            self.section_start = self.index + 1;
        } else if !is_whitespace(c) {
            self.state = State::BeforeAttrName;
            self.state_before_attr_name(c);
        }
    }

    fn state_before_closing_tag_name(&mut self, c: u8) {
        if is_whitespace(c) {
            // Skip
        } else if c == GT {
            // Fragment close tag `</>`
            self.callbacks.on_close_tag(self.index, self.index);
            self.state = State::Text;
            self.section_start = self.index + 1;
        } else {
            self.state = State::InClosingTagName;
            self.section_start = self.index;
        }
    }

    fn state_in_closing_tag_name(&mut self, c: u8) {
        if c == GT || is_whitespace(c) {
            self.callbacks.on_close_tag(self.section_start, self.index);
            self.section_start = self.index + 1;
            self.state = if c == GT {
                State::Text
            } else {
                State::AfterClosingTagName
            };
        }
    }

    fn state_after_closing_tag_name(&mut self, c: u8) {
        if c == GT {
            self.state = State::Text;
            self.section_start = self.index + 1;
        }
    }

    fn state_before_attr_name(&mut self, c: u8) {
        if c == GT {
            self.callbacks.on_open_tag_end(self.index);
            self.state = State::Text;
            self.section_start = self.index + 1;
        } else if c == SLASH {
            self.state = State::InSelfClosingTag;
        } else if c == LEFT_BRACE {
            // Spread props `{...props}`; scanned and discarded
            self.enter_expression(State::InSpreadProps);
        } else if !is_whitespace(c) {
            self.state = State::InAttrName;
            self.section_start = self.index;
        }
    }

    fn state_in_attr_name(&mut self, c: u8) {
        if c == EQ || is_end_of_tag_section(c) {
            self.callbacks.on_attrib_name(self.section_start, self.index);
            self.section_start = self.index;
            self.state = State::AfterAttrName;
            self.state_after_attr_name(c);
        }
    }

    fn state_after_attr_name(&mut self, c: u8) {
        if c == EQ {
            self.state = State::BeforeAttrValue;
        } else if c == SLASH || c == GT {
            self.callbacks.on_attrib_end(QuoteType::NoValue, self.index);
            self.state = State::BeforeAttrName;
            self.state_before_attr_name(c);
        } else if !is_whitespace(c) {
            self.callbacks.on_attrib_end(QuoteType::NoValue, self.index);
            self.state = State::InAttrName;
            self.section_start = self.index;
        }
    }

    fn state_before_attr_value(&mut self, c: u8) {
        if c == DOUBLE_QUOTE {
            self.state = State::InAttrValueDq;
            self.section_start = self.index + 1;
        } else if c == SINGLE_QUOTE {
            self.state = State::InAttrValueSq;
            self.section_start = self.index + 1;
        } else if c == LEFT_BRACE {
            self.enter_expression(State::InAttrValueExpression);
        } else if !is_whitespace(c) {
            // JSX requires quoted or braced values; recover by ending the attr
            self.callbacks.on_attrib_end(QuoteType::NoValue, self.index);
            self.state = State::BeforeAttrName;
            self.state_before_attr_name(c);
        }
    }

    fn state_in_attr_value_dq(&mut self, c: u8) {
        if c == DOUBLE_QUOTE {
            self.emit_attr_value(QuoteType::Double);
        }
    }

    fn state_in_attr_value_sq(&mut self, c: u8) {
        if c == SINGLE_QUOTE {
            self.emit_attr_value(QuoteType::Single);
        }
    }

    fn emit_attr_value(&mut self, quote: QuoteType) {
        self.callbacks.on_attrib_data(self.section_start, self.index);
        self.callbacks.on_attrib_end(quote, self.index);
        self.section_start = self.index + 1;
        self.state = State::BeforeAttrName;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        events: Vec<String>,
    }

    impl Callbacks for Recorder {
        fn on_text(&mut self, start: usize, end: usize) {
            self.events.push(format!("text {start}..{end}"));
        }
        fn on_expression(&mut self, start: usize, end: usize) {
            self.events.push(format!("expr {start}..{end}"));
        }
        fn on_open_tag_name(&mut self, start: usize, end: usize) {
            self.events.push(format!("open {start}..{end}"));
        }
        fn on_open_tag_end(&mut self, end: usize) {
            self.events.push(format!("open-end {end}"));
        }
        fn on_self_closing_tag(&mut self, end: usize) {
            self.events.push(format!("self-close {end}"));
        }
        fn on_close_tag(&mut self, start: usize, end: usize) {
            self.events.push(format!("close {start}..{end}"));
        }
        fn on_attrib_name(&mut self, start: usize, end: usize) {
            self.events.push(format!("attr-name {start}..{end}"));
        }
        fn on_attrib_data(&mut self, start: usize, end: usize) {
            self.events.push(format!("attr-data {start}..{end}"));
        }
        fn on_attrib_expression(&mut self, start: usize, end: usize) {
            self.events.push(format!("attr-expr {start}..{end}"));
        }
        fn on_attrib_end(&mut self, _quote: QuoteType, end: usize) {
            self.events.push(format!("attr-end {end}"));
        }
        fn on_end(&mut self) {
            self.events.push("end".to_string());
        }
        fn on_error(&mut self, code: ErrorCode, index: usize) {
            self.events.push(format!("error {code:?} {index}"));
        }
    }

    fn tokenize(source: &str) -> Vec<String> {
        let mut recorder = Recorder::default();
        let mut tokenizer = Tokenizer::new(source, &mut recorder);
        tokenizer.tokenize();
        recorder.events
    }

    #[test]
    fn test_self_closing_element() {
        let events = tokenize("<Badge />");
        assert!(events.contains(&"open 1..6".to_string()));
        assert!(events.contains(&"self-close 8".to_string()));
    }

    #[test]
    fn test_attribute_with_literal_value() {
        //              0123456789...
        let source = r#"<Input aria-label="Name" />"#;
        let events = tokenize(source);
        assert!(events.contains(&"attr-name 7..17".to_string()));
        assert!(events.contains(&"attr-data 19..23".to_string()));
    }

    #[test]
    fn test_expression_value_with_nested_braces() {
        let source = "<X data={{ a: 1 }} />";
        let events = tokenize(source);
        // Inner span excludes the outer braces
        assert!(events.iter().any(|e| e.starts_with("attr-expr 9..17")));
    }

    #[test]
    fn test_brace_inside_string_does_not_close_expression() {
        let source = r#"<X label={"}"} />"#;
        let events = tokenize(source);
        assert!(events.iter().any(|e| e.starts_with("attr-expr 10..13")));
    }

    #[test]
    fn test_child_expression() {
        let source = "<div>{label}</div>";
        let events = tokenize(source);
        assert!(events.contains(&"expr 6..11".to_string()));
    }

    #[test]
    fn test_fragment_tags() {
        let events = tokenize("<>hi</>");
        assert!(events.contains(&"open 1..1".to_string()));
        assert!(events.contains(&"close 6..6".to_string()));
    }

    #[test]
    fn test_unterminated_expression_reports_error() {
        let events = tokenize("<div>{label</div>");
        assert!(events.iter().any(|e| e.starts_with("error EofInExpression")));
    }
}
