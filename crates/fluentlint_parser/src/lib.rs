//! JSX fragment parser for fluentlint.
//!
//! A byte-level state-machine tokenizer plus a stack-based parser. The
//! parser produces the lint-oriented tree defined in `fluentlint_ast`; it
//! recovers from unclosed and mismatched tags so a single defect never
//! aborts a file's analysis.
//!
//! ## Usage
//!
//! ```rust
//! use fluentlint_parser::Parser;
//!
//! let (root, errors) = Parser::new(r#"<Button aria-label="Send" />"#).parse();
//! assert!(errors.is_empty());
//! assert_eq!(root.children.len(), 1);
//! ```

mod error;
mod expression;
mod parser;
mod tokenizer;

pub use error::{ErrorCode, ParseError};
pub use parser::Parser;
pub use tokenizer::{Callbacks, QuoteType, Tokenizer};
