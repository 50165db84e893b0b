//! JSX syntax tree types for fluentlint.
//!
//! The tree is deliberately lint-oriented: element structure, attributes and
//! source spans are preserved exactly, while embedded JavaScript expressions
//! are kept as a shallow [`Expression`] classification rather than a full JS
//! AST. Rules only ever need to know whether an expression is a string
//! literal, a call, an identifier, a collection literal, or embedded JSX.

pub mod ast;

pub use ast::*;
