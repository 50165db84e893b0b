//! Shared predicates the rules are built from.
//!
//! Every function here is total: malformed or unresolvable input yields
//! `false`, never an error.

pub mod ancestry;
pub mod flatten;
pub mod images;
pub mod labels;
pub mod props;
pub mod text;
