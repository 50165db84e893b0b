//! Helpers for classifying JSX expression bodies.
//!
//! These are shape tests over trimmed expression text. Anything they cannot
//! recognize falls through to `Expression::Raw` in the parser.

/// If `s` is a single quoted string literal, return its unquoted content.
pub(crate) fn string_literal_content(s: &str) -> Option<&str> {
    let bytes = s.as_bytes();
    if bytes.len() < 2 {
        return None;
    }
    let quote = bytes[0];
    if (quote != b'"' && quote != b'\'') || bytes[bytes.len() - 1] != quote {
        return None;
    }
    let inner = &s[1..s.len() - 1];
    // An unescaped closing quote in the middle means this is not one literal
    let mut escaped = false;
    for b in inner.bytes() {
        if escaped {
            escaped = false;
        } else if b == b'\\' {
            escaped = true;
        } else if b == quote {
            return None;
        }
    }
    Some(inner)
}

fn is_identifier_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || c == '$'
}

fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '$'
}

/// Bare identifier or member path: `label`, `props.title`
pub(crate) fn is_identifier_path(s: &str) -> bool {
    if s.is_empty() {
        return false;
    }
    s.split('.').all(|segment| {
        let mut chars = segment.chars();
        match chars.next() {
            Some(c) if is_identifier_start(c) => chars.all(is_identifier_char),
            _ => false,
        }
    })
}

/// If `s` is a call expression with an identifier-path callee, return the
/// callee: `t("save")` → `t`, `items.map(render)` → `items.map`
pub(crate) fn call_callee(s: &str) -> Option<&str> {
    if !s.ends_with(')') {
        return None;
    }
    let open = s.find('(')?;
    let callee = &s[..open];
    if is_identifier_path(callee) {
        Some(callee)
    } else {
        None
    }
}

/// If `s` is a bracketed literal delimited by `open`/`close`, return the
/// number of top-level entries. Strings and nested brackets are skipped.
pub(crate) fn collection_len(s: &str, open: u8, close: u8) -> Option<usize> {
    let bytes = s.as_bytes();
    if bytes.len() < 2 || bytes[0] != open || bytes[bytes.len() - 1] != close {
        return None;
    }

    let inner = &s[1..s.len() - 1];
    if inner.trim().is_empty() {
        return Some(0);
    }

    let mut depth = 0usize;
    let mut count = 1usize;
    let mut quote: Option<u8> = None;
    let mut escaped = false;
    let mut last_was_comma_at_top = false;

    for b in inner.bytes() {
        if let Some(q) = quote {
            if escaped {
                escaped = false;
            } else if b == b'\\' {
                escaped = true;
            } else if b == q {
                quote = None;
            }
            continue;
        }
        match b {
            b'"' | b'\'' | b'`' => quote = Some(b),
            b'[' | b'{' | b'(' => depth += 1,
            b']' | b'}' | b')' => depth = depth.saturating_sub(1),
            b',' if depth == 0 => {
                count += 1;
                last_was_comma_at_top = true;
                continue;
            }
            _ => {}
        }
        if !b.is_ascii_whitespace() {
            last_was_comma_at_top = false;
        }
    }

    // Trailing comma does not add an entry
    if last_was_comma_at_top {
        count -= 1;
    }
    Some(count)
}

/// Position of the first `<` that plausibly starts embedded JSX
pub(crate) fn find_jsx_start(s: &str) -> Option<usize> {
    let bytes = s.as_bytes();
    for (i, &b) in bytes.iter().enumerate() {
        if b == b'<' {
            if let Some(&next) = bytes.get(i + 1) {
                if next.is_ascii_alphabetic() || next == b'_' || next == b'>' {
                    return Some(i);
                }
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_literal_content() {
        assert_eq!(string_literal_content(r#""Save""#), Some("Save"));
        assert_eq!(string_literal_content("'Save'"), Some("Save"));
        assert_eq!(string_literal_content(r#""""#), Some(""));
        assert_eq!(string_literal_content(r#""a" + "b""#), None);
        assert_eq!(string_literal_content("label"), None);
    }

    #[test]
    fn test_identifier_path() {
        assert!(is_identifier_path("label"));
        assert!(is_identifier_path("props.title"));
        assert!(is_identifier_path("$t"));
        assert!(!is_identifier_path("items.map(x)"));
        assert!(!is_identifier_path("3d"));
        assert!(!is_identifier_path(""));
    }

    #[test]
    fn test_call_callee() {
        assert_eq!(call_callee(r#"t("save")"#), Some("t"));
        assert_eq!(call_callee("items.map(render)"), Some("items.map"));
        assert_eq!(call_callee("a + b()"), None);
        assert_eq!(call_callee("label"), None);
    }

    #[test]
    fn test_collection_len() {
        assert_eq!(collection_len("[]", b'[', b']'), Some(0));
        assert_eq!(collection_len("[1, 2, 3]", b'[', b']'), Some(3));
        assert_eq!(collection_len("[[1, 2], 3]", b'[', b']'), Some(2));
        assert_eq!(collection_len(r#"["a,b"]"#, b'[', b']'), Some(1));
        assert_eq!(collection_len("[1, 2,]", b'[', b']'), Some(2));
        assert_eq!(collection_len("{}", b'{', b'}'), Some(0));
        assert_eq!(collection_len("{ a: 1, b: 2 }", b'{', b'}'), Some(2));
        assert_eq!(collection_len("label", b'[', b']'), None);
    }

    #[test]
    fn test_find_jsx_start() {
        assert_eq!(find_jsx_start("open && <Panel />"), Some(8));
        assert_eq!(find_jsx_start("a < b"), None);
        assert_eq!(find_jsx_start("<>x</>"), Some(0));
    }
}
