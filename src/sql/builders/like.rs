//! LIKE-family rendering with wildcard conversion and equality downgrade.
//!
//! Patterns use `*` and `?` as alternate wildcards alongside SQL's `%` and
//! `_`; a backslash escapes the character after it. A pattern that ends up
//! with no wildcard at all compiles as a plain equality instead of a LIKE.
//! The scan below reproduces the historical escape handling exactly,
//! including its rough edges (a backslash before an ordinary character is
//! dropped, a trailing backslash passes through); downstream code depends
//! on these patterns compiling byte-for-byte the same way.

use tracing::trace;

use crate::criteria::{Leaf, Operand, SqlOperator, Value};
use crate::error::{QuarryError, QuarryResult};
use crate::sql::adapter::Adapter;
use crate::sql::builders::standard;
use crate::sql::part::StatementPart;

pub(crate) fn applies(leaf: &Leaf) -> bool {
    leaf.op.is_like()
}

struct ScannedPattern {
    converted: String,
    has_wildcard: bool,
}

/// Pass 1: convert `*`/`?` to `%`/`_` and detect whether any live wildcard
/// remains. Escaped `*`/`?` stay escaped; a backslash before anything else
/// is dropped and the escaped character no longer counts as a wildcard.
fn scan(pattern: &str) -> ScannedPattern {
    let chars: Vec<char> = pattern.chars().collect();
    let mut converted = String::with_capacity(pattern.len());
    let mut has_wildcard = false;
    let mut i = 0;
    while i < chars.len() {
        match chars[i] {
            '\\' => {
                if i + 1 < chars.len() {
                    let next = chars[i + 1];
                    if next == '*' || next == '?' {
                        // always wildcard metacharacters, so the escape
                        // must survive conversion
                        converted.push('\\');
                    }
                    converted.push(next);
                    i += 2;
                } else {
                    // trailing backslash passes through
                    converted.push('\\');
                    i += 1;
                }
            }
            c @ ('%' | '_') => {
                has_wildcard = true;
                converted.push(c);
                i += 1;
            }
            '*' => {
                has_wildcard = true;
                converted.push('%');
                i += 1;
            }
            '?' => {
                has_wildcard = true;
                converted.push('_');
                i += 1;
            }
            c => {
                converted.push(c);
                i += 1;
            }
        }
    }
    ScannedPattern {
        converted,
        has_wildcard,
    }
}

/// Pass 2, downgrade only: the value is compared literally, so the escapes
/// kept by pass 1 are no longer needed.
fn strip_escapes(pattern: &str) -> String {
    let chars: Vec<char> = pattern.chars().collect();
    let mut out = String::with_capacity(pattern.len());
    let mut i = 0;
    while i < chars.len() {
        if chars[i] == '\\' && i + 1 < chars.len() {
            out.push(chars[i + 1]);
            i += 2;
        } else {
            out.push(chars[i]);
            i += 1;
        }
    }
    out
}

pub(crate) fn build(
    leaf: &Leaf,
    ignore_case: bool,
    adapter: &dyn Adapter,
) -> QuarryResult<StatementPart> {
    let pattern = match &leaf.right {
        Operand::Value(Value::Text(s)) => s,
        other => {
            return Err(QuarryError::PatternType {
                operator: leaf.op.sql_symbol().trim(),
                found: other.type_name().to_string(),
            });
        }
    };

    let ignore = ignore_case || leaf.ignore_case || leaf.op.is_case_insensitive_like();
    let scanned = scan(pattern);
    trace!(
        pattern = %pattern,
        converted = %scanned.converted,
        has_wildcard = scanned.has_wildcard,
        "scanned like pattern"
    );

    if !scanned.has_wildcard {
        // No live wildcard: compare as a plain (in)equality.
        let literal = strip_escapes(&scanned.converted);
        let op = match leaf.op {
            SqlOperator::Like | SqlOperator::ILike => SqlOperator::Eq,
            _ => SqlOperator::Ne,
        };
        let downgraded = Leaf {
            left: leaf.left.clone(),
            op,
            right: Operand::Value(Value::Text(literal)),
            ignore_case: ignore,
        };
        return standard::build(&downgraded, false, adapter);
    }

    let native = ignore && adapter.use_ilike();
    let wrap = ignore && !native;
    let render_op = if native {
        leaf.op.ilike_form()
    } else {
        leaf.op.like_form()
    };

    let mut part = standard::operand_part(&leaf.left, wrap, adapter)?;
    part.append_sql(render_op.sql_symbol());
    if wrap {
        part.append_sql(adapter.ignore_case("?"));
    } else {
        part.append_sql("?");
    }
    part.push_binding(Value::Text(scanned.converted));
    if adapter.use_escape_clause_for_like() {
        part.append_sql(" ESCAPE '\\'");
    }
    Ok(part)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_detects_sql_wildcards() {
        let s = scan("50%");
        assert!(s.has_wildcard);
        assert_eq!(s.converted, "50%");

        let s = scan("a_b");
        assert!(s.has_wildcard);
        assert_eq!(s.converted, "a_b");
    }

    #[test]
    fn test_scan_converts_alternate_wildcards() {
        let s = scan("a*b?c");
        assert!(s.has_wildcard);
        assert_eq!(s.converted, "a%b_c");
    }

    #[test]
    fn test_scan_escaped_percent_drops_backslash_and_flag() {
        let s = scan("50\\%");
        assert!(!s.has_wildcard);
        assert_eq!(s.converted, "50%");
    }

    #[test]
    fn test_scan_escaped_star_stays_escaped() {
        let s = scan("ab\\*c");
        assert!(!s.has_wildcard);
        assert_eq!(s.converted, "ab\\*c");
    }

    #[test]
    fn test_scan_trailing_backslash_passes_through() {
        let s = scan("abc\\");
        assert!(!s.has_wildcard);
        assert_eq!(s.converted, "abc\\");
    }

    #[test]
    fn test_scan_backslash_before_ordinary_char_dropped() {
        let s = scan("a\\bc");
        assert!(!s.has_wildcard);
        assert_eq!(s.converted, "abc");
    }

    #[test]
    fn test_strip_escapes() {
        assert_eq!(strip_escapes("ab\\*c"), "ab*c");
        assert_eq!(strip_escapes("abc\\"), "abc\\");
        assert_eq!(strip_escapes("plain"), "plain");
    }
}
