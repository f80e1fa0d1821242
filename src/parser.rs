//! Lexical splitting of transform expressions.
//!
//! A transform expression is either a function call `name(arg, ...)`, a
//! quoted string literal, or a bare token. This module only splits text;
//! all semantics (path lookup, coalescing, date parsing) live in the
//! evaluator. Nested calls are left unparsed in the argument substrings and
//! re-split by the evaluator as it recurses.

use std::sync::LazyLock;

use regex::Regex;

use crate::value::Value;

/// Matches `identifier(args)` spanning the whole token, with `args` running
/// from just after the first `(` to the final `)`.
static CALL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<name>[A-Za-z0-9_]+)\((?P<args>.*)\)$").expect("call pattern is valid")
});

/// Split an expression into a function name and its raw argument list.
///
/// Returns `None` when the trimmed input does not have the shape of a call,
/// in which case the caller treats it as a literal. The returned argument
/// string is unparsed; pass it to [`split_args`].
///
/// # Examples
///
/// ```
/// use transform_check::parser::parse_call;
///
/// assert_eq!(parse_call("coalesce(a, b)"), Some(("coalesce", "a, b")));
/// assert_eq!(parse_call("'just a string'"), None);
/// ```
pub fn parse_call(expr: &str) -> Option<(&str, &str)> {
    let caps = CALL_RE.captures(expr.trim())?;
    Some((
        caps.name("name")?.as_str(),
        caps.name("args")?.as_str(),
    ))
}

/// Split a raw argument list on commas at parenthesis depth 0.
///
/// Each segment is trimmed. Commas inside nested calls do not split:
/// `"a(b,c), d"` yields `["a(b,c)", "d"]`. A blank input yields no
/// arguments. Quoted literals containing commas or parentheses are not
/// supported by this grammar and will mis-split.
pub fn split_args(raw: &str) -> Vec<&str> {
    let mut args = Vec::new();
    let mut depth: i32 = 0;
    let mut start = 0;

    for (i, ch) in raw.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => depth -= 1,
            ',' if depth == 0 => {
                args.push(raw[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
    }

    let last = raw[start..].trim();
    if !last.is_empty() {
        args.push(last);
    }
    args
}

/// Remove one matching pair of single or double quotes, if present.
///
/// No escape processing is performed; the inner text is returned verbatim.
/// Tokens without a matching same-character quote pair pass through
/// unchanged.
pub fn strip_quotes(s: &str) -> &str {
    let s = s.trim();
    if is_quoted(s) {
        &s[1..s.len() - 1]
    } else {
        s
    }
}

fn is_quoted(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() >= 2
        && bytes[0] == bytes[bytes.len() - 1]
        && (bytes[0] == b'\'' || bytes[0] == b'"')
}

/// Interpret a non-call token as a literal value.
///
/// Quoted tokens become strings with the quotes stripped. Bare tokens are
/// tried as base-10 integers and fall back to opaque strings equal to the
/// raw token.
pub fn parse_literal(token: &str) -> Value {
    let token = token.trim();
    if is_quoted(token) {
        return Value::String(strip_quotes(token).to_string());
    }
    match token.parse::<i64>() {
        Ok(n) => Value::Integer(n),
        Err(_) => Value::String(token.to_string()),
    }
}
