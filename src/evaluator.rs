use chrono::DateTime;

use crate::{
    parser::{parse_call, parse_literal, split_args, strip_quotes},
    value::Value,
};

/// The closed set of transform functions.
///
/// The grammar is intentionally fixed: adding a function is a deliberate
/// code change, not a registry entry. Names are matched case-sensitively;
/// anything unrecognized dispatches to [`Function::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Function {
    JsonPathString,
    JsonPathInt,
    Coalesce,
    FromDateTime,
    Unknown,
}

impl Function {
    pub fn from_name(name: &str) -> Self {
        match name {
            "jsonPathString" => Function::JsonPathString,
            "jsonPathInt" => Function::JsonPathInt,
            "coalesce" => Function::Coalesce,
            "fromDateTime" => Function::FromDateTime,
            _ => Function::Unknown,
        }
    }
}

/// The transform expression evaluator.
///
/// Evaluates a textual transform expression against a JSON document and
/// produces a scalar (string, integer) or [`Value::Null`]. Evaluation is
/// total: every failure mode — malformed call, wrong arity, missing path,
/// unparseable date, unknown function — collapses to null rather than an
/// error. Downstream reporting treats null uniformly as "needs attention"
/// without distinguishing a buggy expression from missing sample data.
#[derive(Default)]
pub struct Evaluator;

impl Evaluator {
    /// Creates a new evaluator.
    pub fn new() -> Self {
        Self
    }

    /// Evaluates a transform expression against a JSON document.
    ///
    /// The expression is either a function call, a quoted string literal,
    /// or a bare literal. Function arguments are evaluated recursively, so
    /// calls nest to arbitrary depth (bounded by input length).
    ///
    /// # Examples
    ///
    /// ```
    /// use std::collections::HashMap;
    /// use transform_check::{Evaluator, Value};
    ///
    /// let mut inner = HashMap::new();
    /// inner.insert("b".to_string(), Value::Integer(5));
    /// let mut doc = HashMap::new();
    /// doc.insert("a".to_string(), Value::Object(inner));
    ///
    /// let evaluator = Evaluator::new();
    /// let result = evaluator.evaluate("jsonPathInt($, '$.a.b')", &Value::Object(doc));
    /// assert_eq!(result, Value::Integer(5));
    /// ```
    pub fn evaluate(&self, expr: &str, doc: &Value) -> Value {
        let expr = expr.trim();
        let Some((name, raw_args)) = parse_call(expr) else {
            return parse_literal(expr);
        };
        let args = split_args(raw_args);

        match Function::from_name(name) {
            Function::JsonPathString | Function::JsonPathInt => self.eval_json_path(&args, doc),
            Function::Coalesce => self.eval_coalesce(&args, doc),
            Function::FromDateTime => self.eval_from_date_time(&args, doc),
            Function::Unknown => Value::Null,
        }
    }

    /// `jsonPathString($, 'path')` / `jsonPathInt($, 'path')`.
    ///
    /// Both forms resolve the path and return whatever was found, verbatim.
    /// Despite the names, no coercion to string or integer is performed;
    /// the names reflect intended column typing, not enforced typing.
    fn eval_json_path(&self, args: &[&str], doc: &Value) -> Value {
        if args.len() != 2 {
            return Value::Null;
        }
        // First argument is the `$` root marker, ignored.
        let path = strip_quotes(args[1]);
        resolve_path(doc, path).cloned().unwrap_or(Value::Null)
    }

    /// `coalesce(a, b, ...)` - first argument that evaluates to a present
    /// value wins. Null, the empty string, and the empty array are skipped.
    fn eval_coalesce(&self, args: &[&str], doc: &Value) -> Value {
        for arg in args {
            let value = self.evaluate(arg, doc);
            if value.is_present() {
                return value;
            }
        }
        Value::Null
    }

    /// `fromDateTime(expr, 'pattern')` - epoch milliseconds of an ISO-8601
    /// timestamp. The pattern argument is accepted for compatibility but
    /// unused; the input must carry an explicit offset (a trailing `Z` is
    /// normalized to `+00:00`). Non-string input or a parse failure is null.
    fn eval_from_date_time(&self, args: &[&str], doc: &Value) -> Value {
        let Some(first) = args.first() else {
            return Value::Null;
        };
        let Value::String(s) = self.evaluate(first, doc) else {
            return Value::Null;
        };
        match parse_epoch_millis(&s) {
            Some(ms) => Value::Integer(ms),
            None => Value::Null,
        }
    }
}

/// Resolve a `$.`-prefixed, dot-separated key path against a document.
///
/// Every segment must name a key of the current object; a missing key, a
/// non-object intermediate, or a missing `$.` prefix resolves to `None`.
/// Consecutive dots produce literal empty-string keys (no normalization).
/// Array indices, wildcards, and filters are not supported.
///
/// The found value is returned as-is and may itself be an object or array;
/// the dispatch functions pass composites through uncoerced.
pub fn resolve_path<'a>(doc: &'a Value, path: &str) -> Option<&'a Value> {
    let rest = path.strip_prefix("$.")?;
    let mut current = doc;
    for segment in rest.split('.') {
        match current {
            Value::Object(map) => current = map.get(segment)?,
            _ => return None,
        }
    }
    Some(current)
}

fn parse_epoch_millis(s: &str) -> Option<i64> {
    let iso = match s.strip_suffix('Z') {
        Some(head) => format!("{head}+00:00"),
        None => s.to_string(),
    };
    let dt = DateTime::parse_from_rfc3339(&iso).ok()?;
    Some(dt.timestamp_millis())
}
