//! JSON rendering for report output.
//!
//! Report lines show the value each transform produced. Scalars render as
//! bare JSON scalars; composite pass-through values (an object or array
//! returned verbatim by a path lookup) render as JSON documents. Output is
//! deterministic: object keys are always sorted.

use crate::value::Value;

pub struct JsonPrinter {
    pretty: bool,
}

impl JsonPrinter {
    pub fn new(pretty: bool) -> Self {
        JsonPrinter { pretty }
    }

    pub fn print(&self, value: &Value) -> String {
        self.print_value(value, 0)
    }

    fn print_value(&self, value: &Value, indent: usize) -> String {
        match value {
            Value::Null => "null".to_string(),
            Value::Boolean(b) => b.to_string(),
            Value::Integer(n) => n.to_string(),
            Value::Float(n) => n.to_string(),
            Value::String(s) => format!("\"{}\"", escape_string(s)),
            Value::Array(arr) => {
                let items: Vec<String> = arr
                    .iter()
                    .map(|v| self.print_value(v, indent + 1))
                    .collect();
                self.wrap(items, '[', ']', indent)
            }
            Value::Object(obj) => {
                // Sort keys for deterministic output
                let mut keys: Vec<&String> = obj.keys().collect();
                keys.sort();

                let sep = if self.pretty { ": " } else { ":" };
                let items: Vec<String> = keys
                    .iter()
                    .map(|k| {
                        format!(
                            "\"{}\"{}{}",
                            escape_string(k),
                            sep,
                            self.print_value(&obj[*k], indent + 1)
                        )
                    })
                    .collect();
                self.wrap(items, '{', '}', indent)
            }
        }
    }

    fn wrap(&self, items: Vec<String>, open: char, close: char, indent: usize) -> String {
        if items.is_empty() {
            return format!("{}{}", open, close);
        }

        if self.pretty {
            let inner = "  ".repeat(indent + 1);
            let body: Vec<String> = items.into_iter().map(|i| format!("{}{}", inner, i)).collect();
            format!(
                "{}\n{}\n{}{}",
                open,
                body.join(",\n"),
                "  ".repeat(indent),
                close
            )
        } else {
            format!("{}{}{}", open, items.join(","), close)
        }
    }
}

fn escape_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out
}

/// Converts a Value to compact JSON string representation.
///
/// Deterministic output (object keys are sorted) with proper string
/// escaping; used for report lines.
pub fn to_json(value: &Value) -> String {
    JsonPrinter::new(false).print(value)
}

/// Converts a Value to pretty-printed JSON string representation with
/// 2-space indentation.
pub fn to_json_pretty(value: &Value) -> String {
    JsonPrinter::new(true).print(value)
}
