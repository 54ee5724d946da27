use serde::{Deserialize, Serialize};

use crate::criteria::Value;

/// A renderable fragment of a prepared statement: SQL text with `?`
/// placeholders plus the bind values that fill them, in order.
///
/// Construction order is rendering order. Every builder appends placeholder
/// text and its value in matching relative order, so the flattened binding
/// list always lines up with the flattened placeholders: the number of `?`
/// in [`sql_string`] equals `bindings().len()`.
///
/// [`sql_string`]: StatementPart::sql_string
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StatementPart {
    /// SQL text with no bind values.
    Sql(String),
    /// A bind value with no surrounding text.
    Binding(Value),
    /// Ordered concatenation of child parts, flattened depth-first.
    Combined(Vec<StatementPart>),
}

impl Default for StatementPart {
    fn default() -> Self {
        StatementPart::Combined(Vec::new())
    }
}

impl StatementPart {
    /// An empty combined part, ready for appending.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A text-only part.
    pub fn sql(text: impl Into<String>) -> Self {
        StatementPart::Sql(text.into())
    }

    /// A value-only part.
    pub fn binding(value: impl Into<Value>) -> Self {
        StatementPart::Binding(value.into())
    }

    /// Append a child part. A non-combined receiver is promoted to a
    /// combined part first, keeping itself as the first child.
    pub fn append(&mut self, part: StatementPart) {
        match self {
            StatementPart::Combined(parts) => parts.push(part),
            _ => {
                let existing = std::mem::take(self);
                *self = StatementPart::Combined(vec![existing, part]);
            }
        }
    }

    /// Append a text-only child.
    pub fn append_sql(&mut self, text: impl Into<String>) {
        self.append(StatementPart::sql(text));
    }

    /// Append a value-only child.
    pub fn push_binding(&mut self, value: impl Into<Value>) {
        self.append(StatementPart::binding(value));
    }

    /// Concatenate every child's SQL text depth-first, no separators.
    pub fn sql_string(&self) -> String {
        let mut out = String::new();
        self.write_sql(&mut out);
        out
    }

    fn write_sql(&self, out: &mut String) {
        match self {
            StatementPart::Sql(text) => out.push_str(text),
            StatementPart::Binding(_) => {}
            StatementPart::Combined(parts) => {
                for part in parts {
                    part.write_sql(out);
                }
            }
        }
    }

    /// Bind values in placeholder order (depth-first).
    pub fn bindings(&self) -> Vec<Value> {
        let mut out = Vec::new();
        self.collect_bindings(&mut out);
        out
    }

    fn collect_bindings(&self, out: &mut Vec<Value>) {
        match self {
            StatementPart::Sql(_) => {}
            StatementPart::Binding(value) => out.push(value.clone()),
            StatementPart::Combined(parts) => {
                for part in parts {
                    part.collect_bindings(out);
                }
            }
        }
    }

    /// Number of `?` placeholders in the rendered text.
    pub fn placeholder_count(&self) -> usize {
        self.sql_string().matches('?').count()
    }
}

impl std::fmt::Display for StatementPart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.sql_string())
    }
}
