use serde::{Deserialize, Serialize};

use crate::criteria::Value;

/// A compiled query: final SQL text plus its bind values in placeholder
/// order, ready for a prepared-statement API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Query {
    sql: String,
    bindings: Vec<Value>,
}

impl Query {
    pub(crate) fn new(sql: String, bindings: Vec<Value>) -> Self {
        Self { sql, bindings }
    }

    /// The SQL text, with one `?` per bind value.
    pub fn sql(&self) -> &str {
        &self.sql
    }

    /// Bind values in placeholder order.
    pub fn bindings(&self) -> &[Value] {
        &self.bindings
    }

    /// Decompose into `(sql, bindings)`.
    pub fn into_parts(self) -> (String, Vec<Value>) {
        (self.sql, self.bindings)
    }
}

impl std::fmt::Display for Query {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.sql)
    }
}
