use serde::{Deserialize, Serialize};

/// A column reference, optionally qualified by table or alias.
///
/// Columns render as literal SQL (`table.name`) and never contribute a bind
/// value. Equality and hashing follow the qualified name so a `Column` can
/// serve as a tree-node identity key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Column {
    /// Qualifying table name or alias, if any.
    pub table: Option<String>,
    /// Column name.
    pub name: String,
}

impl Column {
    /// A qualified column reference (`table.name`).
    pub fn new(table: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            table: Some(table.into()),
            name: name.into(),
        }
    }

    /// An unqualified column reference.
    pub fn local(name: impl Into<String>) -> Self {
        Self {
            table: None,
            name: name.into(),
        }
    }

    /// The rendered form, `table.name` or bare `name`.
    pub fn qualified_name(&self) -> String {
        match &self.table {
            Some(table) => format!("{}.{}", table, self.name),
            None => self.name.clone(),
        }
    }
}

/// A dotted string splits into qualifier and name; a plain identifier stays
/// unqualified.
impl From<&str> for Column {
    fn from(s: &str) -> Self {
        match s.split_once('.') {
            Some((table, name)) => Column::new(table, name),
            None => Column::local(s),
        }
    }
}

impl From<String> for Column {
    fn from(s: String) -> Self {
        Column::from(s.as_str())
    }
}

impl std::fmt::Display for Column {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.qualified_name())
    }
}
