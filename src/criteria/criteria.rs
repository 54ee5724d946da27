use serde::{Deserialize, Serialize};

use crate::criteria::{
    Column, Criterion, Join, JoinKind, SortOrder, SqlOperator, Value,
};

/// One ORDER BY entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderBy {
    pub column: Column,
    pub order: SortOrder,
}

/// A complete query description: select columns, a WHERE criterion tree,
/// joins, grouping, ordering and pagination.
///
/// All builder methods consume and return `self`. The root criterion is
/// installed by value, so composing it further elsewhere cannot change this
/// criteria.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Criteria {
    /// Columns to select, ordered and de-duplicated.
    pub columns: Vec<Column>,
    /// Root of the WHERE-clause boolean tree.
    pub root: Option<Criterion>,
    #[serde(default)]
    pub joins: Vec<Join>,
    #[serde(default)]
    pub order_by: Vec<OrderBy>,
    #[serde(default)]
    pub group_by: Vec<Column>,
    #[serde(default)]
    pub having: Option<Criterion>,
    /// Alias map, ordered: `(alias, real table)`.
    #[serde(default)]
    pub aliases: Vec<(String, String)>,
    #[serde(default)]
    pub limit: Option<u64>,
    #[serde(default)]
    pub offset: Option<u64>,
    #[serde(default)]
    pub distinct: bool,
    /// Apply case-insensitive comparison to every textual condition.
    #[serde(default)]
    pub ignore_case: bool,
    /// Target database name; picks the adapter when compiling with defaults.
    #[serde(default)]
    pub db_name: Option<String>,
}

impl Criteria {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add select columns.
    pub fn columns<I, C>(mut self, cols: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Column>,
    {
        for col in cols {
            self = self.column(col);
        }
        self
    }

    /// Add a single select column; duplicates are dropped.
    pub fn column(mut self, col: impl Into<Column>) -> Self {
        let col = col.into();
        if !self.columns.contains(&col) {
            self.columns.push(col);
        }
        self
    }

    /// Install `criterion` as the WHERE root, replacing any existing root.
    pub fn where_criterion(mut self, criterion: Criterion) -> Self {
        self.root = Some(criterion);
        self
    }

    /// AND a criterion onto the root (or install it when none is set).
    pub fn and(mut self, criterion: Criterion) -> Self {
        self.root = Some(match self.root.take() {
            Some(root) => root.and(criterion),
            None => criterion,
        });
        self
    }

    /// OR a criterion onto the root (or install it when none is set).
    pub fn or(mut self, criterion: Criterion) -> Self {
        self.root = Some(match self.root.take() {
            Some(root) => root.or(criterion),
            None => criterion,
        });
        self
    }

    /// Add a condition with a specific operator, ANDed onto the root.
    pub fn filter(
        self,
        column: impl Into<Column>,
        op: SqlOperator,
        value: impl Into<Value>,
    ) -> Self {
        self.and(Criterion::compare(column.into(), op, value.into()))
    }

    /// Add a condition with a specific operator, ORed onto the root.
    pub fn or_filter(
        self,
        column: impl Into<Column>,
        op: SqlOperator,
        value: impl Into<Value>,
    ) -> Self {
        self.or(Criterion::compare(column.into(), op, value.into()))
    }

    /// `WHERE column = value` (ANDed onto the root).
    pub fn where_eq(self, column: impl Into<Column>, value: impl Into<Value>) -> Self {
        self.and(Criterion::eq(column, value))
    }

    /// `OR column = value`.
    pub fn or_eq(self, column: impl Into<Column>, value: impl Into<Value>) -> Self {
        self.or(Criterion::eq(column, value))
    }

    /// Add a JOIN; the right column's qualifier names the joined table.
    pub fn join(
        mut self,
        kind: JoinKind,
        left: impl Into<Column>,
        right: impl Into<Column>,
    ) -> Self {
        self.joins.push(Join::new(kind, left, right));
        self
    }

    /// Add an ORDER BY entry.
    pub fn order_by(mut self, column: impl Into<Column>, order: SortOrder) -> Self {
        self.order_by.push(OrderBy {
            column: column.into(),
            order,
        });
        self
    }

    /// Add GROUP BY columns.
    pub fn group_by<I, C>(mut self, cols: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Column>,
    {
        self.group_by.extend(cols.into_iter().map(Into::into));
        self
    }

    /// Install the HAVING criterion.
    pub fn having(mut self, criterion: Criterion) -> Self {
        self.having = Some(criterion);
        self
    }

    /// Register a table alias usable as a column qualifier.
    pub fn alias(mut self, alias: impl Into<String>, table: impl Into<String>) -> Self {
        self.aliases.push((alias.into(), table.into()));
        self
    }

    pub fn limit(mut self, n: u64) -> Self {
        self.limit = Some(n);
        self
    }

    pub fn offset(mut self, n: u64) -> Self {
        self.offset = Some(n);
        self
    }

    /// Enable SELECT DISTINCT.
    pub fn distinct(mut self) -> Self {
        self.distinct = true;
        self
    }

    /// Compare every textual condition case-insensitively.
    pub fn ignore_case(mut self) -> Self {
        self.ignore_case = true;
        self
    }

    /// Set the target database name.
    pub fn db_name(mut self, name: impl Into<String>) -> Self {
        self.db_name = Some(name.into());
        self
    }
}
