use serde::{Deserialize, Serialize};

use crate::criteria::{Column, Conjunction, Operand, SqlOperator, Value};

/// One boolean condition: left operand, operator, right operand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Leaf {
    pub left: Operand,
    pub op: SqlOperator,
    pub right: Operand,
    /// Compare case-insensitively (text operands only).
    #[serde(default)]
    pub ignore_case: bool,
}

/// An ordered boolean composition of criteria.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Composite {
    pub conjunction: Conjunction,
    pub parts: Vec<Criterion>,
}

/// Raw SQL with its positional bind values; bypasses builder dispatch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerbatimSql {
    pub sql: String,
    #[serde(default)]
    pub bindings: Vec<Value>,
}

/// A node in a WHERE-clause boolean tree.
///
/// The three forms are mutually exclusive by construction. Composition is
/// by value: `and`/`or` consume their operands and return a new tree, so a
/// criterion reused in several trees can never be mutated through one of
/// them. `Clone` is the copy constructor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Criterion {
    Leaf(Leaf),
    Composite(Composite),
    Verbatim(VerbatimSql),
}

impl Criterion {
    /// A leaf comparing `left` to `right` with the given operator.
    ///
    /// Operators that take no right-hand value (the NULL tests and the
    /// CURRENT_* markers) force the right operand to NULL, whatever was
    /// passed.
    pub fn compare(
        left: impl Into<Operand>,
        op: SqlOperator,
        right: impl Into<Operand>,
    ) -> Self {
        let right = if op.needs_value() {
            right.into()
        } else {
            Operand::Value(Value::Null)
        };
        Criterion::Leaf(Leaf {
            left: left.into(),
            op,
            right,
            ignore_case: false,
        })
    }

    /// Equality leaf, the two-argument form.
    pub fn new(left: impl Into<Operand>, right: impl Into<Operand>) -> Self {
        Self::compare(left, SqlOperator::Eq, right)
    }

    /// `column = value`
    pub fn eq(column: impl Into<Column>, value: impl Into<Value>) -> Self {
        Self::compare(column.into(), SqlOperator::Eq, value.into())
    }

    /// `column != value`
    pub fn ne(column: impl Into<Column>, value: impl Into<Value>) -> Self {
        Self::compare(column.into(), SqlOperator::Ne, value.into())
    }

    /// `column > value`
    pub fn gt(column: impl Into<Column>, value: impl Into<Value>) -> Self {
        Self::compare(column.into(), SqlOperator::Gt, value.into())
    }

    /// `column >= value`
    pub fn gte(column: impl Into<Column>, value: impl Into<Value>) -> Self {
        Self::compare(column.into(), SqlOperator::Gte, value.into())
    }

    /// `column < value`
    pub fn lt(column: impl Into<Column>, value: impl Into<Value>) -> Self {
        Self::compare(column.into(), SqlOperator::Lt, value.into())
    }

    /// `column <= value`
    pub fn lte(column: impl Into<Column>, value: impl Into<Value>) -> Self {
        Self::compare(column.into(), SqlOperator::Lte, value.into())
    }

    /// `column LIKE pattern` (`*`/`?` convert to `%`/`_` at compile time)
    pub fn like(column: impl Into<Column>, pattern: impl Into<String>) -> Self {
        Self::compare(column.into(), SqlOperator::Like, Value::Text(pattern.into()))
    }

    /// `column NOT LIKE pattern`
    pub fn not_like(column: impl Into<Column>, pattern: impl Into<String>) -> Self {
        Self::compare(
            column.into(),
            SqlOperator::NotLike,
            Value::Text(pattern.into()),
        )
    }

    /// Case-insensitive LIKE.
    pub fn ilike(column: impl Into<Column>, pattern: impl Into<String>) -> Self {
        Self::compare(column.into(), SqlOperator::ILike, Value::Text(pattern.into()))
    }

    /// Case-insensitive NOT LIKE.
    pub fn not_ilike(column: impl Into<Column>, pattern: impl Into<String>) -> Self {
        Self::compare(
            column.into(),
            SqlOperator::NotILike,
            Value::Text(pattern.into()),
        )
    }

    /// `column IN (values)`
    pub fn is_in<V: Into<Value>>(
        column: impl Into<Column>,
        values: impl IntoIterator<Item = V>,
    ) -> Self {
        let vals: Vec<Value> = values.into_iter().map(|v| v.into()).collect();
        Self::compare(column.into(), SqlOperator::In, Operand::List(vals))
    }

    /// `column NOT IN (values)`
    pub fn not_in<V: Into<Value>>(
        column: impl Into<Column>,
        values: impl IntoIterator<Item = V>,
    ) -> Self {
        let vals: Vec<Value> = values.into_iter().map(|v| v.into()).collect();
        Self::compare(column.into(), SqlOperator::NotIn, Operand::List(vals))
    }

    /// `column IS NULL`
    pub fn is_null(column: impl Into<Column>) -> Self {
        Self::compare(column.into(), SqlOperator::IsNull, Value::Null)
    }

    /// `column IS NOT NULL`
    pub fn is_not_null(column: impl Into<Column>) -> Self {
        Self::compare(column.into(), SqlOperator::IsNotNull, Value::Null)
    }

    /// `column=CURRENT_DATE`
    pub fn current_date(column: impl Into<Column>) -> Self {
        Self::compare(column.into(), SqlOperator::CurrentDate, Value::Null)
    }

    /// `column=CURRENT_TIME`
    pub fn current_time(column: impl Into<Column>) -> Self {
        Self::compare(column.into(), SqlOperator::CurrentTime, Value::Null)
    }

    /// `column=CURRENT_TIMESTAMP`
    pub fn current_timestamp(column: impl Into<Column>) -> Self {
        Self::compare(column.into(), SqlOperator::CurrentTimestamp, Value::Null)
    }

    /// Raw SQL with positional bind values. The text must carry exactly one
    /// `?` per binding; the compiler passes both through untouched.
    pub fn verbatim<V: Into<Value>>(
        sql: impl Into<String>,
        bindings: impl IntoIterator<Item = V>,
    ) -> Self {
        Criterion::Verbatim(VerbatimSql {
            sql: sql.into(),
            bindings: bindings.into_iter().map(|v| v.into()).collect(),
        })
    }

    /// Mark every leaf in this tree as case-insensitive.
    pub fn ignore_case(mut self) -> Self {
        self.set_ignore_case();
        self
    }

    fn set_ignore_case(&mut self) {
        match self {
            Criterion::Leaf(leaf) => leaf.ignore_case = true,
            Criterion::Composite(c) => {
                for part in &mut c.parts {
                    part.set_ignore_case();
                }
            }
            Criterion::Verbatim(_) => {}
        }
    }

    /// Combine with AND. A composite already joined by AND absorbs the new
    /// part instead of nesting, so `a.and(b).and(c)` stays a single
    /// three-part composite.
    pub fn and(self, other: Criterion) -> Criterion {
        self.combine(Conjunction::And, other)
    }

    /// Combine with OR, flattening same-conjunction chains like [`and`].
    ///
    /// [`and`]: Criterion::and
    pub fn or(self, other: Criterion) -> Criterion {
        self.combine(Conjunction::Or, other)
    }

    fn combine(self, conjunction: Conjunction, other: Criterion) -> Criterion {
        match self {
            Criterion::Composite(mut c) if c.conjunction == conjunction => {
                c.parts.push(other);
                Criterion::Composite(c)
            }
            leaf_or_other => Criterion::Composite(Composite {
                conjunction,
                parts: vec![leaf_or_other, other],
            }),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Criterion::Leaf(_))
    }

    pub fn is_composite(&self) -> bool {
        matches!(self, Criterion::Composite(_))
    }

    pub fn is_verbatim(&self) -> bool {
        matches!(self, Criterion::Verbatim(_))
    }
}

/// Diagnostic rendering; the SQL compiler is `quarry::sql`, not this.
impl std::fmt::Display for Criterion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Criterion::Leaf(leaf) => {
                if leaf.op.needs_value() {
                    write!(f, "{} {} {}", leaf.left, leaf.op, leaf.right)
                } else {
                    write!(f, "{} {}", leaf.left, leaf.op)
                }
            }
            Criterion::Composite(c) => {
                for (i, part) in c.parts.iter().enumerate() {
                    if i > 0 {
                        write!(f, "{}", c.conjunction.sql_keyword())?;
                    }
                    write!(f, "({})", part)?;
                }
                Ok(())
            }
            Criterion::Verbatim(v) => write!(f, "{}", v.sql),
        }
    }
}
