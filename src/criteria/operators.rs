use serde::{Deserialize, Serialize};

/// Logical connective between the parts of a composite criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Conjunction {
    #[default]
    And,
    Or,
}

impl Conjunction {
    /// The SQL keyword with surrounding spaces, ready for concatenation.
    pub fn sql_keyword(&self) -> &'static str {
        match self {
            Conjunction::And => " AND ",
            Conjunction::Or => " OR ",
        }
    }
}

impl std::fmt::Display for Conjunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.sql_keyword().trim())
    }
}

/// Sort order direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn sql_keyword(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

/// Join type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JoinKind {
    Inner,
    Left,
    Right,
    /// FULL OUTER JOIN
    Full,
    /// CROSS JOIN
    Cross,
}

impl JoinKind {
    pub fn sql_keyword(&self) -> &'static str {
        match self {
            JoinKind::Inner => "INNER",
            JoinKind::Left => "LEFT",
            JoinKind::Right => "RIGHT",
            JoinKind::Full => "FULL",
            JoinKind::Cross => "CROSS",
        }
    }
}

/// Comparison operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SqlOperator {
    /// Equal (=)
    Eq,
    /// Not equal (!=)
    Ne,
    /// Not equal, alternate spelling (<>)
    AltNe,
    /// Greater than (>)
    Gt,
    /// Greater than or equal (>=)
    Gte,
    /// Less than (<)
    Lt,
    /// Less than or equal (<=)
    Lte,
    /// LIKE pattern match
    Like,
    /// NOT LIKE pattern match
    NotLike,
    /// ILIKE case-insensitive pattern match
    ILike,
    /// NOT ILIKE case-insensitive pattern match
    NotILike,
    /// IN list
    In,
    /// NOT IN list
    NotIn,
    /// IS NULL
    IsNull,
    /// IS NOT NULL
    IsNotNull,
    /// CURRENT_DATE marker
    CurrentDate,
    /// CURRENT_TIME marker
    CurrentTime,
    /// CURRENT_TIMESTAMP marker
    CurrentTimestamp,
}

impl SqlOperator {
    /// Returns the SQL text for this operator. Word operators carry their
    /// surrounding spaces so fragments concatenate without extra glue;
    /// symbol operators render tight (`a.x=?`).
    pub fn sql_symbol(&self) -> &'static str {
        match self {
            SqlOperator::Eq => "=",
            SqlOperator::Ne => "!=",
            SqlOperator::AltNe => "<>",
            SqlOperator::Gt => ">",
            SqlOperator::Gte => ">=",
            SqlOperator::Lt => "<",
            SqlOperator::Lte => "<=",
            SqlOperator::Like => " LIKE ",
            SqlOperator::NotLike => " NOT LIKE ",
            SqlOperator::ILike => " ILIKE ",
            SqlOperator::NotILike => " NOT ILIKE ",
            SqlOperator::In => " IN ",
            SqlOperator::NotIn => " NOT IN ",
            SqlOperator::IsNull => " IS NULL",
            SqlOperator::IsNotNull => " IS NOT NULL",
            SqlOperator::CurrentDate => "CURRENT_DATE",
            SqlOperator::CurrentTime => "CURRENT_TIME",
            SqlOperator::CurrentTimestamp => "CURRENT_TIMESTAMP",
        }
    }

    /// Returns true if this operator requires a right-hand value.
    /// The NULL tests and the CURRENT_* markers don't take one.
    pub fn needs_value(&self) -> bool {
        !self.is_null_test() && !self.is_current_marker()
    }

    /// IS NULL / IS NOT NULL.
    pub fn is_null_test(&self) -> bool {
        matches!(self, SqlOperator::IsNull | SqlOperator::IsNotNull)
    }

    /// CURRENT_DATE / CURRENT_TIME / CURRENT_TIMESTAMP.
    pub fn is_current_marker(&self) -> bool {
        matches!(
            self,
            SqlOperator::CurrentDate | SqlOperator::CurrentTime | SqlOperator::CurrentTimestamp
        )
    }

    /// Any of the four LIKE-family operators.
    pub fn is_like(&self) -> bool {
        matches!(
            self,
            SqlOperator::Like | SqlOperator::NotLike | SqlOperator::ILike | SqlOperator::NotILike
        )
    }

    /// The case-insensitive LIKE spellings.
    pub fn is_case_insensitive_like(&self) -> bool {
        matches!(self, SqlOperator::ILike | SqlOperator::NotILike)
    }

    /// Map a LIKE-family operator to its case-insensitive spelling.
    pub fn ilike_form(&self) -> SqlOperator {
        match self {
            SqlOperator::Like | SqlOperator::ILike => SqlOperator::ILike,
            SqlOperator::NotLike | SqlOperator::NotILike => SqlOperator::NotILike,
            other => *other,
        }
    }

    /// Map a LIKE-family operator to its case-sensitive spelling.
    pub fn like_form(&self) -> SqlOperator {
        match self {
            SqlOperator::Like | SqlOperator::ILike => SqlOperator::Like,
            SqlOperator::NotLike | SqlOperator::NotILike => SqlOperator::NotLike,
            other => *other,
        }
    }
}

impl std::fmt::Display for SqlOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.sql_symbol().trim())
    }
}
