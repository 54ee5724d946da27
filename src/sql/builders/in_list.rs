//! IN / NOT IN rendering with SQL's ternary NULL semantics.
//!
//! `x IN (list)` never matches when `x` is NULL, and a NULL element inside
//! the list can never match either. NULL elements are therefore pulled out
//! of the placeholder list and expressed as an explicit `IS NULL` (OR, for
//! IN) or `IS NOT NULL` (AND, for NOT IN) on the left value.

use crate::criteria::{Leaf, Operand, SqlOperator};
use crate::error::{QuarryError, QuarryResult};
use crate::sql::adapter::Adapter;
use crate::sql::builders::standard::operand_part;
use crate::sql::part::StatementPart;

pub(crate) fn applies(leaf: &Leaf) -> bool {
    matches!(leaf.op, SqlOperator::In | SqlOperator::NotIn)
}

pub(crate) fn build(
    leaf: &Leaf,
    ignore_case: bool,
    adapter: &dyn Adapter,
) -> QuarryResult<StatementPart> {
    let values = match &leaf.right {
        Operand::List(values) => values,
        other => {
            return Err(QuarryError::InOperand {
                operator: leaf.op.sql_symbol().trim(),
                found: other.type_name().to_string(),
            });
        }
    };
    if values.is_empty() {
        return Err(QuarryError::config(format!(
            "{} requires at least one value",
            leaf.op.sql_symbol().trim()
        )));
    }

    let ignore_requested = ignore_case || leaf.ignore_case;
    let mut null_contained = false;
    // The lvalue is wrapped when ANY element was compared case-insensitively.
    let mut any_ignored = false;
    let mut placeholders = StatementPart::empty();
    let mut first = true;
    for value in values {
        if value.is_null() {
            null_contained = true;
            continue;
        }
        if !first {
            placeholders.append_sql(",");
        }
        first = false;
        if ignore_requested && value.is_text() {
            any_ignored = true;
            placeholders.append_sql(adapter.ignore_case("?"));
        } else {
            placeholders.append_sql("?");
        }
        placeholders.push_binding(value.clone());
    }

    let null_test = match leaf.op {
        SqlOperator::In => SqlOperator::IsNull,
        _ => SqlOperator::IsNotNull,
    };

    if first {
        // Every element was NULL; only the null test remains.
        let mut part = operand_part(&leaf.left, false, adapter)?;
        part.append_sql(null_test.sql_symbol());
        return Ok(part);
    }

    let mut inner = operand_part(&leaf.left, any_ignored, adapter)?;
    inner.append_sql(leaf.op.sql_symbol());
    inner.append_sql("(");
    inner.append(placeholders);
    inner.append_sql(")");

    if !null_contained {
        return Ok(inner);
    }

    let connective = match leaf.op {
        SqlOperator::In => " OR ",
        _ => " AND ",
    };
    let mut part = StatementPart::empty();
    part.append_sql("(");
    part.append(inner);
    part.append_sql(connective);
    part.append(operand_part(&leaf.left, false, adapter)?);
    part.append_sql(null_test.sql_symbol());
    part.append_sql(")");
    Ok(part)
}
