//! Catch-all rendering: `lvalue OP rvalue`, each side through the
//! object-or-column renderer.

use crate::criteria::{Leaf, Operand};
use crate::error::{QuarryError, QuarryResult};
use crate::sql::adapter::Adapter;
use crate::sql::part::StatementPart;

/// Render one operand: a column as its qualified name with no binding,
/// anything else as a `?` placeholder with the value registered.
///
/// With `ignore_case`, a column name is always wrapped in the adapter's
/// ignore-case function; a value placeholder only when the value is text.
pub(crate) fn operand_part(
    operand: &Operand,
    ignore_case: bool,
    adapter: &dyn Adapter,
) -> QuarryResult<StatementPart> {
    match operand {
        Operand::Column(col) => {
            let name = col.qualified_name();
            let sql = if ignore_case {
                adapter.ignore_case(&name)
            } else {
                name
            };
            Ok(StatementPart::sql(sql))
        }
        Operand::Value(value) => {
            let mut part = StatementPart::empty();
            if ignore_case && value.is_text() {
                part.append_sql(adapter.ignore_case("?"));
            } else {
                part.append_sql("?");
            }
            part.push_binding(value.clone());
            Ok(part)
        }
        Operand::Wrapped(wrapper) => {
            operand_part(&Operand::Value(wrapper.scalar_value()), ignore_case, adapter)
        }
        Operand::List(_) => Err(QuarryError::config(
            "list operand is only valid with IN / NOT IN",
        )),
    }
}

pub(crate) fn build(
    leaf: &Leaf,
    ignore_case: bool,
    adapter: &dyn Adapter,
) -> QuarryResult<StatementPart> {
    let ignore = ignore_case || leaf.ignore_case;
    let mut part = operand_part(&leaf.left, ignore, adapter)?;
    part.append_sql(leaf.op.sql_symbol());
    if leaf.op.needs_value() {
        part.append(operand_part(&leaf.right, ignore, adapter)?);
    }
    Ok(part)
}
