//! NULL-test rendering and the `= NULL` / `!= NULL` rewrite.

use crate::criteria::{Leaf, SqlOperator};
use crate::error::{QuarryError, QuarryResult};
use crate::sql::adapter::Adapter;
use crate::sql::builders::standard::operand_part;
use crate::sql::part::StatementPart;

pub(crate) fn applies(leaf: &Leaf) -> bool {
    if leaf.op.is_null_test() {
        return true;
    }
    matches!(
        leaf.op,
        SqlOperator::Eq | SqlOperator::Ne | SqlOperator::AltNe
    ) && leaf.right.is_null()
}

pub(crate) fn build(leaf: &Leaf, adapter: &dyn Adapter) -> QuarryResult<StatementPart> {
    let op = match leaf.op {
        SqlOperator::IsNull | SqlOperator::IsNotNull => leaf.op,
        SqlOperator::Eq => SqlOperator::IsNull,
        SqlOperator::Ne | SqlOperator::AltNe => SqlOperator::IsNotNull,
        other => {
            return Err(QuarryError::config(format!(
                "null-value builder invoked for operator {}",
                other
            )));
        }
    };
    let mut part = operand_part(&leaf.left, false, adapter)?;
    part.append_sql(op.sql_symbol());
    Ok(part)
}
