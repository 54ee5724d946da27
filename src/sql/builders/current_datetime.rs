//! CURRENT_DATE / CURRENT_TIME / CURRENT_TIMESTAMP markers.
//!
//! The keyword is evaluated by the database at execution time, so the leaf
//! renders as an equality against the bare keyword with no bind value.

use crate::criteria::Leaf;
use crate::error::QuarryResult;
use crate::sql::adapter::Adapter;
use crate::sql::builders::standard::operand_part;
use crate::sql::part::StatementPart;

pub(crate) fn applies(leaf: &Leaf) -> bool {
    leaf.op.is_current_marker()
}

pub(crate) fn build(leaf: &Leaf, adapter: &dyn Adapter) -> QuarryResult<StatementPart> {
    let mut part = operand_part(&leaf.left, false, adapter)?;
    part.append_sql("=");
    part.append_sql(leaf.op.sql_symbol());
    Ok(part)
}
