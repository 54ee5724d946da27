//! Raw-SQL criteria pass through unchanged, bindings included.

use crate::criteria::Criterion;
use crate::error::{QuarryError, QuarryResult};
use crate::sql::part::StatementPart;

pub(crate) fn build(criterion: &Criterion) -> QuarryResult<StatementPart> {
    match criterion {
        Criterion::Verbatim(v) => {
            let mut part = StatementPart::sql(v.sql.clone());
            for value in &v.bindings {
                part.push_binding(value.clone());
            }
            Ok(part)
        }
        other => Err(QuarryError::config(format!(
            "verbatim builder invoked on a non-verbatim expression: {}",
            other
        ))),
    }
}
