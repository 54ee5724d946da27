//! Wrapped-scalar unwrapping with re-dispatch.
//!
//! A leaf whose operand is an enum-like wrapper is rewritten with the
//! wrapper's scalar payload and sent back through the rest of the chain, so
//! the unwrapped form gets the same special-case treatment (NULL rewrite,
//! IN handling, LIKE downgrade) a plain value would.

use tracing::trace;

use crate::criteria::{Criterion, Leaf, Operand};
use crate::error::QuarryResult;
use crate::sql::adapter::Adapter;
use crate::sql::builders::BuilderChain;
use crate::sql::part::StatementPart;

pub(crate) fn applies(leaf: &Leaf) -> bool {
    matches!(leaf.left, Operand::Wrapped(_)) || matches!(leaf.right, Operand::Wrapped(_))
}

pub(crate) fn build(
    chain: &BuilderChain,
    position: usize,
    leaf: &Leaf,
    ignore_case: bool,
    adapter: &dyn Adapter,
) -> QuarryResult<StatementPart> {
    let unwrap = |operand: &Operand| match operand {
        Operand::Wrapped(wrapper) => Operand::Value(wrapper.scalar_value()),
        other => other.clone(),
    };
    let unwrapped = Criterion::Leaf(Leaf {
        left: unwrap(&leaf.left),
        op: leaf.op,
        right: unwrap(&leaf.right),
        ignore_case: leaf.ignore_case,
    });
    trace!(expression = %unwrapped, "unwrapped scalar operands, re-dispatching");
    chain.dispatch_from(position + 1, &unwrapped, ignore_case, adapter)
}
