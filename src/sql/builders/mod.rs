//! The WHERE-clause builder chain.
//!
//! Each builder renders one category of leaf expression into a
//! [`StatementPart`]. The chain is an ordered list checked front to back;
//! the first applicable builder wins, and the catch-all at the end accepts
//! everything, so dispatch can only fail on a custom chain without one.
//! A chain is built once at wiring time and never mutated afterwards; it is
//! `Send + Sync` and shared freely between compilations.

pub mod current_datetime;
pub mod enum_value;
pub mod in_list;
pub mod like;
pub mod null_value;
pub mod standard;
pub mod verbatim;

use std::sync::Arc;

use tracing::debug;

use crate::criteria::{Criterion, Leaf};
use crate::error::{QuarryError, QuarryResult};
use crate::sql::adapter::Adapter;
use crate::sql::part::StatementPart;

/// Extension seam: a user-supplied builder slotted into the chain at
/// construction time.
pub trait CustomBuilder: std::fmt::Debug + Send + Sync {
    fn is_applicable(&self, leaf: &Leaf, adapter: &dyn Adapter) -> bool;
    fn build(
        &self,
        leaf: &Leaf,
        ignore_case: bool,
        adapter: &dyn Adapter,
    ) -> QuarryResult<StatementPart>;
}

/// One builder strategy, checked in chain order.
#[derive(Debug, Clone)]
pub enum WherePartBuilder {
    /// Raw SQL passes through with its stored bindings.
    Verbatim,
    /// Wrapped scalars unwrap and re-dispatch through the rest of the chain.
    EnumValue,
    /// NULL tests and the `= NULL` / `!= NULL` rewrite.
    NullValue,
    /// IN / NOT IN with ternary-NULL augmentation.
    InList,
    /// LIKE family with wildcard conversion and equality downgrade.
    Like,
    /// CURRENT_DATE / CURRENT_TIME / CURRENT_TIMESTAMP markers.
    CurrentDateTime,
    /// Catch-all `lvalue OP rvalue`; always applicable, keep it last.
    Standard,
    /// User-supplied strategy.
    Custom(Arc<dyn CustomBuilder>),
}

impl WherePartBuilder {
    fn is_applicable(&self, criterion: &Criterion, adapter: &dyn Adapter) -> bool {
        match (self, criterion) {
            (WherePartBuilder::Verbatim, Criterion::Verbatim(_)) => true,
            (WherePartBuilder::EnumValue, Criterion::Leaf(leaf)) => enum_value::applies(leaf),
            (WherePartBuilder::NullValue, Criterion::Leaf(leaf)) => null_value::applies(leaf),
            (WherePartBuilder::InList, Criterion::Leaf(leaf)) => in_list::applies(leaf),
            (WherePartBuilder::Like, Criterion::Leaf(leaf)) => like::applies(leaf),
            (WherePartBuilder::CurrentDateTime, Criterion::Leaf(leaf)) => {
                current_datetime::applies(leaf)
            }
            (WherePartBuilder::Standard, Criterion::Leaf(_)) => true,
            (WherePartBuilder::Custom(builder), Criterion::Leaf(leaf)) => {
                builder.is_applicable(leaf, adapter)
            }
            _ => false,
        }
    }

    fn build(
        &self,
        chain: &BuilderChain,
        position: usize,
        criterion: &Criterion,
        ignore_case: bool,
        adapter: &dyn Adapter,
    ) -> QuarryResult<StatementPart> {
        match self {
            WherePartBuilder::Verbatim => verbatim::build(criterion),
            WherePartBuilder::EnumValue => {
                enum_value::build(chain, position, expect_leaf(criterion)?, ignore_case, adapter)
            }
            WherePartBuilder::NullValue => null_value::build(expect_leaf(criterion)?, adapter),
            WherePartBuilder::InList => {
                in_list::build(expect_leaf(criterion)?, ignore_case, adapter)
            }
            WherePartBuilder::Like => like::build(expect_leaf(criterion)?, ignore_case, adapter),
            WherePartBuilder::CurrentDateTime => {
                current_datetime::build(expect_leaf(criterion)?, adapter)
            }
            WherePartBuilder::Standard => {
                standard::build(expect_leaf(criterion)?, ignore_case, adapter)
            }
            WherePartBuilder::Custom(builder) => {
                builder.build(expect_leaf(criterion)?, ignore_case, adapter)
            }
        }
    }
}

fn expect_leaf(criterion: &Criterion) -> QuarryResult<&Leaf> {
    match criterion {
        Criterion::Leaf(leaf) => Ok(leaf),
        other => Err(QuarryError::config(format!(
            "builder dispatch reached a non-leaf expression: {}",
            other
        ))),
    }
}

/// The ordered builder list. `Default` gives the standard seven-builder
/// chain; [`BuilderChain::new`] accepts any order, custom builders
/// included.
#[derive(Debug, Clone)]
pub struct BuilderChain {
    builders: Vec<WherePartBuilder>,
}

impl Default for BuilderChain {
    fn default() -> Self {
        Self {
            builders: vec![
                WherePartBuilder::Verbatim,
                WherePartBuilder::EnumValue,
                WherePartBuilder::NullValue,
                WherePartBuilder::InList,
                WherePartBuilder::Like,
                WherePartBuilder::CurrentDateTime,
                WherePartBuilder::Standard,
            ],
        }
    }
}

impl BuilderChain {
    /// A chain with the given builders, checked in list order.
    pub fn new(builders: Vec<WherePartBuilder>) -> Self {
        Self { builders }
    }

    /// Render a criterion tree: composites recurse parenthesized, leaves
    /// and verbatim nodes go through builder dispatch.
    pub fn build_criterion(
        &self,
        criterion: &Criterion,
        ignore_case: bool,
        adapter: &dyn Adapter,
    ) -> QuarryResult<StatementPart> {
        match criterion {
            Criterion::Composite(composite) => {
                let mut part = StatementPart::empty();
                part.append_sql("(");
                for (i, child) in composite.parts.iter().enumerate() {
                    if i > 0 {
                        part.append_sql(composite.conjunction.sql_keyword());
                    }
                    part.append(self.build_criterion(child, ignore_case, adapter)?);
                }
                part.append_sql(")");
                Ok(part)
            }
            other => self.dispatch_from(0, other, ignore_case, adapter),
        }
    }

    /// First-applicable-wins dispatch starting at `start`; the enum-value
    /// builder re-enters here to resolve through the remaining chain.
    pub(crate) fn dispatch_from(
        &self,
        start: usize,
        criterion: &Criterion,
        ignore_case: bool,
        adapter: &dyn Adapter,
    ) -> QuarryResult<StatementPart> {
        for (position, builder) in self.builders.iter().enumerate().skip(start) {
            if builder.is_applicable(criterion, adapter) {
                debug!(builder = ?builder, expression = %criterion, "builder selected");
                return builder.build(self, position, criterion, ignore_case, adapter);
            }
        }
        Err(QuarryError::no_applicable_builder(criterion))
    }
}
