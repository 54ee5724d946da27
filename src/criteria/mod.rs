//! The query value model: columns, operators, values, criterion trees.

pub mod column;
pub mod criteria;
pub mod criterion;
pub mod joins;
pub mod operand;
pub mod operators;
pub mod values;

pub use self::column::Column;
pub use self::criteria::{Criteria, OrderBy};
pub use self::criterion::{Composite, Criterion, Leaf, VerbatimSql};
pub use self::joins::Join;
pub use self::operand::{Operand, ScalarValue};
pub use self::operators::{Conjunction, JoinKind, SortOrder, SqlOperator};
pub use self::values::Value;
