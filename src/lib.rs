//! quarry: criteria-first SQL compiler.
//!
//! Build queries as values ([`Criteria`](criteria::Criteria) trees of
//! [`Criterion`](criteria::Criterion) conditions), then compile them into a
//! [`Query`](sql::Query): parameterized SQL text plus its bind values in
//! placeholder order, ready for any prepared-statement API.

pub mod criteria;
pub mod error;
pub mod sql;

pub mod prelude {
    pub use crate::criteria::*;
    pub use crate::error::*;
    pub use crate::sql::adapter::{Derby, MySql, Postgres, Sqlite};
    pub use crate::sql::{
        Adapter, BuilderChain, CustomBuilder, Query, SqlBuilder, StatementPart, WherePartBuilder,
    };
}
