//! Builder dispatch tests: NULL rewrite, IN lists, LIKE downgrade,
//! verbatim pass-through, wrapped scalars, chain failure.

use std::sync::Arc;

use pretty_assertions::assert_eq;

use crate::criteria::{
    Column, Criteria, Criterion, Leaf, Operand, ScalarValue, SqlOperator, Value,
};
use crate::error::{QuarryError, QuarryResult};
use crate::sql::adapter::{Adapter, Postgres};
use crate::sql::builders::{BuilderChain, CustomBuilder, WherePartBuilder};
use crate::sql::part::StatementPart;

fn compile_where(criterion: Criterion) -> crate::sql::Query {
    Criteria::new()
        .column("t.a")
        .where_criterion(criterion)
        .compile()
        .unwrap()
}

#[test]
fn test_eq_null_rewrites_to_is_null() {
    let query = compile_where(Criterion::new(Column::new("t", "a"), Value::Null));
    assert_eq!(query.sql(), "SELECT t.a FROM t WHERE t.a IS NULL");
    assert!(query.bindings().is_empty());
}

#[test]
fn test_ne_null_rewrites_to_is_not_null() {
    let query = compile_where(Criterion::ne(Column::new("t", "a"), Value::Null));
    assert_eq!(query.sql(), "SELECT t.a FROM t WHERE t.a IS NOT NULL");
    assert!(query.bindings().is_empty());
}

#[test]
fn test_explicit_null_tests() {
    let query = compile_where(Criterion::is_null(Column::new("t", "a")));
    assert_eq!(query.sql(), "SELECT t.a FROM t WHERE t.a IS NULL");

    let query = compile_where(Criterion::is_not_null(Column::new("t", "a")));
    assert_eq!(query.sql(), "SELECT t.a FROM t WHERE t.a IS NOT NULL");
}

#[test]
fn test_in_list() {
    let query = compile_where(Criterion::is_in(Column::new("t", "a"), [1, 2, 3]));
    assert_eq!(query.sql(), "SELECT t.a FROM t WHERE t.a IN (?,?,?)");
    assert_eq!(
        query.bindings(),
        &[Value::Int(1), Value::Int(2), Value::Int(3)]
    );
}

#[test]
fn test_in_with_null_element_ors_is_null() {
    let query = compile_where(Criterion::is_in(
        Column::new("t", "a"),
        [Value::Int(1), Value::Null, Value::Int(2)],
    ));
    assert_eq!(
        query.sql(),
        "SELECT t.a FROM t WHERE (t.a IN (?,?) OR t.a IS NULL)"
    );
    assert_eq!(query.bindings(), &[Value::Int(1), Value::Int(2)]);
}

#[test]
fn test_not_in_with_null_element_ands_is_not_null() {
    let query = compile_where(Criterion::not_in(
        Column::new("t", "a"),
        [Value::Int(1), Value::Null],
    ));
    assert_eq!(
        query.sql(),
        "SELECT t.a FROM t WHERE (t.a NOT IN (?) AND t.a IS NOT NULL)"
    );
    assert_eq!(query.bindings(), &[Value::Int(1)]);
}

#[test]
fn test_in_with_only_null_reduces_to_null_test() {
    let query = compile_where(Criterion::is_in(Column::new("t", "a"), [Value::Null]));
    assert_eq!(query.sql(), "SELECT t.a FROM t WHERE t.a IS NULL");
    assert!(query.bindings().is_empty());
}

#[test]
fn test_in_rejects_non_list_operand() {
    let leaf = Criterion::compare(Column::new("t", "a"), SqlOperator::In, 5);
    let err = Criteria::new()
        .column("t.a")
        .where_criterion(leaf)
        .compile()
        .unwrap_err();
    assert!(matches!(err, QuarryError::InOperand { .. }));
}

#[test]
fn test_in_rejects_empty_list() {
    let leaf = Criterion::is_in(Column::new("t", "a"), Vec::<Value>::new());
    let err = Criteria::new()
        .column("t.a")
        .where_criterion(leaf)
        .compile()
        .unwrap_err();
    assert!(err.to_string().contains("at least one value"));
}

#[test]
fn test_like_without_wildcard_downgrades_to_eq() {
    let query = compile_where(Criterion::like(Column::new("t", "name"), "no wildcards"));
    assert_eq!(query.sql(), "SELECT t.a FROM t WHERE t.name=?");
    assert_eq!(query.bindings(), &[Value::Text("no wildcards".into())]);
}

#[test]
fn test_like_with_wildcard_stays_like() {
    let query = compile_where(Criterion::like(Column::new("t", "name"), "50%"));
    assert_eq!(query.sql(), "SELECT t.a FROM t WHERE t.name LIKE ?");
    assert_eq!(query.bindings(), &[Value::Text("50%".into())]);
}

#[test]
fn test_like_with_escaped_wildcard_downgrades_and_strips_escape() {
    let query = compile_where(Criterion::like(Column::new("t", "name"), "50\\%"));
    assert_eq!(query.sql(), "SELECT t.a FROM t WHERE t.name=?");
    assert_eq!(query.bindings(), &[Value::Text("50%".into())]);
}

#[test]
fn test_not_like_without_wildcard_downgrades_to_ne() {
    let query = compile_where(Criterion::not_like(Column::new("t", "name"), "plain"));
    assert_eq!(query.sql(), "SELECT t.a FROM t WHERE t.name!=?");
    assert_eq!(query.bindings(), &[Value::Text("plain".into())]);
}

#[test]
fn test_like_converts_alternate_wildcards() {
    let query = compile_where(Criterion::like(Column::new("t", "name"), "jo*n?"));
    assert_eq!(query.sql(), "SELECT t.a FROM t WHERE t.name LIKE ?");
    assert_eq!(query.bindings(), &[Value::Text("jo%n_".into())]);
}

#[test]
fn test_like_rejects_non_text_pattern() {
    let leaf = Criterion::compare(Column::new("t", "name"), SqlOperator::Like, 42);
    let err = Criteria::new()
        .column("t.a")
        .where_criterion(leaf)
        .compile()
        .unwrap_err();
    assert!(matches!(err, QuarryError::PatternType { .. }));
    assert!(err.to_string().contains("LIKE"));
}

#[test]
fn test_current_date_marker() {
    let query = compile_where(Criterion::current_date(Column::new("t", "created")));
    assert_eq!(query.sql(), "SELECT t.a FROM t WHERE t.created=CURRENT_DATE");
    assert!(query.bindings().is_empty());
}

#[test]
fn test_current_timestamp_marker() {
    let query = compile_where(Criterion::current_timestamp(Column::new("t", "touched")));
    assert_eq!(
        query.sql(),
        "SELECT t.a FROM t WHERE t.touched=CURRENT_TIMESTAMP"
    );
}

#[test]
fn test_verbatim_passes_through() {
    let query = compile_where(Criterion::verbatim(
        "t.a = ? + ?",
        [Value::Int(1), Value::Int(2)],
    ));
    assert_eq!(query.sql(), "SELECT t.a FROM t WHERE t.a = ? + ?");
    assert_eq!(query.bindings(), &[Value::Int(1), Value::Int(2)]);
}

#[derive(Debug)]
struct Status(&'static str);

impl ScalarValue for Status {
    fn scalar_value(&self) -> Value {
        Value::Text(self.0.to_string())
    }
}

#[derive(Debug)]
struct NullKey;

impl ScalarValue for NullKey {
    fn scalar_value(&self) -> Value {
        Value::Null
    }
}

#[test]
fn test_wrapped_scalar_unwraps_and_redispatches() {
    let leaf = Criterion::compare(
        Column::new("t", "status"),
        SqlOperator::Eq,
        Operand::Wrapped(Arc::new(Status("active"))),
    );
    let query = compile_where(leaf);
    assert_eq!(query.sql(), "SELECT t.a FROM t WHERE t.status=?");
    assert_eq!(query.bindings(), &[Value::Text("active".into())]);
}

#[test]
fn test_wrapped_null_payload_hits_null_rewrite() {
    let leaf = Criterion::compare(
        Column::new("t", "owner"),
        SqlOperator::Eq,
        Operand::Wrapped(Arc::new(NullKey)),
    );
    let query = compile_where(leaf);
    assert_eq!(query.sql(), "SELECT t.a FROM t WHERE t.owner IS NULL");
    assert!(query.bindings().is_empty());
}

#[test]
fn test_chain_without_catch_all_fails_loudly() {
    let chain = BuilderChain::new(vec![WherePartBuilder::Verbatim]);
    let criteria = Criteria::new().column("t.a").where_eq("t.a", 1);
    let err = criteria.compile_with(&Postgres, &chain).unwrap_err();
    assert!(matches!(err, QuarryError::NoApplicableBuilder { .. }));
}

#[derive(Debug)]
struct SoundexBuilder;

impl CustomBuilder for SoundexBuilder {
    fn is_applicable(&self, leaf: &Leaf, _adapter: &dyn Adapter) -> bool {
        matches!(&leaf.left, Operand::Column(c) if c.name == "surname")
    }

    fn build(
        &self,
        leaf: &Leaf,
        _ignore_case: bool,
        _adapter: &dyn Adapter,
    ) -> QuarryResult<StatementPart> {
        let mut part = StatementPart::empty();
        if let Operand::Column(col) = &leaf.left {
            part.append_sql(format!("SOUNDEX({})=SOUNDEX(?)", col.qualified_name()));
        }
        if let Operand::Value(value) = &leaf.right {
            part.push_binding(value.clone());
        }
        Ok(part)
    }
}

#[test]
fn test_custom_builder_takes_priority_at_its_position() {
    let chain = BuilderChain::new(vec![
        WherePartBuilder::Verbatim,
        WherePartBuilder::Custom(Arc::new(SoundexBuilder)),
        WherePartBuilder::EnumValue,
        WherePartBuilder::NullValue,
        WherePartBuilder::InList,
        WherePartBuilder::Like,
        WherePartBuilder::CurrentDateTime,
        WherePartBuilder::Standard,
    ]);
    let criteria = Criteria::new()
        .column("people.id")
        .where_eq("people.surname", "smith");
    let query = criteria.compile_with(&Postgres, &chain).unwrap();
    assert_eq!(
        query.sql(),
        "SELECT people.id FROM people WHERE SOUNDEX(people.surname)=SOUNDEX(?)"
    );
    assert_eq!(query.bindings(), &[Value::Text("smith".into())]);
}
