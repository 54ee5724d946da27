//! End-to-end SELECT assembly tests.

use pretty_assertions::assert_eq;

use crate::criteria::{Column, Criteria, Criterion, JoinKind, SortOrder, Value};

#[test]
fn test_simple_select() {
    let query = Criteria::new()
        .columns(["users.id", "users.email"])
        .compile()
        .unwrap();
    assert_eq!(query.sql(), "SELECT users.id, users.email FROM users");
    assert!(query.bindings().is_empty());
}

#[test]
fn test_where_and_chain() {
    let query = Criteria::new()
        .columns(["t.col1", "t.col2"])
        .where_eq("t.col1", "x")
        .where_eq("t.col2", "y")
        .compile()
        .unwrap();
    assert_eq!(
        query.sql(),
        "SELECT t.col1, t.col2 FROM t WHERE (t.col1=? AND t.col2=?)"
    );
    assert_eq!(
        query.bindings(),
        &[Value::Text("x".into()), Value::Text("y".into())]
    );
}

#[test]
fn test_single_condition_renders_unparenthesized() {
    let query = Criteria::new()
        .column("t.a")
        .where_eq("t.a", 1)
        .compile()
        .unwrap();
    assert_eq!(query.sql(), "SELECT t.a FROM t WHERE t.a=?");
    assert_eq!(query.bindings(), &[Value::Int(1)]);
}

#[test]
fn test_nested_boolean_tree_binds_depth_first() {
    let tree = Criterion::eq(Column::new("t", "a"), "a")
        .and(Criterion::eq(Column::new("t", "b"), "b"))
        .or(Criterion::eq(Column::new("t", "c"), "c").and(Criterion::eq(Column::new("t", "d"), "d")));
    let query = Criteria::new()
        .column("t.a")
        .where_criterion(tree)
        .compile()
        .unwrap();
    assert_eq!(
        query.sql(),
        "SELECT t.a FROM t WHERE ((t.a=? AND t.b=?) OR (t.c=? AND t.d=?))"
    );
    let bound: Vec<String> = query
        .bindings()
        .iter()
        .map(|v| v.to_string())
        .collect();
    assert_eq!(bound, vec!["'a'", "'b'", "'c'", "'d'"]);
}

#[test]
fn test_placeholders_align_with_bindings() {
    let query = Criteria::new()
        .columns(["t.a", "t.b"])
        .where_eq("t.a", 1)
        .and(Criterion::is_in(Column::new("t", "b"), [Value::Int(2), Value::Null]))
        .and(Criterion::like(Column::new("t", "c"), "x%"))
        .having(Criterion::gt(Column::new("t", "n"), 10))
        .group_by(["t.a"])
        .compile()
        .unwrap();
    assert_eq!(
        query.sql().matches('?').count(),
        query.bindings().len()
    );
}

#[test]
fn test_order_by_limit_offset() {
    let query = Criteria::new()
        .column("users.id")
        .order_by("users.created_at", SortOrder::Desc)
        .order_by("users.id", SortOrder::Asc)
        .limit(10)
        .offset(20)
        .compile()
        .unwrap();
    assert_eq!(
        query.sql(),
        "SELECT users.id FROM users ORDER BY users.created_at DESC, users.id ASC LIMIT 10 OFFSET 20"
    );
}

#[test]
fn test_distinct() {
    let query = Criteria::new()
        .column("users.role")
        .distinct()
        .compile()
        .unwrap();
    assert_eq!(query.sql(), "SELECT DISTINCT users.role FROM users");
}

#[test]
fn test_left_join() {
    let query = Criteria::new()
        .columns(["u.id", "p.title"])
        .join(JoinKind::Left, "u.id", "p.user_id")
        .compile()
        .unwrap();
    assert_eq!(
        query.sql(),
        "SELECT u.id, p.title FROM u LEFT JOIN p ON u.id=p.user_id"
    );
}

#[test]
fn test_alias_map_renders_real_table() {
    let query = Criteria::new()
        .columns(["u.id", "p.title"])
        .alias("u", "users")
        .alias("p", "posts")
        .join(JoinKind::Inner, "u.id", "p.user_id")
        .compile()
        .unwrap();
    assert_eq!(
        query.sql(),
        "SELECT u.id, p.title FROM users u INNER JOIN posts p ON u.id=p.user_id"
    );
}

#[test]
fn test_group_by_and_having() {
    let query = Criteria::new()
        .column("orders.status")
        .group_by(["orders.status"])
        .having(Criterion::gt(Column::new("orders", "total"), 100))
        .compile()
        .unwrap();
    assert_eq!(
        query.sql(),
        "SELECT orders.status FROM orders GROUP BY orders.status HAVING orders.total>?"
    );
    assert_eq!(query.bindings(), &[Value::Int(100)]);
}

#[test]
fn test_where_tree_discovers_from_table() {
    let query = Criteria::new()
        .where_eq("events.kind", "signup")
        .compile()
        .unwrap();
    assert_eq!(query.sql(), "SELECT * FROM events WHERE events.kind=?");
}

#[test]
fn test_unqualified_columns_fail_fast() {
    let err = Criteria::new()
        .column("name")
        .compile()
        .unwrap_err();
    assert!(err.to_string().contains("no table to select from"));
}

#[test]
fn test_unknown_db_name_fails_fast() {
    let err = Criteria::new()
        .column("t.a")
        .db_name("infernodb")
        .compile()
        .unwrap_err();
    assert!(err.to_string().contains("unknown database name"));
}
