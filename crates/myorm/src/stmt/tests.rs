//! Integration tests for the stmt module.

use crate::ops::{Fragment, OperatorRegistry};
use crate::stmt::{delete, insert, select, update, WhereClause};
use crate::value::Value;

#[test]
fn every_builder_resolves_through_the_same_registry() {
    let mut registry = OperatorRegistry::new();
    registry.register("eq", |column: &str, _: &Value| {
        Ok(Fragment::raw(format!("{column} = 'overridden'")))
    });

    let select_sql = select(&registry, "users")
        .eq("status", "x")
        .generate()
        .unwrap()
        .sql;
    let update_sql = update(&registry, "users")
        .set("a", 1)
        .eq("status", "x")
        .generate()
        .unwrap()
        .sql;
    let delete_sql = delete(&registry, "users")
        .eq("status", "x")
        .generate()
        .unwrap()
        .sql;

    for sql in [select_sql, update_sql, delete_sql] {
        assert!(sql.contains("status = 'overridden'"), "got: {sql}");
    }
}

#[test]
fn where_clause_condition_count_matches_leaves() {
    let registry = OperatorRegistry::new();
    for leaves in 1..=5usize {
        let mut clause = WhereClause::new();
        for i in 0..leaves {
            clause.eq(&format!("col{i}"), i as i64);
        }
        let statement = select(&registry, "t")
            .where_clause(clause)
            .generate()
            .unwrap();
        assert_eq!(statement.sql.matches(" AND ").count(), leaves - 1);
        assert_eq!(statement.params.len(), leaves);
    }
}

#[test]
fn insert_then_select_round_trip_shapes() {
    let registry = OperatorRegistry::new();

    let write = insert("users")
        .set("id", "507f1f77bcf86cd799439011")
        .set("name", "Jo")
        .generate()
        .unwrap();
    assert_eq!(write.sql, "INSERT INTO users (id, name) VALUES (?, ?)");

    let read = select(&registry, "users")
        .eq("id", "507f1f77bcf86cd799439011")
        .limit(1)
        .generate()
        .unwrap();
    assert_eq!(read.sql, "SELECT * FROM users WHERE id = ? LIMIT 1");
    assert_eq!(read.params, vec![write.params[0].clone()]);
}

#[test]
fn mutations_without_where_render_bare() {
    let registry = OperatorRegistry::new();
    let update_sql = update(&registry, "users")
        .set("status", "archived")
        .generate()
        .unwrap()
        .sql;
    let delete_sql = delete(&registry, "users").generate().unwrap().sql;
    assert!(!update_sql.contains("WHERE"));
    assert!(!delete_sql.contains("WHERE"));
}

#[test]
fn table_names_are_escaped() {
    let registry = OperatorRegistry::new();
    let statement = select(&registry, "my table").generate().unwrap();
    assert_eq!(statement.sql, "SELECT * FROM `my table`");

    assert!(select(&registry, "bad`name").generate().is_err());
}

#[test]
fn debug_sql_keeps_placeholder_order() {
    let registry = OperatorRegistry::new();
    let statement = update(&registry, "users")
        .set("name", "Jo")
        .op("id", "in", vec![1i64, 2])
        .generate()
        .unwrap();
    assert_eq!(
        statement.to_debug_sql(),
        "UPDATE users SET name = 'Jo' WHERE id IN (1, 2)"
    );
}
