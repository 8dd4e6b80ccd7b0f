//! DELETE statement builder.

use crate::error::DriverResult;
use crate::escape::escape_identifier;
use crate::ops::OperatorRegistry;
use crate::stmt::where_clause::WhereClause;
use crate::stmt::Statement;
use crate::value::Value;

/// DELETE builder: a where clause and an optional row limit.
#[derive(Debug, Clone)]
pub struct Delete<'a> {
    operators: &'a OperatorRegistry,
    table: String,
    where_clause: WhereClause,
    limit: Option<u64>,
}

impl<'a> Delete<'a> {
    pub fn new(operators: &'a OperatorRegistry, table: &str) -> Self {
        Self {
            operators,
            table: table.to_string(),
            where_clause: WhereClause::new(),
            limit: None,
        }
    }

    /// Replace the where clause wholesale.
    pub fn where_clause(mut self, where_clause: WhereClause) -> Self {
        self.where_clause = where_clause;
        self
    }

    /// Add WHERE: column = value
    pub fn eq(mut self, column: &str, value: impl Into<Value>) -> Self {
        self.where_clause.eq(column, value);
        self
    }

    /// Add WHERE through a named operator.
    pub fn op(mut self, column: &str, operator: &str, value: impl Into<Value>) -> Self {
        self.where_clause.op(column, operator, value);
        self
    }

    /// Cap the number of affected rows.
    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Render `DELETE FROM <table> [WHERE ...] [LIMIT n]`.
    ///
    /// An empty where clause renders without a WHERE keyword and deletes
    /// every row; keeping the statement bounded is the caller's
    /// responsibility.
    pub fn generate(&self) -> DriverResult<Statement> {
        let table = escape_identifier(&self.table)?;
        let mut sql = format!("DELETE FROM {table}");
        let mut params = Vec::new();

        if !self.where_clause.is_empty() {
            let fragment = self.where_clause.build(self.operators)?;
            sql.push_str(" WHERE ");
            sql.push_str(&fragment.sql);
            params.extend(fragment.params);
        }

        if let Some(limit) = self.limit {
            sql.push_str(&format!(" LIMIT {limit}"));
        }

        Ok(Statement::new(sql, params))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_delete() {
        let registry = OperatorRegistry::new();
        let statement = Delete::new(&registry, "users")
            .eq("id", "507f1f77bcf86cd799439011")
            .limit(1)
            .generate()
            .unwrap();
        assert_eq!(statement.sql, "DELETE FROM users WHERE id = ? LIMIT 1");
        assert_eq!(
            statement.params,
            vec![Value::String("507f1f77bcf86cd799439011".into())]
        );
    }

    #[test]
    fn empty_where_renders_without_where_keyword() {
        // Intentional: an unbounded delete is the caller's decision to make.
        let registry = OperatorRegistry::new();
        let statement = Delete::new(&registry, "users").generate().unwrap();
        assert_eq!(statement.sql, "DELETE FROM users");
        assert!(!statement.sql.contains("WHERE"));
    }

    #[test]
    fn named_operator_conditions() {
        let registry = OperatorRegistry::new();
        let statement = Delete::new(&registry, "sessions")
            .op("expires_at", "lt", "2020-01-01")
            .op("user_id", "in", vec![1i64, 2, 3])
            .generate()
            .unwrap();
        assert_eq!(
            statement.sql,
            "DELETE FROM sessions WHERE expires_at < ? AND user_id IN (?, ?, ?)"
        );
        assert_eq!(statement.params.len(), 4);
    }
}
