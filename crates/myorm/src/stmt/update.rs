//! UPDATE statement builder.

use crate::error::{DriverError, DriverResult};
use crate::escape::{bind_scalar, escape_identifier};
use crate::ops::OperatorRegistry;
use crate::stmt::where_clause::WhereClause;
use crate::stmt::Statement;
use crate::value::Value;

/// UPDATE builder: SET pairs, a where clause and an optional row limit.
#[derive(Debug, Clone)]
pub struct Update<'a> {
    operators: &'a OperatorRegistry,
    table: String,
    data: Vec<(String, Value)>,
    where_clause: WhereClause,
    limit: Option<u64>,
}

impl<'a> Update<'a> {
    pub fn new(operators: &'a OperatorRegistry, table: &str) -> Self {
        Self {
            operators,
            table: table.to_string(),
            data: Vec::new(),
            where_clause: WhereClause::new(),
            limit: None,
        }
    }

    /// Set a column value. Assignments render in insertion order.
    pub fn set(mut self, column: &str, value: impl Into<Value>) -> Self {
        self.data.push((column.to_string(), value.into()));
        self
    }

    /// Append every pair from an entity's storage mapping.
    pub fn values(mut self, data: impl IntoIterator<Item = (String, Value)>) -> Self {
        self.data.extend(data);
        self
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

    /// Render `UPDATE <table> SET ... [WHERE ...] [LIMIT n]`.
    ///
    /// Fails when there are no columns to set. An empty where clause
    /// renders without a WHERE keyword and updates every row; keeping the
    /// statement bounded is the caller's responsibility.
    pub fn generate(&self) -> DriverResult<Statement> {
        if self.data.is_empty() {
            return Err(DriverError::EmptyData("UPDATE"));
        }

        let table = escape_identifier(&self.table)?;
        let mut params = Vec::new();
        let mut assignments = Vec::with_capacity(self.data.len());
        for (column, value) in &self.data {
            let column_sql = escape_identifier(column)?;
            let placeholder = bind_scalar(value.clone(), &mut params)?;
            assignments.push(format!("{column_sql} = {placeholder}"));
        }

        let mut sql = format!("UPDATE {} SET {}", table, assignments.join(", "));

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
