//! SELECT statement builder and its total-count companion.

use crate::error::DriverResult;
use crate::escape::escape_identifier;
use crate::ops::OperatorRegistry;
use crate::stmt::where_clause::WhereClause;
use crate::stmt::Statement;
use crate::value::Value;

/// Sort direction for an ORDER BY directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    fn as_sql(self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

/// One ORDER BY directive.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderBy {
    pub column: String,
    pub direction: SortDirection,
}

impl OrderBy {
    pub fn asc(column: &str) -> Self {
        Self {
            column: column.to_string(),
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(column: &str) -> Self {
        Self {
            column: column.to_string(),
            direction: SortDirection::Desc,
        }
    }
}

/// A paged SELECT and its total-count companion.
///
/// The two statements are executed together by the connection
/// collaborator; pairing them here keeps round-trip batching out of the
/// builders.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectPair {
    pub query: Statement,
    pub total: Statement,
}

/// SELECT builder: projection, where clause, ordering and pagination.
#[derive(Debug, Clone)]
pub struct Select<'a> {
    operators: &'a OperatorRegistry,
    table: String,
    columns: Vec<String>,
    where_clause: WhereClause,
    order: Vec<OrderBy>,
    limit: Option<u64>,
    offset: Option<u64>,
    count_total: bool,
}

impl<'a> Select<'a> {
    pub fn new(operators: &'a OperatorRegistry, table: &str) -> Self {
        Self {
            operators,
            table: table.to_string(),
            columns: vec!["*".to_string()],
            where_clause: WhereClause::new(),
            order: Vec::new(),
            limit: None,
            offset: None,
            count_total: false,
        }
    }

    /// Replace the projected columns.
    ///
    /// Projection entries are raw expressions (`*`, `COUNT(*) AS count`,
    /// aliases) and are not escaped.
    pub fn columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns = columns.into_iter().map(Into::into).collect();
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

    /// Add an ORDER BY directive.
    pub fn order_by(mut self, order: OrderBy) -> Self {
        self.order.push(order);
        self
    }

    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: u64) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Request the total-count companion alongside the primary row set.
    pub fn count_total(mut self, enabled: bool) -> Self {
        self.count_total = enabled;
        self
    }

    pub fn wants_total(&self) -> bool {
        self.count_total
    }

    /// Render `SELECT <cols> FROM <table> [WHERE ...] [ORDER BY ...]
    /// [LIMIT n] [OFFSET m]`.
    pub fn generate(&self) -> DriverResult<Statement> {
        let table = escape_identifier(&self.table)?;
        let mut sql = format!("SELECT {} FROM {}", self.columns.join(", "), table);
        let mut params = Vec::new();

        if !self.where_clause.is_empty() {
            let fragment = self.where_clause.build(self.operators)?;
            sql.push_str(" WHERE ");
            sql.push_str(&fragment.sql);
            params.extend(fragment.params);
        }

        if !self.order.is_empty() {
            let mut directives = Vec::with_capacity(self.order.len());
            for order in &self.order {
                directives.push(format!(
                    "{} {}",
                    escape_identifier(&order.column)?,
                    order.direction.as_sql()
                ));
            }
            sql.push_str(" ORDER BY ");
            sql.push_str(&directives.join(", "));
        }

        if let Some(limit) = self.limit {
            sql.push_str(&format!(" LIMIT {limit}"));
        }
        if let Some(offset) = self.offset {
            sql.push_str(&format!(" OFFSET {offset}"));
        }

        Ok(Statement::new(sql, params))
    }

    /// Total-count companion: same table and conditions, no ordering or
    /// pagination.
    pub fn generate_total(&self) -> DriverResult<Statement> {
        let table = escape_identifier(&self.table)?;
        let mut sql = format!("SELECT COUNT(*) AS count FROM {table}");
        let mut params = Vec::new();

        if !self.where_clause.is_empty() {
            let fragment = self.where_clause.build(self.operators)?;
            sql.push_str(" WHERE ");
            sql.push_str(&fragment.sql);
            params.extend(fragment.params);
        }

        Ok(Statement::new(sql, params))
    }

    /// Generate the primary statement and its count companion together.
    pub fn generate_pair(&self) -> DriverResult<SelectPair> {
        Ok(SelectPair {
            query: self.generate()?,
            total: self.generate_total()?,
        })
    }
}
