//! Statement builders for the MySQL dialect.
//!
//! Four builders ([`Insert`], [`Update`], [`Delete`], [`Select`]) each
//! consume a normalized specification (table, data mapping, where clause,
//! ordering, pagination) and produce a parameterized [`Statement`]. Where
//! conditions resolve through the [`OperatorRegistry`] handed to the
//! builder at construction; builders themselves are stateless per
//! invocation and hold no connection.
//!
//! # Usage
//!
//! ```ignore
//! use myorm::{OperatorRegistry, stmt};
//!
//! let operators = OperatorRegistry::new();
//!
//! let statement = stmt::select(&operators, "users")
//!     .eq("status", "active")
//!     .op("age", "gte", 18)
//!     .limit(20)
//!     .generate()?;
//!
//! let statement = stmt::insert("users")
//!     .set("name", "Jo")
//!     .generate()?;
//! ```

mod delete;
mod insert;
mod select;
mod update;
mod where_clause;

pub use delete::Delete;
pub use insert::Insert;
pub use select::{OrderBy, Select, SelectPair, SortDirection};
pub use update::Update;
pub use where_clause::{Condition, WhereClause};

use crate::escape::literal;
use crate::ops::OperatorRegistry;
use crate::value::Value;

/// A generated SQL statement and its bound parameters, in placeholder order.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    pub sql: String,
    pub params: Vec<Value>,
}

impl Statement {
    pub fn new(sql: impl Into<String>, params: Vec<Value>) -> Self {
        Self {
            sql: sql.into(),
            params,
        }
    }

    /// Inline the bound parameters as literals.
    ///
    /// Logging/debugging helper only; execution goes through the
    /// placeholders.
    pub fn to_debug_sql(&self) -> String {
        let mut out = String::with_capacity(self.sql.len());
        let mut values = self.params.iter();
        for ch in self.sql.chars() {
            if ch == '?' {
                match values.next() {
                    Some(value) => out.push_str(&literal(value)),
                    None => out.push(ch),
                }
            } else {
                out.push(ch);
            }
        }
        out
    }
}

/// Create a SELECT builder for the given table.
pub fn select<'a>(operators: &'a OperatorRegistry, table: &str) -> Select<'a> {
    Select::new(operators, table)
}

/// Create an INSERT builder for the given table.
///
/// Insert has no where clause, so it does not consult the registry.
pub fn insert(table: &str) -> Insert {
    Insert::new(table)
}

/// Create an UPDATE builder for the given table.
pub fn update<'a>(operators: &'a OperatorRegistry, table: &str) -> Update<'a> {
    Update::new(operators, table)
}

/// Create a DELETE builder for the given table.
pub fn delete<'a>(operators: &'a OperatorRegistry, table: &str) -> Delete<'a> {
    Delete::new(operators, table)
}

#[cfg(test)]
mod tests;
