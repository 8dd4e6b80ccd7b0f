//! Flat where-clause model shared by Update, Delete and Select.

use crate::error::DriverResult;
use crate::escape::escape_identifier;
use crate::ops::{Fragment, OperatorRegistry};
use crate::value::Value;

/// A single column condition.
///
/// Plain values compare with the registry's `eq` operator; `Op` names any
/// registered operator explicitly. The dispatch is this tagged variant,
/// never the shape of the value.
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    Value(Value),
    Op { name: String, value: Value },
}

impl Condition {
    /// Plain-value condition (equality through the registry).
    pub fn value(value: impl Into<Value>) -> Self {
        Condition::Value(value.into())
    }

    /// Named-operator condition.
    pub fn op(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Condition::Op {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// An insertion-ordered conjunction of column conditions.
///
/// Leaves join with `AND`; there is no OR in the base design. Compound
/// semantics belong in a registered operator. Insertion order is preserved
/// so generated SQL stays stable for caching and tests.
#[derive(Debug, Clone, Default)]
pub struct WhereClause {
    entries: Vec<(String, Condition)>,
}

impl WhereClause {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Add a condition on `column`.
    pub fn and(&mut self, column: &str, condition: Condition) -> &mut Self {
        self.entries.push((column.to_string(), condition));
        self
    }

    /// Add an equality condition: column = value
    pub fn eq(&mut self, column: &str, value: impl Into<Value>) -> &mut Self {
        self.and(column, Condition::Value(value.into()))
    }

    /// Add a named-operator condition.
    pub fn op(&mut self, column: &str, name: &str, value: impl Into<Value>) -> &mut Self {
        self.and(column, Condition::op(name, value))
    }

    pub fn entries(&self) -> &[(String, Condition)] {
        &self.entries
    }

    /// Render the clause content, without the `WHERE` keyword.
    ///
    /// Every leaf resolves through `operators`, plain values included, so
    /// a driver that overrides `eq` changes scalar comparisons too.
    /// Unknown operator names fail here, before any SQL leaves the builder.
    pub fn build(&self, operators: &OperatorRegistry) -> DriverResult<Fragment> {
        let mut parts = Vec::with_capacity(self.entries.len());
        let mut params = Vec::new();
        for (column, condition) in &self.entries {
            let column_sql = escape_identifier(column)?;
            let fragment = match condition {
                Condition::Value(value) => operators.resolve("eq")?.render(&column_sql, value)?,
                Condition::Op { name, value } => operators.resolve(name)?.render(&column_sql, value)?,
            };
            parts.push(fragment.sql);
            params.extend(fragment.params);
        }
        Ok(Fragment {
            sql: parts.join(" AND "),
            params,
        })
    }
}
