//! INSERT statement builder.

use crate::error::{DriverError, DriverResult};
use crate::escape::{bind_scalar, escape_identifier};
use crate::stmt::Statement;
use crate::value::Value;

/// INSERT builder: a table plus an insertion-ordered data mapping.
#[derive(Debug, Clone)]
pub struct Insert {
    table: String,
    data: Vec<(String, Value)>,
}

impl Insert {
    pub fn new(table: &str) -> Self {
        Self {
            table: table.to_string(),
            data: Vec::new(),
        }
    }

    /// Set a column value. Columns render in insertion order.
    pub fn set(mut self, column: &str, value: impl Into<Value>) -> Self {
        self.data.push((column.to_string(), value.into()));
        self
    }

    /// Append every pair from an entity's storage mapping.
    pub fn values(mut self, data: impl IntoIterator<Item = (String, Value)>) -> Self {
        self.data.extend(data);
        self
    }

    /// Render `INSERT INTO <table> (<cols>) VALUES (...)`.
    ///
    /// Fails before emitting any SQL when the data mapping is empty.
    pub fn generate(&self) -> DriverResult<Statement> {
        if self.data.is_empty() {
            return Err(DriverError::EmptyData("INSERT"));
        }

        let table = escape_identifier(&self.table)?;
        let mut columns = Vec::with_capacity(self.data.len());
        let mut placeholders = Vec::with_capacity(self.data.len());
        let mut params = Vec::with_capacity(self.data.len());
        for (column, value) in &self.data {
            columns.push(escape_identifier(column)?);
            placeholders.push(bind_scalar(value.clone(), &mut params)?);
        }

        Ok(Statement::new(
            format!(
                "INSERT INTO {} ({}) VALUES ({})",
                table,
                columns.join(", "),
                placeholders.join(", ")
            ),
            params,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_insert() {
        let statement = Insert::new("users")
            .set("username", "alice")
            .set("email", "alice@example.com")
            .generate()
            .unwrap();
        assert_eq!(
            statement.sql,
            "INSERT INTO users (username, email) VALUES (?, ?)"
        );
        assert_eq!(
            statement.params,
            vec![
                Value::String("alice".into()),
                Value::String("alice@example.com".into())
            ]
        );
    }

    #[test]
    fn columns_render_once_in_insertion_order() {
        let statement = Insert::new("users")
            .set("c", 3)
            .set("a", 1)
            .set("b", 2)
            .generate()
            .unwrap();
        assert_eq!(statement.sql, "INSERT INTO users (c, a, b) VALUES (?, ?, ?)");
        for column in ["c", "a", "b"] {
            assert_eq!(statement.sql.matches(column).count(), 1);
        }
    }

    #[test]
    fn empty_data_fails_before_sql() {
        let err = Insert::new("users").generate().unwrap_err();
        assert!(err.is_empty_data());
    }

    #[test]
    fn null_value_binds() {
        let statement = Insert::new("users")
            .set("name", "Jo")
            .set("deleted_at", Value::Null)
            .generate()
            .unwrap();
        assert_eq!(
            statement.sql,
            "INSERT INTO users (name, deleted_at) VALUES (?, ?)"
        );
        assert_eq!(statement.params[1], Value::Null);
    }

    #[test]
    fn list_value_is_unsupported() {
        let err = Insert::new("users")
            .set("tags", vec!["a", "b"])
            .generate()
            .unwrap_err();
        assert!(err.is_unsupported_value());
    }

    #[test]
    fn debug_sql_inlines_literals() {
        let statement = Insert::new("users")
            .set("id", "507f1f77bcf86cd799439011")
            .set("name", "Jo")
            .generate()
            .unwrap();
        assert_eq!(
            statement.to_debug_sql(),
            "INSERT INTO users (id, name) VALUES ('507f1f77bcf86cd799439011', 'Jo')"
        );
    }
}
