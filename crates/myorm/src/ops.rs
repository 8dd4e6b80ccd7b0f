//! Operator registry: named comparison rules resolved at generate time.
//!
//! Keeping operators in a registry instead of a fixed match lets a driver
//! or application add dialect-specific comparisons without touching the
//! builders. The registry is per-driver-instance state; there is no global
//! table, so one driver's overrides never leak into another.

use crate::error::{DriverError, DriverResult};
use crate::escape::{bind_scalar, bind_value};
use crate::value::Value;
use std::collections::HashMap;
use std::sync::Arc;

/// A rendered condition fragment plus the values it binds, in order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Fragment {
    pub sql: String,
    pub params: Vec<Value>,
}

impl Fragment {
    pub fn new(sql: impl Into<String>, params: Vec<Value>) -> Self {
        Self {
            sql: sql.into(),
            params,
        }
    }

    /// Fragment with no bound values.
    pub fn raw(sql: impl Into<String>) -> Self {
        Self {
            sql: sql.into(),
            params: Vec::new(),
        }
    }
}

/// An operator: pure function from an escaped column and a value to a
/// condition fragment.
#[derive(Clone)]
pub struct Operator(Arc<dyn Fn(&str, &Value) -> DriverResult<Fragment> + Send + Sync>);

impl Operator {
    pub fn new<F>(render: F) -> Self
    where
        F: Fn(&str, &Value) -> DriverResult<Fragment> + Send + Sync + 'static,
    {
        Operator(Arc::new(render))
    }

    /// Render the condition fragment for an escaped column and a value.
    pub fn render(&self, column: &str, value: &Value) -> DriverResult<Fragment> {
        (self.0.as_ref())(column, value)
    }
}

impl std::fmt::Debug for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Operator").field(&"<fn>").finish()
    }
}

/// Mapping from operator name to rendering rule.
///
/// Later registrations override earlier ones under the same name.
#[derive(Clone)]
pub struct OperatorRegistry {
    ops: HashMap<String, Operator>,
}

impl OperatorRegistry {
    /// Registry preloaded with the built-in operator set:
    /// `eq`, `ne`, `gt`, `gte`, `lt`, `lte`, `in`, `not_in`, `contains`.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry
            .register("eq", op_eq)
            .register("ne", op_ne)
            .register("gt", |c: &str, v: &Value| compare(c, ">", v))
            .register("gte", |c: &str, v: &Value| compare(c, ">=", v))
            .register("lt", |c: &str, v: &Value| compare(c, "<", v))
            .register("lte", |c: &str, v: &Value| compare(c, "<=", v))
            .register("in", |c: &str, v: &Value| membership(c, false, v))
            .register("not_in", |c: &str, v: &Value| membership(c, true, v))
            .register("contains", op_contains);
        registry
    }

    /// Registry with no operators at all.
    pub fn empty() -> Self {
        Self {
            ops: HashMap::new(),
        }
    }

    /// Register an operator under `name`, overriding any previous entry.
    pub fn register<F>(&mut self, name: impl Into<String>, operator: F) -> &mut Self
    where
        F: Fn(&str, &Value) -> DriverResult<Fragment> + Send + Sync + 'static,
    {
        self.ops.insert(name.into(), Operator::new(operator));
        self
    }

    /// Look up an operator; absent names are a generate-time error.
    pub fn resolve(&self, name: &str) -> DriverResult<&Operator> {
        self.ops
            .get(name)
            .ok_or_else(|| DriverError::UnknownOperator(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.ops.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }
}

impl Default for OperatorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for OperatorRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<&str> = self.ops.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("OperatorRegistry")
            .field("operators", &names)
            .finish()
    }
}

// ==================== Built-in operators ====================

fn op_eq(column: &str, value: &Value) -> DriverResult<Fragment> {
    if value.is_null() {
        // `= NULL` never matches in MySQL.
        return Ok(Fragment::raw(format!("{column} IS NULL")));
    }
    compare(column, "=", value)
}

fn op_ne(column: &str, value: &Value) -> DriverResult<Fragment> {
    if value.is_null() {
        return Ok(Fragment::raw(format!("{column} IS NOT NULL")));
    }
    compare(column, "<>", value)
}

fn compare(column: &str, op: &str, value: &Value) -> DriverResult<Fragment> {
    let mut params = Vec::new();
    let placeholder = bind_scalar(value.clone(), &mut params)?;
    Ok(Fragment::new(format!("{column} {op} {placeholder}"), params))
}

fn membership(column: &str, negated: bool, value: &Value) -> DriverResult<Fragment> {
    let Value::List(items) = value else {
        let name = if negated { "not_in" } else { "in" };
        return Err(DriverError::unsupported_value(format!(
            "`{name}` requires a list value"
        )));
    };
    if items.is_empty() {
        // `IN ()` is a syntax error; an empty membership test can never match.
        return Ok(Fragment::raw(if negated { "1 = 1" } else { "1 = 0" }));
    }
    let mut params = Vec::new();
    let placeholders = bind_value(Value::List(items.clone()), &mut params)?;
    let keyword = if negated { "NOT IN" } else { "IN" };
    Ok(Fragment::new(
        format!("{column} {keyword} {placeholders}"),
        params,
    ))
}

fn op_contains(column: &str, value: &Value) -> DriverResult<Fragment> {
    let Value::String(needle) = value else {
        return Err(DriverError::unsupported_value(
            "`contains` requires a string value",
        ));
    };
    Ok(Fragment::new(
        format!("{column} LIKE ?"),
        vec![Value::String(format!("%{needle}%"))],
    ))
}
