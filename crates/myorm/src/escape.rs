//! Identifier quoting and value rendering for the MySQL dialect.
//!
//! Identifiers that match the safe pattern (`[A-Za-z_][A-Za-z0-9_$]*` per
//! dotted part) pass through bare; anything else is wrapped in backticks.
//! Identifiers containing the backtick itself are rejected outright rather
//! than escaped.

use crate::error::{DriverError, DriverResult};
use crate::value::Value;

/// Escape a (possibly dotted) identifier.
pub fn escape_identifier(name: &str) -> DriverResult<String> {
    if name.is_empty() {
        return Err(DriverError::InvalidIdentifier("<empty>".to_string()));
    }
    if name.contains('`') || name.contains('\0') {
        return Err(DriverError::InvalidIdentifier(name.to_string()));
    }

    let parts: Vec<&str> = name.split('.').collect();
    if parts.iter().any(|part| part.is_empty()) {
        return Err(DriverError::InvalidIdentifier(name.to_string()));
    }

    if parts.iter().all(|part| is_safe_part(part)) {
        return Ok(name.to_string());
    }

    let rendered: Vec<String> = parts
        .iter()
        .map(|part| {
            if is_safe_part(part) {
                part.to_string()
            } else {
                format!("`{part}`")
            }
        })
        .collect();
    Ok(rendered.join("."))
}

fn is_safe_part(part: &str) -> bool {
    let mut chars = part.chars();
    match chars.next() {
        Some(c) if c == '_' || c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c == '_' || c == '$' || c.is_ascii_alphanumeric())
}

/// Render a value as an inline SQL literal.
///
/// Used by [`crate::stmt::Statement::to_debug_sql`]; execution always goes
/// through `?` placeholders.
pub fn literal(value: &Value) -> String {
    match value {
        Value::Null => "NULL".to_string(),
        Value::Bool(true) => "TRUE".to_string(),
        Value::Bool(false) => "FALSE".to_string(),
        Value::Int(i) => i.to_string(),
        Value::Float(f) => f.to_string(),
        Value::String(s) => quote_string(s),
        Value::DateTime(dt) => format!("'{}'", dt.format("%Y-%m-%d %H:%M:%S")),
        Value::List(items) => {
            let rendered: Vec<String> = items.iter().map(literal).collect();
            format!("({})", rendered.join(", "))
        }
    }
}

fn quote_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for ch in s.chars() {
        match ch {
            '\'' => out.push_str("''"),
            '\\' => out.push_str("\\\\"),
            _ => out.push(ch),
        }
    }
    out.push('\'');
    out
}

/// Bind a scalar into the parameter list, returning its placeholder.
///
/// Lists cannot occupy a scalar position (SET and VALUES clauses, single
/// comparisons) and are refused here.
pub fn bind_scalar(value: Value, params: &mut Vec<Value>) -> DriverResult<&'static str> {
    if matches!(value, Value::List(_)) {
        return Err(DriverError::unsupported_value(
            "list value in scalar position",
        ));
    }
    params.push(value);
    Ok("?")
}

/// Bind a value into the parameter list, returning its placeholder text.
///
/// Scalars bind as a single `?`; lists bind as a parenthesized run of
/// placeholders for `IN`/`NOT IN`. A list nested inside a list is refused.
pub fn bind_value(value: Value, params: &mut Vec<Value>) -> DriverResult<String> {
    match value {
        Value::List(items) => {
            let mut placeholders = Vec::with_capacity(items.len());
            for item in items {
                placeholders.push(bind_scalar(item, params)?);
            }
            Ok(format!("({})", placeholders.join(", ")))
        }
        scalar => Ok(bind_scalar(scalar, params)?.to_string()),
    }
}
