//! Find-options normalization.
//!
//! Translates the driver's find parameters (page/per_page/query/sort) into
//! a configured [`Select`]. Paged finds always carry the total-count
//! companion; single-row lookups never go through this path.

use crate::ops::OperatorRegistry;
use crate::stmt::{select, OrderBy, Select, WhereClause};

/// Default page size when the caller does not specify one.
pub const DEFAULT_LIMIT: u64 = 10;

/// Raw find parameters as accepted by the driver surface.
#[derive(Debug, Clone, Default)]
pub struct FindOptions {
    /// Free-form filter; becomes the statement's where clause.
    pub query: Option<WhereClause>,
    /// 1-based page number; resolves to an offset.
    pub page: Option<u64>,
    /// Page size; resolves to the limit.
    pub per_page: Option<u64>,
    pub sort: Vec<OrderBy>,
    /// Explicit projection; defaults to `*`.
    pub columns: Option<Vec<String>>,
}

/// Normalize raw find options into a SELECT specification.
///
/// Translation rules, in order:
/// - `per_page` becomes the limit (default 10);
/// - `page` becomes `offset = limit * (page - 1)` (default 0), so the
///   limit must resolve first;
/// - `query` becomes the where clause.
///
/// The total count is always requested, whether or not the caller reads
/// it; pagination UIs depend on it being present.
pub fn normalize<'a>(
    operators: &'a OperatorRegistry,
    table: &str,
    options: FindOptions,
) -> Select<'a> {
    let limit = options.per_page.unwrap_or(DEFAULT_LIMIT);
    let offset = options
        .page
        .map_or(0, |page| limit * page.saturating_sub(1));

    let mut statement = select(operators, table)
        .limit(limit)
        .offset(offset)
        .count_total(true);

    if let Some(columns) = options.columns {
        statement = statement.columns(columns);
    }
    if let Some(query) = options.query {
        statement = statement.where_clause(query);
    }
    for order in options.sort {
        statement = statement.order_by(order);
    }
    statement
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_and_per_page_resolve_to_limit_and_offset() {
        let registry = OperatorRegistry::new();
        let options = FindOptions {
            per_page: Some(20),
            page: Some(3),
            ..Default::default()
        };
        let statement = normalize(&registry, "users", options).generate().unwrap();
        assert_eq!(statement.sql, "SELECT * FROM users LIMIT 20 OFFSET 40");
    }

    #[test]
    fn defaults_apply_when_unspecified() {
        let registry = OperatorRegistry::new();
        let statement = normalize(&registry, "users", FindOptions::default())
            .generate()
            .unwrap();
        assert_eq!(statement.sql, "SELECT * FROM users LIMIT 10 OFFSET 0");
    }

    #[test]
    fn query_becomes_the_where_clause() {
        let registry = OperatorRegistry::new();
        let mut query = WhereClause::new();
        query.eq("status", "active");
        let options = FindOptions {
            query: Some(query),
            ..Default::default()
        };
        let statement = normalize(&registry, "users", options).generate().unwrap();
        assert_eq!(
            statement.sql,
            "SELECT * FROM users WHERE status = ? LIMIT 10 OFFSET 0"
        );
    }

    #[test]
    fn page_without_per_page_uses_default_limit() {
        let registry = OperatorRegistry::new();
        let options = FindOptions {
            page: Some(4),
            ..Default::default()
        };
        let statement = normalize(&registry, "users", options).generate().unwrap();
        assert_eq!(statement.sql, "SELECT * FROM users LIMIT 10 OFFSET 30");
    }

    #[test]
    fn page_zero_is_treated_as_first_page() {
        let registry = OperatorRegistry::new();
        let options = FindOptions {
            page: Some(0),
            ..Default::default()
        };
        let statement = normalize(&registry, "users", options).generate().unwrap();
        assert!(statement.sql.ends_with("OFFSET 0"));
    }

    #[test]
    fn paged_finds_always_request_the_total() {
        let registry = OperatorRegistry::new();
        let normalized = normalize(&registry, "users", FindOptions::default());
        assert!(normalized.wants_total());

        let pair = normalized.generate_pair().unwrap();
        assert_eq!(pair.total.sql, "SELECT COUNT(*) AS count FROM users");
    }

    #[test]
    fn sort_directives_carry_through() {
        let registry = OperatorRegistry::new();
        let options = FindOptions {
            sort: vec![OrderBy::desc("created_at"), OrderBy::asc("name")],
            ..Default::default()
        };
        let statement = normalize(&registry, "users", options).generate().unwrap();
        assert!(statement
            .sql
            .contains("ORDER BY created_at DESC, name ASC"));
    }
}
