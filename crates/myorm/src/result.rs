//! Query outcome wrapper returned by driver operations.

use crate::value::Row;

/// Outcome of one executed statement (or select + count pair).
///
/// Constructed once per execution and immutable afterwards. The total
/// count is present only when the operation requested it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryResult {
    rows: Vec<Row>,
    total_count: Option<u64>,
    success: bool,
}

impl QueryResult {
    /// Result of a successful mutation.
    pub fn success() -> Self {
        Self {
            rows: Vec::new(),
            total_count: None,
            success: true,
        }
    }

    /// Result carrying rows only.
    pub fn from_rows(rows: Vec<Row>) -> Self {
        Self {
            rows,
            total_count: None,
            success: true,
        }
    }

    /// Result carrying rows plus the total matching-row count.
    pub fn with_total(rows: Vec<Row>, total_count: u64) -> Self {
        Self {
            rows,
            total_count: Some(total_count),
            success: true,
        }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn first(&self) -> Option<&Row> {
        self.rows.first()
    }

    pub fn total_count(&self) -> Option<u64> {
        self.total_count
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;

    #[test]
    fn mutation_result_has_no_rows() {
        let result = QueryResult::success();
        assert!(result.is_success());
        assert!(result.is_empty());
        assert_eq!(result.total_count(), None);
    }

    #[test]
    fn total_present_only_when_requested() {
        let mut row = Row::new();
        row.insert("id".to_string(), Value::Int(1));

        let plain = QueryResult::from_rows(vec![row.clone()]);
        assert_eq!(plain.total_count(), None);
        assert_eq!(plain.len(), 1);

        let counted = QueryResult::with_total(vec![row], 42);
        assert_eq!(counted.total_count(), Some(42));
        assert!(counted.first().is_some());
    }
}
