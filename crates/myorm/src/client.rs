//! Connection seam for statement execution.

use crate::error::DriverResult;
use crate::stmt::Statement;
use crate::value::Row;

/// Async connection collaborator that executes generated statements.
///
/// The core performs no I/O of its own; the driver hands generated
/// statements to an implementation of this trait. Timeouts, cancellation
/// and pooling all live on the implementation side.
pub trait Connection: Send + Sync {
    /// Execute a statement and return its rows.
    fn query(
        &self,
        statement: &Statement,
    ) -> impl std::future::Future<Output = DriverResult<Vec<Row>>> + Send;

    /// Execute a mutation and return the affected-row count.
    fn execute(
        &self,
        statement: &Statement,
    ) -> impl std::future::Future<Output = DriverResult<u64>> + Send;

    /// Execute several statements in one round trip, one rowset each.
    ///
    /// The default implementation issues them sequentially; wire-protocol
    /// implementations can batch the round trip.
    fn query_batch(
        &self,
        statements: &[Statement],
    ) -> impl std::future::Future<Output = DriverResult<Vec<Vec<Row>>>> + Send {
        async move {
            let mut rowsets = Vec::with_capacity(statements.len());
            for statement in statements {
                rowsets.push(self.query(statement).await?);
            }
            Ok(rowsets)
        }
    }
}
