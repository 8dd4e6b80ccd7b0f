//! MySQL entity driver façade.
//!
//! Thin orchestration over the statement builders: resolves table names,
//! assigns ids, generates statements and hands them to the connection
//! collaborator. Wrapping raw rows back into domain objects stays with
//! the caller.

use crate::client::Connection;
use crate::error::{DriverError, DriverResult};
use crate::id;
use crate::normalize::{normalize, FindOptions};
use crate::ops::{Fragment, OperatorRegistry};
use crate::result::QueryResult;
use crate::stmt::{self, WhereClause};
use crate::value::{Row, Value};
use std::sync::Arc;
use tracing::debug;

/// Entity seam: what the driver needs from a persistable type.
///
/// Implementations come from the entity layer. This core only reads
/// identity, the storage table and the flattened attribute mapping; it
/// never constructs entities from rows.
pub trait Storable {
    /// Storage table for this type, unprefixed.
    fn table() -> &'static str;

    /// Current id, if one has been assigned.
    fn id(&self) -> Option<&str>;

    fn set_id(&mut self, id: String);

    fn clear_id(&mut self);

    /// Whether this instance was loaded from storage.
    fn is_existing(&self) -> bool;

    /// Flattened column/value pairs, in column order.
    fn to_storage(&self) -> DriverResult<Vec<(String, Value)>>;
}

/// Table-naming hook: receives the entity's table name, returns the
/// physical one. When installed, the prefix is not applied.
pub type TableNaming = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// Driver configuration and entry points.
///
/// Each driver owns its operator registry; overrides on one instance never
/// affect another.
pub struct MysqlDriver {
    operators: OperatorRegistry,
    table_prefix: String,
    table_naming: Option<TableNaming>,
}

impl MysqlDriver {
    /// Driver with the built-in operator set and no table prefix.
    pub fn new() -> Self {
        Self {
            operators: OperatorRegistry::new(),
            table_prefix: String::new(),
            table_naming: None,
        }
    }

    // ==================== Configuration ====================

    /// Register or override an operator on this driver instance.
    pub fn set_operator<F>(&mut self, name: impl Into<String>, operator: F) -> &mut Self
    where
        F: Fn(&str, &Value) -> DriverResult<Fragment> + Send + Sync + 'static,
    {
        self.operators.register(name, operator);
        self
    }

    /// Prepend `prefix` to every resolved table name.
    pub fn table_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.table_prefix = prefix.into();
        self
    }

    /// Install a custom table-naming hook.
    pub fn table_naming(mut self, naming: TableNaming) -> Self {
        self.table_naming = Some(naming);
        self
    }

    pub fn operators(&self) -> &OperatorRegistry {
        &self.operators
    }

    /// Physical table name for `T`.
    pub fn table_name<T: Storable>(&self) -> String {
        match &self.table_naming {
            Some(naming) => naming(T::table()),
            None => format!("{}{}", self.table_prefix, T::table()),
        }
    }

    // ==================== Operations ====================

    /// Insert a fresh entity or update an existing one.
    ///
    /// Fresh entities get a generated id before the insert; if the insert
    /// fails, the optimistic assignment is rolled back and the error
    /// propagates. Existing entities update `WHERE id = ? LIMIT 1`.
    pub async fn save<T, C>(&self, connection: &C, entity: &mut T) -> DriverResult<QueryResult>
    where
        T: Storable,
        C: Connection,
    {
        if entity.is_existing() {
            let data = entity.to_storage()?;
            let id_value = data
                .iter()
                .find(|(column, _)| column == "id")
                .map(|(_, value)| value.clone());
            let id_value = match id_value {
                Some(value) if !value.is_null() => value,
                _ => return Err(DriverError::validation("existing entity has no id")),
            };

            let statement = stmt::update(&self.operators, &self.table_name::<T>())
                .values(data)
                .eq("id", id_value)
                .limit(1)
                .generate()?;
            debug!(sql = %statement.sql, "save: update");
            connection.execute(&statement).await?;
            return Ok(QueryResult::success());
        }

        let assigned = entity.id().is_none();
        if assigned {
            entity.set_id(id::generate_id());
        }

        let data = entity.to_storage()?;
        let statement = stmt::insert(&self.table_name::<T>())
            .values(data)
            .generate()?;
        debug!(sql = %statement.sql, "save: insert");

        if let Err(err) = connection.execute(&statement).await {
            if assigned {
                entity.clear_id();
            }
            return Err(err);
        }
        Ok(QueryResult::success())
    }

    /// Delete one entity by id.
    pub async fn delete<T, C>(&self, connection: &C, entity: &T) -> DriverResult<QueryResult>
    where
        T: Storable,
        C: Connection,
    {
        let id = entity
            .id()
            .ok_or_else(|| DriverError::validation("cannot delete an entity without an id"))?;

        let statement = stmt::delete(&self.operators, &self.table_name::<T>())
            .eq("id", id)
            .limit(1)
            .generate()?;
        debug!(sql = %statement.sql, "delete");
        connection.execute(&statement).await?;
        Ok(QueryResult::success())
    }

    /// Paged find: normalized select plus its total-count companion,
    /// executed in one round trip.
    pub async fn find<T, C>(&self, connection: &C, options: FindOptions) -> DriverResult<QueryResult>
    where
        T: Storable,
        C: Connection,
    {
        let normalized = normalize(&self.operators, &self.table_name::<T>(), options);
        if !normalized.wants_total() {
            let statement = normalized.generate()?;
            debug!(sql = %statement.sql, "find");
            let rows = connection.query(&statement).await?;
            return Ok(QueryResult::from_rows(rows));
        }

        let pair = normalized.generate_pair()?;
        debug!(sql = %pair.query.sql, "find");

        let rowsets = connection.query_batch(&[pair.query, pair.total]).await?;
        let mut rowsets = rowsets.into_iter();
        let rows = rowsets.next().unwrap_or_default();
        let count_rows = rowsets.next().unwrap_or_default();

        Ok(QueryResult::with_total(rows, read_count(&count_rows)?))
    }

    /// Single-row lookup; never computes the total count.
    pub async fn find_one<T, C>(&self, connection: &C, query: WhereClause) -> DriverResult<QueryResult>
    where
        T: Storable,
        C: Connection,
    {
        let statement = stmt::select(&self.operators, &self.table_name::<T>())
            .where_clause(query)
            .limit(1)
            .generate()?;
        debug!(sql = %statement.sql, "find_one");

        let rows = connection.query(&statement).await?;
        Ok(QueryResult::from_rows(rows))
    }

    /// Count matching rows.
    pub async fn count<T, C>(&self, connection: &C, query: WhereClause) -> DriverResult<u64>
    where
        T: Storable,
        C: Connection,
    {
        let statement = stmt::select(&self.operators, &self.table_name::<T>())
            .columns(["COUNT(*) AS count"])
            .where_clause(query)
            .generate()?;
        debug!(sql = %statement.sql, "count");

        let rows = connection.query(&statement).await?;
        read_count(&rows)
    }

    // ==================== Ids ====================

    /// Generate a fresh storage id.
    pub fn generate_id(&self) -> String {
        id::generate_id()
    }

    /// Validate the storage id shape.
    pub fn is_id(&self, value: &str) -> bool {
        id::is_id(value)
    }
}

impl Default for MysqlDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MysqlDriver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MysqlDriver")
            .field("operators", &self.operators)
            .field("table_prefix", &self.table_prefix)
            .field("table_naming", &self.table_naming.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

/// Read the scalar out of a `COUNT(*) AS count` rowset.
fn read_count(rows: &[Row]) -> DriverResult<u64> {
    match rows.first().and_then(|row| row.get("count")) {
        Some(Value::Int(n)) if *n >= 0 => Ok(*n as u64),
        other => Err(DriverError::connection(format!(
            "malformed count rowset: {other:?}"
        ))),
    }
}
