//! # myorm
//!
//! Statement-generation core for MySQL entity drivers.
//!
//! ## Features
//!
//! - **Parameterized SQL**: builders emit `?` placeholders plus an ordered
//!   parameter list; nothing is interpolated into the statement text
//! - **Extensible operators**: comparisons resolve through a per-driver
//!   [`OperatorRegistry`], so applications can add or override operators
//!   without touching the builders
//! - **Deterministic output**: column order follows the insertion order of
//!   the source mapping, keeping generated SQL stable
//! - **No I/O of its own**: execution goes through the [`Connection`]
//!   seam; the builders are pure functions of their inputs
//!
//! ## Statement builders (stmt)
//!
//! ```ignore
//! use myorm::{OperatorRegistry, stmt};
//!
//! let operators = OperatorRegistry::new();
//!
//! // SELECT
//! let statement = stmt::select(&operators, "users")
//!     .eq("status", "active")
//!     .op("age", "gte", 18)
//!     .limit(20)
//!     .generate()?;
//!
//! // INSERT
//! let statement = stmt::insert("users")
//!     .set("name", "Jo")
//!     .set("email", "jo@example.com")
//!     .generate()?;
//!
//! // UPDATE
//! let statement = stmt::update(&operators, "users")
//!     .set("status", "inactive")
//!     .eq("id", user_id)
//!     .limit(1)
//!     .generate()?;
//!
//! // DELETE
//! let statement = stmt::delete(&operators, "users")
//!     .eq("id", user_id)
//!     .limit(1)
//!     .generate()?;
//! ```
//!
//! ## Driver façade
//!
//! ```ignore
//! use myorm::{FindOptions, MysqlDriver};
//!
//! let driver = MysqlDriver::new().table_prefix("app_");
//! let page = driver.find::<User, _>(&connection, FindOptions {
//!     per_page: Some(20),
//!     page: Some(3),
//!     ..Default::default()
//! }).await?;
//! ```

pub mod client;
pub mod driver;
pub mod error;
pub mod escape;
pub mod id;
pub mod normalize;
pub mod ops;
pub mod result;
pub mod stmt;
pub mod value;

pub use client::Connection;
pub use driver::{MysqlDriver, Storable, TableNaming};
pub use error::{DriverError, DriverResult};
pub use normalize::{normalize, FindOptions, DEFAULT_LIMIT};
pub use ops::{Fragment, Operator, OperatorRegistry};
pub use result::QueryResult;
pub use value::{Row, Value};

// Re-export stmt module types for easy access
pub use stmt::{
    delete, insert, select, update, Condition, Delete, Insert, OrderBy, Select, SelectPair,
    SortDirection, Statement, Update, WhereClause,
};
