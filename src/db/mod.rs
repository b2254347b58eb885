//! Database module: schema, closed enumerations and the SQLite handle.
//!
//! Layout:
//! - `models.rs`: enumerations stored in constrained TEXT columns
//! - `schema.rs`: SQL DDL and the catalogue of loadable tables
//! - `sqlite.rs`: connection setup, schema initialization and counts

pub mod models;
pub mod schema;
pub mod sqlite;

pub use models::{ProjectStatus, ResourceType};
pub use schema::{SQLITE_INIT, Table};
pub use sqlite::{SqlitePool, Storage};
