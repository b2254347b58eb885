use crate::db::schema::{SQLITE_INIT, Table};
use crate::error::ReportError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;
use tracing::info;

pub type SqlitePool = Pool<Sqlite>;

#[derive(Clone)]
pub struct Storage {
    pool: SqlitePool,
}

impl Storage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open (creating if missing) the store behind `database_url`.
    ///
    /// The job is sequential, so the pool holds a single connection; this also
    /// keeps `sqlite::memory:` stores coherent. Foreign keys are declared in the
    /// schema but not enforced, since snapshots are loaded in a fixed order that
    /// puts dependents ahead of employees.
    pub async fn connect(database_url: &str) -> Result<Self, ReportError> {
        let connect_opts = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .foreign_keys(false);
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(connect_opts)
            .await?;
        info!(database_url = %database_url, "connected to database");
        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Initialize the schema by executing the bundled DDL.
    pub async fn init_schema(&self) -> Result<(), ReportError> {
        // execute multiple statements one by one (sqlx::query takes a single statement)
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }

    pub async fn row_count(&self, table: Table) -> Result<i64, ReportError> {
        // Table names come from the closed `Table` catalogue, never from input.
        let sql = format!("SELECT COUNT(*) FROM {}", table.name());
        let rec: (i64,) = sqlx::query_as(&sql).fetch_one(&self.pool).await?;
        Ok(rec.0)
    }

    pub async fn close(self) {
        self.pool.close().await;
    }
}
