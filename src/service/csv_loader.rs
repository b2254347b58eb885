use crate::db::schema::Table;
use crate::db::sqlite::Storage;
use crate::error::ReportError;
use csv::{ReaderBuilder, StringRecord};
use sqlx::error::ErrorKind;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::{error, info, warn};

/// Result of one table load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Every row of the snapshot was appended.
    Inserted { rows: usize },
    /// At least one row collided with an existing key; nothing was appended.
    Duplicate,
}

/// Per-table result of [`load_all`].
#[derive(Debug)]
pub struct TableLoad {
    pub table: Table,
    pub result: Result<LoadOutcome, ReportError>,
}

/// A parsed CSV snapshot whose header has been checked against the target table.
struct CsvBatch {
    columns: Vec<String>,
    records: Vec<StringRecord>,
}

impl CsvBatch {
    fn read(path: &Path, table: Table) -> Result<Self, ReportError> {
        let file = File::open(path)?;
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(BufReader::new(file));

        let columns: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();
        if let Some(unknown) = columns.iter().find(|c| !table.has_column(c)) {
            return Err(ReportError::UnknownColumn {
                table: table.name(),
                column: unknown.clone(),
            });
        }

        let records = rdr.records().collect::<Result<Vec<_>, _>>()?;
        Ok(Self { columns, records })
    }

    fn insert_sql(&self, table: Table) -> String {
        let placeholders = vec!["?"; self.columns.len()].join(", ");
        format!(
            "INSERT INTO {} ({}) VALUES ({})",
            table.name(),
            self.columns.join(", "),
            placeholders
        )
    }
}

/// Append every row of the CSV at `path` to `table` inside one transaction.
///
/// The batch is all-or-nothing: a duplicate key anywhere rolls the whole load
/// back and yields [`LoadOutcome::Duplicate`]; any other constraint violation
/// rolls back and yields [`ReportError::Integrity`]. Empty fields are stored
/// as NULL; SQLite column affinity converts numeric text.
pub async fn load_csv(
    storage: &Storage,
    path: &Path,
    table: Table,
) -> Result<LoadOutcome, ReportError> {
    let batch = CsvBatch::read(path, table)?;
    let sql = batch.insert_sql(table);

    let mut tx = storage.pool().begin().await?;
    for record in &batch.records {
        let query = record.iter().fold(sqlx::query(&sql), |q, field| {
            q.bind((!field.is_empty()).then_some(field))
        });

        if let Err(e) = query.execute(&mut *tx).await {
            tx.rollback().await?;
            return match e {
                sqlx::Error::Database(db_err) => match db_err.kind() {
                    ErrorKind::UniqueViolation => Ok(LoadOutcome::Duplicate),
                    ErrorKind::CheckViolation
                    | ErrorKind::NotNullViolation
                    | ErrorKind::ForeignKeyViolation => Err(ReportError::Integrity {
                        table: table.name(),
                        message: db_err.message().to_string(),
                    }),
                    _ => Err(sqlx::Error::Database(db_err).into()),
                },
                other => Err(other.into()),
            };
        }
    }
    tx.commit().await?;

    Ok(LoadOutcome::Inserted {
        rows: batch.records.len(),
    })
}

/// Load every table from `csv_dir` in [`Table::LOAD_ORDER`].
///
/// Failures are logged with the table name and do not stop later tables.
pub async fn load_all(storage: &Storage, csv_dir: &Path) -> Vec<TableLoad> {
    let mut loads = Vec::with_capacity(Table::LOAD_ORDER.len());
    for table in Table::LOAD_ORDER {
        let path = csv_dir.join(table.csv_file());
        let result = load_csv(storage, &path, table).await;
        match &result {
            Ok(LoadOutcome::Inserted { rows }) => {
                info!(table = %table, rows = *rows, "rows inserted");
            }
            Ok(LoadOutcome::Duplicate) => {
                warn!(
                    table = %table,
                    "one or more rows already exist in table {table}; skipping duplicate insert"
                );
            }
            Err(e) => {
                error!(
                    table = %table,
                    path = %path.display(),
                    error = %e,
                    "failed to load table"
                );
            }
        }
        loads.push(TableLoad { table, result });
    }
    loads
}
