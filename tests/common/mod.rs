#![allow(dead_code)]

use staff_reports::db::{Storage, Table};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Scratch store on disk plus a directory for CSV snapshots.
pub struct Fixture {
    pub dir: TempDir,
    pub storage: Storage,
}

impl Fixture {
    pub async fn new() -> Self {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let database_url = format!("sqlite:{}", dir.path().join("staff.db").display());
        let storage = Storage::connect(&database_url)
            .await
            .expect("failed to open sqlite store");
        storage.init_schema().await.expect("failed to init schema");
        Self { dir, storage }
    }

    pub fn csv_dir(&self) -> &Path {
        self.dir.path()
    }

    /// Write `contents` as the snapshot for `table` and return its path.
    pub fn write_csv(&self, table: Table, contents: &str) -> PathBuf {
        let path = self.dir.path().join(table.csv_file());
        fs::write(&path, contents).expect("failed to write csv");
        path
    }

    pub async fn load(&self, table: Table, contents: &str) {
        let path = self.write_csv(table, contents);
        staff_reports::service::csv_loader::load_csv(&self.storage, &path, table)
            .await
            .unwrap_or_else(|e| panic!("failed to load {table}: {e}"));
    }
}
