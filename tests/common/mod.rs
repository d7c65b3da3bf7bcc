//! Shared harness for integration tests.

use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use recipe_api::db::{DbPool, establish_connection_pool};
use tempfile::NamedTempFile;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

/// Throwaway SQLite database backed by a temp file, dropped with the test.
pub struct TestDb {
    _tempfile: NamedTempFile,
    pool: DbPool,
}

impl TestDb {
    pub fn new() -> Self {
        let tempfile = NamedTempFile::new().expect("temp file for test database");
        let pool = establish_connection_pool(tempfile.path().to_str().unwrap())
            .expect("SQLite pool for test database");
        let mut conn = pool.get().expect("connection for running migrations");
        conn.run_pending_migrations(MIGRATIONS)
            .expect("recipe migrations should apply cleanly");
        TestDb {
            _tempfile: tempfile,
            pool,
        }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }
}
