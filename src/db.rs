//! SQLite connection pool helpers.

use diesel::SqliteConnection;
use diesel::r2d2::{self, ConnectionManager, PooledConnection};

/// Shared r2d2 pool of SQLite connections; cheap to clone.
pub type DbPool = r2d2::Pool<ConnectionManager<SqliteConnection>>;
/// A single pooled SQLite connection.
pub type DbConnection = PooledConnection<ConnectionManager<SqliteConnection>>;

/// Build an r2d2 pool for the given database URL.
pub fn establish_connection_pool(database_url: &str) -> Result<DbPool, r2d2::PoolError> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    r2d2::Pool::builder().build(manager)
}
