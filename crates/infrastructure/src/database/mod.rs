use diesel::prelude::*;
use diesel::r2d2::{self, ConnectionManager};

pub mod schema;
pub use schema::*;

pub type SqlitePool = r2d2::Pool<ConnectionManager<SqliteConnection>>;

pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Open (or create) the SQLite database at `database_path` and make
    /// sure the schema exists. Failure here is fatal at startup.
    pub fn new(database_path: &str) -> Self {
        let manager = ConnectionManager::<SqliteConnection>::new(database_path);
        let pool = r2d2::Pool::builder()
            .build(manager)
            .expect("Failed to create SQLite connection pool");

        let mut conn = pool.get().expect("Failed to get SQLite connection");
        diesel::sql_query(
            "CREATE TABLE IF NOT EXISTS users (id INTEGER PRIMARY KEY, name TEXT NOT NULL)",
        )
        .execute(&mut conn)
        .expect("Failed to create users table");

        Database { pool }
    }

    pub fn get_pool(&self) -> &SqlitePool {
        &self.pool
    }
}
