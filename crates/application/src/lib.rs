use domain::UserRepository;
use infrastructure::{Database, SqliteUserRepository};
use std::sync::Arc;

/// User Application - wires the persistence layer to the domain port.
///
/// The pool is owned here for the life of the process; dropping the app
/// releases every connection. Nothing in this crate is reachable through
/// global state, so tests can substitute any `UserRepository`.
pub struct UserApp {
    pub user_repository: Arc<dyn UserRepository>,
}

impl UserApp {
    pub fn new(database_path: &str) -> Self {
        // Infrastructure layer - database setup
        let database = Database::new(database_path);
        let pool = database.get_pool().clone();

        let user_repository: Arc<dyn UserRepository> =
            Arc::new(SqliteUserRepository::new(pool));

        Self { user_repository }
    }
}
