use crate::entities::User;
use crate::errors::DomainError;
use async_trait::async_trait;

/// Repository trait - defines what we need from persistence layer
/// This is a PORT in hexagonal architecture
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fetch a user by id. `Ok(None)` means the id matched no row;
    /// that is a valid outcome, not an error.
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, DomainError>;

    /// Insert a new user. Uniqueness of `id` is enforced by the store's
    /// primary-key constraint, not checked here.
    async fn insert(&self, user: &User) -> Result<(), DomainError>;
}
