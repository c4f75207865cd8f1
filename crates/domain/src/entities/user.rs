use serde::{Deserialize, Serialize};

/// Core User entity - represents the business domain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i32, // caller-supplied, never auto-generated
    pub name: String,
}

impl User {
    pub fn new(id: i32, name: String) -> Self {
        Self { id, name }
    }
}
