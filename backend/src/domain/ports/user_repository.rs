//! Driven port for the `users` table.
use async_trait::async_trait;

use crate::domain::{NewUser, UserProfile};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// The store could not be reached.
        Connection { message: String } => "user store connection failed: {message}",
        /// The store rejected or failed the operation.
        Query { message: String } => "user store query failed: {message}",
        /// The email uniqueness constraint rejected an insert.
        DuplicateEmail { message: String } => "email already registered: {message}",
    }
}

impl UserPersistenceError {
    /// Raw store message without the port prefix.
    pub fn store_message(&self) -> &str {
        match self {
            Self::Connection { message }
            | Self::Query { message }
            | Self::DuplicateEmail { message } => message,
        }
    }
}

/// Row-level access to user accounts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Return the first user whose email matches exactly.
    async fn find_by_email(&self, email: &str) -> Result<Option<UserProfile>, UserPersistenceError>;

    /// Insert one user row and return the inserted rows' profile projection.
    async fn insert(&self, user: &NewUser) -> Result<Vec<UserProfile>, UserPersistenceError>;
}
