//! User account service implementing the lookup and registration ports.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::domain::ports::{
    UserLookupQuery, UserPersistenceError, UserRegistrationCommand, UserRepository,
};
use crate::domain::{Error, NewUser, UserProfile};

/// Message returned when registration hits the email uniqueness constraint.
pub const DUPLICATE_EMAIL_MESSAGE: &str = "Email already exists.";

/// User account service backed by a [`UserRepository`].
#[derive(Clone)]
pub struct UserAccountService<R> {
    users: Arc<R>,
}

impl<R> UserAccountService<R> {
    /// Create a new service over the given repository.
    pub fn new(users: Arc<R>) -> Self {
        Self { users }
    }
}

fn map_lookup_error(error: UserPersistenceError) -> Error {
    debug!(error_kind = error.kind(), %error, "user lookup failed");
    Error::invalid_request(error.store_message())
}

fn map_registration_error(error: UserPersistenceError) -> Error {
    debug!(error_kind = error.kind(), %error, "user registration failed");
    match error {
        UserPersistenceError::DuplicateEmail { .. } => Error::conflict(DUPLICATE_EMAIL_MESSAGE),
        UserPersistenceError::Connection { message } | UserPersistenceError::Query { message } => {
            Error::invalid_request(message)
        }
    }
}

#[async_trait]
impl<R> UserLookupQuery for UserAccountService<R>
where
    R: UserRepository,
{
    async fn profile_by_email(&self, email: &str) -> Result<Option<UserProfile>, Error> {
        self.users
            .find_by_email(email)
            .await
            .map_err(map_lookup_error)
    }
}

#[async_trait]
impl<R> UserRegistrationCommand for UserAccountService<R>
where
    R: UserRepository,
{
    async fn register(&self, user: NewUser) -> Result<Vec<UserProfile>, Error> {
        let inserted = self
            .users
            .insert(&user)
            .await
            .map_err(map_registration_error)?;
        info!(rows = inserted.len(), role = %user.role, "user registered");
        Ok(inserted)
    }
}
