//! Driving ports for user account lookups and registration.
//!
//! HTTP handlers depend on these traits only, so they stay testable without
//! a store.

use async_trait::async_trait;

use crate::domain::{Error, NewUser, UserProfile};

/// Email-keyed user lookups.
///
/// A missing user is `Ok(None)`, never an error.
#[async_trait]
pub trait UserLookupQuery: Send + Sync {
    /// Return the profile of the first user with this exact email.
    async fn profile_by_email(&self, email: &str) -> Result<Option<UserProfile>, Error>;
}

/// Account registration.
#[async_trait]
pub trait UserRegistrationCommand: Send + Sync {
    /// Insert a new user, failing with a conflict when the email is taken.
    async fn register(&self, user: NewUser) -> Result<Vec<UserProfile>, Error>;
}
