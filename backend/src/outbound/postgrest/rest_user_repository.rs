//! PostgREST-backed `UserRepository`.

use async_trait::async_trait;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{NewUser, UserProfile};

use super::client::{PostgrestClient, RestCallError, eq_filter};
use super::dto::{NewUserDto, USER_PROFILE_COLUMNS, USERS_TABLE, UserProfileDto};

/// User repository speaking to the `users` table over REST.
#[derive(Clone)]
pub struct RestUserRepository {
    client: PostgrestClient,
}

impl RestUserRepository {
    /// Create a repository over a shared client.
    pub fn new(client: PostgrestClient) -> Self {
        Self { client }
    }
}

fn map_call_error(error: RestCallError) -> UserPersistenceError {
    if error.is_unique_violation() {
        return UserPersistenceError::duplicate_email(error.to_string());
    }
    match error {
        RestCallError::Transport { message } => UserPersistenceError::connection(message),
        RestCallError::Rejected { message, .. } | RestCallError::Decode { message } => {
            UserPersistenceError::query(message)
        }
    }
}

#[async_trait]
impl UserRepository for RestUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<UserProfile>, UserPersistenceError> {
        let rows: Vec<UserProfileDto> = self
            .client
            .select(USERS_TABLE, USER_PROFILE_COLUMNS, &[("email", eq_filter(email))])
            .await
            .map_err(map_call_error)?;
        Ok(rows.into_iter().next().map(UserProfile::from))
    }

    async fn insert(&self, user: &NewUser) -> Result<Vec<UserProfile>, UserPersistenceError> {
        let rows: Vec<UserProfileDto> = self
            .client
            .insert(USERS_TABLE, USER_PROFILE_COLUMNS, &NewUserDto::from(user))
            .await
            .map_err(map_call_error)?;
        Ok(rows.into_iter().map(UserProfile::from).collect())
    }
}
