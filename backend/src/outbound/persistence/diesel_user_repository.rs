//! PostgreSQL-backed `UserRepository` using Diesel.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{NewUser, UserProfile};

use super::diesel_error_mapping::{user_diesel_error, user_pool_error};
use super::models::{NewUserRow, UserProfileRow};
use super::pool::DbPool;
use super::schema::users;

/// Diesel-backed implementation of the [`UserRepository`] port.
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<UserProfile>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(user_pool_error)?;

        users::table
            .filter(users::email.eq(email))
            .order_by(users::id)
            .select(UserProfileRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map(|row| row.map(UserProfile::from))
            .map_err(user_diesel_error)
    }

    async fn insert(&self, user: &NewUser) -> Result<Vec<UserProfile>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(user_pool_error)?;

        let rows: Vec<UserProfileRow> = diesel::insert_into(users::table)
            .values(NewUserRow::from(user))
            .returning(UserProfileRow::as_returning())
            .get_results(&mut conn)
            .await
            .map_err(user_diesel_error)?;

        Ok(rows.into_iter().map(UserProfile::from).collect())
    }
}
