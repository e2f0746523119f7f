//! Shared classification of Diesel and pool failures.
//!
//! Store messages are passed through verbatim: callers surface them to the
//! client as the error detail.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use crate::domain::ports::{ProductPersistenceError, UserPersistenceError};

use super::pool::PoolError;

/// Coarse failure class shared by every Diesel repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum StoreFailure {
    Connection(String),
    Query(String),
    UniqueViolation(String),
}

pub(super) fn classify_diesel_error(error: DieselError) -> StoreFailure {
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
            StoreFailure::UniqueViolation(info.message().to_owned())
        }
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, info) => {
            StoreFailure::Connection(info.message().to_owned())
        }
        DieselError::DatabaseError(_, info) => StoreFailure::Query(info.message().to_owned()),
        DieselError::NotFound => StoreFailure::Query("record not found".to_owned()),
        other => StoreFailure::Query(other.to_string()),
    }
}

pub(super) fn user_pool_error(error: PoolError) -> UserPersistenceError {
    UserPersistenceError::connection(error.into_message())
}

pub(super) fn user_diesel_error(error: DieselError) -> UserPersistenceError {
    match classify_diesel_error(error) {
        StoreFailure::Connection(message) => UserPersistenceError::connection(message),
        StoreFailure::Query(message) => UserPersistenceError::query(message),
        StoreFailure::UniqueViolation(message) => UserPersistenceError::duplicate_email(message),
    }
}

pub(super) fn product_pool_error(error: PoolError) -> ProductPersistenceError {
    ProductPersistenceError::connection(error.into_message())
}

pub(super) fn product_diesel_error(error: DieselError) -> ProductPersistenceError {
    match classify_diesel_error(error) {
        StoreFailure::Connection(message) => ProductPersistenceError::connection(message),
        StoreFailure::Query(message) | StoreFailure::UniqueViolation(message) => {
            ProductPersistenceError::query(message)
        }
    }
}
