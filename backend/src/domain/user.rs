//! User account types.
//!
//! Registration stores the supplied fields verbatim; `password_hash` arrives
//! already hashed by the client tier and is never echoed back.

use std::fmt;

/// Store-assigned user identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserId(i64);

impl UserId {
    /// Wrap a raw store identity.
    #[must_use]
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Raw value as stored.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Public projection of a user row: everything but the password hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub id: UserId,
    pub name: String,
    pub contact: String,
    pub email: String,
    pub role: String,
}

/// Registration payload written to the `users` table as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub contact: String,
    pub email: String,
    pub role: String,
    pub password_hash: String,
}

impl NewUser {
    /// Profile projection for a freshly inserted row.
    #[must_use]
    pub fn into_profile(self, id: UserId) -> UserProfile {
        let Self {
            name,
            contact,
            email,
            role,
            password_hash: _,
        } = self;
        UserProfile {
            id,
            name,
            contact,
            email,
            role,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn into_profile_drops_password_hash() {
        let new_user = NewUser {
            name: "Ada".to_owned(),
            contact: "0700000000".to_owned(),
            email: "ada@example.com".to_owned(),
            role: "lender".to_owned(),
            password_hash: "$argon2id$v=19$stub".to_owned(),
        };

        let profile = new_user.into_profile(UserId::new(7));

        assert_eq!(profile.id.get(), 7);
        assert_eq!(profile.email, "ada@example.com");
        assert_eq!(profile.role, "lender");
    }
}
