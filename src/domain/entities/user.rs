// src/domain/entities/user.rs
/*
User Entity

Read-only view of the authenticating user as supplied by the host platform.
The host owns identity, roles, and the super-administrator flag; this crate
never mutates a user. The email address is wrapped in a validating value
object so a malformed recipient is caught at the boundary rather than at
dispatch time.
*/

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Clone, Error)]
pub enum UserError {
    #[error("Invalid email address: {0}")]
    InvalidEmail(String),
}

/// Email value object that encapsulates email validation logic
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Email {
    value: String,
}

impl Email {
    /// Creates a new Email value object with validation
    pub fn new(email: String) -> Result<Self, UserError> {
        if Self::is_valid(&email) {
            Ok(Self {
                value: email.to_lowercase(),
            })
        } else {
            Err(UserError::InvalidEmail(email))
        }
    }

    /// Validates email format using a comprehensive regex
    fn is_valid(email: &str) -> bool {
        use regex::Regex;

        let email_regex = Regex::new(
            r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$"
        ).unwrap();

        email_regex.is_match(email) && email.len() <= 254
    }

    /// Returns the email value as a string
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the domain part of the email
    pub fn domain(&self) -> Option<&str> {
        self.value.split('@').nth(1)
    }
}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// The authenticating user, as read from the host platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub login: String,
    pub display_name: String,
    pub email: Email,
    pub roles: Vec<String>,
    pub is_super_admin: bool,
}

impl User {
    pub fn new(
        login: String,
        display_name: String,
        email: Email,
        roles: Vec<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            login,
            display_name,
            email,
            roles,
            is_super_admin: false,
        }
    }

    /// Whether any of the user's roles appears in the allow-list.
    pub fn has_any_role(&self, allowed: &[String]) -> bool {
        self.roles.iter().any(|role| allowed.contains(role))
    }
}
