use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::services::store::KeyValue;

const USERS_KEY: &str = "scholarship_users";
const SESSION_KEY: &str = "current_user";

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Email {0} is already registered")]
    EmailTaken(String),

    #[error("Username {0} is already taken")]
    UsernameTaken(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Student,
}

/// A registered portal user.
///
/// Passwords are stored as given. The original does the same and the
/// portal runs as a single-user local tool, so no hashing layer sits here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    pub name: String,
    #[serde(default)]
    pub organization: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Registration {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    pub name: String,
    pub organization: Option<String>,
}

/// User accounts and the current session over a key-value backend
pub struct AuthStore<B: KeyValue> {
    backend: B,
    users: Vec<User>,
}

impl<B: KeyValue> AuthStore<B> {
    pub fn open(backend: B) -> Result<Self, AuthError> {
        let users: Vec<User> = match backend.get(USERS_KEY) {
            Some(raw) => serde_json::from_str(&raw)?,
            None => Vec::new(),
        };
        Ok(Self { backend, users })
    }

    fn save(&mut self) -> Result<(), AuthError> {
        self.backend.set(USERS_KEY, serde_json::to_string(&self.users)?);
        Ok(())
    }

    /// Register a new account. Emails and usernames must be unique.
    pub fn register(&mut self, registration: Registration) -> Result<u32, AuthError> {
        if self.users.iter().any(|u| u.email == registration.email) {
            return Err(AuthError::EmailTaken(registration.email));
        }
        if self.users.iter().any(|u| u.username == registration.username) {
            return Err(AuthError::UsernameTaken(registration.username));
        }

        let id = self.users.iter().map(|u| u.id).max().unwrap_or(0) + 1;
        let user = User {
            id,
            username: registration.username,
            email: registration.email,
            password: registration.password,
            role: registration.role,
            name: registration.name,
            organization: registration.organization,
        };

        info!(user_id = id, "registered new user");
        self.users.push(user);
        self.save()?;
        Ok(id)
    }

    /// Log in with email or username. A match starts a session; a miss
    /// yields None with no distinction between unknown account and wrong
    /// password.
    pub fn login(&mut self, identifier: &str, password: &str) -> Result<Option<User>, AuthError> {
        let user = self
            .users
            .iter()
            .find(|u| (u.email == identifier || u.username == identifier) && u.password == password)
            .cloned();

        match &user {
            Some(user) => {
                self.backend.set(SESSION_KEY, serde_json::to_string(user)?);
                info!(user_id = user.id, "user logged in");
            }
            None => debug!(identifier, "login failed"),
        }
        Ok(user)
    }

    pub fn logout(&mut self) {
        self.backend.remove(SESSION_KEY);
    }

    pub fn current_user(&self) -> Result<Option<User>, AuthError> {
        match self.backend.get(SESSION_KEY) {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    /// Whether the current session may act with the given role
    pub fn can_access(&self, role: Role) -> Result<bool, AuthError> {
        Ok(self.current_user()?.map_or(false, |u| u.role == role))
    }
}
