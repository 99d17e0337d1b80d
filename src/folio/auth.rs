//! Single-admin authentication: an injectable credential check plus a
//! server-side session store keyed by random tokens.
//!
//! There is deliberately no user table. One fixed credential pair is
//! configured at startup; a successful login mints a session token the
//! HTTP layer hands back as a cookie. Tests substitute their own
//! [`CredentialProvider`] or read the store directly.

use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use uuid::Uuid;

/// Verifies a username/password pair.
pub trait CredentialProvider {
    fn verify(&self, username: &str, password: &str) -> bool;
}

/// The one production implementation: a fixed username and a sha-256
/// lower-hex digest of the admin password.
#[derive(Clone, Debug)]
pub struct FixedCredentials {
    username: String,
    password_sha256: String,
}

impl FixedCredentials {
    pub fn new(username: impl Into<String>, password_sha256: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password_sha256: password_sha256.into(),
        }
    }

    /// Convenience for tests and the `hash-password` CLI helper.
    pub fn from_password(username: impl Into<String>, password: &str) -> Self {
        Self::new(username, sha256_hex(password))
    }
}

impl CredentialProvider for FixedCredentials {
    fn verify(&self, username: &str, password: &str) -> bool {
        let name_ok = constant_time_eq(username, &self.username);
        let pass_ok = constant_time_eq(&sha256_hex(password), &self.password_sha256);
        name_ok && pass_ok
    }
}

pub fn sha256_hex(input: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    let digest = hasher.finalize();
    let mut out = String::with_capacity(digest.len() * 2);
    for byte in digest {
        out.push_str(&format!("{byte:02x}"));
    }
    out
}

fn constant_time_eq(a: &str, b: &str) -> bool {
    let a = a.as_bytes();
    let b = b.as_bytes();
    if a.len() != b.len() {
        return false;
    }
    let mut diff = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        diff |= x ^ y;
    }
    diff == 0
}

/// A logged-in admin session.
#[derive(Clone, Debug)]
pub struct Session {
    pub username: String,
    pub created_at: DateTime<Utc>,
}

/// Server-side session registry keyed by opaque random tokens.
#[derive(Default)]
pub struct SessionStore {
    sessions: HashMap<String, Session>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mint a fresh token for a successful login.
    pub fn create(&mut self, username: &str) -> String {
        let token = Uuid::new_v4().simple().to_string();
        self.sessions.insert(
            token.clone(),
            Session {
                username: username.to_string(),
                created_at: Utc::now(),
            },
        );
        token
    }

    pub fn get(&self, token: &str) -> Option<&Session> {
        self.sessions.get(token)
    }

    /// Remove a session on logout. Returns whether the token was live.
    pub fn remove(&mut self, token: &str) -> bool {
        self.sessions.remove(token).is_some()
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
