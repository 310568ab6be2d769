// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Authenticated session handed explicitly to every action that needs one.
//!
//! The token is issued by the external auth provider; this module only
//! carries it. A session is created at sign-in and dropped at sign-out.

use crate::config::Config;
use crate::error::{ClientError, Result};
use std::fmt;

/// Identity of the signed-in user as known to the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionUser {
    /// Backend user document ID
    pub id: String,
    pub email: String,
    pub display_name: Option<String>,
    pub photo_url: Option<String>,
}

/// A signed-in session.
#[derive(Clone)]
pub struct Session {
    pub user: SessionUser,
    token: String,
}

impl Session {
    pub fn new(user: SessionUser, token: impl Into<String>) -> Self {
        Self {
            user,
            token: token.into(),
        }
    }

    /// Bearer token for backend requests.
    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn email(&self) -> &str {
        &self.user.email
    }
}

// Keep tokens out of logs.
impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("user", &self.user)
            .field("token", &"<redacted>")
            .finish()
    }
}

/// Authentication state of the client.
#[derive(Debug, Clone, Default)]
pub enum AuthState {
    #[default]
    SignedOut,
    SignedIn(Session),
}

impl AuthState {
    /// Build the state from configured credentials. All of token, user ID
    /// and email must be present to be signed in.
    pub fn from_config(config: &Config) -> Self {
        match (&config.id_token, &config.user_id, &config.user_email) {
            (Some(token), Some(id), Some(email)) => AuthState::SignedIn(Session::new(
                SessionUser {
                    id: id.clone(),
                    email: email.clone(),
                    display_name: config.user_name.clone(),
                    photo_url: None,
                },
                token.clone(),
            )),
            _ => AuthState::SignedOut,
        }
    }

    pub fn sign_in(&mut self, session: Session) {
        tracing::info!(email = %session.user.email, "Signed in");
        *self = AuthState::SignedIn(session);
    }

    pub fn sign_out(&mut self) {
        if let AuthState::SignedIn(session) = self {
            tracing::info!(email = %session.user.email, "Signed out");
        }
        *self = AuthState::SignedOut;
    }

    pub fn session(&self) -> Option<&Session> {
        match self {
            AuthState::SignedIn(session) => Some(session),
            AuthState::SignedOut => None,
        }
    }

    /// The current session, or `Unauthenticated` when signed out.
    pub fn require(&self) -> Result<&Session> {
        self.session().ok_or(ClientError::Unauthenticated)
    }
}
