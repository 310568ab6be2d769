// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Eco-Tracker: client for the eco-challenge platform
//!
//! This crate provides typed access to the challenge backend, view models
//! for browsing challenges, tips, events and impact statistics, and the
//! reconciliation logic that merges confirmed mutations into local state.

pub mod config;
pub mod error;
pub mod forms;
pub mod models;
pub mod notify;
pub mod reconcile;
pub mod services;
pub mod session;
pub mod validation;
pub mod views;

use config::Config;
use notify::Notifier;
use services::EcoApi;
use session::AuthState;

/// Shared client state handed to views and forms.
pub struct AppState {
    pub config: Config,
    pub api: EcoApi,
    pub auth: AuthState,
    pub notifier: Notifier,
}

impl AppState {
    /// Build the client state; the session comes from configured
    /// credentials when present.
    pub fn new(config: Config, notifier: Notifier) -> error::Result<Self> {
        let api = EcoApi::new(&config)?;
        let auth = AuthState::from_config(&config);
        Ok(Self {
            config,
            api,
            auth,
            notifier,
        })
    }
}
