// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Impact statistics dashboard.
//!
//! Several widgets upstream read different endpoints for the same numbers;
//! this view loads each of them so none is treated as authoritative.

use super::LoadState;
use crate::error::ClientError;
use crate::models::{Challenge, GlobalStats, PlatformStatistics, TotalJoined};
use crate::AppState;
use std::fmt;

const TOP_SHOWN: usize = 5;

#[derive(Debug, Default)]
pub struct StatsView {
    pub global: Option<GlobalStats>,
    pub statistics: Option<PlatformStatistics>,
    pub total_joined: Option<TotalJoined>,
    pub top_challenges: Vec<Challenge>,
    state: LoadState,
}

fn keep<T>(what: &'static str, result: Result<T, ClientError>) -> Option<T> {
    result
        .map_err(|e| tracing::error!(what, error = %e, "Stats load failed"))
        .ok()
}

impl StatsView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    /// Fetch all sections concurrently. The view counts as loaded when at
    /// least one section arrived.
    pub async fn load(&mut self, state: &AppState) {
        self.state = LoadState::Loading;
        let (global, statistics, total_joined, top) = tokio::join!(
            state.api.global_stats(),
            state.api.statistics(),
            state.api.total_joined(),
            state.api.top_participants(),
        );

        self.global = keep("global stats", global);
        self.statistics = keep("statistics", statistics);
        self.total_joined = keep("total joined", total_joined);
        let top = keep("top participants", top);
        let any_top = top.is_some();
        self.top_challenges = top.unwrap_or_default();

        self.state = if self.global.is_some()
            || self.statistics.is_some()
            || self.total_joined.is_some()
            || any_top
        {
            LoadState::Loaded
        } else {
            LoadState::Failed("Could not load impact statistics.".to_string())
        };
    }
}

impl fmt::Display for StatsView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Global Impact Tracked")?;
        match &self.state {
            LoadState::Failed(msg) => return writeln!(f, "  error: {}", msg),
            LoadState::Idle | LoadState::Loading => return writeln!(f, "  loading..."),
            _ => {}
        }

        if let Some(global) = &self.global {
            for line in global.to_string().lines() {
                writeln!(f, "  {}", line)?;
            }
        }
        if let Some(stats) = &self.statistics {
            writeln!(
                f,
                "  {} challenges, {} users, {} tips, {} events",
                stats.total_challenges, stats.total_users, stats.total_tips, stats.total_events
            )?;
        }
        if let Some(joined) = &self.total_joined {
            writeln!(f, "  Total joined: {}", joined.total_joined)?;
        }
        if !self.top_challenges.is_empty() {
            writeln!(f, "  Most joined:")?;
            for c in self.top_challenges.iter().take(TOP_SHOWN) {
                writeln!(f, "    - {} ({} participants)", c.title, c.participants)?;
            }
        }
        Ok(())
    }
}
