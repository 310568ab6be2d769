// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Aggregate impact statistics.
//!
//! These shapes are loosely defined by the backend, so every counter
//! defaults to zero and unknown fields are kept for display.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Platform-wide impact totals from `/api/global-stats`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalStats {
    /// CO₂ saved (kg)
    #[serde(default, alias = "CO2Saved")]
    pub co2_saved: f64,
    /// Plastic reduced (kg)
    #[serde(default)]
    pub plastic_reduced: f64,
    /// Number of challenge joins
    #[serde(default)]
    pub challenges_joined: u64,
    /// Any other metrics the backend reports
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

impl fmt::Display for GlobalStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "CO₂ Saved: {:.0} kg", self.co2_saved)?;
        writeln!(f, "Plastic Reduced: {:.0} kg", self.plastic_reduced)?;
        write!(f, "Challenges Joined: {} users", self.challenges_joined)?;
        for (metric, value) in &self.other {
            write!(f, "\n{}: {}", metric, value)?;
        }
        Ok(())
    }
}

/// Entity counts from `/api/statistics`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformStatistics {
    #[serde(default)]
    pub total_challenges: u64,
    #[serde(default)]
    pub total_users: u64,
    #[serde(default)]
    pub total_tips: u64,
    #[serde(default)]
    pub total_events: u64,
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

/// Total challenge joins from `/api/total-joined`.
///
/// The endpoint answers with either a bare number or
/// `{"totalJoined": n}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalJoined {
    pub total_joined: u64,
}

impl<'de> Deserialize<'de> for TotalJoined {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Wire {
            Bare(u64),
            Wrapped {
                #[serde(alias = "totalJoined", alias = "total")]
                total_joined: u64,
            },
        }

        Ok(match Wire::deserialize(deserializer)? {
            Wire::Bare(total_joined) | Wire::Wrapped { total_joined } => {
                TotalJoined { total_joined }
            }
        })
    }
}
