// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Typed wrappers for each backend endpoint.

use super::gateway::FetchGateway;
use crate::config::Config;
use crate::error::Result;
use crate::models::{
    Challenge, ChallengeFilter, Event, GlobalStats, JoinRequest, NewChallenge, NewEvent, NewTip,
    PlatformStatistics, ProgressUpdate, StepCompletion, Tip, TipUpdate, TotalJoined,
    UserChallenge, UserProfile, VoteResponse,
};
use crate::session::Session;
use reqwest::Method;
use urlencoding::encode;

/// Backend API client.
#[derive(Clone)]
pub struct EcoApi {
    gateway: FetchGateway,
}

impl EcoApi {
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            gateway: FetchGateway::new(config)?,
        })
    }

    pub fn gateway(&self) -> &FetchGateway {
        &self.gateway
    }

    // ─── Challenges ──────────────────────────────────────────────

    pub async fn list_challenges(&self) -> Result<Vec<Challenge>> {
        self.gateway.get("/api/challenges", None).await
    }

    pub async fn get_challenge(&self, id: &str) -> Result<Challenge> {
        let path = format!("/api/challenges/{}", encode(id));
        self.gateway.get(&path, None).await
    }

    pub async fn filter_challenges(&self, filter: &ChallengeFilter) -> Result<Vec<Challenge>> {
        self.gateway
            .get_with_query("/api/challenges/filter", &filter.to_query(), None)
            .await
    }

    /// Challenges currently between their start and end dates.
    pub async fn running_challenges(&self) -> Result<Vec<Challenge>> {
        self.gateway.get("/api/challenges/running", None).await
    }

    /// Challenges ranked by participant count.
    pub async fn top_participants(&self) -> Result<Vec<Challenge>> {
        self.gateway
            .get("/api/challenges/top-participants", None)
            .await
    }

    pub async fn create_challenge(&self, session: &Session, challenge: &NewChallenge) -> Result<()> {
        self.gateway
            .execute(
                Method::POST,
                "/api/challenges",
                Some(challenge),
                Some(session.token()),
            )
            .await
    }

    /// Replace an existing challenge with the edited copy.
    pub async fn update_challenge(&self, session: &Session, challenge: &Challenge) -> Result<()> {
        let path = format!("/api/challenges/{}", encode(&challenge.id));
        self.gateway
            .execute(Method::PATCH, &path, Some(challenge), Some(session.token()))
            .await
    }

    pub async fn delete_challenge(&self, session: &Session, id: &str) -> Result<()> {
        let path = format!("/api/challenges/{}", encode(id));
        self.gateway
            .execute::<()>(Method::DELETE, &path, None, Some(session.token()))
            .await
    }

    pub async fn join_challenge(&self, session: &Session, challenge_id: &str) -> Result<()> {
        let path = format!("/api/challenges/join/{}", encode(challenge_id));
        let body = JoinRequest {
            user_id: session.user.id.clone(),
        };
        self.gateway
            .execute(Method::POST, &path, Some(&body), Some(session.token()))
            .await
    }

    // ─── User Challenges ─────────────────────────────────────────

    /// Challenges the signed-in user has joined.
    pub async fn user_challenges(&self, session: &Session) -> Result<Vec<UserChallenge>> {
        let path = format!("/api/user-challenges/{}", encode(&session.user.id));
        self.gateway.get(&path, Some(session.token())).await
    }

    /// Same records through the query-string route used by the progress
    /// widget.
    pub async fn user_challenges_by_query(&self, session: &Session) -> Result<Vec<UserChallenge>> {
        self.gateway
            .get_with_query(
                "/api/userChallenges",
                &[("userId", session.user.id.clone())],
                Some(session.token()),
            )
            .await
    }

    /// Mark one step complete; the backend answers with the updated record.
    pub async fn complete_step(
        &self,
        session: &Session,
        user_challenge_id: &str,
        step: u32,
    ) -> Result<UserChallenge> {
        let path = format!(
            "/api/user-challenges/{}/complete-step",
            encode(user_challenge_id)
        );
        let body = StepCompletion { step_id: step };
        self.gateway
            .send(Method::PATCH, &path, Some(&body), Some(session.token()))
            .await
    }

    pub async fn set_progress(
        &self,
        session: &Session,
        user_challenge_id: &str,
        progress: i32,
    ) -> Result<()> {
        let path = format!("/api/userChallenges/{}/progress", encode(user_challenge_id));
        let body = ProgressUpdate { progress };
        self.gateway
            .execute(Method::PATCH, &path, Some(&body), Some(session.token()))
            .await
    }

    // ─── Tips ────────────────────────────────────────────────────

    pub async fn list_tips(&self) -> Result<Vec<Tip>> {
        self.gateway.get("/api/tips", None).await
    }

    /// Tips authored by the signed-in user.
    pub async fn my_tips(&self, session: &Session) -> Result<Vec<Tip>> {
        let path = format!("/api/tips/{}", encode(session.email()));
        self.gateway.get(&path, Some(session.token())).await
    }

    pub async fn create_tip(&self, session: &Session, tip: &NewTip) -> Result<()> {
        self.gateway
            .execute(Method::POST, "/api/tips", Some(tip), Some(session.token()))
            .await
    }

    pub async fn update_tip(&self, session: &Session, id: &str, update: &TipUpdate) -> Result<()> {
        let path = format!("/api/tips/{}", encode(id));
        self.gateway
            .execute(Method::PUT, &path, Some(update), Some(session.token()))
            .await
    }

    pub async fn delete_tip(&self, session: &Session, id: &str) -> Result<()> {
        let path = format!("/api/tips/{}", encode(id));
        self.gateway
            .execute::<()>(Method::DELETE, &path, None, Some(session.token()))
            .await
    }

    /// Toggle the signed-in user's vote on a tip.
    pub async fn toggle_upvote(&self, session: &Session, id: &str) -> Result<VoteResponse> {
        let path = format!("/api/tips/{}/upvote", encode(id));
        self.gateway
            .send::<(), _>(Method::PUT, &path, None, Some(session.token()))
            .await
    }

    // ─── Events ──────────────────────────────────────────────────

    pub async fn list_events(&self) -> Result<Vec<Event>> {
        self.gateway.get("/api/events", None).await
    }

    pub async fn upcoming_events(&self) -> Result<Vec<Event>> {
        // Path spelling is the backend's.
        self.gateway.get("/api/events/upcomming", None).await
    }

    pub async fn create_event(&self, session: &Session, event: &NewEvent) -> Result<()> {
        self.gateway
            .execute(Method::POST, "/api/events", Some(event), Some(session.token()))
            .await
    }

    // ─── Statistics ──────────────────────────────────────────────

    pub async fn global_stats(&self) -> Result<GlobalStats> {
        self.gateway.get("/api/global-stats", None).await
    }

    pub async fn statistics(&self) -> Result<PlatformStatistics> {
        self.gateway.get("/api/statistics", None).await
    }

    pub async fn total_joined(&self) -> Result<TotalJoined> {
        self.gateway.get("/api/total-joined", None).await
    }

    // ─── Users ───────────────────────────────────────────────────

    /// Upsert the profile right after the auth provider issues `token`.
    pub async fn upsert_user(&self, token: &str, profile: &UserProfile) -> Result<()> {
        self.gateway
            .execute(Method::POST, "/api/user", Some(profile), Some(token))
            .await
    }
}
