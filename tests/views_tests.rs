// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Loading screens: empty, failed and partially failed states.

use axum::http::Method;
use eco_tracker::models::TipCategory;
use eco_tracker::views::{
    ChallengeDetailView, ChallengesView, EventScope, EventsView, LoadState, MyChallengesView,
    MyCreatedChallengesView, MyTipsView, RecentTipsView, RunningChallengesView, StatsView,
    TipsView,
};
use serde_json::json;

mod common;
use common::{MockBackend, TEST_EMAIL};

#[tokio::test]
async fn test_empty_challenge_list_shows_empty_state() {
    let backend = MockBackend::start().await;
    backend.respond(Method::GET, "/api/challenges", 200, json!([]));
    let (state, _notifications) = common::signed_out(&backend);

    let mut view = ChallengesView::new();
    view.load(&state).await;

    assert_eq!(view.state(), &LoadState::Empty);
    assert!(view.challenges().is_empty());
    assert!(view
        .to_string()
        .contains("No challenges found. Check back soon!"));
}

#[tokio::test]
async fn test_challenge_list_renders_entries() {
    let backend = MockBackend::start().await;
    backend.respond(
        Method::GET,
        "/api/challenges",
        200,
        json!([
            common::challenge_json("c1", "Plastic Free Month", 12),
            common::challenge_json("c2", "Meatless Mondays", 3),
        ]),
    );
    let (state, _notifications) = common::signed_out(&backend);

    let mut view = ChallengesView::new();
    view.load(&state).await;

    assert_eq!(view.state(), &LoadState::Loaded);
    let rendered = view.to_string();
    assert!(rendered.contains("Plastic Free Month"));
    assert!(rendered.contains("Meatless Mondays"));
}

#[tokio::test]
async fn test_my_tips_unauthorized_fails_with_empty_list() {
    let backend = MockBackend::start().await;
    let path = format!("/api/tips/{}", urlencoding::encode(TEST_EMAIL));
    backend.respond(
        Method::GET,
        &path,
        401,
        json!({ "message": "Unauthorized" }),
    );
    let (state, _notifications) = common::signed_in(&backend);

    let mut view = MyTipsView::new();
    view.load(&state).await;

    assert!(view.tips().is_empty());
    assert_eq!(
        view.state(),
        &LoadState::Failed("Could not load your tips. Please try again later.".to_string())
    );
}

#[tokio::test]
async fn test_my_tips_signed_out_sends_nothing() {
    let backend = MockBackend::start().await;
    let (state, _notifications) = common::signed_out(&backend);

    let mut view = MyTipsView::new();
    view.load(&state).await;

    assert_eq!(backend.hits(), 0);
    assert_eq!(
        view.state(),
        &LoadState::Failed("Please log in to view and manage your tips.".to_string())
    );
}

#[tokio::test]
async fn test_load_failure_replaces_previous_list() {
    let backend = MockBackend::start().await;
    backend.respond(
        Method::GET,
        "/api/user-challenges/user-1",
        200,
        json!([common::user_challenge_json("uc1", 30, &[0])]),
    );
    let (state, _notifications) = common::signed_in(&backend);

    let mut view = MyChallengesView::new();
    view.load(&state).await;
    assert_eq!(view.challenges().len(), 1);

    backend.respond(Method::GET, "/api/user-challenges/user-1", 500, json!({}));
    view.load(&state).await;

    assert!(view.challenges().is_empty());
    assert!(view.state().is_failed());
}

#[tokio::test]
async fn test_sparse_tip_records_still_load() {
    let backend = MockBackend::start().await;
    let mut no_voters = common::tip_json("t2", 3, &[]);
    no_voters["upvotedUsers"] = json!(null);
    let mut no_category = common::tip_json("t3", 0, &[]);
    no_category.as_object_mut().unwrap().remove("category");
    backend.respond(
        Method::GET,
        "/api/tips",
        200,
        json!([common::tip_json("t1", 1, &["moss@example.com"]), no_voters, no_category]),
    );
    let (state, _notifications) = common::signed_out(&backend);

    let mut view = TipsView::new();
    view.load(&state).await;

    assert_eq!(view.state(), &LoadState::Loaded);
    assert_eq!(view.tips().len(), 3);
    assert!(view.tips()[1].upvoted_users.is_empty());
    assert_eq!(view.tips()[2].category, TipCategory::Other);
}

#[tokio::test]
async fn test_null_completed_steps_still_load() {
    let backend = MockBackend::start().await;
    let mut fresh = common::user_challenge_json("uc2", 0, &[]);
    fresh["completedSteps"] = json!(null);
    backend.respond(
        Method::GET,
        "/api/user-challenges/user-1",
        200,
        json!([common::user_challenge_json("uc1", 30, &[0]), fresh]),
    );
    let (state, _notifications) = common::signed_in(&backend);

    let mut view = MyChallengesView::new();
    view.load(&state).await;

    assert_eq!(view.state(), &LoadState::Loaded);
    assert_eq!(view.challenges().len(), 2);
    assert!(view.get("uc2").unwrap().completed_steps.is_empty());
}

#[tokio::test]
async fn test_recent_tips_newest_first_limited() {
    let backend = MockBackend::start().await;
    let tips: Vec<_> = (1..=7)
        .map(|day| {
            let mut tip = common::tip_json(&format!("t{}", day), 0, &[]);
            tip["createdAt"] = json!(format!("2026-03-0{}T09:00:00Z", day));
            tip
        })
        .collect();
    backend.respond(Method::GET, "/api/tips", 200, json!(tips));
    let (state, _notifications) = common::signed_out(&backend);

    let mut view = RecentTipsView::new();
    view.load(&state).await;

    let ids: Vec<&str> = view.tips().iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["t7", "t6", "t5", "t4", "t3"]);
}

#[tokio::test]
async fn test_running_challenges_render_at_most_six() {
    let backend = MockBackend::start().await;
    let running: Vec<_> = (1..=8)
        .map(|i| common::challenge_json(&format!("c{}", i), &format!("Mission {}", i), i))
        .collect();
    backend.respond(Method::GET, "/api/challenges/running", 200, json!(running));
    let (state, _notifications) = common::signed_out(&backend);

    let mut view = RunningChallengesView::new();
    view.load(&state).await;

    assert_eq!(view.challenges().len(), 8);
    let rendered = view.to_string();
    assert!(rendered.contains("Mission 6"));
    assert!(!rendered.contains("Mission 7"));
}

#[tokio::test]
async fn test_challenge_detail_not_found() {
    let backend = MockBackend::start().await;
    let (state, _notifications) = common::signed_out(&backend);

    let mut view = ChallengeDetailView::new("missing");
    view.load(&state).await;

    assert!(view.challenge().is_none());
    assert_eq!(
        view.state(),
        &LoadState::Failed("Challenge not found".to_string())
    );
}

#[tokio::test]
async fn test_created_challenges_filtered_by_creator() {
    let backend = MockBackend::start().await;
    let mut mine = common::challenge_json("c1", "Solar Swap", 2);
    mine["createdBy"] = json!(TEST_EMAIL);
    backend.respond(
        Method::GET,
        "/api/challenges",
        200,
        json!([mine, common::challenge_json("c2", "Not Mine", 9)]),
    );
    let (state, _notifications) = common::signed_in(&backend);

    let mut view = MyCreatedChallengesView::new();
    view.load(&state).await;

    let titles: Vec<&str> = view.challenges().iter().map(|c| c.title.as_str()).collect();
    assert_eq!(titles, vec!["Solar Swap"]);
}

#[tokio::test]
async fn test_upcoming_events_truncated() {
    let backend = MockBackend::start().await;
    let events: Vec<_> = (1..=9)
        .map(|i| json!({ "_id": format!("e{}", i), "title": format!("Cleanup {}", i) }))
        .collect();
    backend.respond(Method::GET, "/api/events/upcomming", 200, json!(events));
    let (state, _notifications) = common::signed_out(&backend);

    let mut view = EventsView::new(EventScope::Upcoming);
    view.load(&state).await;

    assert_eq!(view.events().len(), 5);
}

#[tokio::test]
async fn test_stats_partial_failure_still_loaded() {
    let backend = MockBackend::start().await;
    backend.respond(
        Method::GET,
        "/api/global-stats",
        200,
        json!({ "co2Saved": 120.5, "plasticReduced": 8.0, "challengesJoined": 42 }),
    );
    backend.respond(Method::GET, "/api/total-joined", 200, json!(42));
    let (state, _notifications) = common::signed_out(&backend);

    let mut view = StatsView::new();
    view.load(&state).await;

    assert_eq!(view.state(), &LoadState::Loaded);
    assert_eq!(view.global.as_ref().unwrap().challenges_joined, 42);
    assert_eq!(view.total_joined.as_ref().unwrap().total_joined, 42);
    assert!(view.statistics.is_none());
    assert!(view.top_challenges.is_empty());
    assert_eq!(backend.hits(), 4);
}

#[tokio::test]
async fn test_stats_all_failed() {
    let backend = MockBackend::start().await;
    let (state, _notifications) = common::signed_out(&backend);

    let mut view = StatsView::new();
    view.load(&state).await;

    assert!(view.state().is_failed());
}
