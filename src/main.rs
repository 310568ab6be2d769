// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Eco-Tracker command-line client
//!
//! Renders one screen of the eco-challenge platform, or performs one
//! action against it, and prints any notifications raised on the way.

use anyhow::Context;
use clap::{Parser, Subcommand};
use eco_tracker::{
    config::Config,
    models::ChallengeFilter,
    notify::{self, NotificationKind, Notifications},
    views::{
        ChallengeDetailView, ChallengeFilterView, ChallengesView, EventScope, EventsView,
        MyChallengesView, MyCreatedChallengesView, MyTipsView, RecentTipsView,
        RunningChallengesView, StatsView, TipsView,
    },
    AppState,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "eco-tracker", version, about = "Eco-challenge platform client")]
#[command(
    after_help = "Environment:\n  ECO_BACKEND_URL   Backend base URL (required)\n  ECO_ID_TOKEN      Bearer token of the signed-in user\n  ECO_LOG_FORMAT    Set to \"pretty\" for human-readable logs"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// All challenges
    Challenges,
    /// Challenges running right now
    Running,
    /// Challenges created by the signed-in user
    Created,
    /// Challenges the signed-in user joined
    MyChallenges,
    /// One challenge in detail
    Challenge { id: String },
    /// Challenges in the given categories
    Filter {
        #[arg(value_delimiter = ',')]
        categories: Vec<String>,
    },
    /// All community tips
    Tips,
    /// The newest tips
    RecentTips,
    /// Tips shared by the signed-in user
    MyTips,
    /// All events
    Events,
    /// Upcoming events
    Upcoming,
    /// Impact statistics
    Stats,
    /// Join a challenge
    Join { id: String },
    /// Toggle your vote on a tip
    Upvote { tip_id: String },
    /// Mark a step of a joined challenge complete
    CompleteStep { id: String, step: u32 },
    /// Add percentage points of progress to a joined challenge
    Progress {
        id: String,
        #[arg(allow_negative_numbers = true)]
        delta: i32,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    dotenvy::dotenv().ok();
    init_logging();

    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!(backend = %config.backend_url, "Starting Eco-Tracker client");

    let (notifier, mut notifications) = notify::channel();
    let state = AppState::new(config, notifier).context("Failed to build client")?;

    run(&state, cli.command).await;
    print_notifications(&mut notifications);
    Ok(())
}

async fn run(state: &AppState, command: Command) {
    match command {
        Command::Challenges => {
            let mut view = ChallengesView::new();
            view.load(state).await;
            print!("{view}");
        }
        Command::Running => {
            let mut view = RunningChallengesView::new();
            view.load(state).await;
            print!("{view}");
        }
        Command::Created => {
            let mut view = MyCreatedChallengesView::new();
            view.load(state).await;
            print!("{view}");
        }
        Command::MyChallenges => {
            let mut view = MyChallengesView::new();
            view.load(state).await;
            print!("{view}");
        }
        Command::Challenge { id } => {
            let mut view = ChallengeDetailView::new(&id);
            view.load(state).await;
            print!("{view}");
        }
        Command::Filter { categories } => {
            let filter = ChallengeFilter::default().with_categories(&categories.join(","));
            let mut view = ChallengeFilterView::new(filter);
            view.load(state).await;
            print!("{view}");
        }
        Command::Tips => {
            let mut view = TipsView::new();
            view.load(state).await;
            print!("{view}");
        }
        Command::RecentTips => {
            let mut view = RecentTipsView::new();
            view.load(state).await;
            print!("{view}");
        }
        Command::MyTips => {
            let mut view = MyTipsView::new();
            view.load(state).await;
            print!("{view}");
        }
        Command::Events => {
            let mut view = EventsView::new(EventScope::All);
            view.load(state).await;
            print!("{view}");
        }
        Command::Upcoming => {
            let mut view = EventsView::new(EventScope::Upcoming);
            view.load(state).await;
            print!("{view}");
        }
        Command::Stats => {
            let mut view = StatsView::new();
            view.load(state).await;
            print!("{view}");
        }
        Command::Join { id } => {
            let view = ChallengeDetailView::new(&id);
            let outcome = view.join(state).await;
            tracing::debug!(?outcome, "Join finished");
        }
        Command::Upvote { tip_id } => {
            let mut view = TipsView::new();
            view.load(state).await;
            let outcome = view.upvote(state, &tip_id).await;
            tracing::debug!(?outcome, "Upvote finished");
            print!("{view}");
        }
        Command::CompleteStep { id, step } => {
            let mut view = MyChallengesView::new();
            view.load(state).await;
            let outcome = view.complete_step(state, &id, step).await;
            tracing::debug!(?outcome, "Step completion finished");
            print!("{view}");
        }
        Command::Progress { id, delta } => {
            let mut view = MyChallengesView::new();
            view.load(state).await;
            let outcome = view.add_progress(state, &id, delta).await;
            tracing::debug!(?outcome, "Progress update finished");
            print!("{view}");
        }
    }
}

fn print_notifications(notifications: &mut Notifications) {
    for n in notifications.drain() {
        match n.kind {
            NotificationKind::Success => eprintln!("✓ {}", n.message),
            NotificationKind::Error => eprintln!("✗ {}", n.message),
        }
    }
}

/// Initialize logging: structured JSON by default, human-readable when
/// `ECO_LOG_FORMAT=pretty`.
fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn,eco_tracker=debug"));

    let pretty = std::env::var("ECO_LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("pretty"));

    let registry = tracing_subscriber::registry().with(filter);
    if pretty {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(false)
                    .with_current_span(true)
                    .flatten_event(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}
