//! Event listings.

use super::{ListView, LoadState};
use crate::models::Event;
use crate::AppState;
use std::fmt;

const UPCOMING_SHOWN: usize = 5;

/// Which events a view lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EventScope {
    #[default]
    All,
    /// The next few upcoming events
    Upcoming,
}

#[derive(Debug, Default)]
pub struct EventsView {
    scope: EventScope,
    list: ListView<Event>,
}

impl EventsView {
    pub fn new(scope: EventScope) -> Self {
        Self {
            scope,
            list: ListView::default(),
        }
    }

    pub fn events(&self) -> &[Event] {
        self.list.items()
    }

    pub fn state(&self) -> &LoadState {
        self.list.state()
    }

    pub async fn load(&mut self, state: &AppState) {
        self.list.begin();
        let result = match self.scope {
            EventScope::All => state.api.list_events().await,
            EventScope::Upcoming => state.api.upcoming_events().await.map(|mut events| {
                events.truncate(UPCOMING_SHOWN);
                events
            }),
        };
        self.list.finish(result, "events", "Failed to fetch events");
    }
}

impl fmt::Display for EventsView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let heading = match self.scope {
            EventScope::All => "All Events",
            EventScope::Upcoming => "Upcoming Eco Events",
        };
        self.list
            .render(f, heading, "No events scheduled.", usize::MAX, |f, e| {
                writeln!(f, "  - {}", e)
            })
    }
}
