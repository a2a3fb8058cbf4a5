use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::commands::timer::TimerId;
use crate::router::Route;
use crate::types::*;

/// Application Model - the complete state
///
/// The model is the single writer for the route, the court queues and the
/// court clocks; every other component sees read-only snapshots through
/// [`ViewModel`] and communicates desired changes via events.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Model {
    /// Current route, recomputed on every navigation.
    pub route: Route,

    /// Squads waiting per court name.
    pub court_queues: BTreeMap<String, u32>,

    /// Live court status widgets (home page only).
    pub courts: Vec<CourtStatus>,

    /// Navigation menu entries; starts out as the built-in list and is
    /// replaced by the fetched one when the menu endpoint answers.
    pub menu: Vec<MenuEntry>,

    /// Tick-source handle allocator. Handles are never reused, so a tick
    /// from a released source can always be told apart from a live one.
    pub next_timer_id: TimerId,
}

impl Default for Model {
    fn default() -> Self {
        Self {
            route: Route::default(),
            court_queues: COURTS
                .iter()
                .map(|(name, _, waiting)| (name.to_string(), *waiting))
                .collect(),
            courts: COURTS
                .iter()
                .map(|(name, game_minutes, _)| CourtStatus::new(*name, game_minutes * 60))
                .collect(),
            menu: MenuEntry::fallback_entries(),
            next_timer_id: 0,
        }
    }
}

/// View description projected from the model: the always-present chrome
/// data plus exactly one primary page.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ViewModel {
    pub route: Route,
    pub menu: Vec<MenuEntry>,
    pub page: Page,
}

/// The primary page selected by the current route.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum Page {
    Home { courts: Vec<CourtView> },
    Schedule,
    Gallery,
    Join { courts: Vec<String> },
    NotFound,
}

/// One court status widget, ready for display.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct CourtView {
    pub name: String,
    pub squads_waiting: u32,
    pub clock: String,
    pub remaining_seconds: u32,
    pub players: Vec<PlayerMarker>,
    pub ball: BallPosition,
}

impl From<&Model> for ViewModel {
    fn from(model: &Model) -> Self {
        let page = match model.route {
            Route::Home => Page::Home {
                courts: model
                    .courts
                    .iter()
                    .map(|court| CourtView {
                        name: court.name.clone(),
                        squads_waiting: model
                            .court_queues
                            .get(&court.name)
                            .copied()
                            .unwrap_or(0),
                        clock: court.clock_label(),
                        remaining_seconds: court.remaining_seconds,
                        players: court.players.clone(),
                        ball: court.ball.clone(),
                    })
                    .collect(),
            },
            Route::Schedule => Page::Schedule,
            Route::Gallery => Page::Gallery,
            Route::Join => Page::Join {
                courts: model.court_queues.keys().cloned().collect(),
            },
            Route::NotFound => Page::NotFound,
        };

        Self {
            route: model.route,
            menu: model.menu.clone(),
            page,
        }
    }
}
