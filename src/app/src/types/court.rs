use serde::{Deserialize, Serialize};

use crate::commands::timer::TimerId;

/// Court roster: name, game length in minutes, squads initially waiting.
pub const COURTS: [(&str, u32, u32); 3] =
    [("Dreamville", 21, 4), ("The Cage", 10, 1), ("Rookie Run", 5, 0)];

/// Team affiliation of a player marker.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Team {
    Blue,
    Red,
}

/// Player marker on the court monitor, positioned in percent of court size.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerMarker {
    pub id: u8,
    pub name: String,
    pub x: u8,
    pub y: u8,
    pub team: Team,
}

/// Ball position in percent of court size.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BallPosition {
    pub x: u8,
    pub y: u8,
}

impl Default for BallPosition {
    fn default() -> Self {
        Self { x: 50, y: 50 }
    }
}

/// Live status of one court: the game countdown plus the entity layout.
///
/// The countdown is driven by a tick source the shell runs for us. `timer`
/// holds the handle of the currently live tick source; it is `None` whenever
/// the widget is unmounted, and a tick carrying any other handle must not
/// touch this state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CourtStatus {
    pub name: String,
    pub game_duration_seconds: u32,
    pub remaining_seconds: u32,
    pub players: Vec<PlayerMarker>,
    pub ball: BallPosition,
    #[serde(skip)]
    pub timer: Option<TimerId>,
}

impl CourtStatus {
    pub fn new(name: impl Into<String>, game_duration_seconds: u32) -> Self {
        Self {
            name: name.into(),
            game_duration_seconds,
            remaining_seconds: game_duration_seconds,
            players: default_players(),
            ball: BallPosition::default(),
            timer: None,
        }
    }

    /// Advance the countdown by one second, wrapping back to the configured
    /// game duration after it has run out.
    pub fn tick(&mut self) {
        self.remaining_seconds = if self.remaining_seconds > 0 {
            self.remaining_seconds - 1
        } else {
            self.game_duration_seconds
        };
    }

    /// Clock display in `m:ss` format.
    pub fn clock_label(&self) -> String {
        let minutes = self.remaining_seconds / 60;
        let seconds = self.remaining_seconds % 60;
        format!("{minutes}:{seconds:02}")
    }
}

/// Fixed five-player layout of the court monitor. Positions are static
/// configuration; only the clock advances on ticks.
fn default_players() -> Vec<PlayerMarker> {
    [
        (1, "P1", 50, 20, Team::Blue),
        (2, "P2", 30, 40, Team::Blue),
        (3, "P3", 70, 40, Team::Red),
        (4, "P4", 30, 70, Team::Red),
        (5, "P5", 70, 70, Team::Blue),
    ]
    .into_iter()
    .map(|(id, name, x, y, team)| PlayerMarker {
        id,
        name: name.to_string(),
        x,
        y,
        team,
    })
    .collect()
}
