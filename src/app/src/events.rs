use serde::{Deserialize, Serialize};

use crate::commands::timer::TimerId;
use crate::types::MenuEntry;

/// Events that can happen in the app
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum Event {
    /// Sent once by the Shell when the document loads; carries the URL
    /// snapshot the initial route is derived from.
    Initialize { url: String },

    // Navigation domain
    Nav(NavEvent),

    // Court queue domain
    Queue(QueueEvent),

    // Navigation menu domain
    Menu(MenuEvent),

    // Court clock domain
    Clock(ClockEvent),
}

/// Navigation events: in-app route changes and history synchronization
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum NavEvent {
    /// `route-changed` raised by a navigation component; `route` is the
    /// page name the component was configured with.
    RouteChanged { route: String },

    /// The user triggered a browser-level history transition
    /// (back/forward); `url` is the now-current URL.
    UrlChanged { url: String },

    // Shell acknowledgements (internal events)
    #[serde(skip)]
    Pushed,
    #[serde(skip)]
    Watching,
    #[serde(skip)]
    ScrolledTop,
}

/// Court queue events
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum QueueEvent {
    /// `player-signed-up` raised by the signup form.
    PlayerSignedUp { court: String, players: u32 },
}

/// Navigation menu events
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum MenuEvent {
    /// Request the menu entries from the site API.
    Fetch,

    // HTTP response (internal event, skipped from serialization)
    #[serde(skip)]
    FetchResponse(Result<Vec<MenuEntry>, String>),
}

/// Court clock events
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum ClockEvent {
    /// One second elapsed on the tick source `timer`. The Shell echoes the
    /// handle so ticks from a released source can be dropped.
    Tick { timer: TimerId },

    // Shell acknowledgements (internal events)
    #[serde(skip)]
    Started { timer: TimerId },
    #[serde(skip)]
    Stopped { timer: TimerId },
}
