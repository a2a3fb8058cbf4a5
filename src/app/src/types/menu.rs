use serde::{Deserialize, Serialize};

/// One navigation menu entry as served by `/api/menu.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MenuEntry {
    pub label: String,
    pub route: String,
    pub icon: String,
}

impl MenuEntry {
    fn new(label: &str, route: &str, icon: &str) -> Self {
        Self {
            label: label.to_string(),
            route: route.to_string(),
            icon: icon.to_string(),
        }
    }

    /// Built-in menu used whenever the menu endpoint is unreachable or
    /// returns garbage. The site must stay navigable without it.
    pub fn fallback_entries() -> Vec<MenuEntry> {
        vec![
            MenuEntry::new("Home", "home", "home"),
            MenuEntry::new("Schedule", "schedule", "event"),
            MenuEntry::new("Gallery", "gallery", "image:collections"),
            MenuEntry::new("Join", "join", "add"),
        ]
    }
}

/// Wire shape of the menu document. The endpoint historically served either
/// a bare entry list or an object wrapping it in `items`; accept both.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum MenuPayload {
    Wrapped { items: Vec<MenuEntry> },
    Bare(Vec<MenuEntry>),
}

impl MenuPayload {
    pub fn into_entries(self) -> Vec<MenuEntry> {
        match self {
            MenuPayload::Wrapped { items } => items,
            MenuPayload::Bare(entries) => entries,
        }
    }
}
