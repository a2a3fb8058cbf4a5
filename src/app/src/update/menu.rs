use crux_core::Command;
use log::warn;

use crate::events::{Event, MenuEvent};
use crate::http_helpers::{build_url, parse_json_response};
use crate::model::Model;
use crate::types::{MenuEntry, MenuPayload};
use crate::update_field;
use crate::{Effect, HttpCmd};

/// Site endpoint serving the navigation menu document.
pub const MENU_ENDPOINT: &str = "/api/menu.json";

/// Request the menu entries from the site API.
pub fn fetch() -> Command<Effect, Event> {
    HttpCmd::get(build_url(MENU_ENDPOINT))
        .build()
        .then_send(|result| {
            let entries = match result {
                Ok(mut response) => {
                    parse_json_response::<MenuPayload>("Menu fetch", &mut response)
                        .map(MenuPayload::into_entries)
                }
                Err(e) => Err(e.to_string()),
            };
            Event::Menu(MenuEvent::FetchResponse(entries))
        })
}

/// Handle menu events
pub fn handle(event: MenuEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        MenuEvent::Fetch => fetch(),

        MenuEvent::FetchResponse(Ok(entries)) if !entries.is_empty() => {
            update_field!(model.menu, entries)
        }

        // The site stays navigable without the endpoint: failures and empty
        // documents both fall back to the built-in entries.
        MenuEvent::FetchResponse(result) => {
            match result {
                Ok(_) => warn!("menu endpoint returned no entries, using built-in menu"),
                Err(e) => warn!("menu fetch failed ({e}), using built-in menu"),
            }
            update_field!(model.menu, MenuEntry::fallback_entries())
        }
    }
}
