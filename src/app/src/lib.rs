pub mod commands;
pub mod events;
pub mod http_helpers;
pub mod macros;
pub mod model;
pub mod router;
pub mod types;
pub mod update;

#[cfg(test)]
mod tests;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

use crux_core::Command;

// Re-export core types
pub use crate::{
    commands::history::{HistoryOperation, HistoryOutput},
    commands::timer::{TimerId, TimerOperation, TimerOutput},
    commands::viewport::{ViewportOperation, ViewportOutput},
    events::Event,
    http_helpers::{
        build_url, extract_error_message, is_response_success, parse_json_response, BASE_URL,
    },
    model::{CourtView, Model, Page, ViewModel},
    router::{route_for, Route},
    types::*,
};
pub use crux_http::Result as HttpResult;

#[crux_macros::effect]
pub enum Effect {
    Render(crux_core::render::RenderOperation),
    Http(crux_http::protocol::HttpRequest),
    History(HistoryOperation),
    Timer(TimerOperation),
    Viewport(ViewportOperation),
}

pub type HistoryCmd = crate::commands::history::History<Effect, Event>;
pub type TimerCmd = crate::commands::timer::Timer<Effect, Event>;
pub type ViewportCmd = crate::commands::viewport::Viewport<Effect, Event>;
pub type HttpCmd = crux_http::command::Http<Effect, Event>;

/// The Core application
#[derive(Default)]
pub struct App;

impl crux_core::App for App {
    type Event = Event;
    type Model = Model;
    type ViewModel = ViewModel;
    type Effect = Effect;

    fn update(&self, event: Self::Event, model: &mut Self::Model) -> Command<Effect, Event> {
        update::update(event, model)
    }

    fn view(&self, model: &Self::Model) -> Self::ViewModel {
        ViewModel::from(model)
    }
}
