mod clock;
mod menu;
mod nav;
mod queue;

use crux_core::Command;

use crate::events::Event;
use crate::model::Model;
use crate::Effect;

/// Main update dispatcher - routes events to domain-specific handlers
///
/// This is the single ordered delivery point for every event raised in the
/// component tree; events are consumed exactly once, in raise order.
pub fn update(event: Event, model: &mut Model) -> Command<Effect, Event> {
    match event {
        // Startup
        Event::Initialize { url } => nav::initialize(&url, model),

        // Navigation domain
        Event::Nav(event) => nav::handle(event, model),

        // Court queue domain
        Event::Queue(event) => queue::handle(event, model),

        // Navigation menu domain
        Event::Menu(event) => menu::handle(event, model),

        // Court clock domain
        Event::Clock(event) => clock::handle(event, model),
    }
}
