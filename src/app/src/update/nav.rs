use crux_core::{render::render, Command};

use super::{clock, menu};
use crate::events::{Event, NavEvent};
use crate::model::Model;
use crate::router::{self, Route};
use crate::{Effect, HistoryCmd, ViewportCmd};

/// Derive the initial route and start the long-lived machinery: the
/// back/forward watch, the menu fetch, and the court clocks when the home
/// page is the entry point.
///
/// The back/forward watch lives for the whole page session; it is
/// registered exactly once, here.
pub fn initialize(url: &str, model: &mut Model) -> Command<Effect, Event> {
    model.route = router::route_for(url);

    let mut commands = vec![
        render(),
        HistoryCmd::watch()
            .build()
            .then_send(|_| Event::Nav(NavEvent::Watching)),
        menu::fetch(),
    ];

    if model.route == Route::Home {
        commands.extend(clock::mount_widgets(model));
    }

    Command::all(commands)
}

/// Handle navigation events
pub fn handle(event: NavEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        NavEvent::RouteChanged { route } => {
            let route = Route::from_name(&route);
            let mut commands = transition(route, model);

            // Unknown targets resolve to the not-found page with the URL
            // left untouched; every known target becomes a history entry.
            if route != Route::NotFound {
                commands.push(
                    HistoryCmd::push(route.canonical_url())
                        .build()
                        .then_send(|_| Event::Nav(NavEvent::Pushed)),
                );
            }
            commands.push(
                ViewportCmd::scroll_to_top()
                    .build()
                    .then_send(|_| Event::Nav(NavEvent::ScrolledTop)),
            );

            Command::all(commands)
        }

        // Back/forward landed on a URL we did not push just now; derive the
        // route again without creating another history entry.
        NavEvent::UrlChanged { url } => Command::all(transition(router::route_for(&url), model)),

        NavEvent::Pushed | NavEvent::Watching | NavEvent::ScrolledTop => Command::done(),
    }
}

/// Switch the current route, mounting or unmounting the court status
/// widgets as the home page comes and goes.
fn transition(route: Route, model: &mut Model) -> Vec<Command<Effect, Event>> {
    let was_home = model.route == Route::Home;
    model.route = route;
    let is_home = route == Route::Home;

    let mut commands = vec![render()];
    if was_home && !is_home {
        commands.extend(clock::unmount_widgets(model));
    } else if is_home && !was_home {
        commands.extend(clock::mount_widgets(model));
    }
    commands
}
