use super::*;
use crux_core::testing::AppTester;

use crate::events::{ClockEvent, MenuEvent, NavEvent, QueueEvent};

fn effects_of(command: &mut Command<Effect, Event>) -> Vec<Effect> {
    command.effects().collect()
}

fn history_pushes(effects: &[Effect]) -> Vec<String> {
    effects
        .iter()
        .filter_map(|effect| match effect {
            Effect::History(request) => match &request.operation {
                HistoryOperation::Push { url } => Some(url.clone()),
                HistoryOperation::Watch => None,
            },
            _ => None,
        })
        .collect()
}

fn timer_operations(effects: &[Effect]) -> Vec<TimerOperation> {
    effects
        .iter()
        .filter_map(|effect| match effect {
            Effect::Timer(request) => Some(request.operation.clone()),
            _ => None,
        })
        .collect()
}

#[test]
fn initial_route_is_derived_from_the_url_snapshot() {
    let mut model = Model::default();

    let mut command = update::update(
        Event::Initialize {
            url: "/?page=join".to_string(),
        },
        &mut model,
    );

    assert_eq!(model.route, Route::Join);

    let effects = effects_of(&mut command);
    // The back/forward watch is registered once, at startup
    assert!(effects.iter().any(|effect| matches!(
        effect,
        Effect::History(request) if request.operation == HistoryOperation::Watch
    )));
    // The menu is requested from the site API
    assert!(effects
        .iter()
        .any(|effect| matches!(effect, Effect::Http(_))));
    // Not on home: no court clock is running
    assert!(timer_operations(&effects).is_empty());
    assert!(model.courts.iter().all(|court| court.timer.is_none()));
}

#[test]
fn initialize_on_home_starts_one_clock_per_court() {
    let mut model = Model::default();

    let mut command = update::update(
        Event::Initialize {
            url: "/".to_string(),
        },
        &mut model,
    );

    assert_eq!(model.route, Route::Home);

    let starts = timer_operations(&effects_of(&mut command))
        .into_iter()
        .filter(|operation| matches!(operation, TimerOperation::Start { .. }))
        .count();
    assert_eq!(starts, model.courts.len());
    assert!(model.courts.iter().all(|court| court.timer.is_some()));
}

#[test]
fn navigation_pushes_the_canonical_url_and_scrolls_up() {
    let mut model = Model::default();
    let _ = update::update(
        Event::Initialize {
            url: "/".to_string(),
        },
        &mut model,
    );

    let mut command = update::update(
        Event::Nav(NavEvent::RouteChanged {
            route: "join".to_string(),
        }),
        &mut model,
    );

    assert_eq!(model.route, Route::Join);

    let effects = effects_of(&mut command);
    assert_eq!(history_pushes(&effects), ["/?page=join"]);
    assert!(effects
        .iter()
        .any(|effect| matches!(effect, Effect::Viewport(_))));
}

#[test]
fn external_history_change_resyncs_without_pushing() {
    let mut model = Model::default();
    let _ = update::update(
        Event::Initialize {
            url: "/".to_string(),
        },
        &mut model,
    );
    let _ = update::update(
        Event::Nav(NavEvent::RouteChanged {
            route: "join".to_string(),
        }),
        &mut model,
    );

    // The user presses back; the shell reports the now-current URL
    let mut command = update::update(
        Event::Nav(NavEvent::UrlChanged {
            url: "/".to_string(),
        }),
        &mut model,
    );

    assert_eq!(model.route, route_for("/"));

    let effects = effects_of(&mut command);
    assert!(
        !effects
            .iter()
            .any(|effect| matches!(effect, Effect::History(_))),
        "external history change must not create another history entry"
    );
}

#[test]
fn navigation_to_unknown_target_leaves_the_url_alone() {
    let mut model = Model::default();

    let mut command = update::update(
        Event::Nav(NavEvent::RouteChanged {
            route: "admin".to_string(),
        }),
        &mut model,
    );

    assert_eq!(model.route, Route::NotFound);
    assert!(history_pushes(&effects_of(&mut command)).is_empty());
}

#[test]
fn ticks_advance_the_clock_one_second_at_a_time() {
    let mut model = Model::default();
    let _ = update::update(
        Event::Initialize {
            url: "/".to_string(),
        },
        &mut model,
    );

    let timer = model.courts[0].timer.expect("mounted widget has a timer");
    let duration = model.courts[0].game_duration_seconds;

    for _ in 0..3 {
        let _ = update::update(Event::Clock(ClockEvent::Tick { timer }), &mut model);
    }

    assert_eq!(model.courts[0].remaining_seconds, duration - 3);
}

#[test]
fn leaving_home_releases_the_tick_sources() {
    let mut model = Model::default();
    let _ = update::update(
        Event::Initialize {
            url: "/".to_string(),
        },
        &mut model,
    );
    let live: Vec<_> = model
        .courts
        .iter()
        .filter_map(|court| court.timer)
        .collect();
    assert_eq!(live.len(), model.courts.len());

    let mut command = update::update(
        Event::Nav(NavEvent::RouteChanged {
            route: "schedule".to_string(),
        }),
        &mut model,
    );

    let cancels: Vec<_> = timer_operations(&effects_of(&mut command))
        .into_iter()
        .filter_map(|operation| match operation {
            TimerOperation::Cancel { id } => Some(id),
            TimerOperation::Start { .. } => None,
        })
        .collect();
    for id in &live {
        assert!(cancels.contains(id));
    }
    assert!(model.courts.iter().all(|court| court.timer.is_none()));

    // A tick still in flight from a released source mutates nothing
    let before = model.clone();
    let mut command = update::update(Event::Clock(ClockEvent::Tick { timer: live[0] }), &mut model);
    assert_eq!(model, before);
    assert!(command.effects().next().is_none());
}

#[test]
fn menu_failure_keeps_the_site_navigable() {
    let app = AppTester::<App>::default();
    let mut model = Model {
        menu: Vec::new(),
        ..Default::default()
    };

    let _ = app.update(
        Event::Menu(MenuEvent::FetchResponse(Err(
            "connection refused".to_string()
        ))),
        &mut model,
    );

    assert!(!model.menu.is_empty());
    let routes: Vec<_> = model.menu.iter().map(|entry| entry.route.as_str()).collect();
    for baseline in ["home", "schedule", "gallery", "join"] {
        assert!(routes.contains(&baseline));
    }
}

#[test]
fn signup_event_updates_the_court_queue() {
    let app = AppTester::<App>::default();
    let mut model = Model::default();
    let before = model.court_queues["Dreamville"];

    let _ = app.update(
        Event::Queue(QueueEvent::PlayerSignedUp {
            court: "Dreamville".to_string(),
            players: 2,
        }),
        &mut model,
    );

    assert_eq!(model.court_queues["Dreamville"], before + 2);
}

#[test]
fn view_selects_exactly_one_page_per_route() {
    let app = AppTester::<App>::default();
    let mut model = Model::default();

    model.route = Route::Home;
    assert!(matches!(app.view(&model).page, Page::Home { .. }));

    model.route = Route::Schedule;
    assert!(matches!(app.view(&model).page, Page::Schedule));

    model.route = Route::Join;
    let view = app.view(&model);
    assert!(matches!(&view.page, Page::Join { courts } if courts.len() == 3));

    model.route = Route::NotFound;
    assert!(matches!(app.view(&model).page, Page::NotFound));
}

#[test]
fn home_view_projects_queues_and_clocks() {
    let app = AppTester::<App>::default();
    let model = Model::default();

    let view = app.view(&model);
    let Page::Home { courts } = view.page else {
        panic!("expected the home page");
    };

    let dreamville = courts
        .iter()
        .find(|court| court.name == "Dreamville")
        .expect("Dreamville is on the home page");
    assert_eq!(dreamville.squads_waiting, 4);
    assert_eq!(dreamville.clock, "21:00");
    assert_eq!(dreamville.players.len(), 5);
}
