use crux_core::{render::render, Command};

use crate::events::{ClockEvent, Event};
use crate::model::Model;
use crate::{Effect, TimerCmd};

/// Tick interval of the court clocks.
pub const TICK_INTERVAL_MS: u64 = 1_000;

/// Handle court clock events
pub fn handle(event: ClockEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        ClockEvent::Tick { timer } => {
            // A tick whose source is no longer live mutates nothing.
            let Some(court) = model
                .courts
                .iter_mut()
                .find(|court| court.timer == Some(timer))
            else {
                return Command::done();
            };

            court.tick();
            render()
        }

        ClockEvent::Started { .. } | ClockEvent::Stopped { .. } => Command::done(),
    }
}

/// Start one tick source per court widget. Every mount allocates fresh
/// handles, so a tick raised by a previous incarnation can never reach the
/// new state.
pub fn mount_widgets(model: &mut Model) -> Vec<Command<Effect, Event>> {
    let mut commands = Vec::with_capacity(model.courts.len());
    for court in &mut model.courts {
        model.next_timer_id += 1;
        let id = model.next_timer_id;
        court.timer = Some(id);
        court.remaining_seconds = court.game_duration_seconds;
        commands.push(
            TimerCmd::start(id, TICK_INTERVAL_MS)
                .build()
                .then_send(move |_| Event::Clock(ClockEvent::Started { timer: id })),
        );
    }
    commands
}

/// Release every live tick source. The handles are forgotten immediately,
/// so a tick already in flight falls through to the no-op path in
/// [`handle`].
pub fn unmount_widgets(model: &mut Model) -> Vec<Command<Effect, Event>> {
    let mut commands = Vec::new();
    for court in &mut model.courts {
        if let Some(id) = court.timer.take() {
            commands.push(
                TimerCmd::cancel(id)
                    .build()
                    .then_send(move |_| Event::Clock(ClockEvent::Stopped { timer: id })),
            );
        }
    }
    commands
}
