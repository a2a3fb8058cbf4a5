use crux_core::{render::render, Command};

use crate::events::{Event, QueueEvent};
use crate::model::Model;
use crate::Effect;

/// Handle court queue events
pub fn handle(event: QueueEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        QueueEvent::PlayerSignedUp { court, players } => {
            match model.court_queues.get_mut(&court) {
                Some(waiting) => {
                    // The form validates the squad size; here the delta is
                    // applied as-is.
                    *waiting = waiting.saturating_add(players);
                    render()
                }
                None => {
                    // The form only offers known courts; anything else is
                    // dropped, not an error.
                    log::debug!("signup for unknown court {court:?} ignored");
                    Command::done()
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model_with_queues(queues: &[(&str, u32)]) -> Model {
        Model {
            court_queues: queues
                .iter()
                .map(|(name, waiting)| (name.to_string(), *waiting))
                .collect(),
            ..Default::default()
        }
    }

    #[test]
    fn signup_adds_players_to_named_court() {
        let mut model = model_with_queues(&[("A", 2), ("B", 0)]);

        let _ = handle(
            QueueEvent::PlayerSignedUp {
                court: "A".to_string(),
                players: 3,
            },
            &mut model,
        );

        assert_eq!(model.court_queues["A"], 5);
        assert_eq!(model.court_queues["B"], 0);
    }

    #[test]
    fn signup_for_unknown_court_is_a_no_op() {
        let mut model = model_with_queues(&[("A", 2), ("B", 0)]);
        let before = model.court_queues.clone();

        let mut command = handle(
            QueueEvent::PlayerSignedUp {
                court: "Z".to_string(),
                players: 1,
            },
            &mut model,
        );

        assert_eq!(model.court_queues, before);
        assert!(command.effects().next().is_none());
    }
}
