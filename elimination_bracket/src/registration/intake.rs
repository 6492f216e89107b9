//! Turning registrations into a bracket field.

use super::models::Registration;
use crate::bracket::Participant;

/// Participants for an event, taken from its confirmed registrations.
///
/// Registration order is preserved and no seeds are assigned, so the seed
/// normalizer ranks athletes by the order they registered in.
pub fn confirmed_participants(registrations: &[Registration], event_id: &str) -> Vec<Participant> {
    let participants: Vec<Participant> = registrations
        .iter()
        .filter(|registration| registration.event_id == event_id && registration.is_confirmed())
        .map(|registration| Participant::new(registration.athlete_id.clone()))
        .collect();

    log::debug!(
        "{} of {} registration(s) confirmed for event {}",
        participants.len(),
        registrations.len(),
        event_id
    );

    participants
}
