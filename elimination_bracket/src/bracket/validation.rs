//! Optional input checks for the hosting layer.

use super::errors::{BracketError, BracketResult};
use super::models::Participant;
use std::collections::HashSet;

/// Reject blank ids, duplicate ids and zero seeds.
///
/// Participants are checked in input order and the first offence wins.
pub fn validate_participants(participants: &[Participant]) -> BracketResult<()> {
    let mut seen = HashSet::with_capacity(participants.len());

    for (position, participant) in participants.iter().enumerate() {
        if participant.id.trim().is_empty() {
            return Err(BracketError::EmptyId { position });
        }

        if !seen.insert(participant.id.as_str()) {
            return Err(BracketError::DuplicateId(participant.id.clone()));
        }

        if participant.seed == Some(0) {
            return Err(BracketError::ZeroSeed(participant.id.clone()));
        }
    }

    Ok(())
}

/// Reject fields larger than `max`
pub fn validate_field_size(count: usize, max: usize) -> BracketResult<()> {
    if count > max {
        return Err(BracketError::TooManyParticipants { max, actual: count });
    }

    Ok(())
}
