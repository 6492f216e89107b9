//! Seed normalization.

use super::models::{Participant, Seed};

/// Fill in missing seeds and order participants by seed.
///
/// A participant without a seed receives its 1-based input position. The
/// result is sorted ascending by seed; the sort is stable, so participants
/// sharing a seed keep their input order. The input slice is left untouched.
///
/// # Example
///
/// ```
/// use elimination_bracket::bracket::{Participant, normalize_participants};
///
/// let normalized = normalize_participants(&[
///     Participant::new("athlete-1").with_seed(5),
///     Participant::new("athlete-2"),
///     Participant::new("athlete-3").with_seed(2),
/// ]);
///
/// // athlete-2 is filled with seed 2 and ties with athlete-3
/// let ids: Vec<_> = normalized.iter().map(|p| p.id.as_str()).collect();
/// assert_eq!(ids, ["athlete-2", "athlete-3", "athlete-1"]);
/// assert_eq!(normalized[2].seed, Some(5));
/// ```
pub fn normalize_participants(participants: &[Participant]) -> Vec<Participant> {
    let mut normalized: Vec<Participant> = participants
        .iter()
        .enumerate()
        .map(|(index, participant)| Participant {
            seed: Some(participant.seed.unwrap_or_else(|| positional_seed(index))),
            ..participant.clone()
        })
        .collect();

    // Vec::sort_by_key is stable
    normalized.sort_by_key(|participant| participant.seed);
    normalized
}

fn positional_seed(index: usize) -> Seed {
    Seed::try_from(index + 1).unwrap_or(Seed::MAX)
}
