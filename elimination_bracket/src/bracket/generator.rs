//! First-round bracket generation.
//!
//! Two pairing strategies are available once the field is padded:
//!
//! - [`PairingStrategy::Adjacent`] (default): the padded sequence is paired
//!   strictly by post-sort adjacency (seed 1 meets seed 2, seed 3 meets
//!   seed 4). Byes land against the worst-ranked entrants and may be paired
//!   with each other.
//! - [`PairingStrategy::TopSeedByes`]: each bye goes to one of the
//!   best-seeded entrants, so every bye match holds exactly one real
//!   participant. The remaining entrants are paired by adjacency.
//!
//! Neither strategy cross-seeds (1 vs N, 2 vs N-1); that is a known
//! limitation of the bracket format.

use super::models::{BracketMatch, BracketSlot, Participant};
use super::seeding::normalize_participants;
use serde::{Deserialize, Serialize};

/// Smallest power of two that is at least `value`, and 1 for `value < 1`.
pub fn next_power_of_two(value: usize) -> usize {
    if value < 1 {
        return 1;
    }

    value.next_power_of_two()
}

/// Extend a normalized sequence with byes up to the next power of two.
///
/// Each bye is named after its 1-based position in the padded sequence.
pub fn pad_with_byes(normalized: Vec<Participant>) -> Vec<BracketSlot> {
    let bracket_size = next_power_of_two(normalized.len());
    let mut slots: Vec<BracketSlot> = Vec::with_capacity(bracket_size);
    slots.extend(normalized.into_iter().map(BracketSlot::Entrant));

    while slots.len() < bracket_size {
        slots.push(BracketSlot::bye_at(slots.len() + 1));
    }

    slots
}

/// How the padded sequence is split into first-round matches
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PairingStrategy {
    /// Strict adjacency over the padded sequence
    #[default]
    Adjacent,
    /// Byes go to the best seeds, the rest pair by adjacency
    TopSeedByes,
}

type SlotPair = (BracketSlot, Option<BracketSlot>);

/// Pair padded slots into first-round matches.
///
/// A trailing slot without a partner (the single-participant bracket) is
/// paired with an absent blue slot. Match ids follow pairing order.
pub fn pair_slots(slots: Vec<BracketSlot>, strategy: PairingStrategy) -> Vec<BracketMatch> {
    let pairs = match strategy {
        PairingStrategy::TopSeedByes => pair_byes_with_top_seeds(slots),
        PairingStrategy::Adjacent => pair_adjacent(slots.into_iter()),
    };

    pairs
        .into_iter()
        .enumerate()
        .map(|(index, (red, blue))| BracketMatch::first_round(index + 1, Some(red), blue))
        .collect()
}

fn pair_adjacent(mut slots: impl Iterator<Item = BracketSlot>) -> Vec<SlotPair> {
    let mut pairs = Vec::new();

    while let Some(red) = slots.next() {
        let blue = slots.next();
        pairs.push((red, blue));
    }

    pairs
}

fn pair_byes_with_top_seeds(slots: Vec<BracketSlot>) -> Vec<SlotPair> {
    let (byes, entrants): (Vec<_>, Vec<_>) = slots.into_iter().partition(BracketSlot::is_bye);
    let mut entrants = entrants.into_iter();

    // Padding never adds as many byes as there are entrants. Byes drive the
    // zip so no entrant is pulled and dropped once they run out.
    let mut pairs: Vec<SlotPair> = byes
        .into_iter()
        .zip(entrants.by_ref())
        .map(|(bye, entrant)| (entrant, Some(bye)))
        .collect();

    pairs.extend(pair_adjacent(entrants));
    pairs
}

/// Generate the first round of a single-elimination bracket.
///
/// Participants are normalized, padded with byes up to the next power of
/// two and paired by adjacency (`slot[2k]` against `slot[2k + 1]`). An empty
/// field produces no matches.
///
/// # Example
///
/// ```
/// use elimination_bracket::bracket::{Participant, generate_first_round};
///
/// let matches = generate_first_round(&[
///     Participant::new("athlete-1").with_seed(1),
///     Participant::new("athlete-2").with_seed(4),
///     Participant::new("athlete-3").with_seed(2),
/// ]);
///
/// assert_eq!(matches.len(), 2);
/// assert_eq!(matches[0].red.as_deref(), Some("athlete-1"));
/// assert_eq!(matches[0].blue.as_deref(), Some("athlete-3"));
/// assert_eq!(matches[1].red.as_deref(), Some("athlete-2"));
/// assert_eq!(matches[1].blue.as_deref(), Some("bye-4"));
/// assert!(matches[1].is_bye);
/// ```
pub fn generate_first_round(participants: &[Participant]) -> Vec<BracketMatch> {
    generate_first_round_with(participants, PairingStrategy::default())
}

/// Generate the first round with an explicit pairing strategy.
pub fn generate_first_round_with(
    participants: &[Participant],
    strategy: PairingStrategy,
) -> Vec<BracketMatch> {
    let normalized = normalize_participants(participants);

    if normalized.is_empty() {
        log::debug!("Empty field, no first-round matches generated");
        return Vec::new();
    }

    let field_size = normalized.len();
    let matches = pair_slots(pad_with_byes(normalized), strategy);

    log::debug!(
        "Generated {} first-round match(es) for {} participant(s), bracket size {}, {:?} pairing",
        matches.len(),
        field_size,
        next_power_of_two(field_size),
        strategy
    );

    matches
}

/// Shape of a generated first round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FirstRoundSummary {
    /// Number of slots in the padded bracket
    pub bracket_size: usize,
    /// Number of matches
    pub match_count: usize,
    /// Number of matches decided by a bye
    pub bye_count: usize,
}

impl FirstRoundSummary {
    /// Summarize a generated first round
    pub fn from_matches(matches: &[BracketMatch]) -> Self {
        let bracket_size = match matches {
            [] => 0,
            // A lone match without a blue slot is the one-slot bracket
            [only] if only.blue.is_none() => 1,
            _ => matches.len() * 2,
        };

        Self {
            bracket_size,
            match_count: matches.len(),
            bye_count: matches.iter().filter(|m| m.is_bye).count(),
        }
    }
}
