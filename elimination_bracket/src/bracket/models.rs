//! Bracket data models for single-elimination first rounds.

use serde::{Deserialize, Serialize};

/// Round number of every match produced by the generator
pub const FIRST_ROUND: u32 = 1;

/// Prefix of synthetic bye slot ids (`bye-4`, `bye-7`, ...)
pub const BYE_ID_PREFIX: &str = "bye";

/// Prefix of generated match ids (`M1`, `M2`, ...)
pub const MATCH_ID_PREFIX: &str = "M";

/// Seed rank type. Lower is stronger.
pub type Seed = u32;

/// Competition participant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    /// Opaque unique identifier
    pub id: String,
    /// Seed rank (None until normalized)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<Seed>,
    /// Affiliation, carried through untouched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub club: Option<String>,
}

impl Participant {
    /// Create an unseeded participant
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            seed: None,
            club: None,
        }
    }

    /// Set an explicit seed
    pub fn with_seed(mut self, seed: Seed) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the club affiliation
    pub fn with_club(mut self, club: impl Into<String>) -> Self {
        self.club = Some(club.into());
        self
    }
}

/// One position of the padded bracket sequence.
///
/// Byes are tagged explicitly instead of being recognised by their id, so a
/// real participant whose id happens to start with `bye` is never mistaken
/// for a placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BracketSlot {
    /// A real participant
    Entrant(Participant),
    /// A synthetic placeholder
    Bye {
        /// Placeholder id (`bye-<position>`)
        id: String,
    },
}

impl BracketSlot {
    /// Create the placeholder for a 1-based position in the padded sequence
    pub fn bye_at(position: usize) -> Self {
        Self::Bye {
            id: format!("{BYE_ID_PREFIX}-{position}"),
        }
    }

    /// Slot id (participant id or placeholder id)
    pub fn id(&self) -> &str {
        match self {
            Self::Entrant(participant) => &participant.id,
            Self::Bye { id } => id,
        }
    }

    /// Whether this slot is a synthetic placeholder
    pub fn is_bye(&self) -> bool {
        matches!(self, Self::Bye { .. })
    }

    fn into_id(self) -> String {
        match self {
            Self::Entrant(participant) => participant.id,
            Self::Bye { id } => id,
        }
    }
}

impl From<Participant> for BracketSlot {
    fn from(participant: Participant) -> Self {
        Self::Entrant(participant)
    }
}

/// Round-one match record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BracketMatch {
    /// Match id (`M1`, `M2`, ... in pairing order)
    pub id: String,
    /// Round number (always [`FIRST_ROUND`])
    pub round: u32,
    /// Id occupying the red slot
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub red: Option<String>,
    /// Id occupying the blue slot (may be a bye placeholder)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blue: Option<String>,
    /// True when the blue slot is a placeholder or empty
    pub is_bye: bool,
    /// Whether the red slot was filled by a placeholder (only bye-vs-bye)
    #[serde(skip)]
    red_is_bye: bool,
}

impl BracketMatch {
    /// Build the `number`-th (1-based) first-round match from two slots
    pub fn first_round(number: usize, red: Option<BracketSlot>, blue: Option<BracketSlot>) -> Self {
        let is_bye = blue.as_ref().is_none_or(BracketSlot::is_bye);
        let red_is_bye = red.as_ref().is_some_and(BracketSlot::is_bye);

        Self {
            id: format!("{MATCH_ID_PREFIX}{number}"),
            round: FIRST_ROUND,
            red: red.map(BracketSlot::into_id),
            blue: blue.map(BracketSlot::into_id),
            is_bye,
            red_is_bye,
        }
    }

    /// Real participant ids occupying the match, red first.
    ///
    /// Placeholders are recognised by the slot kind the match was built
    /// from. A match read back from JSON carries no slot kinds, so its red
    /// slot is always reported as a participant.
    pub fn entrants(&self) -> Vec<&str> {
        let red = self.red.as_deref().filter(|_| !self.red_is_bye);
        let blue = self.blue.as_deref().filter(|_| !self.is_bye);
        red.into_iter().chain(blue).collect()
    }

    /// Whether the given id occupies either slot
    pub fn contains(&self, id: &str) -> bool {
        self.red.as_deref() == Some(id) || self.blue.as_deref() == Some(id)
    }
}
