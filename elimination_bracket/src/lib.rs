//! # Elimination Bracket
//!
//! First-round pairing for single-elimination tournaments.
//!
//! Given an unordered field of participants, optionally carrying seed ranks,
//! this library deterministically produces the round-one matches of a
//! single-elimination bracket. Fields that are not a power of two are padded
//! with bye slots.
//!
//! ## Pipeline
//!
//! - **Seed normalization**: missing seeds are filled from input position and
//!   the field is stably sorted by seed
//! - **Padding**: bye slots are appended up to the next power of two
//! - **Pairing**: the padded field is split into round-one matches
//!
//! ## Core Modules
//!
//! - [`bracket`]: Participants, matches, normalization, generation, validation
//! - [`registration`]: Building a field from confirmed event registrations
//!
//! ## Example
//!
//! ```
//! use elimination_bracket::{Participant, generate_first_round};
//!
//! let matches = generate_first_round(&[
//!     Participant::new("athlete-1").with_seed(1),
//!     Participant::new("athlete-2").with_seed(2),
//! ]);
//!
//! assert_eq!(matches.len(), 1);
//! assert!(!matches[0].is_bye);
//! ```

/// Bracket models, seeding and first-round generation.
pub mod bracket;
pub use bracket::{
    BracketError, BracketMatch, BracketResult, FirstRoundSummary, PairingStrategy, Participant,
    generate_first_round, generate_first_round_with, next_power_of_two, normalize_participants,
};

/// Registration intake for bracket fields.
pub mod registration;
