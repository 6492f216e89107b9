//! Single-elimination first-round bracket generation.
//!
//! This module provides:
//! - Seed normalization (missing seeds filled from input position)
//! - Padding of non-power-of-two fields with bye slots
//! - Pairing of the padded field into round-one matches
//! - Optional input validation for hosting layers
//!
//! Generation is pure and synchronous: no I/O, no shared state, and every
//! call is independent of the others.
//!
//! ## Example
//!
//! ```
//! use elimination_bracket::bracket::{FirstRoundSummary, Participant, generate_first_round};
//!
//! let field: Vec<_> = ["athlete-1", "athlete-2", "athlete-3", "athlete-4", "athlete-5"]
//!     .into_iter()
//!     .map(Participant::new)
//!     .collect();
//!
//! let matches = generate_first_round(&field);
//! let summary = FirstRoundSummary::from_matches(&matches);
//!
//! assert_eq!(summary.bracket_size, 8);
//! assert_eq!(summary.match_count, 4);
//! // p5 meets bye-6, bye-7 meets bye-8
//! assert_eq!(summary.bye_count, 2);
//! ```

pub mod errors;
pub mod generator;
pub mod models;
pub mod seeding;
pub mod validation;

pub use errors::{BracketError, BracketResult};
pub use generator::{
    FirstRoundSummary, PairingStrategy, generate_first_round, generate_first_round_with,
    next_power_of_two, pad_with_byes, pair_slots,
};
pub use models::{
    BYE_ID_PREFIX, BracketMatch, BracketSlot, FIRST_ROUND, MATCH_ID_PREFIX, Participant, Seed,
};
pub use seeding::normalize_participants;
pub use validation::{validate_field_size, validate_participants};
