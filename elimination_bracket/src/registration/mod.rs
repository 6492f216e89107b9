//! Registration intake.
//!
//! Hosting layers seed brackets from confirmed registrations only. Payment
//! handling and persistence live outside this crate.

pub mod intake;
pub mod models;

pub use intake::confirmed_participants;
pub use models::{Registration, RegistrationStatus};
