//! Event registration data models.

use serde::{Deserialize, Serialize};

/// Registration state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegistrationStatus {
    /// Awaiting payment or approval
    Pending,
    /// Eligible for seeding
    Confirmed,
}

/// Athlete registration for one event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    /// Registration id
    pub id: String,
    /// Registered athlete, becomes the participant id
    pub athlete_id: String,
    /// Event the athlete registered for
    pub event_id: String,
    /// Current state
    pub status: RegistrationStatus,
}

impl Registration {
    /// Create a pending registration
    pub fn new(
        id: impl Into<String>,
        athlete_id: impl Into<String>,
        event_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            athlete_id: athlete_id.into(),
            event_id: event_id.into(),
            status: RegistrationStatus::Pending,
        }
    }

    /// Mark the registration as confirmed
    pub fn confirm(&mut self) {
        self.status = RegistrationStatus::Confirmed;
    }

    pub fn is_confirmed(&self) -> bool {
        self.status == RegistrationStatus::Confirmed
    }
}
