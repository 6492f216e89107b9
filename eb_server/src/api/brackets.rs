//! Bracket generation API handlers.
//!
//! Accepts a participant field and returns its first-round matches.
//! Participants may be sent as bare id strings or as full objects:
//!
//! ```bash
//! curl -X POST http://localhost:6969/api/v1/brackets \
//!   -H "Content-Type: application/json" \
//!   -d '{"participants": ["athlete-1", {"id": "athlete-2", "seed": 1}, "athlete-3"]}'
//! ```

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use elimination_bracket::bracket::{
    BracketMatch, FirstRoundSummary, PairingStrategy, Participant, generate_first_round_with,
    validate_field_size, validate_participants,
};
use serde::{Deserialize, Serialize};
use std::time::Instant;

use super::{AppState, errors::ApiError, request_id::RequestId};
use crate::{logging, metrics};

/// One entry of the submitted field
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ParticipantInput {
    /// Bare participant id
    Id(String),
    /// Participant with optional seed and club
    Participant(Participant),
}

impl From<ParticipantInput> for Participant {
    fn from(input: ParticipantInput) -> Self {
        match input {
            ParticipantInput::Id(id) => Participant::new(id),
            ParticipantInput::Participant(participant) => participant,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateBracketRequest {
    pub participants: Vec<ParticipantInput>,
    /// Overrides the server's default pairing
    #[serde(default)]
    pub pairing: Option<PairingStrategy>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateBracketResponse {
    #[serde(flatten)]
    pub summary: FirstRoundSummary,
    pub pairing: PairingStrategy,
    pub matches: Vec<BracketMatch>,
}

/// Generate the first round of a single-elimination bracket.
///
/// # Response
///
/// Returns `200 OK` with the bracket shape and its matches:
/// ```json
/// {
///   "bracketSize": 4,
///   "matchCount": 2,
///   "byeCount": 1,
///   "pairing": "adjacent",
///   "matches": [
///     { "id": "M1", "round": 1, "red": "athlete-1", "blue": "athlete-2", "isBye": false },
///     { "id": "M2", "round": 1, "red": "athlete-3", "blue": "bye-4", "isBye": true }
///   ]
/// }
/// ```
///
/// `pairing` echoes the strategy used: the request's `pairing` field when
/// present, otherwise the server default.
///
/// # Errors
///
/// Every error carries an `{"error": "..."}` body.
///
/// - `400 Bad Request` when the body is not valid JSON
/// - `413 Payload Too Large` when the field exceeds the configured maximum
/// - `415 Unsupported Media Type` without a JSON content type
/// - `422 Unprocessable Entity` when the body does not describe a field
///   (a negative seed, say) or strict validation rejects it
pub async fn generate_bracket(
    State(state): State<AppState>,
    request_id: RequestId,
    payload: Result<Json<GenerateBracketRequest>, JsonRejection>,
) -> Result<Json<GenerateBracketResponse>, ApiError> {
    let Json(request) = payload.map_err(|e| reject(&request_id, e.into()))?;
    let participants: Vec<Participant> = request
        .participants
        .into_iter()
        .map(Participant::from)
        .collect();
    let pairing = request.pairing.unwrap_or(state.bracket.default_pairing);

    check_field(&state, &participants).map_err(|e| reject(&request_id, e))?;

    let started = Instant::now();
    let matches = generate_first_round_with(&participants, pairing);
    let summary = FirstRoundSummary::from_matches(&matches);

    logging::log_performance(
        "generate_first_round",
        started.elapsed().as_millis() as u64,
        Some(&format!("participants={}", participants.len())),
    );
    metrics::brackets_generated_total(&format!("{pairing:?}"));
    metrics::bracket_field_size(participants.len());
    metrics::bracket_byes(summary.bye_count);

    tracing::info!(
        request_id = %request_id.as_str(),
        participants = participants.len(),
        bracket_size = summary.bracket_size,
        byes = summary.bye_count,
        "Generated first round"
    );

    Ok(Json(GenerateBracketResponse {
        summary,
        pairing,
        matches,
    }))
}

fn reject(request_id: &RequestId, error: ApiError) -> ApiError {
    logging::log_rejection(request_id.as_str(), &error.to_string());
    metrics::bracket_rejections_total(error.reason());
    error
}

fn check_field(state: &AppState, participants: &[Participant]) -> Result<(), ApiError> {
    validate_field_size(participants.len(), state.bracket.max_participants)?;

    if state.bracket.strict_validation {
        validate_participants(participants)?;
    }

    Ok(())
}
