use serde::{Deserialize, Serialize};

use crate::domain::ports::{MatchOutcome, SearchRequest};

// Body accepted by the bundled in-memory search. Unknown fields (a client's
// skill rating, say) are ignored so a richer engine can widen this later.
#[derive(Debug, Deserialize)]
pub struct SearchMatchRequest {
    pub player_id: String,
    pub region: String,
}

impl From<SearchMatchRequest> for SearchRequest {
    fn from(request: SearchMatchRequest) -> Self {
        Self {
            player_id: request.player_id,
            region: request.region,
        }
    }
}

// Search result, tagged by `status` so each variant only carries its own ids:
// `{"status":"waiting","ticket_id":..,"region":..}` or
// `{"status":"matched","match_id":..,"opponent_id":..,"region":..}`.
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SearchMatchResponse {
    Waiting {
        ticket_id: String,
        region: String,
    },
    Matched {
        match_id: String,
        opponent_id: String,
        region: String,
    },
}

impl From<MatchOutcome> for SearchMatchResponse {
    fn from(outcome: MatchOutcome) -> Self {
        match outcome {
            MatchOutcome::Waiting { ticket_id, region } => Self::Waiting { ticket_id, region },
            MatchOutcome::Matched {
                match_id,
                opponent_id,
                region,
            } => Self::Matched {
                match_id,
                opponent_id,
                region,
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
}
