use async_trait::async_trait;

use crate::domain::errors::MatchError;

// Input accepted by a match search.
#[derive(Debug, Clone)]
pub struct SearchRequest {
    pub player_id: String,
    pub region: String,
}

// Outcome of a single search attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOutcome {
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

// Capability behind the `/search` route. Any ranking engine can sit here; the
// HTTP layer only forwards requests and renders outcomes.
#[async_trait]
pub trait MatchSearch: Send + Sync {
    async fn search(&self, request: SearchRequest) -> Result<MatchOutcome, MatchError>;
}

// Time source for ticket expiry.
pub trait Clock: Send + Sync {
    fn now_epoch_seconds(&self) -> u64;
}
