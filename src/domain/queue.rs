use uuid::Uuid;

// Ticket held by a player until an opponent from the same region arrives.
#[derive(Debug, Clone)]
pub struct WaitingPlayer {
    pub player_id: String,
    pub region: String,
    pub enqueued_at: u64,
}

impl WaitingPlayer {
    // A ticket lives for `ttl_seconds`; clocks stepping backwards never expire it early.
    pub fn is_expired(&self, now: u64, ttl_seconds: u64) -> bool {
        now.saturating_sub(self.enqueued_at) >= ttl_seconds
    }
}

pub fn build_ticket_id() -> String {
    format!("ticket-{}", Uuid::new_v4())
}

pub fn build_match_id() -> String {
    format!("match-{}", Uuid::new_v4())
}
