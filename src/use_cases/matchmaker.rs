use crate::domain::errors::MatchError;
use crate::domain::ports::{MatchOutcome, SearchRequest};
use crate::domain::queue::{WaitingPlayer, build_match_id, build_ticket_id};
use std::collections::VecDeque;

// Bounds for the waiting queue.
#[derive(Debug, Clone, Copy)]
pub struct QueueSettings {
    pub capacity: usize,
    pub ticket_ttl_seconds: u64,
}

impl Default for QueueSettings {
    fn default() -> Self {
        Self {
            capacity: 1024,
            ticket_ttl_seconds: 120,
        }
    }
}

// In-memory matchmaker that pairs players based on region.
//
// The queue is ordered by enqueue time, so expired tickets are always at the
// front. Removing a matched player from the middle keeps that order.
#[derive(Debug, Default)]
pub struct Matchmaker {
    settings: QueueSettings,
    queue: VecDeque<WaitingPlayer>,
}

impl Matchmaker {
    pub fn new(settings: QueueSettings) -> Self {
        Self {
            settings,
            queue: VecDeque::with_capacity(settings.capacity.min(1024)),
        }
    }

    // Number of players currently waiting.
    pub fn waiting(&self) -> usize {
        self.queue.len()
    }

    // Enqueue a player and attempt to find a match immediately.
    pub fn enqueue(&mut self, request: SearchRequest, now: u64) -> Result<MatchOutcome, MatchError> {
        self.expire(now);

        if self
            .queue
            .iter()
            .any(|player| player.player_id == request.player_id)
        {
            return Err(MatchError::AlreadyQueued {
                player_id: request.player_id,
            });
        }

        let opponent_index = self
            .queue
            .iter()
            .position(|player| player.region == request.region);

        if let Some(opponent) = opponent_index.and_then(|index| self.queue.remove(index)) {
            return Ok(MatchOutcome::Matched {
                match_id: build_match_id(),
                opponent_id: opponent.player_id,
                region: request.region,
            });
        }

        if self.queue.len() >= self.settings.capacity {
            return Err(MatchError::QueueFull {
                capacity: self.settings.capacity,
            });
        }

        self.queue.push_back(WaitingPlayer {
            player_id: request.player_id,
            region: request.region.clone(),
            enqueued_at: now,
        });

        Ok(MatchOutcome::Waiting {
            ticket_id: build_ticket_id(),
            region: request.region,
        })
    }

    // Drop tickets older than the configured lifetime.
    fn expire(&mut self, now: u64) {
        let ttl = self.settings.ticket_ttl_seconds;
        while self
            .queue
            .front()
            .is_some_and(|player| player.is_expired(now, ttl))
        {
            if let Some(expired) = self.queue.pop_front() {
                tracing::debug!(player_id = %expired.player_id, "ticket expired");
            }
        }
    }
}
