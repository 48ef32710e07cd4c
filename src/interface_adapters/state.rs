use crate::domain::errors::MatchError;
use crate::domain::origin::AllowedOrigins;
use crate::domain::ports::{Clock, MatchOutcome, MatchSearch, SearchRequest};
use crate::use_cases::{Matchmaker, QueueSettings};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};
use tokio::sync::Mutex;

// Shared application state for the HTTP layer.
//
// Built once before serving and only read afterwards, so it is shared as
// `Arc<AppState>` without a lock.
pub struct AppState {
    pub allowed_origins: AllowedOrigins,
    // We use Arc<dyn Trait> to hold any search implementation.
    pub search: Arc<dyn MatchSearch>,
}

// Wall clock used to stamp and expire queue tickets.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_epoch_seconds(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs())
            .unwrap_or(0)
    }
}

// In-memory search adapter backed by the region matchmaker.
pub struct InMemoryMatchSearch<C = SystemClock> {
    clock: C,
    matchmaker: Mutex<Matchmaker>,
}

impl InMemoryMatchSearch {
    pub fn new(settings: QueueSettings) -> Self {
        Self::with_clock(settings, SystemClock)
    }
}

impl<C: Clock> InMemoryMatchSearch<C> {
    pub fn with_clock(settings: QueueSettings, clock: C) -> Self {
        Self {
            clock,
            matchmaker: Mutex::new(Matchmaker::new(settings)),
        }
    }
}

#[async_trait]
impl<C: Clock> MatchSearch for InMemoryMatchSearch<C> {
    async fn search(&self, request: SearchRequest) -> Result<MatchOutcome, MatchError> {
        let now = self.clock.now_epoch_seconds();
        let mut matchmaker = self.matchmaker.lock().await;
        matchmaker.enqueue(request, now)
    }
}
