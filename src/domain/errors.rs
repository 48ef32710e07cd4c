// Domain-level errors for match search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    AlreadyQueued { player_id: String },
    QueueFull { capacity: usize },
}
