pub mod matchmaker;

pub use matchmaker::{Matchmaker, QueueSettings};
