pub mod errors;
pub mod origin;
pub mod ports;
pub mod queue;
