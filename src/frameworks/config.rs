use std::{env, net::SocketAddr};

// Runtime/server constants.

// Frontends allowed to read credentialed cross-origin responses.
pub const ALLOWED_ORIGINS: [&str; 3] = [
    "http://localhost:3000",
    "https://serene-fortress-91389-77d1fb95872a.herokuapp.com",
    "https://coderoyale.vercel.app",
];

pub fn http_port() -> u16 {
    env::var("PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(8080)
}

pub fn bind_address() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], http_port()))
}

// Upper bound on players waiting in the default matchmaker.
pub fn match_queue_capacity() -> usize {
    env::var("MATCH_QUEUE_CAPACITY")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(1024)
}

// Seconds a waiting ticket survives without finding an opponent.
pub fn match_ticket_ttl_seconds() -> u64 {
    env::var("MATCH_TICKET_TTL_SECS")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(120)
}
