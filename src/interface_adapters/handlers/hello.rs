// Liveness greeting.
pub async fn hello() -> &'static str {
    "Hello from matchmaking!"
}
