mod support;

use reqwest::{Method, StatusCode};
use serde_json::{Value, json};

const ALLOW_ORIGIN: &str = "access-control-allow-origin";

#[tokio::test]
async fn when_get_root_from_allowed_origin_then_greeting_carries_allow_origin() {
    let base_url = support::ensure_server();
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{base_url}/"))
        .header("origin", "http://localhost:3000")
        .send()
        .await
        .expect("request should succeed");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[ALLOW_ORIGIN],
        "http://localhost:3000"
    );
    assert_eq!(
        response.headers()["access-control-allow-credentials"],
        "true"
    );
    let body = response.text().await.expect("body should be text");
    assert_eq!(body, "Hello from matchmaking!");
}

#[tokio::test]
async fn when_preflight_search_from_deployed_frontend_then_returns_204() {
    let base_url = support::ensure_server();
    let client = reqwest::Client::new();

    let response = client
        .request(Method::OPTIONS, format!("{base_url}/search"))
        .header("origin", "https://coderoyale.vercel.app")
        .header("access-control-request-method", "POST")
        .send()
        .await
        .expect("request should succeed");

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert_eq!(
        response.headers()[ALLOW_ORIGIN],
        "https://coderoyale.vercel.app"
    );
    assert_eq!(
        response.headers()["access-control-allow-methods"],
        "POST, GET, OPTIONS, PUT, DELETE, PATCH"
    );
    let body = response.bytes().await.expect("body should be readable");
    assert!(body.is_empty());
}

#[tokio::test]
async fn when_search_from_unlisted_origin_then_it_is_served_without_allow_origin() {
    let base_url = support::ensure_server();
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{base_url}/search"))
        .header("origin", "https://not-allowed.com")
        .json(&json!({
            "player_id": format!("pilot-{}", uuid::Uuid::new_v4()),
            "player_skill": 900,
            "region": format!("region-{}", uuid::Uuid::new_v4()),
        }))
        .send()
        .await
        .expect("request should succeed");

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().get(ALLOW_ORIGIN).is_none());
    assert!(response.headers().get("access-control-allow-headers").is_some());

    let payload: Value = response.json().await.expect("body should be json");
    assert_eq!(payload["status"], "waiting");
}

#[tokio::test]
async fn when_two_players_search_the_same_region_then_second_is_matched() {
    let base_url = support::ensure_server();
    let client = reqwest::Client::new();
    let region = format!("region-{}", uuid::Uuid::new_v4());
    let first_player = format!("pilot-{}", uuid::Uuid::new_v4());

    let first: Value = client
        .post(format!("{base_url}/search"))
        .json(&json!({ "player_id": first_player, "player_skill": 1000, "region": region }))
        .send()
        .await
        .expect("request should succeed")
        .json()
        .await
        .expect("body should be json");
    assert_eq!(first["status"], "waiting");

    let second: Value = client
        .post(format!("{base_url}/search"))
        .json(&json!({
            "player_id": format!("pilot-{}", uuid::Uuid::new_v4()),
            "player_skill": 1100,
            "region": region,
        }))
        .send()
        .await
        .expect("request should succeed")
        .json()
        .await
        .expect("body should be json");
    assert_eq!(second["status"], "matched");
    assert_eq!(second["opponent_id"], first_player.as_str());
}

#[tokio::test]
async fn when_path_is_not_registered_then_returns_404() {
    let base_url = support::ensure_server();
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{base_url}/products"))
        .header("origin", "http://localhost:3000")
        .send()
        .await
        .expect("request should succeed");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(response.headers().get(ALLOW_ORIGIN).is_none());
}
