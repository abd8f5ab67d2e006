use reqwest::Client;
use serde_json::json;

mod common;
use common::utils::{create_test_user_and_login, spawn_app};

#[tokio::test]
async fn profile_returns_registered_user_data() {
    let test_app = spawn_app().await;
    let client = Client::new();
    let (username, token) = create_test_user_and_login(&test_app.address).await;

    let profile: serde_json::Value = client
        .get(&format!("{}/profile", &test_app.address))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to execute request.")
        .json()
        .await
        .expect("Cannot parse response.");

    assert_eq!(profile["username"], username);
    assert_eq!(profile["name"], "Test User");
    assert_eq!(profile["weight"], serde_json::Value::Null);
    // The hash must never appear in API responses
    assert!(profile.get("password_hash").is_none());
}

#[tokio::test]
async fn update_profile_persists_all_fields() {
    let test_app = spawn_app().await;
    let client = Client::new();
    let (_, token) = create_test_user_and_login(&test_app.address).await;

    let updated: serde_json::Value = client
        .put(&format!("{}/profile", &test_app.address))
        .bearer_auth(&token)
        .json(&json!({
            "name": "Alex Runner",
            "age": 34,
            "gender": "female",
            "height": 171.0,
            "weight": 78.5,
            "goal_weight": 72.0,
            "daily_calorie_target": 2200
        }))
        .send()
        .await
        .expect("Failed to execute request.")
        .json()
        .await
        .expect("Cannot parse response.");

    assert_eq!(updated["name"], "Alex Runner");
    assert_eq!(updated["age"], 34);
    assert_eq!(updated["weight"], 78.5);
    assert_eq!(updated["daily_calorie_target"], 2200);

    // A fresh read sees the same state
    let profile: serde_json::Value = client
        .get(&format!("{}/profile", &test_app.address))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to execute request.")
        .json()
        .await
        .expect("Cannot parse response.");
    assert_eq!(profile["goal_weight"], 72.0);
}
