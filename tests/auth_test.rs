use reqwest::Client;
use serde_json::json;
use uuid::Uuid;

mod common;
use common::utils::{create_test_user_and_login, spawn_app};

#[tokio::test]
async fn login_returns_a_token_for_valid_credentials() {
    let test_app = spawn_app().await;
    let (_, token) = create_test_user_and_login(&test_app.address).await;

    assert!(!token.is_empty());
}

#[tokio::test]
async fn login_with_wrong_password_returns_401() {
    let test_app = spawn_app().await;
    let client = Client::new();
    let (username, _) = create_test_user_and_login(&test_app.address).await;

    let response = client
        .post(&format!("{}/login", &test_app.address))
        .json(&json!({
            "username": username,
            "password": "not-the-password"
        }))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(response.status().as_u16(), 401);
}

#[tokio::test]
async fn login_with_unknown_user_returns_401() {
    let test_app = spawn_app().await;
    let client = Client::new();

    let response = client
        .post(&format!("{}/login", &test_app.address))
        .json(&json!({
            "username": format!("ghost{}", Uuid::new_v4()),
            "password": "password123"
        }))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(response.status().as_u16(), 401);
}

#[tokio::test]
async fn protected_routes_reject_missing_token() {
    let test_app = spawn_app().await;
    let client = Client::new();

    let response = client
        .get(&format!("{}/dashboard", &test_app.address))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(response.status().as_u16(), 401);
}

#[tokio::test]
async fn protected_routes_reject_garbage_token() {
    let test_app = spawn_app().await;
    let client = Client::new();

    let response = client
        .get(&format!("{}/dashboard", &test_app.address))
        .header("Authorization", "Bearer not-a-jwt")
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(response.status().as_u16(), 401);
}
