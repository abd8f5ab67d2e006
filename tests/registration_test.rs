use reqwest::Client;
use serde_json::json;
use uuid::Uuid;

mod common;
use common::utils::spawn_app;

#[tokio::test]
async fn register_user_returns_200_for_valid_form() {
    let test_app = spawn_app().await;
    let client = Client::new();

    let response = client
        .post(&format!("{}/register_user", &test_app.address))
        .json(&json!({
            "username": format!("user{}", Uuid::new_v4()),
            "password": "password123",
            "name": "Alex"
        }))
        .send()
        .await
        .expect("Failed to execute request.");

    assert!(response.status().is_success());
}

#[tokio::test]
async fn register_user_stores_a_password_hash_not_the_password() {
    let test_app = spawn_app().await;
    let client = Client::new();
    let username = format!("user{}", Uuid::new_v4());

    client
        .post(&format!("{}/register_user", &test_app.address))
        .json(&json!({
            "username": username,
            "password": "password123",
            "name": "Alex"
        }))
        .send()
        .await
        .expect("Failed to execute request.");

    let stored_hash =
        sqlx::query_scalar::<_, String>("SELECT password_hash FROM users WHERE username = ?1")
            .bind(&username)
            .fetch_one(&test_app.db_pool)
            .await
            .expect("Failed to fetch stored user.");

    assert_ne!(stored_hash, "password123");
}

#[tokio::test]
async fn duplicate_username_is_rejected_with_409() {
    let test_app = spawn_app().await;
    let client = Client::new();
    let username = format!("user{}", Uuid::new_v4());

    let form = json!({
        "username": username,
        "password": "password123",
        "name": "Alex"
    });

    let first = client
        .post(&format!("{}/register_user", &test_app.address))
        .json(&form)
        .send()
        .await
        .expect("Failed to execute request.");
    assert!(first.status().is_success());

    let second = client
        .post(&format!("{}/register_user", &test_app.address))
        .json(&form)
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(second.status().as_u16(), 409);
}
