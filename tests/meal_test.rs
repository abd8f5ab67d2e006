use chrono::Utc;
use reqwest::Client;
use serde_json::json;

mod common;
use common::utils::{create_test_user_and_login, spawn_app};

#[tokio::test]
async fn add_meal_returns_the_stored_entry() {
    let test_app = spawn_app().await;
    let client = Client::new();
    let (_, token) = create_test_user_and_login(&test_app.address).await;

    let response = client
        .post(&format!("{}/meals", &test_app.address))
        .bearer_auth(&token)
        .json(&json!({
            "date": Utc::now().date_naive(),
            "meal_type": "lunch",
            "food_item": "lentil soup",
            "calories": 420
        }))
        .send()
        .await
        .expect("Failed to execute request.");

    assert!(response.status().is_success());
    let entry: serde_json::Value = response.json().await.expect("Cannot parse response.");
    assert_eq!(entry["food_item"], "lentil soup");
    assert_eq!(entry["calories"], 420);
    assert!(entry["id"].as_i64().is_some());
}

#[tokio::test]
async fn negative_calories_are_rejected_with_400() {
    let test_app = spawn_app().await;
    let client = Client::new();
    let (_, token) = create_test_user_and_login(&test_app.address).await;

    let response = client
        .post(&format!("{}/meals", &test_app.address))
        .bearer_auth(&token)
        .json(&json!({
            "date": Utc::now().date_naive(),
            "meal_type": "snack",
            "food_item": "mystery bar",
            "calories": -100
        }))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn delete_meal_removes_the_entry() {
    let test_app = spawn_app().await;
    let client = Client::new();
    let (_, token) = create_test_user_and_login(&test_app.address).await;

    let entry: serde_json::Value = client
        .post(&format!("{}/meals", &test_app.address))
        .bearer_auth(&token)
        .json(&json!({
            "date": Utc::now().date_naive(),
            "meal_type": "breakfast",
            "food_item": "oatmeal",
            "calories": 300
        }))
        .send()
        .await
        .expect("Failed to execute request.")
        .json()
        .await
        .expect("Cannot parse response.");
    let meal_id = entry["id"].as_i64().expect("Entry has no id.");

    let delete_response = client
        .delete(&format!("{}/meals/{}", &test_app.address, meal_id))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to execute request.");
    assert!(delete_response.status().is_success());

    let repeat = client
        .delete(&format!("{}/meals/{}", &test_app.address, meal_id))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(repeat.status().as_u16(), 404);
}
