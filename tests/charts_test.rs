use chrono::{Duration, Utc};
use reqwest::Client;
use serde_json::json;

mod common;
use common::utils::{create_test_user_and_login, spawn_app};

#[tokio::test]
async fn chart_endpoints_return_empty_object_without_a_session() {
    let test_app = spawn_app().await;
    let client = Client::new();

    for path in ["/api/workout_data", "/api/calorie_data"] {
        let response = client
            .get(&format!("{}{}", &test_app.address, path))
            .send()
            .await
            .expect("Failed to execute request.");

        assert!(response.status().is_success());
        let body: serde_json::Value = response.json().await.expect("Cannot parse response.");
        assert_eq!(body, json!({}));
    }
}

#[tokio::test]
async fn chart_endpoints_return_empty_object_for_invalid_token() {
    let test_app = spawn_app().await;
    let client = Client::new();

    let response = client
        .get(&format!("{}/api/calorie_data", &test_app.address))
        .header("Authorization", "Bearer not-a-jwt")
        .send()
        .await
        .expect("Failed to execute request.");

    assert!(response.status().is_success());
    let body: serde_json::Value = response.json().await.expect("Cannot parse response.");
    assert_eq!(body, json!({}));
}

#[tokio::test]
async fn workout_chart_serves_dense_duration_series() {
    let test_app = spawn_app().await;
    let client = Client::new();
    let (_, token) = create_test_user_and_login(&test_app.address).await;

    let today = Utc::now().date_naive();
    client
        .post(&format!("{}/workouts", &test_app.address))
        .bearer_auth(&token)
        .json(&json!({
            "date": today,
            "exercise_type": "running",
            "duration_minutes": 30
        }))
        .send()
        .await
        .expect("Failed to execute request.");
    client
        .post(&format!("{}/workouts", &test_app.address))
        .bearer_auth(&token)
        .json(&json!({
            "date": today - Duration::days(2),
            "exercise_type": "cycling",
            "duration_minutes": 15
        }))
        .send()
        .await
        .expect("Failed to execute request.");

    let chart: serde_json::Value = client
        .get(&format!("{}/api/workout_data", &test_app.address))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to execute request.")
        .json()
        .await
        .expect("Cannot parse response.");

    assert_eq!(chart["dates"].as_array().unwrap().len(), 7);
    assert_eq!(chart["durations"], json!([0, 0, 0, 0, 15, 0, 30]));
}

#[tokio::test]
async fn calorie_chart_serves_burned_and_consumed_series() {
    let test_app = spawn_app().await;
    let client = Client::new();
    let (_, token) = create_test_user_and_login(&test_app.address).await;

    let today = Utc::now().date_naive();
    client
        .post(&format!("{}/workouts", &test_app.address))
        .bearer_auth(&token)
        .json(&json!({
            "date": today,
            "exercise_type": "running",
            "duration_minutes": 30
        }))
        .send()
        .await
        .expect("Failed to execute request.");
    client
        .post(&format!("{}/meals", &test_app.address))
        .bearer_auth(&token)
        .json(&json!({
            "date": today - Duration::days(6),
            "meal_type": "breakfast",
            "food_item": "granola",
            "calories": 500
        }))
        .send()
        .await
        .expect("Failed to execute request.");

    let chart: serde_json::Value = client
        .get(&format!("{}/api/calorie_data", &test_app.address))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to execute request.")
        .json()
        .await
        .expect("Cannot parse response.");

    let dates = chart["dates"].as_array().unwrap();
    assert_eq!(dates.len(), 7);
    assert_eq!(chart["burned"], json!([0, 0, 0, 0, 0, 0, 210]));
    assert_eq!(chart["consumed"], json!([500, 0, 0, 0, 0, 0, 0]));
}
