use reqwest::Client;
use serde_json::json;

mod common;
use common::utils::{create_test_user_and_login, spawn_app};

#[tokio::test]
async fn add_goal_defaults_to_not_completed() {
    let test_app = spawn_app().await;
    let client = Client::new();
    let (_, token) = create_test_user_and_login(&test_app.address).await;

    let response = client
        .post(&format!("{}/goals", &test_app.address))
        .bearer_auth(&token)
        .json(&json!({
            "goal_type": "weight",
            "target_value": 72.5,
            "target_date": "2026-12-01",
            "current_value": 80.0
        }))
        .send()
        .await
        .expect("Failed to execute request.");

    assert!(response.status().is_success());
    let goal: serde_json::Value = response.json().await.expect("Cannot parse response.");
    assert_eq!(goal["completed"], false);
    assert_eq!(goal["target_value"], 72.5);
}

#[tokio::test]
async fn update_goal_changes_only_progress_fields() {
    let test_app = spawn_app().await;
    let client = Client::new();
    let (_, token) = create_test_user_and_login(&test_app.address).await;

    let goal: serde_json::Value = client
        .post(&format!("{}/goals", &test_app.address))
        .bearer_auth(&token)
        .json(&json!({
            "goal_type": "weight",
            "target_value": 70.0,
            "target_date": "2026-10-01"
        }))
        .send()
        .await
        .expect("Failed to execute request.")
        .json()
        .await
        .expect("Cannot parse response.");
    let goal_id = goal["id"].as_i64().expect("Goal has no id.");

    let updated: serde_json::Value = client
        .put(&format!("{}/goals/{}", &test_app.address, goal_id))
        .bearer_auth(&token)
        .json(&json!({
            "current_value": 74.2,
            "completed": true
        }))
        .send()
        .await
        .expect("Failed to execute request.")
        .json()
        .await
        .expect("Cannot parse response.");

    assert_eq!(updated["current_value"], 74.2);
    assert_eq!(updated["completed"], true);
    // Immutable fields are untouched
    assert_eq!(updated["goal_type"], "weight");
    assert_eq!(updated["target_value"], 70.0);
    assert_eq!(updated["target_date"], "2026-10-01");
}

#[tokio::test]
async fn update_unknown_goal_returns_404() {
    let test_app = spawn_app().await;
    let client = Client::new();
    let (_, token) = create_test_user_and_login(&test_app.address).await;

    let response = client
        .put(&format!("{}/goals/9999", &test_app.address))
        .bearer_auth(&token)
        .json(&json!({
            "current_value": 1.0,
            "completed": false
        }))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn list_goals_returns_only_own_goals() {
    let test_app = spawn_app().await;
    let client = Client::new();
    let (_, token) = create_test_user_and_login(&test_app.address).await;
    let (_, other_token) = create_test_user_and_login(&test_app.address).await;

    for target in [70.0, 65.0] {
        let response = client
            .post(&format!("{}/goals", &test_app.address))
            .bearer_auth(&token)
            .json(&json!({
                "goal_type": "weight",
                "target_value": target,
                "target_date": "2026-09-01"
            }))
            .send()
            .await
            .expect("Failed to execute request.");
        assert!(response.status().is_success());
    }
    let response = client
        .post(&format!("{}/goals", &test_app.address))
        .bearer_auth(&other_token)
        .json(&json!({
            "goal_type": "steps",
            "target_value": 10000.0,
            "target_date": "2026-09-01"
        }))
        .send()
        .await
        .expect("Failed to execute request.");
    assert!(response.status().is_success());

    let listing: serde_json::Value = client
        .get(&format!("{}/goals", &test_app.address))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to execute request.")
        .json()
        .await
        .expect("Cannot parse response.");

    assert_eq!(listing["count"], 2);
}

#[tokio::test]
async fn delete_goal_removes_it_from_the_listing() {
    let test_app = spawn_app().await;
    let client = Client::new();
    let (_, token) = create_test_user_and_login(&test_app.address).await;

    let goal: serde_json::Value = client
        .post(&format!("{}/goals", &test_app.address))
        .bearer_auth(&token)
        .json(&json!({
            "goal_type": "weight",
            "target_value": 70.0,
            "target_date": "2026-10-01"
        }))
        .send()
        .await
        .expect("Failed to execute request.")
        .json()
        .await
        .expect("Cannot parse response.");
    let goal_id = goal["id"].as_i64().expect("Goal has no id.");

    let delete_response = client
        .delete(&format!("{}/goals/{}", &test_app.address, goal_id))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to execute request.");
    assert!(delete_response.status().is_success());

    let listing: serde_json::Value = client
        .get(&format!("{}/goals", &test_app.address))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to execute request.")
        .json()
        .await
        .expect("Cannot parse response.");
    assert_eq!(listing["count"], 0);
}
