use once_cell::sync::Lazy;
use reqwest::Client;
use secrecy::ExposeSecret;
use serde_json::json;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use std::net::TcpListener;
use uuid::Uuid;

use fittrack_backend::config::settings::{get_config, get_jwt_settings, DatabaseSettings};
use fittrack_backend::run;
use fittrack_backend::telemetry::{get_subscriber, init_subscriber};

// Ensure that the `tracing` stack is only initialised once using `once_cell`
static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();

    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber);
    }
});

pub struct TestApp {
    pub address: String,
    pub db_pool: SqlitePool,
}

pub async fn spawn_app() -> TestApp {
    // The first time `initialize` is invoked the code in `TRACING` is executed.
    // All other invocations will instead skip execution.
    Lazy::force(&TRACING);

    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
    // Get port assigned by the OS
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    let mut configuration = get_config().expect("Failed to read configuration.");
    // Give every test its own throwaway database file
    let db_file = std::env::temp_dir().join(format!("fittrack-test-{}.db", Uuid::new_v4()));
    configuration.database.path = db_file.to_string_lossy().into_owned();
    configuration.database.db_url = None;

    let connection_pool = configure_db(&configuration.database).await;
    let jwt_settings = get_jwt_settings(&configuration);

    let server =
        run(listener, connection_pool.clone(), jwt_settings).expect("Failed to bind address");
    // Launch the server as a background task
    let _ = tokio::spawn(server);

    TestApp {
        address,
        db_pool: connection_pool,
    }
}

pub async fn configure_db(config: &DatabaseSettings) -> SqlitePool {
    let connection_pool = SqlitePoolOptions::new()
        .connect(config.connection_string().expose_secret())
        .await
        .expect("Failed to connect to SQLite.");

    sqlx::migrate!("./migrations")
        .run(&connection_pool)
        .await
        .expect("Failed to migrate the database");

    connection_pool
}

/// Register a fresh user and log in. Returns (username, bearer token).
pub async fn create_test_user_and_login(app_address: &str) -> (String, String) {
    let client = Client::new();
    let username = format!("user{}", Uuid::new_v4());
    let password = "password123";

    let register_response = client
        .post(&format!("{}/register_user", app_address))
        .json(&json!({
            "username": username,
            "password": password,
            "name": "Test User"
        }))
        .send()
        .await
        .expect("Failed to register user.");
    assert!(register_response.status().is_success());

    let login_response = client
        .post(&format!("{}/login", app_address))
        .json(&json!({
            "username": username,
            "password": password
        }))
        .send()
        .await
        .expect("Failed to log in.");
    assert!(login_response.status().is_success());

    let body: serde_json::Value = login_response
        .json()
        .await
        .expect("Failed to parse login response.");
    let token = body["token"]
        .as_str()
        .expect("Login response carries no token.")
        .to_string();

    (username, token)
}

pub async fn user_id_by_username(pool: &SqlitePool, username: &str) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT id FROM users WHERE username = ?1")
        .bind(username)
        .fetch_one(pool)
        .await
        .expect("Failed to look up test user id.")
}
