use std::sync::Arc;

use auth::FixedClock;
use auth::TokenCodec;
use auth::TokenConfig;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use chrono::Utc;
use identity_service::inbound::http::handlers::current_user::current_user;
use identity_service::inbound::http::handlers::issue_token::issue_token;
use identity_service::inbound::http::handlers::own_items::own_items;
use identity_service::inbound::http::handlers::register::register;
use identity_service::inbound::http::middleware::require_active_user;
use identity_service::inbound::http::state::AppState;
use identity_service::repositories::InMemoryUserRepository;
use serde_json::json;

pub const SECRET: &[u8] = b"integration_test_secret_at_least_32_bytes";

/// Test application serving the auth handlers on a random local port
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    pub repository: Arc<InMemoryUserRepository>,
    pub clock: Arc<FixedClock>,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let clock = Arc::new(FixedClock::new(Utc::now()));
        let config = TokenConfig::new(SECRET, "HS256", 30).expect("Invalid token config");
        let codec = Arc::new(TokenCodec::new(&config).with_clock(clock.clone()));
        let repository = Arc::new(InMemoryUserRepository::new());

        let state = AppState::new(codec, config.ttl(), Arc::clone(&repository));

        let protected_routes = Router::new()
            .route("/users/me", get(current_user))
            .route("/users/me/items", get(own_items))
            .route_layer(middleware::from_fn_with_state(
                state.clone(),
                require_active_user,
            ));

        let application = Router::new()
            .route("/token", post(issue_token))
            .route("/register", post(register))
            .merge(protected_routes)
            .with_state(state);

        tokio::spawn(async move {
            axum::serve(listener, application)
                .await
                .expect("Server failed");
        });

        Self {
            address,
            api_client: reqwest::Client::new(),
            repository,
            clock,
        }
    }

    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    pub async fn register(&self, username: &str, password: &str) -> reqwest::Response {
        self.post("/register")
            .json(&json!({
                "username": username,
                "password": password,
                "email": format!("{}@example.com", username),
                "full_name": "Neo"
            }))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn login(&self, username: &str, password: &str) -> reqwest::Response {
        self.post("/token")
            .form(&[("username", username), ("password", password)])
            .send()
            .await
            .expect("Failed to execute request")
    }

    /// Log in and return the access token, panicking on failure
    pub async fn access_token(&self, username: &str, password: &str) -> String {
        let body: serde_json::Value = self
            .login(username, password)
            .await
            .json()
            .await
            .expect("Failed to parse response");

        body["access_token"]
            .as_str()
            .expect("Missing access_token")
            .to_string()
    }

    pub async fn current_user(&self, token: &str) -> reqwest::Response {
        self.get("/users/me")
            .bearer_auth(token)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn own_items(&self, token: &str) -> reqwest::Response {
        self.get("/users/me/items")
            .bearer_auth(token)
            .send()
            .await
            .expect("Failed to execute request")
    }
}
