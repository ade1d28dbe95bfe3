#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use auth::ManualClock;
use auth::TokenIssuer;
use auth::TokenVerifier;
use chrono::TimeZone;
use chrono::Utc;
use fut_service::domain::credential::service::AuthService;
use fut_service::inbound::http::router::create_router;
use fut_service::outbound::football::FootballDataClient;
use fut_service::outbound::repositories::InMemoryCredentialStore;
use wiremock::MockServer;

pub const JWT_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";
pub const TOKEN_LIFETIME_MINUTES: i64 = 60;

/// Test application that spawns a real server
///
/// Backed by the in-memory store and a fake sports-data upstream. Issuer and
/// verifier share `clock`, so advancing it ages every token.
pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub api_client: reqwest::Client,
    pub clock: Arc<ManualClock>,
    pub upstream: MockServer,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        let upstream = MockServer::start().await;

        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let clock = Arc::new(ManualClock::new(
            Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap(),
        ));

        let token_issuer = TokenIssuer::new(
            JWT_SECRET,
            chrono::Duration::minutes(TOKEN_LIFETIME_MINUTES),
        )
        .with_clock(clock.clone());
        let token_verifier = Arc::new(TokenVerifier::new(JWT_SECRET).with_clock(clock.clone()));

        let auth_service = Arc::new(AuthService::new(
            Arc::new(InMemoryCredentialStore::new()),
            token_issuer,
        ));

        let football_client = Arc::new(
            FootballDataClient::new(&upstream.uri(), Some("upstream-token"), Duration::from_secs(5))
                .expect("Failed to create football client"),
        );

        let router = create_router(auth_service, token_verifier, football_client);

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            port,
            api_client: reqwest::Client::new(),
            clock,
            upstream,
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Helper to make GET request with Bearer token
    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path).bearer_auth(token)
    }

    /// Create credentials and log in, returning the token
    pub async fn signup_and_login(&self, user: &str, password: &str) -> String {
        let body = serde_json::json!({ "user": user, "password": password });

        let response = self
            .post("/auth/create")
            .json(&body)
            .send()
            .await
            .expect("Failed to execute request");
        assert!(response.status().is_success(), "signup failed");

        self.post("/auth/login")
            .json(&body)
            .send()
            .await
            .expect("Failed to execute request")
            .json::<String>()
            .await
            .expect("Failed to parse token")
    }
}
