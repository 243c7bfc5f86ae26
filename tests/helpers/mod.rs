//! Shared test helpers for integration tests.
//!
//! Builds the real router over in-memory repositories and mints JWTs
//! directly, so tests exercise the full HTTP surface without Postgres.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

use campushub_api::extractors::auth::Claims;
use campushub_api::router::build_router;
use campushub_api::state::AppState;
use campushub_core::config::app::{CorsConfig, ServerConfig};
use campushub_core::config::auth::AuthConfig;
use campushub_core::config::logging::LoggingConfig;
use campushub_core::config::{AppConfig, DatabaseConfig};
use campushub_database::repositories::memory::{
    InMemoryEventStore, InMemoryGiveawayStore, InMemoryJobStore, InMemoryNotificationStore,
    InMemoryProductStore, InMemoryPurchaseStore, InMemoryReminderStore,
    InMemorySellerNotificationStore, InMemoryWishlistStore,
};
use campushub_entity::user::UserRole;
use campushub_service::{
    EventService, GiveawayService, MarketplaceService, NotificationService,
    SellerNotificationService,
};

pub const JWT_SECRET: &str = "integration-test-secret";

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    pub events: Arc<InMemoryEventStore>,
    pub reminders: Arc<InMemoryReminderStore>,
    pub notifications: Arc<InMemoryNotificationStore>,
    pub seller_inbox: Arc<InMemorySellerNotificationStore>,
    pub products: Arc<InMemoryProductStore>,
    pub purchases: Arc<InMemoryPurchaseStore>,
    pub wishlist: Arc<InMemoryWishlistStore>,
    pub jobs: Arc<InMemoryJobStore>,
    pub giveaways: Arc<InMemoryGiveawayStore>,
}

impl TestApp {
    /// Create a new test application over empty in-memory stores.
    pub fn new() -> Self {
        let events = Arc::new(InMemoryEventStore::new());
        let reminders = Arc::new(InMemoryReminderStore::new());
        let notifications = Arc::new(InMemoryNotificationStore::new());
        let seller_inbox = Arc::new(InMemorySellerNotificationStore::new());
        let products = Arc::new(InMemoryProductStore::new());
        let purchases = Arc::new(InMemoryPurchaseStore::new());
        let wishlist = Arc::new(InMemoryWishlistStore::new());
        let jobs = Arc::new(InMemoryJobStore::new());
        let giveaways = Arc::new(InMemoryGiveawayStore::new());

        let notification_service = Arc::new(NotificationService::new(
            notifications.clone(),
            reminders.clone(),
            events.clone(),
        ));
        let event_service = Arc::new(EventService::new(
            events.clone(),
            reminders.clone(),
            notification_service.clone(),
        ));
        let seller_notification_service =
            Arc::new(SellerNotificationService::new(seller_inbox.clone()));
        let marketplace_service = Arc::new(MarketplaceService::new(
            products.clone(),
            purchases.clone(),
            wishlist.clone(),
            jobs.clone(),
            seller_inbox.clone(),
        ));
        let giveaway_service = Arc::new(GiveawayService::new(
            giveaways.clone(),
            seller_inbox.clone(),
        ));

        let state = AppState {
            config: Arc::new(test_config()),
            event_service,
            notification_service,
            seller_notification_service,
            marketplace_service,
            giveaway_service,
        };

        Self {
            router: build_router(state),
            events,
            reminders,
            notifications,
            seller_inbox,
            products,
            purchases,
            wishlist,
            jobs,
            giveaways,
        }
    }

    /// Make an HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {}", token));
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }

    /// Create an event through the API as the given admin and return its id.
    pub async fn create_event(
        &self,
        admin_token: &str,
        title: &str,
        event_date: DateTime<Utc>,
    ) -> Uuid {
        let response = self
            .request(
                "POST",
                "/api/events",
                Some(serde_json::json!({
                    "title": title,
                    "description": "Bring a friend",
                    "event_type": "event",
                    "event_date": event_date.to_rfc3339(),
                    "location": "Main hall",
                })),
                Some(admin_token),
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Event creation failed: {:?}",
            response.body
        );
        response.id()
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}

impl TestResponse {
    /// The `data` field of the response envelope.
    pub fn data(&self) -> &Value {
        self.body.get("data").expect("No data in response")
    }

    /// The `data.id` field, parsed as a UUID.
    pub fn id(&self) -> Uuid {
        self.data()
            .get("id")
            .and_then(|v| v.as_str())
            .and_then(|s| s.parse().ok())
            .expect("No id in response data")
    }
}

/// Mint a signed token for the given identity.
pub fn token_for(user_id: Uuid, username: &str, role: UserRole) -> String {
    let claims = Claims {
        sub: user_id,
        username: username.to_string(),
        role,
        exp: (Utc::now() + Duration::hours(1)).timestamp(),
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(JWT_SECRET.as_bytes()),
    )
    .expect("Failed to sign test token")
}

pub fn admin_token(user_id: Uuid) -> String {
    token_for(user_id, "portal-admin", UserRole::Admin)
}

pub fn member_token(user_id: Uuid) -> String {
    token_for(user_id, "member", UserRole::Member)
}

fn test_config() -> AppConfig {
    AppConfig {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            shutdown_grace_seconds: 1,
            cors: CorsConfig::default(),
        },
        database: DatabaseConfig {
            url: "postgres://unused".to_string(),
            max_connections: 1,
            min_connections: 0,
            connect_timeout_seconds: 1,
            idle_timeout_seconds: 1,
        },
        auth: AuthConfig {
            jwt_secret: JWT_SECRET.to_string(),
            leeway_seconds: 0,
        },
        logging: LoggingConfig {
            level: "warn".to_string(),
            format: "pretty".to_string(),
        },
    }
}
