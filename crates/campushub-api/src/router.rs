//! Route definitions for the CampusHub HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`. The
//! router receives `AppState` and passes it to all handlers via Axum's
//! `State` extractor.

use axum::{
    Router,
    http::{HeaderName, HeaderValue, Method},
    middleware as axum_middleware,
    routing::{delete, get, post, put},
};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use campushub_core::config::app::CorsConfig;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(event_routes())
        .merge(reminder_routes())
        .merge(notification_routes())
        .merge(seller_notification_routes())
        .merge(marketplace_routes())
        .merge(job_routes())
        .merge(giveaway_routes())
        .merge(health_routes());

    let cors = build_cors_layer(&state.config.server.cors);

    Router::new()
        .nest("/api", api_routes)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Event CRUD; writes are admin-only.
fn event_routes() -> Router<AppState> {
    Router::new()
        .route("/events", get(handlers::event::list_events))
        .route("/events", post(handlers::event::create_event))
        .route("/events/all", get(handlers::event::list_all_events))
        .route("/events/{id}", get(handlers::event::get_event))
        .route("/events/{id}", put(handlers::event::update_event))
        .route("/events/{id}", delete(handlers::event::delete_event))
        .route(
            "/events/{id}/active",
            put(handlers::event::set_event_active),
        )
}

/// Reminder lifecycle plus the externally triggered overdue sweep.
fn reminder_routes() -> Router<AppState> {
    Router::new()
        .route("/reminders", post(handlers::reminder::create_reminder))
        .route("/reminders", get(handlers::reminder::list_reminders))
        .route(
            "/reminders/event/{event_id}",
            get(handlers::reminder::reminder_for_event),
        )
        .route("/reminders/{id}", delete(handlers::reminder::delete_reminder))
        .route(
            "/reminders/process-overdue",
            post(handlers::reminder::process_overdue),
        )
}

/// User notification feed.
fn notification_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/notifications",
            get(handlers::notification::list_notifications),
        )
        .route(
            "/notifications",
            post(handlers::notification::create_notification),
        )
        .route(
            "/notifications/unread",
            get(handlers::notification::list_unread),
        )
        .route(
            "/notifications/unread-count",
            get(handlers::notification::unread_count),
        )
        .route(
            "/notifications/{id}/read",
            put(handlers::notification::mark_read),
        )
        .route(
            "/notifications/read-all",
            put(handlers::notification::mark_all_read),
        )
        .route(
            "/notifications/{id}",
            delete(handlers::notification::delete_notification),
        )
}

/// Seller marketplace inbox.
fn seller_notification_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/seller-notifications",
            get(handlers::seller_notification::list_inbox),
        )
        .route(
            "/seller-notifications/unread-count",
            get(handlers::seller_notification::unread_count),
        )
        .route(
            "/seller-notifications/{id}/read",
            put(handlers::seller_notification::mark_read),
        )
        .route(
            "/seller-notifications/read-all",
            put(handlers::seller_notification::mark_all_read),
        )
}

/// Products, purchases, and wishlist.
fn marketplace_routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(handlers::marketplace::list_products))
        .route("/products", post(handlers::marketplace::create_product))
        .route("/products/mine", get(handlers::marketplace::my_products))
        .route("/products/{id}", get(handlers::marketplace::get_product))
        .route("/products/{id}", put(handlers::marketplace::update_product))
        .route(
            "/products/{id}",
            delete(handlers::marketplace::delete_product),
        )
        .route(
            "/products/{id}/purchase",
            post(handlers::marketplace::purchase_product),
        )
        .route("/purchases", get(handlers::marketplace::purchase_history))
        .route("/wishlist", get(handlers::marketplace::my_wishlist))
        .route(
            "/wishlist/{product_id}",
            post(handlers::marketplace::add_to_wishlist),
        )
        .route(
            "/wishlist/{product_id}",
            delete(handlers::marketplace::remove_from_wishlist),
        )
}

/// Job posts and applications.
fn job_routes() -> Router<AppState> {
    Router::new()
        .route("/jobs", get(handlers::job::list_jobs))
        .route("/jobs", post(handlers::job::create_job))
        .route("/jobs/mine", get(handlers::job::my_jobs))
        .route("/jobs/{id}", get(handlers::job::get_job))
        .route("/jobs/{id}", delete(handlers::job::delete_job))
        .route("/jobs/{id}/apply", post(handlers::job::apply_to_job))
}

/// Giveaways and claims.
fn giveaway_routes() -> Router<AppState> {
    Router::new()
        .route("/giveaways", get(handlers::giveaway::list_giveaways))
        .route("/giveaways", post(handlers::giveaway::create_giveaway))
        .route("/giveaways/mine", get(handlers::giveaway::my_giveaways))
        .route("/giveaways/{id}", get(handlers::giveaway::get_giveaway))
        .route("/giveaways/{id}", delete(handlers::giveaway::delete_giveaway))
        .route(
            "/giveaways/{id}/claim",
            post(handlers::giveaway::claim_giveaway),
        )
}

/// Liveness probe.
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}

fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    let mut layer = CorsLayer::new()
        .max_age(std::time::Duration::from_secs(config.max_age_seconds));

    if config.allowed_origins.iter().any(|o| o == "*") {
        layer = layer.allow_origin(Any);
    } else {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        layer = layer.allow_origin(origins);
    }

    if config.allowed_methods.iter().any(|m| m == "*") {
        layer = layer.allow_methods(Any);
    } else {
        let methods: Vec<Method> = config
            .allowed_methods
            .iter()
            .filter_map(|m| m.parse().ok())
            .collect();
        layer = layer.allow_methods(methods);
    }

    if config.allowed_headers.iter().any(|h| h == "*") {
        layer = layer.allow_headers(Any);
    } else {
        let headers: Vec<HeaderName> = config
            .allowed_headers
            .iter()
            .filter_map(|h| h.parse().ok())
            .collect();
        layer = layer.allow_headers(headers);
    }

    layer
}
