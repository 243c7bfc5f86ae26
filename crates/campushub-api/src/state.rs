//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use campushub_core::config::AppConfig;
use campushub_service::{
    EventService, GiveawayService, MarketplaceService, NotificationService,
    SellerNotificationService,
};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`. All fields are
/// `Arc`-wrapped for cheap cloning across tasks. The state holds services
/// only; repositories stay behind the service constructors, so tests can
/// assemble a state over in-memory stores.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Event CRUD and reminder creation.
    pub event_service: Arc<EventService>,
    /// Notification feed and the overdue reminder sweep.
    pub notification_service: Arc<NotificationService>,
    /// Seller marketplace inbox.
    pub seller_notification_service: Arc<SellerNotificationService>,
    /// Products, purchases, wishlist, and jobs.
    pub marketplace_service: Arc<MarketplaceService>,
    /// Giveaways and claims.
    pub giveaway_service: Arc<GiveawayService>,
}
