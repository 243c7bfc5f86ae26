//! Notification orchestration: the user feed, the event-reminder
//! lifecycle, and the seller inbox.

pub mod builder;
pub mod link;
pub mod seller;
pub mod service;

pub use seller::SellerNotificationService;
pub use service::{NotificationService, ReminderSweepOutcome};
