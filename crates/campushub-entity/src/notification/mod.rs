//! Notification entities: the per-user feed and the seller inbox.

pub mod kind;
pub mod model;
pub mod seller;

pub use kind::NotificationKind;
pub use model::{NewNotification, Notification};
pub use seller::{NewSellerNotification, SellerNotification, SellerNotificationKind};
