//! Repository traits and their Postgres implementations.
//!
//! Each entity family gets one trait (`XRepository`) and one Postgres
//! implementation (`PgXRepository`). Services depend on the traits only,
//! taking their persistence handle as a constructor parameter. The
//! `test-support` feature adds in-memory implementations for tests.

pub mod event;
pub mod giveaway;
pub mod job;
pub mod notification;
pub mod product;
pub mod purchase;
pub mod reminder;
pub mod seller_notification;
pub mod wishlist;

#[cfg(feature = "test-support")]
pub mod memory;

pub use event::{EventRepository, PgEventRepository};
pub use giveaway::{GiveawayRepository, PgGiveawayRepository};
pub use job::{JobRepository, PgJobRepository};
pub use notification::{NotificationRepository, PgNotificationRepository};
pub use product::{PgProductRepository, ProductRepository};
pub use purchase::{PgPurchaseRepository, PurchaseRepository};
pub use reminder::{PgReminderRepository, ReminderRepository};
pub use seller_notification::{PgSellerNotificationRepository, SellerNotificationRepository};
pub use wishlist::{PgWishlistRepository, WishlistRepository};
