//! # campushub-service
//!
//! Business logic service layer for CampusHub. Each service validates
//! inputs, enforces domain invariants, and sequences the multi-step
//! workflows that cross entity boundaries (reminder creation, the overdue
//! reminder sweep, and seller-notification fan-out).
//!
//! Services follow constructor injection: every repository is provided at
//! construction time as an `Arc` trait object, so tests can swap in the
//! in-memory stores from `campushub-database`.

pub mod context;
pub mod event;
pub mod giveaway;
pub mod marketplace;
pub mod notification;

pub use context::RequestContext;
pub use event::EventService;
pub use giveaway::GiveawayService;
pub use marketplace::MarketplaceService;
pub use notification::{NotificationService, ReminderSweepOutcome, SellerNotificationService};
