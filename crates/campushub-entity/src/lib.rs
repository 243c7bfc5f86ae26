//! Domain entity models and enums for CampusHub.
//!
//! Each module covers one entity family: campus events and their
//! reminders, user/seller notifications, and the peer marketplace
//! (products, jobs, purchases, wishlist, giveaways).

pub mod event;
pub mod marketplace;
pub mod notification;
pub mod user;
