//! Giveaway posts and claims.

pub mod service;

pub use service::GiveawayService;
