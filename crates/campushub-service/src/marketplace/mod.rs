//! Peer marketplace workflows: listings, purchases, wishlist, and jobs.

pub mod service;

pub use service::MarketplaceService;
