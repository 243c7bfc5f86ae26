//! Peer marketplace entities: product listings, purchases, wishlist,
//! job posts, and giveaways.

pub mod giveaway;
pub mod job;
pub mod product;
pub mod purchase;
pub mod wishlist;

pub use giveaway::{GiveawayClaim, GiveawayPost, GiveawayStatus, NewGiveaway, NewGiveawayClaim};
pub use job::{JobApplication, JobPost, NewJob, NewJobApplication};
pub use product::{NewProduct, ProductListing, ProductPatch, ProductStatus};
pub use purchase::{NewPurchase, PurchaseHistory, PurchaseStatus};
pub use wishlist::WishlistItem;
