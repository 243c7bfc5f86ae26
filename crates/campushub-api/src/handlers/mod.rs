//! HTTP handlers, one module per domain.

pub mod event;
pub mod giveaway;
pub mod health;
pub mod job;
pub mod marketplace;
pub mod notification;
pub mod reminder;
pub mod seller_notification;

use campushub_core::error::AppError;
use campushub_service::context::RequestContext;

/// Guards admin-only endpoints.
pub(crate) fn require_admin(ctx: &RequestContext) -> Result<(), AppError> {
    if !ctx.is_admin() {
        return Err(AppError::forbidden("Admin access required"));
    }
    Ok(())
}
