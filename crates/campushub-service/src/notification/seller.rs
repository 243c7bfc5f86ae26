//! Seller inbox reads and read-state management.
//!
//! Inbox rows are only ever written by the marketplace fan-out paths;
//! this service covers the seller-facing side.

use std::sync::Arc;

use uuid::Uuid;

use campushub_core::error::AppError;
use campushub_core::result::AppResult;
use campushub_database::repositories::SellerNotificationRepository;
use campushub_entity::notification::SellerNotification;

use crate::context::RequestContext;

/// Manages a seller's marketplace notification inbox.
#[derive(Clone)]
pub struct SellerNotificationService {
    inbox: Arc<dyn SellerNotificationRepository>,
}

impl SellerNotificationService {
    /// Creates a new seller notification service.
    pub fn new(inbox: Arc<dyn SellerNotificationRepository>) -> Self {
        Self { inbox }
    }

    /// Lists the current seller's notifications.
    pub async fn list(&self, ctx: &RequestContext) -> AppResult<Vec<SellerNotification>> {
        self.inbox.find_by_user(ctx.user_id).await
    }

    /// Gets the unread inbox count.
    pub async fn unread_count(&self, ctx: &RequestContext) -> AppResult<i64> {
        self.inbox.count_unread(ctx.user_id).await
    }

    /// Marks one of the current seller's notifications as read.
    ///
    /// A notification belonging to another seller is reported as
    /// `NotFound`, the same as a missing one.
    pub async fn mark_read(&self, ctx: &RequestContext, notification_id: Uuid) -> AppResult<()> {
        if !self.inbox.mark_read(ctx.user_id, notification_id).await? {
            return Err(AppError::not_found("Notification not found"));
        }
        Ok(())
    }

    /// Marks the whole inbox as read.
    pub async fn mark_all_read(&self, ctx: &RequestContext) -> AppResult<u64> {
        self.inbox.mark_all_read(ctx.user_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use campushub_core::error::ErrorKind;
    use campushub_database::repositories::memory::InMemorySellerNotificationStore;
    use campushub_entity::notification::{NewSellerNotification, SellerNotificationKind};
    use campushub_entity::user::UserRole;

    fn ctx(user_id: Uuid) -> RequestContext {
        RequestContext::new(user_id, UserRole::Member, "sam".to_string())
    }

    async fn seed_notification(
        inbox: &InMemorySellerNotificationStore,
        user_id: Uuid,
    ) -> SellerNotification {
        inbox
            .create(&NewSellerNotification {
                user_id,
                title: "Product Sold!".to_string(),
                message: "Your product \"Desk\" has been purchased.".to_string(),
                kind: SellerNotificationKind::ProductPurchase,
                action_url: None,
                product_id: None,
                job_id: None,
            })
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn mark_read_is_scoped_to_the_owner() {
        let inbox = Arc::new(InMemorySellerNotificationStore::new());
        let service = SellerNotificationService::new(inbox.clone());
        let seller = ctx(Uuid::new_v4());
        let stranger = ctx(Uuid::new_v4());
        let notification = seed_notification(&inbox, seller.user_id).await;

        let err = service
            .mark_read(&stranger, notification.id)
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
        assert!(!inbox.all()[0].is_read);

        service.mark_read(&seller, notification.id).await.unwrap();
        assert!(inbox.all()[0].is_read);
        assert_eq!(service.unread_count(&seller).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn mark_read_missing_notification_is_not_found() {
        let inbox = Arc::new(InMemorySellerNotificationStore::new());
        let service = SellerNotificationService::new(inbox);
        let seller = ctx(Uuid::new_v4());

        let err = service
            .mark_read(&seller, Uuid::new_v4())
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn mark_all_read_leaves_other_inboxes_untouched() {
        let inbox = Arc::new(InMemorySellerNotificationStore::new());
        let service = SellerNotificationService::new(inbox.clone());
        let seller = ctx(Uuid::new_v4());
        let other = ctx(Uuid::new_v4());
        seed_notification(&inbox, seller.user_id).await;
        seed_notification(&inbox, other.user_id).await;

        let updated = service.mark_all_read(&seller).await.unwrap();
        assert_eq!(updated, 1);
        assert_eq!(service.unread_count(&other).await.unwrap(), 1);
    }
}
