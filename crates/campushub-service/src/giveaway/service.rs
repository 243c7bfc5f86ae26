//! Giveaway lifecycle and the claim fan-out.

use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;

use campushub_core::error::AppError;
use campushub_core::result::AppResult;
use campushub_database::repositories::{GiveawayRepository, SellerNotificationRepository};
use campushub_entity::marketplace::{
    GiveawayClaim, GiveawayPost, GiveawayStatus, NewGiveaway, NewGiveawayClaim,
};
use campushub_entity::notification::{NewSellerNotification, SellerNotificationKind};

use crate::context::RequestContext;

const INBOX_URL: &str = "/myspace/notifications";

/// Manages giveaway posts and their claims.
#[derive(Clone)]
pub struct GiveawayService {
    giveaways: Arc<dyn GiveawayRepository>,
    seller_inbox: Arc<dyn SellerNotificationRepository>,
}

impl GiveawayService {
    /// Creates a new giveaway service.
    pub fn new(
        giveaways: Arc<dyn GiveawayRepository>,
        seller_inbox: Arc<dyn SellerNotificationRepository>,
    ) -> Self {
        Self {
            giveaways,
            seller_inbox,
        }
    }

    /// Lists unclaimed giveaways.
    pub async fn list_available(&self) -> AppResult<Vec<GiveawayPost>> {
        self.giveaways.find_available().await
    }

    /// Lists the current user's giveaways.
    pub async fn my_giveaways(&self, ctx: &RequestContext) -> AppResult<Vec<GiveawayPost>> {
        self.giveaways.find_by_seller(ctx.user_id).await
    }

    /// Gets a single giveaway by id.
    pub async fn get(&self, giveaway_id: Uuid) -> AppResult<GiveawayPost> {
        self.giveaways
            .find_by_id(giveaway_id)
            .await?
            .ok_or_else(|| AppError::not_found("Giveaway not found"))
    }

    /// Creates a giveaway owned by the current user.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        giveaway: NewGiveaway,
    ) -> AppResult<GiveawayPost> {
        if giveaway.title.trim().is_empty() {
            return Err(AppError::validation("Giveaway title is required"));
        }
        self.giveaways.create(ctx.user_id, &giveaway).await
    }

    /// Deletes one of the current user's giveaways.
    pub async fn delete(&self, ctx: &RequestContext, giveaway_id: Uuid) -> AppResult<()> {
        let giveaway = self
            .giveaways
            .find_by_id(giveaway_id)
            .await?
            .ok_or_else(|| AppError::not_found("Giveaway not found"))?;
        if giveaway.seller_id != ctx.user_id {
            return Err(AppError::forbidden("You do not own this giveaway"));
        }
        self.giveaways.delete(giveaway_id).await?;
        Ok(())
    }

    /// Claims an available giveaway.
    ///
    /// The claimed transition is a guarded write, mirroring the product
    /// purchase flow: losing a race yields `Conflict` with zero state
    /// changes. The giver's notification carries the claimer's phone
    /// number and is best-effort.
    pub async fn claim(
        &self,
        ctx: &RequestContext,
        giveaway_id: Uuid,
        phone_number: &str,
    ) -> AppResult<GiveawayClaim> {
        if phone_number.trim().is_empty() {
            return Err(AppError::validation("Phone number is required"));
        }

        let giveaway = self
            .giveaways
            .find_by_id(giveaway_id)
            .await?
            .ok_or_else(|| AppError::not_found("Giveaway not found"))?;
        if giveaway.seller_id == ctx.user_id {
            return Err(AppError::validation("You cannot claim your own giveaway"));
        }
        if giveaway.status != GiveawayStatus::Available {
            return Err(AppError::conflict("Giveaway is no longer available"));
        }

        if !self.giveaways.mark_claimed(giveaway_id).await? {
            return Err(AppError::conflict("Giveaway is no longer available"));
        }

        let claim = self
            .giveaways
            .create_claim(
                ctx.user_id,
                &NewGiveawayClaim {
                    giveaway_id,
                    claimer_phone_number: phone_number.to_string(),
                },
            )
            .await?;

        let fan_out = NewSellerNotification {
            user_id: giveaway.seller_id,
            title: "Giveaway Claimed!".to_string(),
            message: format!(
                "Your giveaway \"{}\" has been claimed by someone with phone number: {}.",
                giveaway.title, phone_number
            ),
            kind: SellerNotificationKind::GiveawayClaim,
            action_url: Some(INBOX_URL.to_string()),
            product_id: None,
            job_id: None,
        };
        if let Err(e) = self.seller_inbox.create(&fan_out).await {
            warn!(giveaway_id = %giveaway.id, error = %e, "seller notification failed after claim");
        }

        info!(giveaway_id = %giveaway.id, claimer_id = %ctx.user_id, "giveaway claimed");
        Ok(claim)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use campushub_core::error::ErrorKind;
    use campushub_database::repositories::memory::{
        InMemoryGiveawayStore, InMemorySellerNotificationStore,
    };
    use campushub_entity::user::UserRole;

    struct Fixture {
        giveaways: Arc<InMemoryGiveawayStore>,
        seller_inbox: Arc<InMemorySellerNotificationStore>,
        service: GiveawayService,
    }

    fn fixture() -> Fixture {
        let giveaways = Arc::new(InMemoryGiveawayStore::new());
        let seller_inbox = Arc::new(InMemorySellerNotificationStore::new());
        let service = GiveawayService::new(giveaways.clone(), seller_inbox.clone());
        Fixture {
            giveaways,
            seller_inbox,
            service,
        }
    }

    fn ctx() -> RequestContext {
        RequestContext::new(Uuid::new_v4(), UserRole::Member, "rae".to_string())
    }

    fn new_giveaway(title: &str) -> NewGiveaway {
        NewGiveaway {
            title: title.to_string(),
            description: Some("Free to a good home".to_string()),
            image_url: None,
        }
    }

    #[tokio::test]
    async fn claim_marks_claimed_and_notifies_the_giver() {
        let fx = fixture();
        let giver = ctx();
        let claimer = ctx();
        let giveaway = fx
            .service
            .create(&giver, new_giveaway("Old sofa"))
            .await
            .unwrap();

        let claim = fx
            .service
            .claim(&claimer, giveaway.id, "017-555-0199")
            .await
            .unwrap();
        assert_eq!(claim.claimer_id, claimer.user_id);

        let listed = fx.service.list_available().await.unwrap();
        assert!(listed.is_empty());

        let inbox = fx.seller_inbox.all();
        assert_eq!(inbox.len(), 1);
        assert_eq!(inbox[0].user_id, giver.user_id);
        assert_eq!(inbox[0].kind, SellerNotificationKind::GiveawayClaim);
        assert!(inbox[0].title.contains("Giveaway Claimed!"));
        assert!(inbox[0].message.contains("017-555-0199"));
    }

    #[tokio::test]
    async fn double_claim_conflicts_with_zero_state_changes() {
        let fx = fixture();
        let giver = ctx();
        let first = ctx();
        let second = ctx();
        let giveaway = fx
            .service
            .create(&giver, new_giveaway("Desk lamp"))
            .await
            .unwrap();

        fx.service.claim(&first, giveaway.id, "017-1").await.unwrap();
        let err = fx
            .service
            .claim(&second, giveaway.id, "017-2")
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Conflict);

        assert_eq!(fx.giveaways.claims().len(), 1);
        assert_eq!(fx.seller_inbox.all().len(), 1);
    }

    #[tokio::test]
    async fn givers_cannot_claim_their_own_giveaway() {
        let fx = fixture();
        let giver = ctx();
        let giveaway = fx
            .service
            .create(&giver, new_giveaway("Plant pot"))
            .await
            .unwrap();

        let err = fx
            .service
            .claim(&giver, giveaway.id, "017-3")
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
        assert!(fx.giveaways.claims().is_empty());
    }

    #[tokio::test]
    async fn claim_survives_fan_out_failure() {
        let fx = fixture();
        let giver = ctx();
        let claimer = ctx();
        let giveaway = fx
            .service
            .create(&giver, new_giveaway("Rug"))
            .await
            .unwrap();
        fx.seller_inbox.fail_creates_for(giver.user_id);

        fx.service.claim(&claimer, giveaway.id, "017-4").await.unwrap();
        assert_eq!(fx.giveaways.claims().len(), 1);
        assert!(fx.seller_inbox.all().is_empty());
    }

    #[tokio::test]
    async fn delete_is_scoped_to_the_owner() {
        let fx = fixture();
        let giver = ctx();
        let stranger = ctx();
        let giveaway = fx
            .service
            .create(&giver, new_giveaway("Mirror"))
            .await
            .unwrap();

        let err = fx
            .service
            .delete(&stranger, giveaway.id)
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Forbidden);

        fx.service.delete(&giver, giveaway.id).await.unwrap();
        assert!(fx.service.my_giveaways(&giver).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn create_requires_a_title() {
        let fx = fixture();
        let err = fx
            .service
            .create(&ctx(), new_giveaway("  "))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }
}
