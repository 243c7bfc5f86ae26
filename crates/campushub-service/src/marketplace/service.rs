//! Marketplace workflows and their seller-notification side effects.

use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;

use campushub_core::error::AppError;
use campushub_core::result::AppResult;
use campushub_database::repositories::{
    JobRepository, ProductRepository, PurchaseRepository, SellerNotificationRepository,
    WishlistRepository,
};
use campushub_entity::marketplace::{
    JobApplication, JobPost, NewJob, NewJobApplication, NewProduct, NewPurchase, ProductListing,
    ProductPatch, ProductStatus, PurchaseHistory, WishlistItem,
};
use campushub_entity::notification::{NewSellerNotification, SellerNotificationKind};

use crate::context::RequestContext;

/// Link shown on every marketplace fan-out notification.
const INBOX_URL: &str = "/myspace/notifications";

/// Manages product listings, purchases, wishlists, and job posts.
#[derive(Clone)]
pub struct MarketplaceService {
    products: Arc<dyn ProductRepository>,
    purchases: Arc<dyn PurchaseRepository>,
    wishlist: Arc<dyn WishlistRepository>,
    jobs: Arc<dyn JobRepository>,
    seller_inbox: Arc<dyn SellerNotificationRepository>,
}

impl MarketplaceService {
    /// Creates a new marketplace service.
    pub fn new(
        products: Arc<dyn ProductRepository>,
        purchases: Arc<dyn PurchaseRepository>,
        wishlist: Arc<dyn WishlistRepository>,
        jobs: Arc<dyn JobRepository>,
        seller_inbox: Arc<dyn SellerNotificationRepository>,
    ) -> Self {
        Self {
            products,
            purchases,
            wishlist,
            jobs,
            seller_inbox,
        }
    }

    /// Lists available products, optionally filtered by title search and
    /// maximum price.
    pub async fn browse_products(
        &self,
        search: Option<&str>,
        max_price: Option<i64>,
    ) -> AppResult<Vec<ProductListing>> {
        self.products.find_available(search, max_price).await
    }

    /// Lists the current user's own listings, sold and removed included.
    pub async fn my_products(&self, ctx: &RequestContext) -> AppResult<Vec<ProductListing>> {
        self.products.find_by_seller(ctx.user_id).await
    }

    /// Gets a single listing by id.
    pub async fn get_product(&self, product_id: Uuid) -> AppResult<ProductListing> {
        self.products
            .find_by_id(product_id)
            .await?
            .ok_or_else(|| AppError::not_found("Product not found"))
    }

    /// Creates a listing owned by the current user.
    pub async fn create_product(
        &self,
        ctx: &RequestContext,
        product: NewProduct,
    ) -> AppResult<ProductListing> {
        if product.title.trim().is_empty() {
            return Err(AppError::validation("Product title is required"));
        }
        if product.price <= 0 {
            return Err(AppError::validation("Product price must be positive"));
        }
        self.products.create(ctx.user_id, &product).await
    }

    /// Updates one of the current user's listings.
    pub async fn update_product(
        &self,
        ctx: &RequestContext,
        product_id: Uuid,
        patch: ProductPatch,
    ) -> AppResult<ProductListing> {
        if patch.price.is_some_and(|p| p <= 0) {
            return Err(AppError::validation("Product price must be positive"));
        }
        self.owned_product(ctx, product_id).await?;
        self.products.update(product_id, &patch).await
    }

    /// Deletes one of the current user's listings.
    pub async fn delete_product(&self, ctx: &RequestContext, product_id: Uuid) -> AppResult<()> {
        self.owned_product(ctx, product_id).await?;
        self.products.delete(product_id).await?;
        Ok(())
    }

    /// Purchases an available product.
    ///
    /// The sold transition is a guarded write: losing a race against a
    /// concurrent buyer yields `Conflict` with zero state changes. The
    /// purchase row captures the listing price at purchase time. The
    /// seller notification is best-effort; a delivery failure is logged
    /// and the purchase still succeeds.
    pub async fn purchase_product(
        &self,
        ctx: &RequestContext,
        product_id: Uuid,
        phone_number: &str,
    ) -> AppResult<PurchaseHistory> {
        if phone_number.trim().is_empty() {
            return Err(AppError::validation("Phone number is required"));
        }

        let product = self.get_product(product_id).await?;
        if product.seller_id == ctx.user_id {
            return Err(AppError::validation("You cannot purchase your own product"));
        }
        if product.status != ProductStatus::Available {
            return Err(AppError::conflict("Product is no longer available"));
        }

        if !self.products.mark_sold(product_id).await? {
            return Err(AppError::conflict("Product is no longer available"));
        }

        let purchase = self
            .purchases
            .create(
                ctx.user_id,
                &NewPurchase {
                    product_id,
                    price: product.price,
                    phone_number: phone_number.to_string(),
                },
            )
            .await?;

        let fan_out = NewSellerNotification {
            user_id: product.seller_id,
            title: "Product Sold!".to_string(),
            message: format!("Your product \"{}\" has been purchased.", product.title),
            kind: SellerNotificationKind::ProductPurchase,
            action_url: Some(INBOX_URL.to_string()),
            product_id: Some(product.id),
            job_id: None,
        };
        if let Err(e) = self.seller_inbox.create(&fan_out).await {
            warn!(product_id = %product.id, error = %e, "seller notification failed after purchase");
        }

        info!(product_id = %product.id, buyer_id = %ctx.user_id, "product purchased");
        Ok(purchase)
    }

    /// Lists the current user's purchase history.
    pub async fn purchase_history(&self, ctx: &RequestContext) -> AppResult<Vec<PurchaseHistory>> {
        self.purchases.find_by_buyer(ctx.user_id).await
    }

    /// Saves a product to the current user's wishlist.
    pub async fn add_to_wishlist(
        &self,
        ctx: &RequestContext,
        product_id: Uuid,
    ) -> AppResult<WishlistItem> {
        self.get_product(product_id).await?;
        self.wishlist.add(ctx.user_id, product_id).await
    }

    /// Removes a product from the current user's wishlist.
    pub async fn remove_from_wishlist(
        &self,
        ctx: &RequestContext,
        product_id: Uuid,
    ) -> AppResult<()> {
        if !self.wishlist.remove(ctx.user_id, product_id).await? {
            return Err(AppError::not_found("Wishlist item not found"));
        }
        Ok(())
    }

    /// Lists the products on the current user's wishlist.
    pub async fn my_wishlist(&self, ctx: &RequestContext) -> AppResult<Vec<ProductListing>> {
        self.wishlist.find_products_by_user(ctx.user_id).await
    }

    /// Lists all job posts.
    pub async fn list_jobs(&self) -> AppResult<Vec<JobPost>> {
        self.jobs.find_all().await
    }

    /// Lists the current user's job posts.
    pub async fn my_jobs(&self, ctx: &RequestContext) -> AppResult<Vec<JobPost>> {
        self.jobs.find_by_seller(ctx.user_id).await
    }

    /// Gets a single job post by id.
    pub async fn get_job(&self, job_id: Uuid) -> AppResult<JobPost> {
        self.jobs
            .find_by_id(job_id)
            .await?
            .ok_or_else(|| AppError::not_found("Job post not found"))
    }

    /// Creates a job post owned by the current user.
    pub async fn create_job(&self, ctx: &RequestContext, job: NewJob) -> AppResult<JobPost> {
        if job.job_title.trim().is_empty() {
            return Err(AppError::validation("Job title is required"));
        }
        if job.job_description.trim().is_empty() {
            return Err(AppError::validation("Job description is required"));
        }
        if job.salary.is_some_and(|s| s < 0) {
            return Err(AppError::validation("Salary cannot be negative"));
        }
        self.jobs.create(ctx.user_id, &job).await
    }

    /// Deletes one of the current user's job posts.
    pub async fn delete_job(&self, ctx: &RequestContext, job_id: Uuid) -> AppResult<()> {
        let job = self
            .jobs
            .find_by_id(job_id)
            .await?
            .ok_or_else(|| AppError::not_found("Job post not found"))?;
        if job.seller_id != ctx.user_id {
            return Err(AppError::forbidden("You do not own this job post"));
        }
        self.jobs.delete(job_id).await?;
        Ok(())
    }

    /// Applies to a job post. The poster is notified best-effort.
    pub async fn apply_to_job(
        &self,
        ctx: &RequestContext,
        job_id: Uuid,
        phone_number: &str,
    ) -> AppResult<JobApplication> {
        if phone_number.trim().is_empty() {
            return Err(AppError::validation("Phone number is required"));
        }

        let job = self
            .jobs
            .find_by_id(job_id)
            .await?
            .ok_or_else(|| AppError::not_found("Job post not found"))?;
        if job.seller_id == ctx.user_id {
            return Err(AppError::validation("You cannot apply to your own job post"));
        }

        let application = self
            .jobs
            .create_application(
                ctx.user_id,
                &NewJobApplication {
                    job_id,
                    phone_number: phone_number.to_string(),
                },
            )
            .await?;

        let fan_out = NewSellerNotification {
            user_id: job.seller_id,
            title: "New Job Application!".to_string(),
            message: format!("Someone applied to your job post \"{}\".", job.job_title),
            kind: SellerNotificationKind::JobApplication,
            action_url: Some(INBOX_URL.to_string()),
            product_id: None,
            job_id: Some(job.id),
        };
        if let Err(e) = self.seller_inbox.create(&fan_out).await {
            warn!(job_id = %job.id, error = %e, "seller notification failed after application");
        }

        Ok(application)
    }

    async fn owned_product(
        &self,
        ctx: &RequestContext,
        product_id: Uuid,
    ) -> AppResult<ProductListing> {
        let product = self.get_product(product_id).await?;
        if product.seller_id != ctx.user_id {
            return Err(AppError::forbidden("You do not own this product"));
        }
        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use campushub_core::error::ErrorKind;
    use campushub_database::repositories::memory::{
        InMemoryJobStore, InMemoryProductStore, InMemoryPurchaseStore,
        InMemorySellerNotificationStore, InMemoryWishlistStore,
    };
    use campushub_entity::user::UserRole;

    struct Fixture {
        products: Arc<InMemoryProductStore>,
        purchases: Arc<InMemoryPurchaseStore>,
        jobs: Arc<InMemoryJobStore>,
        seller_inbox: Arc<InMemorySellerNotificationStore>,
        wishlist: Arc<InMemoryWishlistStore>,
        service: MarketplaceService,
    }

    fn fixture() -> Fixture {
        let products = Arc::new(InMemoryProductStore::new());
        let purchases = Arc::new(InMemoryPurchaseStore::new());
        let wishlist = Arc::new(InMemoryWishlistStore::new());
        let jobs = Arc::new(InMemoryJobStore::new());
        let seller_inbox = Arc::new(InMemorySellerNotificationStore::new());
        let service = MarketplaceService::new(
            products.clone(),
            purchases.clone(),
            wishlist.clone(),
            jobs.clone(),
            seller_inbox.clone(),
        );
        Fixture {
            products,
            purchases,
            jobs,
            seller_inbox,
            wishlist,
            service,
        }
    }

    fn ctx() -> RequestContext {
        RequestContext::new(Uuid::new_v4(), UserRole::Member, "dana".to_string())
    }

    fn new_product(title: &str, price: i64) -> NewProduct {
        NewProduct {
            title: title.to_string(),
            description: Some("Barely used".to_string()),
            price,
            category: Some("books".to_string()),
            size: None,
            color: None,
            brand: None,
            image_url: None,
        }
    }

    #[tokio::test]
    async fn create_product_validates_title_and_price() {
        let fx = fixture();
        let seller = ctx();

        let err = fx
            .service
            .create_product(&seller, new_product(" ", 100))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);

        let err = fx
            .service
            .create_product(&seller, new_product("Lamp", 0))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
        assert!(fx.products.all().is_empty());
    }

    #[tokio::test]
    async fn purchase_sells_product_and_notifies_seller_once() {
        let fx = fixture();
        let seller = ctx();
        let buyer = ctx();
        let product = fx
            .service
            .create_product(&seller, new_product("Calculus textbook", 500))
            .await
            .unwrap();

        let purchase = fx
            .service
            .purchase_product(&buyer, product.id, "017-555-0101")
            .await
            .unwrap();
        assert_eq!(purchase.price, 500);
        assert_eq!(purchase.buyer_id, buyer.user_id);

        let sold = fx.service.get_product(product.id).await.unwrap();
        assert_eq!(sold.status, ProductStatus::Sold);

        let inbox = fx.seller_inbox.all();
        assert_eq!(inbox.len(), 1);
        assert_eq!(inbox[0].user_id, seller.user_id);
        assert_eq!(inbox[0].kind, SellerNotificationKind::ProductPurchase);
        assert_eq!(inbox[0].product_id, Some(product.id));
    }

    #[tokio::test]
    async fn purchasing_sold_product_changes_nothing() {
        let fx = fixture();
        let seller = ctx();
        let first = ctx();
        let second = ctx();
        let product = fx
            .service
            .create_product(&seller, new_product("Desk", 800))
            .await
            .unwrap();

        fx.service
            .purchase_product(&first, product.id, "017-1")
            .await
            .unwrap();

        let err = fx
            .service
            .purchase_product(&second, product.id, "017-2")
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Conflict);

        assert_eq!(fx.purchases.all().len(), 1);
        assert_eq!(fx.seller_inbox.all().len(), 1);
    }

    #[tokio::test]
    async fn sellers_cannot_buy_their_own_product() {
        let fx = fixture();
        let seller = ctx();
        let product = fx
            .service
            .create_product(&seller, new_product("Bike", 1500))
            .await
            .unwrap();

        let err = fx
            .service
            .purchase_product(&seller, product.id, "017-3")
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
        assert_eq!(
            fx.service.get_product(product.id).await.unwrap().status,
            ProductStatus::Available
        );
    }

    #[tokio::test]
    async fn purchase_succeeds_even_when_fan_out_fails() {
        let fx = fixture();
        let seller = ctx();
        let buyer = ctx();
        let product = fx
            .service
            .create_product(&seller, new_product("Monitor", 900))
            .await
            .unwrap();
        fx.seller_inbox.fail_creates_for(seller.user_id);

        fx.service
            .purchase_product(&buyer, product.id, "017-4")
            .await
            .unwrap();

        assert_eq!(fx.purchases.all().len(), 1);
        assert_eq!(
            fx.service.get_product(product.id).await.unwrap().status,
            ProductStatus::Sold
        );
        assert!(fx.seller_inbox.all().is_empty());
    }

    #[tokio::test]
    async fn wishlist_rejects_duplicates_and_unknown_products() {
        let fx = fixture();
        let seller = ctx();
        let user = ctx();
        let product = fx
            .service
            .create_product(&seller, new_product("Kettle", 200))
            .await
            .unwrap();
        fx.wishlist.mirror_product(product.clone());

        fx.service.add_to_wishlist(&user, product.id).await.unwrap();
        let saved = fx.service.my_wishlist(&user).await.unwrap();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].id, product.id);
        let err = fx
            .service
            .add_to_wishlist(&user, product.id)
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Conflict);

        let err = fx
            .service
            .add_to_wishlist(&user, Uuid::new_v4())
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);

        fx.service
            .remove_from_wishlist(&user, product.id)
            .await
            .unwrap();
        let err = fx
            .service
            .remove_from_wishlist(&user, product.id)
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
        assert!(fx.service.my_wishlist(&user).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn job_application_notifies_poster() {
        let fx = fixture();
        let poster = ctx();
        let applicant = ctx();
        let job = fx
            .service
            .create_job(
                &poster,
                NewJob {
                    job_title: "Barista".to_string(),
                    job_description: "Weekend shifts".to_string(),
                    salary: Some(12),
                },
            )
            .await
            .unwrap();

        fx.service
            .apply_to_job(&applicant, job.id, "017-5")
            .await
            .unwrap();

        assert_eq!(fx.jobs.applications().len(), 1);
        let inbox = fx.seller_inbox.all();
        assert_eq!(inbox.len(), 1);
        assert_eq!(inbox[0].kind, SellerNotificationKind::JobApplication);
        assert_eq!(inbox[0].job_id, Some(job.id));
        assert!(inbox[0].message.contains("Barista"));
    }

    #[tokio::test]
    async fn posters_cannot_apply_to_their_own_job() {
        let fx = fixture();
        let poster = ctx();
        let job = fx
            .service
            .create_job(
                &poster,
                NewJob {
                    job_title: "Tutor".to_string(),
                    job_description: "Math 101".to_string(),
                    salary: None,
                },
            )
            .await
            .unwrap();

        let err = fx
            .service
            .apply_to_job(&poster, job.id, "017-6")
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
        assert!(fx.jobs.applications().is_empty());
    }

    #[tokio::test]
    async fn product_ownership_is_enforced_on_update_and_delete() {
        let fx = fixture();
        let seller = ctx();
        let stranger = ctx();
        let product = fx
            .service
            .create_product(&seller, new_product("Chair", 300))
            .await
            .unwrap();

        let err = fx
            .service
            .update_product(&stranger, product.id, ProductPatch::default())
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Forbidden);

        let err = fx
            .service
            .delete_product(&stranger, product.id)
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Forbidden);

        fx.service.delete_product(&seller, product.id).await.unwrap();
        assert!(fx.products.all().is_empty());
    }
}
