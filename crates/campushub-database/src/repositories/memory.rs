//! In-memory repository implementations for tests.
//!
//! Behind the `test-support` feature. Each store mirrors the semantics of
//! its Postgres counterpart over a `Mutex<Vec<_>>` so service and router
//! tests run without a database. The notification store additionally
//! supports per-user failure injection for exercising error isolation in
//! the overdue sweep.

use std::collections::HashSet;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use campushub_core::error::AppError;
use campushub_core::result::AppResult;
use campushub_entity::event::{Event, EventPatch, EventReminder, NewEvent};
use campushub_entity::marketplace::{
    GiveawayClaim, GiveawayPost, GiveawayStatus, JobApplication, JobPost, NewGiveaway,
    NewGiveawayClaim, NewJob, NewJobApplication, NewProduct, NewPurchase, ProductListing,
    ProductPatch, ProductStatus, PurchaseHistory, PurchaseStatus, WishlistItem,
};
use campushub_entity::notification::{
    NewNotification, NewSellerNotification, Notification, SellerNotification,
};

use super::event::EventRepository;
use super::giveaway::GiveawayRepository;
use super::job::JobRepository;
use super::notification::NotificationRepository;
use super::product::ProductRepository;
use super::purchase::PurchaseRepository;
use super::reminder::ReminderRepository;
use super::seller_notification::SellerNotificationRepository;
use super::wishlist::WishlistRepository;

fn newest_first<T>(mut rows: Vec<T>, key: impl Fn(&T) -> DateTime<Utc>) -> Vec<T> {
    rows.sort_by(|a, b| key(b).cmp(&key(a)));
    rows
}

/// In-memory [`EventRepository`].
#[derive(Debug, Default)]
pub struct InMemoryEventStore {
    rows: Mutex<Vec<Event>>,
}

impl InMemoryEventStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an event directly, bypassing validation.
    pub fn insert(&self, event: Event) {
        self.rows.lock().unwrap().push(event);
    }
}

#[async_trait]
impl EventRepository for InMemoryEventStore {
    async fn find_all(&self) -> AppResult<Vec<Event>> {
        let rows = self.rows.lock().unwrap().clone();
        Ok(newest_first(rows, |e| e.created_at))
    }

    async fn find_active(&self) -> AppResult<Vec<Event>> {
        let rows: Vec<Event> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.is_active)
            .cloned()
            .collect();
        Ok(newest_first(rows, |e| e.created_at))
    }

    async fn find_by_id(&self, event_id: Uuid) -> AppResult<Option<Event>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|e| e.id == event_id)
            .cloned())
    }

    async fn create(&self, created_by: Uuid, event: &NewEvent) -> AppResult<Event> {
        let now = Utc::now();
        let row = Event {
            id: Uuid::new_v4(),
            title: event.title.clone(),
            description: event.description.clone(),
            event_type: event.event_type,
            event_date: event.event_date,
            location: event.location.clone(),
            image_url: event.image_url.clone(),
            created_by,
            is_active: true,
            created_at: now,
            updated_at: now,
        };
        self.rows.lock().unwrap().push(row.clone());
        Ok(row)
    }

    async fn update(&self, event_id: Uuid, patch: &EventPatch) -> AppResult<Event> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|e| e.id == event_id)
            .ok_or_else(|| AppError::not_found("Event not found"))?;
        if let Some(title) = &patch.title {
            row.title = title.clone();
        }
        if let Some(description) = &patch.description {
            row.description = Some(description.clone());
        }
        if let Some(event_type) = patch.event_type {
            row.event_type = event_type;
        }
        if let Some(event_date) = patch.event_date {
            row.event_date = Some(event_date);
        }
        if let Some(location) = &patch.location {
            row.location = Some(location.clone());
        }
        if let Some(image_url) = &patch.image_url {
            row.image_url = Some(image_url.clone());
        }
        if let Some(is_active) = patch.is_active {
            row.is_active = is_active;
        }
        row.updated_at = Utc::now();
        Ok(row.clone())
    }

    async fn set_active(&self, event_id: Uuid, is_active: bool) -> AppResult<Event> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|e| e.id == event_id)
            .ok_or_else(|| AppError::not_found("Event not found"))?;
        row.is_active = is_active;
        row.updated_at = Utc::now();
        Ok(row.clone())
    }

    async fn delete(&self, event_id: Uuid) -> AppResult<bool> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|e| e.id != event_id);
        Ok(rows.len() < before)
    }
}

/// In-memory [`ReminderRepository`].
#[derive(Debug, Default)]
pub struct InMemoryReminderStore {
    rows: Mutex<Vec<EventReminder>>,
}

impl InMemoryReminderStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a reminder directly, bypassing precondition checks.
    pub fn insert(&self, reminder: EventReminder) {
        self.rows.lock().unwrap().push(reminder);
    }

    /// Snapshot the current rows.
    pub fn all(&self) -> Vec<EventReminder> {
        self.rows.lock().unwrap().clone()
    }
}

#[async_trait]
impl ReminderRepository for InMemoryReminderStore {
    async fn create(
        &self,
        user_id: Uuid,
        event_id: Uuid,
        reminder_time: DateTime<Utc>,
    ) -> AppResult<EventReminder> {
        let mut rows = self.rows.lock().unwrap();
        if rows
            .iter()
            .any(|r| r.user_id == user_id && r.event_id == event_id)
        {
            return Err(AppError::conflict(
                "Reminder already exists for this event",
            ));
        }
        let row = EventReminder {
            id: Uuid::new_v4(),
            user_id,
            event_id,
            reminder_time,
            is_sent: false,
            created_at: Utc::now(),
        };
        rows.push(row.clone());
        Ok(row)
    }

    async fn find_by_user(&self, user_id: Uuid) -> AppResult<Vec<EventReminder>> {
        let rows: Vec<EventReminder> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect();
        Ok(newest_first(rows, |r| r.created_at))
    }

    async fn find_by_user_and_event(
        &self,
        user_id: Uuid,
        event_id: Uuid,
    ) -> AppResult<Option<EventReminder>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.user_id == user_id && r.event_id == event_id)
            .cloned())
    }

    async fn find_overdue(&self, now: DateTime<Utc>) -> AppResult<Vec<EventReminder>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.reminder_time <= now && !r.is_sent)
            .cloned()
            .collect())
    }

    async fn mark_sent(&self, reminder_id: Uuid) -> AppResult<()> {
        let mut rows = self.rows.lock().unwrap();
        if let Some(row) = rows.iter_mut().find(|r| r.id == reminder_id) {
            row.is_sent = true;
        }
        Ok(())
    }

    async fn delete(&self, reminder_id: Uuid) -> AppResult<bool> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|r| r.id != reminder_id);
        Ok(rows.len() < before)
    }

    async fn delete_by_event_and_user(&self, event_id: Uuid, user_id: Uuid) -> AppResult<u64> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|r| !(r.event_id == event_id && r.user_id == user_id));
        Ok((before - rows.len()) as u64)
    }
}

/// In-memory [`NotificationRepository`] with per-user failure injection.
#[derive(Debug, Default)]
pub struct InMemoryNotificationStore {
    rows: Mutex<Vec<Notification>>,
    fail_for: Mutex<HashSet<Uuid>>,
}

impl InMemoryNotificationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every `create` for this user fail with a database error.
    pub fn fail_creates_for(&self, user_id: Uuid) {
        self.fail_for.lock().unwrap().insert(user_id);
    }

    /// Seed a notification directly.
    pub fn insert(&self, notification: Notification) {
        self.rows.lock().unwrap().push(notification);
    }

    /// Snapshot the current rows.
    pub fn all(&self) -> Vec<Notification> {
        self.rows.lock().unwrap().clone()
    }
}

#[async_trait]
impl NotificationRepository for InMemoryNotificationStore {
    async fn create(
        &self,
        user_id: Uuid,
        notification: &NewNotification,
    ) -> AppResult<Notification> {
        if self.fail_for.lock().unwrap().contains(&user_id) {
            return Err(AppError::database("Failed to create notification"));
        }
        let row = Notification {
            id: Uuid::new_v4(),
            user_id,
            title: notification.title.clone(),
            message: notification.message.clone(),
            kind: notification.kind,
            is_read: false,
            action_url: notification.action_url.clone(),
            related_event_id: notification.related_event_id,
            expires_at: notification.expires_at,
            created_at: Utc::now(),
        };
        self.rows.lock().unwrap().push(row.clone());
        Ok(row)
    }

    async fn find_by_user(&self, user_id: Uuid) -> AppResult<Vec<Notification>> {
        let rows: Vec<Notification> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|n| n.user_id == user_id)
            .cloned()
            .collect();
        Ok(newest_first(rows, |n| n.created_at))
    }

    async fn find_unread(&self, user_id: Uuid) -> AppResult<Vec<Notification>> {
        let rows: Vec<Notification> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|n| n.user_id == user_id && !n.is_read)
            .cloned()
            .collect();
        Ok(newest_first(rows, |n| n.created_at))
    }

    async fn count_unread(&self, user_id: Uuid) -> AppResult<i64> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|n| n.user_id == user_id && !n.is_read)
            .count() as i64)
    }

    async fn find_by_id(&self, notification_id: Uuid) -> AppResult<Option<Notification>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|n| n.id == notification_id)
            .cloned())
    }

    async fn mark_read(&self, notification_id: Uuid) -> AppResult<()> {
        let mut rows = self.rows.lock().unwrap();
        if let Some(row) = rows.iter_mut().find(|n| n.id == notification_id) {
            row.is_read = true;
        }
        Ok(())
    }

    async fn mark_all_read(&self, user_id: Uuid) -> AppResult<u64> {
        let mut rows = self.rows.lock().unwrap();
        let mut updated = 0;
        for row in rows.iter_mut().filter(|n| n.user_id == user_id && !n.is_read) {
            row.is_read = true;
            updated += 1;
        }
        Ok(updated)
    }

    async fn delete(&self, notification_id: Uuid) -> AppResult<()> {
        self.rows.lock().unwrap().retain(|n| n.id != notification_id);
        Ok(())
    }
}

/// In-memory [`SellerNotificationRepository`].
#[derive(Debug, Default)]
pub struct InMemorySellerNotificationStore {
    rows: Mutex<Vec<SellerNotification>>,
    fail_for: Mutex<HashSet<Uuid>>,
}

impl InMemorySellerNotificationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every `create` for this seller fail with a database error.
    pub fn fail_creates_for(&self, user_id: Uuid) {
        self.fail_for.lock().unwrap().insert(user_id);
    }

    /// Snapshot the current rows.
    pub fn all(&self) -> Vec<SellerNotification> {
        self.rows.lock().unwrap().clone()
    }
}

#[async_trait]
impl SellerNotificationRepository for InMemorySellerNotificationStore {
    async fn create(&self, notification: &NewSellerNotification) -> AppResult<SellerNotification> {
        if self.fail_for.lock().unwrap().contains(&notification.user_id) {
            return Err(AppError::database("Failed to create seller notification"));
        }
        let row = SellerNotification {
            id: Uuid::new_v4(),
            user_id: notification.user_id,
            title: notification.title.clone(),
            message: notification.message.clone(),
            kind: notification.kind,
            is_read: false,
            action_url: notification.action_url.clone(),
            product_id: notification.product_id,
            job_id: notification.job_id,
            created_at: Utc::now(),
        };
        self.rows.lock().unwrap().push(row.clone());
        Ok(row)
    }

    async fn find_by_user(&self, user_id: Uuid) -> AppResult<Vec<SellerNotification>> {
        let rows: Vec<SellerNotification> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|n| n.user_id == user_id)
            .cloned()
            .collect();
        Ok(newest_first(rows, |n| n.created_at))
    }

    async fn count_unread(&self, user_id: Uuid) -> AppResult<i64> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|n| n.user_id == user_id && !n.is_read)
            .count() as i64)
    }

    async fn mark_read(&self, user_id: Uuid, notification_id: Uuid) -> AppResult<bool> {
        let mut rows = self.rows.lock().unwrap();
        match rows
            .iter_mut()
            .find(|n| n.id == notification_id && n.user_id == user_id)
        {
            Some(row) => {
                row.is_read = true;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn mark_all_read(&self, user_id: Uuid) -> AppResult<u64> {
        let mut rows = self.rows.lock().unwrap();
        let mut updated = 0;
        for row in rows.iter_mut().filter(|n| n.user_id == user_id && !n.is_read) {
            row.is_read = true;
            updated += 1;
        }
        Ok(updated)
    }
}

/// In-memory [`ProductRepository`].
#[derive(Debug, Default)]
pub struct InMemoryProductStore {
    rows: Mutex<Vec<ProductListing>>,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a listing directly.
    pub fn insert(&self, product: ProductListing) {
        self.rows.lock().unwrap().push(product);
    }

    /// Snapshot the current rows.
    pub fn all(&self) -> Vec<ProductListing> {
        self.rows.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductStore {
    async fn find_available(
        &self,
        search: Option<&str>,
        max_price: Option<i64>,
    ) -> AppResult<Vec<ProductListing>> {
        let needle = search.map(|s| s.to_lowercase());
        let rows: Vec<ProductListing> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.status == ProductStatus::Available)
            .filter(|p| {
                needle
                    .as_deref()
                    .map(|s| p.title.to_lowercase().contains(s))
                    .unwrap_or(true)
            })
            .filter(|p| max_price.map(|max| p.price <= max).unwrap_or(true))
            .cloned()
            .collect();
        Ok(newest_first(rows, |p| p.created_at))
    }

    async fn find_by_seller(&self, seller_id: Uuid) -> AppResult<Vec<ProductListing>> {
        let rows: Vec<ProductListing> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.seller_id == seller_id)
            .cloned()
            .collect();
        Ok(newest_first(rows, |p| p.created_at))
    }

    async fn find_by_id(&self, product_id: Uuid) -> AppResult<Option<ProductListing>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == product_id)
            .cloned())
    }

    async fn create(&self, seller_id: Uuid, product: &NewProduct) -> AppResult<ProductListing> {
        let now = Utc::now();
        let row = ProductListing {
            id: Uuid::new_v4(),
            seller_id,
            title: product.title.clone(),
            description: product.description.clone(),
            price: product.price,
            category: product.category.clone(),
            size: product.size.clone(),
            color: product.color.clone(),
            brand: product.brand.clone(),
            image_url: product.image_url.clone(),
            status: ProductStatus::Available,
            created_at: now,
            updated_at: now,
        };
        self.rows.lock().unwrap().push(row.clone());
        Ok(row)
    }

    async fn update(&self, product_id: Uuid, patch: &ProductPatch) -> AppResult<ProductListing> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|p| p.id == product_id)
            .ok_or_else(|| AppError::not_found("Product not found"))?;
        if let Some(title) = &patch.title {
            row.title = title.clone();
        }
        if let Some(description) = &patch.description {
            row.description = Some(description.clone());
        }
        if let Some(price) = patch.price {
            row.price = price;
        }
        if let Some(category) = &patch.category {
            row.category = Some(category.clone());
        }
        if let Some(size) = &patch.size {
            row.size = Some(size.clone());
        }
        if let Some(color) = &patch.color {
            row.color = Some(color.clone());
        }
        if let Some(brand) = &patch.brand {
            row.brand = Some(brand.clone());
        }
        if let Some(image_url) = &patch.image_url {
            row.image_url = Some(image_url.clone());
        }
        row.updated_at = Utc::now();
        Ok(row.clone())
    }

    async fn delete(&self, product_id: Uuid) -> AppResult<bool> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|p| p.id != product_id);
        Ok(rows.len() < before)
    }

    async fn mark_sold(&self, product_id: Uuid) -> AppResult<bool> {
        let mut rows = self.rows.lock().unwrap();
        match rows
            .iter_mut()
            .find(|p| p.id == product_id && p.status == ProductStatus::Available)
        {
            Some(row) => {
                row.status = ProductStatus::Sold;
                row.updated_at = Utc::now();
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

/// In-memory [`PurchaseRepository`].
#[derive(Debug, Default)]
pub struct InMemoryPurchaseStore {
    rows: Mutex<Vec<PurchaseHistory>>,
}

impl InMemoryPurchaseStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot the current rows.
    pub fn all(&self) -> Vec<PurchaseHistory> {
        self.rows.lock().unwrap().clone()
    }
}

#[async_trait]
impl PurchaseRepository for InMemoryPurchaseStore {
    async fn create(&self, buyer_id: Uuid, purchase: &NewPurchase) -> AppResult<PurchaseHistory> {
        let row = PurchaseHistory {
            id: Uuid::new_v4(),
            buyer_id,
            product_id: purchase.product_id,
            price: purchase.price,
            phone_number: purchase.phone_number.clone(),
            status: PurchaseStatus::Completed,
            purchase_date: Utc::now(),
        };
        self.rows.lock().unwrap().push(row.clone());
        Ok(row)
    }

    async fn find_by_buyer(&self, buyer_id: Uuid) -> AppResult<Vec<PurchaseHistory>> {
        let rows: Vec<PurchaseHistory> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.buyer_id == buyer_id)
            .cloned()
            .collect();
        Ok(newest_first(rows, |p| p.purchase_date))
    }
}

/// In-memory [`WishlistRepository`]. Needs a handle to the product store
/// to resolve saved listings.
#[derive(Debug, Default)]
pub struct InMemoryWishlistStore {
    rows: Mutex<Vec<WishlistItem>>,
    products: Mutex<Vec<ProductListing>>,
}

impl InMemoryWishlistStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mirror a listing so `find_products_by_user` can resolve it.
    pub fn mirror_product(&self, product: ProductListing) {
        self.products.lock().unwrap().push(product);
    }
}

#[async_trait]
impl WishlistRepository for InMemoryWishlistStore {
    async fn find_by_user(&self, user_id: Uuid) -> AppResult<Vec<WishlistItem>> {
        let rows: Vec<WishlistItem> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|w| w.user_id == user_id)
            .cloned()
            .collect();
        Ok(newest_first(rows, |w| w.created_at))
    }

    async fn find_products_by_user(&self, user_id: Uuid) -> AppResult<Vec<ProductListing>> {
        let items = self.find_by_user(user_id).await?;
        let products = self.products.lock().unwrap();
        Ok(items
            .iter()
            .filter_map(|w| products.iter().find(|p| p.id == w.product_id).cloned())
            .collect())
    }

    async fn add(&self, user_id: Uuid, product_id: Uuid) -> AppResult<WishlistItem> {
        let mut rows = self.rows.lock().unwrap();
        if rows
            .iter()
            .any(|w| w.user_id == user_id && w.product_id == product_id)
        {
            return Err(AppError::conflict("Product is already on the wishlist"));
        }
        let row = WishlistItem {
            id: Uuid::new_v4(),
            user_id,
            product_id,
            created_at: Utc::now(),
        };
        rows.push(row.clone());
        Ok(row)
    }

    async fn remove(&self, user_id: Uuid, product_id: Uuid) -> AppResult<bool> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|w| !(w.user_id == user_id && w.product_id == product_id));
        Ok(rows.len() < before)
    }

    async fn contains(&self, user_id: Uuid, product_id: Uuid) -> AppResult<bool> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .any(|w| w.user_id == user_id && w.product_id == product_id))
    }
}

/// In-memory [`JobRepository`].
#[derive(Debug, Default)]
pub struct InMemoryJobStore {
    rows: Mutex<Vec<JobPost>>,
    applications: Mutex<Vec<JobApplication>>,
}

impl InMemoryJobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot the recorded applications.
    pub fn applications(&self) -> Vec<JobApplication> {
        self.applications.lock().unwrap().clone()
    }
}

#[async_trait]
impl JobRepository for InMemoryJobStore {
    async fn find_all(&self) -> AppResult<Vec<JobPost>> {
        let rows = self.rows.lock().unwrap().clone();
        Ok(newest_first(rows, |j| j.created_at))
    }

    async fn find_by_seller(&self, seller_id: Uuid) -> AppResult<Vec<JobPost>> {
        let rows: Vec<JobPost> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|j| j.seller_id == seller_id)
            .cloned()
            .collect();
        Ok(newest_first(rows, |j| j.created_at))
    }

    async fn find_by_id(&self, job_id: Uuid) -> AppResult<Option<JobPost>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|j| j.id == job_id)
            .cloned())
    }

    async fn create(&self, seller_id: Uuid, job: &NewJob) -> AppResult<JobPost> {
        let now = Utc::now();
        let row = JobPost {
            id: Uuid::new_v4(),
            seller_id,
            job_title: job.job_title.clone(),
            job_description: job.job_description.clone(),
            salary: job.salary,
            created_at: now,
            updated_at: now,
        };
        self.rows.lock().unwrap().push(row.clone());
        Ok(row)
    }

    async fn delete(&self, job_id: Uuid) -> AppResult<bool> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|j| j.id != job_id);
        Ok(rows.len() < before)
    }

    async fn create_application(
        &self,
        applicant_id: Uuid,
        application: &NewJobApplication,
    ) -> AppResult<JobApplication> {
        let row = JobApplication {
            id: Uuid::new_v4(),
            job_id: application.job_id,
            applicant_id,
            phone_number: application.phone_number.clone(),
            applied_at: Utc::now(),
        };
        self.applications.lock().unwrap().push(row.clone());
        Ok(row)
    }
}

/// In-memory [`GiveawayRepository`].
#[derive(Debug, Default)]
pub struct InMemoryGiveawayStore {
    rows: Mutex<Vec<GiveawayPost>>,
    claims: Mutex<Vec<GiveawayClaim>>,
}

impl InMemoryGiveawayStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a giveaway directly.
    pub fn insert(&self, giveaway: GiveawayPost) {
        self.rows.lock().unwrap().push(giveaway);
    }

    /// Snapshot the recorded claims.
    pub fn claims(&self) -> Vec<GiveawayClaim> {
        self.claims.lock().unwrap().clone()
    }
}

#[async_trait]
impl GiveawayRepository for InMemoryGiveawayStore {
    async fn create(&self, seller_id: Uuid, giveaway: &NewGiveaway) -> AppResult<GiveawayPost> {
        let now = Utc::now();
        let row = GiveawayPost {
            id: Uuid::new_v4(),
            seller_id,
            title: giveaway.title.clone(),
            description: giveaway.description.clone(),
            image_url: giveaway.image_url.clone(),
            status: GiveawayStatus::Available,
            created_at: now,
            updated_at: now,
        };
        self.rows.lock().unwrap().push(row.clone());
        Ok(row)
    }

    async fn find_by_seller(&self, seller_id: Uuid) -> AppResult<Vec<GiveawayPost>> {
        let rows: Vec<GiveawayPost> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|g| g.seller_id == seller_id)
            .cloned()
            .collect();
        Ok(newest_first(rows, |g| g.created_at))
    }

    async fn find_available(&self) -> AppResult<Vec<GiveawayPost>> {
        let rows: Vec<GiveawayPost> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|g| g.status == GiveawayStatus::Available)
            .cloned()
            .collect();
        Ok(newest_first(rows, |g| g.created_at))
    }

    async fn find_by_id(&self, giveaway_id: Uuid) -> AppResult<Option<GiveawayPost>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|g| g.id == giveaway_id)
            .cloned())
    }

    async fn delete(&self, giveaway_id: Uuid) -> AppResult<bool> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|g| g.id != giveaway_id);
        Ok(rows.len() < before)
    }

    async fn mark_claimed(&self, giveaway_id: Uuid) -> AppResult<bool> {
        let mut rows = self.rows.lock().unwrap();
        match rows
            .iter_mut()
            .find(|g| g.id == giveaway_id && g.status == GiveawayStatus::Available)
        {
            Some(row) => {
                row.status = GiveawayStatus::Claimed;
                row.updated_at = Utc::now();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn create_claim(
        &self,
        claimer_id: Uuid,
        claim: &NewGiveawayClaim,
    ) -> AppResult<GiveawayClaim> {
        let row = GiveawayClaim {
            id: Uuid::new_v4(),
            giveaway_id: claim.giveaway_id,
            claimer_id,
            claimer_phone_number: claim.claimer_phone_number.clone(),
            claimed_at: Utc::now(),
        };
        self.claims.lock().unwrap().push(row.clone());
        Ok(row)
    }
}
