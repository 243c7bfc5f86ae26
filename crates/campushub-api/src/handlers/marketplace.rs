//! Product, purchase, and wishlist handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use uuid::Uuid;

use campushub_entity::marketplace::{ProductListing, PurchaseHistory, WishlistItem};

use crate::dto::request::{
    ContactRequest, CreateProductRequest, ProductListQuery, UpdateProductRequest, validated,
};
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/products
pub async fn list_products(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(query): Query<ProductListQuery>,
) -> Result<Json<ApiResponse<Vec<ProductListing>>>, ApiError> {
    let products = state
        .marketplace_service
        .browse_products(query.search.as_deref(), query.max_price)
        .await?;
    Ok(Json(ApiResponse::ok(products)))
}

/// GET /api/products/mine
pub async fn my_products(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<ProductListing>>>, ApiError> {
    let products = state.marketplace_service.my_products(&auth).await?;
    Ok(Json(ApiResponse::ok(products)))
}

/// GET /api/products/{id}
pub async fn get_product(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<ProductListing>>, ApiError> {
    let product = state.marketplace_service.get_product(id).await?;
    Ok(Json(ApiResponse::ok(product)))
}

/// POST /api/products
pub async fn create_product(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(body): Json<CreateProductRequest>,
) -> Result<Json<ApiResponse<ProductListing>>, ApiError> {
    let body = validated(body)?;
    let product = state
        .marketplace_service
        .create_product(&auth, body.into())
        .await?;
    Ok(Json(ApiResponse::ok(product)))
}

/// PUT /api/products/{id}
pub async fn update_product(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateProductRequest>,
) -> Result<Json<ApiResponse<ProductListing>>, ApiError> {
    let product = state
        .marketplace_service
        .update_product(&auth, id, body.into())
        .await?;
    Ok(Json(ApiResponse::ok(product)))
}

/// DELETE /api/products/{id}
pub async fn delete_product(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.marketplace_service.delete_product(&auth, id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new(
        "Product deleted",
    ))))
}

/// POST /api/products/{id}/purchase
pub async fn purchase_product(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(body): Json<ContactRequest>,
) -> Result<Json<ApiResponse<PurchaseHistory>>, ApiError> {
    let body = validated(body)?;
    let purchase = state
        .marketplace_service
        .purchase_product(&auth, id, &body.phone_number)
        .await?;
    Ok(Json(ApiResponse::ok(purchase)))
}

/// GET /api/purchases
pub async fn purchase_history(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<PurchaseHistory>>>, ApiError> {
    let purchases = state.marketplace_service.purchase_history(&auth).await?;
    Ok(Json(ApiResponse::ok(purchases)))
}

/// GET /api/wishlist
pub async fn my_wishlist(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<ProductListing>>>, ApiError> {
    let products = state.marketplace_service.my_wishlist(&auth).await?;
    Ok(Json(ApiResponse::ok(products)))
}

/// POST /api/wishlist/{product_id}
pub async fn add_to_wishlist(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(product_id): Path<Uuid>,
) -> Result<Json<ApiResponse<WishlistItem>>, ApiError> {
    let item = state
        .marketplace_service
        .add_to_wishlist(&auth, product_id)
        .await?;
    Ok(Json(ApiResponse::ok(item)))
}

/// DELETE /api/wishlist/{product_id}
pub async fn remove_from_wishlist(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(product_id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state
        .marketplace_service
        .remove_from_wishlist(&auth, product_id)
        .await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new(
        "Removed from wishlist",
    ))))
}
