//! Integration tests for products, purchases, wishlist, and jobs.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;
use uuid::Uuid;

use campushub_entity::marketplace::ProductListing;

async fn list_product(app: &helpers::TestApp, token: &str, title: &str, price: i64) -> Uuid {
    let response = app
        .request(
            "POST",
            "/api/products",
            Some(json!({
                "title": title,
                "description": "Barely used",
                "price": price,
                "category": "books",
            })),
            Some(token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    response.id()
}

#[tokio::test]
async fn test_browse_products_with_filters() {
    let app = helpers::TestApp::new();
    let seller = helpers::member_token(Uuid::new_v4());
    let shopper = helpers::member_token(Uuid::new_v4());

    list_product(&app, &seller, "Calculus textbook", 400).await;
    list_product(&app, &seller, "Desk lamp", 150).await;

    let all = app.request("GET", "/api/products", None, Some(&shopper)).await;
    assert_eq!(all.data().as_array().unwrap().len(), 2);

    let searched = app
        .request("GET", "/api/products?search=textbook", None, Some(&shopper))
        .await;
    let hits = searched.data().as_array().unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0]["title"], "Calculus textbook");

    let capped = app
        .request("GET", "/api/products?max_price=200", None, Some(&shopper))
        .await;
    assert_eq!(capped.data().as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_purchase_flow_notifies_seller() {
    let app = helpers::TestApp::new();
    let seller_id = Uuid::new_v4();
    let seller = helpers::member_token(seller_id);
    let buyer = helpers::member_token(Uuid::new_v4());

    let product_id = list_product(&app, &seller, "Mini fridge", 500).await;

    let response = app
        .request(
            "POST",
            &format!("/api/products/{product_id}/purchase"),
            Some(json!({ "phone_number": "555-0100" })),
            Some(&buyer),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    assert_eq!(response.data()["price"], 500);
    assert_eq!(response.data()["phone_number"], "555-0100");

    // The listing flips to sold.
    let product = app
        .request(
            "GET",
            &format!("/api/products/{product_id}"),
            None,
            Some(&buyer),
        )
        .await;
    assert_eq!(product.data()["status"], "sold");

    // Buyer sees it in their history.
    let history = app.request("GET", "/api/purchases", None, Some(&buyer)).await;
    assert_eq!(history.data().as_array().unwrap().len(), 1);

    // Seller gets an inbox entry.
    let inbox = app
        .request("GET", "/api/seller-notifications", None, Some(&seller))
        .await;
    let entries = inbox.data().as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["kind"], "product_purchase");
    assert_eq!(entries[0]["title"], "Product Sold!");
    assert_eq!(entries[0]["product_id"], product_id.to_string());
}

#[tokio::test]
async fn test_cannot_purchase_own_product() {
    let app = helpers::TestApp::new();
    let seller = helpers::member_token(Uuid::new_v4());

    let product_id = list_product(&app, &seller, "Skateboard", 80).await;

    let response = app
        .request(
            "POST",
            &format!("/api/products/{product_id}/purchase"),
            Some(json!({ "phone_number": "555-0101" })),
            Some(&seller),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "You cannot purchase your own product");
}

#[tokio::test]
async fn test_cannot_purchase_sold_product() {
    let app = helpers::TestApp::new();
    let seller = helpers::member_token(Uuid::new_v4());
    let first_buyer = helpers::member_token(Uuid::new_v4());
    let second_buyer = helpers::member_token(Uuid::new_v4());

    let product_id = list_product(&app, &seller, "Bicycle", 900).await;

    let response = app
        .request(
            "POST",
            &format!("/api/products/{product_id}/purchase"),
            Some(json!({ "phone_number": "555-0102" })),
            Some(&first_buyer),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app
        .request(
            "POST",
            &format!("/api/products/{product_id}/purchase"),
            Some(json!({ "phone_number": "555-0103" })),
            Some(&second_buyer),
        )
        .await;
    assert_eq!(response.status, StatusCode::CONFLICT);

    // No second purchase row and no second inbox entry.
    assert_eq!(app.purchases.all().len(), 1);
    assert_eq!(app.seller_inbox.all().len(), 1);
}

#[tokio::test]
async fn test_only_owner_mutates_product() {
    let app = helpers::TestApp::new();
    let owner = helpers::member_token(Uuid::new_v4());
    let other = helpers::member_token(Uuid::new_v4());

    let product_id = list_product(&app, &owner, "Headphones", 120).await;

    let response = app
        .request(
            "PUT",
            &format!("/api/products/{product_id}"),
            Some(json!({ "price": 60 })),
            Some(&other),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    let response = app
        .request(
            "DELETE",
            &format!("/api/products/{product_id}"),
            None,
            Some(&other),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    let response = app
        .request(
            "PUT",
            &format!("/api/products/{product_id}"),
            Some(json!({ "price": 60 })),
            Some(&owner),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["price"], 60);
}

#[tokio::test]
async fn test_wishlist_round_trip() {
    let app = helpers::TestApp::new();
    let seller = helpers::member_token(Uuid::new_v4());
    let shopper = helpers::member_token(Uuid::new_v4());

    let product_id = list_product(&app, &seller, "Coffee maker", 200).await;

    // Mirror the listing into the wishlist store's product view.
    let product_json = app
        .request(
            "GET",
            &format!("/api/products/{product_id}"),
            None,
            Some(&shopper),
        )
        .await;
    let product: ProductListing =
        serde_json::from_value(product_json.data().clone()).unwrap();
    app.wishlist.mirror_product(product);

    let response = app
        .request(
            "POST",
            &format!("/api/wishlist/{product_id}"),
            None,
            Some(&shopper),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let duplicate = app
        .request(
            "POST",
            &format!("/api/wishlist/{product_id}"),
            None,
            Some(&shopper),
        )
        .await;
    assert_eq!(duplicate.status, StatusCode::CONFLICT);

    let wishlist = app.request("GET", "/api/wishlist", None, Some(&shopper)).await;
    let saved = wishlist.data().as_array().unwrap();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0]["id"], product_id.to_string());

    let response = app
        .request(
            "DELETE",
            &format!("/api/wishlist/{product_id}"),
            None,
            Some(&shopper),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let gone = app
        .request(
            "DELETE",
            &format!("/api/wishlist/{product_id}"),
            None,
            Some(&shopper),
        )
        .await;
    assert_eq!(gone.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_wishlist_rejects_unknown_product() {
    let app = helpers::TestApp::new();
    let shopper = helpers::member_token(Uuid::new_v4());

    let response = app
        .request(
            "POST",
            &format!("/api/wishlist/{}", Uuid::new_v4()),
            None,
            Some(&shopper),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_job_application_notifies_poster() {
    let app = helpers::TestApp::new();
    let poster = helpers::member_token(Uuid::new_v4());
    let applicant = helpers::member_token(Uuid::new_v4());

    let created = app
        .request(
            "POST",
            "/api/jobs",
            Some(json!({
                "job_title": "Library assistant",
                "job_description": "Evening shifts at the front desk.",
                "salary": 15,
            })),
            Some(&poster),
        )
        .await;
    assert_eq!(created.status, StatusCode::OK);
    let job_id = created.id();

    let response = app
        .request(
            "POST",
            &format!("/api/jobs/{job_id}/apply"),
            Some(json!({ "phone_number": "555-0104" })),
            Some(&applicant),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["job_id"], job_id.to_string());

    let inbox = app
        .request("GET", "/api/seller-notifications", None, Some(&poster))
        .await;
    let entries = inbox.data().as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["kind"], "job_application");
    assert_eq!(entries[0]["job_id"], job_id.to_string());
}

#[tokio::test]
async fn test_get_job_by_id() {
    let app = helpers::TestApp::new();
    let poster = helpers::member_token(Uuid::new_v4());
    let reader = helpers::member_token(Uuid::new_v4());

    let created = app
        .request(
            "POST",
            "/api/jobs",
            Some(json!({
                "job_title": "Lab assistant",
                "job_description": "Prep sessions on weekdays.",
            })),
            Some(&poster),
        )
        .await;
    let job_id = created.id();

    let response = app
        .request("GET", &format!("/api/jobs/{job_id}"), None, Some(&reader))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["job_title"], "Lab assistant");

    let missing = app
        .request(
            "GET",
            &format!("/api/jobs/{}", Uuid::new_v4()),
            None,
            Some(&reader),
        )
        .await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_cannot_apply_to_own_job() {
    let app = helpers::TestApp::new();
    let poster = helpers::member_token(Uuid::new_v4());

    let created = app
        .request(
            "POST",
            "/api/jobs",
            Some(json!({
                "job_title": "Tutor",
                "job_description": "Intro stats tutoring.",
            })),
            Some(&poster),
        )
        .await;
    let job_id = created.id();

    let response = app
        .request(
            "POST",
            &format!("/api/jobs/{job_id}/apply"),
            Some(json!({ "phone_number": "555-0105" })),
            Some(&poster),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_seller_inbox_read_state() {
    let app = helpers::TestApp::new();
    let seller = helpers::member_token(Uuid::new_v4());
    let buyer = helpers::member_token(Uuid::new_v4());

    let product_id = list_product(&app, &seller, "Monitor", 300).await;
    app.request(
        "POST",
        &format!("/api/products/{product_id}/purchase"),
        Some(json!({ "phone_number": "555-0106" })),
        Some(&buyer),
    )
    .await;

    let count = app
        .request(
            "GET",
            "/api/seller-notifications/unread-count",
            None,
            Some(&seller),
        )
        .await;
    assert_eq!(count.data()["count"], 1);

    // Another user cannot flip the seller's read flag.
    let inbox = app
        .request("GET", "/api/seller-notifications", None, Some(&seller))
        .await;
    let notification_id = inbox.data()[0]["id"].as_str().unwrap().to_string();
    let response = app
        .request(
            "PUT",
            &format!("/api/seller-notifications/{notification_id}/read"),
            None,
            Some(&buyer),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let count = app
        .request(
            "GET",
            "/api/seller-notifications/unread-count",
            None,
            Some(&seller),
        )
        .await;
    assert_eq!(count.data()["count"], 1);

    let response = app
        .request(
            "PUT",
            "/api/seller-notifications/read-all",
            None,
            Some(&seller),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let count = app
        .request(
            "GET",
            "/api/seller-notifications/unread-count",
            None,
            Some(&seller),
        )
        .await;
    assert_eq!(count.data()["count"], 0);
}
