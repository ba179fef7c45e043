//! Cart and favorites semantics over HTTP.

use axum::http::{Method, StatusCode};
use serde_json::json;

use tiffin_integration_tests::{
    SessionCookie, TestHarness, complete_profile, menu_item, register,
};

async fn signed_in(harness: &TestHarness) -> SessionCookie {
    let mut session = SessionCookie::new();
    register(harness, &mut session, "asha@example.com").await;
    complete_profile(harness, &mut session).await;
    session
}

#[tokio::test]
async fn test_repeated_add_increments_quantity() {
    let harness = TestHarness::new();
    let mut session = signed_in(&harness).await;

    for _ in 0..3 {
        let resp = harness
            .storefront(
                &mut session,
                Method::POST,
                "/cart/add",
                Some(menu_item(1, "pizza", "Margherita", "100")),
            )
            .await;
        assert_eq!(resp.status, StatusCode::OK);
    }

    let cart = harness
        .storefront(&mut session, Method::GET, "/cart", None)
        .await;
    assert_eq!(cart.body["items"].as_array().map(Vec::len), Some(1));
    assert_eq!(cart.body["items"][0]["quantity"], 3);
    assert_eq!(cart.body["unit_count"], 3);
}

#[tokio::test]
async fn test_same_id_across_categories_is_distinct() {
    let harness = TestHarness::new();
    let mut session = signed_in(&harness).await;

    harness
        .storefront(
            &mut session,
            Method::POST,
            "/cart/add",
            Some(menu_item(1, "pizza", "Margherita", "100")),
        )
        .await;
    let resp = harness
        .storefront(
            &mut session,
            Method::POST,
            "/cart/add",
            Some(menu_item(1, "burger", "Classic", "80")),
        )
        .await;

    assert_eq!(resp.body["items"].as_array().map(Vec::len), Some(2));
    assert_eq!(resp.body["unit_count"], 2);
}

#[tokio::test]
async fn test_totals_with_percentage_discount() {
    let harness = TestHarness::new();
    let mut session = signed_in(&harness).await;

    let mut item = menu_item(1, "pizza", "Margherita", "100");
    item["discount_type"] = json!("percentage");
    item["discount_value"] = json!("20");
    harness
        .storefront(&mut session, Method::POST, "/cart/add", Some(item))
        .await;

    let resp = harness
        .storefront(
            &mut session,
            Method::POST,
            "/cart/update",
            Some(json!({ "item_id": 1, "category": "pizza", "quantity": 3 })),
        )
        .await;

    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.body["subtotal"], "240.00");
    assert_eq!(resp.body["tax"], "12.00");
    assert_eq!(resp.body["total"], "252.00");
}

#[tokio::test]
async fn test_zero_quantity_update_rejected() {
    let harness = TestHarness::new();
    let mut session = signed_in(&harness).await;

    harness
        .storefront(
            &mut session,
            Method::POST,
            "/cart/add",
            Some(menu_item(1, "pizza", "Margherita", "100")),
        )
        .await;

    let resp = harness
        .storefront(
            &mut session,
            Method::POST,
            "/cart/update",
            Some(json!({ "item_id": 1, "category": "pizza", "quantity": 0 })),
        )
        .await;
    assert_eq!(resp.status, StatusCode::UNPROCESSABLE_ENTITY);

    // Cart unchanged by the failed update.
    let cart = harness
        .storefront(&mut session, Method::GET, "/cart", None)
        .await;
    assert_eq!(cart.body["items"][0]["quantity"], 1);
}

#[tokio::test]
async fn test_update_unknown_item_rejected() {
    let harness = TestHarness::new();
    let mut session = signed_in(&harness).await;

    let resp = harness
        .storefront(
            &mut session,
            Method::POST,
            "/cart/update",
            Some(json!({ "item_id": 404, "category": "pizza", "quantity": 2 })),
        )
        .await;
    assert_eq!(resp.status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_remove_is_unconditional() {
    let harness = TestHarness::new();
    let mut session = signed_in(&harness).await;

    harness
        .storefront(
            &mut session,
            Method::POST,
            "/cart/add",
            Some(menu_item(1, "pizza", "Margherita", "100")),
        )
        .await;
    let resp = harness
        .storefront(
            &mut session,
            Method::POST,
            "/cart/remove",
            Some(json!({ "item_id": 1, "category": "pizza" })),
        )
        .await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.body["unit_count"], 0);

    // Removing an absent key is a no-op, not an error.
    let resp = harness
        .storefront(
            &mut session,
            Method::POST,
            "/cart/remove",
            Some(json!({ "item_id": 1, "category": "pizza" })),
        )
        .await;
    assert_eq!(resp.status, StatusCode::OK);
}

#[tokio::test]
async fn test_favorites_toggle_involution() {
    let harness = TestHarness::new();
    let mut session = signed_in(&harness).await;

    let item = json!({
        "item_id": 7,
        "category": "dessert",
        "name": "Gulab Jamun",
        "unit_price": "60",
        "image": "/images/gulab-jamun.jpg",
    });

    let on = harness
        .storefront(&mut session, Method::POST, "/favorites/toggle", Some(item.clone()))
        .await;
    assert_eq!(on.status, StatusCode::OK);
    assert_eq!(on.body["favorited"], true);
    assert_eq!(on.body["count"], 1);

    let off = harness
        .storefront(&mut session, Method::POST, "/favorites/toggle", Some(item))
        .await;
    assert_eq!(off.body["favorited"], false);
    assert_eq!(off.body["count"], 0);

    let list = harness
        .storefront(&mut session, Method::GET, "/favorites", None)
        .await;
    assert_eq!(list.body["items"].as_array().map(Vec::len), Some(0));
}
