//! Cart operations and the open/close signals, through the router.

use axum::http::StatusCode;
use sweet_treats_integration_tests::{TestClient, test_config};

#[tokio::test]
async fn test_add_updates_badge() {
    let mut client = TestClient::new(test_config());

    let resp = client.post("/cart/add", &[("item_id", "1")]).await;
    assert_eq!(resp.status, StatusCode::OK);
    assert!(resp.triggers().contains(&"cart-updated".to_string()));
    assert_eq!(resp.body.trim(), "1");

    client.post("/cart/add", &[("item_id", "1")]).await;
    client.post("/cart/add", &[("item_id", "2")]).await;
    let resp = client.get("/cart/count").await;
    assert_eq!(resp.body.trim(), "3");
}

#[tokio::test]
async fn test_carts_are_per_browser() {
    let mut alice = TestClient::new(test_config());
    alice.post("/cart/add", &[("item_id", "1")]).await;

    let mut bob = alice.fresh_browser();
    assert_eq!(bob.get("/cart/count").await.body.trim(), "0");
    assert_eq!(alice.get("/cart/count").await.body.trim(), "1");
}

#[tokio::test]
async fn test_unknown_item_is_not_found() {
    let mut client = TestClient::new(test_config());
    let resp = client.post("/cart/add", &[("item_id", "9999")]).await;
    assert_eq!(resp.status, StatusCode::NOT_FOUND);
    assert_eq!(client.get("/cart/count").await.body.trim(), "0");
}

#[tokio::test]
async fn test_order_opens_cart_with_item() {
    let mut client = TestClient::new(test_config());

    let resp = client.post("/cart/order", &[("item_id", "3")]).await;
    assert_eq!(resp.status, StatusCode::OK);
    assert!(resp.body.contains("role=\"dialog\""));
    assert!(resp.body.contains("Your Cart"));
    let triggers = resp.triggers();
    assert!(triggers.contains(&"cart-updated".to_string()));
    assert!(triggers.contains(&"scroll-locked".to_string()));

    assert_eq!(client.get("/cart/count").await.body.trim(), "1");
}

#[tokio::test]
async fn test_update_and_remove() {
    let mut client = TestClient::new(test_config());
    client.post("/cart/order", &[("item_id", "1")]).await;
    client.post("/cart/add", &[("item_id", "2")]).await;

    client.post("/cart/update", &[("item_id", "1"), ("quantity", "4")]).await;
    assert_eq!(client.get("/cart/count").await.body.trim(), "5");

    // quantity zero drops the line
    client.post("/cart/update", &[("item_id", "1"), ("quantity", "0")]).await;
    assert_eq!(client.get("/cart/count").await.body.trim(), "1");

    // and so does a negative one
    client.post("/cart/add", &[("item_id", "3")]).await;
    let resp = client.post("/cart/update", &[("item_id", "3"), ("quantity", "-1")]).await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(client.get("/cart/count").await.body.trim(), "1");

    let resp = client.post("/cart/remove", &[("item_id", "2")]).await;
    assert!(resp.body.contains("Your cart is empty"));
    assert!(resp.body.contains("Browse Menu"));
    assert_eq!(client.get("/cart/count").await.body.trim(), "0");
}

#[tokio::test]
async fn test_open_and_close_signals() {
    let mut client = TestClient::new(test_config());

    let resp = client.post("/cart/open", &[("signal", "open-order-modal")]).await;
    assert_eq!(resp.status, StatusCode::OK);
    assert!(resp.body.contains("role=\"dialog\""));

    let resp = client.post("/cart/close", &[]).await;
    assert!(!resp.body.contains("role=\"dialog\""));
    assert!(resp.triggers().contains(&"scroll-unlocked".to_string()));

    let resp = client.post("/cart/open", &[]).await;
    assert!(resp.body.contains("role=\"dialog\""));

    let resp = client.post("/cart/open", &[("signal", "add-to-order")]).await;
    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_show_reflects_state() {
    let mut client = TestClient::new(test_config());
    assert!(!client.get("/cart").await.body.contains("role=\"dialog\""));

    client.post("/cart/open", &[]).await;
    assert!(client.get("/cart").await.body.contains("Your Cart"));
}
