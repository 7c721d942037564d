//! The checkout wizard end to end: step guards, simulated payment and
//! completion. The payment delay runs on tokio's paused clock.

use std::time::Duration;

use axum::http::StatusCode;
use sweet_treats_integration_tests::{TestClient, TestResponse, test_config};

const DELIVERY: &[(&str, &str)] = &[
    ("name", "Amina Wanjiru"),
    ("email", "amina@example.com"),
    ("phone", "0712345678"),
    ("address", "12 Kenyatta Highway"),
    ("city", "Thika"),
    ("postal_code", "01000"),
];

const MPESA: &[(&str, &str)] = &[("method", "mpesa"), ("phone_number", "0712345678")];

/// Add an item, open the cart and fill in delivery, leaving the shopper on
/// the payment step.
async fn to_payment_step(client: &mut TestClient) -> TestResponse {
    client.post("/cart/order", &[("item_id", "1")]).await;
    let resp = client.post("/checkout/delivery", &[]).await;
    assert!(resp.body.contains("Delivery Information"));
    client.post("/checkout/payment", DELIVERY).await
}

#[tokio::test]
async fn test_totals_match_on_every_step() {
    let mut client = TestClient::new(test_config());
    client.post("/cart/order", &[("item_id", "1")]).await;
    client.post("/cart/add", &[("item_id", "2")]).await;
    client.post("/cart/add", &[("item_id", "2")]).await;

    let cart = client.get("/cart").await;
    let delivery = client.post("/checkout/delivery", &[]).await;
    let payment = client.post("/checkout/payment", DELIVERY).await;
    assert!(payment.body.contains("Payment Method"));

    for (step, resp) in [("cart", cart), ("delivery", delivery), ("payment", payment)] {
        for amount in ["KSh 2,750", "KSh 200", "KSh 440", "KSh 3,390"] {
            assert!(resp.body.contains(amount), "{step} step is missing {amount}");
        }
    }
}

#[tokio::test(start_paused = true)]
async fn test_cart_frozen_while_processing() {
    let mut client = TestClient::new(test_config());
    to_payment_step(&mut client).await;
    client.post("/checkout/pay", MPESA).await;

    let resp = client.post("/cart/add", &[("item_id", "2")]).await;
    assert_eq!(resp.status, StatusCode::CONFLICT);
    let resp = client
        .post("/cart/update", &[("item_id", "1"), ("quantity", "3")])
        .await;
    assert_eq!(resp.status, StatusCode::CONFLICT);
    let resp = client.post("/cart/remove", &[("item_id", "1")]).await;
    assert_eq!(resp.status, StatusCode::CONFLICT);
    assert_eq!(client.get("/cart/count").await.body.trim(), "1");

    tokio::time::sleep(Duration::from_secs(1)).await;
    let resp = client.get("/checkout/status").await;
    assert!(resp.body.contains("Thank you for your order!"));
    // the charged total is the total of what is in the cart
    assert!(resp.body.contains("KSh 1,186"));
}

#[tokio::test]
async fn test_continue_buttons_start_disabled() {
    let mut client = TestClient::new(test_config());
    client.post("/cart/order", &[("item_id", "1")]).await;
    let resp = client.post("/checkout/delivery", &[]).await;
    assert!(resp.body.contains("data-gated disabled"));

    let resp = client.post("/checkout/payment", DELIVERY).await;
    // M-Pesa is preselected and still needs a number
    assert!(resp.body.contains("data-gated disabled"));
}

#[tokio::test]
async fn test_closed_cart_refuses_checkout() {
    let mut client = TestClient::new(test_config());
    client.post("/cart/add", &[("item_id", "1")]).await;
    let resp = client.post("/checkout/delivery", &[]).await;
    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_empty_cart_stays_on_cart_step() {
    let mut client = TestClient::new(test_config());
    client.post("/cart/open", &[]).await;

    let resp = client.post("/checkout/delivery", &[]).await;
    assert_eq!(resp.status, StatusCode::OK);
    assert!(resp.body.contains("Your cart is empty"));
    assert!(resp.body.contains("Your Cart"));
}

#[tokio::test]
async fn test_incomplete_delivery_keeps_input() {
    let mut client = TestClient::new(test_config());
    client.post("/cart/order", &[("item_id", "1")]).await;
    client.post("/checkout/delivery", &[]).await;

    let resp = client
        .post("/checkout/payment", &[("name", "Amina Wanjiru"), ("city", "  ")])
        .await;
    assert_eq!(resp.status, StatusCode::OK);
    assert!(resp.body.contains("Please fill in: email, phone number, delivery address, city, postal code"));
    assert!(resp.body.contains("value=\"Amina Wanjiru\""));
    assert!(resp.body.contains("Delivery Information"));
}

#[tokio::test]
async fn test_back_walks_the_steps() {
    let mut client = TestClient::new(test_config());
    let resp = to_payment_step(&mut client).await;
    assert!(resp.body.contains("Payment Method"));

    let resp = client.post("/checkout/back", &[]).await;
    assert!(resp.body.contains("Delivery Information"));
    // entered details survive the trip back
    assert!(resp.body.contains("value=\"12 Kenyatta Highway\""));

    let resp = client.post("/checkout/back", &[]).await;
    assert!(resp.body.contains("Your Cart"));

    let resp = client.post("/checkout/back", &[]).await;
    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_payment_needs_method_fields() {
    let mut client = TestClient::new(test_config());
    to_payment_step(&mut client).await;

    let resp = client.post("/checkout/pay", &[("method", "card"), ("card_number", "4242")]).await;
    assert_eq!(resp.status, StatusCode::OK);
    assert!(resp.body.contains("Please fill in: name on card, expiry date, CVV"));
    assert!(!resp.body.contains("Processing your payment"));
}

#[tokio::test(start_paused = true)]
async fn test_full_checkout() {
    let mut client = TestClient::new(test_config());
    to_payment_step(&mut client).await;

    let resp = client.post("/checkout/pay", MPESA).await;
    assert_eq!(resp.status, StatusCode::OK);
    assert!(resp.body.contains("Processing your payment"));
    assert!(resp.body.contains("hx-get=\"/checkout/status\""));

    // a second submit while processing is refused
    let resp = client.post("/checkout/pay", MPESA).await;
    assert_eq!(resp.status, StatusCode::CONFLICT);
    let resp = client.post("/checkout/back", &[]).await;
    assert_eq!(resp.status, StatusCode::CONFLICT);

    tokio::time::sleep(Duration::from_secs(1)).await;

    let resp = client.get("/checkout/status").await;
    assert!(resp.body.contains("Thank you for your order!"));
    assert!(resp.body.contains("M-Pesa"));
    assert!(resp.body.contains("Order Number"));

    let resp = client.post("/checkout/complete", &[]).await;
    assert_eq!(resp.status, StatusCode::OK);
    assert!(!resp.body.contains("role=\"dialog\""));
    assert!(resp.triggers().contains(&"scroll-unlocked".to_string()));
    assert_eq!(client.get("/cart/count").await.body.trim(), "0");
}

#[tokio::test(start_paused = true)]
async fn test_closing_abandons_payment() {
    let mut client = TestClient::new(test_config());
    to_payment_step(&mut client).await;
    client.post("/checkout/pay", MPESA).await;

    client.post("/cart/close", &[]).await;
    tokio::time::sleep(Duration::from_secs(1)).await;

    // reopening starts over at the cart; the item is still there
    let resp = client.post("/cart/open", &[]).await;
    assert!(resp.body.contains("Your Cart"));
    assert!(!resp.body.contains("Thank you for your order!"));
    assert_eq!(client.get("/cart/count").await.body.trim(), "1");
}

#[tokio::test(start_paused = true)]
async fn test_closing_confirmation_finishes_order() {
    let mut client = TestClient::new(test_config());
    to_payment_step(&mut client).await;
    client.post("/checkout/pay", &[("method", "cash")]).await;
    tokio::time::sleep(Duration::from_secs(1)).await;
    assert!(client.get("/checkout/status").await.body.contains("Cash on Delivery"));

    client.post("/cart/close", &[]).await;
    assert_eq!(client.get("/cart/count").await.body.trim(), "0");
}

#[tokio::test]
async fn test_complete_before_confirmation_refused() {
    let mut client = TestClient::new(test_config());
    to_payment_step(&mut client).await;
    let resp = client.post("/checkout/complete", &[]).await;
    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
    assert_eq!(client.get("/cart/count").await.body.trim(), "1");
}
