//! Gallery viewer and video player, through the router.

use axum::http::StatusCode;
use sweet_treats_integration_tests::{TestClient, test_config};

#[tokio::test]
async fn test_gallery_tabs() {
    let mut client = TestClient::new(test_config());
    let resp = client.get("/gallery?category=cakes").await;
    assert_eq!(resp.status, StatusCode::OK);
    assert!(resp.body.contains("/gallery/view?category=cakes&index=0"));

    let resp = client.get("/gallery?category=sushi").await;
    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_viewer_keyboard() {
    let mut client = TestClient::new(test_config());

    let resp = client.get("/gallery/view?category=all&index=0").await;
    assert_eq!(resp.status, StatusCode::OK);
    assert!(resp.body.contains("data-gallery-viewer"));
    assert!(resp.body.contains("1 / "));
    assert!(resp.triggers().contains(&"scroll-locked".to_string()));

    let resp = client.post("/gallery/key", &[("key", "ArrowRight")]).await;
    assert!(resp.body.contains("2 / "));

    let resp = client.post("/gallery/key", &[("key", "ArrowLeft")]).await;
    assert!(resp.body.contains("1 / "));

    let resp = client.post("/gallery/key", &[("key", "f")]).await;
    assert!(resp.body.contains("viewer fullscreen"));

    // unknown keys change nothing
    let resp = client.post("/gallery/key", &[("key", "q")]).await;
    assert!(resp.body.contains("data-gallery-viewer"));

    let resp = client.post("/gallery/key", &[("key", "Escape")]).await;
    assert!(!resp.body.contains("data-gallery-viewer"));
    assert!(resp.triggers().contains(&"scroll-unlocked".to_string()));
}

#[tokio::test]
async fn test_viewer_and_cart_share_scroll_lock() {
    let mut client = TestClient::new(test_config());
    client.get("/gallery/view?index=0").await;
    client.post("/cart/open", &[]).await;

    // the cart still holds the page after the viewer closes
    let resp = client.post("/gallery/close", &[]).await;
    assert!(resp.triggers().contains(&"scroll-locked".to_string()));

    let resp = client.post("/cart/close", &[]).await;
    assert!(resp.triggers().contains(&"scroll-unlocked".to_string()));
}

#[tokio::test]
async fn test_video_player_controls() {
    let mut client = TestClient::new(test_config());

    let resp = client.post("/videos/1/play", &[]).await;
    assert_eq!(resp.status, StatusCode::OK);
    assert!(resp.body.contains("<video"));
    assert!(resp.body.contains(">Pause<"));

    let resp = client.post("/videos/player/play", &[]).await;
    assert!(resp.body.contains(">Play<"));

    let resp = client.post("/videos/player/mute", &[]).await;
    assert!(resp.body.contains(">Unmute<"));

    let resp = client.post("/videos/player/rewind", &[]).await;
    assert_eq!(resp.status, StatusCode::NOT_FOUND);

    let resp = client.post("/videos/player/close", &[]).await;
    assert!(!resp.body.contains("<video"));

    let resp = client.post("/videos/999/play", &[]).await;
    assert_eq!(resp.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_video_tabs_keep_player() {
    let mut client = TestClient::new(test_config());
    client.post("/videos/3/play", &[]).await;

    let resp = client.get("/videos?tab=tiktok").await;
    assert_eq!(resp.status, StatusCode::OK);
    assert!(resp.body.contains("https://www.tiktok.com/embed/v2/"));

    let resp = client.get("/videos?tab=podcasts").await;
    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
}
