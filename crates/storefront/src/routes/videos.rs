//! Video section route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Path, Query, State};
use serde::Deserialize;
use sweet_treats_core::{CategoryFilter, VideoId, VideoKind};
use tracing::instrument;

use super::{TabView, tabs};
use crate::catalog::{Catalog, PlayerControl, VideoItem, VideoPlayer};
use crate::error::{AppError, Result};
use crate::middleware::Shopper;
use crate::state::AppState;

/// The active clip and its transport state.
#[derive(Clone)]
pub struct PlayerView {
    pub video: &'static VideoItem,
    pub embed_id: Option<&'static str>,
    pub playing: bool,
    pub muted: bool,
    pub fullscreen: bool,
}

impl PlayerView {
    #[must_use]
    pub fn from_player(player: &VideoPlayer) -> Option<Self> {
        player.active().map(|video| Self {
            video,
            embed_id: video.embed_id(),
            playing: player.is_playing(),
            muted: player.is_muted(),
            fullscreen: player.is_fullscreen(),
        })
    }
}

/// Video tabs and grid fragment (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/video_grid.html")]
pub struct VideoGridTemplate {
    pub tabs: Vec<TabView>,
    pub videos: Vec<&'static VideoItem>,
    pub player: Option<PlayerView>,
}

impl VideoGridTemplate {
    #[must_use]
    pub fn new(catalog: &Catalog, tab: CategoryFilter<VideoKind>, player: &VideoPlayer) -> Self {
        Self {
            tabs: tabs(tab),
            videos: catalog.videos_in(tab),
            player: PlayerView::from_player(player),
        }
    }
}

/// Player fragment (for HTMX). Empty while no clip is active.
#[derive(Template, WebTemplate)]
#[template(path = "partials/video_player.html")]
pub struct VideoPlayerTemplate {
    pub player: Option<PlayerView>,
}

/// `?tab=` on the video grid.
#[derive(Debug, Default, Deserialize)]
pub struct TabQuery {
    pub tab: Option<String>,
}

/// Video grid for a tab (HTMX).
#[instrument(skip(state, shopper), fields(shopper_id = %shopper.id))]
pub async fn grid(
    State(state): State<AppState>,
    shopper: Shopper,
    Query(query): Query<TabQuery>,
) -> Result<VideoGridTemplate> {
    let tab = CategoryFilter::from_query(query.tab.as_deref())
        .map_err(|e| AppError::BadRequest(e.to_string()))?;
    let session = shopper.lock().await;
    Ok(VideoGridTemplate::new(state.catalog(), tab, &session.player))
}

/// Make a clip the active one and start it (HTMX).
#[instrument(skip(state, shopper), fields(shopper_id = %shopper.id))]
pub async fn play(
    State(state): State<AppState>,
    shopper: Shopper,
    Path(id): Path<VideoId>,
) -> Result<VideoPlayerTemplate> {
    let video = state
        .catalog()
        .video(id)
        .ok_or_else(|| AppError::NotFound(format!("video {id}")))?;

    let mut session = shopper.lock().await;
    session.player.select(video);
    tracing::debug!(title = video.title, "Video selected");

    Ok(VideoPlayerTemplate {
        player: PlayerView::from_player(&session.player),
    })
}

/// Transport control on the active clip (HTMX).
#[instrument(skip(shopper), fields(shopper_id = %shopper.id))]
pub async fn control(shopper: Shopper, Path(control): Path<String>) -> Result<VideoPlayerTemplate> {
    let control = PlayerControl::from_slug(&control)
        .ok_or_else(|| AppError::NotFound(format!("player control {control:?}")))?;

    let mut session = shopper.lock().await;
    if !session.player.apply(control) {
        tracing::debug!(?control, "Control had no effect");
    }

    Ok(VideoPlayerTemplate {
        player: PlayerView::from_player(&session.player),
    })
}
