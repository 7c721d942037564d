//! Video section: the clip catalog and the single active player.

use sweet_treats_core::{VideoId, VideoKind};

use super::image_or_placeholder;

/// A clip shown in the video section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VideoItem {
    pub id: VideoId,
    pub title: &'static str,
    pub description: &'static str,
    pub thumbnail: &'static str,
    pub video_url: &'static str,
    pub duration: &'static str,
    pub featured: bool,
    pub kind: VideoKind,
    /// Post URL for embedded third-party clips.
    pub embed_url: Option<&'static str>,
}

impl VideoItem {
    #[must_use]
    pub fn thumbnail_src(&self) -> &'static str {
        image_or_placeholder(self.thumbnail)
    }

    /// `TikTok` embeds identify the post by the trailing numeric segment.
    #[must_use]
    pub fn embed_id(&self) -> Option<&'static str> {
        self.embed_url
            .and_then(|url| url.trim_end_matches('/').rsplit('/').next())
            .filter(|id| !id.is_empty() && id.bytes().all(|b| b.is_ascii_digit()))
    }
}

/// Transport buttons on the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerControl {
    TogglePlay,
    ToggleMute,
    ToggleFullscreen,
    Close,
}

impl PlayerControl {
    /// Parse the control segment of `/videos/player/{control}`.
    #[must_use]
    pub fn from_slug(slug: &str) -> Option<Self> {
        match slug {
            "play" => Some(Self::TogglePlay),
            "mute" => Some(Self::ToggleMute),
            "fullscreen" => Some(Self::ToggleFullscreen),
            "close" => Some(Self::Close),
            _ => None,
        }
    }
}

/// The one player in the video section.
///
/// At most one clip is active. Transport controls drive our own `<video>`
/// element only; for embedded clips they do nothing, since the third-party
/// player owns its controls.
#[derive(Debug, Clone, Default)]
pub struct VideoPlayer {
    active: Option<&'static VideoItem>,
    playing: bool,
    muted: bool,
    fullscreen: bool,
}

impl VideoPlayer {
    #[must_use]
    pub const fn active(&self) -> Option<&'static VideoItem> {
        self.active
    }

    #[must_use]
    pub const fn is_playing(&self) -> bool {
        self.playing
    }

    #[must_use]
    pub const fn is_muted(&self) -> bool {
        self.muted
    }

    #[must_use]
    pub const fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    /// Make `video` the active clip and start it from the beginning.
    pub fn select(&mut self, video: &'static VideoItem) {
        self.active = Some(video);
        self.playing = true;
        self.fullscreen = false;
    }

    /// Apply a transport control. Returns whether the player state changed.
    pub fn apply(&mut self, control: PlayerControl) -> bool {
        if control == PlayerControl::Close {
            let was_active = self.active.is_some();
            self.active = None;
            self.playing = false;
            self.fullscreen = false;
            return was_active;
        }

        let Some(video) = self.active else {
            return false;
        };
        if video.kind.is_embedded() {
            return false;
        }

        match control {
            PlayerControl::TogglePlay => self.playing = !self.playing,
            PlayerControl::ToggleMute => self.muted = !self.muted,
            PlayerControl::ToggleFullscreen => self.fullscreen = !self.fullscreen,
            PlayerControl::Close => {}
        }
        true
    }
}

pub(crate) const VIDEO_ITEMS: &[VideoItem] = &[
    VideoItem {
        id: VideoId::new(1),
        title: "How We Make Our Honey Glazed Donuts",
        description: "A behind-the-scenes look at our signature pastry",
        thumbnail: "",
        video_url: "",
        duration: "1:45",
        featured: true,
        kind: VideoKind::Video,
        embed_url: None,
    },
    VideoItem {
        id: VideoId::new(2),
        title: "Queen Bee Cake Decoration",
        description: "Watch our pastry chef create our famous celebration cake",
        thumbnail: "",
        video_url: "",
        duration: "2:30",
        featured: true,
        kind: VideoKind::Video,
        embed_url: None,
    },
    VideoItem {
        id: VideoId::new(3),
        title: "The Hive Thika - Strawberry Dessert",
        description: "Enjoying our delicious strawberry dessert at The Hive Thika",
        thumbnail: "/tiktokThumb.png",
        video_url: "",
        duration: "0:30",
        featured: true,
        kind: VideoKind::TikTok,
        embed_url: Some("https://www.tiktok.com/@hive_pastries/video/7269714354512186630"),
    },
    VideoItem {
        id: VideoId::new(4),
        title: "Honeycomb Pattern Technique",
        description: "Learn how we create our signature honeycomb pattern",
        thumbnail: "",
        video_url: "",
        duration: "3:20",
        featured: false,
        kind: VideoKind::Video,
        embed_url: None,
    },
    VideoItem {
        id: VideoId::new(5),
        title: "The Hive Pastries Story",
        description: "The journey of how our bakery came to bee",
        thumbnail: "",
        video_url: "",
        duration: "4:15",
        featured: true,
        kind: VideoKind::Video,
        embed_url: None,
    },
    VideoItem {
        id: VideoId::new(6),
        title: "Honey Harvest Season",
        description: "See how we source our premium honey",
        thumbnail: "",
        video_url: "",
        duration: "2:10",
        featured: false,
        kind: VideoKind::Video,
        embed_url: None,
    },
];

#[cfg(test)]
mod tests {
    use sweet_treats_core::CategoryFilter;

    use super::*;
    use crate::catalog::{Catalog, PLACEHOLDER_IMAGE};

    fn clip(kind: VideoKind) -> &'static VideoItem {
        VIDEO_ITEMS
            .iter()
            .find(|v| v.kind == kind)
            .expect("catalog has both kinds")
    }

    #[test]
    fn test_select_starts_playback() {
        let mut player = VideoPlayer::default();
        player.select(clip(VideoKind::Video));
        assert!(player.is_playing());
        assert_eq!(player.active().map(|v| v.id), Some(VideoId::new(1)));
    }

    #[test]
    fn test_transport_controls_toggle_native_video() {
        let mut player = VideoPlayer::default();
        player.select(clip(VideoKind::Video));

        assert!(player.apply(PlayerControl::TogglePlay));
        assert!(!player.is_playing());
        assert!(player.apply(PlayerControl::ToggleMute));
        assert!(player.is_muted());
        assert!(player.apply(PlayerControl::ToggleFullscreen));
        assert!(player.is_fullscreen());
    }

    #[test]
    fn test_transport_controls_noop_for_embed() {
        let mut player = VideoPlayer::default();
        player.select(clip(VideoKind::TikTok));

        assert!(!player.apply(PlayerControl::TogglePlay));
        assert!(!player.apply(PlayerControl::ToggleMute));
        assert!(!player.apply(PlayerControl::ToggleFullscreen));
        assert!(player.is_playing());
        assert!(!player.is_muted());
        assert!(!player.is_fullscreen());
    }

    #[test]
    fn test_controls_without_active_clip() {
        let mut player = VideoPlayer::default();
        assert!(!player.apply(PlayerControl::TogglePlay));
        assert!(!player.apply(PlayerControl::Close));
    }

    #[test]
    fn test_close_stops_playback() {
        let mut player = VideoPlayer::default();
        player.select(clip(VideoKind::Video));
        assert!(player.apply(PlayerControl::Close));
        assert!(player.active().is_none());
        assert!(!player.is_playing());
    }

    #[test]
    fn test_switching_clips_keeps_single_active() {
        let mut player = VideoPlayer::default();
        player.select(clip(VideoKind::Video));
        player.apply(PlayerControl::ToggleFullscreen);
        player.select(clip(VideoKind::TikTok));
        assert_eq!(player.active().map(|v| v.kind), Some(VideoKind::TikTok));
        assert!(!player.is_fullscreen());
    }

    #[test]
    fn test_tabs_filter_by_kind() {
        let catalog = Catalog::default();
        assert_eq!(catalog.videos_in(CategoryFilter::All).len(), 6);
        assert_eq!(
            catalog
                .videos_in(CategoryFilter::Only(VideoKind::TikTok))
                .len(),
            1
        );
        assert_eq!(
            catalog.videos_in(CategoryFilter::Only(VideoKind::Video)).len(),
            5
        );
    }

    #[test]
    fn test_thumbnail_and_embed_id() {
        let native = clip(VideoKind::Video);
        assert_eq!(native.thumbnail_src(), PLACEHOLDER_IMAGE);
        assert_eq!(native.embed_id(), None);

        let tiktok = clip(VideoKind::TikTok);
        assert_eq!(tiktok.thumbnail_src(), "/tiktokThumb.png");
        assert_eq!(tiktok.embed_id(), Some("7269714354512186630"));
    }

    #[test]
    fn test_player_control_slugs() {
        assert_eq!(PlayerControl::from_slug("play"), Some(PlayerControl::TogglePlay));
        assert_eq!(PlayerControl::from_slug("rewind"), None);
    }
}
