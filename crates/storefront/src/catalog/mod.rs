//! Static catalogs: menu, gallery, videos and testimonials.
//!
//! The catalogs are hardcoded and never change at runtime. Views only ever
//! filter them by category (declaration order is kept, there is no sorting
//! or pagination) and look items up by id.

pub mod gallery;
pub mod menu;
pub mod testimonials;
pub mod video;

use sweet_treats_core::{
    Category, CategoryFilter, GalleryCategory, MenuCategory, MenuItemId, VideoId,
    VideoKind,
};

pub use gallery::{GalleryItem, GalleryKey, GalleryViewer};
pub use menu::MenuItem;
pub use testimonials::{Carousel, Testimonial};
pub use video::{PlayerControl, VideoItem, VideoPlayer};

/// Image shown when a catalog entry has no picture.
pub const PLACEHOLDER_IMAGE: &str = "/static/images/placeholder.svg";

/// Use `path` unless it is blank, in which case fall back to the placeholder.
#[must_use]
pub fn image_or_placeholder(path: &str) -> &str {
    if path.trim().is_empty() {
        PLACEHOLDER_IMAGE
    } else {
        path
    }
}

/// Index after `index` in a list of `len` items, wrapping to 0.
#[must_use]
pub const fn next_index(index: usize, len: usize) -> usize {
    if len == 0 { 0 } else { (index + 1) % len }
}

/// Index before `index` in a list of `len` items, wrapping to `len - 1`.
#[must_use]
pub const fn previous_index(index: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (index % len + len - 1) % len
    }
}

/// Keep the items whose category passes `filter`, in declaration order.
pub fn filter_by<T, C, F>(items: &[T], filter: CategoryFilter<C>, category_of: F) -> Vec<&T>
where
    C: Category,
    F: Fn(&T) -> C,
{
    items
        .iter()
        .filter(|item| filter.matches(category_of(*item)))
        .collect()
}

/// All of the shop's static content, in one place.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    pub menu: &'static [MenuItem],
    pub gallery: &'static [GalleryItem],
    pub videos: &'static [VideoItem],
    pub testimonials: &'static [Testimonial],
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            menu: menu::MENU_ITEMS,
            gallery: gallery::GALLERY_ITEMS,
            videos: video::VIDEO_ITEMS,
            testimonials: testimonials::TESTIMONIALS,
        }
    }
}

impl Catalog {
    #[must_use]
    pub fn menu_item(&self, id: MenuItemId) -> Option<&'static MenuItem> {
        self.menu.iter().find(|item| item.id == id)
    }

    #[must_use]
    pub fn video(&self, id: VideoId) -> Option<&'static VideoItem> {
        self.videos.iter().find(|video| video.id == id)
    }

    /// Menu items shown for a category tab.
    #[must_use]
    pub fn menu_in(&self, filter: CategoryFilter<MenuCategory>) -> Vec<&'static MenuItem> {
        filter_by(self.menu, filter, |item| item.category)
    }

    /// Gallery pictures shown for a category tab.
    #[must_use]
    pub fn gallery_in(
        &self,
        filter: CategoryFilter<GalleryCategory>,
    ) -> Vec<&'static GalleryItem> {
        filter_by(self.gallery, filter, |item| item.category)
    }

    /// Videos shown for a tab (all / videos / tiktok).
    #[must_use]
    pub fn videos_in(&self, filter: CategoryFilter<VideoKind>) -> Vec<&'static VideoItem> {
        filter_by(self.videos, filter, |video| video.kind)
    }

    /// Popular menu items, featured in the hero carousel.
    #[must_use]
    pub fn popular(&self) -> Vec<&'static MenuItem> {
        self.menu.iter().filter(|item| item.popular).collect()
    }
}
