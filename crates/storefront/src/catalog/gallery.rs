//! Photo gallery and its full-screen viewer.

use sweet_treats_core::{Category, CategoryFilter, GalleryCategory, GalleryItemId};

use super::{Catalog, image_or_placeholder, next_index, previous_index};
use crate::ui::{ScrollGuard, ScrollLock};

/// A picture in the gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GalleryItem {
    pub id: GalleryItemId,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub category: GalleryCategory,
    pub featured: bool,
}

impl GalleryItem {
    #[must_use]
    pub fn image_src(&self) -> &'static str {
        image_or_placeholder(self.image)
    }

    /// File name offered by the viewer's download button.
    #[must_use]
    pub fn download_name(&self) -> String {
        let slug = self
            .title
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("-")
            .to_lowercase();
        format!("{slug}.jpg")
    }

    /// Badge text for the picture's category.
    #[must_use]
    pub fn category_label(&self) -> &'static str {
        self.category.label()
    }
}

/// Keyboard shortcuts understood by the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryKey {
    Previous,
    Next,
    Close,
    ToggleFullscreen,
}

impl GalleryKey {
    /// Map a DOM `KeyboardEvent.key` value to a shortcut.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(Self::Previous),
            "ArrowRight" => Some(Self::Next),
            "Escape" => Some(Self::Close),
            "f" | "F" => Some(Self::ToggleFullscreen),
            _ => None,
        }
    }
}

/// What the owner of a viewer should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerOutcome {
    /// Keep the viewer open.
    Open,
    /// Drop the viewer.
    Close,
}

/// The open full-screen viewer over one filtered slice of the gallery.
///
/// Holds the page scroll lock for as long as it exists.
#[derive(Debug)]
pub struct GalleryViewer {
    filter: CategoryFilter<GalleryCategory>,
    items: Vec<&'static GalleryItem>,
    index: usize,
    fullscreen: bool,
    _scroll: ScrollGuard,
}

impl GalleryViewer {
    /// Open the viewer on picture `index` of the `filter` tab.
    ///
    /// Returns `None` when the tab is empty. An out-of-range index is
    /// wrapped into the list.
    #[must_use]
    pub fn open(
        catalog: &Catalog,
        filter: CategoryFilter<GalleryCategory>,
        index: usize,
        scroll: &ScrollLock,
    ) -> Option<Self> {
        let items = catalog.gallery_in(filter);
        if items.is_empty() {
            return None;
        }
        let index = index % items.len();
        Some(Self {
            filter,
            items,
            index,
            fullscreen: false,
            _scroll: scroll.acquire(),
        })
    }

    /// The picture currently on screen.
    #[must_use]
    #[allow(clippy::indexing_slicing)] // `open` rejects empty lists and every move stays in range
    pub fn current(&self) -> &'static GalleryItem {
        self.items[self.index]
    }

    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// The tab the viewer was opened from.
    #[must_use]
    pub const fn filter(&self) -> CategoryFilter<GalleryCategory> {
        self.filter
    }

    #[must_use]
    pub const fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    /// Counter text such as `"3 / 12"`.
    #[must_use]
    pub fn position(&self) -> String {
        format!("{} / {}", self.index + 1, self.items.len())
    }

    pub fn next(&mut self) {
        self.index = next_index(self.index, self.items.len());
    }

    pub fn previous(&mut self) {
        self.index = previous_index(self.index, self.items.len());
    }

    pub fn toggle_fullscreen(&mut self) {
        self.fullscreen = !self.fullscreen;
    }

    /// Apply a keyboard shortcut.
    pub fn handle_key(&mut self, key: GalleryKey) -> ViewerOutcome {
        match key {
            GalleryKey::Previous => self.previous(),
            GalleryKey::Next => self.next(),
            GalleryKey::ToggleFullscreen => self.toggle_fullscreen(),
            GalleryKey::Close => return ViewerOutcome::Close,
        }
        ViewerOutcome::Open
    }
}

pub(crate) const GALLERY_ITEMS: &[GalleryItem] = &[
    GalleryItem {
        id: GalleryItemId::new(1),
        title: "Honey Glazed Donuts",
        description: "Our signature honey-glazed donuts, made fresh daily",
        image: "/Gallery/Honey Glazed Donuts.png",
        category: GalleryCategory::Pastries,
        featured: true,
    },
    GalleryItem {
        id: GalleryItemId::new(2),
        title: "Chocolate Honeycomb Cake",
        description: "Rich chocolate cake with honeycomb pieces",
        image: "/Gallery/Chocolate Honeycomb Cake.png",
        category: GalleryCategory::Cakes,
        featured: true,
    },
    GalleryItem {
        id: GalleryItemId::new(3),
        title: "Bee Pollen Cookies",
        description: "Healthy and delicious cookies with bee pollen",
        image: "/Gallery/Bee Pollen Cookies.png",
        category: GalleryCategory::Pastries,
        featured: false,
    },
    GalleryItem {
        id: GalleryItemId::new(4),
        title: "The Hive Storefront",
        description: "Our welcoming shop entrance",
        image: "/Gallery/The Hive Storefront.png",
        category: GalleryCategory::Shop,
        featured: true,
    },
    GalleryItem {
        id: GalleryItemId::new(5),
        title: "Honey Macaron Tower",
        description: "Perfect for special occasions",
        image: "/Gallery/Honey Macaron Tower.png",
        category: GalleryCategory::Cakes,
        featured: false,
    },
    GalleryItem {
        id: GalleryItemId::new(6),
        title: "Happy Customers",
        description: "Family enjoying our pastries",
        image: "/Gallery/Happy Customers.png",
        category: GalleryCategory::Customers,
        featured: false,
    },
    GalleryItem {
        id: GalleryItemId::new(7),
        title: "Honeycomb Bread",
        description: "Artisanal bread with honey and seeds",
        image: "/Gallery/Honeycomb Bread.png",
        category: GalleryCategory::Pastries,
        featured: false,
    },
    GalleryItem {
        id: GalleryItemId::new(8),
        title: "Baking Workshop",
        description: "Learn to bake with our expert pastry chefs",
        image: "/Gallery/Baking Workshop.png",
        category: GalleryCategory::Shop,
        featured: false,
    },
    GalleryItem {
        id: GalleryItemId::new(9),
        title: "Queen Bee Cake",
        description: "Our award-winning celebration cake",
        image: "/Gallery/Queen Bee Cake.png",
        category: GalleryCategory::Cakes,
        featured: true,
    },
    GalleryItem {
        id: GalleryItemId::new(10),
        title: "Customer Celebration",
        description: "Birthday celebration at The Hive",
        image: "/Gallery/Customer Celebration.png",
        category: GalleryCategory::Customers,
        featured: true,
    },
    GalleryItem {
        id: GalleryItemId::new(11),
        title: "Honey Tart Collection",
        description: "Assorted mini tarts with honey filling",
        image: "/Gallery/Honey Tart Collection.png",
        category: GalleryCategory::Pastries,
        featured: false,
    },
    GalleryItem {
        id: GalleryItemId::new(12),
        title: "Behind the Counter",
        description: "Our dedicated team at work",
        image: "/Gallery/Behind the Counter.png",
        category: GalleryCategory::Shop,
        featured: false,
    },
];
