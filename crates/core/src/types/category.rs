//! Closed category enums for the static catalogs and the filter over them.
//!
//! Every catalog view filters with the same rule: an item is shown when the
//! selected filter is `All` or equals the item's category.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when a category slug is not recognized.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown category {0:?}")]
pub struct UnknownCategory(pub String);

/// A closed set of catalog categories with URL slugs and display labels.
pub trait Category: Copy + Eq + 'static {
    /// Every variant, in display order.
    const ALL: &'static [Self];

    /// Slug used in query strings (`?category=icecream`).
    fn slug(self) -> &'static str;

    /// Label shown on filter buttons and card badges.
    fn label(self) -> &'static str;

    /// Look a variant up by slug.
    fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.slug() == slug)
    }
}

/// Menu sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuCategory {
    Cake,
    Yogurt,
    IceCream,
    Coffee,
}

impl Category for MenuCategory {
    const ALL: &'static [Self] = &[Self::Cake, Self::Yogurt, Self::IceCream, Self::Coffee];

    fn slug(self) -> &'static str {
        match self {
            Self::Cake => "cake",
            Self::Yogurt => "yogurt",
            Self::IceCream => "icecream",
            Self::Coffee => "coffee",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Cake => "Cakes",
            Self::Yogurt => "Yogurt",
            Self::IceCream => "Ice Cream",
            Self::Coffee => "Coffee",
        }
    }
}

/// Gallery picture groupings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GalleryCategory {
    Pastries,
    Cakes,
    Customers,
    Shop,
}

impl Category for GalleryCategory {
    const ALL: &'static [Self] = &[Self::Pastries, Self::Cakes, Self::Customers, Self::Shop];

    fn slug(self) -> &'static str {
        match self {
            Self::Pastries => "pastries",
            Self::Cakes => "cakes",
            Self::Customers => "customers",
            Self::Shop => "shop",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Pastries => "Pastries",
            Self::Cakes => "Cakes",
            Self::Customers => "Customers",
            Self::Shop => "Our Shop",
        }
    }
}

/// How a video is played: our own file, or an embedded `TikTok` post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VideoKind {
    Video,
    TikTok,
}

impl VideoKind {
    /// Embedded third-party players ignore our transport controls.
    #[must_use]
    pub const fn is_embedded(self) -> bool {
        matches!(self, Self::TikTok)
    }
}

impl Category for VideoKind {
    const ALL: &'static [Self] = &[Self::Video, Self::TikTok];

    fn slug(self) -> &'static str {
        match self {
            Self::Video => "videos",
            Self::TikTok => "tiktok",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Video => "Videos",
            Self::TikTok => "TikTok",
        }
    }
}

/// A category selection: everything, or a single category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter<C> {
    #[default]
    All,
    Only(C),
}

impl<C: Category> CategoryFilter<C> {
    /// Whether an item in `category` passes this filter.
    #[must_use]
    pub fn matches(self, category: C) -> bool {
        match self {
            Self::All => true,
            Self::Only(selected) => selected == category,
        }
    }

    /// Slug for links (`"all"` or the category slug).
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(c) => c.slug(),
        }
    }

    /// Label for filter buttons.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Only(c) => c.label(),
        }
    }

    /// The `All` option followed by each category, in display order.
    #[must_use]
    pub fn options() -> Vec<Self> {
        core::iter::once(Self::All)
            .chain(C::ALL.iter().copied().map(Self::Only))
            .collect()
    }

    /// Parse an optional query value; a missing or empty value means `All`.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownCategory`] for slugs that name no category.
    pub fn from_query(value: Option<&str>) -> Result<Self, UnknownCategory> {
        match value.map(str::trim) {
            None | Some("") => Ok(Self::All),
            Some(slug) => slug.parse(),
        }
    }
}

impl<C: Category> FromStr for CategoryFilter<C> {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            return Ok(Self::All);
        }
        C::from_slug(s)
            .map(Self::Only)
            .ok_or_else(|| UnknownCategory(s.to_owned()))
    }
}

impl<C: Category> fmt::Display for CategoryFilter<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}
