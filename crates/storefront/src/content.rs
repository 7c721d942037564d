//! Fixed copy for the marketing sections: hero, about and visit-us.

use crate::catalog::image_or_placeholder;

/// Seconds between hero slides.
pub const HERO_INTERVAL_SECS: u32 = 5;

pub const SHOP_NAME: &str = "Sweet Treats";

/// `<title>` of every page.
pub const PAGE_TITLE: &str = "Sweet Treats - Dessert Shop";

pub const TAGLINE: &str = "Indulge in our handcrafted desserts made with premium ingredients and lots of love. From cakes to ice cream, we have something for every sweet tooth.";

/// One rotating picture in the hero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeroSlide {
    pub name: &'static str,
    pub description: &'static str,
    pub image: &'static str,
}

impl HeroSlide {
    #[must_use]
    pub fn image_src(&self) -> &'static str {
        image_or_placeholder(self.image)
    }
}

pub const HERO_SLIDES: &[HeroSlide] = &[
    HeroSlide {
        name: "Delicious Cakes",
        description: "Freshly baked with love",
        image: "/Menu/Delicious Cakes.png",
    },
    HeroSlide {
        name: "Creamy Yogurt",
        description: "Smooth and refreshing",
        image: "/Menu/Creamy Yogurt.png",
    },
    HeroSlide {
        name: "Premium Ice Cream",
        description: "Made with the finest ingredients",
        image: "/Menu/Premium Ice Cream.png",
    },
    HeroSlide {
        name: "Aromatic Coffee",
        description: "The perfect pick-me-up",
        image: "/Menu/Aromatic coffe.png",
    },
];

pub const ABOUT_IMAGE: &str = "/About/About.png";

pub const ABOUT_PARAGRAPHS: &[&str] = &[
    "Sweet Treats began with a simple passion for creating delicious desserts that bring joy to people's lives. Founded in 2015 by pastry chef Emma Johnson, our little shop has grown into a beloved destination for dessert lovers.",
    "We believe that the best desserts are made with high-quality ingredients, creativity, and a whole lot of love. Every cake, yogurt parfait, ice cream scoop, and coffee drink is crafted with attention to detail and a commitment to excellence.",
    "Our team of talented pastry chefs and baristas work tirelessly to create new and exciting flavors while perfecting the classics. We source our ingredients locally whenever possible and prioritize sustainable practices.",
    "Whether you're celebrating a special occasion or simply treating yourself, we're here to make your day a little sweeter!",
];

/// Headline numbers under the about text, as `(value, label)`.
pub const ABOUT_STATS: &[(&str, &str)] = &[
    ("8+", "Years of Experience"),
    ("50+", "Unique Recipes"),
    ("10k+", "Happy Customers"),
];

/// Opening hours, as `(days, hours)`.
pub const STORE_HOURS: &[(&str, &str)] = &[
    ("Monday - Friday", "7:00 AM - 8:00 PM"),
    ("Saturday", "8:00 AM - 9:00 PM"),
    ("Sunday", "9:00 AM - 7:00 PM"),
];

/// Where to find the shop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub name: &'static str,
    pub street: &'static str,
    pub phone: &'static str,
    pub email: &'static str,
    pub maps_url: &'static str,
    /// Text offered to the share sheet.
    pub share_title: &'static str,
    pub share_text: &'static str,
}

pub const LOCATION: Location = Location {
    name: "Naivas Supermarket - Thika Town",
    street: "Commercial St, Thika",
    phone: "0746 354053",
    email: "hello@sweettreats.com",
    maps_url: "https://maps.app.goo.gl/qb8ocuoqpFrAUuLy9",
    share_title: "Sweet Treats Location",
    share_text: "Come visit us at Naivas Supermarket, Thika!",
};

/// Shown after the contact form is sent.
pub const CONTACT_THANKS: &str = "Thank you for your message! We'll get back to you soon.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hero_slides_have_images() {
        assert_eq!(HERO_SLIDES.len(), 4);
        assert!(HERO_SLIDES.iter().all(|s| s.image_src().starts_with('/')));
    }

    #[test]
    fn test_location_links() {
        assert!(LOCATION.maps_url.starts_with("https://"));
        assert!(LOCATION.email.parse::<sweet_treats_core::Email>().is_ok());
    }
}
