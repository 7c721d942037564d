//! The dessert menu.

use serde::Serialize;
use sweet_treats_core::{MenuCategory, MenuItemId, Price};

use super::image_or_placeholder;

/// A purchasable menu entry.
///
/// `price` is the literal printed on the menu card; [`MenuItem::unit_price`]
/// turns it into a number for cart arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MenuItem {
    pub id: MenuItemId,
    pub name: &'static str,
    pub description: &'static str,
    pub price: &'static str,
    pub image: &'static str,
    pub category: MenuCategory,
    pub popular: bool,
}

impl MenuItem {
    /// Numeric unit price parsed from the price literal.
    ///
    /// A literal that does not parse counts as zero and is logged; the menu
    /// tests guarantee the shipped catalog never hits that path.
    #[must_use]
    pub fn unit_price(&self) -> Price {
        Price::parse_literal(self.price).unwrap_or_else(|err| {
            tracing::warn!(item_id = %self.id, error = %err, "Unparseable menu price");
            Price::zero()
        })
    }

    /// Card image, or the placeholder when none is set.
    #[must_use]
    pub fn image_src(&self) -> &'static str {
        image_or_placeholder(self.image)
    }
}

pub(crate) const MENU_ITEMS: &[MenuItem] = &[
    MenuItem {
        id: MenuItemId::new(1),
        name: "Strawberry Shortcake",
        description: "Light sponge cake with fresh strawberries and whipped cream",
        price: "KSh 850",
        image: "/Menu/Strawberry Shortcake.png",
        category: MenuCategory::Cake,
        popular: true,
    },
    MenuItem {
        id: MenuItemId::new(2),
        name: "Chocolate Fudge Cake",
        description: "Rich chocolate cake with fudge frosting",
        price: "KSh 950",
        image: "/Menu/Chocolate Fudge Cake.png",
        category: MenuCategory::Cake,
        popular: false,
    },
    MenuItem {
        id: MenuItemId::new(3),
        name: "Red Velvet Cake",
        description: "Classic red velvet with cream cheese frosting",
        price: "KSh 1,050",
        image: "/Menu/Red Velvet Cake.png",
        category: MenuCategory::Cake,
        popular: true,
    },
    MenuItem {
        id: MenuItemId::new(4),
        name: "Carrot Cake",
        description: "Spiced cake with walnuts and cream cheese frosting",
        price: "KSh 900",
        image: "/Menu/Carrot Cake.png",
        category: MenuCategory::Cake,
        popular: false,
    },
    MenuItem {
        id: MenuItemId::new(5),
        name: "Greek Yogurt Parfait",
        description: "Creamy Greek yogurt with honey and mixed berries",
        price: "KSh 750",
        image: "/Menu/Greek Yogurt Parfait.png",
        category: MenuCategory::Yogurt,
        popular: true,
    },
    MenuItem {
        id: MenuItemId::new(6),
        name: "Mango Yogurt Bowl",
        description: "Smooth yogurt topped with fresh mango and granola",
        price: "KSh 800",
        image: "/Menu/Mango Yogurt Bowl.png",
        category: MenuCategory::Yogurt,
        popular: false,
    },
    MenuItem {
        id: MenuItemId::new(7),
        name: "Berry Blast Yogurt",
        description: "Tart yogurt with strawberries, blueberries and blackberries",
        price: "KSh 850",
        image: "/Menu/Berry Blast Yogurt.png",
        category: MenuCategory::Yogurt,
        popular: false,
    },
    MenuItem {
        id: MenuItemId::new(8),
        name: "Honey Almond Yogurt",
        description: "Creamy yogurt with honey drizzle and toasted almonds",
        price: "KSh 750",
        image: "/Menu/Honey Almond Yogurt.png",
        category: MenuCategory::Yogurt,
        popular: false,
    },
    MenuItem {
        id: MenuItemId::new(9),
        name: "Vanilla Bean Ice Cream",
        description: "Classic vanilla ice cream with real vanilla beans",
        price: "KSh 600",
        image: "/Menu/Vanilla Bean Ice Cream.png",
        category: MenuCategory::IceCream,
        popular: false,
    },
    MenuItem {
        id: MenuItemId::new(10),
        name: "Mint Chocolate Chip",
        description: "Refreshing mint ice cream with chocolate chips",
        price: "KSh 650",
        image: "/Menu/Mint Chocolate Chip.png",
        category: MenuCategory::IceCream,
        popular: true,
    },
    MenuItem {
        id: MenuItemId::new(11),
        name: "Salted Caramel Ice Cream",
        description: "Sweet and salty caramel swirled in creamy ice cream",
        price: "KSh 700",
        image: "/Menu/Salted Caramel Ice Cream.png",
        category: MenuCategory::IceCream,
        popular: true,
    },
    MenuItem {
        id: MenuItemId::new(12),
        name: "Strawberry Cheesecake Ice Cream",
        description: "Strawberry ice cream with cheesecake chunks",
        price: "KSh 800",
        image: "/Menu/Strawberry Cheesecake Ice Cream.png",
        category: MenuCategory::IceCream,
        popular: false,
    },
    MenuItem {
        id: MenuItemId::new(13),
        name: "Cappuccino",
        description: "Espresso with steamed milk and foam",
        price: "KSh 550",
        image: "/Menu/Cappuccino.png",
        category: MenuCategory::Coffee,
        popular: false,
    },
    MenuItem {
        id: MenuItemId::new(14),
        name: "Caramel Macchiato",
        description: "Espresso with vanilla syrup, milk and caramel drizzle",
        price: "KSh 600",
        image: "/Menu/Caramel Macchiato.png",
        category: MenuCategory::Coffee,
        popular: true,
    },
    MenuItem {
        id: MenuItemId::new(15),
        name: "Mocha Latte",
        description: "Espresso with chocolate, steamed milk and whipped cream",
        price: "KSh 650",
        image: "/Menu/Mocha Latte.png",
        category: MenuCategory::Coffee,
        popular: false,
    },
    MenuItem {
        id: MenuItemId::new(16),
        name: "Cold Brew",
        description: "Smooth, cold-steeped coffee served over ice",
        price: "KSh 580",
        image: "/Menu/Cold Brew.png",
        category: MenuCategory::Coffee,
        popular: true,
    },
];
