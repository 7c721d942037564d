//! Session-scoped shopping cart.
//!
//! The cart is the single source of truth for what the shopper has picked.
//! Every view that adds, shows or edits items goes through these methods, so
//! the invariants hold everywhere:
//!
//! - at most one line per menu item id
//! - every line has a quantity of at least 1 (a line that would drop to 0 is
//!   removed instead)
//! - lines stay in the order they were first added

use sweet_treats_core::{MenuItemId, Price, format_currency};

use crate::catalog::MenuItem;

/// One menu item and how many of it the shopper wants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    pub item: MenuItem,
    quantity: u32,
}

impl CartLine {
    /// Selected quantity, always >= 1.
    #[must_use]
    pub const fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.item.unit_price().times(self.quantity)
    }
}

/// The shopper's cart.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// An empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Lines in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total number of units across all lines.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.lines
            .iter()
            .fold(0u32, |acc, line| acc.saturating_add(line.quantity))
    }

    /// Quantity of a given item, if it is in the cart.
    #[must_use]
    pub fn quantity_of(&self, id: MenuItemId) -> Option<u32> {
        self.lines
            .iter()
            .find(|line| line.item.id == id)
            .map(CartLine::quantity)
    }

    /// Add one unit of `item`.
    ///
    /// Bumps the existing line or appends a new one. Returns the line's new
    /// quantity.
    pub fn add_item(&mut self, item: &MenuItem) -> u32 {
        if let Some(line) = self.lines.iter_mut().find(|line| line.item.id == item.id) {
            line.quantity = line.quantity.saturating_add(1);
            return line.quantity;
        }

        self.lines.push(CartLine {
            item: *item,
            quantity: 1,
        });
        1
    }

    /// Drop the line for `id`. Returns whether a line was removed.
    pub fn remove_item(&mut self, id: MenuItemId) -> bool {
        let before = self.lines.len();
        self.lines.retain(|line| line.item.id != id);
        self.lines.len() != before
    }

    /// Set the quantity for `id`.
    ///
    /// A quantity below 1 removes the line. Unknown ids are ignored.
    pub fn update_quantity(&mut self, id: MenuItemId, quantity: u32) {
        if quantity < 1 {
            self.remove_item(id);
            return;
        }

        if let Some(line) = self.lines.iter_mut().find(|line| line.item.id == id) {
            line.quantity = quantity;
        }
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Sum of every line total.
    #[must_use]
    pub fn subtotal(&self) -> Price {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Render an amount in the shop's currency convention.
    #[must_use]
    pub fn format_currency(&self, amount: Price) -> String {
        format_currency(amount.amount)
    }
}
