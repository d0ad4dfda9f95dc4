//! Cart
//!
//! Ordered cart lines. Every add appends a new line; lines are addressed by
//! position, so removing one shifts the lines after it.

use crate::models::{CartItem, Product};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Append one unit of the product with its default size and color.
    /// Identical lines are not merged.
    pub fn add(&mut self, product: &Product) -> &CartItem {
        self.items.push(CartItem::from_product(product));
        log::debug!("[CART] Added product {} ({} lines)", product.id, self.items.len());
        &self.items[self.items.len() - 1]
    }

    /// Remove the line at `index`. Returns `None` when the index is past the end.
    pub fn remove(&mut self, index: usize) -> Option<CartItem> {
        if index >= self.items.len() {
            log::debug!("[CART] Ignoring remove at {} ({} lines)", index, self.items.len());
            return None;
        }
        let removed = self.items.remove(index);
        log::debug!("[CART] Removed line {} (product {}), {} left", index, removed.product.id, self.items.len());
        Some(removed)
    }

    /// Sum of price × quantity over all lines
    pub fn total(&self) -> u64 {
        self.items.iter().map(CartItem::line_total).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_product(id: u32, price: u64) -> Product {
        Product {
            id,
            name: format!("Product {}", id),
            price,
            category: "Одежда".to_string(),
            image: String::new(),
            brand: "SportLux".to_string(),
            sizes: vec!["39".into(), "40".into()],
            colors: vec!["Белый".into(), "Бежевый".into()],
            is_new: false,
        }
    }

    #[test]
    fn test_empty_cart() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), 0);
    }

    #[test]
    fn test_add_appends_default_line() {
        let mut cart = Cart::new();
        let line = cart.add(&make_product(2, 8990));
        assert_eq!(line.selected_size, "39");
        assert_eq!(line.selected_color, "Белый");
        assert_eq!(line.quantity, 1);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.total(), 8990);
    }

    #[test]
    fn test_same_product_twice_gives_two_lines() {
        let product = make_product(2, 8990);
        let mut cart = Cart::new();
        cart.add(&product);
        cart.add(&product);
        assert_eq!(cart.len(), 2);
        assert_eq!(cart.total(), 17980);

        let removed = cart.remove(0).unwrap();
        assert_eq!(removed.product.id, 2);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.items()[0].product.id, 2);
        assert_eq!(cart.total(), 8990);
    }

    #[test]
    fn test_remove_shifts_following_lines() {
        let mut cart = Cart::new();
        for (id, price) in [(1, 15990), (3, 6990), (6, 2990)] {
            cart.add(&make_product(id, price));
        }
        let removed = cart.remove(1).unwrap();
        assert_eq!(removed.product.id, 3);
        let ids: Vec<u32> = cart.items().iter().map(|i| i.product.id).collect();
        assert_eq!(ids, vec![1, 6]);
        assert_eq!(cart.total(), 15990 + 2990);
    }

    #[test]
    fn test_remove_out_of_range_is_noop() {
        let mut cart = Cart::new();
        cart.add(&make_product(1, 100));
        assert!(cart.remove(1).is_none());
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_cart_lines_are_copies() {
        let mut product = make_product(4, 4990);
        let mut cart = Cart::new();
        cart.add(&product);
        product.price = 1;
        assert_eq!(cart.items()[0].product.price, 4990);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: total is the sum of prices, and removing line i drops exactly it.
            #[test]
            fn remove_drops_exactly_one_line(
                prices in proptest::collection::vec(0u64..100_000, 1..12),
                pick in any::<prop::sample::Index>(),
            ) {
                let mut cart = Cart::new();
                for (i, price) in prices.iter().enumerate() {
                    cart.add(&make_product(i as u32, *price));
                }
                prop_assert_eq!(cart.total(), prices.iter().sum::<u64>());

                let index = pick.index(prices.len());
                let before: Vec<u32> = cart.items().iter().map(|i| i.product.id).collect();
                let removed = cart.remove(index).unwrap();

                prop_assert_eq!(removed.product.id, before[index]);
                prop_assert_eq!(cart.len(), prices.len() - 1);
                if index + 1 < before.len() {
                    prop_assert_eq!(cart.items()[index].product.id, before[index + 1]);
                }
                prop_assert_eq!(cart.total(), prices.iter().sum::<u64>() - prices[index]);
            }
        }
    }
}
