//! Application Context
//!
//! Static storefront content plus the values derived from the store.

use leptos::prelude::*;
use storefront_engine::{filter_products, Facet, Product, ShopInfo, Storefront};

use crate::store::{ShopStateStoreFields, ShopStore};

/// App-wide read-only data and memos provided via context
#[derive(Clone, Copy)]
pub struct ShopContext {
    /// Shop info and catalog, loaded once at mount
    storefront: StoredValue<Storefront>,
    /// Catalog products passing the current filter, in catalog order
    pub visible_products: Memo<Vec<Product>>,
    /// Sum of cart line totals
    pub cart_total: Memo<u64>,
    /// Number of cart lines
    pub cart_count: Memo<usize>,
}

impl ShopContext {
    pub fn new(storefront: Storefront, store: ShopStore) -> Self {
        let storefront = StoredValue::new(storefront);

        let visible_products = Memo::new(move |_| {
            let filter = store.filter().read();
            storefront.with_value(|s| {
                filter_products(s.catalog.products(), &filter)
                    .into_iter()
                    .cloned()
                    .collect()
            })
        });
        let cart_total = Memo::new(move |_| store.cart().read().total());
        let cart_count = Memo::new(move |_| store.cart().read().len());

        Self {
            storefront,
            visible_products,
            cart_total,
            cart_count,
        }
    }

    pub fn shop(&self) -> ShopInfo {
        self.storefront.with_value(|s| s.shop.clone())
    }

    /// Formatted price using the shop currency
    pub fn price(&self, amount: u64) -> String {
        self.storefront
            .with_value(|s| storefront_engine::format_price(amount, &s.shop.currency_symbol))
    }

    /// Options listed in the sidebar for a facet
    pub fn facet_options(&self, facet: Facet) -> Vec<String> {
        self.storefront.with_value(|s| s.catalog.facet_options(facet))
    }
}

/// Get the shop context
pub fn use_shop_context() -> ShopContext {
    expect_context::<ShopContext>()
}
