//! Shop State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. One store is
//! created per mounted App; nothing here is a process-wide singleton.

use leptos::prelude::*;
use reactive_stores::Store;
use storefront_engine::{Cart, Facet, FilterState, Product, Section};

/// Mutable storefront state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct ShopState {
    /// Facet selections and search text
    pub filter: FilterState,
    /// Cart lines in the order they were added
    pub cart: Cart,
    /// Section chosen in the navigation
    pub active_section: Section,
}

/// Type alias for the store
pub type ShopStore = Store<ShopState>;

/// Get the shop store from context
pub fn use_shop_store() -> ShopStore {
    expect_context::<ShopStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Toggle a facet value in the current filter
pub fn store_toggle_facet(store: &ShopStore, facet: Facet, value: &str) {
    store.filter().write().toggle(facet, value);
    log::debug!("[STORE] Toggled {:?} {:?}", facet, value);
}

/// Replace the search text
pub fn store_set_search(store: &ShopStore, text: String) {
    store.filter().write().set_search(text);
}

/// Append a cart line for the product
pub fn store_add_to_cart(store: &ShopStore, product: &Product) {
    store.cart().write().add(product);
    log::debug!("[STORE] Cart now has {} lines", store.cart().read().len());
}

/// Remove the cart line at the given position
pub fn store_remove_from_cart(store: &ShopStore, index: usize) {
    if store.cart().write().remove(index).is_none() {
        log::warn!("[STORE] No cart line at position {}", index);
    }
}

/// Switch the visible section
pub fn store_set_section(store: &ShopStore, section: Section) {
    store.active_section().set(section);
    log::debug!("[STORE] Section {:?}", section);
}
