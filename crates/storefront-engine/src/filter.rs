//! Catalog Filtering
//!
//! Facet selections combine with OR inside a facet and AND across facets.
//! An empty selection leaves its facet unfiltered.

use indexmap::IndexSet;

use crate::models::{Facet, Product};

/// Selected labels for one facet, in the order they were picked
pub type Selection = IndexSet<String>;

/// Current facet selections and search text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub brands: Selection,
    pub sizes: Selection,
    pub colors: Selection,
    pub search: String,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selection(&self, facet: Facet) -> &Selection {
        match facet {
            Facet::Brand => &self.brands,
            Facet::Size => &self.sizes,
            Facet::Color => &self.colors,
        }
    }

    pub fn selection_mut(&mut self, facet: Facet) -> &mut Selection {
        match facet {
            Facet::Brand => &mut self.brands,
            Facet::Size => &mut self.sizes,
            Facet::Color => &mut self.colors,
        }
    }

    pub fn is_selected(&self, facet: Facet, value: &str) -> bool {
        self.selection(facet).contains(value)
    }

    /// Add the value if absent, remove it if present
    pub fn toggle(&mut self, facet: Facet, value: &str) {
        toggle_selection(self.selection_mut(facet), value);
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search = text.into();
    }

    /// True when no facet is selected and the search text is empty
    pub fn is_unfiltered(&self) -> bool {
        Facet::ALL.iter().all(|f| self.selection(*f).is_empty()) && self.search.is_empty()
    }

    /// Whether a product passes every facet and the search text
    pub fn matches(&self, product: &Product) -> bool {
        self.matches_with_query(product, &self.search.to_lowercase())
    }

    fn matches_with_query(&self, product: &Product, query: &str) -> bool {
        Facet::ALL.iter().all(|facet| {
            let selection = self.selection(*facet);
            selection.is_empty()
                || product.facet_values(*facet).iter().any(|v| selection.contains(v))
        }) && (query.is_empty() || product.name.to_lowercase().contains(query))
    }
}

/// Toggle membership of `value` in a selection.
///
/// Removal keeps the remaining values in their original order.
pub fn toggle_selection(selection: &mut Selection, value: &str) {
    if !selection.shift_remove(value) {
        selection.insert(value.to_string());
    }
}

/// Products passing the filter, in catalog order
pub fn filter_products<'a>(products: &'a [Product], filter: &FilterState) -> Vec<&'a Product> {
    let query = filter.search.to_lowercase();
    let visible: Vec<&Product> = products
        .iter()
        .filter(|p| filter.matches_with_query(p, &query))
        .collect();
    log::trace!("[FILTER] {} of {} products visible", visible.len(), products.len());
    visible
}

/// Distinct facet labels across all products, first-occurrence order
pub fn facet_options(products: &[Product], facet: Facet) -> Vec<String> {
    products
        .iter()
        .flat_map(|p| p.facet_values(facet))
        .map(String::as_str)
        .collect::<IndexSet<&str>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}
