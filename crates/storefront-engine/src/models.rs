//! Storefront Models
//!
//! Data structures shared by the catalog, filters and cart.

use serde::{Deserialize, Serialize};

pub type ProductId = u32;

/// Product data structure (matches the storefront document)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Whole currency units
    pub price: u64,
    pub category: String,
    pub image: String,
    pub brand: String,
    pub sizes: Vec<String>,
    pub colors: Vec<String>,
    #[serde(default)]
    pub is_new: bool,
}

impl Product {
    /// Labels this product carries for a facet, in document order
    pub fn facet_values(&self, facet: Facet) -> &[String] {
        match facet {
            Facet::Brand => std::slice::from_ref(&self.brand),
            Facet::Size => &self.sizes,
            Facet::Color => &self.colors,
        }
    }
}

/// One cart line. Holds a copy of the product, not a reference into the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub product: Product,
    pub quantity: u32,
    pub selected_size: String,
    pub selected_color: String,
}

impl CartItem {
    /// Single unit with the product's first size and first color
    pub fn from_product(product: &Product) -> Self {
        Self {
            product: product.clone(),
            quantity: 1,
            selected_size: product.sizes.first().cloned().unwrap_or_default(),
            selected_color: product.colors.first().cloned().unwrap_or_default(),
        }
    }

    pub fn line_total(&self) -> u64 {
        self.product.price * u64::from(self.quantity)
    }
}

/// Independent filter dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Facet {
    Brand,
    Size,
    Color,
}

impl Facet {
    pub const ALL: [Facet; 3] = [Facet::Brand, Facet::Size, Facet::Color];
}

/// Page section selected from the navigation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Section {
    #[default]
    Catalog,
    About,
    Contacts,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::Catalog, Section::About, Section::Contacts];
}
