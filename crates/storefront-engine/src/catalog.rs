//! Catalog
//!
//! The compiled-in storefront document: shop info plus a validated product list.

use std::collections::HashSet;

use serde::Deserialize;

use crate::error::CatalogError;
use crate::filter::facet_options;
use crate::models::{Facet, Product, ProductId};
use crate::shop::ShopInfo;

const BUILTIN_DOCUMENT: &str = include_str!("../assets/storefront.json");

/// Immutable, validated product list in display order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Validate and wrap a product list.
    ///
    /// Ids must be unique; every product needs at least one size and one
    /// color, with no label repeated inside a product.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut ids = HashSet::new();
        for product in &products {
            if !ids.insert(product.id) {
                return Err(CatalogError::DuplicateProductId(product.id));
            }
            if product.sizes.is_empty() {
                return Err(CatalogError::EmptySizes { id: product.id });
            }
            if product.colors.is_empty() {
                return Err(CatalogError::EmptyColors { id: product.id });
            }
            if let Some(label) = first_repeated(&product.sizes) {
                return Err(CatalogError::DuplicateSize { id: product.id, label });
            }
            if let Some(label) = first_repeated(&product.colors) {
                return Err(CatalogError::DuplicateColor { id: product.id, label });
            }
        }
        Ok(Self { products })
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Distinct labels for a facet, first-occurrence order
    pub fn facet_options(&self, facet: Facet) -> Vec<String> {
        facet_options(&self.products, facet)
    }
}

fn first_repeated(labels: &[String]) -> Option<String> {
    let mut seen = HashSet::new();
    labels.iter().find(|l| !seen.insert(l.as_str())).cloned()
}

#[derive(Deserialize)]
struct StorefrontDocument {
    shop: ShopInfo,
    products: Vec<Product>,
}

/// Shop info and catalog loaded together
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Storefront {
    pub shop: ShopInfo,
    pub catalog: Catalog,
}

impl Storefront {
    /// The document embedded at compile time
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_DOCUMENT)
    }

    pub fn from_json(text: &str) -> Result<Self, CatalogError> {
        let doc: StorefrontDocument = serde_json::from_str(text)?;
        let catalog = Catalog::new(doc.products)?;
        log::debug!("[CATALOG] Loaded {} products for {}", catalog.len(), doc.shop.name);
        Ok(Self { shop: doc.shop, catalog })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn make_product(id: ProductId, sizes: &[&str], colors: &[&str]) -> Product {
        Product {
            id,
            name: format!("Product {}", id),
            price: 1000,
            category: "Одежда".to_string(),
            image: String::new(),
            brand: "UrbanStyle".to_string(),
            sizes: sizes.iter().map(|s| s.to_string()).collect(),
            colors: colors.iter().map(|s| s.to_string()).collect(),
            is_new: false,
        }
    }

    #[test]
    fn test_builtin_document_loads() {
        let storefront = Storefront::builtin().unwrap();
        assert_eq!(storefront.shop.name, "StyleHub");
        assert_eq!(storefront.shop.currency_symbol, "₽");
        assert_eq!(storefront.catalog.len(), 6);

        let ids: Vec<ProductId> = storefront.catalog.products().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);

        let prices: Vec<u64> = storefront.catalog.products().iter().map(|p| p.price).collect();
        assert_eq!(prices, vec![15990, 8990, 6990, 4990, 3990, 2990]);

        assert!(storefront.catalog.get(1).unwrap().is_new);
        assert!(!storefront.catalog.get(3).unwrap().is_new);
        assert!(storefront.catalog.get(42).is_none());
    }

    #[test]
    fn test_builtin_brand_options() {
        let storefront = Storefront::builtin().unwrap();
        assert_eq!(
            storefront.catalog.facet_options(Facet::Brand),
            vec!["UrbanStyle", "SportLux", "DenimCo", "LuxVision"]
        );
    }

    #[test]
    fn test_builtin_size_and_color_options() {
        let catalog = Storefront::builtin().unwrap().catalog;
        assert_eq!(
            catalog.facet_options(Facet::Size),
            vec!["S", "M", "L", "XL", "39", "40", "41", "42", "43", "ONE SIZE"]
        );
        assert_eq!(
            catalog.facet_options(Facet::Color),
            vec!["Черный", "Коричневый", "Белый", "Бежевый", "Синий", "Серый"]
        );
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let err = Catalog::new(vec![
            make_product(1, &["S"], &["Черный"]),
            make_product(1, &["M"], &["Белый"]),
        ])
        .unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateProductId(1)));
    }

    #[test]
    fn test_rejects_empty_sizes_and_colors() {
        let err = Catalog::new(vec![make_product(2, &[], &["Черный"])]).unwrap_err();
        assert!(matches!(err, CatalogError::EmptySizes { id: 2 }));

        let err = Catalog::new(vec![make_product(3, &["S"], &[])]).unwrap_err();
        assert!(matches!(err, CatalogError::EmptyColors { id: 3 }));
    }

    #[test]
    fn test_rejects_repeated_labels() {
        let err = Catalog::new(vec![make_product(4, &["S", "M", "S"], &["Черный"])]).unwrap_err();
        match err {
            CatalogError::DuplicateSize { id, label } => {
                assert_eq!(id, 4);
                assert_eq!(label, "S");
            }
            other => panic!("unexpected error: {other}"),
        }

        let err = Catalog::new(vec![make_product(5, &["S"], &["Синий", "Синий"])]).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateColor { id: 5, .. }));
    }

    #[test]
    fn test_from_json_reports_parse_errors() {
        let err = Storefront::from_json("{ not json").unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
        assert!(err.to_string().starts_with("storefront document is not valid JSON"));
    }
}
