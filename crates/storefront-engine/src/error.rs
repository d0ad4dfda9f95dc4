use thiserror::Error;

use crate::models::ProductId;

/// Reasons a storefront document is rejected
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("storefront document is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("product id {0} appears more than once")]
    DuplicateProductId(ProductId),

    #[error("product {id} has no sizes")]
    EmptySizes { id: ProductId },

    #[error("product {id} has no colors")]
    EmptyColors { id: ProductId },

    #[error("product {id} lists size {label:?} twice")]
    DuplicateSize { id: ProductId, label: String },

    #[error("product {id} lists color {label:?} twice")]
    DuplicateColor { id: ProductId, label: String },
}
