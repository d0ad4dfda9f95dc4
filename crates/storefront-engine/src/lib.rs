//! StyleHub Storefront Engine
//!
//! Pure state model behind the storefront UI:
//! - models: products, cart items, facets, sections
//! - catalog: the compiled-in storefront document and its validation
//! - filter: facet selections, search, and the filtered product view
//! - cart: cart lines and totals
//! - price: price display formatting

mod models;
mod error;
mod shop;
mod catalog;
mod filter;
mod cart;
mod price;

pub use models::{CartItem, Facet, Product, ProductId, Section};
pub use error::CatalogError;
pub use shop::{AboutInfo, ContactEntry, FeatureCard, HeroInfo, ShopInfo, SocialLink};
pub use catalog::{Catalog, Storefront};
pub use filter::{facet_options, filter_products, toggle_selection, FilterState, Selection};
pub use cart::Cart;
pub use price::format_price;
