//! UI Components
//!
//! Leptos components for the storefront page.

mod icon;
mod header;
mod cart_drawer;
mod filter_sidebar;
mod product_card;
mod catalog_section;
mod about_section;
mod contacts_section;
mod footer;

pub use icon::Icon;
pub use header::{Header, SectionNav};
pub use cart_drawer::CartDrawer;
pub use filter_sidebar::FilterSidebar;
pub use product_card::ProductCard;
pub use catalog_section::CatalogSection;
pub use about_section::AboutSection;
pub use contacts_section::ContactsSection;
pub use footer::Footer;
