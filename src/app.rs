//! StyleHub App
//!
//! Root component: owns the shop store and switches between sections.

use leptos::prelude::*;
use reactive_stores::Store;
use storefront_engine::{Section, Storefront};

use crate::components::{AboutSection, CartDrawer, CatalogSection, ContactsSection, Footer, Header};
use crate::context::ShopContext;
use crate::store::{ShopState, ShopStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    match Storefront::builtin() {
        Ok(storefront) => view! { <StorefrontPage storefront=storefront /> }.into_any(),
        Err(err) => {
            log::error!("[APP] Failed to load storefront document: {}", err);
            view! {
                <div class="load-error">
                    <h1>"StyleHub"</h1>
                    <p>"Каталог недоступен."</p>
                    <pre>{err.to_string()}</pre>
                </div>
            }
            .into_any()
        }
    }
}

#[component]
fn StorefrontPage(storefront: Storefront) -> impl IntoView {
    // State lives as long as this view
    let store = Store::new(ShopState::default());
    provide_context(store);
    provide_context(ShopContext::new(storefront, store));

    let (cart_open, set_cart_open) = signal(false);

    view! {
        <div class="app-layout">
            <Header set_cart_open=set_cart_open />
            <CartDrawer open=cart_open set_open=set_cart_open />

            {move || match store.active_section().get() {
                Section::Catalog => view! { <CatalogSection /> }.into_any(),
                Section::About => view! { <AboutSection /> }.into_any(),
                Section::Contacts => view! { <ContactsSection /> }.into_any(),
            }}

            <Footer />
        </div>
    }
}
