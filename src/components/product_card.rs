//! Product Card Component

use leptos::prelude::*;
use storefront_engine::Product;

use crate::components::Icon;
use crate::context::use_shop_context;
use crate::store::{store_add_to_cart, use_shop_store};

#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let store = use_shop_store();
    let ctx = use_shop_context();
    let price = ctx.price(product.price);
    let is_new = product.is_new;
    let Product { name, category, image, brand, .. } = product.clone();
    let alt = name.clone();

    view! {
        <div class="card product-card">
            <div class="product-image-wrap">
                <img src=image alt=alt class="product-image" />
                <Show when=move || is_new>
                    <span class="badge badge-new">"NEW"</span>
                </Show>
            </div>
            <div class="product-body">
                <span class="badge badge-outline">{category}</span>
                <h3 class="product-name">{name}</h3>
                <p class="muted product-brand">{brand}</p>
                <div class="product-footer">
                    <span class="product-price gradient-text">{price}</span>
                    <button
                        class="btn btn-gradient"
                        on:click=move |_| store_add_to_cart(&store, &product)
                    >
                        <Icon name="ShoppingCart" size=18 />
                        "В корзину"
                    </button>
                </div>
            </div>
        </div>
    }
}
