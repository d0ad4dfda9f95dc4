//! Cart Drawer Component
//!
//! Slide-in panel listing cart lines with their total.

use leptos::prelude::*;
use storefront_engine::CartItem;

use crate::components::Icon;
use crate::context::use_shop_context;
use crate::store::{store_remove_from_cart, use_shop_store, ShopStateStoreFields};

/// One cart line; `index` is its current position in the cart
#[component]
fn CartLine(index: usize, item: CartItem) -> impl IntoView {
    let store = use_shop_store();
    let ctx = use_shop_context();
    let product = item.product;

    view! {
        <div class="card cart-line">
            <img src=product.image.clone() alt=product.name.clone() class="cart-line-image" />
            <div class="cart-line-body">
                <h3 class="cart-line-name">{product.name.clone()}</h3>
                <p class="muted">{format!("{} • {}", item.selected_size, item.selected_color)}</p>
                <p class="cart-line-price">{ctx.price(product.price)}</p>
            </div>
            <button
                class="icon-btn remove-btn"
                title="Удалить"
                on:click=move |_| store_remove_from_cart(&store, index)
            >
                <Icon name="Trash2" size=18 />
            </button>
        </div>
    }
}

#[component]
pub fn CartDrawer(
    open: ReadSignal<bool>,
    set_open: WriteSignal<bool>,
) -> impl IntoView {
    let store = use_shop_store();
    let ctx = use_shop_context();

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Escape" {
            set_open.set(false);
        }
    };

    view! {
        <Show when=move || open.get()>
            <div class="drawer-overlay" on:click=move |_| set_open.set(false)></div>
            <aside class="cart-drawer" tabindex="-1" on:keydown=on_keydown>
                <div class="drawer-header">
                    <h2 class="drawer-title">"Корзина"</h2>
                    <button class="icon-btn" title="Закрыть" on:click=move |_| set_open.set(false)>
                        <Icon name="X" size=18 />
                    </button>
                </div>

                <div class="drawer-body">
                    {move || if ctx.cart_count.get() == 0 {
                        view! { <p class="cart-empty muted">"Корзина пуста"</p> }.into_any()
                    } else {
                        // Lines are keyed by position, so the list is rebuilt on every change
                        let lines = store.cart().read().items().to_vec();
                        view! {
                            <div class="cart-lines">
                                {lines.into_iter().enumerate().map(|(index, item)| {
                                    view! { <CartLine index=index item=item /> }
                                }).collect_view()}
                            </div>
                            <div class="cart-summary">
                                <div class="cart-total-row">
                                    <span class="cart-total-label">"Итого:"</span>
                                    <span class="cart-total">{move || ctx.price(ctx.cart_total.get())}</span>
                                </div>
                                // No checkout flow behind this button
                                <button class="btn btn-gradient btn-block">"Оформить заказ"</button>
                            </div>
                        }.into_any()
                    }}
                </div>
            </aside>
        </Show>
    }
}
