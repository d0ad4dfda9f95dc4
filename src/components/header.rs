//! Header Component
//!
//! Sticky top bar with the store name, section navigation and cart button.

use leptos::prelude::*;
use storefront_engine::Section;

use crate::components::Icon;
use crate::context::use_shop_context;
use crate::store::{store_set_section, use_shop_store, ShopStateStoreFields};

/// Navigation label for a section
pub fn section_label(section: Section) -> &'static str {
    match section {
        Section::Catalog => "Каталог",
        Section::About => "О нас",
        Section::Contacts => "Контакты",
    }
}

/// Section navigation buttons; `class_prefix` selects header or footer styling
#[component]
pub fn SectionNav(#[prop(into)] class_prefix: String) -> impl IntoView {
    let store = use_shop_store();

    view! {
        <nav class=format!("{}-nav", class_prefix)>
            {Section::ALL.iter().map(|section| {
                let section = *section;
                let prefix = class_prefix.clone();
                let is_active = move || store.active_section().get() == section;
                view! {
                    <button
                        class=move || if is_active() {
                            format!("{}-nav-btn active", prefix)
                        } else {
                            format!("{}-nav-btn", prefix)
                        }
                        on:click=move |_| store_set_section(&store, section)
                    >
                        {section_label(section)}
                    </button>
                }
            }).collect_view()}
        </nav>
    }
}

#[component]
pub fn Header(set_cart_open: WriteSignal<bool>) -> impl IntoView {
    let ctx = use_shop_context();
    let shop_name = ctx.shop().name;

    view! {
        <header class="site-header">
            <div class="container header-row">
                <h1 class="brand-title gradient-text">{shop_name}</h1>

                <SectionNav class_prefix="header" />

                <button
                    class="cart-btn"
                    title="Корзина"
                    on:click=move |_| set_cart_open.set(true)
                >
                    <Icon name="ShoppingCart" />
                    <Show when=move || { ctx.cart_count.get() > 0 }>
                        <span class="cart-badge">{move || ctx.cart_count.get()}</span>
                    </Show>
                </button>
            </div>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_labels() {
        let labels: Vec<&str> = Section::ALL.iter().map(|s| section_label(*s)).collect();
        assert_eq!(labels, vec!["Каталог", "О нас", "Контакты"]);
    }
}
