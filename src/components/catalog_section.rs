//! Catalog Section Component
//!
//! Hero banner, filter sidebar and the filtered product grid.

use leptos::prelude::*;

use crate::components::{FilterSidebar, ProductCard};
use crate::context::use_shop_context;

#[component]
fn Hero() -> impl IntoView {
    let hero = use_shop_context().shop().hero;

    view! {
        <section class="hero">
            <div class="hero-backdrop"></div>
            <div class="container hero-content">
                <h2 class="hero-title gradient-text">{hero.title}</h2>
                <p class="hero-subtitle">{hero.subtitle}</p>
                <button class="btn btn-gradient btn-lg">{hero.call_to_action}</button>
            </div>
        </section>
    }
}

#[component]
pub fn CatalogSection() -> impl IntoView {
    let ctx = use_shop_context();

    view! {
        <Hero />
        <section class="container catalog-layout">
            <FilterSidebar />
            <main class="catalog-main">
                <div class="catalog-heading">
                    <h2 class="section-title">"Каталог товаров"</h2>
                    <p class="muted">
                        {move || format!("Найдено товаров: {}", ctx.visible_products.get().len())}
                    </p>
                </div>
                <div class="product-grid">
                    <For
                        each=move || ctx.visible_products.get()
                        key=|product| product.id
                        children=move |product| view! { <ProductCard product=product /> }
                    />
                </div>
            </main>
        </section>
    }
}
