//! Filter Sidebar Component
//!
//! Search box and facet pickers for the catalog.

use leptos::prelude::*;
use storefront_engine::Facet;

use crate::components::Icon;
use crate::context::use_shop_context;
use crate::store::{store_set_search, store_toggle_facet, use_shop_store, ShopStateStoreFields};

/// Sidebar heading for a facet: (title, icon, accent class)
pub fn facet_heading(facet: Facet) -> (&'static str, &'static str, &'static str) {
    match facet {
        Facet::Brand => ("Бренды", "Tag", "text-secondary"),
        Facet::Size => ("Размеры", "Ruler", "text-accent"),
        Facet::Color => ("Цвета", "Palette", "text-primary"),
    }
}

#[component]
fn FilterCard(facet: Facet, children: Children) -> impl IntoView {
    let (title, icon, accent) = facet_heading(facet);
    view! {
        <div class="card filter-card">
            <h3 class="filter-title">
                <Icon name=icon class=accent />
                {title}
            </h3>
            {children()}
        </div>
    }
}

#[component]
fn SearchCard() -> impl IntoView {
    let store = use_shop_store();

    view! {
        <div class="card filter-card">
            <h3 class="filter-title">
                <Icon name="Search" class="text-primary" />
                "Поиск"
            </h3>
            <input
                type="text"
                class="text-input"
                placeholder="Найти товар..."
                prop:value=move || store.filter().read().search.clone()
                on:input=move |ev| store_set_search(&store, event_target_value(&ev))
            />
        </div>
    }
}

/// Checkbox list, used for brands and colors
#[component]
fn FacetChecklist(facet: Facet) -> impl IntoView {
    let store = use_shop_store();
    let ctx = use_shop_context();
    let options = ctx.facet_options(facet);

    view! {
        <FilterCard facet=facet>
            <div class="checklist">
                {options.into_iter().map(|value| {
                    let checked_value = value.clone();
                    let toggle_value = value.clone();
                    view! {
                        <label class="checklist-row">
                            <input
                                type="checkbox"
                                prop:checked=move || store.filter().read().is_selected(facet, &checked_value)
                                on:change=move |_| store_toggle_facet(&store, facet, &toggle_value)
                            />
                            <span class="checklist-label">{value}</span>
                        </label>
                    }
                }).collect_view()}
            </div>
        </FilterCard>
    }
}

/// Badge toggles, used for sizes
#[component]
fn FacetBadges(facet: Facet) -> impl IntoView {
    let store = use_shop_store();
    let ctx = use_shop_context();
    let options = ctx.facet_options(facet);

    view! {
        <FilterCard facet=facet>
            <div class="badge-row">
                {options.into_iter().map(|value| {
                    let checked_value = value.clone();
                    let toggle_value = value.clone();
                    let is_selected = move || store.filter().read().is_selected(facet, &checked_value);
                    view! {
                        <button
                            class=move || if is_selected() { "badge badge-toggle selected" } else { "badge badge-toggle" }
                            on:click=move |_| store_toggle_facet(&store, facet, &toggle_value)
                        >
                            {value}
                        </button>
                    }
                }).collect_view()}
            </div>
        </FilterCard>
    }
}

#[component]
pub fn FilterSidebar() -> impl IntoView {
    view! {
        <aside class="filter-sidebar">
            <SearchCard />
            <FacetChecklist facet=Facet::Brand />
            <FacetBadges facet=Facet::Size />
            <FacetChecklist facet=Facet::Color />
        </aside>
    }
}
