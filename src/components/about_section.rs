//! About Section Component

use leptos::prelude::*;

use crate::components::Icon;
use crate::context::use_shop_context;
use crate::markdown::{parse_markdown, parse_markdown_inline};

#[component]
pub fn AboutSection() -> impl IntoView {
    let about = use_shop_context().shop().about;
    let body_html = parse_markdown(&about.body);

    view! {
        <section class="container page-section">
            <h2 class="page-title gradient-text">"О нас"</h2>
            <div class="card about-card">
                <div class="prose" inner_html=body_html></div>
                <div class="feature-grid">
                    {about.features.into_iter().map(|feature| {
                        view! {
                            <div class="feature-card">
                                <Icon name=feature.icon size=40 class="feature-icon" />
                                <h3 class="feature-title">{feature.title}</h3>
                                <p class="muted" inner_html=parse_markdown_inline(&feature.text)></p>
                            </div>
                        }
                    }).collect_view()}
                </div>
            </div>
        </section>
    }
}
