//! Footer Component

use leptos::prelude::*;

use crate::components::{Icon, SectionNav};
use crate::context::use_shop_context;

#[component]
pub fn Footer() -> impl IntoView {
    let shop = use_shop_context().shop();

    view! {
        <footer class="site-footer">
            <div class="container footer-grid">
                <div>
                    <h3 class="footer-brand gradient-text">{shop.name}</h3>
                    <p class="footer-muted">{shop.tagline}</p>
                </div>
                <div>
                    <h4 class="footer-heading">"Навигация"</h4>
                    <SectionNav class_prefix="footer" />
                </div>
                <div>
                    <h4 class="footer-heading">"Социальные сети"</h4>
                    <div class="social-row">
                        {shop.socials.into_iter().map(|link| {
                            view! {
                                <button class="icon-btn social-btn" title=link.label>
                                    <Icon name=link.icon />
                                </button>
                            }
                        }).collect_view()}
                    </div>
                </div>
            </div>
            <div class="container footer-bottom">
                <p>{shop.copyright}</p>
            </div>
        </footer>
    }
}
