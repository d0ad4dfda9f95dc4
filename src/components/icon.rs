//! Icon Component
//!
//! Named icons rendered as glyphs.

use leptos::prelude::*;

/// Icon names and their glyphs
const GLYPHS: &[(&str, &str)] = &[
    ("ShoppingCart", "🛒"),
    ("Trash2", "🗑"),
    ("Search", "🔍"),
    ("Tag", "🏷"),
    ("Ruler", "📏"),
    ("Palette", "🎨"),
    ("Award", "🏆"),
    ("Truck", "🚚"),
    ("Heart", "❤"),
    ("Phone", "📞"),
    ("Mail", "✉"),
    ("MapPin", "📍"),
    ("Clock", "🕘"),
    ("Instagram", "📷"),
    ("Facebook", "📘"),
    ("Twitter", "🐦"),
    ("X", "✕"),
];

/// Glyph for an icon name; unknown names render as a bullet
pub fn glyph(name: &str) -> &'static str {
    GLYPHS
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, g)| *g)
        .unwrap_or("•")
}

#[component]
pub fn Icon(
    #[prop(into)] name: String,
    #[prop(default = 20)] size: u32,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    view! {
        <span
            class=format!("icon {}", class).trim_end().to_string()
            style=format!("font-size: {}px;", size)
            aria-hidden="true"
        >
            {glyph(&name)}
        </span>
    }
}
