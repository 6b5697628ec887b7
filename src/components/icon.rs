//! Decorative glyph placeholder styled per icon.

use leptos::prelude::*;

use crate::content::Icon;

/// Renders `icon` as an `aria-hidden` span the stylesheet paints.
#[component]
pub fn Glyph(icon: Icon, #[prop(optional)] class: &'static str) -> impl IntoView {
    let class = format!("icon icon--{} {class}", icon.slug());
    view! { <span class=class aria-hidden="true"></span> }
}
