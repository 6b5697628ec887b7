//! Centered section title with the gold rule and optional subtitle.

use leptos::prelude::*;

#[component]
pub fn SectionHeader(
    title: &'static str,
    /// Heading id, referenced by the section's `aria-labelledby`.
    id: &'static str,
    #[prop(optional)] subtitle: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="section-header">
            <h2 id=id class="section-header__title">{title}</h2>
            <div class="section-header__rule"></div>
            {subtitle.map(|text| view! { <p class="section-header__subtitle">{text}</p> })}
        </div>
    }
}
