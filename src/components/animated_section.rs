//! Section wrapper that fades its content in the first time it scrolls into
//! view.

#[cfg(test)]
#[path = "animated_section_test.rs"]
mod animated_section_test;

use leptos::prelude::*;

use crate::config::SiteConfig;
use crate::util::visibility::use_visibility;

/// Direction the content travels while it fades in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Reveal {
    #[default]
    FadeInUp,
    FadeInDown,
}

impl Reveal {
    /// Offset applied while the section is still hidden.
    pub fn hidden_class(self) -> &'static str {
        match self {
            Self::FadeInUp => "opacity-0 translate-y-10",
            Self::FadeInDown => "opacity-0 -translate-y-10",
        }
    }
}

pub const VISIBLE_CLASS: &str = "opacity-100 translate-y-0";

/// Full class list for an animated section in its current reveal state.
pub fn section_class(extra: &str, reveal: Reveal, visible: bool) -> String {
    let state = if visible { VISIBLE_CLASS } else { reveal.hidden_class() };
    if extra.is_empty() {
        format!("animated-section {state}")
    } else {
        format!("animated-section {extra} {state}")
    }
}

/// `<section>` revealed by the page's [`SiteConfig::reveal_threshold`].
#[component]
pub fn AnimatedSection(
    #[prop(optional)] id: Option<&'static str>,
    #[prop(optional)] labelled_by: Option<&'static str>,
    #[prop(optional)] class: &'static str,
    #[prop(optional)] reveal: Reveal,
    children: Children,
) -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let node = NodeRef::<leptos::html::Section>::new();
    let visible = use_visibility(node, config.reveal_threshold);

    view! {
        <section
            node_ref=node
            id=id
            aria-labelledby=labelled_by
            class=move || section_class(class, reveal, visible.get())
        >
            {children()}
        </section>
    }
}
