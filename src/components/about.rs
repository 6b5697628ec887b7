//! "About Our Firm" section.

use leptos::prelude::*;

use crate::components::animated_section::AnimatedSection;
use crate::components::icon::Glyph;
use crate::components::section_header::SectionHeader;
use crate::content::{ABOUT_PARAGRAPHS, Icon};

#[component]
pub fn About() -> impl IntoView {
    view! {
        <AnimatedSection id="about" labelled_by="about-heading" class="section section--dark about">
            <Glyph icon=Icon::Gavel class="about__background"/>
            <div class="container">
                <SectionHeader title="About Our Firm" id="about-heading"/>
                <div class="about__body">
                    {ABOUT_PARAGRAPHS.iter().map(|text| view! { <p>{*text}</p> }).collect_view()}
                </div>
            </div>
        </AnimatedSection>
    }
}
