//! "Why Choose Us" highlights.

use leptos::prelude::*;

use crate::components::animated_section::AnimatedSection;
use crate::components::icon::Glyph;
use crate::components::section_header::SectionHeader;
use crate::content::WHY_CHOOSE_US;

#[component]
pub fn WhyChooseUs() -> impl IntoView {
    view! {
        <AnimatedSection labelled_by="why-choose-us-heading" class="section section--dark">
            <div class="container">
                <SectionHeader title="Why Choose Us" id="why-choose-us-heading"/>
                <div class="card-grid card-grid--three">
                    {WHY_CHOOSE_US
                        .iter()
                        .map(|point| {
                            view! {
                                <div class="unified-card card-with-corners highlight-card">
                                    <Glyph icon=point.icon class="highlight-card__icon"/>
                                    <h3 class="card-title">{point.title}</h3>
                                    <p class="card-text">{point.description}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </AnimatedSection>
    }
}
