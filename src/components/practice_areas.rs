//! Grid of the firm's practice areas.

use leptos::prelude::*;

use crate::components::animated_section::AnimatedSection;
use crate::components::icon::Glyph;
use crate::components::section_header::SectionHeader;
use crate::content::PRACTICE_AREAS;

#[component]
pub fn PracticeAreas() -> impl IntoView {
    view! {
        <AnimatedSection id="practice-areas" labelled_by="practice-areas-heading" class="section section--navy">
            <div class="container">
                <SectionHeader title="Our Practice Areas" id="practice-areas-heading"/>
                <div class="card-grid card-grid--three">
                    {PRACTICE_AREAS
                        .iter()
                        .map(|area| {
                            view! {
                                <div class="unified-card practice-card">
                                    <div class="practice-card__badge">
                                        <Glyph icon=area.icon class="practice-card__icon"/>
                                    </div>
                                    <h3 class="card-title">{area.name}</h3>
                                    <p class="card-text">{area.description}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </AnimatedSection>
    }
}
