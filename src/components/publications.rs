//! Articles authored by the firm's lawyers.

use leptos::prelude::*;

use crate::components::animated_section::AnimatedSection;
use crate::components::icon::Glyph;
use crate::components::section_header::SectionHeader;
use crate::content::{Icon, PUBLICATIONS};

#[component]
pub fn Publications() -> impl IntoView {
    view! {
        <AnimatedSection id="publications" labelled_by="publications-heading" class="section section--dark">
            <div class="container">
                <SectionHeader
                    title="Our Publications"
                    id="publications-heading"
                    subtitle="Sharing our expertise and insights on pivotal legal developments and topics."
                />
                <div class="publication-list">
                    {PUBLICATIONS
                        .iter()
                        .map(|publication| {
                            view! {
                                <article class="unified-card publication">
                                    <Glyph icon=Icon::BookOpen class="publication__icon"/>
                                    <div>
                                        <h3 class="publication__title">{publication.title}</h3>
                                        <p class="publication__author">{format!("By {}", publication.author)}</p>
                                        <p class="card-text">{publication.excerpt}</p>
                                    </div>
                                </article>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </AnimatedSection>
    }
}
