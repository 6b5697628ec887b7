//! Team roster. The site developer's card carries a DEV badge and links out.

use leptos::either::Either;
use leptos::prelude::*;

use crate::components::animated_section::AnimatedSection;
use crate::components::icon::Glyph;
use crate::components::section_header::SectionHeader;
use crate::content::{Icon, TEAM, TeamMember};

#[component]
pub fn Team() -> impl IntoView {
    view! {
        <AnimatedSection id="team" labelled_by="team-heading" class="section section--navy">
            <div class="container">
                <SectionHeader title="Meet Our Team" id="team-heading"/>
                <div class="team-grid">{TEAM.iter().copied().map(team_card).collect_view()}</div>
            </div>
        </AnimatedSection>
    }
}

fn team_card(member: TeamMember) -> impl IntoView {
    let body = view! {
        <>
            {member
                .is_dev
                .then(|| {
                    view! {
                        <div class="dev-badge">
                            <Glyph icon=Icon::CodeBracket class="dev-badge__icon"/>
                            <span>"DEV"</span>
                        </div>
                    }
                })}
            <div class="team-card__avatar">
                <Glyph icon=member.icon class="team-card__icon"/>
            </div>
            <div class="team-card__body">
                <h3 class="team-card__name">{member.name}</h3>
                <p class="team-card__title">{member.title}</p>
                <p class="team-card__bio">{member.bio}</p>
            </div>
        </>
    };

    let link_class = if member.is_dev { "unified-card team-card dev-card" } else { "unified-card team-card" };
    match member.link {
        Some(href) => Either::Left(view! {
            <a
                href=href
                target="_blank"
                rel="noopener noreferrer"
                class=link_class
            >
                {body}
            </a>
        }),
        None => Either::Right(view! { <div class="unified-card team-card">{body}</div> }),
    }
}
