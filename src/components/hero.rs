//! Full-height landing banner. Not scroll-animated; it is visible on load.

use leptos::prelude::*;

use crate::content::{FIRM_NAME, TAGLINE};

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="hero__constellation" aria-hidden="true"></div>
            <div class="hero__glow"></div>
            <div class="hero__content animate-fade-in-down">
                <h1 class="hero__title">{FIRM_NAME}</h1>
                <p class="hero__tagline animated-gradient-text">{TAGLINE}</p>
                <a href="#contact" class="button button--gold interactive-element">"Get a Consultation"</a>
            </div>
            <div class="hero__scroll-cue">
                <a href="#about" aria-label="Scroll down">
                    <div class="hero__mouse">
                        <div class="hero__wheel"></div>
                    </div>
                </a>
            </div>
        </section>
    }
}
