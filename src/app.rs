//! Root application component and context providers.

use leptos::prelude::*;
use leptos_meta::{Meta, Title, provide_meta_context};

use crate::components::about::About;
use crate::components::contact::Contact;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::hero::Hero;
use crate::components::practice_areas::PracticeAreas;
use crate::components::publications::Publications;
use crate::components::team::Team;
use crate::components::why_choose_us::WhyChooseUs;
use crate::config::SiteConfig;
use crate::content::{FIRM_NAME, TAGLINE};

/// Root application component.
///
/// Provides [`SiteConfig`] to every section and lays the page out in order.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(SiteConfig::load());

    let title = format!("{FIRM_NAME} | {TAGLINE}");

    view! {
        <Title text=title/>
        <Meta name="description" content="Zia & Associates, a law firm at the District Courts, Faisalabad."/>

        <div class="site">
            <Header/>
            <main>
                <Hero/>
                <About/>
                <PracticeAreas/>
                <WhyChooseUs/>
                <Team/>
                <Publications/>
                <Contact/>
            </main>
            <Footer/>
        </div>
    }
}
