//! Site footer: firm blurb, social links, quick links and contact details.

#[cfg(test)]
#[path = "footer_test.rs"]
mod footer_test;

use leptos::prelude::*;

use crate::components::icon::Glyph;
use crate::content::{FIRM_BLURB, FIRM_CONTACT, FIRM_NAME, Icon, NAV_LINKS};

/// Copyright line; the year is left out when the clock is unavailable.
pub fn copyright_line(year: Option<u32>) -> String {
    match year {
        Some(year) => format!("Your trusted legal partner. \u{a9} {year} All Rights Reserved."),
        None => "Your trusted legal partner. \u{a9} All Rights Reserved.".to_owned(),
    }
}

fn current_year() -> Option<u32> {
    #[cfg(feature = "csr")]
    {
        Some(js_sys::Date::new_0().get_full_year())
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let contact = FIRM_CONTACT;
    let mailto = contact.mailto();

    view! {
        <footer class="site-footer">
            <div class="container">
                <div class="footer-grid">
                    <div>
                        <h3 class="site-footer__brand">{FIRM_NAME}</h3>
                        <p class="site-footer__blurb">{FIRM_BLURB}</p>
                        <div class="site-footer__social">
                            <a href=contact.facebook target="_blank" rel="noopener noreferrer" aria-label="Facebook">
                                <Glyph icon=Icon::Facebook/>
                            </a>
                            <a href=contact.whatsapp target="_blank" rel="noopener noreferrer" aria-label="WhatsApp">
                                <Glyph icon=Icon::WhatsApp/>
                            </a>
                        </div>
                    </div>
                    <div>
                        <h4 class="site-footer__heading">"Quick Links"</h4>
                        <nav class="footer-links">
                            {NAV_LINKS.iter().map(|link| view! { <a href=link.href>{link.name}</a> }).collect_view()}
                        </nav>
                    </div>
                    <div>
                        <h4 class="site-footer__heading">"Contact Us"</h4>
                        <ul class="site-footer__contact">
                            <li>
                                <Glyph icon=Icon::MapPin class="site-footer__icon"/>
                                <span>{contact.address}</span>
                            </li>
                            <li>
                                <Glyph icon=Icon::Phone class="site-footer__icon"/>
                                <a href=contact.phone_href>{contact.phone_display}</a>
                            </li>
                            <li>
                                <Glyph icon=Icon::Envelope class="site-footer__icon"/>
                                <a href=mailto>{contact.email}</a>
                            </li>
                        </ul>
                    </div>
                </div>
                <div class="footer-bottom">
                    <p>{copyright_line(current_year())}</p>
                </div>
            </div>
        </footer>
    }
}
