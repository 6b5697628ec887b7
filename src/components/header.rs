//! Fixed site header with desktop nav and the mobile menu toggle.

use leptos::prelude::*;

use crate::components::icon::Glyph;
use crate::content::{FIRM_NAME, Icon, NAV_LINKS};
use crate::state::ui::HeaderState;

/// Fixed header. Turns opaque once the page scrolls past the top.
#[component]
pub fn Header() -> impl IntoView {
    let header = RwSignal::new(HeaderState::default());

    #[cfg(feature = "csr")]
    {
        let sync_scroll = move || {
            let scroll_y = window().scroll_y().unwrap_or(0.0);
            header.update(|h| h.on_scroll(scroll_y));
        };
        sync_scroll();
        let listener = window_event_listener(leptos::ev::scroll, move |_| sync_scroll());
        on_cleanup(move || listener.remove());
    }

    let toggle_menu = move |_| header.update(HeaderState::toggle_menu);
    let close_menu = move |_| header.update(HeaderState::close_menu);

    view! {
        <header class=move || header.get().class()>
            <div class="site-header__bar">
                <a href="#" class="site-header__brand">{FIRM_NAME}</a>
                <nav class="site-header__nav">
                    {NAV_LINKS
                        .iter()
                        .map(|link| view! { <a href=link.href class="site-header__link">{link.name}</a> })
                        .collect_view()}
                </nav>
                <button
                    type="button"
                    class="site-header__toggle"
                    aria-label=move || header.get().menu_label()
                    aria-expanded=move || header.get().menu_open.to_string()
                    on:click=toggle_menu
                >
                    {move || {
                        let icon = if header.get().menu_open { Icon::Close } else { Icon::Menu };
                        view! { <Glyph icon=icon class="site-header__toggle-icon"/> }
                    }}
                </button>
            </div>
            <Show when=move || header.get().menu_open>
                <nav class="site-header__mobile-nav">
                    {NAV_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <a href=link.href class="site-header__link" on:click=close_menu>
                                    {link.name}
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>
            </Show>
        </header>
    }
}
