use crate::content::{BRAND, NAV_LINKS};
use leptos::ev;
use leptos::prelude::*;

#[component]
pub fn Nav() -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);
    let (scrolled, set_scrolled) = signal(false);

    // Header turns solid once the page leaves the top; lives as long as the page
    let _ = window_event_listener(ev::scroll, move |_| {
        let y = web_sys::window()
            .and_then(|w| w.scroll_y().ok())
            .unwrap_or_default();
        set_scrolled.set(y > 20.0);
    });

    view! {
        <header class=move || if scrolled.get() { "nav nav-scrolled" } else { "nav" }>
            <div class="nav-inner container">
                <a href="#hero" class="nav-brand">
                    <img src="assets/gmash-logo.png" alt="Gmash LLC Logo" class="nav-logo" />
                    <span class="nav-title">{BRAND}</span>
                </a>
                <nav class="nav-links">
                    {NAV_LINKS
                        .iter()
                        .map(|link| view! { <a href=link.href class="nav-link">{link.name}</a> })
                        .collect_view()}
                    <a href="#contact" class="nav-cta">"Consult Today"</a>
                </nav>
                <button
                    class="nav-toggle"
                    aria-label="Toggle Menu"
                    on:click=move |_| set_menu_open.update(|o| *o = !*o)
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
            </div>

            // Mobile dropdown
            <Show when=move || menu_open.get()>
                <div class="nav-drawer">
                    <nav class="nav-drawer-links">
                        {NAV_LINKS
                            .iter()
                            .map(|link| {
                                view! {
                                    <a
                                        href=link.href
                                        class="nav-drawer-link"
                                        on:click=move |_| set_menu_open.set(false)
                                    >
                                        {link.name}
                                    </a>
                                }
                            })
                            .collect_view()}
                        <a
                            href="#contact"
                            class="btn btn-primary nav-drawer-cta"
                            on:click=move |_| set_menu_open.set(false)
                        >
                            "Get Immediate Help"
                        </a>
                    </nav>
                </div>
            </Show>
        </header>
    }
}
