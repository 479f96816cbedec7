use crate::content::{BRAND, NAV_LINKS, OFFICE_ADDRESS, PHONE, SUPPORT_EMAIL};
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    // Explore column skips "Home" and "Contact"
    let explore = &NAV_LINKS[1..5];

    view! {
        <footer class="footer">
            <div class="container footer-grid">
                <div class="footer-brand">
                    <img src="assets/gmash-logo.png" alt=BRAND class="footer-logo" />
                    <p class="footer-tagline">
                        "At GMASH LLC, we empower homeowners with dignity and empathetic solutions. "
                        "We believe every home has a story, and we're here to help yours continue with stability and peace of mind."
                    </p>
                </div>
                <div class="footer-column">
                    <h4 class="footer-heading">"Explore"</h4>
                    <ul class="footer-links">
                        {explore
                            .iter()
                            .map(|link| view! { <li><a href=link.href class="footer-link">{link.name}</a></li> })
                            .collect_view()}
                    </ul>
                </div>
                <div class="footer-column footer-highlight">
                    <h4 class="footer-heading">"Sell & Stay"</h4>
                    <p>
                        "Struggling with debt but want to keep your roots? Our unique \"Stay-in-Place\" program "
                        "allows you to resolve financial burdens while remaining in your family home."
                    </p>
                    <a href="#contact" class="btn btn-secondary">"Learn More"</a>
                </div>
                <div class="footer-column">
                    <h4 class="footer-heading">"Get in Touch"</h4>
                    <ul class="footer-contact">
                        <li><span class="footer-label">"Call Us"</span>{PHONE}</li>
                        <li><span class="footer-label">"Email Us"</span>{SUPPORT_EMAIL}</li>
                        <li><span class="footer-label">"Visit Us"</span>{OFFICE_ADDRESS}</li>
                    </ul>
                </div>
            </div>
            <p class="footer-copyright">
                "© 2026 GMASH LLC. All rights reserved. Your local foreclosure prevention specialist."
            </p>
        </footer>
    }
}
