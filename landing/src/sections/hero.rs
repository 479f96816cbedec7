use crate::content::TRUST_STATS;
use leptos::prelude::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section id="hero" class="hero">
            <div class="hero-backdrop">
                <img src="assets/family-home-2.jpg" alt="Family safe at home" />
            </div>
            <div class="container">
                <div class="hero-content">
                    <div class="hero-badge">
                        <span class="hero-badge-dot"></span>
                        "Your Foreclosure Prevention Partners"
                    </div>
                    <h1 class="hero-title">
                        "Protect Your "
                        <span class="hero-title-accent">"Home"</span>
                        ", "
                        <br />
                        "Reclaim Your "
                        <span class="hero-title-accent">"Future"</span>
                        "."
                    </h1>
                    <p class="hero-description">
                        "Facing foreclosure is overwhelming, but you don't have to face it alone. "
                        "Gmash LLC provides compassionate solutions to help you keep your home or move on with dignity."
                    </p>
                    <div class="hero-actions">
                        <a href="#contact" class="btn btn-primary">"Get Help Now →"</a>
                        <a href="#services" class="btn btn-secondary">"Explore Solutions"</a>
                    </div>
                    <div class="hero-callout">
                        <h3>"\"Sell Your Home and Stay! Ask How!\""</h3>
                        <p>
                            "Ask us about our unique lease-back options that let you clear your debt while keeping your roots."
                        </p>
                    </div>
                </div>
                <TrustStats />
            </div>
        </section>
    }
}

#[component]
fn TrustStats() -> impl IntoView {
    view! {
        <div class="trust-stats">
            {TRUST_STATS
                .iter()
                .map(|stat| {
                    view! {
                        <div class="trust-stat">
                            <span class="trust-stat-value">{stat.value}</span>
                            <span class="trust-stat-label">{stat.label}</span>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
