use crate::content::ABOUT_VALUES;
use leptos::prelude::*;

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="about">
            <div class="container about-grid">
                <div class="about-media">
                    <img src="assets/friendly-team-7.jpg" alt="Supportive local team" />
                    <div class="about-years">
                        <p class="about-years-value">"12+"</p>
                        <p class="about-years-label">"Years of Empathy"</p>
                    </div>
                </div>
                <div class="about-copy">
                    <h2 class="section-title">"A Haven for Homeowners in Crisis"</h2>
                    <p class="section-description">
                        "At Gmash, we understand that a house is more than just four walls and a roof. "
                        "It's a lifetime of memories. When financial hardship strikes, the fear of losing that foundation can be paralyzing."
                    </p>
                    <p class="section-description">
                        "Our mission is simple: to provide a clear, honest roadmap out of foreclosure. "
                        "Whether that means negotiating with your lender to keep you in your home or facilitating a fast, "
                        "fair cash sale to give you a fresh start, we put your dignity first."
                    </p>
                    <ul class="about-values">
                        {ABOUT_VALUES
                            .iter()
                            .map(|value| view! { <li class="about-value">"✓ "{*value}</li> })
                            .collect_view()}
                    </ul>
                </div>
            </div>
        </section>
    }
}
