use crate::content::PROCESS_STEPS;
use leptos::prelude::*;

#[component]
pub fn Process() -> impl IntoView {
    view! {
        <section id="process" class="process">
            <div class="container process-grid">
                <div class="process-steps">
                    <h2 class="section-title">"Our 4-Step Relief Process"</h2>
                    {PROCESS_STEPS
                        .iter()
                        .map(|item| {
                            view! {
                                <div class="process-step">
                                    <span class="process-step-number">{item.step}</span>
                                    <div>
                                        <h4 class="process-step-title">{item.title}</h4>
                                        <p class="process-step-description">{item.description}</p>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="process-gallery">
                    <img src="assets/consultation-1.jpg" alt="Consultation" />
                    <img src="assets/consultation-7.jpg" alt="Consultation meeting" />
                    <img src="assets/helping-family-4.jpg" alt="Happy family support" />
                    <blockquote class="process-quote">
                        <p>"\"The fastest closing I've ever experienced. Gmash kept their word.\""</p>
                        <footer>"— Recent Homeowner"</footer>
                    </blockquote>
                </div>
            </div>
        </section>
    }
}
