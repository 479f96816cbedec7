use crate::content::TESTIMONIALS;
use leptos::prelude::*;

#[component]
pub fn Testimonials() -> impl IntoView {
    view! {
        <section id="testimonials" class="testimonials">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"Stories of Recovery"</h2>
                    <p class="section-description">
                        "Hear from people who transformed their crisis into a new beginning."
                    </p>
                </div>
                <div class="testimonials-grid">
                    {TESTIMONIALS
                        .iter()
                        .map(|t| {
                            view! {
                                <div class="testimonial-card">
                                    <div class="testimonial-author">
                                        <img src=t.avatar alt=t.name class="testimonial-avatar" />
                                        <div>
                                            <h4 class="testimonial-name">{t.name}</h4>
                                            <p class="testimonial-location">{t.location}</p>
                                        </div>
                                    </div>
                                    <p class="testimonial-content">"\""{t.content}"\""</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
