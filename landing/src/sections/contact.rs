use super::LeadCaptureForm;
use crate::content::CONTACT_DETAILS;
use lead_form::FormConfig;
use leptos::prelude::*;

#[component]
pub fn Contact() -> impl IntoView {
    let config = use_context::<FormConfig>().unwrap_or_default();

    view! {
        <section id="contact" class="contact">
            <div class="container contact-grid">
                <div class="contact-intro">
                    <h2 class="section-title">"Take the First Step Today"</h2>
                    <p class="section-description">
                        "Don't wait for the bank to make the next move. "
                        "Contact us for a confidential, no-obligation strategy session."
                    </p>
                    <div class="contact-details">
                        {CONTACT_DETAILS
                            .iter()
                            .map(|detail| {
                                view! {
                                    <div class="contact-detail">
                                        <p class="contact-detail-label">{detail.label}</p>
                                        <p class="contact-detail-value">{detail.value}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
                <div class="contact-card">
                    <div class="contact-card-header">
                        <h3>"Request Information"</h3>
                        <p>"Tell us about your situation and we'll reach out within 24 hours."</p>
                    </div>
                    <LeadCaptureForm config=config />
                </div>
            </div>
        </section>
    }
}
