use crate::content::{SERVICES, Service};
use leptos::prelude::*;

#[component]
pub fn Services() -> impl IntoView {
    view! {
        <section id="services" class="services">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"Three Paths Forward"</h2>
                    <p class="section-description">
                        "Every situation is unique. We've designed three core services to address "
                        "the most common needs of homeowners facing foreclosure."
                    </p>
                </div>
                <div class="services-grid">
                    {SERVICES.iter().map(|service| view! { <ServiceCard service=service /> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ServiceCard(service: &'static Service) -> impl IntoView {
    let class = if service.highlight {
        "service-card service-card-highlight"
    } else {
        "service-card"
    };
    view! {
        <div class=class id=service.id>
            {service.highlight.then(|| view! { <span class="service-badge">"Most Popular"</span> })}
            <div class="service-icon" data-icon=service.icon></div>
            <h3 class="service-title">{service.title}</h3>
            <p class="service-description">{service.description}</p>
            <a href="#contact" class="service-link">"Learn More ↗"</a>
        </div>
    }
}
