// Gmash LLC Landing Page — Leptos 0.8 Edition
// Developed by the Gmash LLC web team (c)2026

mod content;
mod sections;

use lead_form::FormConfig;
use leptos::prelude::*;
use sections::*;
use wasm_bindgen::JsValue;

/// Form settings baked in at build time (see `lead-form.toml`).
const FORM_CONFIG: &str = include_str!("../lead-form.toml");

fn main() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&JsValue::from_str("[gmash] logger already initialised"));
    }

    let config = load_form_config();
    leptos::mount::mount_to_body(move || {
        provide_context(config);
        view! { <App/> }
    });
}

fn load_form_config() -> FormConfig {
    match FormConfig::from_toml_str(FORM_CONFIG) {
        Ok(config) => {
            tracing::debug!(?config, "lead form config loaded");
            config
        }
        Err(e) => {
            tracing::warn!("invalid lead-form.toml, using defaults: {e}");
            FormConfig::default()
        }
    }
}

#[component]
fn App() -> impl IntoView {
    view! {
        <Nav />
        <main>
            <Hero />
            <About />
            <Services />
            <Process />
            <Testimonials />
            <Contact />
        </main>
        <Footer />
    }
}
