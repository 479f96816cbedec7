//! Lead-capture form - the reactive shell around `lead_form::LeadCaptureForm`.
//!
//! All validation and lifecycle rules live in the `lead_form` crate; this
//! component only binds controls to the state machine, owns the submission
//! future, and picks the view for the current state.

use std::time::Duration;

use crate::content::PHONE;
use gloo_timers::future::TimeoutFuture;
use lead_form::{
    DisplayVariant, Field, FormConfig, FormState, LeadCaptureForm as FormMachine, LeadSubmitter,
    SimulatedSubmitter, Situation, SubmitterKind,
};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

type BrowserSubmitter = SubmitterKind<fn(Duration) -> TimeoutFuture>;

/// How long a failure notice stays up before it clears itself.
const NOTICE_TTL: Duration = Duration::from_secs(8);

fn browser_submitter(config: &FormConfig) -> BrowserSubmitter {
    let sleep: fn(Duration) -> TimeoutFuture = gloo_timers::future::sleep;
    match SubmitterKind::from_config(&config.submission, sleep) {
        Ok(submitter) => submitter,
        Err(e) => {
            tracing::warn!("{e}; falling back to simulated submission");
            SubmitterKind::Simulated(SimulatedSubmitter::with_delay(config.submission.delay(), sleep))
        }
    }
}

#[component]
pub fn LeadCaptureForm(
    config: FormConfig,
    /// Overrides the configured layout variant.
    #[prop(optional)]
    variant: Option<DisplayVariant>,
) -> impl IntoView {
    let variant = variant.unwrap_or(config.variant);
    let show_failures = config.shows_failures();
    let form = RwSignal::new(FormMachine::new());
    let submitter = StoredValue::new_local(browser_submitter(&config));

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        // Submitting is the re-entry guard: begin_submit refuses while in flight
        let Some(Ok(ticket)) = form.try_update(|f| f.begin_submit()) else {
            return;
        };
        let submitter = submitter.get_value();
        spawn_local(async move {
            let outcome = submitter.submit(ticket.request()).await;
            let failed = outcome.is_err();
            let _ = form.try_update(|f| f.complete(ticket, outcome));
            if failed && show_failures {
                set_timeout(
                    move || {
                        let _ = form.try_update(|f| f.dismiss_failure());
                    },
                    NOTICE_TTL,
                );
            }
        });
    };

    let busy = move || form.with(|f| f.is_busy());
    let card_class = match variant {
        DisplayVariant::Default => "form-card",
        DisplayVariant::Compact => "form-card form-card-compact",
    };

    view! {
        <Show
            when=move || form.with(|f| f.state()) != FormState::Submitted
            fallback=move || view! { <Confirmation form=form variant=variant /> }
        >
            <div class=card_class>
                <FormHeader variant=variant />
                <form class="lead-form" novalidate on:submit=on_submit>
                    <div class="form-row">
                        <TextField
                            form=form
                            field=Field::FullName
                            label="Full Legal Name"
                            placeholder="e.g. Johnathan Smith"
                        />
                        <TextField
                            form=form
                            field=Field::Email
                            label="Email Address"
                            placeholder="john@example.com"
                            input_type="email"
                        />
                    </div>
                    <div class="form-row">
                        <TextField
                            form=form
                            field=Field::Phone
                            label="Phone Number"
                            placeholder="(555) 000-0000"
                            input_type="tel"
                        />
                        <SituationSelect form=form />
                    </div>
                    <TextField
                        form=form
                        field=Field::PropertyAddress
                        label="Property Address"
                        placeholder="123 Home St, City, State, ZIP"
                    />
                    <div class="form-item">
                        <label class="form-label" for="message">
                            "Additional Details (Timeline, Bank Notices, etc.)"
                        </label>
                        <textarea
                            id="message"
                            name="message"
                            class="form-textarea"
                            placeholder="Tell us more about your specific needs so we can prepare..."
                            prop:value=move || form.with(|f| f.request().message.clone())
                            on:input=move |ev| form.update(|f| f.set_field(Field::Message, event_target_value(&ev)))
                        ></textarea>
                        <FieldError form=form field=Field::Message />
                    </div>

                    <Show when=move || show_failures && form.with(|f| f.last_failure().is_some())>
                        <div class="form-notice" role="status">
                            <p>
                                "We couldn't send your request just now. Your details are still here, "
                                "please try again or call us at " {PHONE} "."
                            </p>
                            <button
                                type="button"
                                class="form-notice-close"
                                on:click=move |_| form.update(|f| f.dismiss_failure())
                            >
                                "Dismiss"
                            </button>
                        </div>
                    </Show>

                    <div class="form-actions">
                        <button type="submit" class="btn btn-primary form-submit" disabled=busy>
                            <Show when=busy>
                                <span class="spinner" aria-hidden="true"></span>
                            </Show>
                            {move || {
                                if busy() { "Validating Submission..." } else { "Secure Your Free Consultation ➤" }
                            }}
                        </button>
                        <p class="form-privacy">
                            "Privacy Guarantee: Gmash LLC respects your situation. Your information is encrypted "
                            "and will only be used to facilitate your consultation. We never share data with "
                            "third-party solicitors."
                        </p>
                    </div>
                </form>
            </div>
        </Show>
    }
}

#[component]
fn FormHeader(variant: DisplayVariant) -> impl IntoView {
    match variant {
        DisplayVariant::Default => view! {
            <div class="form-header">
                <h3 class="form-title">"Request a Private Consultation"</h3>
                <p class="form-subtitle">
                    "Begin your journey to financial stability today. Our team provides empathetic, "
                    "legal-grade support for homeowners in transition."
                </p>
            </div>
        }
        .into_any(),
        DisplayVariant::Compact => view! {
            <div class="form-header-compact">
                <h3 class="form-title">"Connect With Us"</h3>
                <p class="form-subtitle">
                    "Your privacy is our priority. Get expert foreclosure assistance now."
                </p>
            </div>
        }
        .into_any(),
    }
}

#[component]
fn TextField(
    form: RwSignal<FormMachine>,
    field: Field,
    label: &'static str,
    placeholder: &'static str,
    #[prop(default = "text")] input_type: &'static str,
) -> impl IntoView {
    view! {
        <div class="form-item">
            <label class="form-label" for=field.name()>{label}</label>
            <input
                id=field.name()
                name=field.name()
                type=input_type
                class="form-input"
                placeholder=placeholder
                prop:value=move || form.with(|f| field.read(f.request()).unwrap_or_default().to_string())
                on:input=move |ev| form.update(|f| f.set_field(field, event_target_value(&ev)))
            />
            <FieldError form=form field=field />
        </div>
    }
}

#[component]
fn SituationSelect(form: RwSignal<FormMachine>) -> impl IntoView {
    let selected = move || {
        form.with(|f| {
            f.request()
                .situation
                .map(Situation::as_str)
                .unwrap_or_default()
                .to_string()
        })
    };

    view! {
        <div class="form-item">
            <label class="form-label" for="situation">"Current Situation"</label>
            <select
                id="situation"
                name="situation"
                class="form-select"
                prop:value=selected
                on:change=move |ev| form.update(|f| f.set_field(Field::Situation, event_target_value(&ev)))
            >
                <option value="" disabled>"How can we help?"</option>
                {Situation::ALL
                    .into_iter()
                    .map(|s| view! { <option value=s.as_str()>{s.label()}</option> })
                    .collect_view()}
            </select>
            <FieldError form=form field=Field::Situation />
        </div>
    }
}

/// Inline message under a control; empty while the field is fine.
#[component]
fn FieldError(form: RwSignal<FormMachine>, field: Field) -> impl IntoView {
    move || {
        form.with(|f| f.error(field))
            .map(|message| view! { <p class="form-message" role="alert">{message}</p> })
    }
}

#[component]
fn Confirmation(form: RwSignal<FormMachine>, variant: DisplayVariant) -> impl IntoView {
    let class = match variant {
        DisplayVariant::Default => "form-success",
        DisplayVariant::Compact => "form-success form-success-compact",
    };

    view! {
        <div class=class>
            <div class="form-success-icon" aria-hidden="true">"🛡"</div>
            <h3 class="form-success-title">"Request Received Securely"</h3>
            <p class="form-success-text">
                "Thank you for reaching out to Gmash LLC. Your inquiry is being handled with the utmost confidentiality. "
                "One of our senior foreclosure specialists will contact you within 24 hours to discuss your personalized path forward."
            </p>
            <button
                type="button"
                class="btn btn-outline"
                on:click=move |_| {
                    form.update(|f| {
                        f.submit_another();
                    })
                }
            >
                "Submit Another Inquiry"
            </button>
        </div>
    }
}
