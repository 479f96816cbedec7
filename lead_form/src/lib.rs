//! # gmash-lead-form
//!
//! The lead-capture form behind the Gmash landing page, without any UI.
//!
//! A prospective homeowner fills in a [`LeadRequest`]; the declarative
//! [`schema`] decides which fields are acceptable; [`LeadCaptureForm`] runs
//! the editing / submitting / submitted lifecycle and hands valid requests to
//! a [`LeadSubmitter`].
//!
//! ## Quick Start
//!
//! ```rust
//! use lead_form::{Field, FormState, LeadCaptureForm, Situation};
//!
//! let mut form = LeadCaptureForm::new();
//! form.set_field(Field::FullName, "Jo");
//! form.set_field(Field::Email, "jo@x.com");
//! form.set_field(Field::Phone, "3035550123");
//! form.set_field(Field::PropertyAddress, "12 Elm St, Denver, CO");
//! form.set_situation(Some(Situation::WantToSell));
//! form.set_field(Field::Message, "Need to sell fast please");
//!
//! let ticket = form.begin_submit().expect("request is valid");
//! assert_eq!(form.state(), FormState::Submitting);
//!
//! // ... the collaborator runs ...
//! form.complete(ticket, Ok(()));
//! assert_eq!(form.state(), FormState::Submitted);
//! ```
//!
//! ## Architecture
//!
//! - [`request`] - the `LeadRequest` entity and the `Situation` enumeration
//! - [`schema`] - field rules and the validator
//! - [`form`] - lifecycle state machine
//! - [`submit`] - submission collaborators (simulated, HTTP)
//! - [`config`] - TOML configuration for the form
//! - [`error`] - error types
//!
//! ---
//!
//! Developed by the Gmash LLC web team (c)2026

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod form;
pub mod request;
pub mod schema;
pub mod submit;

pub use config::{DisplayVariant, FailureNotice, FormConfig, SubmissionConfig, SubmissionMode};
pub use error::{ConfigError, SubmissionError, SubmitRejected};
pub use form::{FormState, LeadCaptureForm, SubmitTicket};
pub use request::{LeadRequest, Situation};
pub use schema::{Constraint, Field, FieldErrors, FieldRule, LEAD_SCHEMA, validate, validate_field};
pub use submit::{HttpSubmitter, LeadSubmitter, SimulatedSubmitter, SubmitterKind};
