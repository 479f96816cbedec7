//! Submission lifecycle of the lead-capture form.
//!
//! ```text
//! Editing --begin_submit (valid)--> Submitting --complete(Ok)--> Submitted
//!    ^  \--begin_submit (invalid)--/     |                           |
//!    |      (stays, errors shown)        |                           |
//!    +------------complete(Err)----------+                           |
//!    +--------------------------submit_another-----------------------+
//! ```
//!
//! The machine is synchronous; the only asynchronous step (the collaborator
//! call) happens between [`LeadCaptureForm::begin_submit`] and
//! [`LeadCaptureForm::complete`], which lets a UI event loop own the future.

use tracing::{debug, error, info, warn};

use crate::error::{SubmissionError, SubmitRejected};
use crate::request::{LeadRequest, Situation};
use crate::schema::{self, Field, FieldErrors};
use crate::submit::LeadSubmitter;

/// Which view the form presents. Exactly one at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormState {
    /// Fields are live-editable, submit is available.
    Editing,
    /// A valid request is with the collaborator; submit is disabled.
    Submitting,
    /// Confirmation view replaces the form.
    Submitted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Editing,
    Submitting { attempt: u64 },
    Submitted,
}

impl Phase {
    fn state(self) -> FormState {
        match self {
            Phase::Editing => FormState::Editing,
            Phase::Submitting { .. } => FormState::Submitting,
            Phase::Submitted => FormState::Submitted,
        }
    }
}

/// Proof that a submission started; hand it back to [`LeadCaptureForm::complete`].
///
/// Holds a snapshot of the validated request, so later edits cannot change
/// what the collaborator receives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitTicket {
    attempt: u64,
    request: LeadRequest,
}

impl SubmitTicket {
    /// The validated request to forward.
    pub fn request(&self) -> &LeadRequest {
        &self.request
    }

    /// Monotonic attempt number within one form instance.
    pub fn attempt(&self) -> u64 {
        self.attempt
    }
}

/// One form instance: current values, lifecycle phase, inline errors and
/// the diagnostic of the last failed submission.
#[derive(Debug, Clone)]
pub struct LeadCaptureForm {
    request: LeadRequest,
    phase: Phase,
    errors: FieldErrors,
    // set once a submit attempt surfaced errors; edits then re-validate inline
    revalidate: bool,
    last_failure: Option<SubmissionError>,
    attempts: u64,
}

impl Default for LeadCaptureForm {
    fn default() -> Self {
        Self::new()
    }
}

impl LeadCaptureForm {
    /// Fresh form in `Editing` with default values.
    pub fn new() -> Self {
        Self {
            request: LeadRequest::default(),
            phase: Phase::Editing,
            errors: FieldErrors::new(),
            revalidate: false,
            last_failure: None,
            attempts: 0,
        }
    }

    /// Current values.
    pub fn request(&self) -> &LeadRequest {
        &self.request
    }

    /// Current view.
    pub fn state(&self) -> FormState {
        self.phase.state()
    }

    /// True while a submission is in flight.
    pub fn is_busy(&self) -> bool {
        matches!(self.phase, Phase::Submitting { .. })
    }

    /// Inline errors currently surfaced.
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Inline error for one field.
    pub fn error(&self, field: Field) -> Option<&'static str> {
        self.errors.get(field)
    }

    /// Diagnostic of the most recent failed submission, until dismissed or a
    /// new attempt starts.
    pub fn last_failure(&self) -> Option<&SubmissionError> {
        self.last_failure.as_ref()
    }

    /// Forget the last failure (the transient notice was closed).
    pub fn dismiss_failure(&mut self) {
        self.last_failure = None;
    }

    /// Set a field from its raw control value.
    ///
    /// For [`Field::Situation`] the value is a slug; anything unknown clears
    /// the selection.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::FullName => self.request.full_name = value,
            Field::Email => self.request.email = value,
            Field::Phone => self.request.phone = value,
            Field::PropertyAddress => self.request.property_address = value,
            Field::Situation => self.request.situation = value.parse().ok(),
            Field::Message => self.request.message = value,
        }
        self.revalidate_field(field);
    }

    /// Set the situation directly.
    pub fn set_situation(&mut self, situation: Option<Situation>) {
        self.request.situation = situation;
        self.revalidate_field(Field::Situation);
    }

    /// Edit several fields at once.
    pub fn update(&mut self, edit: impl FnOnce(&mut LeadRequest)) {
        edit(&mut self.request);
        if self.revalidate {
            self.errors = schema::validate(&self.request).err().unwrap_or_default();
        }
    }

    fn revalidate_field(&mut self, field: Field) {
        if !self.revalidate {
            return;
        }
        match schema::validate_field(&self.request, field) {
            Some(message) => self.errors.insert(field, message),
            None => self.errors.remove(field),
        }
    }

    /// Try to leave `Editing`.
    ///
    /// Validates the full request first. On success the form is `Submitting`
    /// and the returned ticket must be passed to [`complete`](Self::complete)
    /// with the collaborator's outcome.
    pub fn begin_submit(&mut self) -> Result<SubmitTicket, SubmitRejected> {
        match self.phase {
            Phase::Submitting { attempt } => {
                warn!(attempt, "lead form: submit ignored, submission already in flight");
                Err(SubmitRejected::InFlight)
            }
            Phase::Submitted => {
                debug!("lead form: submit ignored, confirmation is showing");
                Err(SubmitRejected::AlreadySubmitted)
            }
            Phase::Editing => match schema::validate(&self.request) {
                Ok(()) => {
                    self.attempts += 1;
                    let attempt = self.attempts;
                    self.errors = FieldErrors::new();
                    self.revalidate = false;
                    self.last_failure = None;
                    self.phase = Phase::Submitting { attempt };
                    debug!(attempt, "lead form: editing -> submitting");
                    Ok(SubmitTicket {
                        attempt,
                        request: self.request.clone(),
                    })
                }
                Err(errors) => {
                    debug!(invalid = errors.len(), "lead form: validation failed: {errors}");
                    self.errors = errors.clone();
                    self.revalidate = true;
                    Err(SubmitRejected::Invalid(errors))
                }
            },
        }
    }

    /// Apply the single outcome of a submission attempt.
    ///
    /// Success resets the values and shows the confirmation. Failure returns
    /// to `Editing` with the values intact and the diagnostic recorded.
    /// Outcomes for any attempt other than the one in flight are dropped.
    pub fn complete(
        &mut self,
        ticket: SubmitTicket,
        outcome: Result<(), SubmissionError>,
    ) -> FormState {
        let in_flight = match self.phase {
            Phase::Submitting { attempt } => attempt,
            _ => {
                debug!(attempt = ticket.attempt, "lead form: dropping outcome, nothing in flight");
                return self.state();
            }
        };
        if in_flight != ticket.attempt {
            debug!(
                attempt = ticket.attempt,
                in_flight, "lead form: dropping outcome of stale attempt"
            );
            return self.state();
        }

        match outcome {
            Ok(()) => {
                info!(
                    attempt = in_flight,
                    situation = ?ticket.request.situation,
                    "lead form: consultation request received"
                );
                self.request = LeadRequest::default();
                self.errors = FieldErrors::new();
                self.phase = Phase::Submitted;
                debug!("lead form: submitting -> submitted");
            }
            Err(err) => {
                error!(attempt = in_flight, "lead form: submission error: {err}");
                self.last_failure = Some(err);
                self.phase = Phase::Editing;
                debug!("lead form: submitting -> editing");
            }
        }
        self.state()
    }

    /// Leave the confirmation view for a blank form.
    ///
    /// No-op outside `Submitted`.
    pub fn submit_another(&mut self) -> FormState {
        if self.phase == Phase::Submitted {
            self.request = LeadRequest::default();
            self.errors = FieldErrors::new();
            self.revalidate = false;
            self.last_failure = None;
            self.phase = Phase::Editing;
            debug!("lead form: submitted -> editing");
        }
        self.state()
    }

    /// Drive one whole attempt: validate, call `submitter`, apply the outcome.
    pub async fn submit_with<S: LeadSubmitter>(
        &mut self,
        submitter: &S,
    ) -> Result<FormState, SubmitRejected> {
        let ticket = self.begin_submit()?;
        let outcome = submitter.submit(ticket.request()).await;
        Ok(self.complete(ticket, outcome))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill_valid(form: &mut LeadCaptureForm) {
        form.set_field(Field::FullName, "Jo");
        form.set_field(Field::Email, "jo@x.com");
        form.set_field(Field::Phone, "3035550123");
        form.set_field(Field::PropertyAddress, "12 Elm St, Denver, CO");
        form.set_field(Field::Situation, "want-to-sell");
        form.set_field(Field::Message, "Need to sell fast please");
    }

    #[test]
    fn starts_editing_with_defaults() {
        let form = LeadCaptureForm::new();
        assert_eq!(form.state(), FormState::Editing);
        assert_eq!(form.request(), &LeadRequest::default());
        assert!(form.errors().is_empty());
        assert!(form.last_failure().is_none());
        assert!(!form.is_busy());
    }

    #[test]
    fn valid_request_moves_to_submitting() {
        let mut form = LeadCaptureForm::new();
        fill_valid(&mut form);
        let ticket = form.begin_submit().expect("valid");
        assert_eq!(form.state(), FormState::Submitting);
        assert!(form.is_busy());
        assert_eq!(ticket.request().situation, Some(Situation::WantToSell));
        assert_eq!(ticket.attempt(), 1);
    }

    #[test]
    fn invalid_request_stays_editing_with_errors() {
        let mut form = LeadCaptureForm::new();
        form.set_field(Field::FullName, "J");
        let err = form.begin_submit().unwrap_err();
        assert!(matches!(err, SubmitRejected::Invalid(_)));
        assert_eq!(form.state(), FormState::Editing);
        assert!(form.error(Field::FullName).is_some());
        // situation keeps its default, so no error there
        assert!(form.error(Field::Situation).is_none());
    }

    #[test]
    fn edits_do_not_show_errors_before_first_submit() {
        let mut form = LeadCaptureForm::new();
        form.set_field(Field::Email, "nope");
        assert!(form.errors().is_empty());
    }

    #[test]
    fn correcting_a_field_clears_only_its_error() {
        let mut form = LeadCaptureForm::new();
        let _ = form.begin_submit();
        assert!(form.error(Field::Email).is_some());
        assert!(form.error(Field::Phone).is_some());

        form.set_field(Field::Email, "jo@x.com");
        assert!(form.error(Field::Email).is_none());
        assert!(form.error(Field::Phone).is_some());

        form.set_field(Field::Email, "jo@");
        assert_eq!(form.error(Field::Email), Some("Invalid email address"));
    }

    #[test]
    fn unknown_situation_slug_clears_selection() {
        let mut form = LeadCaptureForm::new();
        fill_valid(&mut form);
        form.set_field(Field::Situation, "");
        assert_eq!(form.request().situation, None);
        let err = form.begin_submit().unwrap_err();
        match err {
            SubmitRejected::Invalid(errors) => {
                assert_eq!(errors.fields(), vec![Field::Situation]);
                assert_eq!(
                    errors.get(Field::Situation),
                    Some("Please select your current situation")
                );
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn second_submit_while_in_flight_is_ignored() {
        let mut form = LeadCaptureForm::new();
        fill_valid(&mut form);
        let _ticket = form.begin_submit().expect("valid");
        assert_eq!(form.begin_submit(), Err(SubmitRejected::InFlight));
        assert_eq!(form.state(), FormState::Submitting);
    }

    #[test]
    fn success_resets_values_and_shows_confirmation() {
        let mut form = LeadCaptureForm::new();
        fill_valid(&mut form);
        let ticket = form.begin_submit().expect("valid");
        assert_eq!(form.complete(ticket, Ok(())), FormState::Submitted);
        assert_eq!(form.request(), &LeadRequest::default());
        assert_eq!(form.begin_submit(), Err(SubmitRejected::AlreadySubmitted));
    }

    #[test]
    fn failure_keeps_values_and_records_diagnostic() {
        let mut form = LeadCaptureForm::new();
        fill_valid(&mut form);
        let before = form.request().clone();
        let ticket = form.begin_submit().expect("valid");
        let state = form.complete(ticket, Err(SubmissionError::Other("backend down".into())));
        assert_eq!(state, FormState::Editing);
        assert_eq!(form.request(), &before);
        assert_eq!(
            form.last_failure(),
            Some(&SubmissionError::Other("backend down".into()))
        );

        form.dismiss_failure();
        assert!(form.last_failure().is_none());
    }

    #[test]
    fn retry_after_failure_uses_a_new_attempt() {
        let mut form = LeadCaptureForm::new();
        fill_valid(&mut form);
        let first = form.begin_submit().expect("valid");
        let stale = first.clone();
        form.complete(first, Err(SubmissionError::Transport("offline".into())));

        let second = form.begin_submit().expect("still valid");
        assert_eq!(second.attempt(), 2);
        assert!(form.last_failure().is_none());

        // late duplicate of the first outcome must not finish the second attempt
        assert_eq!(form.complete(stale, Ok(())), FormState::Submitting);
        assert_eq!(form.complete(second, Ok(())), FormState::Submitted);
    }

    #[test]
    fn submit_another_resets_to_defaults() {
        let mut form = LeadCaptureForm::new();
        fill_valid(&mut form);
        let ticket = form.begin_submit().expect("valid");
        form.complete(ticket, Ok(()));

        assert_eq!(form.submit_another(), FormState::Editing);
        assert_eq!(form.request(), &LeadRequest::default());
        assert!(form.errors().is_empty());

        // no-op outside Submitted
        form.set_field(Field::FullName, "Someone");
        assert_eq!(form.submit_another(), FormState::Editing);
        assert_eq!(form.request().full_name, "Someone");
    }

    #[test]
    fn update_revalidates_everything_after_a_failed_submit() {
        let mut form = LeadCaptureForm::new();
        let _ = form.begin_submit();
        assert_eq!(form.errors().len(), 5);
        form.update(|req| {
            req.full_name = "Jo".into();
            req.email = "jo@x.com".into();
        });
        assert_eq!(
            form.errors().fields(),
            vec![Field::Phone, Field::PropertyAddress, Field::Message]
        );
    }
}
