//! Declarative validation schema for [`LeadRequest`].
//!
//! Every rule is one row of [`LEAD_SCHEMA`]: the field it guards, the
//! constraint, and the message shown next to the offending control. The
//! validator walks the table; nothing else in the crate knows the limits.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;

use crate::request::LeadRequest;

/// A single attribute of a [`LeadRequest`].
///
/// Ordering follows the form layout, so error listings read top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    /// `fullName`
    FullName,
    /// `email`
    Email,
    /// `phone`
    Phone,
    /// `propertyAddress`
    PropertyAddress,
    /// `situation`
    Situation,
    /// `message`
    Message,
}

impl Field {
    /// All fields in form order.
    pub const ALL: [Field; 6] = [
        Field::FullName,
        Field::Email,
        Field::Phone,
        Field::PropertyAddress,
        Field::Situation,
        Field::Message,
    ];

    /// Wire / form-control name of the field.
    pub fn name(self) -> &'static str {
        match self {
            Field::FullName => "fullName",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::PropertyAddress => "propertyAddress",
            Field::Situation => "situation",
            Field::Message => "message",
        }
    }

    /// Current value of this field in `request`, `None` when unset.
    pub fn read(self, request: &LeadRequest) -> Option<&str> {
        match self {
            Field::FullName => Some(&request.full_name),
            Field::Email => Some(&request.email),
            Field::Phone => Some(&request.phone),
            Field::PropertyAddress => Some(&request.property_address),
            Field::Situation => request.situation.map(|s| s.as_str()),
            Field::Message => Some(&request.message),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a string names no [`Field`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown field: {0:?}")]
pub struct UnknownField(pub String);

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

/// What a field value must satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    /// At least this many characters (Unicode scalar values, not bytes).
    MinChars(usize),
    /// Email-address syntax.
    EmailAddress,
    /// A value must be chosen.
    Selected,
}

impl Constraint {
    /// Whether `value` satisfies the constraint. `None` means the field is unset.
    pub fn is_satisfied_by(self, value: Option<&str>) -> bool {
        match (self, value) {
            (_, None) => false,
            (Constraint::MinChars(min), Some(v)) => v.chars().count() >= min,
            (Constraint::EmailAddress, Some(v)) => is_email_address(v),
            (Constraint::Selected, Some(v)) => !v.is_empty(),
        }
    }
}

/// One row of the schema: field, constraint, user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    /// Guarded field.
    pub field: Field,
    /// Rule the value must satisfy.
    pub constraint: Constraint,
    /// Statement of the violated constraint, shown inline.
    pub message: &'static str,
}

impl FieldRule {
    /// Check this rule against `request`; returns the message on violation.
    pub fn check(&self, request: &LeadRequest) -> Option<&'static str> {
        if self.constraint.is_satisfied_by(self.field.read(request)) {
            None
        } else {
            Some(self.message)
        }
    }
}

/// The lead-capture rule set, one rule per field, in form order.
pub const LEAD_SCHEMA: &[FieldRule] = &[
    FieldRule {
        field: Field::FullName,
        constraint: Constraint::MinChars(2),
        message: "Please enter your full name",
    },
    FieldRule {
        field: Field::Email,
        constraint: Constraint::EmailAddress,
        message: "Invalid email address",
    },
    FieldRule {
        field: Field::Phone,
        constraint: Constraint::MinChars(10),
        message: "Please enter a valid phone number",
    },
    FieldRule {
        field: Field::PropertyAddress,
        constraint: Constraint::MinChars(5),
        message: "Please enter your full property address",
    },
    FieldRule {
        field: Field::Situation,
        constraint: Constraint::Selected,
        message: "Please select your current situation",
    },
    FieldRule {
        field: Field::Message,
        constraint: Constraint::MinChars(10),
        message: "Please provide a bit more detail about how we can help",
    },
];

/// Field-level validation failures, keyed by field, iterated in form order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<Field, &'static str>,
}

impl FieldErrors {
    /// No errors.
    pub fn new() -> Self {
        Self::default()
    }

    /// Message for `field`, if it failed.
    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    /// Whether `field` failed.
    pub fn contains(&self, field: Field) -> bool {
        self.errors.contains_key(&field)
    }

    /// Number of failing fields.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// True when every field passed.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Failing fields with their messages, in form order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &'static str)> + '_ {
        self.errors.iter().map(|(field, msg)| (*field, *msg))
    }

    /// Failing fields, in form order.
    pub fn fields(&self) -> Vec<Field> {
        self.errors.keys().copied().collect()
    }

    pub(crate) fn insert(&mut self, field: Field, message: &'static str) {
        self.errors.insert(field, message);
    }

    pub(crate) fn remove(&mut self, field: Field) {
        self.errors.remove(&field);
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

/// Run the whole schema against `request`.
///
/// Deterministic: the same request always yields the same set of errors.
pub fn validate(request: &LeadRequest) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();
    for rule in LEAD_SCHEMA {
        if let Some(message) = rule.check(request) {
            errors.insert(rule.field, message);
        }
    }
    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

/// Run only the rules guarding `field`.
pub fn validate_field(request: &LeadRequest, field: Field) -> Option<&'static str> {
    LEAD_SCHEMA
        .iter()
        .filter(|rule| rule.field == field)
        .find_map(|rule| rule.check(request))
}

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@(?:[A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$",
        )
        .expect("email pattern compiles")
    })
}

/// `local@domain.tld` with no leading dot and no consecutive dots.
fn is_email_address(value: &str) -> bool {
    !value.starts_with('.') && !value.contains("..") && email_regex().is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::Situation;

    fn valid() -> LeadRequest {
        LeadRequest {
            full_name: "Jo".into(),
            email: "jo@x.com".into(),
            phone: "3035550123".into(),
            property_address: "12 Elm St, Denver, CO".into(),
            situation: Some(Situation::WantToSell),
            message: "Need to sell fast please".into(),
        }
    }

    #[test]
    fn schema_has_one_rule_per_field_in_form_order() {
        let fields: Vec<Field> = LEAD_SCHEMA.iter().map(|rule| rule.field).collect();
        assert_eq!(fields, Field::ALL.to_vec());
    }

    #[test]
    fn valid_request_passes() {
        assert_eq!(validate(&valid()), Ok(()));
    }

    #[test]
    fn each_rule_reports_only_its_own_field() {
        let broken: [(Field, fn(&mut LeadRequest)); 6] = [
            (Field::FullName, |r| r.full_name = "J".into()),
            (Field::Email, |r| r.email = "bad".into()),
            (Field::Phone, |r| r.phone = "123".into()),
            (Field::PropertyAddress, |r| r.property_address = "X".into()),
            (Field::Situation, |r| r.situation = None),
            (Field::Message, |r| r.message = "hi".into()),
        ];

        for (field, breaker) in broken {
            let mut req = valid();
            breaker(&mut req);
            let errors = validate(&req).expect_err("should fail");
            assert_eq!(errors.fields(), vec![field], "breaking {field}");
            let expected = LEAD_SCHEMA
                .iter()
                .find(|rule| rule.field == field)
                .map(|rule| rule.message);
            assert_eq!(errors.get(field), expected);
        }
    }

    #[test]
    fn min_chars_counts_characters_not_bytes() {
        assert!(Constraint::MinChars(2).is_satisfied_by(Some("Łó")));
        assert!(!Constraint::MinChars(2).is_satisfied_by(Some("Ł")));
        assert!(!Constraint::MinChars(1).is_satisfied_by(None));
    }

    #[test]
    fn boundary_lengths_are_inclusive() {
        let mut req = valid();
        req.phone = "0123456789".into();
        req.property_address = "1 Elm".into();
        req.message = "0123456789".into();
        assert_eq!(validate(&req), Ok(()));

        req.phone = "012345678".into();
        assert_eq!(validate_field(&req, Field::Phone), Some("Please enter a valid phone number"));
    }

    #[test]
    fn email_syntax() {
        for ok in ["jo@x.com", "first.last+tag@mail.example.org", "o'neil@x.io"] {
            assert!(is_email_address(ok), "{ok} should be accepted");
        }
        for bad in [
            "bad",
            "",
            "@x.com",
            "jo@",
            "jo@x",
            "jo@@x.com",
            "jo x@x.com",
            ".jo@x.com",
            "jo..b@x.com",
            "jo@x..com",
            "jo@x.c",
        ] {
            assert!(!is_email_address(bad), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn field_names_round_trip() {
        for field in Field::ALL {
            assert_eq!(field.name().parse::<Field>(), Ok(field));
        }
        assert!("zip".parse::<Field>().is_err());
    }

    #[test]
    fn errors_display_in_form_order() {
        let mut req = valid();
        req.message = "short".into();
        req.full_name = String::new();
        let errors = validate(&req).expect_err("two failures");
        assert_eq!(
            errors.to_string(),
            "fullName: Please enter your full name; message: Please provide a bit more detail about how we can help"
        );
    }
}
