//! The lead entity collected by the contact form.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// What the homeowner is dealing with. Drives which specialist follows up.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Situation {
    /// Behind on payments or already served with a notice.
    #[default]
    #[serde(alias = "foreclosure-risk")]
    AtRiskOfForeclosure,
    /// Wants a fast sale.
    WantToSell,
    /// Interested in the sell-and-lease-back program.
    SellAndStay,
    /// Anything else, including resource inquiries.
    Other,
}

impl Situation {
    /// Every situation, in the order the select control lists them.
    pub const ALL: [Situation; 4] = [
        Situation::AtRiskOfForeclosure,
        Situation::WantToSell,
        Situation::SellAndStay,
        Situation::Other,
    ];

    /// Wire slug, also used as the `<option>` value.
    pub fn as_str(self) -> &'static str {
        match self {
            Situation::AtRiskOfForeclosure => "at-risk-of-foreclosure",
            Situation::WantToSell => "want-to-sell",
            Situation::SellAndStay => "sell-and-stay",
            Situation::Other => "other",
        }
    }

    /// Human label shown in the select control.
    pub fn label(self) -> &'static str {
        match self {
            Situation::AtRiskOfForeclosure => "At Risk of Foreclosure",
            Situation::WantToSell => "I Want to Sell Quickly",
            Situation::SellAndStay => "Interested in 'Sell & Stay'",
            Situation::Other => "Other / Resource Inquiry",
        }
    }
}

impl fmt::Display for Situation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a slug names no known situation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown situation: {0:?}")]
pub struct UnknownSituation(pub String);

impl FromStr for Situation {
    type Err = UnknownSituation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "at-risk-of-foreclosure" | "foreclosure-risk" => Ok(Situation::AtRiskOfForeclosure),
            "want-to-sell" => Ok(Situation::WantToSell),
            "sell-and-stay" => Ok(Situation::SellAndStay),
            "other" => Ok(Situation::Other),
            _ => Err(UnknownSituation(s.to_string())),
        }
    }
}

/// A prospective homeowner's inquiry, exactly as entered.
///
/// Only lives in form state: it is validated by [`crate::schema`], handed to
/// a collaborator, then reset to [`LeadRequest::default`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadRequest {
    /// Full legal name.
    pub full_name: String,
    /// Contact email.
    pub email: String,
    /// Contact phone, any formatting.
    pub phone: String,
    /// Address of the property in question.
    pub property_address: String,
    /// Current situation; `None` when nothing is selected.
    pub situation: Option<Situation>,
    /// Free-form details (timeline, bank notices, ...).
    pub message: String,
}

impl Default for LeadRequest {
    fn default() -> Self {
        Self {
            full_name: String::new(),
            email: String::new(),
            phone: String::new(),
            property_address: String::new(),
            situation: Some(Situation::default()),
            message: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_request_preselects_foreclosure_risk() {
        let req = LeadRequest::default();
        assert_eq!(req.full_name, "");
        assert_eq!(req.email, "");
        assert_eq!(req.phone, "");
        assert_eq!(req.property_address, "");
        assert_eq!(req.situation, Some(Situation::AtRiskOfForeclosure));
        assert_eq!(req.message, "");
    }

    #[test]
    fn situation_slugs_parse_back() {
        for situation in Situation::ALL {
            assert_eq!(situation.as_str().parse::<Situation>(), Ok(situation));
        }
    }

    #[test]
    fn legacy_slug_is_accepted() {
        assert_eq!(
            "foreclosure-risk".parse::<Situation>(),
            Ok(Situation::AtRiskOfForeclosure)
        );
        let parsed: Situation = serde_json::from_str("\"foreclosure-risk\"").expect("alias");
        assert_eq!(parsed, Situation::AtRiskOfForeclosure);
    }

    #[test]
    fn unknown_slug_is_rejected() {
        let err = "refinance".parse::<Situation>().unwrap_err();
        assert_eq!(err.to_string(), "unknown situation: \"refinance\"");
    }

    #[test]
    fn serializes_with_camel_case_wire_names() {
        let req = LeadRequest {
            full_name: "Jo".into(),
            email: "jo@x.com".into(),
            phone: "3035550123".into(),
            property_address: "12 Elm St".into(),
            situation: Some(Situation::SellAndStay),
            message: "Need to sell fast please".into(),
        };
        let json = serde_json::to_value(&req).expect("serialize");
        assert_eq!(json["fullName"], "Jo");
        assert_eq!(json["propertyAddress"], "12 Elm St");
        assert_eq!(json["situation"], "sell-and-stay");
    }
}
