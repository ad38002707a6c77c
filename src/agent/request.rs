use serde::Deserialize;
use serde_json::Value;

use crate::{
    eligibility::UserProfile,
    error::{PolicyError, Result},
    storage::Scheme,
};

pub const CHECK_ELIGIBILITY: &str = "check_eligibility";
pub const LEARN_NEW_SCHEME: &str = "learn_new_scheme";

/// A request the agent knows how to serve
#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    CheckEligibility(UserProfile),
    LearnNewScheme(Scheme),
}

/// Wire shape of an incoming request; every field may be missing
#[derive(Debug, Default, Deserialize)]
struct Envelope {
    #[serde(default)]
    request_type: Option<String>,
    #[serde(default)]
    age: Option<f64>,
    #[serde(default)]
    income: Option<f64>,
    #[serde(default, alias = "category")]
    caste: Option<String>,
    #[serde(default)]
    scheme_data: Option<Value>,
}

impl Request {
    /// Parse a JSON request.
    ///
    /// `request_type` defaults to `check_eligibility`. Missing or null
    /// profile fields take their defaults (age 0, income 0, category
    /// `General`). A learn request without a non-empty `scheme_data`
    /// object is rejected.
    pub fn parse(message: &str) -> Result<Self> {
        let envelope: Envelope = serde_json::from_str(message)?;
        Self::from_envelope(envelope)
    }

    fn from_envelope(envelope: Envelope) -> Result<Self> {
        let kind = envelope
            .request_type
            .unwrap_or_else(|| CHECK_ELIGIBILITY.to_string());

        match kind.as_str() {
            CHECK_ELIGIBILITY => Ok(Request::CheckEligibility(UserProfile::new(
                envelope.age.unwrap_or(0.0),
                envelope.income.unwrap_or(0.0),
                envelope.caste.as_deref(),
            ))),
            LEARN_NEW_SCHEME => match envelope.scheme_data {
                None | Some(Value::Null) => Err(PolicyError::MissingSchemeData),
                Some(Value::Object(map)) if map.is_empty() => Err(PolicyError::MissingSchemeData),
                Some(data) => Ok(Request::LearnNewScheme(serde_json::from_value(data)?)),
            },
            _ => Err(PolicyError::UnknownRequest(kind)),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Request::CheckEligibility(_) => CHECK_ELIGIBILITY,
            Request::LearnNewScheme(_) => LEARN_NEW_SCHEME,
        }
    }
}
