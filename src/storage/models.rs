use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const DEFAULT_MIN_AGE: f64 = 0.0;
pub const DEFAULT_MAX_AGE: f64 = 100.0;

/// A welfare scheme as stored in the scheme document
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Scheme {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub benefit: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rules: Option<Rules>,
    /// Fields this crate does not interpret, kept so records round-trip unchanged
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Eligibility rules attached to a scheme. Every field is optional and
/// falls back to a permissive default. Bounds accept any JSON number.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Rules {
    #[serde(default, skip_serializing_if = "Option::is_none", serialize_with = "number::serialize")]
    pub min_age: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none", serialize_with = "number::serialize")]
    pub max_age: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none", serialize_with = "number::serialize")]
    pub max_income: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Vec<String>>,
}

/// Whole-valued bounds are written back as integers (`18`, not `18.0`)
mod number {
    use serde::Serializer;

    pub fn serialize<S: Serializer>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(v) if v.fract() == 0.0 && v.abs() < i64::MAX as f64 => {
                serializer.serialize_i64(*v as i64)
            }
            Some(v) => serializer.serialize_f64(*v),
            None => serializer.serialize_none(),
        }
    }
}

impl Scheme {
    pub fn new(name: &str, description: &str, benefit: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            benefit: benefit.to_string(),
            ..Default::default()
        }
    }

    pub fn with_rules(mut self, rules: Rules) -> Self {
        self.rules = Some(rules);
        self
    }

    pub fn with_link(mut self, link: &str) -> Self {
        self.link = Some(link.to_string());
        self
    }

    /// Link to the application page, if one is set and non-empty
    pub fn link(&self) -> Option<&str> {
        self.link.as_deref().filter(|l| !l.trim().is_empty())
    }

    /// Rules in effect, substituting the all-default set when absent
    pub fn effective_rules(&self) -> Rules {
        self.rules.clone().unwrap_or_default()
    }
}

impl Rules {
    pub fn min_age(&self) -> f64 {
        self.min_age.unwrap_or(DEFAULT_MIN_AGE)
    }

    pub fn max_age(&self) -> f64 {
        self.max_age.unwrap_or(DEFAULT_MAX_AGE)
    }

    /// Income ceiling; `None` means unbounded
    pub fn max_income(&self) -> Option<f64> {
        self.max_income
    }

    /// Allowed categories; an empty slice means every category passes
    pub fn categories(&self) -> &[String] {
        self.category.as_deref().unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn absent_rules_use_defaults() {
        let scheme: Scheme = serde_json::from_value(json!({
            "name": "Open Grant",
            "description": "Available to all",
            "benefit": "Rs 1000"
        }))
        .unwrap();

        let rules = scheme.effective_rules();
        assert_eq!(rules.min_age(), 0.0);
        assert_eq!(rules.max_age(), 100.0);
        assert_eq!(rules.max_income(), None);
        assert!(rules.categories().is_empty());
    }

    #[test]
    fn unknown_fields_are_preserved() {
        let raw = json!({
            "id": "SCH004",
            "name": "Pension",
            "description": "Old age support",
            "benefit": "Rs 2000 / month",
            "ministry": "Social Justice",
            "rules": { "min_age": 60 }
        });

        let scheme: Scheme = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(scheme.extra.get("ministry"), Some(&json!("Social Justice")));
        assert_eq!(serde_json::to_value(&scheme).unwrap(), raw);
    }

    #[test]
    fn float_bounds_are_accepted() {
        let scheme: Scheme = serde_json::from_value(json!({
            "name": "Pension",
            "rules": { "min_age": 60.0, "max_age": 99.5, "max_income": 100000 }
        }))
        .unwrap();

        let rules = scheme.effective_rules();
        assert_eq!(rules.min_age(), 60.0);
        assert_eq!(rules.max_age(), 99.5);

        let written = serde_json::to_value(&scheme).unwrap();
        assert_eq!(written["rules"], json!({ "min_age": 60, "max_age": 99.5, "max_income": 100000 }));
    }

    #[test]
    fn empty_link_counts_as_no_link() {
        let scheme = Scheme::new("A", "B", "C").with_link("  ");
        assert_eq!(scheme.link(), None);

        let scheme = Scheme::new("A", "B", "C").with_link("https://example.gov.in");
        assert_eq!(scheme.link(), Some("https://example.gov.in"));
    }
}
