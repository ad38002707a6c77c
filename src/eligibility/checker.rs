use std::fmt;

use crate::{
    eligibility::profile::UserProfile,
    storage::models::Scheme,
};
use tracing::debug;

/// Outcome of checking one scheme against one profile
#[derive(Debug, Clone, PartialEq)]
pub enum Verdict {
    Eligible,
    AgeOutOfRange { min: f64, max: f64 },
    IncomeAboveCap { cap: f64 },
    CategoryNotAllowed { allowed: Vec<String> },
}

impl Verdict {
    pub fn is_eligible(&self) -> bool {
        matches!(self, Verdict::Eligible)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Eligible => write!(f, "Eligible"),
            Verdict::AgeOutOfRange { min, max } => {
                write!(f, "Age must be between {} and {}", min, max)
            }
            Verdict::IncomeAboveCap { cap } => write!(f, "Income exceeds limit of {}", cap),
            Verdict::CategoryNotAllowed { allowed } => {
                write!(f, "Open only to {}", allowed.join(", "))
            }
        }
    }
}

/// Filters a scheme collection against user profiles.
///
/// Borrows the collection and never mutates it; every call rescans it from
/// the start.
pub struct EligibilityChecker<'a> {
    schemes: &'a [Scheme],
}

impl<'a> EligibilityChecker<'a> {
    pub fn new(schemes: &'a [Scheme]) -> Self {
        Self { schemes }
    }

    /// Check a single scheme
    ///
    /// Rules are applied in order:
    /// 1. Age must fall within `min_age..=max_age`
    /// 2. Income must not exceed `max_income`, when one is set
    /// 3. Category must be listed, when the list is non-empty
    ///
    /// The first failing rule decides the verdict.
    pub fn evaluate(scheme: &Scheme, profile: &UserProfile) -> Verdict {
        let rules = scheme.effective_rules();

        let (min, max) = (rules.min_age(), rules.max_age());
        if profile.age < min || profile.age > max {
            return Verdict::AgeOutOfRange { min, max };
        }

        if let Some(cap) = rules.max_income() {
            if profile.income > cap {
                return Verdict::IncomeAboveCap { cap };
            }
        }

        let allowed = rules.categories();
        if !allowed.is_empty() && !allowed.iter().any(|c| c == &profile.category) {
            return Verdict::CategoryNotAllowed {
                allowed: allowed.to_vec(),
            };
        }

        Verdict::Eligible
    }

    pub fn is_eligible(scheme: &Scheme, profile: &UserProfile) -> bool {
        Self::evaluate(scheme, profile).is_eligible()
    }

    /// Schemes the profile qualifies for, in collection order
    pub fn eligible_for(&self, profile: &UserProfile) -> Vec<&'a Scheme> {
        self.schemes
            .iter()
            .filter(|scheme| Self::is_eligible(scheme, profile))
            .collect()
    }

    /// Verdict for every scheme in the collection, in collection order
    pub fn explain(&self, profile: &UserProfile) -> Vec<(&'a Scheme, Verdict)> {
        self.schemes
            .iter()
            .map(|scheme| {
                let verdict = Self::evaluate(scheme, profile);
                debug!("Scheme {} for {:?}: {}", scheme.id, profile, verdict);
                (scheme, verdict)
            })
            .collect()
    }
}
