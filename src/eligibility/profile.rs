use serde::{Deserialize, Serialize};

pub const DEFAULT_CATEGORY: &str = "General";

/// Demographic details a citizen declares when looking for schemes.
///
/// Values are taken as given; range checking is left to whoever builds the
/// profile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    pub age: f64,
    pub income: f64,
    pub category: String,
}

impl UserProfile {
    pub fn new(age: f64, income: f64, category: Option<&str>) -> Self {
        Self {
            age,
            income,
            category: category.unwrap_or(DEFAULT_CATEGORY).to_string(),
        }
    }
}

impl Default for UserProfile {
    fn default() -> Self {
        Self::new(0.0, 0.0, None)
    }
}
