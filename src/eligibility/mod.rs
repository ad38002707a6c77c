pub mod checker;
pub mod engine;
pub mod profile;

pub use checker::{EligibilityChecker, Verdict};
pub use engine::PolicyEngine;
pub use profile::{UserProfile, DEFAULT_CATEGORY};
