pub mod agent;
pub mod config;
pub mod eligibility;
pub mod error;
pub mod storage;
pub mod utils;

pub use agent::SchemeSetuAgent;
pub use config::Config;
pub use eligibility::{EligibilityChecker, PolicyEngine, UserProfile, Verdict};
pub use error::{PolicyError, Result};
pub use storage::{Rules, Scheme, SchemeStore};
