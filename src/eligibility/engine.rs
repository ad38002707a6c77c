use std::path::Path;

use crate::{
    eligibility::{
        checker::{EligibilityChecker, Verdict},
        profile::UserProfile,
    },
    storage::{Scheme, SchemeStore},
};
use tracing::info;

/// Scheme registry plus the rules that match citizens against it
pub struct PolicyEngine {
    store: SchemeStore,
}

impl PolicyEngine {
    pub fn new(store: SchemeStore) -> Self {
        Self { store }
    }

    pub fn open(path: impl AsRef<Path>) -> Self {
        Self::new(SchemeStore::open(path))
    }

    /// Schemes the profile qualifies for, copied out in store order
    pub fn check_eligibility(&self, profile: &UserProfile) -> Vec<Scheme> {
        let eligible: Vec<Scheme> = EligibilityChecker::new(self.store.schemes())
            .eligible_for(profile)
            .into_iter()
            .cloned()
            .collect();

        info!(
            "Profile age={} income={} category={} matches {}/{} schemes",
            profile.age,
            profile.income,
            profile.category,
            eligible.len(),
            self.store.len()
        );

        eligible
    }

    pub fn explain(&self, profile: &UserProfile) -> Vec<(&Scheme, Verdict)> {
        EligibilityChecker::new(self.store.schemes()).explain(profile)
    }

    /// Register a new scheme and return its assigned id
    pub fn add_scheme(&mut self, scheme: Scheme) -> String {
        self.store.add(scheme)
    }

    pub fn schemes(&self) -> &[Scheme] {
        self.store.schemes()
    }

    pub fn store(&self) -> &SchemeStore {
        &self.store
    }
}
