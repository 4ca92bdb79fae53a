//! Engine configuration.

use chrono::{NaiveDate, Utc};

/// Whether recording a drug-use event forces the case's drug-use flag on.
///
/// The three classifying child kinds (pregnancy problems, heart disease
/// factors, medical problems) all push their flag to true when a record is
/// present. Drug-use events historically did not, and corrected data exists
/// that relies on that behavior, so the asymmetry is a policy choice rather
/// than a hard-coded fix.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DrugUsePolicy {
    /// Keep the historical behavior: drug-use events never touch the flag.
    #[default]
    Legacy,
    /// Treat drug-use events like the other child kinds.
    Propagate,
}

/// Per-pass settings for the validation engine.
#[derive(Debug, Clone, Copy)]
pub struct ValidationOptions {
    /// Reference date for "not in the future" checks and the year-of-birth
    /// upper bound. Injected so passes are reproducible in tests.
    pub today: NaiveDate,
    pub drug_use_policy: DrugUsePolicy,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            today: Utc::now().date_naive(),
            drug_use_policy: DrugUsePolicy::default(),
        }
    }
}

impl ValidationOptions {
    #[must_use]
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    #[must_use]
    pub fn with_drug_use_policy(mut self, policy: DrugUsePolicy) -> Self {
        self.drug_use_policy = policy;
        self
    }
}
