//! Environment-driven sizing for property-test suites.
//!
//! CI shrinks or grows proptest effort through `BOSK_PBT_CASES` and
//! `BOSK_PBT_FORK` without touching the suites themselves; every suite
//! reads the same profile so overrides apply workspace-wide.

use std::env;

const CASES_VAR: &str = "BOSK_PBT_CASES";
const FORK_VAR: &str = "BOSK_PBT_FORK";

/// Runtime profile for property-test execution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PropertyRunProfile {
    cases: u32,
    fork: bool,
}

impl PropertyRunProfile {
    /// Loads the profile, falling back to the caller's defaults when the
    /// environment carries no valid override.
    ///
    /// Invalid overrides are logged at `warn` and ignored rather than
    /// failing the suite.
    ///
    /// # Examples
    ///
    /// ```
    /// use bosk_test_support::ci::property_test_profile::PropertyRunProfile;
    ///
    /// let profile = PropertyRunProfile::load(64, false);
    /// assert!(profile.cases() > 0);
    /// ```
    #[must_use]
    pub fn load(default_cases: u32, default_fork: bool) -> Self {
        Self {
            cases: read(CASES_VAR, default_cases, parse_cases),
            fork: read(FORK_VAR, default_fork, parse_switch),
        }
    }

    /// Number of cases to run per property.
    #[must_use]
    pub fn cases(&self) -> u32 {
        self.cases
    }

    /// Whether to run proptest cases in forked subprocesses.
    #[must_use]
    pub fn fork(&self) -> bool {
        self.fork
    }
}

fn read<T: Copy>(key: &'static str, default: T, parse: impl Fn(&str) -> Option<T>) -> T {
    let Ok(raw) = env::var(key) else {
        return default;
    };
    parse(&raw).unwrap_or_else(|| {
        tracing::warn!(env = key, raw = %raw, "ignoring invalid property-test override");
        default
    })
}

/// A case count must be a positive integer.
fn parse_cases(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok().filter(|cases| *cases > 0)
}

/// Switches accept the usual spellings of on and off, any case.
fn parse_switch(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
