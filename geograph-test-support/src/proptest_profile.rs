//! Environment-driven proptest case counts.

use std::env;

/// Environment variable overriding the number of proptest cases.
pub const CASES_ENV_KEY: &str = "GEOGRAPH_PROPTEST_CASES";

/// Number of cases each property should run.
///
/// Reads [`CASES_ENV_KEY`] and falls back to `default` when it is unset,
/// unparsable or zero.
///
/// # Examples
/// ```
/// use geograph_test_support::proptest_profile::cases;
///
/// assert!(cases(32) > 0);
/// ```
#[must_use]
pub fn cases(default: u32) -> u32 {
    let Ok(raw) = env::var(CASES_ENV_KEY) else {
        return default;
    };
    match parse_cases(&raw) {
        Some(cases) => cases,
        None => {
            tracing::warn!(
                env = CASES_ENV_KEY,
                raw = %raw,
                "invalid proptest case override; using default",
            );
            default
        }
    }
}

fn parse_cases(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok().filter(|&cases| cases > 0)
}
