//! Shared test utilities for `netspan-core`.

use netspan_test_support::profile::ProptestRunProfile;
use proptest::test_runner::Config as ProptestConfig;

/// Builds a proptest configuration from the shared CI profile so every
/// property suite honours `PROGTEST_CASES` and `NETSPAN_PBT_FORK`.
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}
