//! Suite bootstrap.
//!
//! Resolves the suite configuration once per process and hands each test a
//! fresh browser context already pointed at the environment base URL.

use skillboost_harness::{logging, Config, HarnessResult, Synchronizer, TestContext};
use std::path::PathBuf;
use std::sync::Arc;

/// Manifest-relative path of the suite configuration file.
#[must_use]
pub fn config_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("resources/ui-config.json")
}

/// Manifest-relative path of a fixture file.
#[must_use]
pub fn testdata_path(file_name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("resources/testdata")
        .join(file_name)
}

/// The process-wide configuration snapshot.
///
/// # Panics
///
/// A missing configuration file or an unknown active environment is a
/// process-level fatal error.
#[must_use]
pub fn config() -> &'static Config {
    match Config::get_or_load(config_path()) {
        Ok(config) => config,
        Err(e) => panic!("fatal configuration error: {e}"),
    }
}

/// Acquire a fresh browser context and navigate to the base URL.
///
/// Mirrors the per-test setup contract: one session per test, synchronizer
/// bound to it, browser already on the environment entry page.
///
/// # Errors
///
/// Propagates session-creation and navigation failures.
pub async fn launch() -> HarnessResult<(TestContext, Synchronizer)> {
    logging::init();
    let config = config();
    tracing::info!(
        environment = config.environment(),
        base_url = config.base_url(),
        browser = config.browser(),
        headless = config.headless(),
        "starting UI test"
    );

    let mut context = TestContext::new(Arc::new(config.clone()));
    context.initialize().await?;
    let sync = context.sync().await?;
    sync.goto(config.base_url()).await?;
    Ok((context, sync))
}

/// Release the context, preferring the test flow's error when both fail.
///
/// Teardown must run regardless of the flow's outcome, so tests run their
/// body to a `HarnessResult`, pass it through here, and assert afterwards.
///
/// # Errors
///
/// The flow's error first, then any release failure.
pub async fn teardown<T>(mut context: TestContext, outcome: HarnessResult<T>) -> HarnessResult<T> {
    let released = context.release().await;
    let value = outcome?;
    released?;
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use skillboost_harness::FixtureData;

    #[test]
    fn test_bundled_config_resolves() {
        let config = config();
        assert!(!config.base_url().is_empty());
        assert!(config.browser().parse::<skillboost_harness::BrowserKind>().is_ok());
        assert!(config.explicit_wait() > 0);
    }

    #[test]
    fn test_bundled_fixtures_parse() {
        for file in [
            "login-data.json",
            "signup-data.json",
            "forgot-password-data.json",
            "user-register.json",
        ] {
            let data = FixtureData::load(testdata_path(file))
                .unwrap_or_else(|e| panic!("fixture {file} failed to load: {e}"));
            assert!(!data.scenario_names().is_empty(), "{file} has no scenarios");
        }
    }

    #[test]
    fn test_login_fixture_scenarios() {
        let data = FixtureData::load(testdata_path("login-data.json")).unwrap();
        assert!(data.scenario("validUser").is_ok());
        assert!(data.scenario("emptyUser").is_ok());
        assert!(data.scenario("invalidDetails").is_ok());
    }

    #[test]
    fn test_signup_fixture_scenarios() {
        let data = FixtureData::load(testdata_path("signup-data.json")).unwrap();
        for scenario in [
            "validUser",
            "mismatchedUser",
            "wrongEmailFormat",
            "wrongPasswordLength",
        ] {
            let entry = data.scenario(scenario).unwrap();
            assert!(entry.contains_key("email"), "{scenario} misses email");
            assert!(entry.contains_key("password"), "{scenario} misses password");
            assert!(
                entry.contains_key("confirmPassword"),
                "{scenario} misses confirmPassword"
            );
        }
    }
}
