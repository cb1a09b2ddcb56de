//! Configuration provider for the test suite.
//!
//! Loads environment-specific settings (base URL, browser, headless flag,
//! timeouts, remote grid) from a JSON document and resolves each value
//! through a fixed chain: runtime override, environment entry, `default`
//! entry, hardcoded fallback.
//!
//! The configuration is resolved once per process and immutable afterwards.
//! A missing file or an unknown active environment is a fatal error.

use crate::result::{HarnessError, HarnessResult};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::sync::OnceLock;

/// Fallback grid endpoint when neither overrides nor config supply one
pub const DEFAULT_GRID_URL: &str = "http://localhost:4444/wd/hub";

/// Fallback browser kind
pub const DEFAULT_BROWSER: &str = "chrome";

/// Fallback window size applied when neither fullscreen nor maximize is set
pub const DEFAULT_BROWSER_SIZE: (u32, u32) = (1920, 1080);

const DEFAULT_IMPLICIT_WAIT_SECS: u64 = 10;
const DEFAULT_EXPLICIT_WAIT_SECS: u64 = 20;
const DEFAULT_PAGE_LOAD_TIMEOUT_SECS: u64 = 30;

static CONFIG: OnceLock<Config> = OnceLock::new();

// =============================================================================
// FILE MODEL
// =============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigFile {
    active_environment: Option<String>,
    #[serde(default)]
    environments: HashMap<String, EnvEntry>,
    #[serde(default)]
    default: DefaultEntry,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EnvEntry {
    base_url: String,
    browser: Option<String>,
    headless: Option<bool>,
    browser_size: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DefaultEntry {
    browser: Option<String>,
    headless: Option<bool>,
    remote: Option<bool>,
    grid_url: Option<String>,
    fullscreen: Option<bool>,
    maximize_window: Option<bool>,
    browser_size: Option<String>,
    #[serde(default)]
    timeouts: Timeouts,
    screenshot_on_failure: Option<bool>,
    save_page_source_on_failure: Option<bool>,
    #[serde(default)]
    allure: AllureEntry,
    #[serde(default)]
    reporting: ReportingEntry,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Timeouts {
    implicit_wait: Option<u64>,
    explicit_wait: Option<u64>,
    page_load_timeout: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AllureEntry {
    results_directory: Option<String>,
    report_directory: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ReportingEntry {
    screenshots: Option<bool>,
    logs: Option<bool>,
    video_recording: Option<bool>,
}

// =============================================================================
// RUNTIME OVERRIDES
// =============================================================================

/// Runtime overrides for configuration values.
///
/// Populated from the process environment in normal runs; tests may build
/// one explicitly to bypass the environment.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    /// Selects the environment entry (`SKILLBOOST_ENV`)
    pub environment: Option<String>,
    /// Browser kind (`SKILLBOOST_BROWSER`)
    pub browser: Option<String>,
    /// Headless flag (`SKILLBOOST_HEADLESS`)
    pub headless: Option<bool>,
    /// Remote-execution flag (`SKILLBOOST_REMOTE`)
    pub remote: Option<bool>,
    /// Grid endpoint (`SKILLBOOST_GRID_URL`)
    pub grid_url: Option<String>,
    /// `SELENIUM_REMOTE_URL`: overrides the grid URL with the highest
    /// priority and forces remote mode when present.
    pub selenium_remote_url: Option<String>,
}

impl Overrides {
    /// Read overrides from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            environment: env_string("SKILLBOOST_ENV"),
            browser: env_string("SKILLBOOST_BROWSER"),
            headless: env_bool("SKILLBOOST_HEADLESS"),
            remote: env_bool("SKILLBOOST_REMOTE"),
            grid_url: env_string("SKILLBOOST_GRID_URL"),
            selenium_remote_url: env_string("SELENIUM_REMOTE_URL"),
        }
    }
}

fn env_string(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

fn env_bool(key: &str) -> Option<bool> {
    env_string(key).map(|v| v.eq_ignore_ascii_case("true") || v == "1")
}

// =============================================================================
// RESOLVED CONFIGURATION
// =============================================================================

/// Immutable configuration snapshot for the process.
#[derive(Debug, Clone)]
pub struct Config {
    environment: String,
    env: EnvEntry,
    defaults: DefaultEntry,
    overrides: Overrides,
}

impl Config {
    /// Load and resolve the configuration file against the given overrides.
    ///
    /// # Errors
    ///
    /// Returns `HarnessError::Config` if the file is missing or malformed,
    /// or if the selected environment entry does not exist.
    pub fn resolve(path: impl AsRef<Path>, overrides: Overrides) -> HarnessResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| HarnessError::Config {
            message: format!("cannot read {}: {e}", path.display()),
        })?;
        let file: ConfigFile = serde_json::from_str(&raw).map_err(|e| HarnessError::Config {
            message: format!("cannot parse {}: {e}", path.display()),
        })?;

        let environment = overrides
            .environment
            .clone()
            .or_else(|| file.active_environment.clone())
            .unwrap_or_else(|| "dev".to_string());

        let env = file
            .environments
            .get(&environment)
            .cloned()
            .ok_or_else(|| HarnessError::Config {
                message: format!(
                    "environment '{environment}' not found in {}",
                    path.display()
                ),
            })?;

        tracing::info!(environment = %environment, "configuration loaded");

        Ok(Self {
            environment,
            env,
            defaults: file.default,
            overrides,
        })
    }

    /// Resolve once per process from the given path, reading overrides from
    /// the environment. Subsequent calls return the same snapshot.
    ///
    /// # Errors
    ///
    /// Propagates the first resolution failure; nothing is cached on error.
    pub fn get_or_load(path: impl AsRef<Path>) -> HarnessResult<&'static Self> {
        if let Some(config) = CONFIG.get() {
            return Ok(config);
        }
        let config = Self::resolve(path, Overrides::from_env())?;
        Ok(CONFIG.get_or_init(|| config))
    }

    /// The selected environment name.
    #[must_use]
    pub fn environment(&self) -> &str {
        &self.environment
    }

    /// Base URL of the environment under test.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.env.base_url
    }

    /// Browser kind name (override > environment > default > "chrome").
    #[must_use]
    pub fn browser(&self) -> &str {
        self.overrides
            .browser
            .as_deref()
            .or(self.env.browser.as_deref())
            .or(self.defaults.browser.as_deref())
            .unwrap_or(DEFAULT_BROWSER)
    }

    /// Headless flag (override > environment > default > false).
    #[must_use]
    pub fn headless(&self) -> bool {
        self.overrides
            .headless
            .or(self.env.headless)
            .or(self.defaults.headless)
            .unwrap_or(false)
    }

    /// Remote-execution flag. `SELENIUM_REMOTE_URL` forces remote mode;
    /// otherwise override > default > false.
    #[must_use]
    pub fn remote(&self) -> bool {
        if self.overrides.selenium_remote_url.is_some() {
            return true;
        }
        self.overrides
            .remote
            .or(self.defaults.remote)
            .unwrap_or(false)
    }

    /// Grid endpoint. Priority: `SELENIUM_REMOTE_URL` > runtime override >
    /// config file > hardcoded fallback.
    #[must_use]
    pub fn grid_url(&self) -> &str {
        self.overrides
            .selenium_remote_url
            .as_deref()
            .or(self.overrides.grid_url.as_deref())
            .or(self.defaults.grid_url.as_deref())
            .unwrap_or(DEFAULT_GRID_URL)
    }

    /// Whether to open the window in fullscreen mode.
    #[must_use]
    pub fn fullscreen(&self) -> bool {
        self.defaults.fullscreen.unwrap_or(false)
    }

    /// Whether to maximize the window (ignored when fullscreen is set).
    #[must_use]
    pub fn maximize_window(&self) -> bool {
        self.defaults.maximize_window.unwrap_or(true)
    }

    /// Window size as (width, height), from the environment entry or the
    /// default entry. An unparseable value falls back to 1920x1080.
    #[must_use]
    pub fn browser_size(&self) -> (u32, u32) {
        let raw = self
            .env
            .browser_size
            .as_deref()
            .or(self.defaults.browser_size.as_deref());
        match raw.map(parse_browser_size) {
            Some(Some(size)) => size,
            Some(None) => {
                tracing::warn!(
                    value = raw.unwrap_or_default(),
                    "unparseable browserSize, using default"
                );
                DEFAULT_BROWSER_SIZE
            }
            None => DEFAULT_BROWSER_SIZE,
        }
    }

    /// Implicit wait in seconds.
    #[must_use]
    pub fn implicit_wait(&self) -> u64 {
        self.defaults
            .timeouts
            .implicit_wait
            .unwrap_or(DEFAULT_IMPLICIT_WAIT_SECS)
    }

    /// Explicit (condition) wait in seconds.
    #[must_use]
    pub fn explicit_wait(&self) -> u64 {
        self.defaults
            .timeouts
            .explicit_wait
            .unwrap_or(DEFAULT_EXPLICIT_WAIT_SECS)
    }

    /// Page-load timeout in seconds.
    #[must_use]
    pub fn page_load_timeout(&self) -> u64 {
        self.defaults
            .timeouts
            .page_load_timeout
            .unwrap_or(DEFAULT_PAGE_LOAD_TIMEOUT_SECS)
    }

    /// Whether to capture a screenshot when a test fails.
    #[must_use]
    pub fn screenshot_on_failure(&self) -> bool {
        self.defaults.screenshot_on_failure.unwrap_or(true)
    }

    /// Whether to save the page source when a test fails.
    #[must_use]
    pub fn save_page_source_on_failure(&self) -> bool {
        self.defaults.save_page_source_on_failure.unwrap_or(true)
    }

    /// Allure results directory.
    #[must_use]
    pub fn allure_results_dir(&self) -> &str {
        self.defaults
            .allure
            .results_directory
            .as_deref()
            .unwrap_or("target/allure-results")
    }

    /// Allure report directory.
    #[must_use]
    pub fn allure_report_dir(&self) -> &str {
        self.defaults
            .allure
            .report_directory
            .as_deref()
            .unwrap_or("target/allure-report")
    }

    /// Whether screenshot reporting is enabled.
    #[must_use]
    pub fn reporting_screenshots(&self) -> bool {
        self.defaults.reporting.screenshots.unwrap_or(true)
    }

    /// Whether log reporting is enabled.
    #[must_use]
    pub fn reporting_logs(&self) -> bool {
        self.defaults.reporting.logs.unwrap_or(true)
    }

    /// Whether video recording is enabled.
    #[must_use]
    pub fn video_recording(&self) -> bool {
        self.defaults.reporting.video_recording.unwrap_or(false)
    }
}

fn parse_browser_size(raw: &str) -> Option<(u32, u32)> {
    let (w, h) = raw.split_once('x')?;
    Some((w.trim().parse().ok()?, h.trim().parse().ok()?))
}
