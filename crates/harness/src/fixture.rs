//! Test fixture data.
//!
//! One JSON document per test module: top-level keys are scenario names,
//! values are flat string maps (email, password, and so on). Data is
//! read-only and loaded fresh by each test that needs it.

use crate::result::{HarnessError, HarnessResult};
use std::collections::HashMap;
use std::path::Path;

/// Named test scenarios loaded from a JSON file.
#[derive(Debug, Clone)]
pub struct FixtureData {
    scenarios: HashMap<String, HashMap<String, String>>,
    source: String,
}

impl FixtureData {
    /// Load a fixture document.
    ///
    /// # Errors
    ///
    /// `HarnessError::Fixture` when the file is not a `.json` file, cannot
    /// be read, or does not match the scenario-map shape.
    pub fn load(path: impl AsRef<Path>) -> HarnessResult<Self> {
        let path = path.as_ref();
        let is_json = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("json"));
        if !is_json {
            return Err(HarnessError::Fixture {
                message: format!("only .json fixture files are supported: {}", path.display()),
            });
        }

        let raw = std::fs::read_to_string(path).map_err(|e| HarnessError::Fixture {
            message: format!("cannot read {}: {e}", path.display()),
        })?;
        let scenarios = serde_json::from_str(&raw).map_err(|e| HarnessError::Fixture {
            message: format!("cannot parse {}: {e}", path.display()),
        })?;

        Ok(Self {
            scenarios,
            source: path.display().to_string(),
        })
    }

    /// All scenario names in the document.
    #[must_use]
    pub fn scenario_names(&self) -> Vec<&str> {
        self.scenarios.keys().map(String::as_str).collect()
    }

    /// One named scenario.
    ///
    /// # Errors
    ///
    /// `HarnessError::Fixture` when the scenario does not exist.
    pub fn scenario(&self, name: &str) -> HarnessResult<&HashMap<String, String>> {
        self.scenarios
            .get(name)
            .ok_or_else(|| HarnessError::Fixture {
                message: format!("scenario '{name}' not found in {}", self.source),
            })
    }

    /// A single value inside a scenario.
    ///
    /// # Errors
    ///
    /// `HarnessError::Fixture` when the scenario or key does not exist.
    pub fn value(&self, scenario: &str, key: &str) -> HarnessResult<&str> {
        self.scenario(scenario)?
            .get(key)
            .map(String::as_str)
            .ok_or_else(|| HarnessError::Fixture {
                message: format!(
                    "key '{key}' not found in scenario '{scenario}' of {}",
                    self.source
                ),
            })
    }
}
