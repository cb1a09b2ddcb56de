//! Shared test infrastructure for the SkillBoost end-to-end suite.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐    ┌──────────────────┐    ┌──────────────┐
//! │ Config       │───►│ TestContext      │───►│ Page objects │
//! │ (ui-config)  │    │ (session + wait) │    │ + test cases │
//! └──────────────┘    └──────────────────┘    └──────────────┘
//!                              │
//!                     ┌────────▼────────┐
//!                     │ Synchronizer    │  bounded condition polling,
//!                     │ (wait context)  │  keyed by session identity
//!                     └─────────────────┘
//! ```
//!
//! Data flows one direction: configuration resolves once per process, each
//! test owns a `TestContext` (one browser session at most), and page
//! objects act through the `Synchronizer` so every query happens after the
//! effect it depends on.

#![warn(missing_docs)]

/// Logged assertions
pub mod check;
/// Configuration provider
pub mod config;
/// Per-test session context
pub mod context;
/// Browser session construction
pub mod driver;
/// Named scenario fixtures
pub mod fixture;
/// Element locators
pub mod locator;
/// Tracing bootstrap
pub mod logging;
/// Page-object base behavior
pub mod page;
/// Error types
pub mod result;
/// Wait mechanisms
pub mod wait;

pub use config::{Config, Overrides};
pub use context::TestContext;
pub use driver::{BrowserKind, ExecutionMode, Session, SessionIdentity};
pub use fixture::FixtureData;
pub use locator::{Locator, Selector};
pub use page::PageComponent;
pub use result::{HarnessError, HarnessResult};
pub use wait::{Synchronizer, WaitContext};

// Re-exported so suites don't need a direct thirtyfour dependency.
pub use thirtyfour::{By, WebElement};
