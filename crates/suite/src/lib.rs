//! SkillBoost end-to-end suites.
//!
//! Page objects for the UI regression tests, a typed client for the API
//! contract tests, and the bootstrap glue binding both to the shared
//! harness. The actual test cases live under `tests/`.

#![warn(missing_docs)]

pub mod api;
pub mod pages;
pub mod support;
