//! Logged assertions.
//!
//! Thin wrappers over the standard assertion macros that trace the
//! expectation and its outcome, so every validation is traceable in the
//! captured test logs.

use std::fmt::Debug;

/// Assert that a condition holds, with logging.
///
/// # Panics
///
/// Panics with `message` when the condition is false.
pub fn is_true(condition: bool, message: &str) {
    tracing::info!("ASSERT TRUE: {message}");
    assert!(condition, "{message}");
    tracing::info!("PASSED: {message}");
}

/// Assert that a condition does not hold, with logging.
///
/// # Panics
///
/// Panics with `message` when the condition is true.
pub fn is_false(condition: bool, message: &str) {
    tracing::info!("ASSERT FALSE: {message}");
    assert!(!condition, "{message}");
    tracing::info!("PASSED: {message}");
}

/// Assert equality, with logging.
///
/// # Panics
///
/// Panics with `message` and both values when they differ.
pub fn eq<T: PartialEq + Debug>(expected: T, actual: T, message: &str) {
    tracing::info!("ASSERT EQUALS: {message} | expected={expected:?} actual={actual:?}");
    assert_eq!(expected, actual, "{message}");
    tracing::info!("PASSED: {message}");
}

/// Assert inequality, with logging.
///
/// # Panics
///
/// Panics with `message` when the values are equal.
pub fn ne<T: PartialEq + Debug>(unexpected: T, actual: T, message: &str) {
    tracing::info!("ASSERT NOT EQUALS: {message} | unexpected={unexpected:?} actual={actual:?}");
    assert_ne!(unexpected, actual, "{message}");
    tracing::info!("PASSED: {message}");
}

/// Assert that a string contains a substring, with logging.
///
/// # Panics
///
/// Panics with `message` and both strings when the substring is absent.
pub fn contains(haystack: &str, needle: &str, message: &str) {
    tracing::info!("ASSERT CONTAINS: {message} | needle='{needle}' haystack='{haystack}'");
    assert!(
        haystack.contains(needle),
        "{message} | expected substring '{needle}' not found in '{haystack}'"
    );
    tracing::info!("PASSED: {message}");
}
