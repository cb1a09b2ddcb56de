//! Wait mechanisms for browser synchronization.
//!
//! Blocks the calling task until a UI condition becomes true or a bounded
//! timeout elapses. This is the only ordering mechanism between a
//! navigation-triggering action and the next query; omitting a wait is a
//! correctness bug in the calling test, not something the harness enforces.
//!
//! The wait context is keyed by session identity: when the owning session
//! is restarted, the stale context is discarded and rebuilt transparently
//! on next use, so no wait ever polls against a dead session.

use crate::driver::SessionIdentity;
use crate::locator::Locator;
use crate::result::{HarnessError, HarnessResult};
use std::future::Future;
use std::time::{Duration, Instant};
use thirtyfour::{WebDriver, WebElement};

/// Polling interval between condition checks (the WebDriver default cadence).
/// Fixed; there is no backoff.
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 500;

// =============================================================================
// WAIT CONTEXT
// =============================================================================

/// The cached (session, timeout) pair backing condition polling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaitContext {
    identity: SessionIdentity,
    timeout: Duration,
    poll_interval: Duration,
}

impl WaitContext {
    /// Build a context bound to one session identity.
    #[must_use]
    pub fn for_session(identity: SessionIdentity, timeout: Duration) -> Self {
        Self {
            identity,
            timeout,
            poll_interval: Duration::from_millis(DEFAULT_POLL_INTERVAL_MS),
        }
    }

    /// Reuse a cached context when it still belongs to `identity`, rebuild
    /// otherwise. Returns the context and whether it was rebuilt.
    #[must_use]
    pub fn reuse_or_rebuild(
        cached: Option<Self>,
        identity: SessionIdentity,
        timeout: Duration,
    ) -> (Self, bool) {
        match cached {
            Some(context) if context.identity == identity => (context, false),
            _ => (Self::for_session(identity, timeout), true),
        }
    }

    /// Identity of the session this context belongs to
    #[must_use]
    pub fn identity(&self) -> SessionIdentity {
        self.identity
    }

    /// The bounded timeout for every wait through this context
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Fixed polling interval
    #[must_use]
    pub fn poll_interval(&self) -> Duration {
        self.poll_interval
    }
}

// =============================================================================
// CUSTOM PREDICATE POLLING
// =============================================================================

/// Poll a predicate until it returns true or the timeout elapses.
///
/// Evaluation errors during polling are swallowed and treated as "not yet
/// true". On deadline the caller-supplied message is wrapped in the timeout
/// failure.
///
/// # Errors
///
/// `HarnessError::Timeout` carrying `message` when the deadline elapses.
pub async fn wait_until<F, Fut>(
    mut condition: F,
    timeout: Duration,
    poll_interval: Duration,
    message: &str,
) -> HarnessResult<()>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = HarnessResult<bool>>,
{
    let start = Instant::now();
    loop {
        if matches!(condition().await, Ok(true)) {
            return Ok(());
        }
        if start.elapsed() >= timeout {
            return Err(HarnessError::Timeout {
                ms: timeout.as_millis() as u64,
                condition: message.to_string(),
            });
        }
        tokio::time::sleep(poll_interval).await;
    }
}

// =============================================================================
// SYNCHRONIZER
// =============================================================================

/// Synchronization utility bound to one browser session.
///
/// Cheap to clone: it holds a handle to the session plus the wait context.
/// Every element wait re-resolves its locator on each poll, so a handle is
/// never carried across page reloads.
#[derive(Debug, Clone)]
pub struct Synchronizer {
    driver: WebDriver,
    context: WaitContext,
}

impl Synchronizer {
    /// Bind a synchronizer to a session handle and wait context.
    #[must_use]
    pub fn new(driver: WebDriver, context: WaitContext) -> Self {
        Self { driver, context }
    }

    /// The wait context backing this synchronizer
    #[must_use]
    pub fn context(&self) -> &WaitContext {
        &self.context
    }

    /// The underlying session handle
    #[must_use]
    pub fn driver(&self) -> &WebDriver {
        &self.driver
    }

    fn timeout_error(&self, condition: String) -> HarnessError {
        HarnessError::Timeout {
            ms: self.context.timeout.as_millis() as u64,
            condition,
        }
    }

    // -------------------------------------------------------------------------
    // Navigation
    // -------------------------------------------------------------------------

    /// Navigate to a URL.
    ///
    /// # Errors
    ///
    /// Propagates the WebDriver navigation error.
    pub async fn goto(&self, url: &str) -> HarnessResult<()> {
        tracing::info!(url, "navigating");
        self.driver.goto(url).await?;
        Ok(())
    }

    /// The current page URL.
    ///
    /// # Errors
    ///
    /// Propagates the WebDriver error.
    pub async fn current_url(&self) -> HarnessResult<String> {
        Ok(self.driver.current_url().await?.to_string())
    }

    /// The current page title.
    ///
    /// # Errors
    ///
    /// Propagates the WebDriver error.
    pub async fn title(&self) -> HarnessResult<String> {
        Ok(self.driver.title().await?)
    }

    /// Reload the current page.
    ///
    /// # Errors
    ///
    /// Propagates the WebDriver error.
    pub async fn refresh(&self) -> HarnessResult<()> {
        self.driver.refresh().await?;
        Ok(())
    }

    /// Navigate back in history.
    ///
    /// # Errors
    ///
    /// Propagates the WebDriver error.
    pub async fn back(&self) -> HarnessResult<()> {
        self.driver.back().await?;
        Ok(())
    }

    /// Navigate forward in history.
    ///
    /// # Errors
    ///
    /// Propagates the WebDriver error.
    pub async fn forward(&self) -> HarnessResult<()> {
        self.driver.forward().await?;
        Ok(())
    }

    /// Execute JavaScript in the page and return the result.
    ///
    /// # Errors
    ///
    /// Propagates the WebDriver error.
    pub async fn execute(
        &self,
        script: &str,
        args: Vec<serde_json::Value>,
    ) -> HarnessResult<serde_json::Value> {
        let ret = self.driver.execute(script, args).await?;
        Ok(ret.json().clone())
    }

    // -------------------------------------------------------------------------
    // Waits by locator
    // -------------------------------------------------------------------------

    /// Wait for the element to be present and displayed; returns the handle.
    ///
    /// # Errors
    ///
    /// `Timeout` if the element never becomes visible within the bound.
    pub async fn visible(&self, locator: &Locator) -> HarnessResult<WebElement> {
        let start = Instant::now();
        loop {
            if let Ok(element) = self.driver.find(locator.to_by()).await {
                if element.is_displayed().await.unwrap_or(false) {
                    return Ok(element);
                }
            }
            if start.elapsed() >= self.context.timeout {
                return Err(self.timeout_error(format!("element {locator} to become visible")));
            }
            tokio::time::sleep(self.context.poll_interval).await;
        }
    }

    /// Wait for the element to be displayed and enabled; returns the handle.
    ///
    /// # Errors
    ///
    /// `Timeout` if the element never becomes clickable within the bound.
    pub async fn clickable(&self, locator: &Locator) -> HarnessResult<WebElement> {
        let start = Instant::now();
        loop {
            if let Ok(element) = self.driver.find(locator.to_by()).await {
                if element.is_clickable().await.unwrap_or(false) {
                    return Ok(element);
                }
            }
            if start.elapsed() >= self.context.timeout {
                return Err(self.timeout_error(format!("element {locator} to become clickable")));
            }
            tokio::time::sleep(self.context.poll_interval).await;
        }
    }

    /// Wait for the element to be attached to the DOM; returns the handle.
    ///
    /// # Errors
    ///
    /// `Timeout` if the element never appears within the bound.
    pub async fn present(&self, locator: &Locator) -> HarnessResult<WebElement> {
        let start = Instant::now();
        loop {
            if let Ok(element) = self.driver.find(locator.to_by()).await {
                return Ok(element);
            }
            if start.elapsed() >= self.context.timeout {
                return Err(self.timeout_error(format!("element {locator} to be present")));
            }
            tokio::time::sleep(self.context.poll_interval).await;
        }
    }

    /// Wait for every element matching the locator to be displayed.
    ///
    /// # Errors
    ///
    /// `Timeout` if no match set becomes fully visible within the bound.
    pub async fn all_visible(&self, locator: &Locator) -> HarnessResult<Vec<WebElement>> {
        let start = Instant::now();
        loop {
            if let Ok(elements) = self.driver.find_all(locator.to_by()).await {
                if !elements.is_empty() {
                    let mut all_displayed = true;
                    for element in &elements {
                        if !element.is_displayed().await.unwrap_or(false) {
                            all_displayed = false;
                            break;
                        }
                    }
                    if all_displayed {
                        return Ok(elements);
                    }
                }
            }
            if start.elapsed() >= self.context.timeout {
                return Err(
                    self.timeout_error(format!("all elements {locator} to become visible"))
                );
            }
            tokio::time::sleep(self.context.poll_interval).await;
        }
    }

    /// Wait for the element to be absent or hidden.
    ///
    /// # Errors
    ///
    /// `Timeout` if the element stays visible for the whole bound.
    pub async fn invisible(&self, locator: &Locator) -> HarnessResult<()> {
        let start = Instant::now();
        loop {
            let gone = match self.driver.find(locator.to_by()).await {
                Ok(element) => !element.is_displayed().await.unwrap_or(false),
                Err(_) => true,
            };
            if gone {
                return Ok(());
            }
            if start.elapsed() >= self.context.timeout {
                return Err(self.timeout_error(format!("element {locator} to become invisible")));
            }
            tokio::time::sleep(self.context.poll_interval).await;
        }
    }

    /// Wait for the element's text to contain `text`.
    ///
    /// # Errors
    ///
    /// `Timeout` if the text never appears within the bound.
    pub async fn text_present(&self, locator: &Locator, text: &str) -> HarnessResult<()> {
        let start = Instant::now();
        loop {
            if let Ok(element) = self.driver.find(locator.to_by()).await {
                if element
                    .text()
                    .await
                    .map(|t| t.contains(text))
                    .unwrap_or(false)
                {
                    return Ok(());
                }
            }
            if start.elapsed() >= self.context.timeout {
                return Err(
                    self.timeout_error(format!("text '{text}' to appear in element {locator}"))
                );
            }
            tokio::time::sleep(self.context.poll_interval).await;
        }
    }

    /// Wait for the element to be visible, then clickable (interaction-ready).
    ///
    /// # Errors
    ///
    /// `Timeout` if either stage is not reached within its bound.
    pub async fn ready(&self, locator: &Locator) -> HarnessResult<WebElement> {
        self.visible(locator).await?;
        self.clickable(locator).await
    }

    // -------------------------------------------------------------------------
    // Waits by element handle
    // -------------------------------------------------------------------------

    /// Wait for an already-resolved element to be displayed.
    ///
    /// # Errors
    ///
    /// `Timeout` if the element never becomes visible within the bound.
    pub async fn visible_element(&self, element: &WebElement) -> HarnessResult<()> {
        let start = Instant::now();
        loop {
            if element.is_displayed().await.unwrap_or(false) {
                return Ok(());
            }
            if start.elapsed() >= self.context.timeout {
                return Err(self.timeout_error("element to become visible".to_string()));
            }
            tokio::time::sleep(self.context.poll_interval).await;
        }
    }

    /// Wait for an already-resolved element to be displayed and enabled.
    ///
    /// # Errors
    ///
    /// `Timeout` if the element never becomes clickable within the bound.
    pub async fn clickable_element(&self, element: &WebElement) -> HarnessResult<()> {
        let start = Instant::now();
        loop {
            if element.is_clickable().await.unwrap_or(false) {
                return Ok(());
            }
            if start.elapsed() >= self.context.timeout {
                return Err(self.timeout_error("element to become clickable".to_string()));
            }
            tokio::time::sleep(self.context.poll_interval).await;
        }
    }

    // -------------------------------------------------------------------------
    // Page-level waits
    // -------------------------------------------------------------------------

    /// Wait for the current URL to contain a fragment.
    ///
    /// # Errors
    ///
    /// `Timeout` if the URL never matches within the bound.
    pub async fn url_contains(&self, fragment: &str) -> HarnessResult<()> {
        let start = Instant::now();
        loop {
            if let Ok(url) = self.driver.current_url().await {
                if url.as_str().contains(fragment) {
                    return Ok(());
                }
            }
            if start.elapsed() >= self.context.timeout {
                return Err(self.timeout_error(format!("URL to contain '{fragment}'")));
            }
            tokio::time::sleep(self.context.poll_interval).await;
        }
    }

    /// Wait for a custom condition with its own timeout and failure message.
    ///
    /// Evaluation errors are swallowed during polling; the message surfaces
    /// in the timeout failure if the deadline elapses.
    ///
    /// # Errors
    ///
    /// `Timeout` carrying `message` when the deadline elapses.
    pub async fn until<F, Fut>(
        &self,
        condition: F,
        timeout: Duration,
        message: &str,
    ) -> HarnessResult<()>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = HarnessResult<bool>>,
    {
        wait_until(condition, timeout, self.context.poll_interval, message).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn identity() -> SessionIdentity {
        SessionIdentity::new()
    }

    mod wait_context_tests {
        use super::*;

        #[test]
        fn test_for_session_uses_default_interval() {
            let context = WaitContext::for_session(identity(), Duration::from_secs(12));
            assert_eq!(context.timeout(), Duration::from_secs(12));
            assert_eq!(
                context.poll_interval(),
                Duration::from_millis(DEFAULT_POLL_INTERVAL_MS)
            );
        }

        #[test]
        fn test_same_identity_reuses_cached_context() {
            let id = identity();
            let first = WaitContext::for_session(id, Duration::from_secs(5));
            let (second, rebuilt) =
                WaitContext::reuse_or_rebuild(Some(first.clone()), id, Duration::from_secs(5));
            assert!(!rebuilt);
            assert_eq!(first, second);
        }

        #[test]
        fn test_changed_identity_rebuilds_context() {
            let first = WaitContext::for_session(identity(), Duration::from_secs(5));
            let restarted = identity();
            let (second, rebuilt) = WaitContext::reuse_or_rebuild(
                Some(first.clone()),
                restarted,
                Duration::from_secs(5),
            );
            assert!(rebuilt);
            assert_ne!(first.identity(), second.identity());
            assert_eq!(second.identity(), restarted);
        }

        #[test]
        fn test_empty_cache_rebuilds_context() {
            let id = identity();
            let (context, rebuilt) =
                WaitContext::reuse_or_rebuild(None, id, Duration::from_secs(5));
            assert!(rebuilt);
            assert_eq!(context.identity(), id);
        }

        #[test]
        fn test_two_session_cycles_yield_distinct_contexts() {
            // initialize -> release -> initialize produces a new identity,
            // so the second cycle must not see the first cycle's context.
            let timeout = Duration::from_secs(5);
            let (first, _) = WaitContext::reuse_or_rebuild(None, identity(), timeout);
            let (second, rebuilt) =
                WaitContext::reuse_or_rebuild(Some(first.clone()), identity(), timeout);
            assert!(rebuilt);
            assert_ne!(first.identity(), second.identity());
        }
    }

    mod wait_until_tests {
        use super::*;

        #[tokio::test]
        async fn test_immediate_success() {
            let result = wait_until(
                || async { Ok(true) },
                Duration::from_millis(100),
                Duration::from_millis(10),
                "condition",
            )
            .await;
            assert!(result.is_ok());
        }

        #[tokio::test]
        async fn test_timeout_carries_message() {
            let start = Instant::now();
            let result = wait_until(
                || async { Ok(false) },
                Duration::from_secs(1),
                Duration::from_millis(50),
                "dashboard widget to settle",
            )
            .await;
            let elapsed = start.elapsed();
            match result {
                Err(HarnessError::Timeout { ms, condition }) => {
                    assert_eq!(ms, 1000);
                    assert_eq!(condition, "dashboard widget to settle");
                }
                other => panic!("expected Timeout, got {other:?}"),
            }
            // Fails after roughly the bound: not immediately, not much later.
            assert!(elapsed >= Duration::from_millis(950), "failed too early: {elapsed:?}");
            assert!(elapsed < Duration::from_millis(2500), "failed too late: {elapsed:?}");
        }

        #[tokio::test]
        async fn test_evaluation_errors_are_swallowed() {
            let calls = Arc::new(AtomicUsize::new(0));
            let counter = Arc::clone(&calls);
            let result = wait_until(
                move || {
                    let counter = Arc::clone(&counter);
                    async move {
                        match counter.fetch_add(1, Ordering::SeqCst) {
                            0 | 1 => Err(HarnessError::Fixture {
                                message: "transient".to_string(),
                            }),
                            _ => Ok(true),
                        }
                    }
                },
                Duration::from_secs(2),
                Duration::from_millis(10),
                "condition",
            )
            .await;
            assert!(result.is_ok());
            assert!(calls.load(Ordering::SeqCst) >= 3);
        }

        #[tokio::test]
        async fn test_condition_becomes_true_mid_poll() {
            let calls = Arc::new(AtomicUsize::new(0));
            let counter = Arc::clone(&calls);
            let result = wait_until(
                move || {
                    let counter = Arc::clone(&counter);
                    async move { Ok(counter.fetch_add(1, Ordering::SeqCst) >= 4) }
                },
                Duration::from_secs(2),
                Duration::from_millis(10),
                "condition",
            )
            .await;
            assert!(result.is_ok());
        }
    }
}
