//! Per-test execution context.
//!
//! Each test execution unit owns one `TestContext` instead of sharing
//! ambient thread-local state: the context carries the browser session and
//! the cached wait context, so two concurrently running tests can never
//! share a session.

use crate::config::Config;
use crate::driver::Session;
use crate::result::HarnessResult;
use crate::wait::{Synchronizer, WaitContext};
use std::sync::Arc;
use std::time::Duration;

/// Owns at most one live browser session and its cached wait context.
///
/// Lifecycle: `initialize` (or lazy `session`) before the test body,
/// `release` in teardown regardless of the test outcome.
#[derive(Debug)]
pub struct TestContext {
    config: Arc<Config>,
    session: Option<Session>,
    wait: Option<WaitContext>,
}

impl TestContext {
    /// Create an inactive context over the resolved configuration.
    #[must_use]
    pub fn new(config: Arc<Config>) -> Self {
        Self {
            config,
            session: None,
            wait: None,
        }
    }

    /// The configuration this context resolves against
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Whether a session is currently live
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// Create the browser session. No-op when one is already live.
    ///
    /// # Errors
    ///
    /// Propagates configuration and session-creation failures; a failure
    /// aborts the test case, nothing is retried.
    pub async fn initialize(&mut self) -> HarnessResult<()> {
        if self.session.is_some() {
            tracing::debug!("session already live, skipping initialization");
            return Ok(());
        }
        let session = Session::create(&self.config).await?;
        self.session = Some(session);
        Ok(())
    }

    /// The live session, lazily initializing if absent.
    ///
    /// # Errors
    ///
    /// Propagates initialization failures.
    pub async fn session(&mut self) -> HarnessResult<&Session> {
        self.initialize().await?;
        Ok(self
            .session
            .as_ref()
            .expect("session present after initialize"))
    }

    /// The session currently live, if any.
    #[must_use]
    pub fn active_session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// A synchronizer bound to the live session.
    ///
    /// The wait context is cached and keyed by session identity: if the
    /// session was restarted since the last call, the stale context is
    /// discarded and a fresh one is built transparently.
    ///
    /// # Errors
    ///
    /// Propagates lazy-initialization failures.
    pub async fn sync(&mut self) -> HarnessResult<Synchronizer> {
        self.initialize().await?;
        let session = self
            .session
            .as_ref()
            .expect("session present after initialize");
        let identity = session.identity();
        let driver = session.driver().clone();

        let timeout = Duration::from_secs(self.config.explicit_wait());
        let (context, rebuilt) = WaitContext::reuse_or_rebuild(self.wait.take(), identity, timeout);
        if rebuilt {
            tracing::debug!(session = %identity, "wait context rebuilt");
        }
        self.wait = Some(context.clone());

        Ok(Synchronizer::new(driver, context))
    }

    /// The cached wait context, if one has been built.
    #[must_use]
    pub fn cached_wait(&self) -> Option<&WaitContext> {
        self.wait.as_ref()
    }

    /// Drop the cached wait context; the next `sync` call rebuilds it.
    pub fn reset_wait(&mut self) {
        self.wait = None;
    }

    /// Terminate the session if present and clear all cached state.
    /// Safe to call when no session is live.
    ///
    /// # Errors
    ///
    /// Propagates the WebDriver error if quitting the session fails; the
    /// context is cleared either way.
    pub async fn release(&mut self) -> HarnessResult<()> {
        self.wait = None;
        if let Some(session) = self.session.take() {
            session.quit().await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Overrides;
    use std::io::Write;

    fn offline_config() -> Arc<Config> {
        let mut file = tempfile::Builder::new()
            .suffix(".json")
            .tempfile()
            .unwrap();
        file.write_all(
            br#"{"environments": {"dev": {"baseUrl": "http://localhost:4200"}}}"#,
        )
        .unwrap();
        Arc::new(Config::resolve(file.path(), Overrides::default()).unwrap())
    }

    #[test]
    fn test_new_context_is_inactive() {
        let context = TestContext::new(offline_config());
        assert!(!context.is_active());
        assert!(context.active_session().is_none());
        assert!(context.cached_wait().is_none());
    }

    #[tokio::test]
    async fn test_release_without_session_is_safe() {
        let mut context = TestContext::new(offline_config());
        assert!(context.release().await.is_ok());
        assert!(context.release().await.is_ok());
        assert!(!context.is_active());
    }

    #[test]
    fn test_reset_wait_clears_cache() {
        let mut context = TestContext::new(offline_config());
        context.reset_wait();
        assert!(context.cached_wait().is_none());
    }
}
