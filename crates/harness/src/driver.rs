//! Browser session construction.
//!
//! Resolves browser kind, headless flag and execution mode from the
//! configuration, connects to the matching WebDriver endpoint (a local
//! driver process or a remote Selenium grid) and applies the window and
//! timeout policies. Construction failures are fatal for the test case;
//! there is no retry or reconnection.

use crate::config::Config;
use crate::result::{HarnessError, HarnessResult};
use std::str::FromStr;
use std::time::Duration;
use thirtyfour::{Capabilities, ChromiumLikeCapabilities, DesiredCapabilities, WebDriver};
use uuid::Uuid;

/// Default endpoint of a locally running chromedriver
pub const CHROMEDRIVER_URL: &str = "http://localhost:9515";

/// Default endpoint of a locally running geckodriver
pub const GECKODRIVER_URL: &str = "http://localhost:4444";

/// Default endpoint of a locally running msedgedriver
pub const EDGEDRIVER_URL: &str = "http://localhost:9515";

// =============================================================================
// BROWSER KIND / EXECUTION MODE
// =============================================================================

/// Supported browser kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BrowserKind {
    /// Google Chrome (chromedriver)
    Chrome,
    /// Mozilla Firefox (geckodriver)
    Firefox,
    /// Microsoft Edge (msedgedriver)
    Edge,
}

impl BrowserKind {
    /// All supported kinds
    pub const ALL: [Self; 3] = [Self::Chrome, Self::Firefox, Self::Edge];

    /// Lowercase name as used in configuration
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Chrome => "chrome",
            Self::Firefox => "firefox",
            Self::Edge => "edge",
        }
    }
}

impl FromStr for BrowserKind {
    type Err = HarnessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "chrome" => Ok(Self::Chrome),
            "firefox" => Ok(Self::Firefox),
            "edge" => Ok(Self::Edge),
            other => Err(HarnessError::UnsupportedBrowser {
                name: other.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for BrowserKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Where the browser session runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionMode {
    /// Driver process on this machine
    Local,
    /// Selenium grid reachable over the network
    Remote,
}

impl ExecutionMode {
    /// Lowercase name for log and error messages
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Remote => "remote",
        }
    }
}

impl std::fmt::Display for ExecutionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// =============================================================================
// SESSION IDENTITY
// =============================================================================

/// Identity of one browser session, assigned at creation.
///
/// The synchronization layer keys its cached wait context on this value:
/// when the identity changes (session restarted), the stale context is
/// discarded and rebuilt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionIdentity(Uuid);

impl SessionIdentity {
    /// Mint a fresh identity
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionIdentity {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// ENDPOINT / CAPABILITIES FACTORY
// =============================================================================

/// Resolve the WebDriver endpoint for a (kind, mode) pair.
///
/// # Errors
///
/// Returns `HarnessError::InvalidGridUrl` when the remote endpoint cannot
/// be parsed as a URL.
pub fn webdriver_endpoint(
    kind: BrowserKind,
    mode: ExecutionMode,
    grid_url: &str,
) -> HarnessResult<String> {
    let endpoint = match (kind, mode) {
        (_, ExecutionMode::Remote) => {
            url::Url::parse(grid_url).map_err(|e| HarnessError::InvalidGridUrl {
                url: grid_url.to_string(),
                message: e.to_string(),
            })?;
            grid_url
        }
        (BrowserKind::Chrome, ExecutionMode::Local) => CHROMEDRIVER_URL,
        (BrowserKind::Firefox, ExecutionMode::Local) => GECKODRIVER_URL,
        (BrowserKind::Edge, ExecutionMode::Local) => EDGEDRIVER_URL,
    };
    Ok(endpoint.to_string())
}

/// Build the capabilities payload for a browser kind.
///
/// # Errors
///
/// Returns an error if a capability cannot be serialized.
pub fn capabilities(kind: BrowserKind, headless: bool) -> HarnessResult<Capabilities> {
    match kind {
        BrowserKind::Chrome => {
            let mut caps = DesiredCapabilities::chrome();
            if headless {
                caps.set_headless()?;
            }
            caps.add_arg("--no-sandbox")?;
            caps.add_arg("--disable-dev-shm-usage")?;
            Ok(caps.into())
        }
        BrowserKind::Firefox => {
            let mut caps = DesiredCapabilities::firefox();
            if headless {
                caps.set_headless()?;
            }
            Ok(caps.into())
        }
        BrowserKind::Edge => {
            let mut caps = DesiredCapabilities::edge();
            if headless {
                caps.set_headless()?;
            }
            Ok(caps.into())
        }
    }
}

// =============================================================================
// SESSION
// =============================================================================

/// A live browser session: one WebDriver handle plus its identity.
#[derive(Debug)]
pub struct Session {
    driver: WebDriver,
    identity: SessionIdentity,
    kind: BrowserKind,
    mode: ExecutionMode,
}

impl Session {
    /// Create a session from the resolved configuration.
    ///
    /// Applies the window policy (fullscreen > maximize > configured size)
    /// and the implicit-wait / page-load timeout policy.
    ///
    /// # Errors
    ///
    /// `UnsupportedBrowser` or `InvalidGridUrl` for configuration problems,
    /// `SessionCreation` when the endpoint refuses the session.
    pub async fn create(config: &Config) -> HarnessResult<Self> {
        let kind: BrowserKind = config.browser().parse()?;
        let headless = config.headless();
        let mode = if config.remote() {
            ExecutionMode::Remote
        } else {
            ExecutionMode::Local
        };
        let endpoint = webdriver_endpoint(kind, mode, config.grid_url())?;
        let caps = capabilities(kind, headless)?;

        let driver = WebDriver::new(&endpoint, caps).await.map_err(|e| {
            HarnessError::SessionCreation {
                browser: kind.to_string(),
                mode: mode.to_string(),
                message: e.to_string(),
            }
        })?;

        if config.fullscreen() {
            driver.fullscreen_window().await?;
        } else if config.maximize_window() {
            driver.maximize_window().await?;
        } else {
            let (width, height) = config.browser_size();
            driver.set_window_rect(0, 0, width, height).await?;
        }

        driver
            .set_implicit_wait_timeout(Duration::from_secs(config.implicit_wait()))
            .await?;
        driver
            .set_page_load_timeout(Duration::from_secs(config.page_load_timeout()))
            .await?;

        let identity = SessionIdentity::new();
        tracing::info!(
            browser = %kind,
            mode = %mode,
            headless,
            endpoint = %endpoint,
            session = %identity,
            "browser session created"
        );

        Ok(Self {
            driver,
            identity,
            kind,
            mode,
        })
    }

    /// The WebDriver handle
    #[must_use]
    pub fn driver(&self) -> &WebDriver {
        &self.driver
    }

    /// This session's identity
    #[must_use]
    pub fn identity(&self) -> SessionIdentity {
        self.identity
    }

    /// Browser kind of this session
    #[must_use]
    pub fn kind(&self) -> BrowserKind {
        self.kind
    }

    /// Execution mode of this session
    #[must_use]
    pub fn mode(&self) -> ExecutionMode {
        self.mode
    }

    /// Terminate the session.
    ///
    /// # Errors
    ///
    /// Propagates the WebDriver error if the quit command fails.
    pub async fn quit(self) -> HarnessResult<()> {
        let identity = self.identity;
        self.driver.quit().await?;
        tracing::info!(session = %identity, "browser session ended");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod browser_kind_tests {
        use super::*;

        #[test]
        fn test_parse_supported_kinds() {
            assert_eq!("chrome".parse::<BrowserKind>().unwrap(), BrowserKind::Chrome);
            assert_eq!(
                "firefox".parse::<BrowserKind>().unwrap(),
                BrowserKind::Firefox
            );
            assert_eq!("edge".parse::<BrowserKind>().unwrap(), BrowserKind::Edge);
        }

        #[test]
        fn test_parse_is_case_insensitive() {
            assert_eq!("Chrome".parse::<BrowserKind>().unwrap(), BrowserKind::Chrome);
            assert_eq!("FIREFOX".parse::<BrowserKind>().unwrap(), BrowserKind::Firefox);
        }

        #[test]
        fn test_parse_rejects_unsupported() {
            let result = "safari".parse::<BrowserKind>();
            match result {
                Err(HarnessError::UnsupportedBrowser { name }) => assert_eq!(name, "safari"),
                other => panic!("expected UnsupportedBrowser, got {other:?}"),
            }
        }

        #[test]
        fn test_display_round_trips() {
            for kind in BrowserKind::ALL {
                assert_eq!(kind.to_string().parse::<BrowserKind>().unwrap(), kind);
            }
        }
    }

    mod endpoint_tests {
        use super::*;

        #[test]
        fn test_local_endpoints_per_kind() {
            let grid = "http://unused:4444";
            assert_eq!(
                webdriver_endpoint(BrowserKind::Chrome, ExecutionMode::Local, grid).unwrap(),
                CHROMEDRIVER_URL
            );
            assert_eq!(
                webdriver_endpoint(BrowserKind::Firefox, ExecutionMode::Local, grid).unwrap(),
                GECKODRIVER_URL
            );
            assert_eq!(
                webdriver_endpoint(BrowserKind::Edge, ExecutionMode::Local, grid).unwrap(),
                EDGEDRIVER_URL
            );
        }

        #[test]
        fn test_remote_uses_grid_for_every_kind() {
            let grid = "http://grid.internal:4444/wd/hub";
            for kind in BrowserKind::ALL {
                assert_eq!(
                    webdriver_endpoint(kind, ExecutionMode::Remote, grid).unwrap(),
                    grid
                );
            }
        }

        #[test]
        fn test_malformed_grid_url_is_fatal() {
            let result =
                webdriver_endpoint(BrowserKind::Chrome, ExecutionMode::Remote, "not a url");
            assert!(matches!(result, Err(HarnessError::InvalidGridUrl { .. })));
        }
    }

    mod capabilities_tests {
        use super::*;

        #[test]
        fn test_capabilities_build_for_all_kinds() {
            for kind in BrowserKind::ALL {
                assert!(capabilities(kind, false).is_ok());
                assert!(capabilities(kind, true).is_ok());
            }
        }
    }

    mod identity_tests {
        use super::*;

        #[test]
        fn test_identities_are_unique() {
            let a = SessionIdentity::new();
            let b = SessionIdentity::new();
            assert_ne!(a, b);
        }

        #[test]
        fn test_identity_display_is_stable() {
            let id = SessionIdentity::new();
            assert_eq!(id.to_string(), id.to_string());
        }
    }
}
