//! Leaderboard view (currently a "Coming Soon" placeholder).

use skillboost_harness::{HarnessResult, Locator, PageComponent, Synchronizer};

/// Page object for the leaderboard view.
#[derive(Debug, Clone)]
pub struct LeaderboardPage {
    sync: Synchronizer,
    header: Locator,
    back_to_dashboard_button: Locator,
}

impl LeaderboardPage {
    /// Bind the page to a session.
    #[must_use]
    pub fn new(sync: Synchronizer) -> Self {
        Self {
            sync,
            header: Locator::xpath("//h1[normalize-space()='Leaderboard - Coming Soon']"),
            back_to_dashboard_button: Locator::xpath("//a[normalize-space()='Back to Dashboard']"),
        }
    }

    /// Return to the dashboard.
    ///
    /// # Errors
    ///
    /// Propagates interaction failures.
    pub async fn click_back_to_dashboard(&self) -> HarnessResult<()> {
        self.click(&self.back_to_dashboard_button).await
    }

    /// Whether the placeholder header is visible.
    pub async fn is_header_visible(&self) -> bool {
        self.is_visible(&self.header).await
    }

    /// Whether the back-to-dashboard button is visible.
    pub async fn is_back_to_dashboard_button_visible(&self) -> bool {
        self.is_visible(&self.back_to_dashboard_button).await
    }

    /// Placeholder header locator
    #[must_use]
    pub fn header(&self) -> &Locator {
        &self.header
    }
}

impl PageComponent for LeaderboardPage {
    fn sync(&self) -> &Synchronizer {
        &self.sync
    }
}
