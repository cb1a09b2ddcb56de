//! Authenticated dashboard.

use skillboost_harness::{HarnessResult, Locator, PageComponent, Synchronizer};

/// Page object for the dashboard: sidebar navigation, header, and the
/// progress widgets.
#[derive(Debug, Clone)]
pub struct DashboardPage {
    sync: Synchronizer,
    logo: Locator,
    welcome_text: Locator,
    profile_icon: Locator,
    tasks_menu: Locator,
    leaderboard_menu: Locator,
    skill_arena_menu: Locator,
    groups_menu: Locator,
    settings_menu: Locator,
    logout_button: Locator,
    progress_bar: Locator,
    progress_graph: Locator,
}

impl DashboardPage {
    /// Bind the page to a session.
    #[must_use]
    pub fn new(sync: Synchronizer) -> Self {
        Self {
            sync,
            logo: Locator::css(".sidebar-logo"),
            welcome_text: Locator::css("header[class='dashboard-header'] h1"),
            profile_icon: Locator::css(".navbar-profile--name"),
            tasks_menu: Locator::css("a[data-tour-id='sidebar-tasks']"),
            leaderboard_menu: Locator::css("a[data-tour-id='sidebar-leaderboard'] span"),
            skill_arena_menu: Locator::css("a[data-tour-id='sidebar-skill-arena'] span"),
            groups_menu: Locator::css("a[data-tour-id='sidebar-groups']"),
            settings_menu: Locator::css(".sidebar-footer-item"),
            logout_button: Locator::xpath("//button[normalize-space()='Logout']"),
            progress_bar: Locator::css(".progress-stats"),
            progress_graph: Locator::css(".tooltip-area"),
        }
    }

    // --- Navigation actions ---

    /// Open the tasks view.
    ///
    /// # Errors
    ///
    /// Propagates interaction failures.
    pub async fn click_tasks(&self) -> HarnessResult<()> {
        self.click(&self.tasks_menu).await
    }

    /// Open the leaderboard view.
    ///
    /// # Errors
    ///
    /// Propagates interaction failures.
    pub async fn click_leaderboard(&self) -> HarnessResult<()> {
        self.click(&self.leaderboard_menu).await
    }

    /// Open the skill-arena view.
    ///
    /// # Errors
    ///
    /// Propagates interaction failures.
    pub async fn click_skill_arena(&self) -> HarnessResult<()> {
        self.click(&self.skill_arena_menu).await
    }

    /// Open the groups view.
    ///
    /// # Errors
    ///
    /// Propagates interaction failures.
    pub async fn click_groups(&self) -> HarnessResult<()> {
        self.click(&self.groups_menu).await
    }

    /// Open the settings view via the sidebar footer.
    ///
    /// # Errors
    ///
    /// Propagates interaction failures.
    pub async fn open_settings(&self) -> HarnessResult<()> {
        self.click(&self.settings_menu).await
    }

    /// Open the profile (navigates to settings).
    ///
    /// # Errors
    ///
    /// Propagates interaction failures.
    pub async fn open_profile(&self) -> HarnessResult<()> {
        self.click(&self.profile_icon).await
    }

    /// Log out of the application.
    ///
    /// # Errors
    ///
    /// Propagates interaction failures.
    pub async fn click_logout(&self) -> HarnessResult<()> {
        self.click(&self.logout_button).await
    }

    // --- Queries ---

    /// Whether the sidebar logo is visible.
    pub async fn is_logo_visible(&self) -> bool {
        self.is_visible(&self.logo).await
    }

    /// Whether the welcome header is visible.
    pub async fn is_welcome_text_visible(&self) -> bool {
        self.is_visible(&self.welcome_text).await
    }

    /// Whether the progress bar is visible (scrolled into view first).
    pub async fn is_progress_bar_visible(&self) -> bool {
        if self.scroll_into_view(&self.progress_bar).await.is_err() {
            return false;
        }
        self.is_visible(&self.progress_bar).await
    }

    /// Whether the progress graph is visible (scrolled into view first).
    pub async fn is_progress_graph_visible(&self) -> bool {
        if self.scroll_into_view(&self.progress_graph).await.is_err() {
            return false;
        }
        self.is_visible(&self.progress_graph).await
    }

    // --- Locator accessors for explicit waits ---

    /// Sidebar logo locator
    #[must_use]
    pub fn logo(&self) -> &Locator {
        &self.logo
    }

    /// Welcome header locator
    #[must_use]
    pub fn welcome_text(&self) -> &Locator {
        &self.welcome_text
    }

    /// Logout button locator
    #[must_use]
    pub fn logout_button(&self) -> &Locator {
        &self.logout_button
    }
}

impl PageComponent for DashboardPage {
    fn sync(&self) -> &Synchronizer {
        &self.sync
    }
}
