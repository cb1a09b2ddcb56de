//! Account settings page.

use skillboost_harness::{HarnessResult, Locator, PageComponent, Synchronizer};

/// Page object for the account-information settings screen.
#[derive(Debug, Clone)]
pub struct SettingsPage {
    sync: Synchronizer,
    account_info_header: Locator,
    full_name_input: Locator,
    email_input: Locator,
    bio_input: Locator,
    save_button: Locator,
    success_notification: Locator,
}

impl SettingsPage {
    /// Bind the page to a session.
    #[must_use]
    pub fn new(sync: Synchronizer) -> Self {
        Self {
            sync,
            account_info_header: Locator::xpath("//h2[normalize-space()='Account Information']"),
            full_name_input: Locator::xpath("//input[@id='fullName']"),
            email_input: Locator::xpath("//input[@id='email']"),
            bio_input: Locator::xpath("//textarea[@id='bio']"),
            save_button: Locator::xpath("//button[normalize-space()='Save']"),
            success_notification: Locator::xpath("//div[@class='alert-content']"),
        }
    }

    /// Replace the full-name value.
    ///
    /// # Errors
    ///
    /// Propagates interaction failures.
    pub async fn enter_full_name(&self, full_name: &str) -> HarnessResult<()> {
        self.fill(&self.full_name_input, full_name).await
    }

    /// Replace the bio value.
    ///
    /// # Errors
    ///
    /// Propagates interaction failures.
    pub async fn enter_bio(&self, bio: &str) -> HarnessResult<()> {
        self.fill(&self.bio_input, bio).await
    }

    /// Save the account information.
    ///
    /// # Errors
    ///
    /// Propagates interaction failures.
    pub async fn click_save(&self) -> HarnessResult<()> {
        self.click(&self.save_button).await
    }

    /// Current full-name input value.
    pub async fn full_name(&self) -> Option<String> {
        self.attribute(&self.full_name_input, "value").await
    }

    /// Current email input value.
    pub async fn email(&self) -> Option<String> {
        self.attribute(&self.email_input, "value").await
    }

    /// Current bio input value.
    pub async fn bio(&self) -> Option<String> {
        self.attribute(&self.bio_input, "value").await
    }

    /// Whether the save button accepts a click.
    pub async fn is_save_button_enabled(&self) -> bool {
        self.is_enabled(&self.save_button).await
    }

    /// Whether the success notification is visible.
    pub async fn is_success_notification_visible(&self) -> bool {
        self.is_visible(&self.success_notification).await
    }

    /// Whether the "Account Information" header is visible.
    pub async fn is_account_info_header_visible(&self) -> bool {
        self.is_visible(&self.account_info_header).await
    }

    /// Header locator
    #[must_use]
    pub fn account_info_header(&self) -> &Locator {
        &self.account_info_header
    }
}

impl PageComponent for SettingsPage {
    fn sync(&self) -> &Synchronizer {
        &self.sync
    }
}
