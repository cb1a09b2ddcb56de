//! Forgot-password page.

use skillboost_harness::{HarnessResult, Locator, PageComponent, Synchronizer};

/// Page object for the password-recovery screen.
#[derive(Debug, Clone)]
pub struct ForgotPasswordPage {
    sync: Synchronizer,
    logo: Locator,
    header: Locator,
    email_input: Locator,
    send_link_button: Locator,
    resend_email_button: Locator,
    try_different_email_button: Locator,
    failure_notification: Locator,
    back_to_login_button: Locator,
}

impl ForgotPasswordPage {
    /// Bind the page to a session.
    #[must_use]
    pub fn new(sync: Synchronizer) -> Self {
        Self {
            sync,
            logo: Locator::css("div[class='navbar-container'] a[class='logo']"),
            header: Locator::css("div[class='onboarding-login'] h1"),
            email_input: Locator::xpath("//input[@id='email']"),
            send_link_button: Locator::css("button[type='submit']"),
            resend_email_button: Locator::css("div[class='resend-and-retry'] button:nth-child(1)"),
            try_different_email_button: Locator::xpath(
                "//button[normalize-space()='Try a different email']",
            ),
            failure_notification: Locator::xpath("//div[@class='alert-content']"),
            back_to_login_button: Locator::xpath("//a[normalize-space()='Back to Login']"),
        }
    }

    /// Type the recovery email address.
    ///
    /// # Errors
    ///
    /// Propagates interaction failures.
    pub async fn enter_email(&self, email: &str) -> HarnessResult<()> {
        self.fill(&self.email_input, email).await
    }

    /// Submit the recovery form.
    ///
    /// # Errors
    ///
    /// Propagates interaction failures.
    pub async fn click_send_link(&self) -> HarnessResult<()> {
        self.click(&self.send_link_button).await
    }

    /// Request another recovery email.
    ///
    /// # Errors
    ///
    /// Propagates interaction failures.
    pub async fn click_resend_email(&self) -> HarnessResult<()> {
        self.click(&self.resend_email_button).await
    }

    /// Restart the flow with a different email.
    ///
    /// # Errors
    ///
    /// Propagates interaction failures.
    pub async fn click_try_different_email(&self) -> HarnessResult<()> {
        self.click(&self.try_different_email_button).await
    }

    /// Return to the login page.
    ///
    /// # Errors
    ///
    /// Propagates interaction failures.
    pub async fn click_back_to_login(&self) -> HarnessResult<()> {
        self.click(&self.back_to_login_button).await
    }

    /// Whether the navbar logo is visible.
    pub async fn is_logo_visible(&self) -> bool {
        self.is_visible(&self.logo).await
    }

    /// Whether the "Forgot Password?" header is visible.
    pub async fn is_header_visible(&self) -> bool {
        self.is_visible(&self.header).await
    }

    /// Whether the send-link button accepts a click.
    pub async fn is_send_link_button_enabled(&self) -> bool {
        self.is_enabled(&self.send_link_button).await
    }

    /// Whether the resend-email button is visible.
    pub async fn is_resend_email_button_visible(&self) -> bool {
        self.is_visible(&self.resend_email_button).await
    }

    /// Whether the try-a-different-email button is visible.
    pub async fn is_try_different_email_button_visible(&self) -> bool {
        self.is_visible(&self.try_different_email_button).await
    }

    /// Whether the failure notification is visible.
    pub async fn is_failure_notification_visible(&self) -> bool {
        self.is_visible(&self.failure_notification).await
    }

    /// The failure notification text.
    ///
    /// # Errors
    ///
    /// Timeout if the notification never becomes visible.
    pub async fn failure_notification_text(&self) -> HarnessResult<String> {
        self.text_of(&self.failure_notification).await
    }

    /// Navbar logo locator
    #[must_use]
    pub fn logo(&self) -> &Locator {
        &self.logo
    }

    /// Page header locator
    #[must_use]
    pub fn header(&self) -> &Locator {
        &self.header
    }

    /// Back-to-login button locator
    #[must_use]
    pub fn back_to_login_button(&self) -> &Locator {
        &self.back_to_login_button
    }
}

impl PageComponent for ForgotPasswordPage {
    fn sync(&self) -> &Synchronizer {
        &self.sync
    }
}
