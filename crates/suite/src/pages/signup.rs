//! Signup page.
//!
//! The create-account button is only enabled when all four validity
//! conditions hold at once: well-formed email, password meeting the length
//! policy, matching confirm-password, and the terms checkbox checked.

use skillboost_harness::{HarnessResult, Locator, PageComponent, Synchronizer};

/// Page object for the SkillBoost signup screen.
#[derive(Debug, Clone)]
pub struct SignupPage {
    sync: Synchronizer,
    logo: Locator,
    create_account_header: Locator,
    email_input: Locator,
    password_input: Locator,
    confirm_password_input: Locator,
    show_password_button: Locator,
    terms_checkbox: Locator,
    create_account_button: Locator,
    login_link: Locator,
    google_login_button: Locator,
    github_login_button: Locator,
}

impl SignupPage {
    /// Bind the page to a session.
    #[must_use]
    pub fn new(sync: Synchronizer) -> Self {
        Self {
            sync,
            logo: Locator::css("div[class='navbar-container'] a[class='logo']"),
            create_account_header: Locator::css(".card-title"),
            email_input: Locator::xpath("//input[@id='email']"),
            password_input: Locator::xpath("//input[@id='password']"),
            confirm_password_input: Locator::xpath("//input[@id='confirmPassword']"),
            show_password_button: Locator::xpath(
                "//app-input-field[@id='password']//img[@alt='hidePassword']",
            ),
            terms_checkbox: Locator::xpath("//input[@id='terms']"),
            create_account_button: Locator::css("button[type='submit']"),
            login_link: Locator::xpath("//button[normalize-space()='Login']"),
            google_login_button: Locator::xpath("//button[@class='btn-social google']"),
            github_login_button: Locator::xpath("//button[@class='btn-social github']"),
        }
    }

    // --- Actions ---

    /// Type the email address.
    ///
    /// # Errors
    ///
    /// Propagates interaction failures.
    pub async fn enter_email(&self, email: &str) -> HarnessResult<()> {
        self.fill(&self.email_input, email).await
    }

    /// Type the password.
    ///
    /// # Errors
    ///
    /// Propagates interaction failures.
    pub async fn enter_password(&self, password: &str) -> HarnessResult<()> {
        self.fill(&self.password_input, password).await
    }

    /// Type the confirm-password value.
    ///
    /// # Errors
    ///
    /// Propagates interaction failures.
    pub async fn enter_confirm_password(&self, confirm_password: &str) -> HarnessResult<()> {
        self.fill(&self.confirm_password_input, confirm_password).await
    }

    /// Toggle the show/hide password control.
    ///
    /// # Errors
    ///
    /// Propagates interaction failures.
    pub async fn toggle_password_visibility(&self) -> HarnessResult<()> {
        self.click(&self.show_password_button).await
    }

    /// Toggle the terms and conditions checkbox.
    ///
    /// # Errors
    ///
    /// Propagates interaction failures.
    pub async fn toggle_terms_checkbox(&self) -> HarnessResult<()> {
        self.click(&self.terms_checkbox).await
    }

    /// Submit the signup form.
    ///
    /// # Errors
    ///
    /// Propagates interaction failures.
    pub async fn click_create_account(&self) -> HarnessResult<()> {
        self.click(&self.create_account_button).await
    }

    /// Follow the login link.
    ///
    /// # Errors
    ///
    /// Propagates interaction failures.
    pub async fn click_login_link(&self) -> HarnessResult<()> {
        self.click(&self.login_link).await
    }

    /// Start the Google OAuth flow.
    ///
    /// # Errors
    ///
    /// Propagates interaction failures.
    pub async fn click_google_login(&self) -> HarnessResult<()> {
        self.click(&self.google_login_button).await
    }

    /// Start the GitHub OAuth flow.
    ///
    /// # Errors
    ///
    /// Propagates interaction failures.
    pub async fn click_github_login(&self) -> HarnessResult<()> {
        self.click(&self.github_login_button).await
    }

    /// Clear the email field.
    ///
    /// # Errors
    ///
    /// Propagates interaction failures.
    pub async fn clear_email(&self) -> HarnessResult<()> {
        self.clear(&self.email_input).await
    }

    /// Clear the password field.
    ///
    /// # Errors
    ///
    /// Propagates interaction failures.
    pub async fn clear_password(&self) -> HarnessResult<()> {
        self.clear(&self.password_input).await
    }

    /// Clear the confirm-password field.
    ///
    /// # Errors
    ///
    /// Propagates interaction failures.
    pub async fn clear_confirm_password(&self) -> HarnessResult<()> {
        self.clear(&self.confirm_password_input).await
    }

    /// Bring the create-account button into view.
    ///
    /// # Errors
    ///
    /// Propagates interaction failures.
    pub async fn scroll_to_create_account_button(&self) -> HarnessResult<()> {
        self.scroll_into_view(&self.create_account_button).await
    }

    // --- Queries ---

    /// Whether the "Create your free account" header is visible.
    pub async fn is_create_account_header_visible(&self) -> bool {
        self.is_visible(&self.create_account_header).await
    }

    /// Whether the create-account button accepts a click.
    pub async fn is_create_account_button_enabled(&self) -> bool {
        self.is_enabled(&self.create_account_button).await
    }

    /// Whether the terms checkbox is checked.
    pub async fn is_terms_checkbox_selected(&self) -> bool {
        self.is_selected(&self.terms_checkbox).await
    }

    /// Whether the navbar logo is visible.
    pub async fn is_logo_visible(&self) -> bool {
        self.is_visible(&self.logo).await
    }

    /// Whether the Google sign-in button is usable.
    pub async fn is_google_sign_in_visible(&self) -> bool {
        self.is_enabled(&self.google_login_button).await
    }

    /// Whether the GitHub sign-in button is usable.
    pub async fn is_github_sign_in_visible(&self) -> bool {
        self.is_enabled(&self.github_login_button).await
    }

    // --- Locator accessors for explicit waits ---

    /// Header locator
    #[must_use]
    pub fn create_account_header(&self) -> &Locator {
        &self.create_account_header
    }

    /// Email input locator
    #[must_use]
    pub fn email_input(&self) -> &Locator {
        &self.email_input
    }

    /// Terms checkbox locator
    #[must_use]
    pub fn terms_checkbox(&self) -> &Locator {
        &self.terms_checkbox
    }

    /// Create-account button locator
    #[must_use]
    pub fn create_account_button(&self) -> &Locator {
        &self.create_account_button
    }

    /// Login link locator
    #[must_use]
    pub fn login_link(&self) -> &Locator {
        &self.login_link
    }

    /// Google sign-in button locator
    #[must_use]
    pub fn google_login_button(&self) -> &Locator {
        &self.google_login_button
    }

    /// GitHub sign-in button locator
    #[must_use]
    pub fn github_login_button(&self) -> &Locator {
        &self.github_login_button
    }
}

impl PageComponent for SignupPage {
    fn sync(&self) -> &Synchronizer {
        &self.sync
    }
}
