//! Login page.

use skillboost_harness::{HarnessResult, Locator, PageComponent, Synchronizer};

/// Page object for the SkillBoost login screen.
#[derive(Debug, Clone)]
pub struct LoginPage {
    sync: Synchronizer,
    logo: Locator,
    welcome_text: Locator,
    email_input: Locator,
    password_input: Locator,
    password_toggle: Locator,
    login_button: Locator,
    forgot_password_link: Locator,
    signup_link: Locator,
    google_login_button: Locator,
    github_login_button: Locator,
    email_error: Locator,
    password_error: Locator,
}

impl LoginPage {
    /// Bind the page to a session.
    #[must_use]
    pub fn new(sync: Synchronizer) -> Self {
        Self {
            sync,
            logo: Locator::css("div.navbar-container a.logo"),
            welcome_text: Locator::css("div.onboarding-login h1"),
            email_input: Locator::xpath("//input[@id='email']"),
            password_input: Locator::xpath("//input[@id='password']"),
            password_toggle: Locator::css("img[alt='hidePassword']"),
            login_button: Locator::css("button[type='submit']"),
            forgot_password_link: Locator::css("a[routerlink='/forgot-password']"),
            signup_link: Locator::css("p.login-donthave-account a"),
            google_login_button: Locator::css("button.google-login"),
            github_login_button: Locator::css("button.facebook-login"),
            email_error: Locator::css("div.form-group p"),
            password_error: Locator::css("div.password-field p"),
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

    /// Toggle the show/hide password control.
    ///
    /// # Errors
    ///
    /// Propagates interaction failures.
    pub async fn toggle_password_visibility(&self) -> HarnessResult<()> {
        self.click(&self.password_toggle).await
    }

    /// Submit the login form.
    ///
    /// # Errors
    ///
    /// Propagates interaction failures.
    pub async fn click_login(&self) -> HarnessResult<()> {
        self.click(&self.login_button).await
    }

    /// Follow the "Forgot Password?" link.
    ///
    /// # Errors
    ///
    /// Propagates interaction failures.
    pub async fn click_forgot_password(&self) -> HarnessResult<()> {
        self.sync.visible(&self.forgot_password_link).await?;
        self.click(&self.forgot_password_link).await
    }

    /// Follow the signup link.
    ///
    /// # Errors
    ///
    /// Propagates interaction failures.
    pub async fn click_signup_link(&self) -> HarnessResult<()> {
        self.click(&self.signup_link).await
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

    // --- Queries ---

    /// Whether the navbar logo is visible.
    pub async fn is_logo_visible(&self) -> bool {
        self.is_visible(&self.logo).await
    }

    /// Whether the "Welcome Back" heading is visible.
    pub async fn is_welcome_text_visible(&self) -> bool {
        self.is_visible(&self.welcome_text).await
    }

    /// Whether the login button accepts a click.
    pub async fn is_login_button_enabled(&self) -> bool {
        self.is_enabled(&self.login_button).await
    }

    /// Whether the inline email validation message is visible.
    pub async fn is_email_error_visible(&self) -> bool {
        self.is_visible(&self.email_error).await
    }

    /// Whether the inline password validation message is visible.
    pub async fn is_password_error_visible(&self) -> bool {
        self.is_visible(&self.password_error).await
    }

    /// The inline email validation message.
    ///
    /// # Errors
    ///
    /// Timeout if the message never becomes visible.
    pub async fn email_error_text(&self) -> HarnessResult<String> {
        self.text_of(&self.email_error).await
    }

    /// The inline password validation message.
    ///
    /// # Errors
    ///
    /// Timeout if the message never becomes visible.
    pub async fn password_error_text(&self) -> HarnessResult<String> {
        self.text_of(&self.password_error).await
    }

    // --- Locator accessors for explicit waits ---

    /// Navbar logo locator
    #[must_use]
    pub fn logo(&self) -> &Locator {
        &self.logo
    }

    /// "Welcome Back" heading locator
    #[must_use]
    pub fn welcome_text(&self) -> &Locator {
        &self.welcome_text
    }

    /// Forgot-password link locator
    #[must_use]
    pub fn forgot_password_link(&self) -> &Locator {
        &self.forgot_password_link
    }

    /// Email validation message locator
    #[must_use]
    pub fn email_error(&self) -> &Locator {
        &self.email_error
    }

    /// Password validation message locator
    #[must_use]
    pub fn password_error(&self) -> &Locator {
        &self.password_error
    }
}

impl PageComponent for LoginPage {
    fn sync(&self) -> &Synchronizer {
        &self.sync
    }
}
