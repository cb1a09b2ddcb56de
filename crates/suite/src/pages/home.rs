//! Public homepage.

use skillboost_harness::{HarnessResult, Locator, PageComponent, Synchronizer};

/// Page object for the SkillBoost homepage: navbar navigation plus the
/// hero and pricing sections.
#[derive(Debug, Clone)]
pub struct HomePage {
    sync: Synchronizer,
    logo: Locator,
    platform_link: Locator,
    how_it_works_link: Locator,
    skills_link: Locator,
    pricing_link: Locator,
    login_button: Locator,
    signup_button: Locator,
    start_practicing_button: Locator,
    learn_more_button: Locator,
    meet_lumina_button: Locator,
    pricing_options: Locator,
}

impl HomePage {
    /// Bind the page to a session.
    #[must_use]
    pub fn new(sync: Synchronizer) -> Self {
        Self {
            sync,
            logo: Locator::css("div.navbar-container a.logo"),
            platform_link: Locator::css("div.nav-menu a.active"),
            how_it_works_link: Locator::css("nav.navbar a:nth-child(2)"),
            skills_link: Locator::css("nav.navbar a:nth-child(3)"),
            pricing_link: Locator::css("nav.navbar a:nth-child(4)"),
            login_button: Locator::xpath("//a[@class='login-btn']"),
            signup_button: Locator::css(".signup-btn"),
            start_practicing_button: Locator::css(".btn-primary"),
            learn_more_button: Locator::css(".btn-outline"),
            meet_lumina_button: Locator::css("button[type='button']"),
            pricing_options: Locator::xpath("//h2[normalize-space()='SkillDev Pricing Models']"),
        }
    }

    /// Open the login page via the navbar button.
    ///
    /// # Errors
    ///
    /// Propagates interaction failures.
    pub async fn click_login_button(&self) -> HarnessResult<()> {
        self.sync.clickable(&self.login_button).await?;
        self.click(&self.login_button).await
    }

    /// Open the signup page via the navbar button.
    ///
    /// # Errors
    ///
    /// Propagates interaction failures.
    pub async fn navigate_to_signup(&self) -> HarnessResult<()> {
        self.click(&self.signup_button).await
    }

    /// Click the hero "Start Practicing" call to action.
    ///
    /// # Errors
    ///
    /// Propagates interaction failures.
    pub async fn click_start_practicing(&self) -> HarnessResult<()> {
        self.click(&self.start_practicing_button).await
    }

    /// Click the "Learn More" button.
    ///
    /// # Errors
    ///
    /// Propagates interaction failures.
    pub async fn click_learn_more(&self) -> HarnessResult<()> {
        self.click(&self.learn_more_button).await
    }

    /// Click the "Meet Lumina" button.
    ///
    /// # Errors
    ///
    /// Propagates interaction failures.
    pub async fn click_meet_lumina(&self) -> HarnessResult<()> {
        self.click(&self.meet_lumina_button).await
    }

    /// Open the pricing section via the navbar.
    ///
    /// # Errors
    ///
    /// Propagates interaction failures.
    pub async fn open_pricing_section(&self) -> HarnessResult<()> {
        self.click(&self.pricing_link).await
    }

    /// Scroll down until the pricing headline is in view.
    ///
    /// # Errors
    ///
    /// Propagates interaction failures.
    pub async fn scroll_to_pricing_options(&self) -> HarnessResult<()> {
        self.scroll_into_view(&self.pricing_options).await?;
        self.sync.visible(&self.pricing_options).await?;
        Ok(())
    }

    /// Whether the navbar logo is visible.
    pub async fn is_logo_visible(&self) -> bool {
        self.is_visible(&self.logo).await
    }

    /// Whether the hero call to action is visible.
    pub async fn is_start_practicing_visible(&self) -> bool {
        self.is_visible(&self.start_practicing_button).await
    }

    /// Whether the pricing headline is visible.
    pub async fn is_pricing_options_visible(&self) -> bool {
        self.is_visible(&self.pricing_options).await
    }

    /// Navbar logo locator
    #[must_use]
    pub fn logo(&self) -> &Locator {
        &self.logo
    }

    /// Platform navbar link locator
    #[must_use]
    pub fn platform_link(&self) -> &Locator {
        &self.platform_link
    }

    /// "How it works" navbar link locator
    #[must_use]
    pub fn how_it_works_link(&self) -> &Locator {
        &self.how_it_works_link
    }

    /// Skills navbar link locator
    #[must_use]
    pub fn skills_link(&self) -> &Locator {
        &self.skills_link
    }

    /// Pricing headline locator
    #[must_use]
    pub fn pricing_options(&self) -> &Locator {
        &self.pricing_options
    }
}

impl PageComponent for HomePage {
    fn sync(&self) -> &Synchronizer {
        &self.sync
    }
}
