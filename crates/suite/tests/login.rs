//! Login page suite.
//!
//! Navigation from the homepage plus login-form validation behavior.

use skillboost_harness::{check, FixtureData, HarnessError, HarnessResult};
use skillboost_suite::pages::{HomePage, LoginPage};
use skillboost_suite::support;

const TESTDATA_FILE: &str = "login-data.json";

#[tokio::test]
#[ignore = "requires a running WebDriver endpoint and a deployed SkillBoost environment"]
async fn user_can_navigate_to_login_page() -> HarnessResult<()> {
    let (context, sync) = support::launch().await?;

    let outcome = async {
        let home = HomePage::new(sync.clone());
        home.click_login_button().await?;
        sync.url_contains("/login").await?;

        let login = LoginPage::new(sync.clone());
        sync.visible(login.logo()).await?;
        sync.visible(login.welcome_text()).await?;

        Ok::<_, HarnessError>((
            login.is_logo_visible().await,
            login.is_welcome_text_visible().await,
        ))
    }
    .await;

    let (logo_visible, welcome_visible) = support::teardown(context, outcome).await?;
    check::is_true(logo_visible, "logo is visible on the login page");
    check::is_true(welcome_visible, "'Welcome Back' text is visible on the login page");
    Ok(())
}

#[tokio::test]
#[ignore = "requires a running WebDriver endpoint and a deployed SkillBoost environment"]
async fn login_button_activates_with_valid_credentials() -> HarnessResult<()> {
    let (context, sync) = support::launch().await?;

    let outcome = async {
        let home = HomePage::new(sync.clone());
        home.click_login_button().await?;
        sync.url_contains("/login").await?;

        let login = LoginPage::new(sync.clone());
        sync.visible(login.logo()).await?;
        sync.visible(login.welcome_text()).await?;

        let data = FixtureData::load(support::testdata_path(TESTDATA_FILE))?;
        login.enter_email(data.value("validUser", "email")?).await?;
        login.enter_password(data.value("validUser", "password")?).await?;

        Ok::<_, HarnessError>(login.is_login_button_enabled().await)
    }
    .await;

    let enabled = support::teardown(context, outcome).await?;
    check::is_true(enabled, "login button is enabled after entering valid credentials");
    Ok(())
}

#[tokio::test]
#[ignore = "requires a running WebDriver endpoint and a deployed SkillBoost environment"]
async fn login_button_stays_disabled_with_empty_credentials() -> HarnessResult<()> {
    let (context, sync) = support::launch().await?;

    let outcome = async {
        let home = HomePage::new(sync.clone());
        home.click_login_button().await?;
        sync.url_contains("/login").await?;

        let login = LoginPage::new(sync.clone());
        sync.visible(login.logo()).await?;
        sync.visible(login.welcome_text()).await?;

        let data = FixtureData::load(support::testdata_path(TESTDATA_FILE))?;
        let email = data.value("emptyUser", "email")?.to_string();
        let password = data.value("emptyUser", "password")?.to_string();
        login.enter_email(&email).await?;
        login.enter_password(&password).await?;

        Ok::<_, HarnessError>((email, password, login.is_login_button_enabled().await))
    }
    .await;

    let (email, password, enabled) = support::teardown(context, outcome).await?;
    check::eq("", email.as_str(), "email fixture for this scenario is empty");
    check::eq("", password.as_str(), "password fixture for this scenario is empty");
    check::is_false(enabled, "login button stays disabled when both fields are empty");
    Ok(())
}

#[tokio::test]
#[ignore = "requires a running WebDriver endpoint and a deployed SkillBoost environment"]
async fn error_messages_appear_for_invalid_credentials() -> HarnessResult<()> {
    let (context, sync) = support::launch().await?;

    let outcome = async {
        let home = HomePage::new(sync.clone());
        home.click_login_button().await?;
        sync.url_contains("/login").await?;

        let login = LoginPage::new(sync.clone());
        sync.visible(login.logo()).await?;
        sync.visible(login.welcome_text()).await?;

        let data = FixtureData::load(support::testdata_path(TESTDATA_FILE))?;
        login.enter_email(data.value("invalidDetails", "email")?).await?;
        // Moving focus to the password field triggers the email validation.
        login.enter_password(data.value("invalidDetails", "password")?).await?;

        sync.visible(login.email_error()).await?;
        let email_error = login.email_error_text().await?.trim().to_string();

        // Clicking the header blurs the password field and triggers its
        // validation message.
        sync.visible(login.welcome_text()).await?.click().await?;
        sync.visible(login.password_error()).await?;
        let password_error_visible = login.is_password_error_visible().await;

        Ok::<_, HarnessError>((email_error, password_error_visible))
    }
    .await;

    let (email_error, password_error_visible) = support::teardown(context, outcome).await?;
    check::eq(
        "Please enter a valid email.",
        email_error.as_str(),
        "email validation message matches",
    );
    check::is_true(password_error_visible, "password validation message is visible");
    Ok(())
}
