//! Forgot-password page suite.

use skillboost_harness::{check, FixtureData, HarnessError, HarnessResult, Synchronizer};
use skillboost_suite::pages::{ForgotPasswordPage, HomePage, LoginPage};
use skillboost_suite::support;
use std::time::Duration;

const TESTDATA_FILE: &str = "forgot-password-data.json";
const LOGIN_PATH: &str = "/login";
const FORGOT_PASSWORD_PATH: &str = "/forgot-password";

/// Navigate home -> login -> forgot password and wait for the header.
async fn open_forgot_password(
    sync: &Synchronizer,
) -> HarnessResult<(LoginPage, ForgotPasswordPage)> {
    let home = HomePage::new(sync.clone());
    home.click_login_button().await?;
    sync.url_contains(LOGIN_PATH).await?;

    let login = LoginPage::new(sync.clone());
    sync.visible(login.logo()).await?;
    sync.visible(login.welcome_text()).await?;

    login.click_forgot_password().await?;
    sync.url_contains(FORGOT_PASSWORD_PATH).await?;

    let forgot = ForgotPasswordPage::new(sync.clone());
    sync.visible(forgot.header()).await?;
    Ok((login, forgot))
}

#[tokio::test]
#[ignore = "requires a running WebDriver endpoint and a deployed SkillBoost environment"]
async fn forgot_password_page_shows_its_elements() -> HarnessResult<()> {
    let (context, sync) = support::launch().await?;

    let outcome = async {
        let (_, forgot) = open_forgot_password(&sync).await?;
        sync.visible(forgot.logo()).await?;

        Ok::<_, HarnessError>((
            forgot.is_logo_visible().await,
            forgot.is_header_visible().await,
            forgot.is_send_link_button_enabled().await,
            forgot.is_try_different_email_button_visible().await,
        ))
    }
    .await;

    let (logo, header, send_enabled, try_different) = support::teardown(context, outcome).await?;
    check::is_true(logo, "logo is visible on the forgot-password page");
    check::is_true(header, "'Forgot Password?' header is visible");
    check::is_false(send_enabled, "send-link button is disabled initially");
    check::is_true(try_different, "'Try a different email' button is visible");
    Ok(())
}

#[tokio::test]
#[ignore = "requires a running WebDriver endpoint and a deployed SkillBoost environment"]
async fn send_link_button_activates_for_valid_email() -> HarnessResult<()> {
    let (context, sync) = support::launch().await?;

    let outcome = async {
        let (_, forgot) = open_forgot_password(&sync).await?;

        let data = FixtureData::load(support::testdata_path(TESTDATA_FILE))?;
        forgot.enter_email(data.value("validEmail", "email")?).await?;

        let probe = forgot.clone();
        sync.until(
            move || {
                let probe = probe.clone();
                async move { Ok(probe.is_send_link_button_enabled().await) }
            },
            Duration::from_secs(8),
            "send-link button did not become enabled within 8 seconds",
        )
        .await?;

        Ok::<_, HarnessError>(forgot.is_send_link_button_enabled().await)
    }
    .await;

    let enabled = support::teardown(context, outcome).await?;
    check::is_true(enabled, "send-link button is active after entering a valid email");
    Ok(())
}

#[tokio::test]
#[ignore = "requires a running WebDriver endpoint and a deployed SkillBoost environment"]
async fn send_link_button_stays_disabled_for_invalid_email() -> HarnessResult<()> {
    let (context, sync) = support::launch().await?;

    let outcome = async {
        let (_, forgot) = open_forgot_password(&sync).await?;

        let data = FixtureData::load(support::testdata_path(TESTDATA_FILE))?;
        forgot.enter_email(data.value("invalidEmail", "email")?).await?;

        let probe = forgot.clone();
        sync.until(
            move || {
                let probe = probe.clone();
                async move { Ok(!probe.is_send_link_button_enabled().await) }
            },
            Duration::from_secs(8),
            "send-link button should stay disabled for an invalid email",
        )
        .await?;

        Ok::<_, HarnessError>(forgot.is_send_link_button_enabled().await)
    }
    .await;

    let enabled = support::teardown(context, outcome).await?;
    check::is_false(enabled, "send-link button remains disabled for an invalid email");
    Ok(())
}

#[tokio::test]
#[ignore = "requires a running WebDriver endpoint and a deployed SkillBoost environment"]
async fn back_to_login_returns_to_login_page() -> HarnessResult<()> {
    let (context, sync) = support::launch().await?;

    let outcome = async {
        let (login, forgot) = open_forgot_password(&sync).await?;

        sync.visible(forgot.back_to_login_button()).await?;
        forgot.click_back_to_login().await?;

        sync.url_contains(LOGIN_PATH).await?;
        sync.visible(login.logo()).await?;

        Ok::<_, HarnessError>(login.is_logo_visible().await)
    }
    .await;

    let logo_visible = support::teardown(context, outcome).await?;
    check::is_true(logo_visible, "back on the login page from forgot-password");
    Ok(())
}
