//! Logout suite.

use skillboost_harness::{check, FixtureData, HarnessError, HarnessResult, Synchronizer};
use skillboost_suite::pages::{DashboardPage, HomePage, LoginPage};
use skillboost_suite::support;

const TESTDATA_FILE: &str = "login-data.json";

async fn login_to_dashboard(sync: &Synchronizer) -> HarnessResult<DashboardPage> {
    let home = HomePage::new(sync.clone());
    home.click_login_button().await?;
    sync.url_contains("/login").await?;

    let login = LoginPage::new(sync.clone());
    sync.visible(login.logo()).await?;
    sync.visible(login.welcome_text()).await?;

    let data = FixtureData::load(support::testdata_path(TESTDATA_FILE))?;
    login.enter_email(data.value("validUser", "email")?).await?;
    login.enter_password(data.value("validUser", "password")?).await?;
    login.click_login().await?;

    let dashboard = DashboardPage::new(sync.clone());
    sync.visible(dashboard.logo()).await?;
    Ok(dashboard)
}

#[tokio::test]
#[ignore = "requires a running WebDriver endpoint and a deployed SkillBoost environment"]
async fn logout_returns_to_public_site() -> HarnessResult<()> {
    let (context, sync) = support::launch().await?;

    let outcome = async {
        let dashboard = login_to_dashboard(&sync).await?;

        sync.visible(dashboard.logout_button()).await?;
        dashboard.click_logout().await?;

        let home = HomePage::new(sync.clone());
        sync.visible(home.logo()).await?;
        Ok::<_, HarnessError>((
            home.is_logo_visible().await,
            home.is_start_practicing_visible().await,
        ))
    }
    .await;

    let (logo, cta) = support::teardown(context, outcome).await?;
    check::is_true(logo, "public navbar logo is visible after logout");
    check::is_true(cta, "public call-to-action is visible after logout");
    Ok(())
}
