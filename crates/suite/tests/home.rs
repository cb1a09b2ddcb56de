//! Homepage suite.

use skillboost_harness::{check, HarnessError, HarnessResult};
use skillboost_suite::pages::{HomePage, SignupPage};
use skillboost_suite::support;

#[tokio::test]
#[ignore = "requires a running WebDriver endpoint and a deployed SkillBoost environment"]
async fn homepage_shows_its_main_elements() -> HarnessResult<()> {
    let (context, sync) = support::launch().await?;

    let outcome = async {
        let home = HomePage::new(sync.clone());
        sync.visible(home.logo()).await?;

        Ok::<_, HarnessError>((
            home.is_logo_visible().await,
            home.is_start_practicing_visible().await,
        ))
    }
    .await;

    let (logo, cta) = support::teardown(context, outcome).await?;
    check::is_true(logo, "navbar logo is visible on the homepage");
    check::is_true(cta, "'Start Practicing' call-to-action is visible");
    Ok(())
}

#[tokio::test]
#[ignore = "requires a running WebDriver endpoint and a deployed SkillBoost environment"]
async fn pricing_section_is_reachable_by_scrolling() -> HarnessResult<()> {
    let (context, sync) = support::launch().await?;

    let outcome = async {
        let home = HomePage::new(sync.clone());
        sync.visible(home.logo()).await?;
        home.scroll_to_pricing_options().await?;

        Ok::<_, HarnessError>(home.is_pricing_options_visible().await)
    }
    .await;

    let pricing_visible = support::teardown(context, outcome).await?;
    check::is_true(pricing_visible, "pricing options headline is visible after scrolling");
    Ok(())
}

#[tokio::test]
#[ignore = "requires a running WebDriver endpoint and a deployed SkillBoost environment"]
async fn navbar_signup_opens_signup_page() -> HarnessResult<()> {
    let (context, sync) = support::launch().await?;

    let outcome = async {
        let home = HomePage::new(sync.clone());
        home.navigate_to_signup().await?;

        let signup = SignupPage::new(sync.clone());
        sync.visible(signup.create_account_header()).await?;
        Ok::<_, HarnessError>(signup.is_create_account_header_visible().await)
    }
    .await;

    let header_visible = support::teardown(context, outcome).await?;
    check::is_true(header_visible, "signup header is visible after navbar navigation");
    Ok(())
}
