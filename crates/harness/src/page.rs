//! Page-object base behavior.
//!
//! Every page object exposes intention-revealing methods built from two
//! primitives: actions that locate an element through the synchronizer and
//! perform exactly one interaction, and queries that collapse
//! not-found/not-visible conditions into `false`/`None` instead of
//! propagating. Locators are re-resolved on every call.

use crate::locator::Locator;
use crate::result::HarnessResult;
use crate::wait::Synchronizer;
use async_trait::async_trait;
use thirtyfour::components::SelectElement;

/// Shared actions and queries for page objects.
///
/// Implementors only provide the synchronizer binding:
///
/// ```ignore
/// struct LoginPage {
///     sync: Synchronizer,
///     email_input: Locator,
/// }
///
/// impl PageComponent for LoginPage {
///     fn sync(&self) -> &Synchronizer {
///         &self.sync
///     }
/// }
/// ```
#[async_trait]
pub trait PageComponent {
    /// The synchronizer bound to the page's session
    fn sync(&self) -> &Synchronizer;

    /// Wait for the element to be clickable, then click it.
    ///
    /// # Errors
    ///
    /// Timeout or WebDriver errors from the single interaction.
    async fn click(&self, locator: &Locator) -> HarnessResult<()> {
        tracing::info!(%locator, "click");
        let element = self.sync().clickable(locator).await?;
        element.click().await?;
        Ok(())
    }

    /// Wait for the element to be visible, clear it, then type into it.
    ///
    /// # Errors
    ///
    /// Timeout or WebDriver errors from the interaction.
    async fn fill(&self, locator: &Locator, text: &str) -> HarnessResult<()> {
        tracing::info!(%locator, text, "fill");
        let element = self.sync().visible(locator).await?;
        element.clear().await?;
        element.send_keys(text).await?;
        Ok(())
    }

    /// Clear an input element.
    ///
    /// # Errors
    ///
    /// Timeout or WebDriver errors from the interaction.
    async fn clear(&self, locator: &Locator) -> HarnessResult<()> {
        let element = self.sync().visible(locator).await?;
        element.clear().await?;
        Ok(())
    }

    /// Select a dropdown option by its visible text.
    ///
    /// # Errors
    ///
    /// Timeout or WebDriver errors from the interaction.
    async fn select_visible_text(&self, locator: &Locator, text: &str) -> HarnessResult<()> {
        tracing::info!(%locator, text, "select");
        let element = self.sync().visible(locator).await?;
        let select = SelectElement::new(&element).await?;
        select.select_by_visible_text(text).await?;
        Ok(())
    }

    /// Move the pointer to the element's center.
    ///
    /// # Errors
    ///
    /// Timeout or WebDriver errors from the interaction.
    async fn hover(&self, locator: &Locator) -> HarnessResult<()> {
        tracing::info!(%locator, "hover");
        let element = self.sync().visible(locator).await?;
        self.sync()
            .driver()
            .action_chain()
            .move_to_element_center(&element)
            .perform()
            .await?;
        Ok(())
    }

    /// Scroll the element into the viewport center.
    ///
    /// # Errors
    ///
    /// Timeout or WebDriver errors from the interaction.
    async fn scroll_into_view(&self, locator: &Locator) -> HarnessResult<()> {
        let element = self.sync().visible(locator).await?;
        self.sync()
            .driver()
            .execute(
                "arguments[0].scrollIntoView({ block: 'center' });",
                vec![element.to_json()?],
            )
            .await?;
        Ok(())
    }

    /// The element's text content once it is visible.
    ///
    /// # Errors
    ///
    /// Timeout if the element never becomes visible.
    async fn text_of(&self, locator: &Locator) -> HarnessResult<String> {
        let element = self.sync().visible(locator).await?;
        Ok(element.text().await?)
    }

    /// Whether the element becomes visible within the wait bound.
    /// Not-found and timeout conditions read as `false`.
    async fn is_visible(&self, locator: &Locator) -> bool {
        match self.sync().visible(locator).await {
            Ok(_) => true,
            Err(e) => {
                tracing::debug!(%locator, error = %e, "element not visible");
                false
            }
        }
    }

    /// Whether the element is present and enabled. Absence reads as `false`.
    async fn is_enabled(&self, locator: &Locator) -> bool {
        match self.sync().present(locator).await {
            Ok(element) => element.is_enabled().await.unwrap_or(false),
            Err(_) => false,
        }
    }

    /// Whether the element is present and selected (checkboxes, radios).
    /// Absence reads as `false`.
    async fn is_selected(&self, locator: &Locator) -> bool {
        match self.sync().present(locator).await {
            Ok(element) => element.is_selected().await.unwrap_or(false),
            Err(_) => false,
        }
    }

    /// An attribute value, `None` when the element or attribute is absent.
    async fn attribute(&self, locator: &Locator, name: &str) -> Option<String> {
        match self.sync().present(locator).await {
            Ok(element) => element.attr(name).await.ok().flatten(),
            Err(_) => None,
        }
    }
}
