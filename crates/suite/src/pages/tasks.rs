//! Tasks dashboard view.

use skillboost_harness::{HarnessResult, Locator, PageComponent, Synchronizer};

/// Page object for the tasks view inside the dashboard.
#[derive(Debug, Clone)]
pub struct TasksPage {
    sync: Synchronizer,
    tasks_header: Locator,
    todays_tasks_header: Locator,
    first_task_card: Locator,
    previous_tasks_header: Locator,
}

impl TasksPage {
    /// Bind the page to a session.
    #[must_use]
    pub fn new(sync: Synchronizer) -> Self {
        Self {
            sync,
            tasks_header: Locator::css(".tasks-title"),
            todays_tasks_header: Locator::css(".list-title.ng-star-inserted"),
            first_task_card: Locator::css("app-task-list app-tasks-card:nth-child(1) > div"),
            previous_tasks_header: Locator::css("h2[class='list-title']"),
        }
    }

    /// Open the first task card.
    ///
    /// # Errors
    ///
    /// Propagates interaction failures.
    pub async fn click_first_task_card(&self) -> HarnessResult<()> {
        self.click(&self.first_task_card).await
    }

    /// Whether the tasks page header is visible.
    pub async fn is_tasks_header_visible(&self) -> bool {
        self.is_visible(&self.tasks_header).await
    }

    /// Whether the "Today's Tasks" list header is visible.
    pub async fn is_todays_tasks_header_visible(&self) -> bool {
        self.is_visible(&self.todays_tasks_header).await
    }

    /// Whether the first task card is visible.
    pub async fn is_first_task_card_visible(&self) -> bool {
        self.is_visible(&self.first_task_card).await
    }

    /// Whether the previous-tasks list header is visible.
    pub async fn is_previous_tasks_header_visible(&self) -> bool {
        self.is_visible(&self.previous_tasks_header).await
    }

    /// Tasks header locator
    #[must_use]
    pub fn tasks_header(&self) -> &Locator {
        &self.tasks_header
    }
}

impl PageComponent for TasksPage {
    fn sync(&self) -> &Synchronizer {
        &self.sync
    }
}
