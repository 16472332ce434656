use crate::common::*;

use crate::model::configs::notifier_config::*;

#[async_trait]
pub trait NotificationService: Send + Sync {
    #[doc = "
        Mail the rendered chart at `notifier_config.image_path()` to the configured recipient.
        Returns the address the message was submitted to.
    "]
    async fn send_timeline_chart(
        &self,
        notifier_config: &NotifierConfig,
        today: NaiveDate,
    ) -> Result<String, TimelineError>;
}
