use crate::common::*;

use crate::model::configs::{notifier_config::*, smtp_config::*};
use crate::service::notification_service_impl::*;
use crate::traits::{
    repository_traits::smtp_repository::*, service_traits::notification_service::*,
};

#[derive(Debug, new)]
pub struct NotifyController<N: NotificationService> {
    notification_service: N,
}

impl<N: NotificationService> NotifyController<N> {
    #[doc = r#"
        Sends the rendered chart once. No retry: the scheduler re-invokes on failure.

        # Returns
        * `anyhow::Result<String>` - recipient the message was submitted to
    "#]
    pub async fn main_task(
        &self,
        notifier_config: &NotifierConfig,
        today: NaiveDate,
    ) -> anyhow::Result<String> {
        info!(
            "Sending {:?} to {} via {}:{}",
            notifier_config.image_path(),
            notifier_config.recipient(),
            notifier_config.smtp().smtp_name(),
            notifier_config.smtp().smtp_port()
        );

        let recipient: String = self
            .notification_service
            .send_timeline_chart(notifier_config, today)
            .await
            .context("[NotifyController->main_task] failed to mail the timeline chart")?;

        Ok(recipient)
    }
}

#[doc = r#"
    Notifier entry point shared by the binary and the tests.

    Configuration is validated before `connect` is called, so a missing credential never
    leads to a transport being created.

    # Arguments
    * `lookup`  - environment key lookup
    * `connect` - builds the SMTP repository from the validated settings
    * `today`   - date written into the mail
"#]
pub async fn run_notifier<F, R, M>(lookup: &F, connect: M, today: NaiveDate) -> anyhow::Result<String>
where
    F: Fn(&str) -> Option<String>,
    R: SmtpRepository,
    M: FnOnce(&SmtpConfig) -> Result<R, TimelineError>,
{
    let notifier_config: NotifierConfig = NotifierConfig::from_lookup(lookup)
        .context("[run_notifier] invalid notifier configuration")?;

    let smtp_repository: R = connect(notifier_config.smtp())
        .context("[run_notifier] failed to prepare the SMTP transport")?;

    let notify_controller: NotifyController<NotificationServiceImpl<R>> =
        NotifyController::new(NotificationServiceImpl::new(smtp_repository));

    notify_controller.main_task(&notifier_config, today).await
}
