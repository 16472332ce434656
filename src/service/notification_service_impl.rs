use crate::common::*;

use crate::env_configuration::env_config::*;
use crate::model::configs::notifier_config::*;
use crate::traits::{
    repository_traits::smtp_repository::*, service_traits::notification_service::*,
};
use crate::utils_modules::io_utils::*;

const CHART_CONTENT_TYPE: &str = "image/png";

#[derive(Debug, new)]
pub struct NotificationServiceImpl<R: SmtpRepository> {
    smtp_repository: R,
}

#[doc = "Subject line of the weekly mail"]
pub fn chart_mail_subject(today: NaiveDate) -> String {
    format!("Weekly timeline update ({})", today.format("%Y-%m-%d"))
}

fn chart_mail_body(today: NaiveDate) -> String {
    format!(
        "Hello,\n\nAttached is the PhD timeline as of {}.\nThe red line marks today.\n",
        today.format("%A, %d %B %Y")
    )
}

fn mailbox(key: &str, value: &str) -> Result<Mailbox, TimelineError> {
    value.parse::<Mailbox>().map_err(|e| {
        TimelineError::Configuration(format!("'{}' is not a valid mailbox ({}): {}", key, value, e))
    })
}

impl<R: SmtpRepository> NotificationServiceImpl<R> {
    #[doc = r#"
        Builds the `multipart/mixed` message: a plain text body plus the chart as an
        `image/png` attachment named after the image file.

        # Arguments
        * `notifier_config` - sender, recipient and image path
        * `today`           - date written into subject and body
        * `image_bytes`     - content of the chart file

        # Returns
        * `Result<Message, TimelineError>` - `Configuration` when the message cannot be assembled
    "#]
    fn build_chart_message(
        &self,
        notifier_config: &NotifierConfig,
        today: NaiveDate,
        image_bytes: Vec<u8>,
    ) -> Result<Message, TimelineError> {
        let file_name: String = notifier_config
            .image_path()
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| DEFAULT_TIMELINE_IMAGE_PATH.to_string());

        let content_type: ContentType = ContentType::parse(CHART_CONTENT_TYPE)
            .map_err(|e| TimelineError::Configuration(format!("bad attachment type: {}", e)))?;

        Message::builder()
            .from(mailbox(EMAIL_ADDRESS, notifier_config.smtp().credential_id())?)
            .to(mailbox(RECIPIENT_EMAIL, notifier_config.recipient())?)
            .subject(chart_mail_subject(today))
            .multipart(
                MultiPart::mixed()
                    .singlepart(SinglePart::plain(chart_mail_body(today)))
                    .singlepart(Attachment::new(file_name).body(image_bytes, content_type)),
            )
            .map_err(|e| {
                TimelineError::Configuration(format!(
                    "[NotificationServiceImpl->build_chart_message] {}",
                    e
                ))
            })
    }
}

#[async_trait]
impl<R: SmtpRepository> NotificationService for NotificationServiceImpl<R> {
    async fn send_timeline_chart(
        &self,
        notifier_config: &NotifierConfig,
        today: NaiveDate,
    ) -> Result<String, TimelineError> {
        /* A missing chart must fail before the SMTP session is opened */
        let image_bytes: Vec<u8> = read_file_bytes(notifier_config.image_path()).await?;

        let message: Message = self.build_chart_message(notifier_config, today, image_bytes)?;

        self.smtp_repository.send_message(message).await?;

        let recipient: String = notifier_config.recipient().to_string();
        info!("Email sent successfully: {}", recipient);

        Ok(recipient)
    }
}
