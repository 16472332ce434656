use crate::common::*;

#[async_trait]
pub trait SmtpRepository: Send + Sync {
    async fn send_message(&self, message: Message) -> Result<(), TimelineError>;
}
