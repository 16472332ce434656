use crate::common::*;

use crate::model::configs::smtp_config::*;

use crate::traits::repository_traits::smtp_repository::*;

use lettre::transport::smtp::response::Code;

/* Port that expects a plain connection upgraded with STARTTLS instead of implicit TLS */
const STARTTLS_SUBMISSION_PORT: u16 = 587;

/* Reply codes a server uses to reject the login */
const AUTH_REJECTION_CODES: [&str; 3] = ["530", "534", "535"];

#[derive(Debug, Clone)]
pub struct SmtpRepositoryImpl {
    mailer: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpRepositoryImpl {
    #[doc = r#"
        Prepares an authenticated SMTP transport for `smtp_config`.

        No connection is opened here; the TLS session is established lazily by the first
        `send_message` call and closed once the message is submitted.

        # Arguments
        * `smtp_config` - server, port and credentials

        # Returns
        * `Result<SmtpRepositoryImpl, TimelineError>` - `Connection` when the TLS parameters cannot be built for the host
    "#]
    pub fn new(smtp_config: &SmtpConfig) -> Result<Self, TimelineError> {
        let host: &str = smtp_config.smtp_name().as_str();
        let port: u16 = *smtp_config.smtp_port();

        let builder = if port == STARTTLS_SUBMISSION_PORT {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(host)
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::relay(host)
        }
        .map_err(|e| {
            TimelineError::Connection(format!("cannot prepare TLS for {}:{}: {}", host, port, e))
        })?;

        let creds: Credentials = Credentials::new(
            smtp_config.credential_id().to_string(),
            smtp_config.credential_pw().to_string(),
        );

        let mailer: AsyncSmtpTransport<Tokio1Executor> =
            builder.port(port).credentials(creds).build();

        Ok(SmtpRepositoryImpl { mailer })
    }
}

#[doc = r#"
    Sorts a transport failure into login rejection or connection trouble.

    # Arguments
    * `status` - SMTP reply code, absent when the failure happened below the protocol
    * `message` - rendered error text kept in the returned variant
"#]
fn classify_smtp_failure(status: Option<Code>, message: String) -> TimelineError {
    let rejected_login: bool = status
        .map(|code| AUTH_REJECTION_CODES.contains(&code.to_string().as_str()))
        .unwrap_or(false);

    if rejected_login {
        TimelineError::Authentication(message)
    } else {
        TimelineError::Connection(message)
    }
}

#[async_trait]
impl SmtpRepository for SmtpRepositoryImpl {
    #[doc = "Submits one message over a fresh TLS session"]
    async fn send_message(&self, message: Message) -> Result<(), TimelineError> {
        let response = self
            .mailer
            .send(message)
            .await
            .map_err(|e| classify_smtp_failure(e.status(), e.to_string()))?;

        info!(
            "SMTP server accepted the message: {} {}",
            response.code(),
            response.message().collect::<Vec<&str>>().join(" ")
        );

        Ok(())
    }
}
