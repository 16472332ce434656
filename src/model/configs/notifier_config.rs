use crate::common::*;

use crate::env_configuration::env_config::*;
use crate::model::configs::smtp_config::*;

#[doc = r#"
    Everything the notifier needs, read and validated once at process start.
"#]
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
#[getset(get = "pub")]
pub struct NotifierConfig {
    smtp: SmtpConfig,
    recipient: String,
    image_path: PathBuf,
}

impl NotifierConfig {
    #[doc = r#"
        Builds the notifier settings from a key lookup.

        `RECIPIENT_EMAIL` falls back to the sender address and `TIMELINE_IMAGE_PATH` to
        `timeline.png`. Nothing here touches the network or the image file.

        # Arguments
        * `lookup` - returns the value of an environment key, `None` when unset

        # Returns
        * `Result<NotifierConfig, TimelineError>`
    "#]
    pub fn from_lookup<F>(lookup: &F) -> Result<Self, TimelineError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let smtp: SmtpConfig = SmtpConfig::from_lookup(lookup)?;

        let recipient: String = var_or_default(lookup, RECIPIENT_EMAIL, smtp.credential_id())
            .trim()
            .to_string();
        parse_address(RECIPIENT_EMAIL, &recipient)?;

        let image_path: PathBuf = PathBuf::from(var_or_default(
            lookup,
            TIMELINE_IMAGE_PATH,
            DEFAULT_TIMELINE_IMAGE_PATH,
        ));

        Ok(NotifierConfig {
            smtp,
            recipient,
            image_path,
        })
    }

    pub fn from_env() -> Result<Self, TimelineError> {
        Self::from_lookup(&read_env_var)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn recipient_defaults_to_sender() {
        let lookup = lookup_from(&[(EMAIL_ADDRESS, "a@x.com"), (EMAIL_PASSWORD, "secret")]);

        let config = NotifierConfig::from_lookup(&lookup).unwrap();

        assert_eq!(config.recipient(), "a@x.com");
        assert_eq!(config.smtp().smtp_name(), DEFAULT_SMTP_SERVER);
        assert_eq!(*config.smtp().smtp_port(), DEFAULT_SMTP_PORT);
        assert_eq!(config.image_path(), Path::new(DEFAULT_TIMELINE_IMAGE_PATH));
    }

    #[test]
    fn explicit_values_win_over_defaults() {
        let lookup = lookup_from(&[
            (EMAIL_ADDRESS, "a@x.com"),
            (EMAIL_PASSWORD, "secret"),
            (RECIPIENT_EMAIL, "b@y.org"),
            (SMTP_SERVER, "mail.y.org"),
            (SMTP_PORT, "587"),
            (TIMELINE_IMAGE_PATH, "out/chart.png"),
        ]);

        let config = NotifierConfig::from_lookup(&lookup).unwrap();

        assert_eq!(config.recipient(), "b@y.org");
        assert_eq!(config.smtp().smtp_name(), "mail.y.org");
        assert_eq!(*config.smtp().smtp_port(), 587);
        assert_eq!(config.image_path(), Path::new("out/chart.png"));
    }

    #[test]
    fn missing_address_is_a_configuration_error() {
        let lookup = lookup_from(&[(EMAIL_PASSWORD, "secret")]);

        let err = NotifierConfig::from_lookup(&lookup).unwrap_err();

        assert!(err.is_configuration());
        assert!(err.to_string().contains(EMAIL_ADDRESS));
    }

    #[test]
    fn missing_password_is_a_configuration_error() {
        let lookup = lookup_from(&[(EMAIL_ADDRESS, "a@x.com")]);

        let err = NotifierConfig::from_lookup(&lookup).unwrap_err();

        assert!(err.is_configuration());
        assert!(err.to_string().contains(EMAIL_PASSWORD));
    }

    #[test]
    fn malformed_port_and_address_are_rejected() {
        let bad_port = lookup_from(&[
            (EMAIL_ADDRESS, "a@x.com"),
            (EMAIL_PASSWORD, "secret"),
            (SMTP_PORT, "smtps"),
        ]);
        assert!(NotifierConfig::from_lookup(&bad_port).unwrap_err().is_configuration());

        let bad_recipient = lookup_from(&[
            (EMAIL_ADDRESS, "a@x.com"),
            (EMAIL_PASSWORD, "secret"),
            (RECIPIENT_EMAIL, "not-an-address"),
        ]);
        assert!(NotifierConfig::from_lookup(&bad_recipient).unwrap_err().is_configuration());
    }

    #[test]
    fn debug_output_hides_the_password() {
        let lookup = lookup_from(&[(EMAIL_ADDRESS, "a@x.com"), (EMAIL_PASSWORD, "hunter2")]);

        let config = NotifierConfig::from_lookup(&lookup).unwrap();

        assert!(!format!("{:?}", config).contains("hunter2"));
    }
}
