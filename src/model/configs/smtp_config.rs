use crate::common::*;

use crate::env_configuration::env_config::*;

#[doc = r#"
    Connection and login settings of the SMTP submission server.

    `credential_id` is both the login and the sender address.
"#]
#[derive(Clone, PartialEq, Eq, Getters)]
#[getset(get = "pub")]
pub struct SmtpConfig {
    smtp_name: String,
    smtp_port: u16,
    credential_id: String,
    credential_pw: String,
}

impl std::fmt::Debug for SmtpConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmtpConfig")
            .field("smtp_name", &self.smtp_name)
            .field("smtp_port", &self.smtp_port)
            .field("credential_id", &self.credential_id)
            .field("credential_pw", &"<redacted>")
            .finish()
    }
}

impl SmtpConfig {
    #[doc = r#"
        Builds the SMTP settings from a key lookup.

        1. `EMAIL_ADDRESS` and `EMAIL_PASSWORD` are mandatory
        2. `SMTP_SERVER` defaults to `smtp.gmail.com`
        3. `SMTP_PORT` defaults to 465 and must be a non-zero port number
        4. the sender address must be a syntactically valid mailbox address

        # Arguments
        * `lookup` - returns the value of an environment key, `None` when unset

        # Returns
        * `Result<SmtpConfig, TimelineError>` - `Configuration` on any missing or malformed value
    "#]
    pub fn from_lookup<F>(lookup: &F) -> Result<Self, TimelineError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let credential_id: String = require_var(lookup, EMAIL_ADDRESS)?.trim().to_string();
        let credential_pw: String = require_var(lookup, EMAIL_PASSWORD)?;

        parse_address(EMAIL_ADDRESS, &credential_id)?;

        let smtp_name: String = var_or_default(lookup, SMTP_SERVER, DEFAULT_SMTP_SERVER)
            .trim()
            .to_string();
        let smtp_port: u16 = match non_blank(lookup(SMTP_PORT)) {
            Some(raw) => parse_port(&raw)?,
            None => DEFAULT_SMTP_PORT,
        };

        Ok(SmtpConfig {
            smtp_name,
            smtp_port,
            credential_id,
            credential_pw,
        })
    }

    pub fn from_env() -> Result<Self, TimelineError> {
        Self::from_lookup(&read_env_var)
    }
}

#[doc = "Parses `value` as a mailbox address, naming `key` in the error"]
pub fn parse_address(key: &str, value: &str) -> Result<Address, TimelineError> {
    Address::from_str(value).map_err(|e| {
        TimelineError::Configuration(format!(
            "'{}' is not a valid email address ({}): {}",
            key, value, e
        ))
    })
}

fn parse_port(raw: &str) -> Result<u16, TimelineError> {
    match raw.trim().parse::<u16>() {
        Ok(port) if port != 0 => Ok(port),
        _ => Err(TimelineError::Configuration(format!(
            "'{}' must be a port number between 1 and 65535, got '{}'",
            SMTP_PORT, raw
        ))),
    }
}
