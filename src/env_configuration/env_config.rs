use crate::common::*;

pub const EMAIL_ADDRESS: &str = "EMAIL_ADDRESS";
pub const EMAIL_PASSWORD: &str = "EMAIL_PASSWORD";
pub const RECIPIENT_EMAIL: &str = "RECIPIENT_EMAIL";
pub const SMTP_SERVER: &str = "SMTP_SERVER";
pub const SMTP_PORT: &str = "SMTP_PORT";
pub const TIMELINE_IMAGE_PATH: &str = "TIMELINE_IMAGE_PATH";

pub const DEFAULT_SMTP_SERVER: &str = "smtp.gmail.com";
pub const DEFAULT_SMTP_PORT: u16 = 465;
pub const DEFAULT_TIMELINE_IMAGE_PATH: &str = "timeline.png";

#[doc = r#"
    Reads one variable from the process environment.

    Unset, non-unicode and blank values are all reported as `None`; a blank secret is as
    useless as a missing one. Non-blank values are returned untouched.

    # Arguments
    * `key` - name of the environment variable

    # Returns
    * `Option<String>` - the value when present
"#]
pub fn read_env_var(key: &str) -> Option<String> {
    non_blank(env::var(key).ok())
}

#[doc = "Drops a looked-up value that is empty or whitespace only"]
pub fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[doc = r#"
    Looks a required key up through `lookup` and fails with a configuration error naming
    the key when it is absent.
"#]
pub fn require_var<F>(lookup: &F, key: &str) -> Result<String, TimelineError>
where
    F: Fn(&str) -> Option<String>,
{
    non_blank(lookup(key))
        .ok_or_else(|| TimelineError::Configuration(format!("'{}' must be set", key)))
}

#[doc = "Looks an optional key up through `lookup`, falling back to `default`"]
pub fn var_or_default<F>(lookup: &F, key: &str, default: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    non_blank(lookup(key)).unwrap_or_else(|| default.to_string())
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
    fn require_var_reports_missing_key_by_name() {
        let lookup = lookup_from(&[]);
        let err = require_var(&lookup, EMAIL_ADDRESS).unwrap_err();

        assert!(err.is_configuration());
        assert!(err.to_string().contains(EMAIL_ADDRESS));
    }

    #[test]
    fn blank_values_count_as_missing() {
        let lookup = lookup_from(&[(EMAIL_PASSWORD, "   ")]);

        assert!(require_var(&lookup, EMAIL_PASSWORD).is_err());
        assert_eq!(
            var_or_default(&lookup, EMAIL_PASSWORD, "fallback"),
            "fallback"
        );
    }

    #[test]
    fn present_values_override_defaults() {
        let lookup = lookup_from(&[(SMTP_SERVER, "mail.example.org")]);

        assert_eq!(
            var_or_default(&lookup, SMTP_SERVER, DEFAULT_SMTP_SERVER),
            "mail.example.org"
        );
    }
}
