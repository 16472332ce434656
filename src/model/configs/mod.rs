pub mod chart_config;
pub mod notifier_config;
pub mod smtp_config;
