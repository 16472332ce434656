/*
Author      : timeline_mailer maintainers
Create date : 2026-10-19
Description : Renders a Gantt-style PhD timeline chart and mails it over SMTP.

History     : 2026-10-19 timeline_mailer maintainers  # [v.1.0.0] first create

The two halves run as separate binaries, `build_timeline` and `send_timeline`; the
PNG written by the first is the only thing handed to the second.
*/

mod common;
mod external_deps;
mod prelude;

pub mod controller;
pub mod enums;
pub mod env_configuration;
pub mod errors;
pub mod model;
pub mod repository;
pub mod schedule;
pub mod service;
pub mod traits;
pub mod utils_modules;
