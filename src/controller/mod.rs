pub mod chart_controller;
pub mod notify_controller;
