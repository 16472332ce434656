use log::{error, info};

use timeline_mailer::{
    controller::chart_controller::*,
    env_configuration::env_config::*,
    model::timeline::{timeline_event::*, timeline_layout::*},
    schedule::timeline_schedule::*,
    utils_modules::{logger_utils::*, time_utils::*},
};

async fn build_weekly_chart() -> anyhow::Result<TimelineLayout> {
    let events: Vec<TimelineEvent> = build_events()?;
    run_chart_builder(&read_env_var, &events, local_today()).await
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    dotenv::dotenv().ok();

    let _logger = set_global_logger().unwrap_or_else(|e| {
        eprintln!("[build_timeline] {:?}", e);
        std::process::exit(1)
    });

    info!("Timeline chart build start!");

    match build_weekly_chart().await {
        Ok(layout) => info!("Timeline chart build finished with {} bars", layout.row_count()),
        Err(e) => {
            error!("[build_timeline] {:?}", e);
            std::process::exit(1);
        }
    }
}
