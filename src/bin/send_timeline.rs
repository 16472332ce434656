use log::{error, info};

use timeline_mailer::{
    controller::notify_controller::*, env_configuration::env_config::*,
    repository::smtp_repository_impl::*, utils_modules::{logger_utils::*, time_utils::*},
};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    dotenv::dotenv().ok();

    let _logger = set_global_logger().unwrap_or_else(|e| {
        eprintln!("[send_timeline] {:?}", e);
        std::process::exit(1)
    });

    info!("Timeline notification start!");

    match run_notifier(&read_env_var, SmtpRepositoryImpl::new, local_today()).await {
        Ok(recipient) => info!("Timeline notification delivered to {}", recipient),
        Err(e) => {
            error!("[send_timeline] {:?}", e);
            std::process::exit(1);
        }
    }
}
