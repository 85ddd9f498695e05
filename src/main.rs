use clap::Parser;

use job_monitor::app::cli;
use job_monitor::app::config::MonitorConfig;
use job_monitor::{JobMonitor, MonitorError};

fn main() -> Result<(), MonitorError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    let config = MonitorConfig::parse();
    let monitor = JobMonitor::start(config.settings());
    let mut table = config.table_view();

    let result = cli::run_cli(&monitor, &mut table);
    monitor.shutdown();
    result
}
