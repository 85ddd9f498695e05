use clap::Parser;

use crate::app::table::TableView;
use crate::manager::hosts::{HostMapping, HostTable};
use crate::manager::job_list::{DEFAULT_FILE_PATH_PARTS, NEVER_EXPIRE};
use crate::manager::monitor::MonitorSettings;
use crate::models::column::Column;

/// Live job list with automatic expiry of finished jobs
#[derive(Parser, Debug, Clone)]
#[command(name = "job_monitor", author, version, about, long_about = None)]
pub struct MonitorConfig {
    /// Seconds a finished job stays listed (-1 never expires, 0 removes it at once)
    #[arg(long, env = "JOB_MONITOR_EXPIRE", default_value_t = NEVER_EXPIRE, allow_negative_numbers = true)]
    pub expire: i64,

    /// Trailing path segments shown in the Filename column (0 basename, -1 full path)
    #[arg(
        long = "path-parts",
        env = "JOB_MONITOR_PATH_PARTS",
        default_value_t = DEFAULT_FILE_PATH_PARTS,
        allow_negative_numbers = true
    )]
    pub path_parts: i32,

    /// Host name for a host id, may be repeated
    #[arg(long = "host", value_name = "ID=NAME")]
    pub hosts: Vec<HostMapping>,

    /// Start with the Client column hidden
    #[arg(long)]
    pub hide_client: bool,

    /// Start with the Server column hidden
    #[arg(long)]
    pub hide_server: bool,
}

impl MonitorConfig {
    pub fn settings(&self) -> MonitorSettings {
        MonitorSettings {
            hosts: self.hosts.iter().cloned().collect::<HostTable>(),
            expire_duration: self.expire,
            file_path_parts: self.path_parts,
        }
    }

    pub fn table_view(&self) -> TableView {
        let mut table = TableView::new();
        table.set_column_visible(Column::Client, !self.hide_client);
        table.set_column_visible(Column::Server, !self.hide_server);
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manager::hosts::HostNameResolver;

    #[test]
    fn defaults_never_expire() {
        let config = MonitorConfig::try_parse_from(["job_monitor"]).unwrap();
        assert_eq!(config.expire, NEVER_EXPIRE);
        assert_eq!(config.path_parts, DEFAULT_FILE_PATH_PARTS);
        assert!(config.hosts.is_empty());
        assert!(config.table_view().is_column_visible(Column::Client));
    }

    #[test]
    fn parses_flags_and_hosts() {
        let config = MonitorConfig::try_parse_from([
            "job_monitor",
            "--expire",
            "30",
            "--path-parts",
            "-1",
            "--host",
            "1=alpha",
            "--host",
            "2=beta",
            "--hide-server",
        ])
        .unwrap();

        let settings = config.settings();
        assert_eq!(settings.expire_duration, 30);
        assert_eq!(settings.file_path_parts, -1);
        assert_eq!(settings.hosts.name_for_host(2), "beta");

        let table = config.table_view();
        assert!(table.is_column_visible(Column::Client));
        assert!(!table.is_column_visible(Column::Server));
    }

    #[test]
    fn rejects_bad_host_mapping() {
        assert!(MonitorConfig::try_parse_from(["job_monitor", "--host", "alpha"]).is_err());
    }
}
