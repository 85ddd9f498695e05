use std::borrow::Cow;
use std::cmp::Ordering;

use crate::manager::hosts::HostNameResolver;
use crate::manager::path::display_file_path;
use crate::models::column::Column;
use crate::models::job::Job;

/// The live row for one job: its latest snapshot plus cached display text.
#[derive(Debug, Clone)]
pub struct JobEntry {
    job: Job,
    serial: u64,
    file_name: String,
    client_name: String,
    server_name: String,
}

impl JobEntry {
    pub fn new(job: Job, serial: u64, hosts: &dyn HostNameResolver, file_path_parts: i32) -> Self {
        let file_name = display_file_path(&job.file_path, file_path_parts);
        let (client_name, server_name) = host_names(&job, hosts);
        Self {
            job,
            serial,
            file_name,
            client_name,
            server_name,
        }
    }

    /// Replaces the snapshot. The filename is only recomputed when the path
    /// differs from the previous snapshot.
    pub fn update(&mut self, job: Job, hosts: &dyn HostNameResolver, file_path_parts: i32) {
        debug_assert_eq!(self.job.id, job.id, "entry id must not change");
        let file_name_changed = self.job.file_path != job.file_path;

        let (client_name, server_name) = host_names(&job, hosts);
        self.client_name = client_name;
        self.server_name = server_name;
        self.job = job;

        if file_name_changed {
            self.update_file_name(file_path_parts);
        }
    }

    pub fn update_file_name(&mut self, file_path_parts: i32) {
        self.file_name = display_file_path(&self.job.file_path, file_path_parts);
    }

    pub fn id(&self) -> u32 {
        self.job.id
    }

    pub fn job(&self) -> &Job {
        &self.job
    }

    /// Creation counter, distinguishes this entry from a later one reusing its id.
    pub fn serial(&self) -> u64 {
        self.serial
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn text(&self, column: Column) -> Cow<'_, str> {
        match column {
            Column::Id => Cow::Owned(self.job.id.to_string()),
            Column::Filename => Cow::Borrowed(&self.file_name),
            Column::Client => Cow::Borrowed(&self.client_name),
            Column::Server => Cow::Borrowed(&self.server_name),
            Column::State => Cow::Borrowed(self.job.state.as_str()),
            Column::Real => Cow::Owned(self.job.real_msec.to_string()),
            Column::User => Cow::Owned(self.job.user_msec.to_string()),
            Column::Faults => Cow::Owned(self.job.page_faults.to_string()),
            Column::SizeIn => Cow::Owned(format_size(self.job.in_uncompressed)),
            Column::SizeOut => Cow::Owned(format_size(self.job.out_uncompressed)),
        }
    }

    /// All cells in column order.
    pub fn cells(&self) -> Vec<String> {
        Column::ALL.iter().map(|&column| self.text(column).into_owned()).collect()
    }

    /// Numeric columns compare raw values (sizes use the uncompressed byte
    /// count, not the rounded KiB text); all others compare display text.
    pub fn compare(&self, other: &JobEntry, column: Column) -> Ordering {
        let (a, b) = (&self.job, &other.job);
        match column {
            Column::Id => a.id.cmp(&b.id),
            Column::Real => a.real_msec.cmp(&b.real_msec),
            Column::User => a.user_msec.cmp(&b.user_msec),
            Column::Faults => a.page_faults.cmp(&b.page_faults),
            Column::SizeIn => a.in_uncompressed.cmp(&b.in_uncompressed),
            Column::SizeOut => a.out_uncompressed.cmp(&b.out_uncompressed),
            _ => compare_text(&self.text(column), &other.text(column)),
        }
    }
}

fn host_names(job: &Job, hosts: &dyn HostNameResolver) -> (String, String) {
    let client = hosts.name_for_host(job.client_host_id);
    let server = job
        .server_host_id
        .map(|id| hosts.name_for_host(id))
        .unwrap_or_default();
    (client, server)
}

/// Approximates locale ordering: caseless (Unicode lowercase) comparison with
/// the raw text as tiebreak, so the order stays total. Not a real collation.
pub fn compare_text(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
        .then_with(|| a.cmp(b))
}

/// Renders a byte count as whole KiB with two significant digits.
pub fn format_size(bytes: u64) -> String {
    format!("{} KiB", format_significant((bytes / 1024) as f64, 2))
}

/// `%.Ng`-style formatting: fixed notation for moderate exponents,
/// scientific otherwise, trailing zeros trimmed.
fn format_significant(value: f64, digits: usize) -> String {
    if value == 0.0 {
        return "0".to_string();
    }

    let scientific = format!("{:.*e}", digits - 1, value);
    let (mantissa, exponent) = scientific.split_once('e').unwrap_or((&scientific, "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= digits as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_fraction(mantissa), sign, exponent.abs())
    } else {
        let decimals = (digits as i32 - 1 - exponent).max(0) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_fraction(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}
