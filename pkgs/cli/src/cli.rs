use comfy_table::{Cell, ContentArrangement, Table};
use num_format::{Locale, ToFormattedString};
use std::time::Duration;

use crate::utils::human_duration;

pub mod simulate;

/// Logs to stderr at `info` level unless `RUST_LOG` says otherwise.
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();
}

/// Counters and timings of a simulation run.
#[derive(Debug, Default)]
pub struct Stats {
    pub inserted: u64,
    pub duplicates: u64,
    pub updated: u64,
    pub unknown_updates: u64,
    pub popped: u64,
    pub insert_duration: Duration,
    pub update_duration: Duration,
    pub drain_duration: Duration,
}

impl Stats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn print_summary(&self) {
        let fmt_count = |n: u64| n.to_formatted_string(&Locale::en);
        let fmt_rate = |n: u64, d: Duration| {
            if d.is_zero() {
                "-".to_string()
            } else {
                let per_op = d.div_f64(n.max(1) as f64);
                format!("{} ({}/op)", human_duration(d), human_duration(per_op))
            }
        };

        let mut table = Table::new();
        table
            .load_preset(comfy_table::presets::UTF8_HORIZONTAL_ONLY)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec!["Phase", "Applied", "Ignored", "Time"]);

        table.add_row(vec![
            Cell::new("insert"),
            Cell::new(fmt_count(self.inserted)),
            Cell::new(format!("{} duplicate", fmt_count(self.duplicates))),
            Cell::new(fmt_rate(self.inserted + self.duplicates, self.insert_duration)),
        ]);
        table.add_row(vec![
            Cell::new("update"),
            Cell::new(fmt_count(self.updated)),
            Cell::new(format!("{} unknown", fmt_count(self.unknown_updates))),
            Cell::new(fmt_rate(self.updated + self.unknown_updates, self.update_duration)),
        ]);
        table.add_row(vec![
            Cell::new("drain"),
            Cell::new(fmt_count(self.popped)),
            Cell::new("-"),
            Cell::new(fmt_rate(self.popped, self.drain_duration)),
        ]);

        println!("{table}");
    }
}
