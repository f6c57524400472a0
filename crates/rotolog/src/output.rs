//! Console output formatting

use colored::Colorize;
use rotolog_logs::LevelStats;
use std::sync::atomic::{AtomicBool, Ordering};
use tabled::{settings::Style, Table, Tabled};

/// Global flag for JSON output mode
static JSON_MODE: AtomicBool = AtomicBool::new(false);

/// Enable or disable JSON output mode
pub fn set_json_mode(enabled: bool) {
    JSON_MODE.store(enabled, Ordering::SeqCst);
}

/// Check if JSON output mode is enabled
pub fn is_json_mode() -> bool {
    JSON_MODE.load(Ordering::SeqCst)
}

#[derive(Tabled)]
pub struct StatsRow {
    #[tabled(rename = "level")]
    pub level: String,
    #[tabled(rename = "exists")]
    pub exists: String,
    #[tabled(rename = "size")]
    pub size: String,
    #[tabled(rename = "modified")]
    pub modified: String,
}

impl From<&LevelStats> for StatsRow {
    fn from(stats: &LevelStats) -> Self {
        StatsRow {
            level: stats.level.to_string(),
            exists: if stats.exists {
                "yes".green().to_string()
            } else {
                "no".dimmed().to_string()
            },
            size: stats
                .size
                .map(format_bytes)
                .unwrap_or_else(|| "-".to_string()),
            modified: stats
                .modified
                .map(|m| {
                    m.with_timezone(&chrono::Local)
                        .format("%Y-%m-%d %H:%M:%S")
                        .to_string()
                })
                .unwrap_or_else(|| "-".to_string()),
        }
    }
}

pub fn print_stats(stats: &[LevelStats]) {
    if is_json_mode() {
        match serde_json::to_string_pretty(stats) {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("Error serializing to JSON: {}", e),
        }
        return;
    }

    let rows: Vec<StatsRow> = stats.iter().map(StatsRow::from).collect();
    let table = Table::new(rows).with(Style::rounded()).to_string();
    println!("{}", table);
}

pub fn print_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red(), message);
}

pub fn format_bytes(bytes: u64) -> String {
    if bytes >= 1_073_741_824 {
        format!("{:.1}G", bytes as f64 / 1_073_741_824.0)
    } else if bytes >= 1_048_576 {
        format!("{:.1}M", bytes as f64 / 1_048_576.0)
    } else if bytes >= 1024 {
        format!("{:.0}K", bytes as f64 / 1024.0)
    } else if bytes > 0 {
        format!("{}B", bytes)
    } else {
        "0B".to_string()
    }
}
