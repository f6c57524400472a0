//! Console rendering for tailed lines

use chrono::Local;
use colored::{Color, Colorize};

use rotolog_core::Level;

use crate::TailLine;

/// Console color for a level's rendered line
fn level_color(level: Level) -> Color {
    match level {
        Level::Error => Color::Red,
        Level::Warn => Color::Yellow,
        Level::Info => Color::Cyan,
        Level::Debug => Color::Magenta,
    }
}

/// Format one tailed line for the console.
///
/// Parsed records render as `[local-time] [LEVEL] message - data`, colored
/// by level; unparseable lines render verbatim behind a `[RAW]` marker.
pub fn render(line: &TailLine) -> String {
    match line {
        TailLine::Parsed(record) => {
            let tag = format!(
                "[{}] [{}]",
                record.timestamp.with_timezone(&Local).format("%H:%M:%S"),
                record.level.upper()
            );
            let data = record
                .data
                .as_ref()
                .map(|d| format!(" - {}", d))
                .unwrap_or_default();
            format!(
                "{} {}{}",
                tag.color(level_color(record.level)),
                record.message,
                data
            )
        }
        TailLine::Raw(text) => format!("[RAW] {}", text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rotolog_core::LogRecord;
    use serde_json::json;

    #[test]
    fn test_render_parsed_record() {
        colored::control::set_override(false);
        let record = LogRecord::new(Level::Info, "server started", None);
        let rendered = render(&TailLine::Parsed(record));
        assert!(rendered.contains("[INFO]"));
        assert!(rendered.contains("server started"));
        assert!(!rendered.contains(" - "));
    }

    #[test]
    fn test_render_parsed_record_with_data() {
        colored::control::set_override(false);
        let record = LogRecord::new(Level::Error, "request failed", Some(json!({ "code": 500 })));
        let rendered = render(&TailLine::Parsed(record));
        assert!(rendered.contains("[ERROR]"));
        assert!(rendered.contains("request failed - "));
        assert!(rendered.contains("500"));
    }

    #[test]
    fn test_render_raw_line() {
        let rendered = render(&TailLine::Raw("half a reco".to_string()));
        assert_eq!(rendered, "[RAW] half a reco");
    }
}
