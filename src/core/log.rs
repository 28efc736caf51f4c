use crate::db::log::{LogEntry, read_log};
use crate::errors::AppResult;
use crate::ui::messages::info;
use ansi_term::Colour;
use std::path::Path;
use unicode_width::UnicodeWidthStr;

const MAX_TARGET_WIDTH: usize = 40;

fn color_for_operation(op: &str) -> Colour {
    match op {
        "login" => Colour::Green,
        "logout" => Colour::Red,
        "remark" => Colour::Yellow,
        "export" => Colour::Blue,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.width() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max.saturating_sub(3)).collect();
    out.push_str("...");
    out
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(log_path: &Path) -> AppResult<()> {
        let entries = read_log(log_path)?;

        if entries.is_empty() {
            info(format!("Internal log is empty ({})", log_path.display()));
            return Ok(());
        }

        println!("📜 Internal log:\n");
        for line in Self::format_entries(&entries) {
            println!("{}", line);
        }

        Ok(())
    }

    /// One line per entry: `n: date | op (target) => message`, with the
    /// operation name colored and the `op (target)` column padded.
    pub fn format_entries(entries: &[LogEntry]) -> Vec<String> {
        let labels: Vec<String> = entries
            .iter()
            .map(|e| {
                if e.target.is_empty() {
                    e.operation.clone()
                } else {
                    format!("{} ({})", e.operation, truncate(&e.target, MAX_TARGET_WIDTH))
                }
            })
            .collect();

        let label_w = labels.iter().map(|l| l.width()).max().unwrap_or(0);
        let id_w = entries.len().to_string().len();
        let date_w = entries.iter().map(|e| e.date.width()).max().unwrap_or(0);

        entries
            .iter()
            .zip(labels)
            .enumerate()
            .map(|(i, (entry, label))| {
                let padding = " ".repeat(label_w.saturating_sub(label.width()));
                let colored = match label.split_once(' ') {
                    Some((op, rest)) => {
                        format!("{} {}", color_for_operation(&entry.operation).paint(op), rest)
                    }
                    None => color_for_operation(&entry.operation)
                        .paint(label.as_str())
                        .to_string(),
                };

                format!(
                    "{:>id_w$}: {:<date_w$} | {}{} => {}",
                    i + 1,
                    entry.date,
                    colored,
                    padding,
                    entry.message,
                    id_w = id_w,
                    date_w = date_w
                )
            })
            .collect()
    }
}
