use crate::errors::{AppError, Severity};
use ansi_term::{Colour, Style};
use std::fmt;

const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

fn tag(colour: Colour, icon: &str) -> String {
    Style::new().fg(colour).bold().paint(icon).to_string()
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{} {}", tag(Colour::Blue, ICON_INFO), msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{} {}", tag(Colour::Green, ICON_OK), msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{} {}", tag(Colour::Yellow, ICON_WARN), msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{} {}", tag(Colour::Red, ICON_ERR), msg);
}

pub fn header<T: fmt::Display>(msg: T) {
    println!(
        "{}\n",
        Style::new()
            .fg(Colour::Blue)
            .bold()
            .paint(format!("====================== {}", msg))
    );
}

/// Render an operation outcome the way its severity asks for.
pub fn report(err: &AppError) {
    match err.severity() {
        Severity::Silent => info(format!("{}, nothing to do.", err)),
        Severity::Info => info(err),
        Severity::Warning => warning(err),
        Severity::Fatal => error(format!("Error: {}", err)),
    }
}
