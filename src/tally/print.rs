use colored::Colorize;
use tally::api::{CmdMessage, MessageLevel, StockLine};
use tally::model::LogEntry;
use unicode_width::UnicodeWidthStr;

const NAME_WIDTH: usize = 10;
const REPORT_RULE: &str = "--------------------";
const RUN_LOG_RULE: &str = "----------------";

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

/// Warnings and errors only. Used for implicit snapshot loads so that read
/// commands keep their stdout payload clean.
pub fn print_problems(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
            MessageLevel::Info | MessageLevel::Success => {}
        }
    }
}

pub fn print_report(stock: &[StockLine]) {
    println!("\n--- Items Report ---");
    if stock.is_empty() {
        println!("Inventory is empty.");
    }
    for line in stock {
        let padding = NAME_WIDTH.saturating_sub(line.name.width());
        println!("{}{} -> {}", line.name, " ".repeat(padding), line.qty);
    }
    println!("{}", REPORT_RULE);
}

pub fn print_run_log(entries: &[LogEntry]) {
    println!("\n--- Run Logs ---");
    for entry in entries {
        println!("{}", entry);
    }
    println!("{}", RUN_LOG_RULE);
}
