//! Rendering of command results for the terminal.

use crate::commands::{CmdMessage, MessageLevel};
use crate::model::Employee;
use colored::Colorize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ID_WIDTH: usize = 8;
const NAME_WIDTH: usize = 20;
const POSITION_WIDTH: usize = 20;
const SALARY_WIDTH: usize = 12;
const RULE_WIDTH: usize = 80;

pub fn format_message(message: &CmdMessage) -> String {
    match message.level {
        MessageLevel::Info => message.content.dimmed().to_string(),
        MessageLevel::Success => message.content.green().to_string(),
        MessageLevel::Warning => message.content.yellow().to_string(),
        MessageLevel::Error => message.content.red().to_string(),
    }
}

pub fn render_table(employees: &[Employee]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{}{}{}{}{}\n",
        pad("ID", ID_WIDTH),
        pad("Name", NAME_WIDTH),
        pad("Position", POSITION_WIDTH),
        pad("Salary", SALARY_WIDTH),
        "Email"
    ));
    out.push_str(&"-".repeat(RULE_WIDTH));
    out.push('\n');
    for e in employees {
        out.push_str(&format!(
            "{}{}{}{}{}\n",
            pad(&e.id.to_string(), ID_WIDTH),
            pad(&e.name, NAME_WIDTH),
            pad(&e.position, POSITION_WIDTH),
            pad(&e.salary.to_string(), SALARY_WIDTH),
            e.email
        ));
    }
    out
}

pub fn render_details(employee: &Employee) -> String {
    format!(
        "ID: {}\nName: {}\nPosition: {}\nSalary: {}\nEmail: {}",
        employee.id, employee.name, employee.position, employee.salary, employee.email
    )
}

/// Pads (or truncates with an ellipsis) to `width` terminal columns,
/// leaving one column of breathing room between columns.
fn pad(text: &str, width: usize) -> String {
    let truncated = truncate_to_width(text, width.saturating_sub(1));
    let fill = width.saturating_sub(truncated.width());
    format!("{truncated}{}", " ".repeat(fill))
}

fn truncate_to_width(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max.saturating_sub(1) {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}
