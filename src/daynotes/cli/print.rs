use colored::Colorize;
use daynotes::api::{CmdMessage, MessageLevel};
use daynotes::commands::{DayCell, MonthSheet};
use daynotes::model::MonthGroup;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// "31/12/2025 Wednesday" is the widest date cell.
const DATE_WIDTH: usize = 20;
const NOTE_WIDTH: usize = 30;
const COLUMN_GAP: &str = "  │  ";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

/// The month as two side-by-side date/note columns.
pub(super) fn render_sheet(sheet: &MonthSheet) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n\n", sheet.label.bold()));

    let header_half = format!(
        "{}{}",
        pad_to_width("Date", DATE_WIDTH + 2),
        pad_to_width("Notes", NOTE_WIDTH)
    );
    out.push_str(&format!(
        "{}{}{}\n",
        header_half.underline(),
        COLUMN_GAP,
        header_half.underline()
    ));

    for row in &sheet.rows {
        out.push_str(&render_cell(row.left.as_ref()));
        out.push_str(COLUMN_GAP);
        out.push_str(render_cell(row.right.as_ref()).trim_end());
        out.push('\n');
    }
    out
}

fn render_cell(cell: Option<&DayCell>) -> String {
    let Some(cell) = cell else {
        return " ".repeat(DATE_WIDTH + 2 + NOTE_WIDTH);
    };

    let date = pad_to_width(&format!("{} {}", cell.key, cell.weekday), DATE_WIDTH + 2);
    let date = if cell.is_sunday() {
        date.red().to_string()
    } else {
        date
    };

    let note = pad_to_width(&truncate_to_width(&single_line(&cell.note), NOTE_WIDTH), NOTE_WIDTH);
    format!("{}{}", date, note)
}

/// Saved notes, one block per month.
pub(super) fn render_month_groups(groups: &[MonthGroup]) -> String {
    let mut out = String::new();
    for (i, group) in groups.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&format!("{}\n", group.label.bold()));
        for entry in &group.entries {
            let heading = format!("{} ({}):", entry.key, entry.weekday);
            let heading = if entry.is_sunday() {
                heading.red().bold().to_string()
            } else {
                heading.bold().to_string()
            };
            out.push_str(&format!("  • {} {}\n", heading, single_line(&entry.text)));
        }
    }
    out
}

fn single_line(text: &str) -> String {
    text.trim()
        .chars()
        .map(|c| if c == '\n' { ' ' } else { c })
        .collect()
}

fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}
