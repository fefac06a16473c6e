use crate::types::{Task, TaskKind, TaskList};
use colored::*;
use terminal_size::{Width, terminal_size};
use textwrap::wrap;

const WRAP_COLUMN: usize = 80;
const MIN_DESCRIPTION_INDENT: usize = 3;
const DOT_STATUS_CHARACTER: char = '●';

/// Short kind label shown before each description.
pub fn type_tag(task: &Task) -> &'static str {
    match task.kind {
        TaskKind::Todo => "[T]",
        TaskKind::Deadline { .. } => "[D]",
        TaskKind::Event { .. } => "[E]",
    }
}

/// Date column rendered after the description, empty for todos.
pub fn date_suffix(task: &Task) -> String {
    match &task.kind {
        TaskKind::Todo => String::new(),
        TaskKind::Deadline { by } => format!("(by: {})", by),
        TaskKind::Event { from, to } => format!("(from: {} to: {})", from, to),
    }
}

fn format_status_char(done: bool) -> ColoredString {
    let dot = DOT_STATUS_CHARACTER.to_string();
    if done {
        dot.bright_green()
    } else {
        dot.bright_yellow()
    }
}

pub fn print_list(tasks: &TaskList) {
    if tasks.is_empty() {
        println!("{}", "no tasks yet".dimmed());
        return;
    }

    let number_width = tasks.len().to_string().len();
    for (index, task) in tasks.iter().enumerate() {
        print_task_line_with_number(index + 1, number_width, task);
    }
}

pub fn print_task_line_with_number(number: usize, number_width: usize, task: &Task) {
    print!("{:>width$}. ", number, width = number_width);
    print_task_line(task, number_width + 2);
}

pub fn print_task_line(task: &Task, indent_len: usize) {
    let status_char = format_status_char(task.done);
    let suffix = date_suffix(task);

    // preferred wrap column is 80 if the terminal is wide enough,
    // otherwise fall back to whatever the terminal gives us.
    let wrap_limit = WRAP_COLUMN.min(term_width());
    let indent_len = indent_len.max(MIN_DESCRIPTION_INDENT);
    // tag + dot + surrounding spaces take six columns
    let wrap_width = wrap_limit.saturating_sub(indent_len + 6).max(1);

    let lines = wrap(&task.description, wrap_width);
    let first = lines.first().map(|line| line.as_ref()).unwrap_or("");

    if suffix.is_empty() {
        println!(
            "{} {} {}",
            type_tag(task).bright_black(),
            status_char,
            first.bright_white()
        );
    } else {
        println!(
            "{} {} {} {}",
            type_tag(task).bright_black(),
            status_char,
            first.bright_white(),
            suffix.dimmed()
        );
    }

    let indent = " ".repeat(indent_len + 6);
    for line in lines.iter().skip(1) {
        println!("{}{}", indent, line.bright_white());
    }
}

fn term_width() -> usize {
    terminal_size()
        .map(|(Width(w), _)| w as usize)
        .unwrap_or(WRAP_COLUMN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_tags_follow_the_kind() {
        assert_eq!(type_tag(&Task::todo("x")), "[T]");
        assert_eq!(type_tag(&Task::deadline("x", "Friday")), "[D]");
        assert_eq!(type_tag(&Task::event("x", "Mon", "Tue")), "[E]");
    }

    #[test]
    fn date_suffix_shows_the_extra_fields() {
        assert_eq!(date_suffix(&Task::todo("x")), "");
        assert_eq!(date_suffix(&Task::deadline("x", "Friday")), "(by: Friday)");
        assert_eq!(
            date_suffix(&Task::event("x", "Monday", "Tuesday")),
            "(from: Monday to: Tuesday)"
        );
    }
}
