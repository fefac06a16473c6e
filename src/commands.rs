use crate::display::{date_suffix, print_list, print_task_line, type_tag};
use crate::storage::Storage;
use crate::types::{Command, Task, TaskError, TaskList};
use colored::*;
use log::error;

pub fn execute_command(
    list: &mut TaskList,
    storage: &Storage,
    command: Command,
) -> Result<(), TaskError> {
    match command {
        Command::Add(task) => handle_add(list, storage, task),
        Command::List => handle_list(list),
        Command::Mark(index) => handle_set_done(list, storage, index, true),
        Command::Unmark(index) => handle_set_done(list, storage, index, false),
        Command::Delete(index) => handle_delete(list, storage, index),
    }
}

fn handle_add(list: &mut TaskList, storage: &Storage, task: Task) -> Result<(), TaskError> {
    list.add(task);
    println!("{}", "task added".bright_green());
    if let Some(task) = list.iter().last() {
        print_task_line(task, 0);
    }
    println!("{}", format!("{} task(s) in the list", list.len()).dimmed());
    save_after_change(list, storage);
    Ok(())
}

fn handle_list(list: &TaskList) -> Result<(), TaskError> {
    print_list(list);
    Ok(())
}

fn handle_set_done(
    list: &mut TaskList,
    storage: &Storage,
    index: usize,
    done: bool,
) -> Result<(), TaskError> {
    let task = list
        .get_mut(index)
        .ok_or(TaskError::IndexOutOfRange(index as i64 + 1))?;
    task.set_done(done);
    let message = if done {
        "marked as done".bright_green()
    } else {
        "marked as not done".bright_yellow()
    };
    println!("{}", message);
    if let Some(task) = list.get(index) {
        print_task_line(task, 0);
    }
    save_after_change(list, storage);
    Ok(())
}

fn handle_delete(list: &mut TaskList, storage: &Storage, index: usize) -> Result<(), TaskError> {
    let removed = list
        .remove(index)
        .ok_or(TaskError::IndexOutOfRange(index as i64 + 1))?;
    println!("{}", "task deleted".bright_green());
    let suffix = date_suffix(&removed);
    if suffix.is_empty() {
        println!(
            "{} {}",
            type_tag(&removed).bright_black(),
            removed.description
        );
    } else {
        println!(
            "{} {} {}",
            type_tag(&removed).bright_black(),
            removed.description,
            suffix.dimmed()
        );
    }
    println!("{}", format!("{} task(s) in the list", list.len()).dimmed());
    save_after_change(list, storage);
    Ok(())
}

/// A failed save is reported but never ends the session; the in-memory list
/// stays authoritative until the next successful save.
fn save_after_change(list: &TaskList, storage: &Storage) {
    if let Err(err) = storage.save(list) {
        error!("save failed: {}", err);
        eprintln!("{} {}", "warning:".bright_red(), err);
        eprintln!("{}", "changes are kept in memory for this session".dimmed());
    }
}
