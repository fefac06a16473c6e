use crate::commands::execute_command;
use crate::parser::{is_exit, parse_command};
use crate::storage::Storage;
use crate::types::TaskList;
use colored::*;
use log::debug;
use std::io::{self, BufRead};

const VERB_INVENTORY: &str =
    "commands: todo, deadline, event, list, mark, unmark, delete, bye";

/// Runs the read–parse–execute loop until `bye` or end of input. Rejected
/// lines are reported and the loop continues; nothing short of an unreadable
/// input stream ends the session early.
pub fn run(input: impl BufRead, list: &mut TaskList, storage: &Storage) -> io::Result<()> {
    greet(list);

    for line in input.lines() {
        let line = line?;
        let line = line.trim();

        if is_exit(line) {
            println!("{}", "bye. your tasks are saved.".bright_green());
            return Ok(());
        }

        match parse_command(line, list.len()) {
            Ok(command) => {
                debug!("executing {:?}", command);
                if let Err(err) = execute_command(list, storage, command) {
                    println!("{}", err);
                }
            }
            Err(err) => println!("{}", err),
        }
    }

    // end of input without an explicit bye
    Ok(())
}

fn greet(list: &TaskList) {
    println!("{}", "recado".bright_white().bold());
    println!("{}", VERB_INVENTORY.dimmed());
    if list.is_empty() {
        println!("{}", "no saved tasks yet".dimmed());
    } else {
        println!("{}", format!("{} task(s) loaded", list.len()).dimmed());
    }
}
