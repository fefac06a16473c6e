use crate::types::{Command, Task, TaskError};

/// Loop-termination verb. The session loop checks for it before parsing, so
/// it never becomes a `Command`.
pub const EXIT_VERB: &str = "bye";

pub fn is_exit(line: &str) -> bool {
    line.split_whitespace().next() == Some(EXIT_VERB)
}

pub fn parse_command(line: &str, list_len: usize) -> Result<Command, TaskError> {
    let (verb, rest) = match line.split_once(' ') {
        Some((verb, rest)) => (verb, Some(rest)),
        None => (line, None),
    };

    match verb {
        "todo" | "deadline" | "event" => Ok(Command::Add(parse_task(verb, rest)?)),
        "list" => Ok(Command::List),
        "mark" => Ok(Command::Mark(parse_index(verb, rest, list_len)?)),
        "unmark" => Ok(Command::Unmark(parse_index(verb, rest, list_len)?)),
        "delete" => Ok(Command::Delete(parse_index(verb, rest, list_len)?)),
        other => Err(TaskError::UnknownCommand(other.to_string())),
    }
}

pub fn parse_task(verb: &str, args: Option<&str>) -> Result<Task, TaskError> {
    let args = args.unwrap_or("");
    match verb {
        "todo" => parse_todo(args),
        "deadline" => parse_deadline(args),
        "event" => parse_event(args),
        other => Err(TaskError::UnknownCommand(other.to_string())),
    }
}

fn parse_index(verb: &str, rest: Option<&str>, list_len: usize) -> Result<usize, TaskError> {
    let token = rest
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or_else(|| TaskError::MissingArgument(verb.to_string()))?;

    let display_index: i64 = token
        .parse()
        .map_err(|_| TaskError::NotInteger(token.to_string()))?;

    if display_index < 1 || display_index > list_len as i64 {
        return Err(TaskError::IndexOutOfRange(display_index));
    }

    Ok(display_index as usize - 1)
}

fn parse_todo(args: &str) -> Result<Task, TaskError> {
    let description = args.trim();
    if description.is_empty() {
        return Err(TaskError::EmptyDescription);
    }
    Ok(Task::todo(description))
}

fn parse_deadline(args: &str) -> Result<Task, TaskError> {
    let (description, by) = args
        .split_once("/by")
        .ok_or(TaskError::MissingMarker("/by"))?;

    let description = description.trim();
    let by = by.trim();
    if description.is_empty() {
        return Err(TaskError::EmptyDescription);
    }
    if by.is_empty() {
        return Err(TaskError::EmptyField("by"));
    }
    Ok(Task::deadline(description, by))
}

fn parse_event(args: &str) -> Result<Task, TaskError> {
    let (description, tail) = args
        .split_once("/from")
        .ok_or(TaskError::MissingMarker("/from"))?;
    // A "/to" sitting before "/from" never lands in the tail, so marker
    // order falls out of the two split_once calls.
    let (from, to) = tail
        .split_once("/to")
        .ok_or(TaskError::MissingMarker("/to"))?;

    let description = description.trim();
    let from = from.trim();
    let to = to.trim();
    if description.is_empty() {
        return Err(TaskError::EmptyDescription);
    }
    if from.is_empty() {
        return Err(TaskError::EmptyField("from"));
    }
    if to.is_empty() {
        return Err(TaskError::EmptyField("to"));
    }
    Ok(Task::event(description, from, to))
}
