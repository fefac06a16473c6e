use colored::*;
use std::{fmt, io};

#[derive(Debug)]
pub enum TaskError {
    UnknownCommand(String),
    MissingArgument(String),
    NotInteger(String),
    IndexOutOfRange(i64),
    EmptyDescription,
    EmptyField(&'static str),
    MissingMarker(&'static str),
    CorruptRecord(String),
    Io(io::Error),
}

impl From<io::Error> for TaskError {
    fn from(err: io::Error) -> Self {
        TaskError::Io(err)
    }
}

impl fmt::Display for TaskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskError::UnknownCommand(verb) => write!(
                f,
                "{} '{}' (known: todo, deadline, event, list, mark, unmark, delete, bye)",
                "Unknown command:".bright_yellow(),
                verb
            ),
            TaskError::MissingArgument(verb) => write!(
                f,
                "{} '{}' needs a task number",
                "Missing argument:".bright_yellow(),
                verb
            ),
            TaskError::NotInteger(token) => write!(
                f,
                "{} '{}' is not a whole number",
                "Invalid index:".bright_yellow(),
                token
            ),
            TaskError::IndexOutOfRange(index) => write!(
                f,
                "{} no task at position {}",
                "Invalid index:".bright_yellow(),
                index
            ),
            TaskError::EmptyDescription => {
                write!(f, "{} the description is empty", "Invalid task:".bright_yellow())
            }
            TaskError::EmptyField(field) => write!(
                f,
                "{} '{}' has no value",
                "Invalid task:".bright_yellow(),
                field
            ),
            TaskError::MissingMarker(marker) => write!(
                f,
                "{} expected '{}' in the input",
                "Invalid task:".bright_yellow(),
                marker
            ),
            TaskError::CorruptRecord(line) => {
                write!(f, "{} {}", "Corrupt record:".bright_red(), line)
            }
            TaskError::Io(err) => write!(f, "{} {}", "IO error:".bright_red(), err),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskKind {
    Todo,
    Deadline { by: String },
    Event { from: String, to: String },
}

impl TaskKind {
    /// Record tag written by the storage codec.
    pub fn tag(&self) -> &'static str {
        match self {
            TaskKind::Todo => "todo",
            TaskKind::Deadline { .. } => "deadline",
            TaskKind::Event { .. } => "event",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub description: String,
    pub done: bool,
    pub kind: TaskKind,
}

impl Task {
    pub fn todo(description: impl Into<String>) -> Self {
        Task {
            description: description.into(),
            done: false,
            kind: TaskKind::Todo,
        }
    }

    pub fn deadline(description: impl Into<String>, by: impl Into<String>) -> Self {
        Task {
            description: description.into(),
            done: false,
            kind: TaskKind::Deadline { by: by.into() },
        }
    }

    pub fn event(
        description: impl Into<String>,
        from: impl Into<String>,
        to: impl Into<String>,
    ) -> Self {
        Task {
            description: description.into(),
            done: false,
            kind: TaskKind::Event {
                from: from.into(),
                to: to.into(),
            },
        }
    }

    pub fn set_done(&mut self, done: bool) {
        self.done = done;
    }
}

#[derive(Debug, Default)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        TaskList { tasks: Vec::new() }
    }

    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        TaskList { tasks }
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn add(&mut self, task: Task) {
        self.tasks.push(task);
    }

    pub fn get(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Task> {
        self.tasks.get_mut(index)
    }

    pub fn remove(&mut self, index: usize) -> Option<Task> {
        (index < self.tasks.len()).then(|| self.tasks.remove(index))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.tasks.iter()
    }
}

/// A fully validated command. Indices are 0-based; the translation from the
/// 1-based display form happens at the parser boundary and nowhere deeper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(Task),
    List,
    Mark(usize),
    Unmark(usize),
    Delete(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_keeps_insertion_order() {
        let mut list = TaskList::new();
        list.add(Task::todo("first"));
        list.add(Task::todo("second"));
        assert_eq!(list.len(), 2);
        assert_eq!(list.get(0).unwrap().description, "first");
        assert_eq!(list.get(1).unwrap().description, "second");
    }

    #[test]
    fn remove_shifts_later_tasks_down() {
        let mut list = TaskList::from_tasks(vec![
            Task::todo("a"),
            Task::todo("b"),
            Task::todo("c"),
        ]);
        let removed = list.remove(1).unwrap();
        assert_eq!(removed.description, "b");
        assert_eq!(list.len(), 2);
        assert_eq!(list.get(1).unwrap().description, "c");
    }

    #[test]
    fn remove_out_of_bounds_returns_none_and_keeps_list() {
        let mut list = TaskList::from_tasks(vec![Task::todo("only")]);
        assert!(list.remove(1).is_none());
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn set_done_flips_only_the_flag() {
        let mut task = Task::deadline("report", "Friday");
        task.set_done(true);
        assert!(task.done);
        assert_eq!(task.description, "report");
        assert_eq!(task.kind, TaskKind::Deadline { by: "Friday".into() });
        task.set_done(false);
        assert!(!task.done);
    }

    #[test]
    fn kind_tags_are_stable() {
        assert_eq!(Task::todo("x").kind.tag(), "todo");
        assert_eq!(Task::deadline("x", "y").kind.tag(), "deadline");
        assert_eq!(Task::event("x", "y", "z").kind.tag(), "event");
    }
}
