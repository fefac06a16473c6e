pub mod codec;
pub mod commands;
pub mod display;
pub mod logging;
pub mod parser;
pub mod repl;
pub mod storage;
pub mod types;

pub use storage::Storage;
pub use types::{Command, Task, TaskError, TaskKind, TaskList};
