use std::io;

use recado::{Storage, TaskList, logging, repl};

fn main() -> io::Result<()> {
    let storage = Storage::new();

    // diagnostics are best effort; the session runs without them
    let _logger = match logging::init(&storage.log_dir()) {
        Ok(handle) => Some(handle),
        Err(err) => {
            eprintln!("logging disabled: {}", err);
            None
        }
    };

    // a broken data directory must not take the session down; the list
    // starts empty and stays authoritative in memory
    let mut list = storage.load().unwrap_or_else(|err| {
        eprintln!("failed to load saved tasks: {}", err);
        eprintln!("starting with an empty list");
        TaskList::new()
    });

    let stdin = io::stdin();
    if let Err(err) = repl::run(stdin.lock(), &mut list, &storage) {
        eprintln!("{}", err);
    }

    Ok(())
}
