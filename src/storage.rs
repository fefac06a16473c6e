use crate::codec;
use crate::types::{TaskError, TaskList};
use log::{debug, warn};
use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

const DATA_DIR: &str = "data";
const DATA_FILE: &str = "tasks.txt";
const LOG_DIR: &str = "logs";

pub struct Storage {
    data_dir: PathBuf,
    data_file: PathBuf,
}

impl Storage {
    /// Storage rooted at the fixed `./data` directory next to the working
    /// directory.
    pub fn new() -> Self {
        Self::with_dir(DATA_DIR)
    }

    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        let data_dir = dir.into();
        let data_file = data_dir.join(DATA_FILE);
        Storage {
            data_dir,
            data_file,
        }
    }

    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    pub fn log_dir(&self) -> PathBuf {
        self.data_dir.join(LOG_DIR)
    }

    /// Reads the whole list back, creating the directory and file first if
    /// this is a fresh start. Unreadable lines are logged and skipped so one
    /// bad record never takes the rest of the file with it.
    pub fn load(&self) -> Result<TaskList, TaskError> {
        self.ensure_data_file()?;

        let file = File::open(&self.data_file)?;
        let reader = BufReader::new(file);
        let mut list = TaskList::new();

        for (line_number, line) in reader.lines().enumerate() {
            let line = line?;
            match codec::decode(&line) {
                Ok(task) => list.add(task),
                Err(_) => warn!(
                    "skipping corrupt record at {} line {}: {:?}",
                    self.data_file.display(),
                    line_number + 1,
                    line
                ),
            }
        }

        debug!(
            "loaded {} task(s) from {}",
            list.len(),
            self.data_file.display()
        );
        Ok(list)
    }

    /// Full overwrite: truncates and rewrites every record in list order.
    /// There is no atomic rename, so a crash mid-write can lose the file.
    pub fn save(&self, tasks: &TaskList) -> Result<(), TaskError> {
        fs::create_dir_all(&self.data_dir)?;

        let file = File::create(&self.data_file)?;
        let mut writer = BufWriter::new(file);
        for task in tasks.iter() {
            writeln!(writer, "{}", codec::encode(task))?;
        }
        writer.flush()?;

        debug!(
            "saved {} task(s) to {}",
            tasks.len(),
            self.data_file.display()
        );
        Ok(())
    }

    fn ensure_data_file(&self) -> Result<(), TaskError> {
        fs::create_dir_all(&self.data_dir)?;
        // Touch without truncating; repeat calls are no-ops.
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.data_file)?;
        Ok(())
    }
}

impl Default for Storage {
    fn default() -> Self {
        Self::new()
    }
}
