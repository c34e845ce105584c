//! Tasks file storage
//!
//! Tasks live in a CSV file with the header
//! `command,owner,days,time_start,time_end,reload_time`. Rows are only ever
//! appended; the runner never rewrites the file.

use std::fs::{self, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::Path;

use crate::core::task::{Task, TaskRecord};
use crate::error::StoreError;
use crate::infra::filesystem::{ensure_parent_dir, expand_home};

/// Load every task from the tasks file
pub fn load_tasks(path: &Path) -> Result<Vec<Task>, StoreError> {
    let path = expand_home(path);
    let file = fs::File::open(&path).map_err(|e| StoreError::Io {
        path: path.clone(),
        error: e.to_string(),
    })?;

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(file);

    let mut tasks = Vec::new();
    for (index, row) in reader.deserialize::<TaskRecord>().enumerate() {
        let record = row.map_err(|e| StoreError::Csv {
            path: path.clone(),
            error: e.to_string(),
        })?;
        let task = Task::from_record(&record).map_err(|source| StoreError::InvalidTask {
            path: path.clone(),
            row: index + 1,
            source,
        })?;
        tasks.push(task);
    }

    tracing::debug!(path = %path.display(), count = tasks.len(), "Loaded tasks");
    Ok(tasks)
}

/// Append one task, creating the file with a header if needed
pub fn append_task(path: &Path, task: &Task) -> Result<(), StoreError> {
    let path = expand_home(path);
    let io_error = |e: std::io::Error| StoreError::Io {
        path: path.clone(),
        error: e.to_string(),
    };

    ensure_parent_dir(&path).map_err(io_error)?;

    let mut file = OpenOptions::new()
        .read(true)
        .append(true)
        .create(true)
        .open(&path)
        .map_err(io_error)?;

    let len = file.metadata().map_err(io_error)?.len();
    if len > 0 && !ends_with_newline(&mut file).map_err(io_error)? {
        file.write_all(b"\n").map_err(io_error)?;
    }

    let mut writer = csv::WriterBuilder::new()
        .has_headers(len == 0)
        .from_writer(file);
    writer
        .serialize(task.to_record())
        .map_err(|e| StoreError::Csv {
            path: path.clone(),
            error: e.to_string(),
        })?;
    writer.flush().map_err(io_error)?;

    tracing::info!(path = %path.display(), command = %task.command, "Appended task");
    Ok(())
}

fn ends_with_newline(file: &mut fs::File) -> std::io::Result<bool> {
    let mut last = [0u8; 1];
    file.seek(SeekFrom::End(-1))?;
    file.read_exact(&mut last)?;
    Ok(last[0] == b'\n')
}
