//! Size-capped rotating file sink.
//!
//! # Responsibilities
//! - Append log lines to a live file until it would exceed `max_bytes`
//! - On rotation, shift `name.1`..`name.N` backups and reopen a fresh file
//! - Drop the oldest backup once `backup_count` is reached
//!
//! # Design Decisions
//! - Rotation happens before the write that would cross the cap, so a
//!   single record is never split across files
//! - A record larger than the cap is still written whole; the cap
//!   bounds when rotation happens, not the size of one record
//! - The type is plain `io::Write`; the subscriber wraps it in a
//!   `Mutex` to satisfy `MakeWriter`

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;

/// An append-only file that rotates itself once it reaches a size cap.
#[derive(Debug)]
pub struct RollingFile {
    path: PathBuf,
    max_bytes: u64,
    backup_count: usize,
    file: File,
    written: u64,
}

impl RollingFile {
    /// Open (or create) the live file at `path`, creating parent
    /// directories as needed. Appends to an existing file and counts
    /// its current size toward the cap.
    pub fn open(
        path: impl Into<PathBuf>,
        max_bytes: u64,
        backup_count: usize,
    ) -> io::Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        let written = file.metadata()?.len();
        Ok(Self {
            path,
            max_bytes,
            backup_count,
            file,
            written,
        })
    }

    /// Path of the numbered backup `name.index`.
    fn backup_path(&self, index: usize) -> PathBuf {
        let mut name = self.path.clone().into_os_string();
        name.push(format!(".{index}"));
        PathBuf::from(name)
    }

    /// Shift backups up by one, move the live file to `name.1`, and
    /// reopen a fresh live file.
    fn rotate(&mut self) -> io::Result<()> {
        self.file.flush()?;

        // The oldest backup falls off the end.
        let _ = fs::remove_file(self.backup_path(self.backup_count));
        for index in (1..self.backup_count).rev() {
            let from = self.backup_path(index);
            if from.exists() {
                fs::rename(&from, self.backup_path(index + 1))?;
            }
        }
        fs::rename(&self.path, self.backup_path(1))?;

        self.file = File::create(&self.path)?;
        self.written = 0;
        Ok(())
    }
}

impl Write for RollingFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let incoming = buf.len() as u64;
        if self.written > 0 && self.written + incoming > self.max_bytes {
            self.rotate()?;
        }
        let n = self.file.write(buf)?;
        self.written += n as u64;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("timer-stream-rolling-{}", uuid::Uuid::new_v4()))
            .join(name)
    }

    #[test]
    fn appends_below_cap_without_rotating() {
        let path = scratch_path("app.log");
        let mut sink = RollingFile::open(&path, 1024, 3).unwrap();
        sink.write_all(b"first line\n").unwrap();
        sink.write_all(b"second line\n").unwrap();
        sink.flush().unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "first line\nsecond line\n"
        );
        assert!(!path.with_extension("log.1").exists());
    }

    #[test]
    fn rotates_when_write_would_cross_cap() {
        let path = scratch_path("app.log");
        let mut sink = RollingFile::open(&path, 16, 3).unwrap();
        sink.write_all(b"0123456789\n").unwrap();
        sink.write_all(b"abcdefghij\n").unwrap();
        sink.flush().unwrap();

        let backup = PathBuf::from(format!("{}.1", path.display()));
        assert_eq!(fs::read_to_string(&backup).unwrap(), "0123456789\n");
        assert_eq!(fs::read_to_string(&path).unwrap(), "abcdefghij\n");
    }

    #[test]
    fn keeps_at_most_backup_count_backups() {
        let path = scratch_path("app.log");
        let mut sink = RollingFile::open(&path, 4, 2).unwrap();
        for chunk in [b"aaaa", b"bbbb", b"cccc", b"dddd", b"eeee"] {
            sink.write_all(chunk).unwrap();
        }
        sink.flush().unwrap();

        let backup = |i: usize| PathBuf::from(format!("{}.{i}", path.display()));
        assert_eq!(fs::read_to_string(&path).unwrap(), "eeee");
        assert_eq!(fs::read_to_string(backup(1)).unwrap(), "dddd");
        assert_eq!(fs::read_to_string(backup(2)).unwrap(), "cccc");
        assert!(!backup(3).exists());
    }

    #[test]
    fn oversized_record_is_written_whole() {
        let path = scratch_path("app.log");
        let mut sink = RollingFile::open(&path, 8, 3).unwrap();
        sink.write_all(b"this record is far beyond the cap\n").unwrap();
        sink.flush().unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "this record is far beyond the cap\n"
        );
    }
}
