//! Generic time-stamped log reading
//!
//! Line grammar: `<float-seconds> <value tokens...>`. Lines starting with
//! `#` are comments, blank lines are skipped. Readers are lazy and finite;
//! restarting means opening the source again.

use std::fs::{self, File};
use std::io::{BufRead, BufReader, Lines};
use std::path::{Path, PathBuf};

use airtight_core::{AirtightError, AirtightResult, ContentId, LogTime};

/// A generic log entry: timestamp plus uninterpreted text
#[derive(Clone, Debug, PartialEq)]
pub struct LogRecord {
    pub time: LogTime,
    pub value: String,
}

impl LogRecord {
    /// Stable content-derived identifier of this record.
    pub fn content_id(&self) -> ContentId {
        ContentId::digest(self.time, &self.value)
    }
}

/// Lazy reader over one log file
///
/// The first malformed line (or I/O failure) is yielded as an error and
/// ends the sequence; nothing after it is read.
#[derive(Debug)]
pub struct LogFileReader {
    lines: Lines<BufReader<File>>,
    failed: bool,
}

/// Open a log file for reading.
pub fn read_log_file(path: &Path) -> AirtightResult<LogFileReader> {
    if !path.is_file() {
        return Err(AirtightError::MissingInputFile(path.to_path_buf()));
    }
    let file = File::open(path)?;
    Ok(LogFileReader {
        lines: BufReader::new(file).lines(),
        failed: false,
    })
}

fn parse_line(line: &str) -> Option<AirtightResult<LogRecord>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    let mut tokens = line.split_whitespace();
    let time_token = tokens.next()?;
    let time = match time_token.parse::<f64>() {
        Ok(secs) => LogTime::from_secs(secs),
        Err(_) => {
            return Some(Err(AirtightError::MalformedTimestamp(
                time_token.to_string(),
            )))
        }
    };
    let value = tokens.collect::<Vec<_>>().join(" ");

    Some(Ok(LogRecord { time, value }))
}

impl Iterator for LogFileReader {
    type Item = AirtightResult<LogRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => {
                    self.failed = true;
                    return Some(Err(e.into()));
                }
            };
            match parse_line(&line) {
                Some(Ok(record)) => return Some(Ok(record)),
                Some(Err(e)) => {
                    self.failed = true;
                    return Some(Err(e));
                }
                None => continue,
            }
        }
    }
}

/// Reader aggregating every matching log file in a folder
///
/// Files are visited in filesystem listing order; no chronological
/// ordering across files is implied.
#[derive(Debug)]
pub struct LogFolderReader {
    files: std::vec::IntoIter<PathBuf>,
    current: Option<LogFileReader>,
    failed: bool,
}

/// Open every file in `path` whose extension matches `extension`.
pub fn read_log_folder(path: &Path, extension: &str) -> AirtightResult<LogFolderReader> {
    if !path.is_dir() {
        return Err(AirtightError::MissingInputDirectory(path.to_path_buf()));
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(path)? {
        let file = entry?.path();
        if file.is_file() && file.extension().is_some_and(|e| e == extension) {
            files.push(file);
        }
    }

    Ok(LogFolderReader {
        files: files.into_iter(),
        current: None,
        failed: false,
    })
}

impl Iterator for LogFolderReader {
    type Item = AirtightResult<LogRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        loop {
            if let Some(reader) = self.current.as_mut() {
                match reader.next() {
                    Some(Ok(record)) => return Some(Ok(record)),
                    Some(Err(e)) => {
                        self.failed = true;
                        return Some(Err(e));
                    }
                    None => self.current = None,
                }
            }
            match self.files.next() {
                Some(path) => match read_log_file(&path) {
                    Ok(reader) => self.current = Some(reader),
                    Err(e) => {
                        self.failed = true;
                        return Some(Err(e));
                    }
                },
                None => return None,
            }
        }
    }
}
