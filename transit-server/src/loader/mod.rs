//! Station and connection file ingestion.
//!
//! Both files are line-oriented with `;`-separated fields:
//!
//! ```text
//! 1;Central
//! 2;Harbour
//! 1;2;7
//! ```
//!
//! The first two lines are station records (`id;name`), the last a
//! connection record (`from;to;weight`). Blank lines are ignored. A
//! malformed line does not abort the load; it is logged and reported back
//! in [`Loaded::skipped`].

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use tracing::{debug, warn};

use crate::domain::{Connection, Station, StationId, Weight};

/// Errors that abort a load.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The file could not be opened or read
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// A line that was not turned into a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number in the source.
    pub line_number: usize,
    pub content: String,
    pub reason: String,
}

/// Records parsed from one file, plus the lines that were rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Loaded<T> {
    pub records: Vec<T>,
    pub skipped: Vec<SkippedLine>,
}

impl<T> Default for Loaded<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            skipped: Vec::new(),
        }
    }
}

/// Read the station file at `path`.
pub fn read_stations(path: impl AsRef<Path>) -> Result<Loaded<Station>, LoadError> {
    read_file(path.as_ref(), parse_stations)
}

/// Read the connection file at `path`.
pub fn read_connections(path: impl AsRef<Path>) -> Result<Loaded<Connection>, LoadError> {
    read_file(path.as_ref(), parse_connections)
}

/// Parse `id;name` records.
pub fn parse_stations(reader: impl BufRead) -> io::Result<Loaded<Station>> {
    parse_lines(reader, "station", |fields| {
        let [id, name] = fields else {
            return Err(format!("expected 2 fields, found {}", fields.len()));
        };
        let id = parse_number::<u32>(id, "id")?;
        Station::new(StationId(id), name).map_err(|e| e.to_string())
    })
}

/// Parse `from;to;weight` records.
pub fn parse_connections(reader: impl BufRead) -> io::Result<Loaded<Connection>> {
    parse_lines(reader, "connection", |fields| {
        let [from, to, weight] = fields else {
            return Err(format!("expected 3 fields, found {}", fields.len()));
        };
        Ok(Connection::new(
            StationId(parse_number(from, "origin id")?),
            StationId(parse_number(to, "destination id")?),
            parse_number::<Weight>(weight, "weight")?,
        ))
    })
}

fn read_file<T>(
    path: &Path,
    parse: impl FnOnce(BufReader<File>) -> io::Result<Loaded<T>>,
) -> Result<Loaded<T>, LoadError> {
    let io_error = |source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(io_error)?;
    let loaded = parse(BufReader::new(file)).map_err(io_error)?;
    debug!(
        path = %path.display(),
        records = loaded.records.len(),
        skipped = loaded.skipped.len(),
        "Loaded records"
    );
    Ok(loaded)
}

fn parse_lines<T>(
    reader: impl BufRead,
    record: &'static str,
    parse: impl Fn(&[&str]) -> Result<T, String>,
) -> io::Result<Loaded<T>> {
    let mut loaded = Loaded::default();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split(';').map(str::trim).collect();
        match parse(&fields) {
            Ok(value) => loaded.records.push(value),
            Err(reason) => {
                let line_number = index + 1;
                warn!(line_number, content = %line, %reason, "Skipping malformed {record} line");
                loaded.skipped.push(SkippedLine {
                    line_number,
                    content: line,
                    reason,
                });
            }
        }
    }

    Ok(loaded)
}

fn parse_number<N: FromStr>(field: &str, what: &str) -> Result<N, String> {
    field
        .parse()
        .map_err(|_| format!("invalid {what}: '{field}'"))
}
