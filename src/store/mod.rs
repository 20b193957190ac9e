//! The Record Store: file-backed read/save/delete over one collection of
//! typed records.
//!
//! Each store owns one delimited-text file whose header row names the
//! columns. Reading parses every row into a [`RawRecord`], applies the
//! store's [`CoercionTable`], and builds the typed record through the
//! [`Record`] trait; saving is the reverse, always as a full-file rewrite.
//! Rewrites go through a sibling temp file and an atomic rename so a crash
//! mid-save never leaves a half-written file behind. There is no guard
//! against concurrent writers; last writer wins.

/// Raw rows, cell values, and per-column coercion.
pub mod raw;

pub use raw::{ColumnType, CoercionTable, RawRecord, Value};

use crate::config::AppConfig;
use crate::entities::{Employee, Sale, WorkSession};
use crate::errors::{Error, Result};
use std::io::Write;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use tracing::debug;

/// A typed record that can cross the file boundary.
///
/// Implementations are the factory resolved at the store's construction
/// site: `from_raw` builds the record from a coerced row, `to_raw` flattens
/// it back into column/value pairs in file order.
pub trait Record: Sized {
    /// Builds the record from one coerced row.
    ///
    /// # Errors
    /// Returns [`Error::Format`] for a missing column and
    /// [`Error::TypeCoercion`] for a value of the wrong shape.
    fn from_raw(raw: &RawRecord) -> Result<Self>;

    /// Flattens the record into column/value pairs in file order.
    fn to_raw(&self) -> RawRecord;
}

/// Reader/writer for one record file.
#[derive(Debug, Clone)]
pub struct RecordStore<T: Record> {
    path: PathBuf,
    coercions: CoercionTable,
    _record: PhantomData<fn() -> T>,
}

impl<T: Record> RecordStore<T> {
    /// Binds a store to a file path with the given coercion table.
    pub fn new(path: impl Into<PathBuf>, coercions: CoercionTable) -> Self {
        Self {
            path: path.into(),
            coercions,
            _record: PhantomData,
        }
    }

    /// The backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the whole collection into memory.
    ///
    /// # Errors
    /// [`Error::NotFound`] when the file does not exist, [`Error::Format`]
    /// for a missing header or a row whose column count differs from the
    /// header's, [`Error::TypeCoercion`] when a declared coercion fails. A
    /// malformed row aborts the entire read.
    pub fn read(&self) -> Result<Vec<T>> {
        let rows = self.read_raw()?;
        rows.iter()
            .map(|row| T::from_raw(row).map_err(|e| self.attach_path(e)))
            .collect()
    }

    /// Like [`read`](Self::read), but a missing file is an empty collection.
    ///
    /// # Errors
    /// Same as [`read`](Self::read), minus [`Error::NotFound`].
    pub fn read_or_default(&self) -> Result<Vec<T>> {
        match self.read() {
            Err(Error::NotFound { .. }) => Ok(Vec::new()),
            other => other,
        }
    }

    /// Reads the whole collection as raw column→value rows.
    ///
    /// # Errors
    /// Same structural and coercion errors as [`read`](Self::read).
    pub fn read_raw(&self) -> Result<Vec<RawRecord>> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(Error::NotFound {
                    path: self.path.clone(),
                });
            }
            Err(e) => return Err(e.into()),
        };

        if contents.is_empty() {
            return Err(self.format_error("missing header row"));
        }
        // A lone line terminator is a zero-column header: no records.
        if contents.trim().is_empty() {
            return Ok(Vec::new());
        }

        let mut reader = csv::Reader::from_reader(contents.as_bytes());
        let header: Vec<String> = reader
            .headers()
            .map_err(|e| self.csv_error(e))?
            .iter()
            .map(ToString::to_string)
            .collect();

        let mut rows = Vec::new();
        for result in reader.records() {
            let row = result.map_err(|e| self.csv_error(e))?;
            let mut raw = RawRecord::new();
            for (column, cell) in header.iter().zip(row.iter()) {
                let value = match self.coercions.type_of(column) {
                    Some(ty) => ty.coerce(column, cell)?,
                    None => Value::Text(cell.to_string()),
                };
                raw.push(column.clone(), value);
            }
            rows.push(raw);
        }
        debug!(path = %self.path.display(), rows = rows.len(), "read record file");
        Ok(rows)
    }

    /// Rewrites the whole file from the given records.
    ///
    /// # Errors
    /// [`Error::Io`] on filesystem failure.
    pub fn save(&self, records: &[T]) -> Result<()> {
        let rows: Vec<RawRecord> = records.iter().map(Record::to_raw).collect();
        self.save_raw(&rows)
    }

    /// Rewrites the whole file from raw rows.
    ///
    /// The header is derived from the first row's columns; every later row
    /// must carry exactly the same column sequence. An empty input writes a
    /// zero-column header.
    ///
    /// # Errors
    /// [`Error::SchemaMismatch`] when a row's columns differ from the
    /// first's, [`Error::Io`] on filesystem failure.
    pub fn save_raw(&self, rows: &[RawRecord]) -> Result<()> {
        let Some(first) = rows.first() else {
            return self.write_atomically(b"\n");
        };
        let header: Vec<&str> = first.columns().collect();

        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(&header).map_err(|e| self.csv_error(e))?;
        for (index, row) in rows.iter().enumerate() {
            let columns: Vec<&str> = row.columns().collect();
            if columns != header {
                return Err(Error::SchemaMismatch {
                    index,
                    expected: header.iter().map(ToString::to_string).collect(),
                    found: columns.iter().map(ToString::to_string).collect(),
                });
            }
            let cells: Vec<String> = row.values().map(Value::render).collect();
            writer.write_record(&cells).map_err(|e| self.csv_error(e))?;
        }
        let bytes = writer.into_inner().map_err(|e| Error::Io(e.into_error()))?;
        debug!(path = %self.path.display(), rows = rows.len(), "saved record file");
        self.write_atomically(&bytes)
    }

    /// Removes the backing file.
    ///
    /// # Errors
    /// [`Error::NotFound`] when the file does not exist; no other error kind
    /// maps to it.
    pub fn delete(&self) -> Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(Error::NotFound {
                path: self.path.clone(),
            }),
            Err(e) => Err(e.into()),
        }
    }

    fn write_atomically(&self, bytes: &[u8]) -> Result<()> {
        let parent = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(parent)?;
        let mut temp = tempfile::NamedTempFile::new_in(parent)?;
        temp.write_all(bytes)?;
        temp.persist(&self.path).map_err(|e| Error::Io(e.error))?;
        Ok(())
    }

    /// Fills this store's path into structural errors raised below the file
    /// layer (`RawRecord::require` does not know which file it came from).
    fn attach_path(&self, e: Error) -> Error {
        match e {
            Error::Format { path, message } if path.as_os_str().is_empty() => {
                self.format_error(message)
            }
            other => other,
        }
    }

    fn format_error(&self, message: impl Into<String>) -> Error {
        Error::Format {
            path: self.path.clone(),
            message: message.into(),
        }
    }

    fn csv_error(&self, e: csv::Error) -> Error {
        match e.into_kind() {
            csv::ErrorKind::Io(io) => Error::Io(io),
            csv::ErrorKind::UnequalLengths {
                expected_len, len, ..
            } => self.format_error(format!(
                "row has {len} columns, header has {expected_len}"
            )),
            kind => self.format_error(format!("{kind:?}")),
        }
    }
}

/// The three record stores the tracker runs on.
#[derive(Debug, Clone)]
pub struct Stores {
    /// Employee roster.
    pub employees: RecordStore<Employee>,
    /// Work session log.
    pub work_sessions: RecordStore<WorkSession>,
    /// Sales log.
    pub sales: RecordStore<Sale>,
}

impl Stores {
    /// Binds the three stores to the configured file paths.
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            employees: RecordStore::new(&config.files.employees, Employee::coercion_table()),
            work_sessions: RecordStore::new(
                &config.files.work_sessions,
                WorkSession::coercion_table(),
            ),
            sales: RecordStore::new(&config.files.sales, Sale::coercion_table()),
        }
    }
}
