//! Raw row representation and per-column type coercion.
//!
//! A CSV row first becomes a [`RawRecord`]: an ordered mapping from column
//! name to [`Value`]. Columns start out as text; a [`CoercionTable`] declared
//! at the call site upgrades selected columns to integers, floats, or
//! booleans before a typed record is built from the row.

use crate::errors::{Error, Result};

/// A coerced cell value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Integer column value.
    Int(i64),
    /// Floating-point column value.
    Float(f64),
    /// Boolean column value.
    Bool(bool),
    /// Uncoerced text column value.
    Text(String),
}

impl Value {
    /// Returns the integer value, if this is an `Int`.
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match *self {
            Self::Int(n) => Some(n),
            _ => None,
        }
    }

    /// Returns the numeric value. Integers widen to `f64` so a column
    /// declared `Float` still accepts whole-number text.
    #[must_use]
    pub fn as_float(&self) -> Option<f64> {
        match *self {
            Self::Float(x) => Some(x),
            #[allow(clippy::cast_precision_loss)]
            Self::Int(n) => Some(n as f64),
            _ => None,
        }
    }

    /// Returns the boolean value, if this is a `Bool`.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match *self {
            Self::Bool(b) => Some(b),
            _ => None,
        }
    }

    /// Returns the text value, if this is an uncoerced `Text`.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Stable text rendering used when writing a row back to disk.
    #[must_use]
    pub fn render(&self) -> String {
        match self {
            Self::Int(n) => n.to_string(),
            Self::Float(x) => x.to_string(),
            Self::Bool(b) => b.to_string(),
            Self::Text(s) => s.clone(),
        }
    }
}

/// Target primitive type for a coerced column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    /// Parse as `i64`.
    Integer,
    /// Parse as `f64`.
    Float,
    /// Case-insensitive `"true"` or `"1"` is `true`; anything else is `false`.
    Boolean,
    /// Leave as text.
    Text,
}

impl ColumnType {
    /// Coerces raw cell text to this type.
    ///
    /// # Errors
    /// Returns [`Error::TypeCoercion`] when integer or float text does not
    /// parse. Boolean coercion never fails.
    pub fn coerce(self, column: &str, raw: &str) -> Result<Value> {
        match self {
            Self::Integer => raw.trim().parse::<i64>().map(Value::Int).map_err(|_| {
                Error::TypeCoercion {
                    column: column.to_string(),
                    value: raw.to_string(),
                    expected: "integer",
                }
            }),
            Self::Float => raw.trim().parse::<f64>().map(Value::Float).map_err(|_| {
                Error::TypeCoercion {
                    column: column.to_string(),
                    value: raw.to_string(),
                    expected: "float",
                }
            }),
            Self::Boolean => {
                let truthy = raw.eq_ignore_ascii_case("true") || raw == "1";
                Ok(Value::Bool(truthy))
            }
            Self::Text => Ok(Value::Text(raw.to_string())),
        }
    }
}

/// Per-column coercion declarations for one record file.
///
/// Columns not named here stay as text. Built at the call site that owns the
/// store, alongside the record type it feeds.
#[derive(Debug, Clone, Default)]
pub struct CoercionTable {
    columns: Vec<(String, ColumnType)>,
}

impl CoercionTable {
    /// Creates an empty table (all columns remain text).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares the target type for one column.
    #[must_use]
    pub fn column(mut self, name: &str, ty: ColumnType) -> Self {
        self.columns.push((name.to_string(), ty));
        self
    }

    /// Looks up the declared type for a column, if any.
    #[must_use]
    pub fn type_of(&self, name: &str) -> Option<ColumnType> {
        self.columns
            .iter()
            .find(|(col, _)| col == name)
            .map(|&(_, ty)| ty)
    }
}

/// One row of a record file: column names paired with values, in file order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawRecord {
    fields: Vec<(String, Value)>,
}

impl RawRecord {
    /// Creates an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a column. Order is preserved and becomes the file's column
    /// order on save.
    pub fn push(&mut self, column: impl Into<String>, value: Value) {
        self.fields.push((column.into(), value));
    }

    /// Builder-style [`push`](Self::push).
    #[must_use]
    pub fn with(mut self, column: impl Into<String>, value: Value) -> Self {
        self.push(column, value);
        self
    }

    /// Looks up a column's value.
    #[must_use]
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value)
    }

    /// Looks up a column's value, failing when the column is missing.
    ///
    /// # Errors
    /// Returns [`Error::Format`] naming the missing column.
    pub fn require(&self, column: &str) -> Result<&Value> {
        self.get(column).ok_or_else(|| Error::Format {
            path: std::path::PathBuf::new(),
            message: format!("missing column `{column}`"),
        })
    }

    /// Column names in file order.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    /// Values in file order.
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.fields.iter().map(|(_, value)| value)
    }

    /// Number of columns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the record has no columns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
