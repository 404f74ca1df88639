//! Field values as supplied by the embedding layer.
//!
//! The engine never mutates a value; it only inspects emptiness and coerces
//! to text or numbers where a rule asks for it. Coercion mirrors the loose
//! semantics form inputs usually carry: `"42"` is numeric, `0` and `false` are
//! present values, and whitespace-only text counts as empty.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Value used for fields that are missing from a [`ValueMap`](crate::schema::ValueMap).
pub(crate) static NULL: FieldValue = FieldValue::Null;

// ============================================================================
// FILES
// ============================================================================

/// Metadata of one selected file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileInfo {
    /// File name including its extension.
    pub name: String,
    /// Size in bytes.
    pub size: u64,
    /// MIME type reported by the source, empty when unknown.
    #[serde(rename = "type", default)]
    pub mime: String,
}

impl FileInfo {
    /// Creates file metadata.
    pub fn new(name: impl Into<String>, size: u64, mime: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size,
            mime: mime.into(),
        }
    }

    /// Lower-cased extension after the last dot.
    #[must_use]
    pub fn extension(&self) -> Option<String> {
        let (_, ext) = self.name.rsplit_once('.')?;
        (!ext.is_empty()).then(|| ext.to_lowercase())
    }
}

/// A file-list-like value, e.g. the selection of a file input.
///
/// Serialized as `{"files": [...]}` so it stays distinguishable from plain lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileList {
    /// Selected files in selection order.
    pub files: Vec<FileInfo>,
}

impl FromIterator<FileInfo> for FileList {
    fn from_iter<I: IntoIterator<Item = FileInfo>>(iter: I) -> Self {
        Self {
            files: iter.into_iter().collect(),
        }
    }
}

// ============================================================================
// FIELD VALUE
// ============================================================================

/// The current value of one field.
///
/// # Examples
///
/// ```
/// use formcheck_validator::value::FieldValue;
///
/// assert!(FieldValue::from("   ").is_empty());
/// assert!(!FieldValue::from(0).is_empty());
/// assert_eq!(FieldValue::from("0x1f").to_number(), 31.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Missing or cleared value.
    #[default]
    Null,
    /// Checkbox-like value.
    Bool(bool),
    /// Numeric value.
    Number(f64),
    /// Text value.
    Text(String),
    /// Ordered sequence, e.g. a multi-select.
    List(Vec<FieldValue>),
    /// File selection.
    Files(FileList),
}

impl FieldValue {
    /// Builds a file-list value.
    pub fn files(files: impl IntoIterator<Item = FileInfo>) -> Self {
        Self::Files(files.into_iter().collect())
    }

    /// Returns `true` for null, blank text, an empty list or an empty file list.
    ///
    /// `0` and `false` are not empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Null => true,
            Self::Text(text) => text.trim().is_empty(),
            Self::List(items) => items.is_empty(),
            Self::Files(list) => list.files.is_empty(),
            Self::Bool(_) | Self::Number(_) => false,
        }
    }

    /// Files of a file-list value; `None` for every other kind.
    #[must_use]
    pub fn as_files(&self) -> Option<&[FileInfo]> {
        match self {
            Self::Files(list) => Some(&list.files),
            _ => None,
        }
    }

    /// Text representation used by string-oriented rules.
    #[must_use]
    pub fn to_text(&self) -> String {
        self.to_string()
    }

    /// Numeric coercion. Returns NaN when the value has no numeric reading.
    #[must_use]
    pub fn to_number(&self) -> f64 {
        match self {
            Self::Null => 0.0,
            Self::Bool(flag) => f64::from(u8::from(*flag)),
            Self::Number(n) => *n,
            Self::Text(text) => parse_number(text),
            Self::List(items) => match items.as_slice() {
                [] => 0.0,
                [only] => parse_number(&only.to_text()),
                _ => f64::NAN,
            },
            Self::Files(_) => f64::NAN,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => Ok(()),
            Self::Bool(flag) => write!(f, "{flag}"),
            Self::Number(n) => f.write_str(&format_number(*n)),
            Self::Text(text) => f.write_str(text),
            Self::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{item}")?;
                }
                Ok(())
            }
            Self::Files(list) => {
                let names: Vec<&str> = list.files.iter().map(|file| file.name.as_str()).collect();
                f.write_str(&names.join(","))
            }
        }
    }
}

// ============================================================================
// CONVERSIONS
// ============================================================================

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<u64> for FieldValue {
    fn from(value: u64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<FileList> for FieldValue {
    fn from(value: FileList) -> Self {
        Self::Files(value)
    }
}

impl<T: Into<FieldValue>> From<Vec<T>> for FieldValue {
    fn from(values: Vec<T>) -> Self {
        Self::List(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

// ============================================================================
// NUMBER HELPERS
// ============================================================================

/// Parses numeric text the way form inputs are usually read.
///
/// Blank text is `0`; `0x`, `0o` and `0b` prefixes select a radix;
/// `Infinity` is accepted; everything else that is not a decimal literal is NaN.
pub(crate) fn parse_number(raw: &str) -> f64 {
    let text = raw.trim();
    if text.is_empty() {
        return 0.0;
    }

    match text {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    for (prefix, radix) in [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)] {
        if let Some(digits) = text.strip_prefix(prefix) {
            if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
                return f64::NAN;
            }
            return u64::from_str_radix(digits, radix).map_or(f64::NAN, |n| n as f64);
        }
    }

    // `str::parse` also takes "inf" and "nan", which are not numeric input.
    if text
        .bytes()
        .any(|b| b.is_ascii_alphabetic() && !matches!(b, b'e' | b'E'))
    {
        return f64::NAN;
    }

    text.parse::<f64>().unwrap_or(f64::NAN)
}

/// Formats a number without a trailing `.0` for whole values.
pub(crate) fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_owned()
    } else if n.is_infinite() {
        let text = if n > 0.0 { "Infinity" } else { "-Infinity" };
        text.to_owned()
    } else if n == 0.0 {
        "0".to_owned()
    } else {
        n.to_string()
    }
}
