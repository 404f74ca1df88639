//! File selection rules.
//!
//! Both rules pass trivially for values that are not file lists.

use crate::schema::{RuleParam, ValueMap};
use crate::value::{FieldValue, FileInfo};

/// Every file is at most `param` bytes.
pub fn file_size(value: &FieldValue, param: &RuleParam, _all: &ValueMap) -> bool {
    let Some(files) = value.as_files() else {
        return true;
    };
    param
        .as_number()
        .is_some_and(|max| files.iter().all(|file| file.size as f64 <= max))
}

/// Every file matches one of the allowed tokens, by extension or MIME prefix.
///
/// Tokens are case-insensitive. `.pdf` and `pdf` both match `report.PDF`;
/// `image/*` and `image/` both match `image/png`.
pub fn file_type(value: &FieldValue, param: &RuleParam, _all: &ValueMap) -> bool {
    let Some(files) = value.as_files() else {
        return true;
    };
    let allowed: Vec<String> = param
        .as_list()
        .iter()
        .map(|token| token.trim().to_lowercase())
        .filter(|token| !token.is_empty())
        .collect();

    files
        .iter()
        .all(|file| allowed.iter().any(|token| matches_token(file, token)))
}

fn matches_token(file: &FileInfo, token: &str) -> bool {
    let extension = token.trim_start_matches('.');
    if file.extension().is_some_and(|ext| ext == extension) {
        return true;
    }
    let mime_prefix = token.trim_end_matches('*');
    !mime_prefix.is_empty() && file.mime.to_lowercase().starts_with(mime_prefix)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selection() -> FieldValue {
        FieldValue::files([
            FileInfo::new("photo.JPG", 200_000, "image/jpeg"),
            FileInfo::new("scan.png", 900_000, "image/png"),
        ])
    }

    #[test]
    fn test_file_size() {
        let all = ValueMap::new();
        assert!(file_size(&selection(), &1_000_000.into(), &all));
        assert!(!file_size(&selection(), &500_000.into(), &all));
        assert!(!file_size(&selection(), &"big".into(), &all));
    }

    #[test]
    fn test_file_type_by_extension_and_mime() {
        let all = ValueMap::new();
        assert!(file_type(&selection(), &"jpg,png".into(), &all));
        assert!(file_type(&selection(), &[".JPG", ".png"].into(), &all));
        assert!(file_type(&selection(), &"image/*".into(), &all));
        assert!(!file_type(&selection(), &"jpg".into(), &all));
        assert!(!file_type(&selection(), &"application/pdf".into(), &all));
    }

    #[test]
    fn test_non_files_pass() {
        let all = ValueMap::new();
        assert!(file_size(&"report.pdf".into(), &1.into(), &all));
        assert!(file_type(&"report.exe".into(), &"pdf".into(), &all));
    }
}
