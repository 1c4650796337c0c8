//! File I/O utilities with atomic writes
//!
//! Both data files are line-oriented text with whitespace-separated fields.
//! Writes go to a temp file first and are renamed into place, so a failed
//! write never leaves a truncated store behind.

use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::TrackerError;

/// Read all lines of a text file, returning an empty list if it doesn't exist
pub fn read_lines<P: AsRef<Path>>(path: P) -> Result<Vec<String>, TrackerError> {
    let path = path.as_ref();

    if !path.exists() {
        return Ok(Vec::new());
    }

    let file = File::open(path)
        .map_err(|e| TrackerError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    BufReader::new(file)
        .lines()
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| TrackerError::Storage(format!("Failed to read {}: {}", path.display(), e)))
}

/// Write lines to a file atomically (write to temp, then rename)
pub fn write_lines_atomic<P, I>(path: P, lines: I) -> Result<(), TrackerError>
where
    P: AsRef<Path>,
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            TrackerError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Temp file must live in the same directory for the rename to be atomic
    let temp_path = temp_path_for(path);

    let file = File::create(&temp_path)
        .map_err(|e| TrackerError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    for line in lines {
        writeln!(writer, "{}", line.as_ref())
            .map_err(|e| TrackerError::Storage(format!("Failed to write data: {}", e)))?;
    }

    writer
        .flush()
        .map_err(|e| TrackerError::Storage(format!("Failed to flush data: {}", e)))?;

    writer
        .get_ref()
        .sync_all()
        .map_err(|e| TrackerError::Storage(format!("Failed to sync data: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        TrackerError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Escape a field so it survives whitespace splitting
///
/// `\` becomes `\\`, space `\s`, tab `\t`, newline `\n`, carriage return
/// `\r`. An empty field is written as a lone `\0`.
pub fn escape_field(field: &str) -> String {
    if field.is_empty() {
        return "\\0".to_string();
    }

    let mut out = String::with_capacity(field.len());
    for c in field.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            ' ' => out.push_str("\\s"),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            other => out.push(other),
        }
    }
    out
}

/// Reverse [`escape_field`]. Unknown escapes are kept verbatim.
pub fn unescape_field(field: &str) -> String {
    if field == "\\0" {
        return String::new();
    }

    let mut out = String::with_capacity(field.len());
    let mut chars = field.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('\\') => out.push('\\'),
            Some('s') => out.push(' '),
            Some('t') => out.push('\t'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_nonexistent_returns_empty() {
        let temp_dir = TempDir::new().unwrap();
        let lines = read_lines(temp_dir.path().join("missing.txt")).unwrap();
        assert!(lines.is_empty());
    }

    #[test]
    fn test_write_and_read() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data.txt");

        write_lines_atomic(&path, ["a b", "c d"]).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "a b\nc d\n");
        assert_eq!(read_lines(&path).unwrap(), vec!["a b", "c d"]);
    }

    #[test]
    fn test_atomic_write_no_temp_file_left() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data.txt");

        write_lines_atomic(&path, ["x"]).unwrap();

        assert!(path.exists());
        assert!(!temp_dir.path().join("data.txt.tmp").exists());
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("dir").join("data.txt");

        write_lines_atomic(&path, Vec::<String>::new()).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_overwrite_replaces_contents() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data.txt");

        write_lines_atomic(&path, ["one", "two"]).unwrap();
        write_lines_atomic(&path, ["three"]).unwrap();

        assert_eq!(read_lines(&path).unwrap(), vec!["three"]);
    }

    #[test]
    fn test_escape_plain_field_unchanged() {
        assert_eq!(escape_field("lunch"), "lunch");
        assert_eq!(unescape_field("lunch"), "lunch");
    }

    #[test]
    fn test_escape_whitespace_and_backslash() {
        let escaped = escape_field("coffee with\tfriends\\co");
        assert!(!escaped.contains(' '));
        assert!(!escaped.contains('\t'));
        assert_eq!(escaped, "coffee\\swith\\tfriends\\\\co");
        assert_eq!(unescape_field(&escaped), "coffee with\tfriends\\co");
    }

    #[test]
    fn test_empty_field() {
        assert_eq!(escape_field(""), "\\0");
        assert_eq!(unescape_field("\\0"), "");
    }

    #[test]
    fn test_unknown_escape_kept() {
        assert_eq!(unescape_field("a\\qb"), "a\\qb");
        assert_eq!(unescape_field("trailing\\"), "trailing\\");
    }
}
