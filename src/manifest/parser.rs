//! Requirements manifest parsing.
//!
//! A manifest is a plain-text file with one requirement per line:
//!
//! ```text
//! # comments start with '#'
//! requests==2.31
//! numpy >= 1.26  ; trailing annotations are ignored
//! ```
//!
//! Only the bare package name of each line is kept. Version constraints,
//! extras and annotations are discarded.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{AuditError, Result};

/// Characters that start a version constraint.
const CONSTRAINT_OPERATORS: [char; 3] = ['<', '>', '='];

/// Line boundaries recognised in manifest text. `\r\n` counts as one.
const LINE_BREAKS: [char; 10] = [
    '\n', '\r', '\u{0b}', '\u{0c}', '\u{1c}', '\u{1d}', '\u{1e}', '\u{85}', '\u{2028}',
    '\u{2029}',
];

/// A single package listed in a manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageEntry {
    /// Bare package name, as written.
    pub name: String,
    /// Source line (1-indexed).
    pub line: usize,
}

/// A parsed manifest.
#[derive(Debug, Clone, Default)]
pub struct Manifest {
    /// Where the manifest was looked for.
    pub path: PathBuf,
    /// Whether the file was present on disk.
    pub exists: bool,
    /// Entries in file order, duplicates included.
    pub entries: Vec<PackageEntry>,
}

impl Manifest {
    /// Load a manifest from disk.
    ///
    /// A missing file yields an empty manifest with `exists == false`.
    /// Any other read failure is fatal.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("Manifest not found at {}", path.display());
                return Ok(Self::missing(path));
            }
            Err(source) => {
                return Err(AuditError::ManifestRead {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        let manifest = Self::parse(path, &contents);
        tracing::debug!(
            "Parsed {} entries from {}",
            manifest.entries.len(),
            path.display()
        );
        Ok(manifest)
    }

    /// Parse manifest contents that were read from `path`.
    pub fn parse(path: impl Into<PathBuf>, contents: &str) -> Self {
        let entries = split_lines(contents)
            .into_iter()
            .enumerate()
            .filter_map(|(idx, line)| {
                parse_line(line).map(|name| PackageEntry {
                    name: name.to_string(),
                    line: idx + 1,
                })
            })
            .collect();

        Self {
            path: path.into(),
            exists: true,
            entries,
        }
    }

    /// An empty manifest for a file that does not exist.
    pub fn missing(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            exists: false,
            entries: Vec::new(),
        }
    }

    /// Package names in file order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the manifest lists no packages.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Split manifest text into lines.
///
/// A trailing line break does not produce an extra empty line.
fn split_lines(contents: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = contents.char_indices().peekable();

    while let Some((idx, c)) = chars.next() {
        if !LINE_BREAKS.contains(&c) {
            continue;
        }
        lines.push(&contents[start..idx]);
        start = idx + c.len_utf8();
        if c == '\r' {
            if let Some(&(next, '\n')) = chars.peek() {
                chars.next();
                start = next + 1;
            }
        }
    }

    if start < contents.len() {
        lines.push(&contents[start..]);
    }
    lines
}

/// Extract the package name from one manifest line.
///
/// Returns `None` for blank lines, comments, and lines with no name before
/// the first constraint operator.
pub fn parse_line(line: &str) -> Option<&str> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    let head = match line.find(CONSTRAINT_OPERATORS) {
        Some(idx) => &line[..idx],
        None => line,
    };

    head.split_whitespace().next()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn parse_line_bare_name() {
        assert_eq!(parse_line("requests"), Some("requests"));
    }

    #[test]
    fn parse_line_strips_constraints() {
        assert_eq!(parse_line("requests==2.0"), Some("requests"));
        assert_eq!(parse_line("requests>=2.1"), Some("requests"));
        assert_eq!(parse_line("numpy<2"), Some("numpy"));
        assert_eq!(parse_line("torch > 2.0 , < 3"), Some("torch"));
    }

    #[test]
    fn parse_line_trims_whitespace() {
        assert_eq!(parse_line("   flask  \t"), Some("flask"));
        assert_eq!(parse_line("  flask == 3.0"), Some("flask"));
    }

    #[test]
    fn parse_line_keeps_first_token_only() {
        assert_eq!(parse_line("rich  ; python_version > '3.8'"), Some("rich"));
        assert_eq!(parse_line("httpx  # pinned by infra"), Some("httpx"));
    }

    #[test]
    fn parse_line_skips_blank_and_comments() {
        assert_eq!(parse_line(""), None);
        assert_eq!(parse_line("   "), None);
        assert_eq!(parse_line("# a comment"), None);
        assert_eq!(parse_line("   # indented comment"), None);
    }

    #[test]
    fn parse_line_skips_missing_name() {
        assert_eq!(parse_line("==1.0"), None);
        assert_eq!(parse_line("  >= 2"), None);
    }

    #[test]
    fn parse_line_preserves_case() {
        assert_eq!(parse_line("PyYAML==6.0"), Some("PyYAML"));
    }

    #[test]
    fn parse_keeps_order_and_duplicates() {
        let manifest = Manifest::parse(
            "reqs.txt",
            "requests==2.0\nrequests>=2.1\nasyncio\ntorch\n# a comment\n\n",
        );

        let names: Vec<_> = manifest.names().collect();
        assert_eq!(names, vec!["requests", "requests", "asyncio", "torch"]);
        assert!(manifest.exists);
    }

    #[test]
    fn parse_records_source_lines() {
        let manifest = Manifest::parse("reqs.txt", "# header\n\nflask\n  numpy==1.26\n");

        assert_eq!(manifest.entries[0].line, 3);
        assert_eq!(manifest.entries[1].line, 4);
    }

    #[test]
    fn parse_handles_crlf() {
        let manifest = Manifest::parse("reqs.txt", "flask\r\nnumpy==1.0\r\n");
        let names: Vec<_> = manifest.names().collect();
        assert_eq!(names, vec!["flask", "numpy"]);
    }

    #[test]
    fn parse_handles_cr_only() {
        let manifest = Manifest::parse(
            "reqs.txt",
            "requests==2.0\rrequests>=2.1\rasyncio\rtorch\r",
        );

        let names: Vec<_> = manifest.names().collect();
        assert_eq!(names, vec!["requests", "requests", "asyncio", "torch"]);
        assert_eq!(manifest.entries[3].line, 4);
    }

    #[test]
    fn parse_handles_unicode_line_separators() {
        let manifest = Manifest::parse(
            "reqs.txt",
            "flask\u{2028}torch\nnumpy\u{85}cirq\u{0c}rich\n",
        );

        let names: Vec<_> = manifest.names().collect();
        assert_eq!(names, vec!["flask", "torch", "numpy", "cirq", "rich"]);
    }

    #[test]
    fn parse_crlf_counts_as_one_break() {
        let manifest = Manifest::parse("reqs.txt", "flask\r\n\r\nnumpy\rtorch\n");

        let lines: Vec<_> = manifest.entries.iter().map(|e| e.line).collect();
        assert_eq!(lines, vec![1, 3, 4]);
    }

    #[test]
    fn split_lines_matches_line_boundaries() {
        assert_eq!(split_lines(""), Vec::<&str>::new());
        assert_eq!(split_lines("a"), vec!["a"]);
        assert_eq!(split_lines("a\n"), vec!["a"]);
        assert_eq!(split_lines("a\n\nb"), vec!["a", "", "b"]);
        assert_eq!(split_lines("a\r\nb\rc"), vec!["a", "b", "c"]);
        assert_eq!(split_lines("a\r\r\nb"), vec!["a", "", "b"]);
    }

    #[test]
    fn load_missing_file_is_empty() {
        let temp = TempDir::new().unwrap();
        let manifest = Manifest::load(temp.path().join("absent.txt")).unwrap();

        assert!(!manifest.exists);
        assert!(manifest.is_empty());
    }

    #[test]
    fn load_existing_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("python-requirements.txt");
        std::fs::write(&path, "flask==3.0\nrequests\n").unwrap();

        let manifest = Manifest::load(&path).unwrap();

        assert!(manifest.exists);
        assert_eq!(manifest.len(), 2);
        assert_eq!(manifest.path, path);
    }

    #[test]
    fn load_empty_file_exists_but_is_empty() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("python-requirements.txt");
        std::fs::write(&path, "").unwrap();

        let manifest = Manifest::load(&path).unwrap();

        assert!(manifest.exists);
        assert!(manifest.is_empty());
    }

    #[test]
    fn load_invalid_utf8_is_fatal() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("python-requirements.txt");
        std::fs::write(&path, [0x66, 0x6c, 0xff, 0xfe, 0x0a]).unwrap();

        let err = Manifest::load(&path).unwrap_err();
        assert!(matches!(err, AuditError::ManifestRead { .. }));
    }

    #[test]
    fn load_directory_is_fatal() {
        let temp = TempDir::new().unwrap();

        let err = Manifest::load(temp.path()).unwrap_err();
        assert!(matches!(err, AuditError::ManifestRead { .. }));
    }
}
