//! Source file selection for directory runs
//!
//! Decides which files under a root get described: Go sources only, with test
//! and mock files opt-in and user globs applied to the root-relative path.

use crate::language::is_go_source;
use glob::Pattern;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

const TEST_SUFFIX: &str = "_test.go";
const MOCK_SUFFIX: &str = "_mock.go";

/// Which files a directory `describe` picks up
#[derive(Debug, Clone, Default)]
pub struct DescribeOptions {
    pub include_tests: bool,
    pub include_mocks: bool,
    /// Matched against the path relative to the walk root
    pub exclude: Vec<Pattern>,
}

impl DescribeOptions {
    /// Compile `--exclude` arguments into patterns
    pub fn with_excludes<S: AsRef<str>>(mut self, globs: &[S]) -> Result<Self, glob::PatternError> {
        for glob in globs {
            self.exclude.push(Pattern::new(glob.as_ref())?);
        }
        Ok(self)
    }

    fn is_excluded(&self, relative: &Path) -> bool {
        self.exclude.iter().any(|pattern| pattern.matches_path(relative))
    }
}

/// Whether a single file qualifies under `opts`, ignoring exclude globs
pub fn is_go_source_file(path: &Path, opts: &DescribeOptions) -> bool {
    if !is_go_source(path) {
        return false;
    }

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_default();

    if name.ends_with(TEST_SUFFIX) && !opts.include_tests {
        return false;
    }
    if name.ends_with(MOCK_SUFFIX) && !opts.include_mocks {
        return false;
    }
    true
}

/// Walk `root` and return the qualifying Go files in file-name order
///
/// Unreadable entries are logged and skipped; the walk itself never fails.
pub fn collect_source_files(root: &Path, opts: &DescribeOptions) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable entry under {}: {}", root.display(), e);
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        if !is_go_source_file(path, opts) {
            continue;
        }

        let relative = path.strip_prefix(root).unwrap_or(path);
        if opts.is_excluded(relative) {
            debug!("Excluded {}", relative.display());
            continue;
        }

        files.push(path.to_path_buf());
    }

    debug!("Collected {} Go files under {}", files.len(), root.display());
    files
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(root: &Path, relative: &str) {
        let path = root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, "package p\n").unwrap();
    }

    fn names(root: &Path, files: &[PathBuf]) -> Vec<String> {
        files
            .iter()
            .map(|f| {
                f.strip_prefix(root)
                    .unwrap()
                    .to_string_lossy()
                    .replace('\\', "/")
            })
            .collect()
    }

    fn project() -> TempDir {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        touch(root, "main.go");
        touch(root, "main_test.go");
        touch(root, "store_mock.go");
        touch(root, "README.md");
        touch(root, "internal/api/api.go");
        touch(root, "vendor/dep/dep.go");
        temp_dir
    }

    #[test]
    fn test_default_options_skip_tests_and_mocks() {
        let temp_dir = project();
        let root = temp_dir.path();
        let files = collect_source_files(root, &DescribeOptions::default());
        assert_eq!(
            names(root, &files),
            vec!["internal/api/api.go", "main.go", "vendor/dep/dep.go"]
        );
    }

    #[test]
    fn test_include_tests_and_mocks() {
        let temp_dir = project();
        let root = temp_dir.path();
        let opts = DescribeOptions {
            include_tests: true,
            include_mocks: true,
            ..Default::default()
        };
        let files = collect_source_files(root, &opts);
        assert_eq!(files.len(), 5);
        assert!(names(root, &files).contains(&"main_test.go".to_string()));
        assert!(names(root, &files).contains(&"store_mock.go".to_string()));
    }

    #[test]
    fn test_exclude_globs_match_relative_path() {
        let temp_dir = project();
        let root = temp_dir.path();
        let opts = DescribeOptions::default()
            .with_excludes(&["vendor/**"])
            .unwrap();
        let files = collect_source_files(root, &opts);
        assert_eq!(names(root, &files), vec!["internal/api/api.go", "main.go"]);
    }

    #[test]
    fn test_invalid_glob_is_rejected() {
        assert!(DescribeOptions::default().with_excludes(&["a[b"]).is_err());
    }

    #[test]
    fn test_is_go_source_file() {
        let opts = DescribeOptions::default();
        assert!(is_go_source_file(Path::new("pkg/server.go"), &opts));
        assert!(!is_go_source_file(Path::new("pkg/server_test.go"), &opts));
        assert!(!is_go_source_file(Path::new("pkg/repo_mock.go"), &opts));
        assert!(!is_go_source_file(Path::new("go.mod"), &opts));
    }
}
