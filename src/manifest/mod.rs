//! go.mod discovery and parsing
//!
//! `find_manifest` walks upward from a path to the nearest `go.mod`;
//! `parse_go_mod` pulls the module path, go version and requirement list out
//! of its text. Only the directives needed for a dependency report are
//! understood; everything else is skipped.

pub mod dependencies;

pub use dependencies::{
    classify, render_dependencies, Dependency, DependencyDisplay, DependencySplit,
};

use regex::Regex;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use thiserror::Error;
use tracing::debug;

/// File name that marks a Go module root
pub const MANIFEST_FILE: &str = "go.mod";

/// `<module-path> <version>` with an optionally quoted path
static REQUIRE_ENTRY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^("(?:[^"\\]|\\.)*"|\S+)\s+(\S+)$"#).expect("valid require regex")
});

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("'{}' is not a Go project: no go.mod found above it", .start.display())]
    NotFound { start: PathBuf },

    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("go.mod:{line}: {message}")]
    Parse { line: usize, message: String },

    #[error("go.mod has no module directive")]
    MissingModule,
}

/// Parsed content of a go.mod file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoModule {
    pub module_path: String,
    pub go_version: Option<String>,
    /// Requirements in manifest order
    pub requires: Vec<Dependency>,
}

/// What `detect` reports about the project enclosing a path
#[derive(Debug, Clone, Serialize)]
pub struct ProjectDetails {
    pub project_dir: PathBuf,
    pub project_name: String,
    pub manifest_path: PathBuf,
    pub module_path: String,
    pub go_version: Option<String>,
    pub dependencies: Vec<Dependency>,
}

/// Locate the nearest go.mod at or above `start`
///
/// A regular file starts the search in its parent directory.
pub fn find_manifest(start: &Path) -> Result<PathBuf, ManifestError> {
    let metadata = std::fs::metadata(start).map_err(|source| ManifestError::Io {
        path: start.to_path_buf(),
        source,
    })?;

    let mut dir = if metadata.is_file() {
        start.parent().unwrap_or(start).to_path_buf()
    } else {
        start.to_path_buf()
    };

    loop {
        let candidate = dir.join(MANIFEST_FILE);
        debug!("Looking for {}", candidate.display());
        if candidate.is_file() {
            return Ok(candidate);
        }
        match dir.parent() {
            Some(parent) if parent != dir => dir = parent.to_path_buf(),
            _ => break,
        }
    }

    Err(ManifestError::NotFound {
        start: start.to_path_buf(),
    })
}

/// Find, read and parse the go.mod governing `path`
pub fn inspect_project(path: &Path) -> Result<ProjectDetails, ManifestError> {
    let manifest_path = find_manifest(path)?;
    let content = std::fs::read_to_string(&manifest_path).map_err(|source| ManifestError::Io {
        path: manifest_path.clone(),
        source,
    })?;
    let module = parse_go_mod(&content)?;

    let project_dir = manifest_path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_default();
    let project_name = project_dir
        .canonicalize()
        .unwrap_or_else(|_| project_dir.clone())
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_default();

    debug!(
        "Read {} requirements from {}",
        module.requires.len(),
        manifest_path.display()
    );

    Ok(ProjectDetails {
        project_dir,
        project_name,
        manifest_path,
        module_path: module.module_path,
        go_version: module.go_version,
        dependencies: module.requires,
    })
}

/// Parse go.mod text
pub fn parse_go_mod(content: &str) -> Result<GoModule, ManifestError> {
    let mut module_path = None;
    let mut go_version = None;
    let mut requires = Vec::new();
    // Directive of the `( ... )` block currently open, with its start line
    let mut block: Option<(String, usize)> = None;

    for (index, raw_line) in content.lines().enumerate() {
        let line_no = index + 1;
        let (code, comment) = split_comment(raw_line);
        let code = code.trim();

        if let Some((verb, _)) = &block {
            if code == ")" {
                block = None;
            } else if verb == "require" && !code.is_empty() {
                requires.push(parse_require_entry(code, comment, line_no)?);
            }
            continue;
        }

        if code.is_empty() {
            continue;
        }

        // `require (` and `require(` both open a block
        if let Some(verb) = code.strip_suffix('(').map(str::trim_end) {
            if !verb.is_empty() && !verb.contains(char::is_whitespace) {
                block = Some((verb.to_string(), line_no));
                continue;
            }
        }

        let (verb, rest) = match code.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (code, ""),
        };

        match verb {
            "module" => module_path = Some(unquote(rest).to_string()),
            "go" => go_version = Some(rest.to_string()),
            "require" => requires.push(parse_require_entry(rest, comment, line_no)?),
            _ => {}
        }
    }

    if let Some((verb, line)) = block {
        return Err(ManifestError::Parse {
            line,
            message: format!("unterminated {} block", verb),
        });
    }

    let module_path = module_path
        .filter(|path| !path.is_empty())
        .ok_or(ManifestError::MissingModule)?;

    Ok(GoModule {
        module_path,
        go_version,
        requires,
    })
}

fn parse_require_entry(
    entry: &str,
    comment: Option<&str>,
    line: usize,
) -> Result<Dependency, ManifestError> {
    let captures = REQUIRE_ENTRY
        .captures(entry)
        .ok_or_else(|| ManifestError::Parse {
            line,
            message: format!("usage: require module/path v1.2.3, got `{}`", entry),
        })?;

    Ok(Dependency {
        name: unquote(&captures[1]).to_string(),
        version: captures[2].to_string(),
        indirect: comment.is_some_and(is_indirect_marker),
    })
}

/// `// indirect` or `// indirect; <more>`
fn is_indirect_marker(comment: &str) -> bool {
    let comment = comment.trim();
    comment == "indirect" || comment.starts_with("indirect;")
}

/// Split a line at the first `//` outside a quoted string
fn split_comment(line: &str) -> (&str, Option<&str>) {
    let bytes = line.as_bytes();
    let mut in_quotes = false;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' if in_quotes => i += 1,
            b'"' => in_quotes = !in_quotes,
            b'/' if !in_quotes && bytes.get(i + 1) == Some(&b'/') => {
                return (&line[..i], Some(&line[i + 2..]));
            }
            _ => {}
        }
        i += 1;
    }
    (line, None)
}

fn unquote(text: &str) -> &str {
    text.strip_prefix('"')
        .and_then(|t| t.strip_suffix('"'))
        .unwrap_or(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const GO_MOD: &str = r#"module github.com/jonesrussell/gosymex

go 1.21

toolchain go1.21.5

require (
	github.com/spf13/cobra v1.8.0
	golang.org/x/mod v0.14.0
	github.com/mattn/go-sqlite3 v1.14.19
	github.com/inconshreveable/mousetrap v1.1.0 // indirect
	github.com/spf13/pflag v1.0.5 // indirect
)

require "example.com/quoted" v0.1.0

replace (
	golang.org/x/mod => ../mod
)

exclude golang.org/x/net v0.1.0
"#;

    #[test]
    fn test_parse_module_and_version() {
        let module = parse_go_mod(GO_MOD).unwrap();
        assert_eq!(module.module_path, "github.com/jonesrussell/gosymex");
        assert_eq!(module.go_version.as_deref(), Some("1.21"));
    }

    #[test]
    fn test_parse_requires_in_manifest_order() {
        let module = parse_go_mod(GO_MOD).unwrap();
        let names: Vec<&str> = module.requires.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "github.com/spf13/cobra",
                "golang.org/x/mod",
                "github.com/mattn/go-sqlite3",
                "github.com/inconshreveable/mousetrap",
                "github.com/spf13/pflag",
                "example.com/quoted",
            ]
        );
        assert_eq!(module.requires[0].version, "v1.8.0");
        assert!(!module.requires[0].indirect);
        assert!(module.requires[3].indirect);
        assert!(module.requires[4].indirect);
        assert!(!module.requires[5].indirect);
    }

    #[test]
    fn test_block_without_space_before_paren() {
        let text = concat!(
            "module m\n\n",
            "require(\n",
            "\tgithub.com/a/b v1.0.0\n",
            "\tgithub.com/c/d v2.1.0 // indirect\n",
            ")\n",
        );
        let module = parse_go_mod(text).unwrap();
        assert_eq!(module.requires.len(), 2);
        assert_eq!(module.requires[0].name, "github.com/a/b");
        assert!(module.requires[1].indirect);
    }

    #[test]
    fn test_indirect_marker_variants() {
        assert!(is_indirect_marker(" indirect"));
        assert!(is_indirect_marker(" indirect; pinned for CVE"));
        assert!(!is_indirect_marker(" not indirect"));
        assert!(!is_indirect_marker(" indirectly"));
    }

    #[test]
    fn test_missing_module_directive() {
        let err = parse_go_mod("go 1.21\n").unwrap_err();
        assert!(matches!(err, ManifestError::MissingModule));
    }

    #[test]
    fn test_malformed_require_line() {
        let err = parse_go_mod("module m\n\nrequire (\n\tgithub.com/only/path\n)\n").unwrap_err();
        match err {
            ManifestError::Parse { line, .. } => assert_eq!(line, 4),
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_unterminated_block() {
        let err = parse_go_mod("module m\nrequire (\n\ta v1.0.0\n").unwrap_err();
        assert!(err.to_string().contains("unterminated require block"));
    }

    #[test]
    fn test_find_manifest_walks_upward() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::write(root.join("go.mod"), "module example.com/app\n").unwrap();
        let nested = root.join("internal").join("store");
        fs::create_dir_all(&nested).unwrap();
        let file = nested.join("store.go");
        fs::write(&file, "package store\n").unwrap();

        assert_eq!(find_manifest(&nested).unwrap(), root.join("go.mod"));
        assert_eq!(find_manifest(&file).unwrap(), root.join("go.mod"));
    }

    #[test]
    fn test_find_manifest_missing_path_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let err = find_manifest(&temp_dir.path().join("nope")).unwrap_err();
        assert!(matches!(err, ManifestError::Io { .. }));
    }

    #[test]
    fn test_inspect_project() {
        let temp_dir = TempDir::new().unwrap();
        let project = temp_dir.path().join("gosymex");
        fs::create_dir(&project).unwrap();
        fs::write(project.join("go.mod"), GO_MOD).unwrap();

        let details = inspect_project(&project).unwrap();
        assert_eq!(details.project_name, "gosymex");
        assert_eq!(details.module_path, "github.com/jonesrussell/gosymex");
        assert_eq!(details.dependencies.len(), 6);
        assert_eq!(details.manifest_path, project.join("go.mod"));
    }
}
