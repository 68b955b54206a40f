//! Dependency classification and display
//!
//! Classification always computes both partitions; what gets shown is a
//! separate, explicit [`DependencyDisplay`] decision made by the caller.

use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

/// A single `require` entry from go.mod
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dependency {
    pub name: String,
    pub version: String,
    pub indirect: bool,
}

/// Requirements split on the `// indirect` marker, each side sorted by name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DependencySplit {
    pub direct: Vec<Dependency>,
    pub indirect: Vec<Dependency>,
}

impl DependencySplit {
    pub fn len(&self) -> usize {
        self.direct.len() + self.indirect.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Display policy for the dependency table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DependencyDisplay {
    /// Also list indirect dependencies
    pub show_all: bool,
}

/// Partition on `indirect` and sort each side by name
///
/// The sort is stable: entries with equal names keep their manifest order.
pub fn classify(deps: &[Dependency]) -> DependencySplit {
    let (mut indirect, mut direct): (Vec<Dependency>, Vec<Dependency>) =
        deps.iter().cloned().partition(|dep| dep.indirect);

    direct.sort_by(|a, b| a.name.cmp(&b.name));
    indirect.sort_by(|a, b| a.name.cmp(&b.name));

    DependencySplit { direct, indirect }
}

/// Render the dependency table: `#`, `Name`, `Version`, `Indirect`
///
/// Direct dependencies come first, then indirect ones when `display.show_all`
/// is set. Hidden indirect dependencies are counted in a trailing note.
pub fn render_dependencies(split: &DependencySplit, display: DependencyDisplay) -> String {
    let mut out = String::new();

    if split.is_empty() {
        out.push_str("No dependencies found.\n");
        return out;
    }

    let mut rows: Vec<&Dependency> = split.direct.iter().collect();
    if display.show_all {
        rows.extend(split.indirect.iter());
    }

    if !rows.is_empty() {
        let index_width = rows.len().to_string().len().max(1);
        let name_width = rows.iter().map(|d| d.name.len()).max().unwrap_or(0).max(4);
        let version_width = rows
            .iter()
            .map(|d| d.version.len())
            .max()
            .unwrap_or(0)
            .max(7);

        let _ = writeln!(
            out,
            "{:>iw$}  {:<nw$}  {:<vw$}  Indirect",
            "#",
            "Name",
            "Version",
            iw = index_width,
            nw = name_width,
            vw = version_width
        );
        for (i, dep) in rows.iter().enumerate() {
            let _ = writeln!(
                out,
                "{:>iw$}  {:<nw$}  {:<vw$}  {}",
                i + 1,
                dep.name,
                dep.version,
                if dep.indirect { "yes" } else { "no" },
                iw = index_width,
                nw = name_width,
                vw = version_width
            );
        }
    }

    if !display.show_all && !split.indirect.is_empty() {
        let _ = writeln!(
            out,
            "({} indirect dependencies hidden; use --all-deps to show them)",
            split.indirect.len()
        );
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dep(name: &str, version: &str, indirect: bool) -> Dependency {
        Dependency {
            name: name.to_string(),
            version: version.to_string(),
            indirect,
        }
    }

    fn sample() -> Vec<Dependency> {
        vec![
            dep("golang.org/x/mod", "v0.14.0", false),
            dep("github.com/spf13/pflag", "v1.0.5", true),
            dep("github.com/spf13/cobra", "v1.8.0", false),
            dep("github.com/inconshreveable/mousetrap", "v1.1.0", true),
            dep("github.com/mattn/go-sqlite3", "v1.14.19", false),
        ]
    }

    #[test]
    fn test_classify_partitions_and_sorts() {
        let split = classify(&sample());

        let direct: Vec<&str> = split.direct.iter().map(|d| d.name.as_str()).collect();
        let indirect: Vec<&str> = split.indirect.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(
            direct,
            vec![
                "github.com/mattn/go-sqlite3",
                "github.com/spf13/cobra",
                "golang.org/x/mod",
            ]
        );
        assert_eq!(
            indirect,
            vec!["github.com/inconshreveable/mousetrap", "github.com/spf13/pflag"]
        );
    }

    #[test]
    fn test_classify_is_a_permutation() {
        let input = sample();
        let split = classify(&input);
        assert_eq!(split.len(), input.len());

        let mut combined: Vec<Dependency> =
            split.direct.iter().chain(split.indirect.iter()).cloned().collect();
        let mut expected = input.clone();
        combined.sort_by(|a, b| a.name.cmp(&b.name));
        expected.sort_by(|a, b| a.name.cmp(&b.name));
        assert_eq!(combined, expected);
    }

    #[test]
    fn test_classify_is_stable_for_equal_names() {
        let input = vec![
            dep("example.com/dup", "v2.0.0", false),
            dep("example.com/a", "v1.0.0", false),
            dep("example.com/dup", "v1.0.0", false),
        ];
        let split = classify(&input);
        let versions: Vec<&str> = split.direct.iter().map(|d| d.version.as_str()).collect();
        assert_eq!(versions, vec!["v1.0.0", "v2.0.0", "v1.0.0"]);
        assert_eq!(split.direct[1].name, "example.com/dup");
    }

    #[test]
    fn test_render_hides_indirect_by_default() {
        let split = classify(&sample());
        let table = render_dependencies(&split, DependencyDisplay::default());

        assert!(table.contains("github.com/spf13/cobra"));
        assert!(!table.contains("mousetrap"));
        assert!(table.contains("(2 indirect dependencies hidden"));
        assert!(table.lines().next().unwrap().contains("Indirect"));
    }

    #[test]
    fn test_render_show_all_lists_indirect_after_direct() {
        let split = classify(&sample());
        let table = render_dependencies(&split, DependencyDisplay { show_all: true });

        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 6);
        assert!(lines[1].starts_with("1  github.com/mattn/go-sqlite3"));
        assert!(lines[4].contains("mousetrap") && lines[4].ends_with("yes"));
        assert!(lines[5].starts_with("5  github.com/spf13/pflag"));
        assert!(!table.contains("hidden"));
    }

    #[test]
    fn test_render_empty() {
        let table = render_dependencies(&DependencySplit::default(), DependencyDisplay::default());
        assert_eq!(table, "No dependencies found.\n");
    }
}
