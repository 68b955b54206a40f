// gosymex - tree-sitter powered description of Go source files
//
// `describe` turns a Go file into a report of its imports, struct fields,
// interface methods and function signatures. `detect` reads the enclosing
// go.mod and classifies the project's dependencies.

pub mod cli;
pub mod extractors;
pub mod language;
pub mod manifest;
pub mod utils;

pub use extractors::{ExtractError, ExtractorManager, FileDetails};
pub use manifest::{inspect_project, ManifestError, ProjectDetails};
