//! Go declaration extractors
//!
//! Tree-sitter based extraction of a Go file's declared surface: imports,
//! struct and interface members, and function/method signatures.
//!
//! # Architecture
//!
//! - `base` - report type, declaration model and tree helpers
//! - `go` - node lowering, dispatch and signature formatting
//! - `manager` - file-level `describe` API (parse, check, extract), single and batch

pub mod base;
pub mod go;
pub mod manager;

// Re-export the public API
pub use base::{Declaration, Field, FileDetails, FuncDecl, ImportSpec, TypeShape, TypeSpec};
pub use go::GoExtractor;
pub use manager::{ExtractError, ExtractorManager, FileOutcome};
