// Base Extractor Types and Traits for gosymex
//
// - types.rs: report and declaration model (FileDetails, Declaration, Field, ...)
// - extractor.rs: BaseExtractor implementation (node text access)
// - tree_methods.rs: Tree navigation and traversal methods

pub mod extractor;
pub mod tree_methods;
pub mod types;

// Re-export key types for external use
pub use extractor::BaseExtractor;
pub use types::{Declaration, Field, FileDetails, FuncDecl, ImportSpec, TypeShape, TypeSpec};
