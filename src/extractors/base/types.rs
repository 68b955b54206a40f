// Base Extractor Types for gosymex
//
// The per-file report plus the declaration model every tree-sitter node is
// lowered into before dispatch.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Declared surface of a single Go source file
///
/// Field order here is the serialized order: FilePath, Imports, Structs,
/// Interfaces, Funcs. Map keys serialize sorted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct FileDetails {
    /// Path of the processed file, exactly as it was handed in
    pub file_path: String,
    /// Import paths in source order, duplicates kept
    pub imports: Vec<String>,
    /// Struct name -> "Name Type" per named field
    pub structs: BTreeMap<String, Vec<String>>,
    /// Interface name -> "Name Type" per method
    ///
    /// `None` means no interface was declared in the file and serializes as
    /// `null`; this is distinct from an empty map.
    pub interfaces: Option<BTreeMap<String, Vec<String>>>,
    /// Canonical function and method signatures in declaration order
    pub funcs: Vec<String>,
}

impl FileDetails {
    pub fn new(file_path: impl Into<String>) -> Self {
        Self {
            file_path: file_path.into(),
            imports: Vec::new(),
            structs: BTreeMap::new(),
            interfaces: None,
            funcs: Vec::new(),
        }
    }
}

/// One tree-sitter node, classified by what it declares
///
/// Every node lowers to exactly one variant; anything that is not an import,
/// a type spec or a function/method declaration is `Other`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Declaration {
    Import(ImportSpec),
    Type(TypeSpec),
    Function(FuncDecl),
    Other,
}

/// A single `import` spec with its delimiters already stripped
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSpec {
    pub path: String,
}

/// `type Name <shape>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeSpec {
    pub name: String,
    pub shape: TypeShape,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeShape {
    /// `struct { ... }` fields in declaration order
    Record(Vec<Field>),
    /// `interface { ... }` elements in declaration order
    Contract(Vec<Field>),
    /// Named basic types, aliases of non-struct types, function types, ...
    Other,
}

/// A group of names sharing one type expression
///
/// Used for struct fields, interface methods, parameters and results.
/// `names` is empty for embedded fields, embedded interfaces and unnamed
/// parameters or results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub names: Vec<String>,
    pub type_expr: String,
}

impl Field {
    pub fn new<I, S>(names: I, type_expr: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
            type_expr: type_expr.into(),
        }
    }

    pub fn unnamed(type_expr: impl Into<String>) -> Self {
        Self {
            names: Vec::new(),
            type_expr: type_expr.into(),
        }
    }

    pub fn is_named(&self) -> bool {
        !self.names.is_empty()
    }
}

/// A function or method declaration header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuncDecl {
    pub name: String,
    /// Canonical receiver type text (`*T`, `Stack[T]`) for methods
    pub receiver: Option<String>,
    pub params: Vec<Field>,
    pub results: Vec<Field>,
}
