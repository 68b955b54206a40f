//! Signature formatting for the Go report
//!
//! Pure text construction over the lowered declaration model. Nothing here
//! touches the syntax tree, so every rule can be exercised with hand-built
//! [`FuncDecl`]/[`Field`] values.

use crate::extractors::base::{Field, FuncDecl};

/// `"<name> <type>"`, the entry format for struct fields and interface methods
pub fn format_member(name: &str, type_expr: &str) -> String {
    format!("{} {}", name, type_expr)
}

/// Canonical function or method signature
///
/// `(<receiver>).<name>(<params>) returns (<results>)`. The receiver prefix
/// only appears for methods and the `returns` suffix only when there is at
/// least one result group. A parameter group emits `name type` once per name.
/// A result group emits its first name (if any) followed by the type.
///
/// Unnamed parameter groups break the once-per-name rule: taken literally it
/// would emit nothing for them and yield `F(, )`, so they emit their type
/// alone instead (`F(int, string)`).
pub fn format_function_signature(decl: &FuncDecl) -> String {
    let mut signature = String::new();

    if let Some(receiver) = &decl.receiver {
        signature.push('(');
        signature.push_str(receiver);
        signature.push_str(").");
    }

    signature.push_str(&decl.name);
    signature.push('(');
    for (i, group) in decl.params.iter().enumerate() {
        if i > 0 {
            signature.push_str(", ");
        }
        if group.names.is_empty() {
            signature.push_str(&group.type_expr);
            continue;
        }
        for (j, name) in group.names.iter().enumerate() {
            if j > 0 {
                signature.push_str(", ");
            }
            signature.push_str(name);
            signature.push(' ');
            signature.push_str(&group.type_expr);
        }
    }
    signature.push(')');

    if !decl.results.is_empty() {
        signature.push_str(" returns (");
        for (i, group) in decl.results.iter().enumerate() {
            if i > 0 {
                signature.push_str(", ");
            }
            if let Some(name) = group.names.first() {
                signature.push_str(name);
                signature.push(' ');
            }
            signature.push_str(&group.type_expr);
        }
        signature.push(')');
    }

    signature
}

/// Field list as `go/types.ExprString` writes it: names joined by `", "`,
/// a blank, then the type; groups joined by `sep`
pub fn format_field_list(fields: &[Field], sep: &str) -> String {
    let mut out = String::new();
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            out.push_str(sep);
        }
        if field.is_named() {
            out.push_str(&field.names.join(", "));
            out.push(' ');
        }
        out.push_str(&field.type_expr);
    }
    out
}

/// Signature part of a function type: `(params)` followed by nothing, a
/// single unnamed result type, or a parenthesized result list
pub fn format_func_type(params: &[Field], results: &[Field]) -> String {
    let mut out = format!("({})", format_field_list(params, ", "));

    let result_count: usize = results.iter().map(|r| r.names.len().max(1)).sum();
    match result_count {
        0 => {}
        1 if !results[0].is_named() => {
            out.push(' ');
            out.push_str(&results[0].type_expr);
        }
        _ => {
            out.push_str(" (");
            out.push_str(&format_field_list(results, ", "));
            out.push(')');
        }
    }

    out
}
