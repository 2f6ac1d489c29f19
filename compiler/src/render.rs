use serde::Serialize;

use crate::{traits::Renderer, types::Namespaces};

/// What a renderer knows besides the record itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderContext {
    /// Caller-supplied root package, never derived from schema text.
    pub package:   String,
    pub namespace: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedFile {
    pub language:  String,
    pub namespace: String,
    /// `<Record.upper>.<extension>`
    pub file_name: String,
    pub contents:  String,
}

/// Renders every record of every namespace, one file per record.
pub fn generate(ir: &Namespaces, renderer: &dyn Renderer, package: &str) -> Vec<GeneratedFile> {
    let mut files = Vec::new();
    for (namespace, records) in ir {
        let ctx = RenderContext {
            package:   package.to_string(),
            namespace: namespace.clone(),
        };
        for record in records {
            files.push(GeneratedFile {
                language:  renderer.language().to_string(),
                namespace: namespace.clone(),
                file_name: format!("{}.{}", record.name.upper, renderer.extension()),
                contents:  renderer.render(&ctx, record),
            });
        }
    }
    files
}

/// Pads every left-hand column to the widest entry.
pub(crate) fn align(rows: &[(String, String)], separator: &str) -> Vec<String> {
    let width = rows.iter().map(|(left, _)| left.len()).max().unwrap_or(0);
    rows.iter()
        .map(|(left, right)| format!("{:<width$}{}{}", left, separator, right, width = width))
        .collect()
}
