use crate::{
    render::{align, RenderContext},
    traits::Renderer,
    type_map::TypeMap,
    types::{Field, Record},
};

/// Renders a record as a Go struct plus a `const` block of field slots.
#[derive(Debug, Clone)]
pub struct GoRenderer {
    types: TypeMap,
}

impl GoRenderer {
    pub fn new(types: TypeMap) -> Self {
        GoRenderer { types }
    }
}

impl Default for GoRenderer {
    fn default() -> Self {
        GoRenderer::new(TypeMap::go())
    }
}

/// Go package names cannot hold dots, so only the last segment is used.
fn package_name(types: &TypeMap, namespace: &str) -> String {
    types.escape_keyword(&namespace.rsplit('.').next().unwrap_or(namespace).to_lowercase())
}

fn field_comment(field: &Field) -> &'static str {
    if field.attrs.offset { " // offset" } else { "" }
}

impl Renderer for GoRenderer {
    fn type_map(&self) -> &TypeMap {
        &self.types
    }

    fn render(&self, ctx: &RenderContext, record: &Record) -> String {
        let mut go_code: Vec<String> = Vec::new();

        go_code.push("// Code generated by bfbs. DO NOT EDIT.".to_string());
        if !ctx.package.is_empty() {
            go_code.push(format!("// Package root: {}", ctx.package));
        }
        go_code.push("".to_string());
        go_code.push(format!("package {}", package_name(&self.types, &ctx.namespace)));
        go_code.push("".to_string());

        if !record.fields.is_empty() {
            let slots: Vec<(String, String)> = record
                .fields
                .iter()
                .enumerate()
                .map(|(i, f)| {
                    (
                        format!("{}_{}", record.name.upper_snake, f.name.upper_snake),
                        i.to_string(),
                    )
                })
                .collect();
            go_code.push("const (".to_string());
            go_code.extend(align(&slots, " = ").into_iter().map(|l| format!("\t{}", l)));
            go_code.push(")".to_string());
            go_code.push("".to_string());
        }

        let members: Vec<(String, String)> = record
            .fields
            .iter()
            .map(|f| {
                (
                    f.name.upper.clone(),
                    format!("{}{}", self.types.map_type(&f.type_name), field_comment(f)),
                )
            })
            .collect();

        go_code.push(format!("type {} struct {{", record.name.upper));
        go_code.extend(align(&members, " ").into_iter().map(|l| format!("\t{}", l)));
        go_code.push("}".to_string());
        go_code.push("".to_string());

        go_code.join("\n")
    }
}
