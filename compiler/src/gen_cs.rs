use crate::{
    names::name_set,
    render::RenderContext,
    traits::Renderer,
    type_map::TypeMap,
    types::{Record, RecordKind},
};

/// Renders a record as a C# class (tables) or struct (structs) with
/// auto-properties and one slot constant per field.
#[derive(Debug, Clone)]
pub struct CsRenderer {
    types: TypeMap,
}

impl CsRenderer {
    pub fn new(types: TypeMap) -> Self {
        CsRenderer { types }
    }
}

impl Default for CsRenderer {
    fn default() -> Self {
        CsRenderer::new(TypeMap::csharp())
    }
}

/// `game` + `foo.bar` -> `game.Foo.Bar`. Keyword segments are escaped
/// before capitalizing and keep their spelling (`internal` -> `@internal`).
fn namespace_path(types: &TypeMap, package: &str, namespace: &str) -> String {
    let segments = namespace
        .split('.')
        .map(|s| {
            let escaped = types.escape_keyword(s);
            if escaped == s { name_set(s).upper } else { escaped }
        })
        .collect::<Vec<_>>()
        .join(".");
    if package.is_empty() {
        segments
    } else {
        format!("{}.{}", package, segments)
    }
}

impl Renderer for CsRenderer {
    fn type_map(&self) -> &TypeMap {
        &self.types
    }

    fn render(&self, ctx: &RenderContext, record: &Record) -> String {
        let mut cs_code: Vec<String> = Vec::new();
        let is_class = record.kind == RecordKind::Table;

        cs_code.push("// <auto-generated>".to_string());
        cs_code.push("//   Generated by bfbs. Changes to this file will be lost.".to_string());
        cs_code.push("// </auto-generated>".to_string());
        if record.fields.iter().any(|f| f.attrs.array) {
            cs_code.push("using System.Collections.Generic;".to_string());
        }
        cs_code.push("".to_string());

        cs_code.push(format!("namespace {}", namespace_path(&self.types, &ctx.package, &ctx.namespace)));
        cs_code.push("{".to_string());
        cs_code.push(format!(
            "    public {} {}",
            if is_class { "class" } else { "struct" },
            record.name.upper
        ));
        cs_code.push("    {".to_string());

        for (i, field) in record.fields.iter().enumerate() {
            cs_code.push(format!(
                "        public const int {}_SLOT = {};",
                field.name.upper_snake, i
            ));
        }
        if !record.fields.is_empty() {
            cs_code.push("".to_string());
        }

        for field in &record.fields {
            let field_type = self.types.map_type(&field.type_name);
            let mut line = format!("        public {} {} {{ get; set; }}", field_type, field.name.upper);
            if field.attrs.array && is_class {
                line.push_str(&format!(" = new {}();", field_type));
            }
            if field.attrs.offset {
                line.push_str(" // offset");
            }
            cs_code.push(line);
        }

        cs_code.push("    }".to_string());
        cs_code.push("}".to_string());
        cs_code.push("".to_string());

        cs_code.join("\n")
    }
}
