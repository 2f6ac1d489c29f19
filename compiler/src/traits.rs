use crate::{render::RenderContext, type_map::TypeMap, types::Record};

/// Turns one resolved record into target-language source text.
pub trait Renderer {
    fn type_map(&self) -> &TypeMap;

    fn render(&self, ctx: &RenderContext, record: &Record) -> String;

    fn language(&self) -> &str {
        &self.type_map().language
    }

    fn extension(&self) -> &str {
        &self.type_map().extension
    }
}
