//! brine-fbs
//!
//! Facade over `brine-fbs-compiler` for callers that only need the IR.
//!
//! - `extract` / `extract_with` (re-exported from the compiler)
//! - `extract_to_json` for handing the IR to external template engines

use std::path::Path;

pub use brine_fbs_compiler::error::FbsError;
pub use brine_fbs_compiler::{
    extract, extract_with, ExtractOptions, Field, NameSet, Namespaces, NamespaceKey, ParseMode,
    Record, SymbolScope, TypeAttributes,
};

/// Extracts `dir` and returns the IR as pretty-printed JSON.
pub fn extract_to_json(dir: &Path, options: &ExtractOptions) -> Result<String, FbsError> {
    let ir = extract_with(dir, options)?;
    Ok(serde_json::to_string_pretty(&ir)?)
}

pub mod render {
    pub use brine_fbs_compiler::{
        generate, CsRenderer, GeneratedFile, GoRenderer, RenderContext, Renderer, TypeMap,
    };
}

pub mod error {
    pub use brine_fbs_compiler::error::FbsError;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_to_json() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("m.fbs"),
            "namespace Foo.Bar; table Monster { itemId:int; items:[Item]; } table Item { id:int; }",
        )
        .unwrap();

        let json = extract_to_json(dir.path(), &ExtractOptions::default()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        let monster = &value["Bar"][0];
        assert_eq!(monster["kind"], "table");
        assert_eq!(monster["name"]["upper"], "Monster");
        let item_id = &monster["fields"][0];
        assert_eq!(item_id["name"]["upper_snake"], "ITEM_ID");
        assert_eq!(item_id["type"], "int");
        assert_eq!(item_id["offset"], false);
        assert!(item_id.get("element").is_none());

        let items = &monster["fields"][1];
        assert_eq!(items["array"], true);
        assert_eq!(items["element"]["type"], "Item");
        assert_eq!(items["element"]["declared"], true);
    }
}
