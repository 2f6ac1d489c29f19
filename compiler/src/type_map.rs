use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::{error::FbsError, types::TypeRef};

const GO_SCALARS: [(&str, &str); 12] = [
    ("bool",   "bool"),
    ("byte",   "int8"),
    ("ubyte",  "uint8"),
    ("short",  "int16"),
    ("ushort", "uint16"),
    ("int",    "int32"),
    ("uint",   "uint32"),
    ("long",   "int64"),
    ("ulong",  "uint64"),
    ("float",  "float32"),
    ("double", "float64"),
    ("string", "string"),
];

const CS_SCALARS: [(&str, &str); 12] = [
    ("bool",   "bool"),
    ("byte",   "sbyte"),
    ("ubyte",  "byte"),
    ("short",  "short"),
    ("ushort", "ushort"),
    ("int",    "int"),
    ("uint",   "uint"),
    ("long",   "long"),
    ("ulong",  "ulong"),
    ("float",  "float"),
    ("double", "double"),
    ("string", "string"),
];

const GO_KEYWORDS: [&str; 25] = [
    "break", "case", "chan", "const", "continue", "default", "defer", "else",
    "fallthrough", "for", "func", "go", "goto", "if", "import", "interface",
    "map", "package", "range", "return", "select", "struct", "switch", "type",
    "var",
];

const CS_KEYWORDS: [&str; 32] = [
    "abstract", "base", "bool", "byte", "case", "catch", "checked", "class",
    "const", "default", "delegate", "double", "enum", "event", "explicit",
    "extern", "fixed", "float", "internal", "int", "lock", "long", "namespace",
    "object", "operator", "out", "override", "params", "private", "public",
    "string", "struct",
];

/// Per-target translation of schema type syntax.
///
/// This is data: a new target only needs a new table, which can also be
/// loaded from JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeMap {
    pub language:       String,
    /// Output file extension without the dot.
    pub extension:      String,
    /// List syntax with a single `{}` where the element type goes.
    pub list_format:    String,
    pub scalars:        BTreeMap<String, String>,
    #[serde(default)]
    pub keywords:       Vec<String>,
    /// Applied to identifiers listed in `keywords`, `{}` is the identifier.
    #[serde(default = "default_keyword_escape")]
    pub keyword_escape: String,
}

fn default_keyword_escape() -> String {
    "{}_".to_string()
}

fn table(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

impl TypeMap {
    pub fn go() -> Self {
        TypeMap {
            language:       "go".to_string(),
            extension:      "go".to_string(),
            list_format:    "[]{}".to_string(),
            scalars:        table(&GO_SCALARS),
            keywords:       GO_KEYWORDS.iter().map(|s| s.to_string()).collect(),
            keyword_escape: "{}_".to_string(),
        }
    }

    pub fn csharp() -> Self {
        TypeMap {
            language:       "cs".to_string(),
            extension:      "cs".to_string(),
            list_format:    "List<{}>".to_string(),
            scalars:        table(&CS_SCALARS),
            keywords:       CS_KEYWORDS.iter().map(|s| s.to_string()).collect(),
            keyword_escape: "@{}".to_string(),
        }
    }

    /// Looks up a built-in table by language name.
    pub fn builtin(language: &str) -> Option<Self> {
        match language {
            "go" => Some(Self::go()),
            "cs" | "c#" | "csharp" => Some(Self::csharp()),
            _ => None,
        }
    }

    pub fn from_json_str(text: &str) -> Result<Self, FbsError> {
        let map: TypeMap = serde_json::from_str(text)?;
        map.validate()?;
        Ok(map)
    }

    pub fn from_json_file(path: &Path) -> Result<Self, FbsError> {
        let text = std::fs::read_to_string(path).map_err(|e| FbsError::io(path, e))?;
        Self::from_json_str(&text)
    }

    pub fn validate(&self) -> Result<(), FbsError> {
        if self.list_format.matches("{}").count() != 1 {
            return Err(FbsError::TypeMapError(format!(
                "list_format for {} must contain exactly one \"{{}}\", got {:?}",
                self.language, self.list_format
            )));
        }
        if !self.keyword_escape.contains("{}") {
            return Err(FbsError::TypeMapError(format!(
                "keyword_escape for {} must contain \"{{}}\"",
                self.language
            )));
        }
        if self.language.is_empty() || self.extension.is_empty() {
            return Err(FbsError::TypeMapError("language and extension must be set".to_string()));
        }
        Ok(())
    }

    /// Maps raw schema syntax such as `[long]` to target syntax.
    pub fn map_type(&self, type_name: &str) -> String {
        self.map_type_ref(&TypeRef::parse(type_name))
    }

    /// Names outside the scalar table pass through unchanged.
    pub fn map_type_ref(&self, type_ref: &TypeRef) -> String {
        match type_ref {
            TypeRef::Named(name) => self
                .scalars
                .get(name)
                .cloned()
                .unwrap_or_else(|| name.clone()),
            TypeRef::Array(inner) => self.list_format.replacen("{}", &self.map_type_ref(inner), 1),
        }
    }

    pub fn escape_keyword(&self, ident: &str) -> String {
        if self.keywords.iter().any(|k| k == ident) {
            self.keyword_escape.replacen("{}", ident, 1)
        } else {
            ident.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_go_scalars() {
        let go = TypeMap::go();
        assert_eq!(go.map_type("long"), "int64");
        assert_eq!(go.map_type("ulong"), "uint64");
        assert_eq!(go.map_type("int"), "int32");
        assert_eq!(go.map_type("double"), "float64");
        assert_eq!(go.map_type("float"), "float32");
        assert_eq!(go.map_type("string"), "string");
    }

    #[test]
    fn test_list_wraps_mapped_element() {
        let go = TypeMap::go();
        assert_eq!(go.map_type("[long]"), "[]int64");
        assert_eq!(go.map_type("[long]"), format!("[]{}", go.map_type("long")));

        let cs = TypeMap::csharp();
        assert_eq!(cs.map_type("[long]"), format!("List<{}>", cs.map_type("long")));
        assert_eq!(cs.map_type("[[Item]]"), "List<List<Item>>");
    }

    #[test]
    fn test_declared_names_pass_through() {
        assert_eq!(TypeMap::go().map_type("Monster"), "Monster");
        assert_eq!(TypeMap::csharp().map_type("[Item]"), "List<Item>");
    }

    #[test]
    fn test_keyword_escape() {
        assert_eq!(TypeMap::go().escape_keyword("type"), "type_");
        assert_eq!(TypeMap::csharp().escape_keyword("internal"), "@internal");
        assert_eq!(TypeMap::csharp().escape_keyword("hp"), "hp");
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
            "language": "ts",
            "extension": "ts",
            "list_format": "Array<{}>",
            "scalars": { "int": "number", "string": "string" }
        }"#;
        let ts = TypeMap::from_json_str(json).unwrap();
        assert_eq!(ts.map_type("[int]"), "Array<number>");
        assert_eq!(ts.keyword_escape, "{}_");
        assert!(ts.keywords.is_empty());
    }

    #[test]
    fn test_invalid_list_format() {
        let json = r#"{"language":"x","extension":"x","list_format":"list","scalars":{}}"#;
        assert!(matches!(
            TypeMap::from_json_str(json),
            Err(FbsError::TypeMapError(_))
        ));
    }

    #[test]
    fn test_builtin_lookup() {
        assert_eq!(TypeMap::builtin("c#"), Some(TypeMap::csharp()));
        assert!(TypeMap::builtin("cobol").is_none());
    }
}
