use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Namespace key -> records, in the order they were declared.
pub type Namespaces = BTreeMap<String, Vec<Record>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Table,
    Struct,
}

/// Case variants of one identifier. Renderers read these and never recompute them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameSet {
    pub base:        String,
    pub upper:       String,
    pub lower:       String,
    pub upper_snake: String,
    pub lower_snake: String,
}

/// Schema type syntax: a bare name or a bracketed list of another type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeRef {
    Named(String),
    Array(Box<TypeRef>),
}

impl TypeRef {
    /// Splits `[Inner]` wrappers off a raw type string. Inner text is taken as is.
    pub fn parse(type_name: &str) -> TypeRef {
        match type_name
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
        {
            Some(inner) => TypeRef::Array(Box::new(TypeRef::parse(inner))),
            None => TypeRef::Named(type_name.to_string()),
        }
    }

    pub fn is_array(&self) -> bool {
        matches!(self, TypeRef::Array(_))
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeRef::Named(name) => f.write_str(name),
            TypeRef::Array(inner) => write!(f, "[{}]", inner),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeAttributes {
    pub primitive: bool,
    pub array:     bool,
    pub string:    bool,
    pub offset:    bool,
    pub declared:  bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub element:   Option<Box<ElementType>>,
}

/// The unwrapped element of an array type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ElementType {
    pub name:      NameSet,
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(flatten)]
    pub attrs:     TypeAttributes,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Field {
    pub name:      NameSet,
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(flatten)]
    pub attrs:     TypeAttributes,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    pub kind:   RecordKind,
    pub name:   NameSet,
    pub fields: Vec<Field>,
}

impl Record {
    pub fn field(&self, base: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name.base == base)
    }
}

/// Raw output of the record scanner, before any type resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedFile {
    pub namespace: Option<String>,
    pub records:   Vec<RawRecord>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RawRecord {
    pub kind:   RecordKind,
    pub name:   String,
    pub fields: Vec<RawField>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RawField {
    pub name:     String,
    pub type_ref: TypeRef,
}
