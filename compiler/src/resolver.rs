use std::collections::HashSet;

use crate::{
    names::name_set,
    types::{ElementType, RawRecord, TypeAttributes, TypeRef},
};

pub const STRING_TYPE: &str = "string";

/// Record names that count as declared while resolving one file (or one
/// directory, see `SymbolScope`). Anything absent is treated as primitive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolPool {
    names: HashSet<String>,
}

impl SymbolPool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: &[RawRecord]) -> Self {
        records.iter().map(|r| r.name.clone()).collect()
    }

    pub fn extend_from_records(&mut self, records: &[RawRecord]) {
        self.names.extend(records.iter().map(|r| r.name.clone()));
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl FromIterator<String> for SymbolPool {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        SymbolPool {
            names: iter.into_iter().collect(),
        }
    }
}

pub fn is_array(type_name: &str) -> bool {
    TypeRef::parse(type_name).is_array()
}

pub fn is_string(type_name: &str) -> bool {
    type_name == STRING_TYPE
}

/// Arrays answer for their element.
pub fn is_primitive(type_name: &str, pool: &SymbolPool) -> bool {
    resolve(&TypeRef::parse(type_name), pool).primitive
}

pub fn attributes(type_name: &str, pool: &SymbolPool) -> TypeAttributes {
    resolve(&TypeRef::parse(type_name), pool)
}

pub fn resolve(type_ref: &TypeRef, pool: &SymbolPool) -> TypeAttributes {
    match type_ref {
        TypeRef::Named(name) => {
            let primitive = !pool.contains(name);
            let string = is_string(name);
            TypeAttributes {
                primitive,
                array:    false,
                string,
                offset:   string || !primitive,
                declared: !primitive,
                element:  None,
            }
        }
        TypeRef::Array(inner) => {
            let inner_attrs = resolve(inner, pool);
            let inner_name = inner.to_string();
            TypeAttributes {
                primitive: inner_attrs.primitive,
                array:     true,
                string:    false,
                offset:    true,
                declared:  !inner_attrs.primitive,
                element:   Some(Box::new(ElementType {
                    name:      name_set(&inner_name),
                    type_name: inner_name,
                    attrs:     inner_attrs,
                })),
            }
        }
    }
}
