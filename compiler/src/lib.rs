//! brine-fbs-compiler
//!
//! This crate implements:
//!  1) A tokenizer + lenient record scanner for FlatBuffers-style `.fbs` files,
//!  2) Type resolution against a per-file (or per-directory) symbol pool,
//!  3) Case variants for every record and field name,
//!  4) Per-target type maps (Go and C# built in, more via JSON),
//!  5) Directory extraction into a namespace -> records IR,
//!  6) Go and C# model rendering behind the `Renderer` trait,
//!  7) Error types (`FbsError`).

pub mod error;
pub mod types;
pub mod utils;
pub mod options;
pub mod tokenizer;
pub mod parser;
pub mod names;
pub mod resolver;
pub mod type_map;
pub mod extractor;
pub mod traits;
pub mod render;
pub mod gen_go;
pub mod gen_cs;

pub use error::FbsError;
pub use extractor::{extract, extract_file_contents, extract_with};
pub use gen_cs::CsRenderer;
pub use gen_go::GoRenderer;
pub use names::name_set;
pub use options::{ExtractOptions, NamespaceKey, ParseMode, SymbolScope};
pub use render::{generate, GeneratedFile, RenderContext};
pub use resolver::{attributes, SymbolPool};
pub use traits::Renderer;
pub use type_map::TypeMap;
pub use types::{ElementType, Field, NameSet, Namespaces, Record, RecordKind, TypeAttributes, TypeRef};
