use std::fs;
use std::path::{Path, PathBuf};

use crate::{
    error::FbsError,
    names::name_set,
    options::{ExtractOptions, SymbolScope},
    parser::parse_file_contents,
    resolver::{resolve, SymbolPool},
    types::{Field, Namespaces, ParsedFile, RawRecord, Record},
};

/// Extracts every schema file in `dir` with the default options.
pub fn extract(dir: &Path) -> Result<Namespaces, FbsError> {
    extract_with(dir, &ExtractOptions::default())
}

/// Reads every `*.{extension}` file directly inside `dir` (no recursion),
/// resolves its records and groups them by namespace key.
///
/// Files are visited in path order and records sharing a namespace key are
/// appended in that order. Files without a namespace contribute nothing.
pub fn extract_with(dir: &Path, options: &ExtractOptions) -> Result<Namespaces, FbsError> {
    let mut parsed = Vec::new();
    for path in schema_files(dir, &options.extension)? {
        let text = fs::read_to_string(&path).map_err(|e| FbsError::io(&path, e))?;
        let file = parse_file_contents(&text, options.mode)
            .map_err(|e| FbsError::in_schema(&path, e))?;
        tracing::debug!(path = %path.display(), records = file.records.len(), "scanned schema");
        parsed.push((path, file));
    }

    let directory_pool = match options.symbol_scope {
        SymbolScope::File => None,
        SymbolScope::Directory => {
            let mut pool = SymbolPool::new();
            for (_, file) in parsed.iter().filter(|(_, f)| f.namespace.is_some()) {
                pool.extend_from_records(&file.records);
            }
            Some(pool)
        }
    };

    let mut result = Namespaces::new();
    for (path, file) in &parsed {
        let Some(namespace) = &file.namespace else {
            tracing::debug!(path = %path.display(), "no namespace declaration, skipping");
            continue;
        };

        let file_pool;
        let pool = match &directory_pool {
            Some(pool) => pool,
            None => {
                file_pool = SymbolPool::from_records(&file.records);
                &file_pool
            }
        };

        let key = options.namespace_key.key(namespace);
        result
            .entry(key)
            .or_default()
            .extend(file.records.iter().map(|raw| build_record(raw, pool)));
    }

    Ok(result)
}

/// Resolves a single file's text against its own symbol pool.
/// Returns `None` when the text declares no namespace.
pub fn extract_file_contents(
    text: &str,
    options: &ExtractOptions,
) -> Result<Option<(String, Vec<Record>)>, FbsError> {
    let ParsedFile { namespace, records } = parse_file_contents(text, options.mode)?;
    let Some(namespace) = namespace else {
        return Ok(None);
    };
    let pool = SymbolPool::from_records(&records);
    let resolved = records.iter().map(|raw| build_record(raw, &pool)).collect();
    Ok(Some((options.namespace_key.key(&namespace), resolved)))
}

pub fn build_record(raw: &RawRecord, pool: &SymbolPool) -> Record {
    Record {
        kind:   raw.kind,
        name:   name_set(&raw.name),
        fields: raw
            .fields
            .iter()
            .map(|f| Field {
                name:      name_set(&f.name),
                type_name: f.type_ref.to_string(),
                attrs:     resolve(&f.type_ref, pool),
            })
            .collect(),
    }
}

/// Regular files in `dir` with the given extension, sorted by path.
pub fn schema_files(dir: &Path, extension: &str) -> Result<Vec<PathBuf>, FbsError> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| FbsError::io(dir, e))? {
        let path = entry.map_err(|e| FbsError::io(dir, e))?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == extension) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::NamespaceKey;

    #[test]
    fn test_extract_file_contents() {
        let (key, records) = extract_file_contents(
            "namespace Foo.Bar;\ntable Monster { hp:int; items:[Item]; }\ntable Item { id:int; }",
            &ExtractOptions::default(),
        )
        .unwrap()
        .unwrap();
        assert_eq!(key, "Bar");
        assert_eq!(records.len(), 2);
        let items = records[0].field("items").unwrap();
        assert!(items.attrs.array);
        assert!(items.attrs.declared);
        assert_eq!(items.attrs.element.as_ref().unwrap().name.upper, "Item");
    }

    #[test]
    fn test_extract_file_contents_full_path_key() {
        let options = ExtractOptions {
            namespace_key: NamespaceKey::FullPath,
            ..ExtractOptions::default()
        };
        let (key, _) = extract_file_contents("namespace Foo.Bar; table A {}", &options)
            .unwrap()
            .unwrap();
        assert_eq!(key, "Foo.Bar");
    }

    #[test]
    fn test_no_namespace_yields_nothing() {
        let got = extract_file_contents("table A { x:int; }", &ExtractOptions::default()).unwrap();
        assert!(got.is_none());
    }

    #[test]
    fn test_build_record_names_every_identifier() {
        let parsed = parse_file_contents(
            "table playerState { maxHp:int; }",
            crate::options::ParseMode::Lenient,
        )
        .unwrap();
        let record = build_record(&parsed.records[0], &SymbolPool::new());
        assert_eq!(record.name.upper, "PlayerState");
        assert_eq!(record.name.upper_snake, "PLAYER_STATE");
        assert_eq!(record.fields[0].name.lower_snake, "max_hp");
        assert_eq!(record.fields[0].type_name, "int");
    }
}
