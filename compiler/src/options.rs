/// How a dotted `namespace a.b.c;` declaration becomes a grouping key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NamespaceKey {
    /// `a.b.c` groups under `c`.
    #[default]
    LastSegment,
    /// `a.b.c` groups under `a.b.c`.
    FullPath,
}

impl NamespaceKey {
    pub fn key(&self, namespace: &str) -> String {
        match self {
            NamespaceKey::FullPath => namespace.to_string(),
            NamespaceKey::LastSegment => namespace
                .rsplit('.')
                .next()
                .unwrap_or(namespace)
                .to_string(),
        }
    }
}

/// Which record names count as "declared" when classifying field types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SymbolScope {
    /// Only records declared in the same file.
    #[default]
    File,
    /// Records declared in any schema file of the directory.
    Directory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    /// Malformed fields and unterminated blocks are dropped.
    #[default]
    Lenient,
    /// Malformed fields and unterminated blocks are parse errors.
    Strict,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractOptions {
    /// File extension without the dot.
    pub extension:     String,
    pub namespace_key: NamespaceKey,
    pub symbol_scope:  SymbolScope,
    pub mode:          ParseMode,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        ExtractOptions {
            extension:     "fbs".to_string(),
            namespace_key: NamespaceKey::default(),
            symbol_scope:  SymbolScope::default(),
            mode:          ParseMode::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_namespace_key_policies() {
        assert_eq!(NamespaceKey::LastSegment.key("Foo.Bar"), "Bar");
        assert_eq!(NamespaceKey::FullPath.key("Foo.Bar"), "Foo.Bar");
        assert_eq!(NamespaceKey::LastSegment.key("Game"), "Game");
    }

    #[test]
    fn test_default_options() {
        let opts = ExtractOptions::default();
        assert_eq!(opts.extension, "fbs");
        assert_eq!(opts.namespace_key, NamespaceKey::LastSegment);
        assert_eq!(opts.symbol_scope, SymbolScope::File);
        assert_eq!(opts.mode, ParseMode::Lenient);
    }
}
