use clap::{Args, Parser, Subcommand, ValueEnum};
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use brine_fbs::extract_to_json;
use brine_fbs_compiler::error::FbsError;
use brine_fbs_compiler::{
    extract_with, generate, CsRenderer, ExtractOptions, GoRenderer, NamespaceKey, ParseMode,
    Renderer, SymbolScope, TypeMap,
};

#[derive(Parser)]
#[command(name = "bfbs")]
#[command(about = "Extract records from .fbs schema directories and generate Go/C# models", long_about = None)]
struct Cli {
    /// Log at debug level (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the resolved IR of a schema directory as JSON
    Extract {
        #[command(flatten)]
        schema: SchemaArgs,

        /// Write the JSON here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Generate one model file per record under `<output>/<lang>/<namespace>/`
    Generate {
        #[command(flatten)]
        schema: SchemaArgs,

        /// Output root directory
        #[arg(short, long, default_value = "output")]
        output: PathBuf,

        /// Root package / namespace prefix passed to the renderers
        #[arg(short, long, default_value = "")]
        package: String,

        /// Target languages
        #[arg(short, long, value_delimiter = ',', default_value = "go,cs")]
        lang: Vec<String>,

        /// JSON type maps replacing the built-in table of the same language
        #[arg(long = "type-map")]
        type_maps: Vec<PathBuf>,
    },
}

#[derive(Args)]
struct SchemaArgs {
    /// Directory containing the schema files
    #[arg(short, long, default_value = ".")]
    dir: PathBuf,

    /// Schema file extension
    #[arg(long, default_value = "fbs")]
    extension: String,

    /// How dotted namespaces become grouping keys
    #[arg(long, value_enum, default_value_t = KeyArg::Last)]
    namespace_key: KeyArg,

    /// Which records count as declared when resolving field types
    #[arg(long, value_enum, default_value_t = ScopeArg::File)]
    symbol_scope: ScopeArg,

    /// Fail on malformed record bodies instead of skipping them
    #[arg(long)]
    strict: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum KeyArg {
    Last,
    Full,
}

#[derive(Clone, Copy, ValueEnum)]
enum ScopeArg {
    File,
    Directory,
}

impl SchemaArgs {
    fn options(&self) -> ExtractOptions {
        ExtractOptions {
            extension:     self.extension.clone(),
            namespace_key: match self.namespace_key {
                KeyArg::Last => NamespaceKey::LastSegment,
                KeyArg::Full => NamespaceKey::FullPath,
            },
            symbol_scope:  match self.symbol_scope {
                ScopeArg::File => SymbolScope::File,
                ScopeArg::Directory => SymbolScope::Directory,
            },
            mode:          if self.strict { ParseMode::Strict } else { ParseMode::Lenient },
        }
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn renderer_for(map: TypeMap) -> Result<Box<dyn Renderer>, FbsError> {
    match map.language.as_str() {
        "go" => Ok(Box::new(GoRenderer::new(map))),
        "cs" | "c#" | "csharp" => Ok(Box::new(CsRenderer::new(map))),
        other => Err(FbsError::TypeMapError(format!("no renderer for language {:?}", other))),
    }
}

/// Built-in language name a type map belongs to (`c#` and `csharp` fold into `cs`).
fn canonical_language(lang: &str) -> Option<String> {
    TypeMap::builtin(lang).map(|m| m.language)
}

/// Every `--type-map` must replace the table of a requested built-in language;
/// anything else is an error rather than silently ignored.
fn build_renderers(langs: &[String], type_maps: &[PathBuf]) -> Result<Vec<Box<dyn Renderer>>, FbsError> {
    let mut builtins: Vec<TypeMap> = Vec::new();
    for lang in langs {
        let lang = lang.trim().to_lowercase();
        if lang.is_empty() {
            continue;
        }
        let builtin = TypeMap::builtin(&lang)
            .ok_or_else(|| FbsError::TypeMapError(format!("unsupported language {:?}", lang)))?;
        if !builtins.iter().any(|b| b.language == builtin.language) {
            builtins.push(builtin);
        }
    }

    let mut overrides: Vec<TypeMap> = Vec::new();
    for path in type_maps {
        let map = TypeMap::from_json_file(path)?;
        let target = canonical_language(&map.language);
        if !builtins.iter().any(|b| Some(&b.language) == target.as_ref()) {
            return Err(FbsError::TypeMapError(format!(
                "type map {} targets language {:?}, which is not one of the requested languages",
                path.display(),
                map.language
            )));
        }
        overrides.push(map);
    }

    builtins
        .into_iter()
        .map(|builtin| {
            let map = overrides
                .iter()
                .find(|m| canonical_language(&m.language).as_deref() == Some(builtin.language.as_str()))
                .cloned()
                .unwrap_or(builtin);
            renderer_for(map)
        })
        .collect()
}

fn write_file(path: &Path, contents: &str) -> Result<(), FbsError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| FbsError::io(parent, e))?;
    }
    fs::write(path, contents).map_err(|e| FbsError::io(path, e))
}

fn main() -> Result<(), FbsError> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match &cli.command {
        Commands::Extract { schema, output } => {
            let json = extract_to_json(&schema.dir, &schema.options())?;
            if let Some(out_path) = output {
                write_file(out_path, &json)?;
                tracing::info!("IR written to {}", out_path.display());
            } else {
                println!("{}", json);
            }
            Ok(())
        }

        Commands::Generate { schema, output, package, lang, type_maps } => {
            let renderers = build_renderers(lang, type_maps)?;
            let ir = extract_with(&schema.dir, &schema.options())?;
            tracing::info!(
                "Extracted {} namespace(s) from {}",
                ir.len(),
                schema.dir.display()
            );

            for renderer in &renderers {
                let files = generate(&ir, renderer.as_ref(), package);
                for file in &files {
                    let path = output
                        .join(&file.language)
                        .join(&file.namespace)
                        .join(&file.file_name);
                    write_file(&path, &file.contents)?;
                    tracing::debug!("wrote {}", path.display());
                }
                tracing::info!(
                    "Generated {} {} file(s) under {}",
                    files.len(),
                    renderer.language(),
                    output.join(renderer.language()).display()
                );
            }
            Ok(())
        }
    }
}
