//! Minimal CLI: load → (rust | cpp | order)
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use crate::{CompileOptions, Schema, Target};

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// compile Swagger/OpenAPI model definitions into Rust or C++ source
#[derive(Parser, Debug)]
#[command(name = "modelgen")]
pub struct CommandLineInterface {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// emit Rust structs with JSON converters
    Rust(RustOut),
    /// emit C++ classes with nlohmann-json converters
    Cpp(CppOut),
    /// print the emission order, one record per line
    Order(OrderOut),
}

#[derive(Args, Debug, Clone)]
struct InputSettings {
    /// JSON Pointer to the record map (default: /definitions, then /components/schemas)
    #[arg(long)]
    json_pointer: Option<String>,

    /// One or more inputs. May be literal paths or quoted glob patterns
    ///
    /// Records from several documents are merged in the given order.
    #[arg(long, short, num_args = 1.., required = true)]
    input: Vec<String>,
}

#[derive(clap::Parser, Debug)]
struct RustOut {
    #[command(flatten)]
    input_settings: InputSettings,

    /// enclosing module name
    #[arg(long, default_value = "models")]
    namespace: String,

    /// output .rs file (stdout if omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// debugging
    #[arg(long)]
    no_op: bool,
}

#[derive(clap::Parser, Debug)]
struct CppOut {
    #[command(flatten)]
    input_settings: InputSettings,

    /// enclosing namespace
    #[arg(long, default_value = "amber_models")]
    namespace: String,

    /// macro invoked at the end of every class body (e.g. AMBER_DUMP)
    #[arg(long)]
    dump_macro: Option<String>,

    /// output .h file (stdout if omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// debugging
    #[arg(long)]
    no_op: bool,
}

#[derive(clap::Parser, Debug)]
struct OrderOut {
    #[command(flatten)]
    input_settings: InputSettings,

    /// output file (stdout if omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl InputSettings {
    fn load_schema(&self) -> Result<Schema> {
        let source_paths = resolve_file_path_patterns(&self.input)
            .context("failed to resolve input file paths")?;
        let mut schema = Schema::default();
        for source_path in source_paths {
            let source = std::fs::read_to_string(&source_path)
                .with_context(|| format!("failed to read {}", source_path.display()))?;
            let document = Schema::from_document_str(&source, self.json_pointer.as_deref())
                .with_context(|| format!("failed to load {}", source_path.display()))?;
            tracing::debug!(
                path = %source_path.display(),
                records = document.len(),
                "loaded schema document"
            );
            schema.merge(document)?;
        }
        Ok(schema)
    }
}

impl CommandLineInterface {
    pub fn load() -> Self {
        Self::parse()
    }
    pub fn try_load_from<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::try_parse_from(args)
    }
    pub fn run(&self) -> Result<()> {
        match &self.cmd {
            Command::Rust(target) => {
                // debug path
                if target.no_op {
                    eprintln!("{self:#?}");
                    return Ok(());
                }
                let options = CompileOptions {
                    target: Target::Rust,
                    namespace: Some(target.namespace.clone()),
                };
                let schema = target.input_settings.load_schema()?;
                let generated = crate::compile(&schema, &options)?;
                write_output(target.out.as_deref(), &generated.into_string())
            }
            Command::Cpp(target) => {
                // debug path
                if target.no_op {
                    eprintln!("{self:#?}");
                    return Ok(());
                }
                let options = CompileOptions {
                    target: Target::Cpp {
                        dump_macro: target.dump_macro.clone(),
                    },
                    namespace: Some(target.namespace.clone()),
                };
                let schema = target.input_settings.load_schema()?;
                let generated = crate::compile(&schema, &options)?;
                write_output(target.out.as_deref(), &generated.into_string())
            }
            Command::Order(target) => {
                let schema = target.input_settings.load_schema()?;
                let mut listing = String::new();
                for name in crate::graph::emission_order(&schema)? {
                    listing.push_str(&name);
                    listing.push('\n');
                }
                write_output(target.out.as_deref(), &listing)
            }
        }
    }
}

// ————————————————————————————————————————————————————————————————————————————
// INTERNAL HELPERS
// ————————————————————————————————————————————————————————————————————————————

fn write_output(out: Option<&Path>, text: &str) -> Result<()> {
    match out {
        Some(out) => {
            if let Some(parent) = out.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create {}", parent.display()))?;
            }
            std::fs::write(out, text).with_context(|| format!("failed to write {}", out.display()))
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(text.as_bytes())?;
            stdout.flush()?;
            Ok(())
        }
    }
}

fn resolve_file_path_patterns<I>(patterns: I) -> Result<Vec<PathBuf>>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    fn has_glob_chars(s: &str) -> bool {
        // Minimal glob detection for the `glob` crate syntax.
        s.bytes().any(|b| matches!(b, b'*' | b'?' | b'[' | b'{'))
    }

    let mut out = Vec::<PathBuf>::new();

    for raw in patterns {
        let pattern = raw.as_ref();

        if has_glob_chars(pattern) {
            let mut matched_any = false;
            for entry in glob::glob(pattern)? {
                out.push(entry?);
                matched_any = true;
            }
            if !matched_any {
                // explicit glob that matched nothing
                anyhow::bail!("glob pattern matched no files: {pattern}");
            }
        } else {
            out.push(PathBuf::from(pattern));
        }
    }

    Ok(out)
}
