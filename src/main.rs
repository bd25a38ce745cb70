//! scssdoc — generate documentation from annotated SCSS functions and mixins.
//!
//! Two modes:
//!
//! - **stdin mode**: `scssdoc < _math.scss`
//! - **file mode**: `scssdoc -o docs -f markdown src/*.scss`

use anyhow::{bail, Context, Result};
use clap::Parser;
use scssdoc::model::Document;
use scssdoc::{parser, render};
use std::collections::HashMap;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "scssdoc",
    about = "Generate documentation from annotated SCSS functions and mixins"
)]
struct Cli {
    /// Input files, directories, or glob patterns. If omitted, reads from stdin.
    files: Vec<String>,

    /// Output directory (required when files are given)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Output format: json (default), markdown, html
    #[arg(short = 'f', long, default_value = "json")]
    format: String,

    /// Include items marked `@access private`
    #[arg(long)]
    show_private: bool,

    /// Log each documented declaration (RUST_LOG overrides)
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.files.is_empty() {
        return stdin_mode(&cli);
    }

    file_mode(&cli)
}

/// Log to stderr, filtered by `RUST_LOG` when set.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter = match std::env::var_os("RUST_LOG") {
        Some(_) => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        None => EnvFilter::new(default_level),
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_ansi(false)
        .without_time()
        .with_target(false)
        .init();
}

/// stdin mode: read from stdin, render to stdout.
fn stdin_mode(cli: &Cli) -> Result<()> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("failed to read stdin")?;

    let mut doc = Document {
        source: String::new(),
        items: parser::parse_file(&input),
    };
    filter_items(&mut doc, cli.show_private);

    let renderer = render::create_renderer(&cli.format)?;
    print!("{}", renderer.render(&doc)?);
    Ok(())
}

/// file mode: one output file per documented input file.
fn file_mode(cli: &Cli) -> Result<()> {
    let output_dir = cli
        .output
        .as_deref()
        .context("--output is required when files are given")?;

    // Fail on a bad format before touching the filesystem
    let renderer = render::create_renderer(&cli.format)?;
    let ext = renderer.file_extension();

    fs::create_dir_all(output_dir)
        .with_context(|| format!("failed to create output directory: {}", output_dir.display()))?;

    // Output path -> the input that produced it
    let mut written: HashMap<PathBuf, PathBuf> = HashMap::new();

    for path in expand_globs(&cli.files)? {
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!("skipping {}: {}", path.display(), e);
                continue;
            }
        };

        let mut doc = Document {
            source: derive_output_name(&path),
            items: parser::parse_file(&content),
        };
        filter_items(&mut doc, cli.show_private);
        // Partials with only variables or placeholders produce nothing
        if doc.items.is_empty() {
            tracing::debug!("no documented items in {}", path.display());
            continue;
        }

        let out_path = output_dir.join(format!("{}.{}", doc.source, ext));
        if let Some(prev) = written.get(&out_path) {
            bail!(
                "{} and {} both map to {}",
                prev.display(),
                path.display(),
                out_path.display()
            );
        }
        fs::write(&out_path, renderer.render(&doc)?)
            .with_context(|| format!("failed to write {}", out_path.display()))?;
        tracing::debug!("wrote {}", out_path.display());
        written.insert(out_path, path);
    }

    Ok(())
}

/// File extensions recognized as source files.
const SUPPORTED_EXTENSIONS: &[&str] = &["scss", "sass"];

/// Expand glob patterns into a list of real file paths.
/// Also handles bare directory paths by scanning for supported file types.
fn expand_globs(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for pattern in patterns {
        let path = Path::new(pattern);
        if path.is_file() {
            files.push(path.to_path_buf());
            continue;
        }
        // Directories are scanned non-recursively
        if path.is_dir() {
            let entries = fs::read_dir(path)
                .with_context(|| format!("failed to read directory: {}", path.display()))?;
            for entry in entries.flatten() {
                let p = entry.path();
                if p.is_file() && has_supported_extension(&p) {
                    files.push(p);
                }
            }
            continue;
        }
        let matches: Vec<_> = glob::glob(pattern)
            .with_context(|| format!("invalid glob pattern: {}", pattern))?
            .filter_map(|r| r.ok())
            .filter(|p| p.is_file())
            .collect();
        if matches.is_empty() {
            tracing::warn!("no files matched: {}", pattern);
        }
        files.extend(matches);
    }
    // Sort for deterministic output
    files.sort();
    files.dedup();
    Ok(files)
}

fn has_supported_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| SUPPORTED_EXTENSIONS.contains(&ext))
}

/// Derive the output file name (without extension) from a source path.
/// "scss/_math.scss" → "math", "mixins.sass" → "mixins"
fn derive_output_name(path: &Path) -> String {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    // Sass partials carry a leading underscore
    match stem.strip_prefix('_') {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => stem,
    }
}

/// Drop `@access private` items unless --show-private was given.
fn filter_items(doc: &mut Document, show_private: bool) {
    if show_private {
        return;
    }
    doc.items.retain(|item| !item.is_private());
}
