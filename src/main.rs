use anyhow::{bail, Context, Result};
use clap::Parser;
use clap::builder::PossibleValuesParser;
use cpp_functions::language::SUPPORTED_LANGUAGES;
use cpp_functions::output::{write_records, OutputFormat};
use cpp_functions::ExtractorManager;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "cpp-functions",
    version,
    about = "List the function definitions of C and C++ source files",
    long_about = "Parses C and C++ files with tree-sitter and prints one record per function\n\
        definition and function-like macro: name, 1-based line span, enclosing class,\n\
        enclosing namespaces and qualifiers.\n\n\
        Examples:\n  \
        cpp-functions -f src/widget.cpp\n  \
        cpp-functions -g 'src/**/*.cc' -g 'include/**/*.h' --format json"
)]
struct Cli {
    /// C/C++ file to analyze (repeatable)
    #[arg(short, long = "file", value_name = "PATH")]
    files: Vec<PathBuf>,

    /// Glob pattern selecting files to analyze (repeatable)
    #[arg(short, long = "glob", value_name = "PATTERN")]
    globs: Vec<String>,

    /// Grammar to use instead of detecting by extension
    #[arg(long, value_parser = PossibleValuesParser::new(SUPPORTED_LANGUAGES))]
    language: Option<String>,

    /// Output format (every record, including the last, ends with a newline)
    #[arg(long, value_enum, default_value_t = OutputFormat::Jsonl)]
    format: OutputFormat,

    /// Worker threads for batch extraction (default: one per core)
    #[arg(long)]
    threads: Option<usize>,

    /// Enable verbose logging (set log level to debug)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    if let Some(threads) = cli.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("failed to configure worker threads")?;
    }

    let paths = collect_paths(&cli.files, &cli.globs)?;
    if paths.is_empty() {
        bail!("no input files: pass --file or --glob");
    }

    let missing: Vec<&PathBuf> = paths.iter().filter(|path| !path.is_file()).collect();
    if !missing.is_empty() {
        for path in &missing {
            tracing::error!("C++ file at {} does not exist ...", path.display());
        }
        bail!("{} input file(s) do not exist", missing.len());
    }

    tracing::debug!("Extracting functions from {} file(s)", paths.len());

    let manager = ExtractorManager::new();
    let results = manager.extract_files_batch(&paths, cli.language.as_deref());

    let mut extracted = Vec::with_capacity(results.len());
    let mut failures = 0usize;
    for result in results {
        match result {
            Ok(file) => extracted.push(file),
            Err(e) => {
                tracing::error!("{e}");
                failures += 1;
            }
        }
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_records(&mut out, &extracted, cli.format, paths.len() > 1)
        .context("failed to write records")?;

    if failures > 0 {
        bail!("{failures} file(s) could not be processed");
    }
    Ok(())
}

/// Explicit files first, then glob matches, without duplicates
fn collect_paths(files: &[PathBuf], globs: &[String]) -> Result<Vec<PathBuf>> {
    let mut paths = files.to_vec();

    for pattern in globs {
        let matches =
            glob::glob(pattern).with_context(|| format!("invalid glob pattern: {pattern}"))?;
        for entry in matches {
            match entry {
                Ok(path) if path.is_file() => paths.push(path),
                Ok(_) => {}
                Err(e) => tracing::warn!("Skipping unreadable glob match: {e}"),
            }
        }
    }

    let mut seen = std::collections::HashSet::new();
    paths.retain(|path| seen.insert(path.clone()));
    Ok(paths)
}
