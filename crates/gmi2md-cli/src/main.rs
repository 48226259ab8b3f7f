//! gmi2md: CLI tool to convert Gemtext files to Markdown

use anyhow::{Context, Result};
use clap::Parser;
use rayon::prelude::*;
use std::fs;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use gmi2md_core::{Converter, ConverterOptions};

#[derive(Parser, Debug)]
#[command(name = "gmi2md")]
#[command(about = "Convert Gemtext files to Markdown")]
#[command(version)]
#[command(after_help = "Examples:
  gmi2md < page.gmi > page.md       # Convert stdin to stdout
  gmi2md page.gmi                   # Convert single file to page.md
  gmi2md page.gmi -o out.md         # Convert to specific output file
  gmi2md pages/ -o docs/            # Convert directory
  gmi2md pages/ -o docs/ -j4        # Use 4 parallel jobs")]
struct Cli {
    /// Input Gemtext file or directory (reads stdin when omitted or "-")
    input: Option<PathBuf>,

    /// Output file or directory (defaults to stdout in stdin mode)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Number of parallel jobs (defaults to number of CPUs)
    #[arg(short, long)]
    jobs: Option<usize>,

    /// Process directories recursively
    #[arg(short, long)]
    recursive: bool,

    /// Separate adjacent link lines with blank lines instead of <br>
    #[arg(long)]
    no_line_breaks: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Quiet mode - only show errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let converter = Converter::with_options(ConverterOptions {
        line_breaks: !cli.no_line_breaks,
    });

    match &cli.input {
        None => convert_stdin(&converter, cli.output.as_deref()),
        Some(input) if input.as_os_str() == "-" => {
            convert_stdin(&converter, cli.output.as_deref())
        }
        Some(input) if input.is_file() => convert_file(
            &converter,
            input,
            cli.output.as_deref(),
            cli.verbose,
            cli.quiet,
        ),
        Some(input) if input.is_dir() => convert_directory(
            &converter,
            input,
            cli.output.as_deref(),
            cli.recursive,
            cli.verbose,
            cli.quiet,
            cli.jobs,
        ),
        Some(input) => anyhow::bail!("Input path does not exist: {}", input.display()),
    }
}

/// Convert standard input to standard output (or a file with -o)
fn convert_stdin(converter: &Converter, output: Option<&Path>) -> Result<()> {
    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .context("Failed to read stdin")?;

    let md = converter.convert(&input);

    match output {
        Some(path) => write_output(path, &md)?,
        None => {
            // Verbatim: no trailing newline beyond what convert produced
            std::io::stdout()
                .write_all(md.as_bytes())
                .context("Failed to write stdout")?;
        }
    }

    Ok(())
}

/// Convert a single Gemtext file to Markdown
fn convert_file(
    converter: &Converter,
    input: &Path,
    output: Option<&Path>,
    verbose: bool,
    quiet: bool,
) -> Result<()> {
    let output_path = match output {
        Some(p) => p.to_path_buf(),
        None => input.with_extension("md"),
    };

    if verbose {
        eprintln!(
            "Converting: {} -> {}",
            input.display(),
            output_path.display()
        );
    }

    convert_file_inner(converter, input, &output_path)?;

    if !quiet {
        println!("{}", output_path.display());
    }

    Ok(())
}

/// Convert a directory of Gemtext files
fn convert_directory(
    converter: &Converter,
    input: &Path,
    output: Option<&Path>,
    recursive: bool,
    verbose: bool,
    quiet: bool,
    jobs: Option<usize>,
) -> Result<()> {
    let output_dir = output.unwrap_or(input);

    let files = collect_gmi_files(input, recursive)?;

    if files.is_empty() {
        if !quiet {
            eprintln!("No .gmi files found in {}", input.display());
        }
        return Ok(());
    }

    if verbose {
        eprintln!("Found {} .gmi files", files.len());
    }

    // Configure thread pool if jobs specified
    if let Some(n) = jobs {
        rayon::ThreadPoolBuilder::new()
            .num_threads(n)
            .build_global()
            .ok(); // Ignore error if already initialized
    }

    // Atomic counters for thread-safe progress tracking
    let success = AtomicUsize::new(0);
    let failed = AtomicUsize::new(0);

    // Parallel conversion
    let errors: Vec<_> = files
        .par_iter()
        .filter_map(|file| {
            let relative = file.strip_prefix(input).unwrap_or(file);
            let output_file = output_dir.join(relative).with_extension("md");

            match convert_file_inner(converter, file, &output_file) {
                Ok(()) => {
                    success.fetch_add(1, Ordering::Relaxed);
                    if !quiet {
                        println!("{}", output_file.display());
                    }
                    None
                }
                Err(e) => {
                    failed.fetch_add(1, Ordering::Relaxed);
                    Some((file.clone(), e))
                }
            }
        })
        .collect();

    // Report errors
    for (file, e) in &errors {
        eprintln!("Error converting {}: {}", file.display(), e);
    }

    let success_count = success.load(Ordering::Relaxed);
    let failed_count = failed.load(Ordering::Relaxed);

    if !quiet {
        eprintln!("Converted {} files, {} failed", success_count, failed_count);
    }

    if failed_count > 0 {
        anyhow::bail!("{} files failed to convert", failed_count);
    }

    Ok(())
}

/// Inner conversion function that doesn't print (for parallel use)
fn convert_file_inner(converter: &Converter, input: &Path, output: &Path) -> Result<()> {
    let content = fs::read_to_string(input)
        .with_context(|| format!("Failed to read: {}", input.display()))?;

    let md = converter.convert(&content);

    write_output(output, &md)
}

fn write_output(output: &Path, content: &str) -> Result<()> {
    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
    }

    fs::write(output, content)
        .with_context(|| format!("Failed to write: {}", output.display()))?;

    Ok(())
}

/// Collect all .gmi files in a directory
fn collect_gmi_files(dir: &Path, recursive: bool) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in
        fs::read_dir(dir).with_context(|| format!("Failed to read directory: {}", dir.display()))?
    {
        let entry = entry?;
        let path = entry.path();

        if path.is_file() {
            if let Some(ext) = path.extension() {
                if ext.eq_ignore_ascii_case("gmi") {
                    files.push(path);
                }
            }
        } else if path.is_dir() && recursive {
            files.extend(collect_gmi_files(&path, recursive)?);
        }
    }

    Ok(files)
}
