//! CLI tool for building menu deck page models from master menu workbooks.

use anyhow::{Context, Result};
use clap::Parser;
use menudeck_core::{Deck, DeckBuilder, RenderConfig, TextRenderer};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Build slide page models from master menu workbooks.
#[derive(Parser, Debug)]
#[command(name = "menudeck")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input workbook file(s) (.xlsx or .xlsm)
    #[arg(required = true)]
    input: Vec<PathBuf>,

    /// Output directory (default: same as input file)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Background image passed through to the render config
    #[arg(short, long)]
    background: Option<PathBuf>,

    /// Print output to stdout instead of writing to file
    #[arg(short, long)]
    print: bool,

    /// Also write the page model as JSON next to the text preview
    #[arg(long)]
    json: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    if args.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let builder = DeckBuilder::new();
    let config = RenderConfig::new(&builder.geometry, args.background.clone());
    let renderer = TextRenderer::new(&config);

    for input_path in &args.input {
        if args.verbose {
            eprintln!("Processing: {}", input_path.display());
        }

        match process_file(input_path, &args, &builder) {
            Ok(deck) => {
                let output = renderer.render(&deck);
                if args.print {
                    print!("{}", output);
                } else {
                    let stem = builder.output_stem(&deck);
                    let output_path = get_output_path(&stem, input_path, args.output.as_ref())?;
                    write_output(&output_path, &output)?;
                    if args.verbose {
                        eprintln!("Written to: {}", output_path.display());
                    }

                    if args.json {
                        let json_path = output_path.with_extension("json");
                        let json = serde_json::to_string_pretty(&deck)
                            .context("Failed to serialize page model")?;
                        write_output(&json_path, &json)?;
                        if args.verbose {
                            eprintln!("Written to: {}", json_path.display());
                        }
                    }
                }
            }
            Err(e) => {
                eprintln!("Error processing {}: {}", input_path.display(), e);
            }
        }
    }

    Ok(())
}

/// Load one workbook and build its page model.
fn process_file(input_path: &Path, args: &Args, builder: &DeckBuilder) -> Result<Deck> {
    log::debug!("Loading workbook {}", input_path.display());
    let book = menudeck_xlsx::load_workbook(input_path)
        .with_context(|| format!("Failed to load {}", input_path.display()))?;

    if args.verbose {
        eprintln!("  Found {} worksheets", book.sheet_count());
    }

    let deck = builder
        .build(&book)
        .with_context(|| format!("Failed to build deck from {}", input_path.display()))?;

    if args.verbose {
        eprintln!(
            "  Built {} sections over {} pages",
            deck.sections.len(),
            deck.page_count()
        );
    }

    Ok(deck)
}

/// Determine the output path for a built deck.
fn get_output_path(stem: &str, input_path: &Path, output_dir: Option<&PathBuf>) -> Result<PathBuf> {
    let output_filename = format!("{}.txt", stem);

    let output_path = match output_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;
            dir.join(output_filename)
        }
        None => {
            if let Some(parent) = input_path.parent() {
                parent.join(output_filename)
            } else {
                PathBuf::from(output_filename)
            }
        }
    };

    Ok(output_path)
}

/// Write output to a file.
fn write_output(path: &Path, content: &str) -> Result<()> {
    let mut file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;

    file.write_all(content.as_bytes())
        .with_context(|| format!("Failed to write to {}", path.display()))?;

    Ok(())
}
