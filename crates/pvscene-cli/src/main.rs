//! pvscene CLI — convert PVS assembly files into scene-item JSON.

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "pvscene")]
#[command(about = "Flatten CAD assembly files into scene items", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate path ids and transforms for each instance in a file
    /// and write the resulting scene items as JSON
    CreateItems {
        /// Path to the input file
        path: PathBuf,
        /// File format
        #[arg(short, long, value_parser = ["pvs"])]
        format: String,
        /// Path to the output file
        #[arg(short, long, default_value = "items.json")]
        output: PathBuf,
        /// Part/assembly to use as root in the file
        #[arg(long)]
        root: Option<String>,
        /// Metadata property name to use for each part revision's
        /// supplied id; defaults every revision to "1" when omitted
        #[arg(short, long)]
        revision_property: Option<String>,
        /// Print progress details
        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::CreateItems {
            path,
            format,
            output,
            root,
            revision_property,
            verbose,
        } => create_items(
            &path,
            &format,
            &output,
            root.as_deref(),
            revision_property.as_deref(),
            verbose,
        ),
    }
}

fn create_items(
    path: &PathBuf,
    format: &str,
    output: &PathBuf,
    root: Option<&str>,
    revision_property: Option<&str>,
    verbose: bool,
) -> Result<()> {
    if !path.is_file() {
        bail!("'{}' is not a valid file path, exiting", path.display());
    }

    let data = fs::read_to_string(path)
        .with_context(|| format!("Failed to read '{}'", path.display()))?;
    let file = pvscene::PvFile::parse(&data)?;
    if verbose {
        println!("Found {} components.", file.section_structure.components.len());
    }

    let items = pvscene::create_items(&file, root, revision_property)?;
    let json = serde_json::to_string(&items)?;
    fs::write(output, json)
        .with_context(|| format!("Failed to write '{}'", output.display()))?;

    println!(
        "Wrote {} {} item(s) from '{}' to '{}'.",
        items.len(),
        format,
        path.display(),
        output.display()
    );
    Ok(())
}
