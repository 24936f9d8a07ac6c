//! Motif Mark command-line tool.
//!
//! ```bash
//! motif_mark -f genes.fa -m motifs.txt
//! motif_mark -f genes.fa -m motifs.txt -o figure.svg --layout-json layout.json
//! ```

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use motif_mark::{
    LayoutSettings, annotate,
    input_files::{read_fasta_records, read_motif_list},
};
use motif_mark_render::write_layout_svg;

/// Visualize motifs on sequences as an SVG image. Handles DNA and RNA,
/// several sequences and several motifs, and IUPAC-ambiguous (but not
/// gapped) motifs.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// FASTA file of genes; introns lowercase, exons uppercase
    #[arg(short, long)]
    file: PathBuf,

    /// Text file with one motif per line
    #[arg(short, long)]
    motif: PathBuf,

    /// SVG output path
    #[arg(short, long, default_value = "motif_mark.svg")]
    output: PathBuf,

    /// Also write the layout document as JSON
    #[arg(long)]
    layout_json: Option<PathBuf>,

    /// JSON file overriding layout geometry
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn path_str(path: &Path) -> anyhow::Result<&str> {
    path.to_str()
        .with_context(|| format!("Path is not valid UTF-8: {}", path.display()))
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let settings = match &args.settings {
        Some(path) => LayoutSettings::load_from_path(path_str(path)?)?,
        None => LayoutSettings::default(),
    };
    let records = read_fasta_records(path_str(&args.file)?)?;
    let motifs = read_motif_list(path_str(&args.motif)?)?;

    let doc = annotate(&records, &motifs, &settings)
        .with_context(|| format!("Could not lay out motifs from {}", args.motif.display()))?;

    write_layout_svg(&doc, &args.output)
        .with_context(|| format!("Could not write SVG output {}", args.output.display()))?;
    if let Some(path) = &args.layout_json {
        let text = doc.to_json_pretty()?;
        std::fs::write(path, text)
            .with_context(|| format!("Could not write layout JSON {}", path.display()))?;
        info!("Wrote layout JSON to {}", path.display());
    }

    println!(
        "Motif Mark has generated an output image: File name '{}'",
        args.output.display()
    );
    Ok(())
}
