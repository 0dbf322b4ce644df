mod scan;
mod split;

use anyhow::{Context, Result};
use booklet_impose::BookletOptions;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bklt", about = "Booklet imposition for scanned page images", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Split two-page spreads into single page images
    Split {
        /// Directory containing the images
        input: PathBuf,
    },

    /// Build front and back booklet PDFs from a directory of page images
    Build {
        /// Directory containing the images
        input: PathBuf,

        /// Number of blank pages to add at the start
        #[arg(short, long, default_value = "0")]
        blanks: usize,
    },
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Split { input } => {
            let split = split::split_spreads(&input)?;
            println!("Split {split} spreads under {}", input.display());
        }

        Commands::Build { input, blanks } => {
            let paths = scan::page_images(&input)
                .with_context(|| format!("scanning {}", input.display()))?;

            let options = BookletOptions {
                leading_blanks: blanks,
                ..Default::default()
            };
            let stats = booklet_impose::calculate_statistics(paths.len(), blanks);

            let build = booklet_impose::build(paths, &options).await?;
            let (back_path, front_path) = booklet_impose::sibling_outputs(&input);
            booklet_impose::save_pdf(build.back, &back_path).await?;
            booklet_impose::save_pdf(build.front, &front_path).await?;

            println!(
                "{} pages (+{} blanks) on {} sheets → {} + {}",
                stats.source_pages,
                stats.leading_blanks + stats.padding_blanks,
                stats.sheets_per_side,
                back_path.display(),
                front_path.display()
            );
        }
    }

    Ok(())
}
