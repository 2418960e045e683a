//! CLI binary for img2pdf.
//!
//! A thin shim over the library crate that maps CLI flags to [Config] and
//! prints a line per page as the document is filled.

use anyhow::{bail, Result};
use clap::Parser;
use img2pdf::{convert, pagesize, Config, FillProgress, Img2PdfError, Padding};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "img2pdf", version, about = "Convert a directory of images into a PDF, one image per page")]
struct Cli {
    /// Directory holding the images (not searched recursively)
    #[arg(short, long, default_value = "imgSource")]
    source: PathBuf,

    /// Where to write the PDF
    #[arg(short, long, default_value = "pdfTarget/my_doc.pdf")]
    output: PathBuf,

    /// Paper size, e.g. letter, a4, a4-landscape
    #[arg(long, default_value = "letter", value_parser = parse_page_size)]
    page_size: pagesize::PageSize,

    /// Space kept clear on the left and right of each page, in points
    #[arg(long, default_value_t = 30.0)]
    padding_x: f32,

    /// Space kept clear on the top and bottom of each page, in points
    #[arg(long, default_value_t = 30.0)]
    padding_y: f32,

    /// Log progress details to stderr (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn parse_page_size(name: &str) -> Result<pagesize::PageSize, String> {
    pagesize::by_name(name).ok_or_else(|| {
        format!(
            "unknown page size '{name}', expected one of: {}",
            pagesize::NAMES.join(", ")
        )
    })
}

/// Prints the same plain progress lines the tool always has
struct ConsoleProgress;

impl FillProgress for ConsoleProgress {
    fn on_document_created(&self, _path: &Path, _page_count: usize) {
        println!("PDF created");
    }

    fn on_image_inserted(&self, _page_index: usize, _path: &Path) {
        println!("Image inserted");
    }

    fn on_image_skipped(&self, page_index: usize, path: &Path, error: &Img2PdfError) {
        eprintln!(
            "Skipped {} (page {}): {error}",
            path.display(),
            page_index + 1
        );
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::default()
        .source_dir(cli.source)
        .target_file(cli.output)
        .page_size(cli.page_size)
        .padding(Padding::symmetric(cli.padding_x, cli.padding_y));

    let conversion = match convert(&config, &ConsoleProgress) {
        Ok(conversion) => conversion,
        Err(Img2PdfError::EmptyInput { .. }) => {
            println!("PDF create error, no images!");
            std::process::exit(1);
        }
        Err(e) => bail!(e),
    };

    if !conversion.saved() {
        eprintln!(
            "{} was not saved; see the log above",
            config.target_file.display()
        );
    }

    Ok(())
}
