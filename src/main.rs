use clap::Parser;
use imgverify::report::{self, SourceReport};
use imgverify::{IMAGE_DIR, SOURCES, extract, reconcile, scanner};
use std::collections::BTreeSet;
use std::path::Path;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "imgverify",
    version = imgverify::VERSION,
    about = "Cross-checks product image references against assets on disk",
    long_about = "Verifies that the product images referenced by the application's \
                  source files are consistent with the image files present under \
                  public/images/products, reporting missing and unused images"
)]
struct Cli {
    /// Show verbose diagnostics on stderr
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Suppress diagnostics on stderr
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(&cli);

    // Advisory tool: findings and errors are report text, never a non-zero
    // exit status.
    run();
}

/// Routes tracing diagnostics to stderr so the stdout report stays
/// byte-identical across runs. `RUST_LOG` overrides the flag-derived level.
fn init_tracing(cli: &Cli) {
    let default_filter = if cli.verbose {
        "imgverify=debug"
    } else if cli.quiet {
        "off"
    } else {
        "imgverify=warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// The single linear pass: scan, extract, reconcile, report.
fn run() {
    report::print_banner();

    let physical = match scanner::scan_physical_images(Path::new(IMAGE_DIR)) {
        Ok(images) => {
            report::print_physical(&images);
            images
        }
        Err(err) => {
            report::print_physical_error(&err.to_string());
            BTreeSet::new()
        }
    };

    report::print_extraction_header();

    let mut scans = Vec::with_capacity(SOURCES.len());
    for spec in &SOURCES {
        let scan = match extract::extract_references(Path::new(spec.path), spec.pattern) {
            Ok(references) => SourceReport {
                references,
                error: None,
            },
            Err(err) => {
                debug!(path = spec.path, "extraction failed");
                SourceReport {
                    references: Vec::new(),
                    error: Some(format!("{err:#}")),
                }
            }
        };
        report::print_source(spec, &scan, &physical);
        scans.push(scan);
    }

    let references: Vec<&[String]> = scans.iter().map(|scan| scan.references.as_slice()).collect();
    let recon = reconcile::reconcile(&references, &physical);
    report::print_consistency(&recon);

    let sources: Vec<_> = SOURCES.iter().zip(&scans).collect();
    report::print_summary(&physical, &sources, &recon);
}
