//! Build a radar from a local CSV file and print its structure.
//!
//! ```bash
//! cargo run --example csv_radar_demo -- path/to/radar.csv
//! ```

use clap::Parser;

use techradar::pipeline;
use techradar::source::{SourceContext, SourceDescriptor};
use techradar::transport::fs::LocalFiles;
use techradar::transport::{InMemoryDocuments, InMemoryProtectedDocuments, StaticAuthorization};
use techradar::FailureKind;

#[derive(Parser)]
#[command(about = "Assemble a technology radar from a CSV file")]
struct Args {
    /// Path to a radar CSV file (name,ring,quadrant,isNew,description).
    csv: String,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    // Spreadsheet transports are unused on the CSV path but the context
    // carries the full capability bundle.
    let documents = InMemoryDocuments::new();
    let protected = InMemoryProtectedDocuments::new();
    let auth = StaticAuthorization::new("demo@example.com", "unused");
    let files = LocalFiles;
    let context = SourceContext::new(&documents, &protected, &auth, &files);

    let descriptor = SourceDescriptor::CsvFile { location: args.csv };
    match pipeline::build(&descriptor, &context) {
        Ok(output) => {
            println!("{}", output.title);
            println!(
                "{} entries, {} quadrants, {} rings",
                output.radar.entry_count(),
                output.radar.quadrants.len(),
                output.radar.rings.len()
            );
            for quadrant in &output.radar.quadrants {
                println!("\n{}", quadrant.name);
                for entry in &quadrant.entries {
                    let ring = output.radar.ring(entry.ring);
                    let marker = if entry.is_new { " (new)" } else { "" };
                    println!("  [{}] {}{}", ring.name, entry.name, marker);
                }
            }
        }
        Err(error) => {
            let failure = FailureKind::classify(&error);
            eprintln!("{}", failure.user_message());
            eprintln!("{}", failure.guidance());
            std::process::exit(1);
        }
    }
}
