//! Fetch a published spreadsheet over HTTP and print the assembled radar.
//!
//! ```bash
//! cargo run --example public_sheet_demo -- <sheet-id> [--sheet-name "Vol 2"]
//! ```

use clap::Parser;

use techradar::pipeline;
use techradar::source::{SourceContext, SourceDescriptor};
use techradar::transport::{HttpFileTransport, HttpSheetTransport, StaticAuthorization};
use techradar::FailureKind;

#[derive(Parser)]
#[command(about = "Assemble a technology radar from a published spreadsheet")]
struct Args {
    /// Spreadsheet document identifier.
    sheet_id: String,
    /// Tab to read; defaults to the first discovered tab.
    #[arg(long)]
    sheet_name: Option<String>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let sheets = HttpSheetTransport::new();
    let auth = StaticAuthorization::new("demo@example.com", "unused");
    let files = HttpFileTransport::new();
    let context = SourceContext::new(&sheets, &sheets, &auth, &files);

    let descriptor = SourceDescriptor::PublicSheet {
        sheet_id: args.sheet_id,
        sheet_name: args.sheet_name,
    };
    match pipeline::build(&descriptor, &context) {
        Ok(output) => {
            println!("{} ({})", output.title, output.radar.current_sheet_name);
            if !output.radar.alternative_sheet_names.is_empty() {
                println!("tabs: {}", output.radar.alternative_sheet_names.join(", "));
            }
            for quadrant in &output.radar.quadrants {
                println!("\n{} ({} entries)", quadrant.name, quadrant.entries.len());
                for entry in &quadrant.entries {
                    println!("  [{}] {}", output.radar.ring(entry.ring).name, entry.name);
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
