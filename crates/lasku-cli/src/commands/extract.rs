//! Extract command - run the engine over one invoice text file.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use tracing::{info, warn};

use lasku_core::extract::docnumber;
use lasku_core::{DirectoryRow, PostingExtractor, PostingRecord, ReferenceDirectory};

/// Arguments for the extract command.
#[derive(Args)]
pub struct ExtractArgs {
    /// Invoice text file (raw PDF/OCR text)
    #[arg(required = true)]
    input: PathBuf,

    /// Vendor id the invoice was received from
    #[arg(short = 'V', long)]
    vendor: String,

    /// Location master data CSV (aliases,external_id,approver)
    #[arg(short, long)]
    directory: PathBuf,

    /// Invoice number to stamp on the record; scanned from the text when omitted
    #[arg(short = 'n', long)]
    invoice_number: Option<String>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// Plain text summary
    Text,
}

pub fn run(args: ExtractArgs) -> anyhow::Result<()> {
    let text = fs::read_to_string(&args.input)?;
    info!("read {} chars from {}", text.len(), args.input.display());

    let directory = load_directory(&args.directory)?;
    info!("directory loaded with {} alias tokens", directory.len());

    let extractor = PostingExtractor::new(directory);

    let invoice_number = match args.invoice_number {
        Some(n) => n,
        None => match docnumber::scan(&lasku_core::normalize(&text)) {
            Some(n) => {
                info!("scanned document number {n} from the text");
                n
            }
            None => {
                warn!("no invoice number supplied or found in the text");
                String::new()
            }
        },
    };

    let record = extractor.extract(&text, &args.vendor, &invoice_number)?;

    let rendered = match args.format {
        OutputFormat::Json => serde_json::to_string_pretty(&record)?,
        OutputFormat::Text => render_text(&record),
    };

    match args.output {
        Some(path) => fs::write(path, rendered)?,
        None => println!("{rendered}"),
    }
    Ok(())
}

/// Load the location master data table.
fn load_directory(path: &PathBuf) -> anyhow::Result<ReferenceDirectory> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut rows = Vec::new();
    for row in reader.deserialize::<DirectoryRow>() {
        rows.push(row?);
    }
    if rows.is_empty() {
        anyhow::bail!("directory table {} has no rows", path.display());
    }
    Ok(ReferenceDirectory::from_rows(rows))
}

fn render_text(record: &PostingRecord) -> String {
    let mut out = String::new();
    out.push_str(&format!("invoice:  {}\n", record.invoice_number));
    out.push_str(&format!(
        "location: {}\n",
        record.location.as_deref().unwrap_or("-")
    ));
    out.push_str(&format!(
        "approver: {}\n",
        record.approver.as_deref().unwrap_or("-")
    ));
    for (rate, bucket) in &record.buckets {
        out.push_str(&format!(
            "{:>3}%  net {:>12}  tax {:>12}  total {:>12}\n",
            rate.key(),
            bucket.net.map(|v| v.to_string()).unwrap_or_default(),
            bucket.tax.map(|v| v.to_string()).unwrap_or_default(),
            bucket.total.map(|v| v.to_string()).unwrap_or_default(),
        ));
    }
    out
}
