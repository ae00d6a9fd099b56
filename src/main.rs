//! CLI for paper-report - research paper analysis to DOCX report generator

use chrono::NaiveDate;
use clap::Parser;
use paper_report::{
    FieldRecord, GenerationFailure, LineBreakMode, Locale, ReportGenerator, ReportOptions,
};
use std::io;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input JSON field record path ("-" reads stdin)
    input: PathBuf,

    /// Output DOCX file path (defaults to the record's sanitized filename)
    output: Option<PathBuf>,

    /// Language for the title-page date (default: en)
    #[arg(long, default_value = "en")]
    lang: String,

    /// Report date as YYYY-MM-DD (defaults to today)
    #[arg(long)]
    date: Option<NaiveDate>,

    /// Keep single newlines inside one text node instead of emitting line breaks
    #[arg(long)]
    collapse_line_breaks: bool,

    /// Print the package as base64 to stdout instead of writing a file
    #[arg(long)]
    base64: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let record = if args.input.as_os_str() == "-" {
        FieldRecord::from_reader(io::stdin().lock())
    } else {
        std::fs::File::open(&args.input)
            .map_err(paper_report::Error::from)
            .and_then(|file| FieldRecord::from_reader(io::BufReader::new(file)))
    };
    let record = match record {
        Ok(record) => record,
        Err(e) => {
            eprintln!("Error reading field record: {}", e);
            std::process::exit(1);
        }
    };

    let options = ReportOptions {
        report_date: args.date,
        line_breaks: if args.collapse_line_breaks {
            LineBreakMode::Collapse
        } else {
            LineBreakMode::Explicit
        },
        locale: Locale::from_code(&args.lang),
    };

    let generator = ReportGenerator::new(options);

    match generator.generate(&record) {
        Ok(document) => {
            if args.base64 {
                println!("{}", document.to_base64());
                return;
            }
            let output = args
                .output
                .unwrap_or_else(|| PathBuf::from(&document.filename));
            if let Err(e) = std::fs::write(&output, &document.bytes) {
                eprintln!("Error writing output: {}", e);
                std::process::exit(1);
            }
            println!("Successfully generated {:?}", output);
        }
        Err(e) => {
            let failure = GenerationFailure::from(&e);
            match serde_json::to_string(&failure) {
                Ok(json) => eprintln!("{}", json),
                Err(_) => eprintln!("Error generating document: {}", e),
            }
            std::process::exit(1);
        }
    }
}
