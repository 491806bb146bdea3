use std::path::PathBuf;
use std::process::ExitCode;

use chrono::NaiveDate;
use clap::Parser;

use nofault_pdf::{RenderOptions, export_claim, load_claims};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Export No-Fault accident claims as paginated PDF documents"
)]
struct Args {
    /// Claim JSON: one claim object or an array of claims
    input: PathBuf,

    /// Directory the claim-{id}.pdf files are written to
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Only export the claim with this id
    #[arg(long)]
    claim: Option<String>,

    /// Brand named in the page footer
    #[arg(long)]
    brand: Option<String>,

    /// Title shown in the header band
    #[arg(long)]
    title: Option<String>,

    /// "Generated on" date (YYYY-MM-DD), defaults to today
    #[arg(long, value_parser = parse_date)]
    date: Option<NaiveDate>,
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| format!("invalid date '{s}': {e}"))
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let mut options = RenderOptions::from_env();
    if let Some(brand) = args.brand {
        options.brand = brand;
    }
    if let Some(title) = args.title {
        options.title = title;
    }
    if let Some(date) = args.date {
        options.generated_on = date;
    }

    let claims = match load_claims(&args.input) {
        Ok(claims) => claims,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let selected: Vec<_> = claims
        .iter()
        .filter(|c| args.claim.as_deref().is_none_or(|id| c.id == id))
        .collect();
    if selected.is_empty() {
        match &args.claim {
            Some(id) => eprintln!("Error: no claim with id '{id}' in {}", args.input.display()),
            None => eprintln!("Error: {} contains no claims", args.input.display()),
        }
        return ExitCode::FAILURE;
    }

    let mut failed = 0usize;
    for claim in selected {
        match export_claim(claim, &args.output_dir, &options) {
            Ok(path) => println!("{}", path.display()),
            Err(e) => {
                log::error!("claim {}: {e}", claim.id);
                eprintln!("Error: claim {}: {e}", claim.id);
                failed += 1;
            }
        }
    }

    if failed > 0 { ExitCode::FAILURE } else { ExitCode::SUCCESS }
}
