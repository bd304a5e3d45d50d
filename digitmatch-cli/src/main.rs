use clap::Parser;
use digitmatch::{read_cell_file, Classification, Classifier, DigitMatchError, Thresholds};
use serde::Serialize;
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Thresholds arrive in percent on the command line and are converted to
/// fractions before validation.
const PERCENT: f64 = 100.0;

#[derive(Parser, Debug)]
#[command(author, version, about = "Classify one scanned grid cell as blank or a digit 1-9")]
struct Cli {
    /// Path to the binary cell file (little-endian u32 width and height,
    /// then width*height pixel bytes).
    cell: PathBuf,
    /// Ten acceptance thresholds in percent: blank, then digits 1 through 9.
    #[arg(value_name = "PERCENT", num_args = 10)]
    thresholds: Vec<f64>,
    /// Write the report to this file instead of stdout.
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
    /// Emit a JSON record instead of the text report.
    #[arg(long)]
    json: bool,
    /// Scan the nine digit glyphs in parallel.
    #[arg(long)]
    parallel: bool,
    /// Enable tracing output for performance profiling.
    #[arg(long)]
    trace: bool,
}

#[derive(Debug, Serialize)]
struct Report {
    label: u8,
    confidence: f64,
}

impl From<Classification> for Report {
    fn from(value: Classification) -> Self {
        Self {
            label: value.label,
            confidence: value.confidence,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.trace {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive("digitmatch=info".parse()?),
            )
            .with_target(false)
            .init();
    }

    let percents: [f64; 10] = cli
        .thresholds
        .try_into()
        .map_err(|_| "expected exactly ten threshold values")?;
    let thresholds = Thresholds::new(percents.map(|p| p / PERCENT))?;

    let cell = read_cell_file(&cli.cell)?;
    let classifier = Classifier::new(thresholds).with_parallel(cli.parallel);
    let result = classifier.classify(&cell);

    let report = if cli.json {
        let mut json = serde_json::to_string_pretty(&Report::from(result))?;
        json.push('\n');
        json
    } else {
        format!("d:'{}', {:.4}% \n", result.label, PERCENT * result.confidence)
    };

    match cli.output {
        Some(path) => {
            fs::write(&path, report).map_err(|err| DigitMatchError::ResourceUnavailable {
                context: "report sink",
                reason: err.to_string(),
            })?
        }
        None => print!("{report}"),
    }

    Ok(())
}
