use std::path::PathBuf;

use training::{PackageRecord, Report, Workout, read_package};

/// Sample dump from the tracker vendor manual.
const SAMPLE_PACKAGES: [(&str, &[f64]); 3] = [
    ("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
    ("RUN", &[15000.0, 1.0, 75.0]),
    ("WLK", &[9000.0, 1.0, 75.0, 180.0]),
];

#[derive(Debug, clap::Parser)]
pub struct Args {
    /// Input csv file with sensor packages. Runs the built-in sample packages when omitted
    #[arg(required = false)]
    pub input: Option<PathBuf>,
    /// Output csv file for report rows. _Note_: will truncate old file if exists
    #[arg(short, long, required = false)]
    pub output: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let Args { input, output } = <Args as clap::Parser>::parse();

    let reports = match input {
        Some(path) => from_csv(&path)?,
        None => from_samples(),
    };

    for report in &reports {
        println!("{report}");
    }

    if let Some(path) = output {
        let mut wrt = csv::Writer::from_path(&path)
            .map_err(|e| format!("Failed to open output file. Reason: {e}"))?;

        for report in &reports {
            wrt.serialize(report)
                .map_err(|e| format!("Failed to write report row. Reason: {e}"))?;
        }

        wrt.flush()?;

        println!("Saved to {}", path.to_string_lossy());
    }

    Ok(())
}

fn from_samples() -> Vec<Report> {
    SAMPLE_PACKAGES
        .into_iter()
        .filter_map(|(code, data)| match read_package(code, data) {
            Ok(workout) => Some(workout.report()),
            Err(e) => {
                tracing::warn!("Skipping {code} package. Reason: {e}");
                None
            }
        })
        .collect()
}

fn from_csv(path: &PathBuf) -> Result<Vec<Report>, Box<dyn std::error::Error>> {
    let mut rdr = csv::Reader::from_path(path)
        .map_err(|e| format!("Failed to open input file. Reason: {e}"))?;

    let mut reports = Vec::new();

    for record in rdr.deserialize::<PackageRecord>() {
        let record = match record {
            Ok(record) => record,
            Err(e) => {
                tracing::warn!("Skipping malformed row. Reason: {e}");
                continue;
            }
        };

        let code = record.code;

        match Workout::try_from(record) {
            Ok(workout) => reports.push(workout.report()),
            Err(e) => tracing::warn!("Skipping {code} package. Reason: {e}"),
        }
    }

    Ok(reports)
}
