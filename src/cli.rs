use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use listing_lib::utils::{temporary_sibling_path, write_error_to_log};
use listing_lib::{NormalizationReport, RecordNormalizerBuilder, RuleSet};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "listing-cleaner")]
#[command(about = "A tool to normalize job-listing exports into a canonical CSV")]
#[command(version)]
pub struct Args {
    /// Path to the delimited file to normalize (the first row must hold the column names)
    #[arg(short, long)]
    pub input_file: PathBuf,

    /// Where the normalized file is written. An existing file is replaced only after a successful run
    #[arg(short, long, default_value = "cleaned_data.csv")]
    pub output_file: PathBuf,

    /// Which rule set to apply
    #[arg(long, value_enum, default_value_t = RuleSet::Extended)]
    pub rule_set: RuleSet,

    /// Field delimiter for both input and output
    #[arg(long, default_value = ",", value_parser = parse_delimiter)]
    pub delimiter: u8,

    /// Optional path for a JSON summary of what every stage changed
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace). RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

fn parse_delimiter(value: &str) -> Result<u8, String> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii() => Ok(c as u8),
        _ => Err(format!(
            "The delimiter must be a single ASCII character, got '{value}'"
        )),
    }
}

/// Load, normalize and persist one table, plus the optional report.
/// Neither file is written on failure.
pub fn run(arguments: &Args) -> anyhow::Result<NormalizationReport> {
    let mut normalizer = RecordNormalizerBuilder::new(&arguments.input_file)
        .rule_set(arguments.rule_set)
        .delimiter(arguments.delimiter)
        .build()
        .with_context(|| format!("Failed to load {}", arguments.input_file.display()))?;

    let report = normalizer.normalize()?.clone();

    // The report is staged first and published only once the table is written
    let staged_report = match &arguments.report {
        Some(report_path) => {
            let staged = temporary_sibling_path(report_path);
            if let Err(e) = report.write_json(&staged) {
                let _ = std::fs::remove_file(&staged);
                write_error_to_log(
                    "Report Write Error",
                    &format!("{}: {e}", report_path.display()),
                );
                return Err(anyhow::Error::new(e)
                    .context(format!("Failed to write report {}", report_path.display())));
            }
            Some((staged, report_path))
        }
        None => None,
    };

    if let Err(e) = normalizer.export_to_csv(&arguments.output_file) {
        if let Some((staged, _)) = &staged_report {
            let _ = std::fs::remove_file(staged);
        }
        return Err(anyhow::Error::new(e)
            .context(format!("Failed to write {}", arguments.output_file.display())));
    }
    info!(path = %arguments.output_file.display(), "output written");

    if let Some((staged, report_path)) = staged_report {
        std::fs::rename(&staged, report_path)
            .inspect_err(|e| {
                write_error_to_log(
                    "Report Write Error",
                    &format!("{}: {e}", report_path.display()),
                )
            })
            .with_context(|| format!("Failed to write report {}", report_path.display()))?;
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_delimiter() {
        assert_eq!(parse_delimiter(","), Ok(b','));
        assert_eq!(parse_delimiter("\t"), Ok(b'\t'));
        assert!(parse_delimiter(";;").is_err());
        assert!(parse_delimiter("").is_err());
        assert!(parse_delimiter("§").is_err());
    }

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["listing-cleaner", "-i", "Pet Project.csv"]).unwrap();
        assert_eq!(args.output_file, PathBuf::from("cleaned_data.csv"));
        assert_eq!(args.rule_set, RuleSet::Extended);
        assert_eq!(args.delimiter, b',');
        assert_eq!(args.report, None);
        assert_eq!(args.verbose, 0);
    }

    #[test]
    fn test_rule_set_flag() {
        let args = Args::try_parse_from([
            "listing-cleaner",
            "-i",
            "in.csv",
            "--rule-set",
            "base",
            "-vv",
        ])
        .unwrap();
        assert_eq!(args.rule_set, RuleSet::Base);
        assert_eq!(args.verbose, 2);

        assert!(
            Args::try_parse_from(["listing-cleaner", "-i", "in.csv", "--rule-set", "full"])
                .is_err()
        );
    }
}
