// reset; cargo run -- --input-file "./data/Pet Project.csv" --output-file cleaned_data.csv
// reset; cargo run -- -i ./data/listings.csv --delimiter ";" --rule-set base -vv

use clap::Parser;
use listing_cleaner::{
    cli::{Args, run},
    logging::init_logging,
};
use listing_lib::ERRORS_LOG_FILE;

fn main() {
    let arguments = Args::parse();

    if let Err(e) = init_logging(arguments.verbose) {
        eprintln!("❌ {e}");
    }

    match run(&arguments) {
        Ok(report) => {
            println!(
                "✅ Normalized {} rows, {} cells changed ({} rules)",
                report.rows,
                report.total_changed(),
                report.rule_set
            );
            println!("✅ CSV file created: {}", arguments.output_file.display());
        }
        Err(e) => {
            eprintln!("❌ Normalization failed with error: {e:#}");
            eprintln!("❌ Check {} for details.", ERRORS_LOG_FILE);
            std::process::exit(1);
        }
    }
}
