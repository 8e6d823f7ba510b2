use clap::Parser;
use listing_cleaner::cli::Args;
use std::path::Path;

pub use listing_lib::test_utils::JOB_LISTING_CSV;

/// Parse CLI arguments the way the binary does, with input and output inside `dir`
#[allow(dead_code)]
pub fn args_for(dir: &Path, input: &str, extra: &[&str]) -> Args {
    let input_path = dir.join(input);
    let output_path = dir.join("cleaned_data.csv");
    let mut argv = vec![
        "listing-cleaner".to_string(),
        "--input-file".to_string(),
        input_path.display().to_string(),
        "--output-file".to_string(),
        output_path.display().to_string(),
    ];
    argv.extend(extra.iter().map(|arg| arg.to_string()));
    Args::try_parse_from(argv).unwrap()
}

/// Write `content` to `name` inside `dir`
#[allow(dead_code)]
pub fn write_input(dir: &Path, name: &str, content: &str) {
    std::fs::write(dir.join(name), content).unwrap();
}
