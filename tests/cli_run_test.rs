use listing_cleaner::cli::run;
use listing_lib::RuleSet;

mod common;

#[test]
fn test_run_writes_normalized_output() {
    let dir = tempfile::tempdir().unwrap();
    common::write_input(dir.path(), "Pet Project.csv", common::JOB_LISTING_CSV);
    let args = common::args_for(dir.path(), "Pet Project.csv", &[]);

    let report = run(&args).unwrap();

    assert_eq!(report.rule_set, RuleSet::Extended);
    assert_eq!(report.rows, 3);
    let output = std::fs::read_to_string(&args.output_file).unwrap();
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 4, "header plus one line per input row");
    assert_eq!(
        lines[0],
        "job_title,company_name,location,posting_date,employment_type,required_skills,key_skills,job_description"
    );
    assert!(lines[1].starts_with("Senior Software Engineer,Acme Corp,Berlin,2023-12-25,"));
    assert!(lines[3].starts_with("N/A,Initech,Remote,N/A,N/A,"));
}

#[test]
fn test_run_base_rules_with_custom_delimiter_and_report() {
    let dir = tempfile::tempdir().unwrap();
    common::write_input(
        dir.path(),
        "listings.csv",
        "Job Title;Posting Date;Employment Type\nweb developer;03/04/2024;-\n",
    );
    let report_path = dir.path().join("report.json");
    let args = common::args_for(
        dir.path(),
        "listings.csv",
        &[
            "--rule-set",
            "base",
            "--delimiter",
            ";",
            "--report",
            report_path.to_str().unwrap(),
        ],
    );

    run(&args).unwrap();

    assert_eq!(
        std::fs::read_to_string(&args.output_file).unwrap(),
        "Job Title;Posting Date;Employment Type\nWeb Developer;2024-04-03;N/A\n"
    );
    let report: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&report_path).unwrap()).unwrap();
    assert_eq!(report["rule_set"], "base");
    assert_eq!(report["rows"], 1);
}

#[test]
fn test_run_failure_writes_no_output() {
    let dir = tempfile::tempdir().unwrap();
    common::write_input(
        dir.path(),
        "collide.csv",
        "Job Title,job  title\na,b\n",
    );
    let args = common::args_for(dir.path(), "collide.csv", &[]);

    let error = run(&args).unwrap_err();

    assert!(format!("{error:#}").contains("job_title"));
    assert!(!args.output_file.exists());
}

#[test]
fn test_run_missing_input_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let args = common::args_for(dir.path(), "does-not-exist.csv", &[]);

    let error = run(&args).unwrap_err();

    assert!(error.to_string().contains("Failed to load"));
    assert!(!args.output_file.exists());
}

#[test]
fn test_run_report_failure_writes_no_output() {
    let dir = tempfile::tempdir().unwrap();
    common::write_input(dir.path(), "Pet Project.csv", common::JOB_LISTING_CSV);
    let report_path = dir.path().join("missing_dir").join("report.json");
    let args = common::args_for(
        dir.path(),
        "Pet Project.csv",
        &["--report", report_path.to_str().unwrap()],
    );

    let error = run(&args).unwrap_err();

    assert!(error.to_string().contains("Failed to write report"));
    assert!(!args.output_file.exists());
    assert!(!report_path.exists());
}

#[test]
fn test_run_output_failure_writes_no_report() {
    let dir = tempfile::tempdir().unwrap();
    common::write_input(dir.path(), "Pet Project.csv", common::JOB_LISTING_CSV);
    let report_path = dir.path().join("report.json");
    let output_path = dir.path().join("missing_dir").join("cleaned_data.csv");
    let mut args = common::args_for(
        dir.path(),
        "Pet Project.csv",
        &["--report", report_path.to_str().unwrap()],
    );
    args.output_file = output_path.clone();

    assert!(run(&args).is_err());
    assert!(!output_path.exists());
    assert!(!report_path.exists());
    assert!(!listing_lib::utils::temporary_sibling_path(&report_path).exists());
}

#[test]
fn test_run_keeps_headers_differing_only_in_spacing() {
    for rule_set in ["base", "extended"] {
        let dir = tempfile::tempdir().unwrap();
        common::write_input(dir.path(), "spacing.csv", "Location,Location 
Rome,-
");
        let args = common::args_for(dir.path(), "spacing.csv", &["--rule-set", rule_set]);

        let report = run(&args).unwrap();

        assert_eq!(report.columns, 2, "rule set {rule_set}");
        let output = std::fs::read_to_string(&args.output_file).unwrap();
        let expected = if rule_set == "base" {
            "Location,Location \nRome,N/A\n"
        } else {
            "location,location_\nRome,N/A\n"
        };
        assert_eq!(output, expected, "rule set {rule_set}");
    }
}
