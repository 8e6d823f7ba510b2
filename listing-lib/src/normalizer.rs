use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::columns::{ColumnRename, KEY_SKILLS, canonicalize_columns};
use crate::error::Result;
use crate::skills::reconcile_skills;
use crate::table::Table;
use crate::transforms::{
    format_posting_date, normalize_powerbi, replace_placeholder, title_case_field, trim_field,
};
use crate::utils::write_error_to_log;

/// Which of the two fixed rule sets to run.
///
/// `Base` works on the source column names and only formats dates, fills
/// placeholders and tidies titles, companies and locations. `Extended`
/// canonicalizes the column names first and also reconciles the two skills
/// columns and spells "Power BI" consistently.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum RuleSet {
    Base,
    #[default]
    Extended,
}

impl RuleSet {
    fn columns(self) -> &'static ColumnNames {
        match self {
            RuleSet::Base => &BASE_COLUMNS,
            RuleSet::Extended => &EXTENDED_COLUMNS,
        }
    }
}

impl fmt::Display for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleSet::Base => write!(f, "base"),
            RuleSet::Extended => write!(f, "extended"),
        }
    }
}

struct ColumnNames {
    posting_date: &'static str,
    job_title: &'static str,
    company_name: &'static str,
    location: &'static str,
    employment_type: &'static str,
    job_description: &'static str,
}

const BASE_COLUMNS: ColumnNames = ColumnNames {
    posting_date: "Posting Date",
    job_title: "Job Title",
    company_name: "Company Name",
    location: "Location",
    employment_type: "Employment Type",
    job_description: "Job Description",
};

const EXTENDED_COLUMNS: ColumnNames = ColumnNames {
    posting_date: "posting_date",
    job_title: "job_title",
    company_name: "company_name",
    location: "location",
    employment_type: "employment_type",
    job_description: "job_description",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    CanonicalizeColumns,
    PostingDate,
    Placeholders,
    TitleCase,
    Trim,
    SkillsReconciliation,
    PowerBi,
    EmploymentType,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::CanonicalizeColumns => "canonicalize columns",
            Stage::PostingDate => "posting date",
            Stage::Placeholders => "placeholders",
            Stage::TitleCase => "title case",
            Stage::Trim => "trim",
            Stage::SkillsReconciliation => "skills reconciliation",
            Stage::PowerBi => "PowerBI spelling",
            Stage::EmploymentType => "employment type placeholders",
        };
        f.write_str(name)
    }
}

/// Outcome of one pipeline stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StageSummary {
    pub stage: Stage,
    /// Column the stage ran on; `None` for table-wide stages.
    pub column: Option<String>,
    /// Cells changed, `None` when the stage was skipped for a missing column.
    pub changed: Option<usize>,
}

impl StageSummary {
    pub fn skipped(&self) -> bool {
        self.changed.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizationReport {
    pub rule_set: RuleSet,
    pub rows: usize,
    pub columns: usize,
    pub renames: Vec<ColumnRename>,
    pub stages: Vec<StageSummary>,
}

impl NormalizationReport {
    fn new(rule_set: RuleSet) -> Self {
        NormalizationReport {
            rule_set,
            rows: 0,
            columns: 0,
            renames: Vec::new(),
            stages: Vec::new(),
        }
    }

    fn record(&mut self, stage: Stage, column: Option<&str>, changed: Option<usize>) {
        match (column, changed) {
            (Some(column), None) => warn!(%stage, column, "column missing, stage skipped"),
            (column, Some(changed)) => debug!(%stage, column, changed, "stage applied"),
            (None, None) => {}
        }
        self.stages.push(StageSummary {
            stage,
            column: column.map(str::to_string),
            changed,
        });
    }

    /// Total number of cells changed across all stages.
    pub fn total_changed(&self) -> usize {
        self.stages.iter().filter_map(|s| s.changed).sum()
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn write_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        std::fs::write(path, self.to_json_pretty()?)?;
        Ok(())
    }
}

/// Run the fixed rule pipeline over `table`.
///
/// Stages run in this order, each skipped when its column is missing:
/// 1. canonical column names (extended only)
/// 2. posting date to ISO
/// 3. placeholders to `N/A`, table-wide
/// 4. title case for job title and company name
/// 5. trim location
/// 6. `key_skills` filled from `required_skills` (extended only)
/// 7. PowerBI spelling in job description and key skills (extended only)
/// 8. placeholders to `N/A` again, employment type only
///
/// Stage 8 is a no-op after stage 3; it stays so that narrowing stage 3
/// later does not silently change employment type output.
///
/// The only failure is a column-name collision in stage 1.
pub fn normalize_table(
    mut table: Table,
    rule_set: RuleSet,
) -> Result<(Table, NormalizationReport)> {
    let columns = rule_set.columns();
    let mut report = NormalizationReport::new(rule_set);

    info!(
        %rule_set,
        rows = table.row_count(),
        columns = table.headers().len(),
        "normalizing table"
    );

    if rule_set == RuleSet::Extended {
        report.renames = canonicalize_columns(&mut table)?;
        let renamed = report.renames.len();
        report.record(Stage::CanonicalizeColumns, None, Some(renamed));
    }

    let changed = table.map_column(columns.posting_date, |cell| {
        Some(format_posting_date(cell))
    });
    report.record(Stage::PostingDate, Some(columns.posting_date), changed);

    let changed = table.map_cells(|cell| Some(replace_placeholder(cell)));
    report.record(Stage::Placeholders, None, Some(changed));

    for column in [columns.job_title, columns.company_name] {
        let changed = table.map_column(column, |cell| Some(title_case_field(cell)));
        report.record(Stage::TitleCase, Some(column), changed);
    }

    let changed = table.map_column(columns.location, |cell| Some(trim_field(cell)));
    report.record(Stage::Trim, Some(columns.location), changed);

    if rule_set == RuleSet::Extended {
        let changed = reconcile_skills(&mut table);
        report.record(Stage::SkillsReconciliation, Some(KEY_SKILLS), changed);

        for column in [columns.job_description, KEY_SKILLS] {
            let changed = table.map_column(column, |cell| Some(normalize_powerbi(cell)));
            report.record(Stage::PowerBi, Some(column), changed);
        }
    }

    let changed = table.map_column(columns.employment_type, |cell| {
        Some(replace_placeholder(cell))
    });
    report.record(Stage::EmploymentType, Some(columns.employment_type), changed);

    report.rows = table.row_count();
    report.columns = table.headers().len();
    info!(
        %rule_set,
        rows = report.rows,
        changed = report.total_changed(),
        "normalization finished"
    );

    Ok((table, report))
}

pub struct RecordNormalizerBuilder {
    input_path: PathBuf,
    rule_set: RuleSet,
    delimiter: u8,
}

impl RecordNormalizerBuilder {
    /// Create a new RecordNormalizerBuilder
    ///
    /// # Arguments
    /// * `input_path` - Path to the delimited input file
    pub fn new<P: AsRef<Path>>(input_path: P) -> Self {
        RecordNormalizerBuilder {
            input_path: input_path.as_ref().to_path_buf(),
            rule_set: RuleSet::default(),
            delimiter: b',',
        }
    }

    pub fn rule_set(mut self, rule_set: RuleSet) -> Self {
        self.rule_set = rule_set;
        self
    }

    pub fn delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Build the RecordNormalizer, loading the input table during construction
    ///
    /// Any load failure is appended to the errors log before it is returned.
    pub fn build(self) -> Result<RecordNormalizer> {
        let table = Table::from_csv_path(&self.input_path, self.delimiter).inspect_err(|e| {
            write_error_to_log(
                "Input Load Error",
                &format!("{}: {e}", self.input_path.display()),
            )
        })?;
        info!(
            path = %self.input_path.display(),
            rows = table.row_count(),
            "input loaded"
        );

        Ok(RecordNormalizer {
            rule_set: self.rule_set,
            delimiter: self.delimiter,
            table,
            report: None,
        })
    }
}

/// A loaded table plus the rule set to run over it.
pub struct RecordNormalizer {
    rule_set: RuleSet,
    delimiter: u8,
    table: Table,
    report: Option<NormalizationReport>,
}

impl RecordNormalizer {
    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Report of the last [`normalize`](Self::normalize) call, if any
    pub fn report(&self) -> Option<&NormalizationReport> {
        self.report.as_ref()
    }

    /// Run the pipeline over the loaded table.
    ///
    /// On error the loaded table is gone; the run is meant to abort.
    pub fn normalize(&mut self) -> Result<&NormalizationReport> {
        let table = std::mem::take(&mut self.table);
        let (table, report) = normalize_table(table, self.rule_set)
            .inspect_err(|e| write_error_to_log("Normalization Error", &e.to_string()))?;
        self.table = table;
        Ok(&*self.report.insert(report))
    }

    /// Persist the current table with the same delimiter it was read with.
    pub fn export_to_csv<P: AsRef<Path>>(&self, csv_path: P) -> Result<()> {
        let csv_path = csv_path.as_ref();
        self.table
            .write_csv_path(csv_path, self.delimiter)
            .inspect_err(|e| {
                write_error_to_log(
                    "Output Write Error",
                    &format!("{}: {e}", csv_path.display()),
                )
            })
    }
}
