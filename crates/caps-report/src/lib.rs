//! Flat CSV listing of all stored cases.
//!
//! One header row, one row per case, enum codes denormalized to their
//! catalog labels. The listing is the export consumed by the study team;
//! it deliberately carries only the summary flags, not the child detail.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use csv::WriterBuilder;

use caps_model::yes_no;
use caps_store::StoredCase;

/// Column order of the listing, fixed by the downstream consumers.
pub const LISTING_COLUMNS: &[&str] = &[
    "case_id",
    "created_by",
    "created_on",
    "smoking",
    "previous_pregnancy_problem",
    "heart_disease",
    "cardiac_arrest",
    "drug_use",
    "previous_medical_problem",
];

/// Write the case listing to any writer.
pub fn write_case_listing<W: Write>(cases: &[&StoredCase], writer: W) -> Result<()> {
    let mut csv_writer = WriterBuilder::new().from_writer(writer);
    csv_writer
        .write_record(LISTING_COLUMNS)
        .context("write listing header")?;
    for stored in cases {
        let case = &stored.bundle.case;
        let created_by = case.created_by.display_name();
        let created_on = case.created_on.format("%Y-%m-%d %H:%M:%S").to_string();
        csv_writer
            .write_record([
                case.case_id.as_str(),
                created_by.as_str(),
                created_on.as_str(),
                case.smoking.label(),
                case.previous_pregnancy_problem.label(),
                yes_no(case.heart_disease),
                yes_no(case.cardiac_arrest),
                yes_no(case.drug_use),
                yes_no(case.previous_medical_problem),
            ])
            .with_context(|| format!("write listing row for case {}", case.case_id))?;
    }
    csv_writer.flush().context("flush listing")?;
    Ok(())
}

/// Write the case listing to a file path.
pub fn write_case_listing_to_path(cases: &[&StoredCase], path: &Path) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("create listing: {}", path.display()))?;
    write_case_listing(cases, file)
}
