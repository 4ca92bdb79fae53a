//! Subcommand implementations.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

use anyhow::{Context, Result, bail};
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, Table};
use tracing::{info, warn};

use caps_model::{CaseBundle, Drug};
use caps_report::{write_case_listing, write_case_listing_to_path};
use caps_store::CaseStore;
use caps_validate::{DrugUsePolicy, ValidationOptions, validate_bundle};

use crate::cli::{ExportArgs, ValidateArgs};

fn load_bundle(path: &Path) -> Result<CaseBundle> {
    let file = File::open(path).with_context(|| format!("open bundle: {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parse bundle: {}", path.display()))
}

fn options_with_policy(propagate_drug_use: bool) -> ValidationOptions {
    let policy = if propagate_drug_use {
        DrugUsePolicy::Propagate
    } else {
        DrugUsePolicy::Legacy
    };
    ValidationOptions::default().with_drug_use_policy(policy)
}

/// Validate each bundle and print its issues. Returns true when any bundle
/// was rejected.
pub fn run_validate(args: &ValidateArgs) -> Result<bool> {
    let options = options_with_policy(args.propagate_drug_use);
    let mut any_rejected = false;
    for path in &args.bundles {
        let mut bundle = load_bundle(path)?;
        let report = validate_bundle(&mut bundle, &options);
        if report.is_clean() {
            info!(bundle = %path.display(), "bundle is valid");
            println!("{}: ok", path.display());
        } else {
            any_rejected = true;
            warn!(bundle = %path.display(), issues = report.issue_count(), "bundle rejected");
            println!("{}: {} issue(s)", path.display(), report.issue_count());
            for issue in &report.issues {
                println!("  {issue}");
            }
        }
    }
    Ok(any_rejected)
}

/// Load every bundle into a store and write the case listing.
pub fn run_export(args: &ExportArgs) -> Result<()> {
    let mut store = CaseStore::with_options(options_with_policy(args.propagate_drug_use));
    for path in &args.bundles {
        let bundle = load_bundle(path)?;
        if let Err(error) = store.create(bundle) {
            let details: Vec<String> = error
                .issues()
                .iter()
                .map(|issue| issue.to_string())
                .collect();
            bail!(
                "bundle {} was rejected:\n  {}",
                path.display(),
                details.join("\n  ")
            );
        }
    }
    let listing = store.list_all();
    match &args.output {
        Some(path) => {
            write_case_listing_to_path(&listing, path)?;
            info!(cases = listing.len(), output = %path.display(), "listing written");
        }
        None => write_case_listing(&listing, io::stdout().lock())?,
    }
    Ok(())
}

/// Print the built-in drug dictionary.
pub fn run_drugs() {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec![
        header_cell("Name"),
        header_cell("Alternative names"),
        header_cell("UK classification"),
        header_cell("Type"),
    ]);
    for drug in Drug::seed_list() {
        table.add_row(vec![
            Cell::new(&drug.name),
            Cell::new(drug.alternative_names.as_deref().unwrap_or("-")),
            Cell::new(drug.uk_class.label()),
            Cell::new(drug.kind.label()),
        ]);
    }
    println!("{table}");
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}
