//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "caps",
    version,
    about = "CAPS survey tools - validate case bundles and export listings",
    long_about = "Tools for the Cardiac Arrest in Pregnancy Study data core.\n\n\
                  Case bundles are JSON files holding one case record plus its\n\
                  child records. Every bundle goes through the full validation\n\
                  pass before anything is exported."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate case bundle files and report every issue found.
    Validate(ValidateArgs),

    /// Validate case bundles and write the flat case listing CSV.
    Export(ExportArgs),

    /// List the built-in drug dictionary.
    Drugs,
}

#[derive(Parser)]
pub struct ValidateArgs {
    /// Case bundle JSON files.
    #[arg(value_name = "BUNDLE", required = true)]
    pub bundles: Vec<PathBuf>,

    /// Treat a recorded drug-use event as answering yes to the drug-use
    /// question, like the other child record kinds.
    #[arg(long = "propagate-drug-use")]
    pub propagate_drug_use: bool,
}

#[derive(Parser)]
pub struct ExportArgs {
    /// Case bundle JSON files.
    #[arg(value_name = "BUNDLE", required = true)]
    pub bundles: Vec<PathBuf>,

    /// Output CSV path (stdout when omitted).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Treat a recorded drug-use event as answering yes to the drug-use
    /// question, like the other child record kinds.
    #[arg(long = "propagate-drug-use")]
    pub propagate_drug_use: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
