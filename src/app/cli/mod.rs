//! CLI Adapter.

mod render;

use std::path::PathBuf;

use chrono::NaiveDateTime;
use clap::{ArgAction, Parser, Subcommand};
use serde::Serialize;

use crate::adapters::LocalFilesystemStore;
use crate::app::commands::{check, mapping, show, template};
use crate::app::config::load_cf_config;
use crate::app::logging;
use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "cfobs")]
#[command(version)]
#[command(
    about = "Validate and inspect GEOS-CF model-field configuration files",
    long_about = None
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a model-field configuration file and summarize its groups
    #[clap(visible_alias = "c")]
    Check {
        /// Path to the configuration file
        path: PathBuf,
        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print a configuration, one of its groups, or one variable
    #[clap(visible_alias = "s")]
    Show {
        /// Path to the configuration file
        path: PathBuf,
        /// Group name (e.g. met, chem)
        group: Option<String>,
        /// Variable key within the group
        variable: Option<String>,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print a group's template, expanded for a timestamp with --at
    #[clap(visible_alias = "t")]
    Template {
        /// Path to the configuration file
        path: PathBuf,
        /// Group name
        group: String,
        /// UTC timestamp to expand date directives for (YYYY-MM-DDTHH:MM[:SS])
        #[arg(long, value_parser = template::parse_timestamp)]
        at: Option<NaiveDateTime>,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the observation-to-model mapping of a master configuration
    #[clap(visible_alias = "m")]
    Mapping {
        /// Path to the master configuration file
        path: PathBuf,
        /// Base name of the model value column
        #[arg(long, default_value = "conc_mod")]
        model_column: String,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = dispatch(cli.command) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn dispatch(command: Commands) -> Result<(), AppError> {
    let store = LocalFilesystemStore;

    match command {
        Commands::Check { path, json } => {
            let report = check::execute(&path, &store)?;
            emit(&report, json, render::check_report)
        }
        Commands::Show { path, group, variable, json } => {
            let document = load_cf_config(&path, &store)?;
            let target = show::execute(&document, group.as_deref(), variable.as_deref())?;
            emit(&target, json, render::show_target)
        }
        Commands::Template { path, group, at, json } => {
            let document = load_cf_config(&path, &store)?;
            let output = template::execute(&document, &group, at)?;
            emit(&output, json, |output| format!("{}\n", output.template))
        }
        Commands::Mapping { path, model_column, json } => {
            let rows = mapping::execute(&path, &model_column, &store)?;
            emit(&rows, json, |rows| render::mapping_rows(rows))
        }
    }
}

fn emit<T, F>(value: &T, json: bool, text: F) -> Result<(), AppError>
where
    T: Serialize + ?Sized,
    F: FnOnce(&T) -> String,
{
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        print!("{}", text(value));
    }
    Ok(())
}
