use std::fs;
use std::path::PathBuf;

use brewnix_common::config::Config;
use brewnix_common::error::Result;
use brewnix_core::{decode_catalog, translate_catalog};
use clap::Args;
use colored::Colorize;
use tracing::{debug, info};

use crate::cli::read_json;

#[derive(Args, Debug)]
pub struct CatalogArgs {
    /// Catalog JSON file (an array of casks), or `-` for standard input
    pub catalog: PathBuf,

    /// Write the package records here instead of standard output
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl CatalogArgs {
    pub fn run(&self, config: &Config) -> Result<()> {
        debug!(
            "Translating {} (upstream {})",
            self.catalog.display(),
            config.catalog_api_url()
        );
        let raw = read_json(&self.catalog)?;
        let partition = decode_catalog(&raw)?;
        let invalid = partition.invalid.len();
        let report = translate_catalog(partition.valid, config)?;

        let json = serde_json::to_string_pretty(&report.records)?;
        match &self.output {
            Some(path) => {
                fs::write(path, json)?;
                info!("Wrote {} records to {}", report.records.len(), path.display());
            }
            None => println!("{json}"),
        }

        for skipped in &report.skipped {
            eprintln!(
                "{} {}: {}",
                "skipped".yellow(),
                skipped.token,
                skipped.error
            );
        }
        eprintln!(
            "{} translated, {} skipped, {} invalid",
            report.records.len().to_string().green().bold(),
            report.skipped.len().to_string().yellow().bold(),
            invalid.to_string().red().bold()
        );
        Ok(())
    }
}
