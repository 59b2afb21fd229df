use std::path::PathBuf;

use brewnix_common::config::Config;
use brewnix_common::error::Result;
use brewnix_core::decode_cask;
use clap::Args;
use colored::Colorize;

use crate::cli::read_json;

#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Cask JSON file, or `-` for standard input
    pub cask: PathBuf,
}

impl ValidateArgs {
    pub fn run(&self, _config: &Config) -> Result<()> {
        let raw = read_json(&self.cask)?;
        let cask = decode_cask(&raw)?;
        let status = if cask.is_translatable() {
            "translatable".green()
        } else {
            "not translatable".yellow()
        };
        let stanzas: Vec<&str> = cask.artifacts.iter().map(|a| a.key()).collect();
        println!(
            "{} {} {} ({})",
            "✓".green().bold(),
            cask.token.cyan(),
            cask.version,
            status
        );
        println!("  artifacts: {}", stanzas.join(", "));
        Ok(())
    }
}
