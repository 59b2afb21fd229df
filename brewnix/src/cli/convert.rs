use std::path::PathBuf;

use brewnix_common::config::Config;
use brewnix_common::error::Result;
use brewnix_core::{decode_cask, lower, lower_record};
use clap::Args;

use crate::cli::read_json;

#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Cask JSON file, or `-` for standard input
    pub cask: PathBuf,

    /// Emit the stored package record (name, url, hash, ...) instead of the bare manifest
    #[arg(long)]
    pub record: bool,
}

impl ConvertArgs {
    pub fn run(&self, config: &Config) -> Result<()> {
        let raw = read_json(&self.cask)?;
        let cask = decode_cask(&raw)?;
        let output = if self.record {
            serde_json::to_string_pretty(&lower_record(&cask, config)?)?
        } else {
            serde_json::to_string_pretty(&lower(&cask)?)?
        };
        println!("{output}");
        Ok(())
    }
}
