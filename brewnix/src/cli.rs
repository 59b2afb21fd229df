// brewnix/src/cli.rs
//! Defines the command-line argument structure using clap.
use std::fs;
use std::io::{self, Read};
use std::path::Path;

use brewnix_common::config::Config;
use brewnix_common::error::Result;
use clap::{ArgAction, Parser, Subcommand};
use serde_json::Value;

pub mod catalog;
pub mod convert;
pub mod validate;

use crate::cli::catalog::CatalogArgs;
use crate::cli::convert::ConvertArgs;
use crate::cli::validate::ValidateArgs;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None, name = "brewnix", bin_name = "brewnix")]
#[command(propagate_version = true)]
pub struct CliArgs {
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Translate one cask into a Nix package manifest
    Convert(ConvertArgs),
    /// Check that a cask decodes, without lowering it
    Validate(ValidateArgs),
    /// Translate a whole cask catalog
    Catalog(CatalogArgs),
}

impl Command {
    pub fn run(&self, config: &Config) -> Result<()> {
        match self {
            Self::Convert(command) => command.run(config),
            Self::Validate(command) => command.run(config),
            Self::Catalog(command) => command.run(config),
        }
    }
}

/// Reads and parses a JSON document; `-` reads standard input.
pub(crate) fn read_json(path: &Path) -> Result<Value> {
    let text = if path == Path::new("-") {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        fs::read_to_string(path)?
    };
    tracing::debug!("Read {} bytes from {}", text.len(), path.display());
    Ok(serde_json::from_str(&text)?)
}
