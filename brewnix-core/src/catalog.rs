// brewnix-core/src/catalog.rs
//! Batch handling of a whole cask catalog (the registry's `cask.json` array).

use std::sync::Arc;

use brewnix_common::config::Config;
use brewnix_common::error::{BrewnixError, DecodeError, LoweringError, Result};
use brewnix_common::model::cask::Cask;
use brewnix_common::model::nix::PackageRecord;
use crossbeam_channel::unbounded;
use serde_json::Value;
use threadpool::ThreadPool;
use tracing::{debug, error, instrument, warn};

use crate::build::cask::lower_record;
use crate::decode::decode_cask;

/// A catalog entry the decoder rejected.
#[derive(Debug, Clone)]
pub struct InvalidCask {
    pub index: usize,
    /// The entry's `token`, when it has a string one.
    pub token: Option<String>,
    pub error: DecodeError,
}

#[derive(Debug, Clone, Default)]
pub struct CatalogPartition {
    pub valid: Vec<Cask>,
    pub invalid: Vec<InvalidCask>,
}

/// A cask left out of the translation for a business-rule reason.
#[derive(Debug, Clone)]
pub struct SkippedCask {
    pub token: String,
    pub error: LoweringError,
}

#[derive(Debug, Clone, Default)]
pub struct TranslationReport {
    /// In catalog order.
    pub records: Vec<PackageRecord>,
    pub skipped: Vec<SkippedCask>,
}

/// Splits a catalog array into decodable casks and rejected entries. Only a
/// non-array input fails as a whole.
pub fn decode_catalog(raw: &Value) -> std::result::Result<CatalogPartition, DecodeError> {
    let entries = raw
        .as_array()
        .ok_or_else(|| DecodeError::new("$", "array of casks", "non-array value"))?;

    let mut partition = CatalogPartition::default();
    for (index, entry) in entries.iter().enumerate() {
        match decode_cask(entry) {
            Ok(cask) => partition.valid.push(cask),
            Err(error) => {
                let token = entry
                    .get("token")
                    .and_then(Value::as_str)
                    .map(str::to_string);
                warn!(
                    "Catalog entry {} ({}) rejected: {}",
                    index,
                    token.as_deref().unwrap_or("<no token>"),
                    error
                );
                partition.invalid.push(InvalidCask {
                    index,
                    token,
                    error,
                });
            }
        }
    }
    debug!(
        "Catalog decoded: {} valid, {} invalid",
        partition.valid.len(),
        partition.invalid.len()
    );
    Ok(partition)
}

/// Lowers every cask on a pool of `config.jobs` workers.
///
/// Recoverable failures (`InvalidVersion`, `InvalidChecksum`, `Unsupported`)
/// are collected as skipped casks. An `Unreachable` failure is a defect in the
/// upstream data: it is logged and returned, and no report is produced.
#[instrument(skip_all, fields(casks = casks.len(), jobs = config.jobs))]
pub fn translate_catalog(casks: Vec<Cask>, config: &Config) -> Result<TranslationReport> {
    let total = casks.len();
    let pool = ThreadPool::new(config.jobs.max(1));
    let (tx, rx) = unbounded();
    let shared_config = Arc::new(config.clone());

    for (index, cask) in casks.into_iter().enumerate() {
        let tx = tx.clone();
        let config = Arc::clone(&shared_config);
        pool.execute(move || {
            let result = lower_record(&cask, &config);
            let _ = tx.send((index, cask.token, result));
        });
    }
    drop(tx);

    let mut outcomes: Vec<_> = rx.iter().collect();
    pool.join();
    if outcomes.len() != total {
        return Err(BrewnixError::Generic(format!(
            "translation worker lost {} of {} casks",
            total - outcomes.len(),
            total
        )));
    }
    outcomes.sort_by_key(|(index, _, _)| *index);

    let mut report = TranslationReport::default();
    for (_, token, result) in outcomes {
        match result {
            Ok(record) => report.records.push(record),
            Err(BrewnixError::Lowering(e)) if e.is_recoverable() => {
                debug!("Skipping cask '{}': {}", token, e);
                report.skipped.push(SkippedCask { token, error: e });
            }
            Err(e) => {
                error!("Defect while translating cask '{}': {}", token, e);
                return Err(e);
            }
        }
    }
    debug!(
        "Translated {} casks, skipped {}",
        report.records.len(),
        report.skipped.len()
    );
    Ok(report)
}
