// brewnix-common/src/config.rs
use std::env;

use tracing::debug;

use super::error::{BrewnixError, Result};

const DEFAULT_API_BASE_URL: &str = "https://formulae.brew.sh/api";
const MAX_DEFAULT_JOBS: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_base_url: String,
    pub jobs: usize,
}

impl Config {
    /// Builds the configuration from `BREWNIX_*` environment variables.
    pub fn load() -> Result<Self> {
        debug!("Loading brewnix configuration");
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`Config::load`], but reads variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|s| !s.is_empty());

        let api_base_url = get("BREWNIX_API_BASE_URL")
            .map(|s| s.trim_end_matches('/').to_string())
            .unwrap_or_else(|| {
                debug!(
                    "BREWNIX_API_BASE_URL not set or empty, falling back to default: {}",
                    DEFAULT_API_BASE_URL
                );
                DEFAULT_API_BASE_URL.to_string()
            });

        let jobs = match get("BREWNIX_JOBS") {
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(0) | Err(_) => {
                    return Err(BrewnixError::Config(format!(
                        "BREWNIX_JOBS must be a positive integer, got '{raw}'"
                    )))
                }
                Ok(n) => n,
            },
            None => default_jobs(),
        };

        debug!(
            "Configuration loaded: api_base_url={}, jobs={}",
            api_base_url, jobs
        );
        Ok(Self { api_base_url, jobs })
    }

    /// Registry endpoint a single cask is served from.
    pub fn cask_api_url(&self, token: &str) -> String {
        format!("{}/cask/{token}.json", self.api_base_url)
    }

    /// Registry endpoint of the full cask catalog.
    pub fn catalog_api_url(&self) -> String {
        format!("{}/cask.json", self.api_base_url)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            jobs: default_jobs(),
        }
    }
}

fn default_jobs() -> usize {
    std::cmp::max(1, num_cpus::get_physical().saturating_sub(1)).min(MAX_DEFAULT_JOBS)
}
