use std::env;
use std::path::{Path, PathBuf};

use vicki_core::roster::Roster;

pub const ROSTER_PATH_VAR: &str = "VICKI_ROSTER_PATH";
pub const LOG_FORMAT_VAR: &str = "VICKI_LOG_FORMAT";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// One JSON object per line, for CloudWatch.
    #[default]
    Json,
    /// Human-readable output for local runs.
    Pretty,
}

/// Service settings, read once at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceConfig {
    /// JSON array of patients to serve. No roster is served when unset.
    pub roster_path: Option<PathBuf>,
    pub log_format: LogFormat,
}

impl ServiceConfig {
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let roster_path = get(ROSTER_PATH_VAR).map(PathBuf::from);
        let log_format = match get(LOG_FORMAT_VAR).as_deref().map(str::trim) {
            None | Some("json") => LogFormat::Json,
            Some("pretty") => LogFormat::Pretty,
            Some(other) => {
                return Err(eyre::eyre!(
                    "{LOG_FORMAT_VAR} must be 'json' or 'pretty', got '{other}'"
                ));
            }
        };

        Ok(Self {
            roster_path,
            log_format,
        })
    }

    pub fn load_roster(&self) -> eyre::Result<Roster> {
        match &self.roster_path {
            Some(path) => load_roster_file(path),
            None => {
                tracing::info!("{ROSTER_PATH_VAR} not set, serving an empty roster");
                Ok(Roster::default())
            }
        }
    }
}

fn load_roster_file(path: &Path) -> eyre::Result<Roster> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read roster at {}: {e}", path.display()))?;
    let roster = Roster::from_json(&contents)
        .map_err(|e| eyre::eyre!("invalid roster at {}: {e}", path.display()))?;
    tracing::info!(path = %path.display(), patients = roster.len(), "roster loaded");
    Ok(roster)
}
