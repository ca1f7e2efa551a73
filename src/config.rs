/*
 * Config Module
 *
 * Loads SimulationParams from a TOML file. Fields missing from the file keep
 * their defaults, so a file only needs to name what it changes.
 */

use std::path::{Path, PathBuf};

use crate::error::{SimError, SimResult};
use crate::params::SimulationParams;

// Environment variable consulted when no path is given on the command line
pub const CONFIG_ENV: &str = "DOODS_CONFIG";

pub fn parse(text: &str, path: &Path) -> SimResult<SimulationParams> {
    let params: SimulationParams = toml::from_str(text).map_err(|source| SimError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })?;
    params.validate()?;
    Ok(params)
}

pub fn load(path: impl AsRef<Path>) -> SimResult<SimulationParams> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| SimError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    let params = parse(&text, path)?;
    log::info!("Loaded parameters from {}", path.display());
    Ok(params)
}

// Pick the config path: explicit argument first, then the environment
pub fn resolve_path(arg: Option<String>) -> Option<PathBuf> {
    arg.or_else(|| std::env::var(CONFIG_ENV).ok())
        .filter(|p| !p.is_empty())
        .map(PathBuf::from)
}

// Load parameters for a run, falling back to defaults when no file is named
pub fn load_for_run(arg: Option<String>) -> SimResult<SimulationParams> {
    match resolve_path(arg) {
        Some(path) => load(path),
        None => {
            log::info!("No config file given, using default parameters");
            Ok(SimulationParams::default())
        }
    }
}
