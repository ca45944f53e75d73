use std::env;
use std::path::PathBuf;

use spdlog::debug;

use postseed::config::{read_config, Config};

use crate::CFG_FILE_NAME;

fn get_config_path() -> Option<PathBuf> {
    let mut candidates = vec![];

    if let Some(exe_dir) = env::current_exe().ok().and_then(|exe| exe.parent().map(PathBuf::from)) {
        candidates.push(exe_dir);
    }
    if let Ok(cur_dir) = env::current_dir() {
        candidates.push(cur_dir);
    }
    if let Some(cfg_dir) = dirs::config_dir() {
        candidates.push(cfg_dir.join("postseed"));
    }

    candidates.into_iter()
        .map(|dir| dir.join(CFG_FILE_NAME))
        .find(|path| path.exists())
}

/// Loads the configuration. `Ok(None)` means no file was given or found,
/// and callers fall back to the built-in defaults.
pub(crate) fn open_config(cfg_path: Option<PathBuf>) -> Result<Option<Config>, String> {
    let config_path = match cfg_path.or_else(get_config_path) {
        None => {
            debug!("No {} found. Using defaults", CFG_FILE_NAME);
            return Ok(None);
        }
        Some(x) => x,
    };

    debug!("Reading config from {}", config_path.display());
    let mut config = match read_config(&config_path) {
        Ok(config) => config,
        Err(e) => return Err(e.to_string()),
    };

    if let Some(mut log) = config.log {
        let location = log.location.or_else(|| {
            dirs::cache_dir().map(|dir| dir.join("postseed").join("log").join("postseed.log"))
        });
        if let Some(ref location) = location {
            debug!("Log enabled. Files will be written in {}", location.display());
        }
        log.location = location;
        config.log = Some(log);
    }

    Ok(Some(config))
}
