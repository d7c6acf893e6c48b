//! Locating and reading `kundali.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::ConfigError;
use crate::model::KundaliConfig;

/// File name searched for in the working directory and its ancestors.
pub const CONFIG_FILE_NAME: &str = "kundali.toml";

/// How many directories the upward search visits, starting directory included.
pub const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Parse and validate TOML text.
pub fn parse_config(contents: &str, origin: &Path) -> Result<KundaliConfig, ConfigError> {
    let config = toml::from_str::<KundaliConfig>(contents).map_err(|e| ConfigError::Parse {
        path: origin.to_path_buf(),
        message: e.to_string(),
    })?;
    config.validate()?;
    Ok(config)
}

/// Read one file. A missing file is an error here.
pub fn load_from_path(path: &Path) -> Result<KundaliConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config = parse_config(&contents, path)?;
    debug!(path = %path.display(), "loaded configuration");
    Ok(config)
}

/// `start` and its parents, nearest first, at most `max_depth` entries.
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        parent.pop().then_some(parent)
    })
    .take(max_depth)
}

/// Nearest `kundali.toml` at or above `start`, if any.
pub fn find_config(start: &Path) -> Option<PathBuf> {
    directory_ancestors(start.to_path_buf(), MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find(|candidate| candidate.is_file())
}

/// Search upward from `start`; defaults when nothing is found.
pub fn load_from_dir(start: &Path) -> Result<KundaliConfig, ConfigError> {
    match find_config(start) {
        Some(path) => load_from_path(&path),
        None => {
            debug!(
                depth = MAX_TRAVERSAL_DEPTH,
                "no {CONFIG_FILE_NAME} found; using defaults"
            );
            Ok(KundaliConfig::default())
        }
    }
}

/// Explicit path when given, else the upward search from the working
/// directory, else defaults.
pub fn load_config(explicit: Option<&Path>) -> Result<KundaliConfig, ConfigError> {
    if let Some(path) = explicit {
        return load_from_path(path);
    }
    match std::env::current_dir() {
        Ok(dir) => load_from_dir(&dir),
        Err(e) => {
            warn!(error = %e, "cannot read current directory; using default configuration");
            Ok(KundaliConfig::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ancestors_stop_at_depth() {
        let dirs: Vec<PathBuf> = directory_ancestors(PathBuf::from("/a/b/c/d"), 3).collect();
        assert_eq!(
            dirs,
            vec![
                PathBuf::from("/a/b/c/d"),
                PathBuf::from("/a/b/c"),
                PathBuf::from("/a/b")
            ]
        );
    }

    #[test]
    fn ancestors_end_at_root() {
        let dirs: Vec<PathBuf> = directory_ancestors(PathBuf::from("/a"), 10).collect();
        assert_eq!(dirs, vec![PathBuf::from("/a"), PathBuf::from("/")]);
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let c = parse_config("[yoga]\npresent_only = true\n", Path::new("inline")).unwrap();
        assert!(c.yoga.present_only);
        assert_eq!(c.chart.ayanamsha, "Lahiri");
        assert_eq!(c.log.level, "info");
    }

    #[test]
    fn unknown_keys_are_parse_errors() {
        let err = parse_config("[chart]\nzodiac = \"tropical\"\n", Path::new("inline")).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }), "{err}");
    }
}
