//! Groups file loading
//!
//! Resolves the config file path against an explicit base directory, reads
//! it, and hands the text to the parser. The base directory is a parameter,
//! never ambient process state; callers supply the default.

use std::fs;
use std::path::{Path, PathBuf};

use crate::configs::groups::{parse_groups_config, GroupsFileConfig};
use crate::types::{TurboGroupError, TurboGroupResult};

/// Resolve `config_file` against `base_dir` into an absolute path.
///
/// An absolute `config_file` wins over `base_dir`, matching standard path
/// joining semantics.
pub fn resolve_config_path(config_file: &Path, base_dir: &Path) -> TurboGroupResult<PathBuf> {
    Ok(std::path::absolute(base_dir.join(config_file))?)
}

/// Load and parse the groups file.
///
/// Fails with [`TurboGroupError::ConfigNotFound`] if the resolved path does
/// not exist, and with [`TurboGroupError::ConfigRead`] if the file exists but
/// cannot be read or decoded as text.
pub fn load_groups(config_file: &Path, base_dir: &Path) -> TurboGroupResult<GroupsFileConfig> {
    let path = resolve_config_path(config_file, base_dir)?;

    if !path.exists() {
        return Err(TurboGroupError::ConfigNotFound(path));
    }

    let content =
        fs::read_to_string(&path).map_err(|source| TurboGroupError::ConfigRead { path, source })?;

    Ok(parse_groups_config(&content))
}
