use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Environment variable consulted when `--db-file` is not given.
pub const DB_ENV_VAR: &str = "CAT_DB";

/// Resolve the database file path from the `--db-file` override or the
/// `CAT_DB` environment variable. Fails before any store operation when
/// neither is supplied.
pub fn resolve_db_path(override_path: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = override_path {
        return Ok(path);
    }
    env::var(DB_ENV_VAR).map(PathBuf::from).context(
        "No database file configured. Pass --db-file or set the CAT_DB environment variable",
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_wins() {
        let path = resolve_db_path(Some(PathBuf::from("/tmp/override.db"))).unwrap();
        assert_eq!(path, PathBuf::from("/tmp/override.db"));
    }
}
