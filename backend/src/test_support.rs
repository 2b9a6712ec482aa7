//! Helpers shared by the handler tests.

use crate::config::ServerConfig;
use tempfile::TempDir;

/// A configuration whose schema directory and database both live in `dir`.
pub fn config_in(dir: &TempDir) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".into(),
        port: 0,
        forms_dir: dir.path().to_path_buf(),
        database_path: dir.path().join("submissions.sqlite"),
        open_browser: false,
        cors_origins: Vec::new(),
    }
}
