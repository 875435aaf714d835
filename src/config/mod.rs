// Configuration module entry point
// Loads layered configuration and resolves the asset root

mod state;
mod types;

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

// Re-export public types
pub use state::AppState;
pub use types::{Config, CorsConfig, FallbackConfig};

/// Default configuration file name (without extension)
const DEFAULT_CONFIG_NAME: &str = "responder";

/// Prefix for environment overrides, e.g. `RESPONDER_SERVER__PORT=9000`
const ENV_PREFIX: &str = "RESPONDER";

impl Config {
    /// Load configuration from `responder.*` in the working directory, if present
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(DEFAULT_CONFIG_NAME)
    }

    /// Load configuration from specified file path (without extension)
    ///
    /// The file is optional; every key falls back to its built-in default.
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        settings.try_deserialize()
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }

    /// Resolve the directory served as static content
    ///
    /// An explicit `assets.root` wins; otherwise the root is the directory one
    /// level above the one holding the running executable.
    pub fn resolve_root(&self) -> std::io::Result<PathBuf> {
        if let Some(root) = &self.assets.root {
            return Ok(PathBuf::from(root));
        }
        let exe = std::env::current_exe()?;
        Ok(deployment_parent(&exe))
    }
}

/// Parent of the directory containing `exe`, or that directory itself at the
/// filesystem top
fn deployment_parent(exe: &Path) -> PathBuf {
    let deploy_dir = exe.parent().unwrap_or_else(|| Path::new("."));
    deploy_dir
        .parent()
        .unwrap_or(deploy_dir)
        .to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_match_contract() {
        let cfg = Config::default();
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.server.port, 8081);
        assert_eq!(cfg.fallback.body, "handled");
        assert!(cfg.fallback.content_type.starts_with("text/plain"));
        assert_eq!(cfg.cors.allow_origin, "*");
        assert!(cfg.assets.index_files.is_empty());
        assert!(!cfg.logging.access_log);
        assert!(cfg.performance.connection_timeout.is_none());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let cfg = Config::load_from("no-such-responder-config").unwrap();
        assert_eq!(cfg.server.port, 8081);
        assert_eq!(cfg.fallback.body, "handled");
    }

    #[test]
    fn test_load_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            "[server]\nport = 9090\n\n[assets]\nroot = \"/srv/www\"\nindex_files = [\"index.html\"]"
        )
        .unwrap();

        let name = dir.path().join("custom");
        let cfg = Config::load_from(name.to_str().unwrap()).unwrap();
        assert_eq!(cfg.server.port, 9090);
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.assets.root.as_deref(), Some("/srv/www"));
        assert_eq!(cfg.assets.index_files, vec!["index.html".to_string()]);
        assert_eq!(cfg.cors.allow_origin, "*");
    }

    #[test]
    fn test_environment_overrides() {
        // Keys no other loading test asserts, so parallel tests are unaffected
        std::env::set_var("RESPONDER_SERVER__WORKERS", "3");
        std::env::set_var("RESPONDER_CORS__MAX_AGE", "600");
        let cfg = Config::load_from("no-such-responder-config");
        std::env::remove_var("RESPONDER_SERVER__WORKERS");
        std::env::remove_var("RESPONDER_CORS__MAX_AGE");

        let cfg = cfg.unwrap();
        assert_eq!(cfg.server.workers, Some(3));
        assert_eq!(cfg.cors.max_age, Some(600));
        assert_eq!(cfg.server.port, 8081);
    }

    #[test]
    fn test_socket_addr() {
        let cfg = Config::default();
        let addr = cfg.get_socket_addr().unwrap();
        assert_eq!(addr.port(), 8081);
        assert!(addr.ip().is_unspecified());

        let mut bad = Config::default();
        bad.server.host = "not a host".to_string();
        assert!(bad.get_socket_addr().is_err());
    }

    #[test]
    fn test_configured_root_wins() {
        let mut cfg = Config::default();
        cfg.assets.root = Some("/srv/www".to_string());
        assert_eq!(cfg.resolve_root().unwrap(), PathBuf::from("/srv/www"));
    }

    #[test]
    fn test_deployment_parent() {
        assert_eq!(
            deployment_parent(Path::new("/opt/app/bin/server")),
            PathBuf::from("/opt/app")
        );
        assert_eq!(deployment_parent(Path::new("/server")), PathBuf::from("/"));
    }
}
