//! Workspace config file source: archmd.toml and archmd.{env}.toml in the scan root

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::File;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Base name of the workspace configuration file
pub const WORKSPACE_CONFIG_FILE: &str = "archmd.toml";

/// Path to the base workspace config file
pub fn workspace_config_path(workspace_root: &Path) -> PathBuf {
    workspace_root.join(WORKSPACE_CONFIG_FILE)
}

/// Add workspace config files to builder.
/// Precedence: archmd.toml (base) then archmd.{ARCHMD_ENV}.toml when ARCHMD_ENV is set.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    workspace_root: &Path,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let mut builder = builder;

    let base_config_path = workspace_config_path(workspace_root);
    if base_config_path.is_file() {
        debug!(config_path = %base_config_path.display(), "Loading workspace configuration");
        builder = builder.add_source(File::from(base_config_path.as_path()).required(false));
    }

    if let Ok(env_name) = std::env::var("ARCHMD_ENV") {
        let env_config_path = workspace_root.join(format!("archmd.{}.toml", env_name));
        if env_config_path.is_file() {
            debug!(config_path = %env_config_path.display(), "Loading environment configuration");
            builder = builder.add_source(File::from(env_config_path.as_path()).required(false));
        }
    }

    Ok(builder)
}
