use serde::Deserialize;
use tracing::instrument;

use legis_base::pal::{FilePath, PalHandle};
use legis_base::{LegisResult, ResultExt};

/// Configuration for a bill server instance.
#[derive(Debug, Deserialize, PartialEq)]
pub struct Config {
    /// Display title of the server instance.
    #[serde(default = "default_title")]
    pub title: String,
    /// Host address to bind the HTTP listener to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to bind the HTTP listener to.
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_title() -> String {
    "legis".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: default_title(),
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Load configuration from a TOML file via the platform abstraction layer.
///
/// Missing fields fall back to their defaults, so a partial file (or an
/// empty one) is valid.
#[instrument(skip(pal))]
pub fn load_config(pal: &PalHandle, path: &FilePath) -> LegisResult<Config> {
    let contents = pal
        .read_file_to_string(path)
        .with_context(|| format!("Failed to read config file: {path}"))?;
    let config: Config = toml::from_str(&contents)
        .map_err(|error| legis_base::err!("Failed to parse config file {path}: {error}"))?;
    Ok(config)
}
