use anyhow::{Context, Result};
use serde::Deserialize;
use std::{
    env, fs,
    path::{Path, PathBuf},
};
use tracing::debug;
use url::Url;

use crate::{error::ConfigError, model::Units};

/// Upstream "current weather" resource.
pub const DEFAULT_ENDPOINT: &str = "https://api.openweathermap.org/data/2.5/weather";

/// JSON config file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

pub const API_KEY_VAR: &str = "API_KEY";
pub const CITY_VAR: &str = "CITY";
pub const UNITS_VAR: &str = "UNITS";
pub const ENDPOINT_VAR: &str = "OPENWEATHER_ENDPOINT";

/// Everything needed to issue one request.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub city: String,
    pub units: String,
    pub endpoint: Url,
}

/// On-disk shape of `config.json`.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct FileConfig {
    api_key: String,
    city: String,
    units: String,
}

impl Config {
    /// Load `.env` next to the executable, then resolve the configuration from
    /// the process environment or `./config.json`.
    pub fn load() -> Result<Self> {
        load_dotenv(&Self::dotenv_path()?)?;

        let cwd = env::current_dir().context("Failed to determine current directory")?;
        Self::from_sources(|key| env::var(key).ok(), &cwd)
    }

    /// Resolve the configuration from a variable lookup and a directory that may
    /// hold `config.json`.
    ///
    /// Environment variables win as soon as any of them is set; the file is only
    /// consulted when none is.
    pub fn from_sources<F>(lookup: F, dir: &Path) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.is_empty());

        let api_key = var(API_KEY_VAR);
        let city = var(CITY_VAR);
        let units = var(UNITS_VAR);
        let endpoint = parse_endpoint(var(ENDPOINT_VAR))?;

        let file_path = dir.join(CONFIG_FILE_NAME);
        let env_touched = api_key.is_some() || city.is_some() || units.is_some();

        if !env_touched && file_path.is_file() {
            debug!(path = %file_path.display(), "using config file");
            return Self::from_file(&file_path, endpoint);
        }

        debug!("using environment variables");
        match (api_key, city, units) {
            (Some(api_key), Some(city), Some(units)) => Ok(Self { api_key, city, units, endpoint }),
            _ => Err(ConfigError::Incomplete.into()),
        }
    }

    fn from_file(path: &Path, endpoint: Url) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let file: FileConfig = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        if file.api_key.is_empty() || file.city.is_empty() || file.units.is_empty() {
            return Err(ConfigError::IncompleteFile { path: path.to_path_buf() }.into());
        }

        Ok(Self { api_key: file.api_key, city: file.city, units: file.units, endpoint })
    }

    pub fn units(&self) -> Units {
        Units::from(self.units.as_str())
    }

    /// `<executable-dir>/../.env`
    pub fn dotenv_path() -> Result<PathBuf> {
        let exe = env::current_exe().context("Failed to locate the running executable")?;
        let dir = exe.parent().unwrap_or_else(|| Path::new("."));

        Ok(dir.join("..").join(".env"))
    }
}

fn parse_endpoint(value: Option<String>) -> Result<Url> {
    let value = value.unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
    Url::parse(&value).map_err(|source| ConfigError::InvalidEndpoint { value, source }.into())
}

/// Load a `.env` file into the process environment. Variables already set win;
/// a missing file is skipped.
fn load_dotenv(path: &Path) -> Result<()> {
    if !path.is_file() {
        debug!(path = %path.display(), "no .env file");
        return Ok(());
    }

    dotenvy::from_path(path)
        .with_context(|| format!("Error loading .env file: {}", path.display()))?;
    debug!(path = %path.display(), "loaded .env file");

    Ok(())
}
