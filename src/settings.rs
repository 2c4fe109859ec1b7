use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::Deserialize;

pub const BASE_ORIGIN: &str = "https://www.upwork.com";
pub const PLATFORM: &str = "upwork";
const CONFIG_FILE: &str = "upwork_parser";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Origin relative job links are resolved against.
    pub base_origin: String,
    /// Value of the `platform` column.
    pub platform: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            base_origin: BASE_ORIGIN.to_string(),
            platform: PLATFORM.to_string(),
        }
    }
}

impl Settings {
    /// Defaults, then `upwork_parser.{toml,json,yaml}` if present, then `UPWORK_*` env vars.
    pub fn load() -> Result<Settings> {
        Self::load_from(CONFIG_FILE)
    }

    /// `file` is a path without extension; a missing file is skipped.
    fn load_from(file: &str) -> Result<Settings> {
        Config::builder()
            .set_default("base_origin", BASE_ORIGIN)?
            .set_default("platform", PLATFORM)?
            .add_source(File::with_name(file).required(false))
            .add_source(Environment::with_prefix("UPWORK"))
            .build()
            .context("Failed to load settings")?
            .try_deserialize()
            .context("Invalid settings")
    }

    pub fn with_base(mut self, base: Option<String>) -> Settings {
        if let Some(b) = base {
            self.base_origin = b;
        }
        self
    }
}
