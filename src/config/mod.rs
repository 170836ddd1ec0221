pub mod file_config;

use crate::domain::model::MAX_WORDS;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE_URL: &str = "https://future-self-server.onrender.com";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(Parser))]
#[cfg_attr(feature = "cli", command(name = "dream-reflect"))]
#[cfg_attr(
    feature = "cli",
    command(about = "A terminal client for the future-self dream reflection service")
)]
pub struct CliConfig {
    #[cfg_attr(feature = "cli", arg(long, default_value = DEFAULT_API_BASE_URL))]
    pub api_base_url: String,

    #[cfg_attr(feature = "cli", arg(long, default_value_t = MAX_WORDS))]
    pub max_words: usize,

    #[cfg_attr(feature = "cli", arg(long, value_delimiter = ','))]
    pub placeholders: Vec<String>,

    #[cfg_attr(
        feature = "cli",
        arg(long, help = "Load settings from a TOML file instead of flags")
    )]
    pub config: Option<String>,

    #[cfg_attr(feature = "cli", arg(long, help = "Enable verbose output"))]
    pub verbose: bool,

    #[cfg_attr(feature = "cli", arg(long, help = "Log system resource usage"))]
    pub monitor: bool,
}

impl ConfigProvider for CliConfig {
    fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    fn max_words(&self) -> usize {
        self.max_words
    }

    fn placeholders(&self) -> &[String] {
        &self.placeholders
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("api_base_url", &self.api_base_url)?;
        validation::validate_positive_number("max_words", self.max_words, 1)?;
        for placeholder in &self.placeholders {
            validation::validate_non_empty_string("placeholders", placeholder)?;
        }
        Ok(())
    }
}
