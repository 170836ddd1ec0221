use crate::domain::model::MAX_WORDS;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{DreamError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileConfig {
    pub service: ServiceConfig,
    pub input: Option<InputConfig>,
    pub ui: Option<UiConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    pub base_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    pub max_words: Option<usize>,
    pub placeholders: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    pub loading_states: Option<Vec<String>>,
}

impl FileConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(DreamError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| DreamError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` markers with environment values; unknown variables
    /// are left as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").expect("static pattern");

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn max_words(&self) -> usize {
        self.input
            .as_ref()
            .and_then(|input| input.max_words)
            .unwrap_or(MAX_WORDS)
    }
}

impl ConfigProvider for FileConfig {
    fn api_base_url(&self) -> &str {
        &self.service.base_url
    }

    fn max_words(&self) -> usize {
        self.max_words()
    }

    fn placeholders(&self) -> &[String] {
        self.input
            .as_ref()
            .and_then(|input| input.placeholders.as_deref())
            .unwrap_or(&[])
    }

    fn loading_states(&self) -> &[String] {
        self.ui
            .as_ref()
            .and_then(|ui| ui.loading_states.as_deref())
            .unwrap_or(&[])
    }
}

impl Validate for FileConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("service.base_url", &self.service.base_url)?;
        validation::validate_positive_number("input.max_words", self.max_words(), 1)?;

        if let Some(states) = self.ui.as_ref().and_then(|ui| ui.loading_states.as_ref()) {
            for state in states {
                validation::validate_non_empty_string("ui.loading_states", state)?;
            }
        }

        Ok(())
    }
}
