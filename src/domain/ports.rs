use crate::domain::model::DreamVerdict;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Remote dream validation/generation service. All substantive computation
/// happens behind this boundary; transport and HTTP failures surface as `Err`.
#[async_trait]
pub trait DreamService: Send + Sync {
    async fn health(&self) -> Result<()>;
    async fn validate_dream(&self, dream: &str) -> Result<DreamVerdict>;
    async fn generate_reflection(&self, dream: &str) -> Result<String>;
    async fn random_dream(&self) -> Result<String>;
}

pub trait ConfigProvider: Send + Sync {
    fn api_base_url(&self) -> &str;
    fn max_words(&self) -> usize;
    fn placeholders(&self) -> &[String];

    /// Custom loading-stage messages; empty means use the built-in stages.
    fn loading_states(&self) -> &[String] {
        &[]
    }
}
