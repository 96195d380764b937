pub mod gemini;

use std::sync::Arc;

use helpdesk_core::config::LlmConfig;
use tracing::info;

use crate::provider::LlmProvider;

/// Create the Gemini provider when an API key is configured.
///
/// A missing key is not an error: callers fall back to local heuristics.
pub fn create_provider(llm_config: &LlmConfig) -> Option<Arc<dyn LlmProvider>> {
    let api_key = llm_config.api_key()?;
    info!(model = %llm_config.gemini_model, "Gemini provider enabled");
    Some(Arc::new(gemini::GeminiProvider::new(
        api_key.to_string(),
        llm_config.gemini_model.clone(),
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_key_no_provider() {
        assert!(create_provider(&LlmConfig::disabled()).is_none());
    }

    #[test]
    fn blank_key_no_provider() {
        let mut cfg = LlmConfig::disabled();
        cfg.gemini_api_key = Some("   ".into());
        assert!(create_provider(&cfg).is_none());
        cfg.gemini_api_key = Some(String::new());
        assert!(create_provider(&cfg).is_none());
    }

    #[test]
    fn key_yields_gemini_provider() {
        let mut cfg = LlmConfig::disabled();
        cfg.gemini_api_key = Some("k".into());
        cfg.gemini_model = "gemini-2.0-flash".into();
        let provider = create_provider(&cfg).expect("provider");
        assert_eq!(provider.model_name(), "gemini-2.0-flash");
    }
}
