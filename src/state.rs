use std::sync::Arc;

use crate::config::Config;
use crate::llm::{LLMFactory, TextGenerationInterface};
use crate::planner::TravelRecommender;
use crate::translate::{ChunkedTranslator, GoogleTranslateClient, TranslationService};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub llm: Arc<dyn TextGenerationInterface>,
    pub recommender: Arc<TravelRecommender>,
    pub translator: Arc<ChunkedTranslator>,
}

impl AppState {
    /// Build the real service clients. Fails when the API key is missing.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let api_key = config.llm_config.resolve_api_key()?;
        let llm = LLMFactory::create_llm(&config.llm_config, api_key)?;

        let translation = &config.translation_config;
        let translation_service = Arc::new(GoogleTranslateClient::new(
            translation.base_url.clone(),
            translation.chunk_limit,
            translation.timeout(),
        )?);

        Ok(Self::from_parts(config, llm, translation_service))
    }

    pub fn from_parts(
        config: Config,
        llm: Arc<dyn TextGenerationInterface>,
        translation_service: Arc<dyn TranslationService>,
    ) -> Self {
        let recommender = TravelRecommender::new(llm.clone(), config.llm_config.throttle_delay());
        let translator =
            ChunkedTranslator::new(translation_service, config.translation_config.chunk_limit);

        Self {
            config: Arc::new(config),
            llm,
            recommender: Arc::new(recommender),
            translator: Arc::new(translator),
        }
    }
}
