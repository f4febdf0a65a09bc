use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use crate::error::LlmError;
use crate::llm::TextGenerationInterface;
use crate::planner::travel_request::TravelRequest;

/// Shown when the model answers without any text
pub const NO_RESPONSE_MESSAGE: &str = "No response generated.";

/// Shown when the generation call fails
pub const GENERATION_FAILED_MESSAGE: &str =
    "⚠️ Error generating response. Please try again later.";

/// Turns a travel request into model-generated recommendations
#[derive(Clone)]
pub struct TravelRecommender {
    llm: Arc<dyn TextGenerationInterface>,
    throttle_delay: Duration,
}

impl TravelRecommender {
    pub fn new(llm: Arc<dyn TextGenerationInterface>, throttle_delay: Duration) -> Self {
        Self {
            llm,
            throttle_delay,
        }
    }

    /// One generation call per request, preceded by the fixed throttle
    /// delay. Failures are replaced by a user-visible placeholder.
    pub async fn find_travel_options(&self, request: &TravelRequest) -> String {
        let prompt = request.to_prompt();

        if !self.throttle_delay.is_zero() {
            debug!(delay_ms = self.throttle_delay.as_millis() as u64, "Throttling before generation call");
            tokio::time::sleep(self.throttle_delay).await;
        }

        match self.llm.generate_content(&prompt).await {
            Ok(text) => text,
            Err(LlmError::EmptyResponse) => {
                warn!("Model returned no text");
                NO_RESPONSE_MESSAGE.to_string()
            }
            Err(e) => {
                warn!(error = %e, "Error generating travel recommendations");
                GENERATION_FAILED_MESSAGE.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::ModelInfo;
    use crate::planner::travel_request::{SpecialNeeds, TravelMode};
    use crate::translate::LanguageCode;
    use async_trait::async_trait;
    use std::sync::Mutex;

    enum Reply {
        Text(&'static str),
        Empty,
        Fail,
    }

    struct ScriptedLLM {
        reply: Reply,
        prompts: Mutex<Vec<String>>,
    }

    impl ScriptedLLM {
        fn new(reply: Reply) -> Arc<Self> {
            Arc::new(Self {
                reply,
                prompts: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl TextGenerationInterface for ScriptedLLM {
        async fn generate_content(&self, prompt: &str) -> Result<String, LlmError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            match self.reply {
                Reply::Text(text) => Ok(text.to_string()),
                Reply::Empty => Err(LlmError::EmptyResponse),
                Reply::Fail => Err(LlmError::Api {
                    status: 503,
                    body: "unavailable".to_string(),
                }),
            }
        }

        async fn list_models(&self) -> Result<Vec<ModelInfo>, LlmError> {
            Ok(Vec::new())
        }
    }

    fn request() -> TravelRequest {
        TravelRequest {
            source: "Mumbai".to_string(),
            destination: "Pune".to_string(),
            departure_date: None,
            return_date: None,
            travel_mode: TravelMode::Bus,
            special_needs: SpecialNeeds::None,
            language: LanguageCode::Hi,
        }
    }

    #[tokio::test]
    async fn test_returns_model_text_for_built_prompt() {
        let llm = ScriptedLLM::new(Reply::Text("Take the Shivneri bus."));
        let recommender = TravelRecommender::new(llm.clone(), Duration::ZERO);

        let text = recommender.find_travel_options(&request()).await;

        assert_eq!(text, "Take the Shivneri bus.");
        let prompts = llm.prompts.lock().unwrap().clone();
        assert_eq!(
            prompts,
            vec!["Find travel options from Mumbai to Pune. Preferred mode of travel: bus."]
        );
    }

    #[tokio::test]
    async fn test_empty_response_placeholder() {
        let recommender = TravelRecommender::new(ScriptedLLM::new(Reply::Empty), Duration::ZERO);
        assert_eq!(
            recommender.find_travel_options(&request()).await,
            NO_RESPONSE_MESSAGE
        );
    }

    #[tokio::test]
    async fn test_failure_placeholder() {
        let llm = ScriptedLLM::new(Reply::Fail);
        let recommender = TravelRecommender::new(llm.clone(), Duration::ZERO);
        assert_eq!(
            recommender.find_travel_options(&request()).await,
            GENERATION_FAILED_MESSAGE
        );
        assert_eq!(llm.prompts.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_throttle_delay_is_applied() {
        let recommender = TravelRecommender::new(
            ScriptedLLM::new(Reply::Text("ok")),
            Duration::from_millis(50),
        );
        let start = std::time::Instant::now();
        recommender.find_travel_options(&request()).await;
        assert!(start.elapsed() >= Duration::from_millis(50));
    }
}
