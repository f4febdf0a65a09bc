pub mod gemini_llm;
pub mod llm_factory;
pub mod llm_interface;
pub mod openai_compatible_llm;

pub use gemini_llm::GeminiLLM;
pub use llm_factory::LLMFactory;
pub use llm_interface::{ModelInfo, TextGenerationInterface};
pub use openai_compatible_llm::OpenAICompatibleLLM;
