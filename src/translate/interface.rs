use async_trait::async_trait;

use crate::error::TranslationError;
use crate::translate::language::LanguageCode;

/// One call's worth of text for the translation service
#[derive(Debug, Clone)]
pub struct TranslateRequest {
    pub text: String,
    /// `None` lets the service detect the source language
    pub source_lang: Option<String>,
    pub target_lang: LanguageCode,
}

impl TranslateRequest {
    pub fn auto(text: impl Into<String>, target_lang: LanguageCode) -> Self {
        Self {
            text: text.into(),
            source_lang: None,
            target_lang,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TranslateResponse {
    pub translated_text: String,
    pub detected_source_lang: Option<String>,
}

/// A remote translation backend
#[async_trait]
pub trait TranslationService: Send + Sync {
    /// Translate a single piece of text. Implementations may reject text
    /// above their own size limit.
    async fn translate(
        &self,
        request: &TranslateRequest,
    ) -> Result<TranslateResponse, TranslationError>;
}
