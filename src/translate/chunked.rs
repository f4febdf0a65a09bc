use std::sync::Arc;

use tracing::{debug, warn};

use crate::error::TranslationError;
use crate::translate::interface::{TranslateRequest, TranslationService};
use crate::translate::language::LanguageCode;
use crate::utils::wrap;

/// Per-call size limit of the translation service, in chars
pub const TRANSLATION_LIMIT: usize = 5000;

/// Shown in front of the untranslated text when any call fails
pub const TRANSLATION_FAILED_NOTICE: &str =
    "⚠️ Translation failed, showing original English text:\n\n";

/// Translates text of any length by wrapping it into chunks the service
/// accepts, translating them in order and joining the results with a space.
///
/// Chunk boundaries come from [`wrap`], so whitespace that falls on a
/// boundary is not carried into the translated output.
#[derive(Clone)]
pub struct ChunkedTranslator {
    service: Arc<dyn TranslationService>,
    limit: usize,
}

impl ChunkedTranslator {
    pub fn new(service: Arc<dyn TranslationService>, limit: usize) -> Self {
        Self {
            service,
            limit: limit.max(1),
        }
    }

    /// Translate `text` into `target`. Any failed call gives back the
    /// original text behind [`TRANSLATION_FAILED_NOTICE`]; partial results
    /// are never returned.
    pub async fn translate(&self, text: &str, target: LanguageCode) -> String {
        match self.try_translate(text, target).await {
            Ok(translated) => translated,
            Err(e) => {
                warn!(target_lang = %target, error = %e, "Translation failed, returning original text");
                format!("{}{}", TRANSLATION_FAILED_NOTICE, text)
            }
        }
    }

    pub async fn try_translate(
        &self,
        text: &str,
        target: LanguageCode,
    ) -> Result<String, TranslationError> {
        if text.chars().count() <= self.limit {
            return self.translate_one(text, target).await;
        }

        let chunks = wrap(text, self.limit);
        debug!(
            chunks = chunks.len(),
            limit = self.limit,
            "Text exceeds translation limit, translating in chunks"
        );

        let mut translated = Vec::with_capacity(chunks.len());
        for (index, chunk) in chunks.iter().enumerate() {
            debug!(chunk_index = index, chars = chunk.chars().count(), "Translating chunk");
            translated.push(self.translate_one(chunk, target).await?);
        }

        Ok(translated.join(" "))
    }

    async fn translate_one(
        &self,
        text: &str,
        target: LanguageCode,
    ) -> Result<String, TranslationError> {
        if text.trim().is_empty() {
            return Ok(text.to_string());
        }

        let request = TranslateRequest::auto(text, target);
        let response = self.service.translate(&request).await?;
        if let Some(detected) = &response.detected_source_lang {
            debug!(detected_source = %detected, target_lang = %target, "Chunk translated");
        }
        Ok(response.translated_text)
    }
}
