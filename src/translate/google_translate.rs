use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, info};

use crate::error::TranslationError;
use crate::translate::interface::{TranslateRequest, TranslateResponse, TranslationService};

/// Client for the public Google Translate endpoint
#[derive(Debug, Clone)]
pub struct GoogleTranslateClient {
    client: Client,
    base_url: String,
    max_chars: usize,
}

impl GoogleTranslateClient {
    pub fn new(
        base_url: String,
        max_chars: usize,
        timeout: Duration,
    ) -> Result<Self, TranslationError> {
        let client = Client::builder().timeout(timeout).build()?;
        info!(
            "Initialized GoogleTranslateClient: base_url={}, max_chars={}",
            base_url, max_chars
        );
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            max_chars,
        })
    }
}

#[async_trait]
impl TranslationService for GoogleTranslateClient {
    async fn translate(
        &self,
        request: &TranslateRequest,
    ) -> Result<TranslateResponse, TranslationError> {
        let length = request.text.chars().count();
        if length > self.max_chars {
            return Err(TranslationError::TextTooLong {
                length,
                max: self.max_chars,
            });
        }

        let url = format!("{}/translate_a/single", self.base_url);
        let source = request.source_lang.as_deref().unwrap_or("auto");
        debug!(
            source = source,
            target_lang = %request.target_lang,
            chars = length,
            "Sending translation request"
        );

        let response = self
            .client
            .get(&url)
            .query(&[
                ("client", "gtx"),
                ("dt", "t"),
                ("sl", source),
                ("tl", request.target_lang.code()),
                ("q", request.text.as_str()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(TranslationError::Api { status, body });
        }

        let body: Value = response.json().await?;
        let parsed = parse_response(&body)?;
        if parsed.translated_text.trim().is_empty() && !request.text.trim().is_empty() {
            return Err(TranslationError::MalformedResponse(
                "empty translation".to_string(),
            ));
        }
        Ok(parsed)
    }
}

/// The endpoint answers with nested arrays: `[[[translated, original, ..], ..], null, detected, ..]`
fn parse_response(body: &Value) -> Result<TranslateResponse, TranslationError> {
    let segments = body
        .get(0)
        .and_then(Value::as_array)
        .ok_or_else(|| TranslationError::MalformedResponse("missing sentence list".to_string()))?;

    let translated_text: String = segments
        .iter()
        .filter_map(|segment| segment.get(0).and_then(Value::as_str))
        .collect();

    let detected_source_lang = body.get(2).and_then(Value::as_str).map(str::to_string);

    Ok(TranslateResponse {
        translated_text,
        detected_source_lang,
    })
}
