pub mod chunked;
pub mod google_translate;
pub mod interface;
pub mod language;

pub use chunked::{ChunkedTranslator, TRANSLATION_FAILED_NOTICE, TRANSLATION_LIMIT};
pub use google_translate::GoogleTranslateClient;
pub use interface::{TranslateRequest, TranslateResponse, TranslationService};
pub use language::LanguageCode;
