use std::fmt;

use serde::{Deserialize, Serialize};

/// Languages the planner can display recommendations in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageCode {
    #[default]
    En,
    Hi,
    Te,
    Ta,
    Kn,
}

impl LanguageCode {
    pub const ALL: [LanguageCode; 5] = [
        LanguageCode::En,
        LanguageCode::Hi,
        LanguageCode::Te,
        LanguageCode::Ta,
        LanguageCode::Kn,
    ];

    /// Token forwarded to the translation service
    pub fn code(&self) -> &'static str {
        match self {
            LanguageCode::En => "en",
            LanguageCode::Hi => "hi",
            LanguageCode::Te => "te",
            LanguageCode::Ta => "ta",
            LanguageCode::Kn => "kn",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LanguageCode::En => "English",
            LanguageCode::Hi => "Hindi (हिन्दी)",
            LanguageCode::Te => "Telugu (తెలుగు)",
            LanguageCode::Ta => "Tamil (தமிழ்)",
            LanguageCode::Kn => "Kannada (ಕನ್ನಡ)",
        }
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_uses_lowercase_codes() {
        assert_eq!(serde_json::to_string(&LanguageCode::Kn).unwrap(), "\"kn\"");
        let lang: LanguageCode = serde_json::from_str("\"te\"").unwrap();
        assert_eq!(lang, LanguageCode::Te);
        assert_eq!(LanguageCode::default(), LanguageCode::En);
    }
}
