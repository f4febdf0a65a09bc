use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::translate::LanguageCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TravelMode {
    #[default]
    Any,
    Flight,
    Train,
    Bus,
    Car,
}

impl TravelMode {
    fn prompt_name(&self) -> Option<&'static str> {
        match self {
            TravelMode::Any => None,
            TravelMode::Flight => Some("flight"),
            TravelMode::Train => Some("train"),
            TravelMode::Bus => Some("bus"),
            TravelMode::Car => Some("car"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpecialNeeds {
    #[default]
    None,
    ElderlyAssistance,
    DisabilitySupport,
}

impl SpecialNeeds {
    fn assistance_text(&self) -> &'static str {
        match self {
            SpecialNeeds::None => "",
            SpecialNeeds::ElderlyAssistance => {
                " Provide senior-friendly travel options with rest stops and easy access."
            }
            SpecialNeeds::DisabilitySupport => {
                " Suggest wheelchair-accessible transport and travel assistance."
            }
        }
    }
}

/// What the planner form submits
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TravelRequest {
    pub source: String,
    pub destination: String,
    #[serde(default)]
    pub departure_date: Option<NaiveDate>,
    #[serde(default)]
    pub return_date: Option<NaiveDate>,
    #[serde(default)]
    pub travel_mode: TravelMode,
    #[serde(default)]
    pub special_needs: SpecialNeeds,
    #[serde(default)]
    pub language: LanguageCode,
}

impl TravelRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.source.trim().is_empty() || self.destination.trim().is_empty() {
            return Err(ValidationError::MissingLocations);
        }

        if let (Some(departure), Some(return_date)) = (self.departure_date, self.return_date) {
            if return_date < departure {
                return Err(ValidationError::InvalidDateRange {
                    departure,
                    return_date,
                });
            }
        }

        Ok(())
    }

    pub fn to_prompt(&self) -> String {
        let mut prompt = format!(
            "Find travel options from {} to {}.",
            self.source.trim(),
            self.destination.trim()
        );

        match (self.departure_date, self.return_date) {
            (Some(departure), Some(return_date)) => prompt.push_str(&format!(
                " Departure date: {}. Return date: {}.",
                departure, return_date
            )),
            (Some(departure), None) => {
                prompt.push_str(&format!(" Departure date: {}.", departure))
            }
            (None, Some(return_date)) => {
                prompt.push_str(&format!(" Return date: {}.", return_date))
            }
            (None, None) => {}
        }

        if let Some(mode) = self.travel_mode.prompt_name() {
            prompt.push_str(&format!(" Preferred mode of travel: {}.", mode));
        }

        prompt.push_str(self.special_needs.assistance_text());
        prompt
    }
}
