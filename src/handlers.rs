use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{info, warn};
use uuid::Uuid;

use crate::planner::TravelRequest;
use crate::state::AppState;
use crate::translate::LanguageCode;

#[derive(Debug, Serialize, Deserialize)]
pub struct TravelOptionsResponse {
    pub request_id: String,
    pub language: LanguageCode,
    pub recommendations: String,
}

/// Form submission: fetch recommendations, then translate them.
pub async fn find_travel_options(
    State(state): State<AppState>,
    Json(request): Json<TravelRequest>,
) -> Result<Json<TravelOptionsResponse>, (StatusCode, Json<Value>)> {
    let request_id = Uuid::new_v4().to_string();

    if let Err(e) = request.validate() {
        warn!(request_id = %request_id, error = %e, "Rejected travel request");
        return Err((StatusCode::BAD_REQUEST, Json(json!({ "error": e.to_string() }))));
    }

    info!(
        request_id = %request_id,
        source = %request.source,
        destination = %request.destination,
        language = %request.language,
        "Fetching travel recommendations"
    );

    let travel_options = state.recommender.find_travel_options(&request).await;
    let recommendations = state
        .translator
        .translate(&travel_options, request.language)
        .await;

    info!(request_id = %request_id, chars = recommendations.chars().count(), "Travel recommendations ready");

    Ok(Json(TravelOptionsResponse {
        request_id,
        language: request.language,
        recommendations,
    }))
}

pub async fn list_languages() -> Json<Value> {
    let languages: Vec<Value> = LanguageCode::ALL
        .iter()
        .map(|lang| json!({ "code": lang.code(), "label": lang.label() }))
        .collect();
    Json(json!(languages))
}

pub async fn list_models(
    State(state): State<AppState>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    match state.llm.list_models().await {
        Ok(models) => Ok(Json(json!(models))),
        Err(e) => {
            warn!(error = %e, "Error fetching model list");
            Err((
                StatusCode::BAD_GATEWAY,
                Json(json!({ "error": format!("Error fetching model list: {}", e) })),
            ))
        }
    }
}
