pub mod recommender;
pub mod travel_request;

pub use recommender::{TravelRecommender, GENERATION_FAILED_MESSAGE, NO_RESPONSE_MESSAGE};
pub use travel_request::{SpecialNeeds, TravelMode, TravelRequest};
