//! Coffee Leaf Nutrition Common Library
//!
//! CLIとWeb(WASM)で共有される型と状態遷移

pub mod config;
pub mod content;
pub mod error;
pub mod pipeline;
pub mod prediction;
pub mod recommendation;
pub mod route;
pub mod upload;

pub use config::{ClientConfig, ACCEPTED_FORMATS, DEFAULT_ENDPOINT, MAX_FILE_SIZE};
pub use error::{Error, ErrorKind, Result};
pub use pipeline::{Diagnosis, Phase, Pipeline, Snapshot, SubmitOutcome, Ticket};
pub use prediction::{
    confidence_percent, parse_api_error, parse_prediction, PredictionLabel, PredictionResponse,
};
pub use recommendation::{
    lookup_recommendation, recommendation, Nutrient, NutrientAdvice, NutrientStatus,
    RecommendationRecord, RECOMMENDATIONS,
};
pub use route::{Navigator, NavLink, Route, View, NAV_LINKS, ROUTES};
pub use upload::{media_type_for_extension, validate, SelectedFile};
