use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::config::MatchingSettings;
use crate::core::{details_optional, score_optional, RoommateMatcher};
use crate::error::ApiError;
use crate::models::{
    Attribute, AttributeInfo, Candidate, CompareRequest, CompatibilityTier, DetailsResponse,
    HealthResponse, PreferenceSet, RankRequest, RankResponse, ScoreResponse,
};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub matcher: RoommateMatcher,
    pub matching: MatchingSettings,
}

impl AppState {
    pub fn new(matching: MatchingSettings) -> Self {
        Self {
            matcher: RoommateMatcher::new(matching.min_score),
            matching,
        }
    }
}

/// Configure all compatibility routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/compatibility/attributes", web::get().to(list_attributes))
        .route("/compatibility/score", web::post().to(score))
        .route("/compatibility/details", web::post().to(details))
        .route("/compatibility/rank", web::post().to(rank));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Attribute catalogue used by clients to render the quiz
///
/// GET /api/v1/compatibility/attributes
async fn list_attributes() -> impl Responder {
    let attributes: Vec<AttributeInfo> = Attribute::ALL.into_iter().map(AttributeInfo::from).collect();
    HttpResponse::Ok().json(attributes)
}

/// Log answers outside the quiz domain; returns how many were found
fn warn_unrecognized(side: &str, prefs: Option<&PreferenceSet>) -> usize {
    let Some(prefs) = prefs else { return 0 };
    let unrecognized = prefs.unrecognized();
    for (attr, value) in &unrecognized {
        tracing::warn!("Unrecognized {} preference {}={:?}, treating as no match", side, attr, value);
    }
    unrecognized.len()
}

/// Score a pair of preference sets
///
/// POST /api/v1/compatibility/score
///
/// Request body:
/// ```json
/// {
///   "user": { "foodType": "vegetarian", "smoking": "no" },
///   "roommate": { "foodType": "vegan", "smoking": "occasional" }
/// }
/// ```
async fn score(req: web::Json<CompareRequest>) -> impl Responder {
    warn_unrecognized("user", req.user.as_ref());
    warn_unrecognized("roommate", req.roommate.as_ref());

    let score = score_optional(req.user.as_ref(), req.roommate.as_ref());
    let tier = CompatibilityTier::from_score(score);

    tracing::debug!("Scored pair: {} ({:?})", score, tier);

    HttpResponse::Ok().json(ScoreResponse {
        score,
        tier,
        message: tier.message().to_string(),
    })
}

/// Score a pair and explain it attribute by attribute
///
/// POST /api/v1/compatibility/details
async fn details(req: web::Json<CompareRequest>) -> impl Responder {
    warn_unrecognized("user", req.user.as_ref());
    warn_unrecognized("roommate", req.roommate.as_ref());

    let score = score_optional(req.user.as_ref(), req.roommate.as_ref());
    let tier = CompatibilityTier::from_score(score);

    HttpResponse::Ok().json(DetailsResponse {
        score,
        tier,
        message: tier.message().to_string(),
        details: details_optional(req.user.as_ref(), req.roommate.as_ref()),
    })
}

/// Rank prospective roommates for a user
///
/// POST /api/v1/compatibility/rank
///
/// Request body:
/// ```json
/// {
///   "user": { "foodType": "vegetarian" },
///   "candidates": [{ "id": "tenant-42", "preferences": { "foodType": "vegan" } }],
///   "limit": 20
/// }
/// ```
async fn rank(
    state: web::Data<AppState>,
    req: web::Json<RankRequest>,
) -> Result<HttpResponse, ApiError> {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for rank request: field_errors={:?}", errors);
        return Err(errors.into());
    }

    let settings = &state.matching;
    if req.candidates.len() > settings.max_candidates {
        return Err(ApiError::Validation(format!(
            "candidates: at most {} allowed, got {}",
            settings.max_candidates,
            req.candidates.len()
        )));
    }

    // Cap limit to prevent oversized responses
    let limit = req
        .limit
        .unwrap_or(settings.default_limit)
        .min(settings.max_limit) as usize;

    let RankRequest { user, candidates, .. } = req.into_inner();
    warn_unrecognized("user", Some(&user));
    for candidate in &candidates {
        warn_unrecognized(&format!("candidate {}", candidate.id), Some(&candidate.preferences));
    }

    tracing::info!(
        "Ranking {} candidates for a user with {} answers, limit: {}",
        candidates.len(),
        user.answered_count(),
        limit
    );

    let candidates: Vec<Candidate> = candidates.into_iter().map(Candidate::from).collect();
    let result = state.matcher.rank(&user, candidates, limit);

    tracing::info!(
        "Returning {} matches (from {} candidates)",
        result.matches.len(),
        result.total_candidates
    );

    Ok(HttpResponse::Ok().json(RankResponse {
        matches: result.matches,
        total_candidates: result.total_candidates,
    }))
}
