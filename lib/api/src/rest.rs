use actix_cors::Cors;
use actix_web::{web, App, HttpResponse, HttpServer, Result as ActixResult};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use scoutx_core::{Error, Foot, PlayerId, PlayerRecord};
use scoutx_engine::{
    summarize, CategoryComparison, ProfileInput, QueryFilters, Recommendation, SkillView,
    PROFILE_FAN_OUT,
};
use scoutx_storage::ScoutContext;

#[derive(Deserialize, Default)]
struct SimilarRequest {
    max_age: Option<u32>,
    max_budget: Option<f64>,
    foot: Option<String>,
    position: Option<String>,
    limit: Option<usize>,
    fan_out: Option<usize>,
}

impl SimilarRequest {
    fn into_filters(self, default_fan_out: usize) -> Result<QueryFilters, Error> {
        let foot = match self.foot.as_deref() {
            Some(s) => Some(s.parse::<Foot>()?),
            None => None,
        };
        let defaults = QueryFilters::default();
        Ok(QueryFilters {
            position: self.position,
            max_age: self.max_age,
            max_budget: self.max_budget,
            foot,
            limit: self.limit.unwrap_or(defaults.limit),
            fan_out: self.fan_out.unwrap_or(default_fan_out),
        })
    }
}

#[derive(Deserialize)]
struct ProfileMatchRequest {
    profile: ProfileInput,
    #[serde(flatten)]
    filters: SimilarRequest,
}

#[derive(Deserialize)]
struct CompareRequest {
    left: CompareSide,
    right: CompareSide,
}

/// One comparison side: either a corpus player or a live partial profile.
#[derive(Deserialize)]
struct CompareSide {
    player: Option<u32>,
    profile: Option<ProfileInput>,
}

#[derive(Serialize)]
struct PlayerSummary {
    id: PlayerId,
    name: String,
    club: String,
    nationality: String,
    position: String,
    age: u32,
    value_eur: f64,
    overall: u32,
}

impl PlayerSummary {
    fn from_record(record: &PlayerRecord) -> Self {
        Self {
            id: record.id,
            name: record.name.clone(),
            club: record.club.clone(),
            nationality: record.nationality.clone(),
            position: record.position.clone(),
            age: record.age,
            value_eur: record.value_eur,
            overall: record.overall,
        }
    }
}

#[derive(Serialize)]
struct PlayerDetail {
    #[serde(flatten)]
    summary: PlayerSummary,
    foot: String,
    height_cm: f32,
    weight_kg: f32,
    image_url: Option<String>,
}

impl PlayerDetail {
    fn from_record(record: &PlayerRecord) -> Self {
        Self {
            summary: PlayerSummary::from_record(record),
            foot: record.foot.to_string(),
            height_cm: record.height_cm,
            weight_kg: record.weight_kg,
            image_url: record.image_url.clone(),
        }
    }
}

#[derive(Serialize)]
struct ScoredPlayer {
    #[serde(flatten)]
    summary: PlayerSummary,
    image_url: Option<String>,
    distance: f32,
    score: f32,
}

#[derive(Serialize)]
struct SimilarResponse {
    players: Vec<ScoredPlayer>,
}

#[derive(Serialize)]
struct ProfileMatchResponse {
    position: String,
    players: Vec<ScoredPlayer>,
}

#[derive(Serialize)]
struct CompareResponse {
    categories: Vec<CategoryComparison>,
}

pub struct RestApi;

impl RestApi {
    pub async fn start(context: Arc<ScoutContext>, port: u16) -> std::io::Result<()> {
        HttpServer::new(move || {
            let cors = Cors::default()
                .allow_any_origin()
                .allow_any_method()
                .allow_any_header()
                .max_age(3600);

            App::new()
                .wrap(cors)
                .app_data(web::Data::new(context.clone()))
                .route("/players", web::get().to(list_players))
                .route("/players/{id}", web::get().to(get_player))
                .route("/players/{id}/similar", web::post().to(similar_players))
                .route("/profile/match", web::post().to(match_profile))
                .route("/compare", web::post().to(compare))
        })
        .bind(("0.0.0.0", port))?
        .run()
        .await
    }
}

fn error_response(err: &Error) -> HttpResponse {
    let body = serde_json::json!({ "error": err.to_string() });
    match err {
        Error::NotFound(_) => HttpResponse::NotFound().json(body),
        Error::DataUnavailable(_) | Error::SchemaMismatch { .. } => {
            HttpResponse::BadRequest().json(body)
        }
        _ => HttpResponse::InternalServerError().json(body),
    }
}

fn scored_players(context: &ScoutContext, recommendations: &[Recommendation]) -> Vec<ScoredPlayer> {
    recommendations
        .iter()
        .filter_map(|rec| {
            context.player(rec.id).map(|record| ScoredPlayer {
                summary: PlayerSummary::from_record(record),
                image_url: record.image_url.clone(),
                distance: rec.distance,
                score: rec.score,
            })
        })
        .collect()
}

async fn list_players(context: web::Data<Arc<ScoutContext>>) -> ActixResult<HttpResponse> {
    let players: Vec<PlayerSummary> = context
        .corpus()
        .iter()
        .map(PlayerSummary::from_record)
        .collect();
    Ok(HttpResponse::Ok().json(players))
}

async fn get_player(
    context: web::Data<Arc<ScoutContext>>,
    path: web::Path<u32>,
) -> ActixResult<HttpResponse> {
    let id = PlayerId(path.into_inner());
    match context.player(id) {
        Some(record) => Ok(HttpResponse::Ok().json(PlayerDetail::from_record(record))),
        None => Ok(error_response(&Error::NotFound(id))),
    }
}

async fn similar_players(
    context: web::Data<Arc<ScoutContext>>,
    path: web::Path<u32>,
    req: web::Json<SimilarRequest>,
) -> ActixResult<HttpResponse> {
    let id = PlayerId(path.into_inner());
    let filters = match req.into_inner().into_filters(QueryFilters::default().fan_out) {
        Ok(f) => f,
        Err(e) => return Ok(error_response(&e)),
    };

    match context.recommender().similar_to(id, filters) {
        Ok(recommendations) => Ok(HttpResponse::Ok().json(SimilarResponse {
            players: scored_players(&context, &recommendations),
        })),
        Err(e) => Ok(error_response(&e)),
    }
}

async fn match_profile(
    context: web::Data<Arc<ScoutContext>>,
    req: web::Json<ProfileMatchRequest>,
) -> ActixResult<HttpResponse> {
    let ProfileMatchRequest { profile, filters } = req.into_inner();
    // The position filter comes from the classifier here, so a wider
    // fan-out than the similar-player flow pays off.
    let filters = match filters.into_filters(PROFILE_FAN_OUT) {
        Ok(f) => f,
        Err(e) => return Ok(error_response(&e)),
    };

    match context.recommender().match_profile(&profile, filters) {
        Ok(outcome) => Ok(HttpResponse::Ok().json(ProfileMatchResponse {
            position: outcome.position,
            players: scored_players(&context, &outcome.recommendations),
        })),
        Err(e) => Ok(error_response(&e)),
    }
}

async fn compare(
    context: web::Data<Arc<ScoutContext>>,
    req: web::Json<CompareRequest>,
) -> ActixResult<HttpResponse> {
    let CompareRequest { left, right } = req.into_inner();

    let left = match resolve_side(&context, &left) {
        Ok(view) => view,
        Err(e) => return Ok(error_response(&e)),
    };
    let right = match resolve_side(&context, &right) {
        Ok(view) => view,
        Err(e) => return Ok(error_response(&e)),
    };

    Ok(HttpResponse::Ok().json(CompareResponse {
        categories: summarize(left.as_ref(), right.as_ref()),
    }))
}

fn resolve_side<'a>(
    context: &'a ScoutContext,
    side: &CompareSide,
) -> Result<Box<dyn SkillView + 'a>, Error> {
    match (side.player, &side.profile) {
        (Some(id), None) => {
            let record = context
                .player(PlayerId(id))
                .ok_or(Error::NotFound(PlayerId(id)))?;
            Ok(Box::new(record.features.clone()))
        }
        (None, Some(profile)) => Ok(Box::new(profile.clone())),
        _ => Err(Error::DataUnavailable(
            "a comparison side needs exactly one of `player` or `profile`".to_string(),
        )),
    }
}
