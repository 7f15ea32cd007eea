//! Single binary web server: JSON API over the league engine.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default. Override with env: HOST, PORT.
//! Set LEAGUE_DATA_FILE to keep the league in a JSON file instead of memory.

use actix_web::{
    delete, get, post, put,
    web::{self, Bytes, Data, Json, Path, Query},
    App, HttpResponse, HttpServer, Responder,
};
use league_tournament_web::{
    Config, EntrantId, JsonFileStore, LeagueError, LeagueService, LeagueStore, MatchId,
    MatchStatus, MemoryStore, Round,
};
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;

type AppState = Data<LeagueService>;

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct RegisterEntrantBody {
    name: String,
}

#[derive(Deserialize)]
struct EntrantPath {
    id: EntrantId,
}

#[derive(Deserialize)]
struct MatchPath {
    id: MatchId,
}

#[derive(Deserialize)]
struct PreviewQuery {
    #[serde(default)]
    shuffle: bool,
}

#[derive(Deserialize)]
struct CommitFixturesBody {
    rounds: Vec<Round>,
}

#[derive(Deserialize)]
struct MatchesQuery {
    status: Option<MatchStatus>,
}

/// Goals arrive as JSON numbers, or as numeric strings from form inputs.
#[derive(Deserialize)]
struct SubmitResultBody {
    goals_a: Value,
    goals_b: Value,
}

/// Whole numbers only; anything else is an invalid score.
fn parse_goals(v: &Value) -> Result<i64, LeagueError> {
    match v {
        Value::Number(n) => n.as_i64().ok_or(LeagueError::InvalidScore),
        Value::String(s) => s.trim().parse().map_err(|_| LeagueError::InvalidScore),
        _ => Err(LeagueError::InvalidScore),
    }
}

fn error_response(e: &LeagueError) -> HttpResponse {
    let body = serde_json::json!({ "error": e.kind(), "message": e.to_string() });
    match e {
        LeagueError::InvalidScore
        | LeagueError::EmptyName
        | LeagueError::EmptySchedule
        | LeagueError::InvalidSchedule(_) => HttpResponse::BadRequest().json(body),
        LeagueError::NotFound(_) => HttpResponse::NotFound().json(body),
        LeagueError::AlreadyScheduled
        | LeagueError::DuplicateEntrantName
        | LeagueError::RosterLocked
        | LeagueError::Conflict => HttpResponse::Conflict().json(body),
        LeagueError::StoreUnavailable(msg) => {
            log::error!("Store unavailable: {}", msg);
            HttpResponse::ServiceUnavailable().json(body)
        }
    }
}

fn respond<T: serde::Serialize>(result: Result<T, LeagueError>) -> HttpResponse {
    match result {
        Ok(v) => HttpResponse::Ok().json(v),
        Err(e) => error_response(&e),
    }
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "league-tournament-web",
    })
}

/// Registered entrants with their current statistics.
#[get("/api/entrants")]
async fn api_list_entrants(state: AppState) -> HttpResponse {
    respond(state.entrants())
}

/// Register an entrant (only before fixtures are committed).
#[post("/api/entrants")]
async fn api_register_entrant(state: AppState, body: Json<RegisterEntrantBody>) -> HttpResponse {
    respond(state.register_entrant(&body.name))
}

/// Remove an entrant (only before fixtures are committed).
#[delete("/api/entrants/{id}")]
async fn api_remove_entrant(state: AppState, path: Path<EntrantPath>) -> HttpResponse {
    respond(state.remove_entrant(path.id))
}

/// Candidate schedule for the current roster; `?shuffle=true` draws a new order.
#[get("/api/fixtures/preview")]
async fn api_preview_fixtures(state: AppState, query: Query<PreviewQuery>) -> HttpResponse {
    respond(state.preview_fixtures(query.shuffle))
}

/// Commit a schedule. An empty body commits the unshuffled schedule for the roster;
/// a body that does not parse is rejected.
#[post("/api/fixtures")]
async fn api_commit_fixtures(state: AppState, body: Bytes) -> HttpResponse {
    let rounds = if body.iter().all(u8::is_ascii_whitespace) {
        match state.preview_fixtures(false) {
            Ok(r) => r,
            Err(e) => return error_response(&e),
        }
    } else {
        match serde_json::from_slice::<CommitFixturesBody>(&body) {
            Ok(b) => b.rounds,
            Err(e) => {
                return HttpResponse::BadRequest()
                    .json(serde_json::json!({ "error": "invalid_request", "message": e.to_string() }))
            }
        }
    };
    respond(
        state
            .commit_fixtures(&rounds)
            .map(|created| serde_json::json!({ "matches_created": created })),
    )
}

/// Matches ordered by turn and round; `?status=pending` or `?status=settled` filters.
#[get("/api/matches")]
async fn api_list_matches(state: AppState, query: Query<MatchesQuery>) -> HttpResponse {
    respond(match query.status {
        Some(MatchStatus::Pending) => state.pending_matches(),
        Some(MatchStatus::Settled) => state.match_history(),
        None => state.matches(),
    })
}

/// Submit or edit a match result. Returns both entrants' refreshed records.
#[put("/api/matches/{id}/result")]
async fn api_submit_result(
    state: AppState,
    path: Path<MatchPath>,
    body: Json<SubmitResultBody>,
) -> HttpResponse {
    let goals = parse_goals(&body.goals_a).and_then(|a| parse_goals(&body.goals_b).map(|b| (a, b)));
    let (goals_a, goals_b) = match goals {
        Ok(g) => g,
        Err(e) => return error_response(&e),
    };
    respond(
        state
            .submit_result(path.id, goals_a, goals_b)
            .map(|(a, b)| serde_json::json!({ "entrant_a": a, "entrant_b": b })),
    )
}

#[get("/api/standings")]
async fn api_standings(state: AppState) -> HttpResponse {
    respond(state.standings())
}

/// Clear every match and zero all statistics. The roster is kept.
#[post("/api/reset")]
async fn api_reset(state: AppState) -> HttpResponse {
    respond(state.reset_tournament().map(|()| serde_json::json!({ "ok": true })))
}

fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(api_health)
        .service(api_list_entrants)
        .service(api_register_entrant)
        .service(api_remove_entrant)
        .service(api_preview_fixtures)
        .service(api_commit_fixtures)
        .service(api_list_matches)
        .service(api_submit_result)
        .service(api_standings)
        .service(api_reset);
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env();
    let store: Arc<dyn LeagueStore> = match &config.data_file {
        Some(path) => {
            log::info!("Using league file {}", path.display());
            Arc::new(JsonFileStore::new(path))
        }
        None => {
            log::info!("Using in-memory league (set LEAGUE_DATA_FILE to persist)");
            Arc::new(MemoryStore::new())
        }
    };
    let service = LeagueService::new(store)
        .with_ranking(config.ranking.clone())
        .with_max_commit_retries(config.max_commit_retries);
    let state = Data::new(service);

    let bind = (config.host.as_str(), config.port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    HttpServer::new(move || App::new().app_data(state.clone()).configure(configure))
        .bind(bind)?
        .run()
        .await
}
