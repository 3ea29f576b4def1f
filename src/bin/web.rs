//! Single binary web server: register players, report matches, read standings and pairings.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default. Override with env: HOST, PORT.

use actix_web::{
    delete, get, post,
    web::{Data, Json},
    App, HttpResponse, HttpServer, Responder,
};
use serde::{Deserialize, Serialize};
use swiss_tournament::{
    report, MatchId, MemoryStore, PlayerId, ServerConfig, Tournament, TournamentError,
};

/// One tournament for the lifetime of the process, shared by every worker.
type AppState = Data<Tournament<MemoryStore>>;

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Serialize)]
struct CountResponse {
    count: usize,
}

#[derive(Serialize)]
struct ReportMatchResponse {
    match_id: MatchId,
}

#[derive(Deserialize)]
struct RegisterPlayerBody {
    name: String,
}

#[derive(Deserialize)]
struct ReportMatchBody {
    winner: PlayerId,
    loser: PlayerId,
}

/// Map a tournament error to 400 (caller's fault) or 500 (storage fault).
fn error_response(e: TournamentError) -> HttpResponse {
    let body = serde_json::json!({ "error": e.to_string() });
    if e.is_rejection() {
        HttpResponse::BadRequest().json(body)
    } else {
        log::error!("Storage failure: {}", e);
        HttpResponse::InternalServerError().json(body)
    }
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "swiss-tournament",
    })
}

#[get("/api/players/count")]
async fn api_count_players(state: AppState) -> HttpResponse {
    match state.count_players() {
        Ok(count) => HttpResponse::Ok().json(CountResponse { count }),
        Err(e) => error_response(e),
    }
}

/// Register a player (name is trimmed; must not be empty).
#[post("/api/players")]
async fn api_register_player(state: AppState, body: Json<RegisterPlayerBody>) -> HttpResponse {
    match state.register_player(&body.name) {
        Ok(player) => HttpResponse::Ok().json(player),
        Err(e) => error_response(e),
    }
}

/// Delete every player. Rejected while match results exist.
#[delete("/api/players")]
async fn api_delete_players(state: AppState) -> HttpResponse {
    match state.delete_players() {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e) => error_response(e),
    }
}

#[post("/api/matches")]
async fn api_report_match(state: AppState, body: Json<ReportMatchBody>) -> HttpResponse {
    match state.report_match(body.winner, body.loser) {
        Ok(match_id) => HttpResponse::Ok().json(ReportMatchResponse { match_id }),
        Err(e) => error_response(e),
    }
}

#[delete("/api/matches")]
async fn api_delete_matches(state: AppState) -> HttpResponse {
    match state.delete_matches() {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e) => error_response(e),
    }
}

#[get("/api/standings")]
async fn api_standings(state: AppState) -> HttpResponse {
    match state.player_standings() {
        Ok(standings) => HttpResponse::Ok().json(standings),
        Err(e) => error_response(e),
    }
}

/// Standings as a CSV download.
#[get("/api/standings.csv")]
async fn api_standings_csv(state: AppState) -> HttpResponse {
    let standings = match state.player_standings() {
        Ok(s) => s,
        Err(e) => return error_response(e),
    };
    match report::standings_csv(&standings) {
        Ok(csv) => HttpResponse::Ok()
            .content_type("text/csv; charset=utf-8")
            .body(csv),
        Err(e) => {
            log::error!("CSV export failed: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({ "error": e.to_string() }))
        }
    }
}

/// Next-round pairings as a CSV download.
#[get("/api/pairings.csv")]
async fn api_pairings_csv(state: AppState) -> HttpResponse {
    let pairings = match state.swiss_pairings() {
        Ok(p) => p,
        Err(e) => return error_response(e),
    };
    match report::pairings_csv(&pairings) {
        Ok(csv) => HttpResponse::Ok()
            .content_type("text/csv; charset=utf-8")
            .body(csv),
        Err(e) => {
            log::error!("CSV export failed: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({ "error": e.to_string() }))
        }
    }
}

/// Next-round pairings. With an odd player count the lowest-ranked player is left out.
#[get("/api/pairings")]
async fn api_pairings(state: AppState) -> HttpResponse {
    match state.swiss_pairings() {
        Ok(pairings) => HttpResponse::Ok().json(pairings),
        Err(e) => error_response(e),
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = ServerConfig::from_env();
    log::info!("Starting server at http://{}:{}", config.host, config.port);

    let state = Data::new(Tournament::new(MemoryStore::new()));

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .service(api_health)
            .service(api_count_players)
            .service(api_register_player)
            .service(api_delete_players)
            .service(api_report_match)
            .service(api_delete_matches)
            .service(api_standings)
            .service(api_standings_csv)
            .service(api_pairings)
            .service(api_pairings_csv)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test};
    use swiss_tournament::{Pairing, Player, Standing};

    macro_rules! app {
        ($state:expr) => {
            test::init_service(
                App::new()
                    .app_data($state.clone())
                    .service(api_health)
                    .service(api_count_players)
                    .service(api_register_player)
                    .service(api_delete_players)
                    .service(api_report_match)
                    .service(api_delete_matches)
                    .service(api_standings)
                    .service(api_standings_csv)
                    .service(api_pairings)
                    .service(api_pairings_csv),
            )
            .await
        };
    }

    fn new_state() -> AppState {
        Data::new(Tournament::new(MemoryStore::new()))
    }

    #[actix_web::test]
    async fn register_report_and_pair() {
        let state = new_state();
        let app = app!(state);

        let mut ids = Vec::new();
        for name in ["Dana", "Ann", "Cy", "Bo"] {
            let req = test::TestRequest::post()
                .uri("/api/players")
                .set_json(serde_json::json!({ "name": name }))
                .to_request();
            let player: Player = test::call_and_read_body_json(&app, req).await;
            ids.push(player.id);
        }

        // Dana beats Ann, Cy beats Bo.
        for (winner, loser) in [(ids[0], ids[1]), (ids[2], ids[3])] {
            let req = test::TestRequest::post()
                .uri("/api/matches")
                .set_json(serde_json::json!({ "winner": winner, "loser": loser }))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::OK);
        }

        let req = test::TestRequest::get().uri("/api/standings").to_request();
        let standings: Vec<Standing> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(standings.len(), 4);
        assert_eq!(standings[0].wins, 1);
        assert_eq!(standings[3].wins, 0);

        let req = test::TestRequest::get().uri("/api/pairings").to_request();
        let pairings: Vec<Pairing> = test::call_and_read_body_json(&app, req).await;
        let names: Vec<(&str, &str)> = pairings
            .iter()
            .map(|p| (p.player1_name.as_str(), p.player2_name.as_str()))
            .collect();
        assert_eq!(names, vec![("Cy", "Dana"), ("Ann", "Bo")]);
    }

    #[actix_web::test]
    async fn empty_name_is_bad_request() {
        let state = new_state();
        let app = app!(state);
        let req = test::TestRequest::post()
            .uri("/api/players")
            .set_json(serde_json::json!({ "name": "   " }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn unknown_player_in_match_is_bad_request() {
        let state = new_state();
        let app = app!(state);
        let req = test::TestRequest::post()
            .uri("/api/matches")
            .set_json(serde_json::json!({ "winner": 1, "loser": 2 }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn delete_players_requires_matches_cleared_first() {
        let state = new_state();
        let app = app!(state);
        let a = state.register_player("A").unwrap();
        let b = state.register_player("B").unwrap();
        state.report_match(a.id, b.id).unwrap();

        let req = test::TestRequest::delete().uri("/api/players").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let req = test::TestRequest::delete().uri("/api/matches").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);

        let req = test::TestRequest::delete().uri("/api/players").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);

        let req = test::TestRequest::get().uri("/api/players/count").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["count"], 0);
    }

    #[actix_web::test]
    async fn standings_csv_has_header_and_rows() {
        let state = new_state();
        let app = app!(state);
        state.register_player("Ann").unwrap();
        let req = test::TestRequest::get().uri("/api/standings.csv").to_request();
        let body = test::call_and_read_body(&app, req).await;
        let text = std::str::from_utf8(&body).unwrap();
        assert_eq!(text, "id,name,wins,matches\n1,Ann,0,0\n");
    }
}
